use serde::Serialize;
use serde_json::{Map, Value};

pub(crate) type OrderId = u64;

/// Caller supplied order body, kept verbatim.
pub(crate) type OrderData = Map<String, Value>;

/// key every submitted payload has to carry
pub(crate) const ITEMS_KEY: &str = "items";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Order {
    pub id: OrderId,
    pub data: OrderData,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostOrderResponse {
    pub status: &'static str,
    pub order_id: OrderId,
}

impl PostOrderResponse {
    pub fn ok(order_id: OrderId) -> Self {
        Self {
            status: "ok",
            order_id,
        }
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum PayloadRejection {
    NotAnObject,
    Empty,
    MissingItems,
}

/// Accept only non-empty json objects that carry an `items` key.
/// The value under `items` is not inspected.
pub(crate) fn validate_payload(payload: Value) -> Result<OrderData, PayloadRejection> {
    let Value::Object(data) = payload else {
        return Err(PayloadRejection::NotAnObject);
    };
    if data.is_empty() {
        return Err(PayloadRejection::Empty);
    }
    if !data.contains_key(ITEMS_KEY) {
        return Err(PayloadRejection::MissingItems);
    }
    Ok(data)
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use super::*;

    #[test]
    fn accepts_object_with_items() {
        let data = validate_payload(json!({"items": [{"name": "pizza", "qty": 2}], "total": 18.5})).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data["items"], json!([{"name": "pizza", "qty": 2}]));
    }

    #[test]
    fn items_value_is_not_inspected() {
        assert!(validate_payload(json!({"items": null})).is_ok());
        assert!(validate_payload(json!({"items": []})).is_ok());
        assert!(validate_payload(json!({"items": "anything"})).is_ok());
    }

    #[test]
    fn rejections() {
        assert_eq!(validate_payload(json!({})), Err(PayloadRejection::Empty));
        assert_eq!(validate_payload(json!({"foo": 1})), Err(PayloadRejection::MissingItems));
        assert_eq!(validate_payload(json!(["items"])), Err(PayloadRejection::NotAnObject));
        assert_eq!(validate_payload(json!("items")), Err(PayloadRejection::NotAnObject));
        assert_eq!(validate_payload(Value::Null), Err(PayloadRejection::NotAnObject));
    }

    #[test]
    fn order_serializes_as_id_and_data() {
        let order = Order {
            id: 1,
            data: validate_payload(json!({"items": [{"name": "pizza", "qty": 2}]})).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({"id": 1, "data": {"items": [{"name": "pizza", "qty": 2}]}})
        );
        assert_eq!(
            serde_json::to_value(PostOrderResponse::ok(3)).unwrap(),
            json!({"status": "ok", "order_id": 3})
        );
    }
}
