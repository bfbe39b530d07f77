use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, info, warn};
use serde_json::Value;
use crate::server::controller::error::CustomError;
use crate::server::model::order::{validate_payload, PostOrderResponse};
use crate::server::state::AppState;

#[post("/api/order")]
/// accept an order and assign it the next id
async fn post_order(body: web::Json<Value>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let order_data = match validate_payload(body.into_inner()) {
        Ok(order_data) => order_data,
        Err(reason) => {
            warn!("post_order rejected payload, {:?}", reason);
            return Err(CustomError::InvalidPayload);
        }
    };
    debug!("order payload={:?}", order_data);

    let order_id = data.get_order_store().submit(order_data).await;
    info!("new order received, order_id={}", order_id);

    Ok(HttpResponse::Created().json(PostOrderResponse::ok(order_id)))
}

#[get("/api/orders")]
/// list every stored order in insertion order
async fn get_orders(data: web::Data<AppState>) -> impl Responder {
    let store = data.get_order_store();
    debug!("listing orders, count={}", store.len().await);
    web::Json(store.list().await)
}
