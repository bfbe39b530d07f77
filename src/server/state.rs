use std::sync::Arc;
use crate::server::store::OrderStore;

#[derive(Clone)]
pub(crate) struct AppState {
    order_store: Arc<OrderStore>,
}

impl AppState {
    pub fn new(order_store: OrderStore) -> Self {
        Self {
            order_store: Arc::new(order_store),
        }
    }

    pub fn get_order_store(&self) -> &OrderStore {
        &self.order_store
    }
}
