use tokio::sync::RwLock;
use crate::server::model::order::{Order, OrderData, OrderId};

/// In-memory order list, lives as long as the process.
#[derive(Debug, Default)]
pub(crate) struct OrderStore {
    /// orders in insertion order, `orders[i].id == i + 1`
    orders: RwLock<Vec<Order>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order and return its id.
    ///
    /// Id allocation and the append happen under one write guard, so
    /// concurrent submissions never share or skip an id.
    pub async fn submit(&self, data: OrderData) -> OrderId {
        let mut orders = self.orders.write().await;
        let id = orders.len() as OrderId + 1;
        orders.push(Order { id, data });
        id
    }

    /// Snapshot of every order in insertion order.
    pub async fn list(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }
}
