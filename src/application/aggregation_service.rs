use std::sync::Arc;

use crate::domain::aggregate;
use crate::domain::errors::DomainError;
use crate::domain::ports::{CustomerStore, OrderStore};
use crate::domain::records::AggregatedOrder;

/// Orchestrates the per-request flow: fetch all four source collections,
/// then join them in memory. Store handles are injected at construction so
/// the HTTP layer never touches a concrete client.
pub struct AggregationService {
    orders: Arc<dyn OrderStore>,
    customers: Arc<dyn CustomerStore>,
}

impl AggregationService {
    pub fn new(orders: Arc<dyn OrderStore>, customers: Arc<dyn CustomerStore>) -> Self {
        Self { orders, customers }
    }

    /// Fetch orders, order items, customers and companies (sequentially,
    /// in full) and build one denormalized record per order. A fetch
    /// failure from either store fails the whole request; lookup misses
    /// do not.
    pub async fn aggregate_orders(&self) -> Result<Vec<AggregatedOrder>, DomainError> {
        let orders = self.orders.fetch_orders().await?;
        let items = self.orders.fetch_order_items().await?;
        let customers = self.customers.fetch_customers().await?;
        let companies = self.customers.fetch_companies().await?;

        Ok(aggregate::aggregate_orders(&orders, &items, &customers, &companies))
    }
}
