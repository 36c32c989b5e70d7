use async_trait::async_trait;

use super::errors::DomainError;
use super::records::{Customer, CustomerCompany, Order, OrderItem};

/// Full-table reads against the relational store. No filtering or
/// pagination; the aggregation joins everything in memory.
#[async_trait]
pub trait OrderStore: Send + Sync + 'static {
    async fn fetch_orders(&self) -> Result<Vec<Order>, DomainError>;
    async fn fetch_order_items(&self) -> Result<Vec<OrderItem>, DomainError>;
}

/// Full-collection reads against the document store.
#[async_trait]
pub trait CustomerStore: Send + Sync + 'static {
    async fn fetch_customers(&self) -> Result<Vec<Customer>, DomainError>;
    async fn fetch_companies(&self) -> Result<Vec<CustomerCompany>, DomainError>;
}
