use chrono::{DateTime, Utc};

/// An order as held by the relational store.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i32,
    pub order_name: String,
    pub customer_id: String,
    pub created_at: DateTime<Utc>,
}

/// A line item belonging to an order. One order may have several items,
/// but the aggregation only ever consults the first match.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub price_per_unit: f64,
    pub quantity: i32,
    pub product: String,
}

/// A customer document from the document store. `user_id` is the external
/// string key that orders reference.
#[derive(Debug, Clone)]
pub struct Customer {
    pub user_id: String,
    pub login: String,
    pub name: String,
    pub company_id: i32,
    pub credit_cards: String,
}

#[derive(Debug, Clone)]
pub struct CustomerCompany {
    pub company_id: i32,
    pub company_name: String,
}

/// The denormalized per-order record returned by `GET /orders`. Built
/// per-request and never persisted. Amounts and the creation time are
/// already rendered as strings, matching the wire contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedOrder {
    pub order_name: String,
    pub customer_company: String,
    pub customer_name: String,
    pub created_at: String,
    pub delivered_amount: String,
    pub total_amount: String,
}
