use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::records::{Customer, CustomerCompany, Order, OrderItem};
use crate::schema::{order_items, orders};

// ── Relational rows ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub order_name: String,
    pub customer_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub id: i32,
    pub order_name: String,
    pub customer_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: i32,
    pub order_id: i32,
    pub price_per_unit: f64,
    pub quantity: i32,
    pub product: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub id: i32,
    pub order_id: i32,
    pub price_per_unit: f64,
    pub quantity: i32,
    pub product: String,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: row.id,
            order_name: row.order_name,
            customer_id: row.customer_id,
            created_at: row.created_at,
        }
    }
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        OrderItem {
            id: row.id,
            order_id: row.order_id,
            price_per_unit: row.price_per_unit,
            quantity: row.quantity,
            product: row.product,
        }
    }
}

// ── Document-store documents ─────────────────────────────────────────────────

// Unknown fields (e.g. Mongo's `_id`) are ignored on deserialization; only
// `user_id` and `company_id` are required of a document.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDoc {
    pub user_id: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: String,
    pub company_id: i32,
    #[serde(default)]
    pub credit_cards: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCompanyDoc {
    pub company_id: i32,
    #[serde(default)]
    pub company_name: String,
}

impl From<CustomerDoc> for Customer {
    fn from(doc: CustomerDoc) -> Self {
        Customer {
            user_id: doc.user_id,
            login: doc.login,
            name: doc.name,
            company_id: doc.company_id,
            credit_cards: doc.credit_cards,
        }
    }
}

impl From<CustomerCompanyDoc> for CustomerCompany {
    fn from(doc: CustomerCompanyDoc) -> Self {
        CustomerCompany {
            company_id: doc.company_id,
            company_name: doc.company_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, from_document};

    use super::*;

    #[test]
    fn customer_doc_ignores_unknown_fields_and_defaults_missing_ones() {
        let document = doc! {
            "_id": mongodb::bson::oid::ObjectId::new(),
            "user_id": "c1",
            "name": "Alice",
            "company_id": 5,
            "password": 1234,
        };

        let parsed: CustomerDoc = from_document(document).expect("valid customer document");
        assert_eq!(parsed.user_id, "c1");
        assert_eq!(parsed.name, "Alice");
        assert_eq!(parsed.company_id, 5);
        assert_eq!(parsed.login, "");
        assert_eq!(parsed.credit_cards, "");
    }

    #[test]
    fn order_row_converts_to_domain_record() {
        use chrono::TimeZone;

        let row = OrderRow {
            id: 1,
            order_name: "first order".to_string(),
            customer_id: "c1".to_string(),
            created_at: chrono::Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 0).unwrap(),
        };

        let order = Order::from(row);
        assert_eq!(order.id, 1);
        assert_eq!(order.customer_id, "c1");
    }
}
