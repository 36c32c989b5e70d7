use actix_web::web;
use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::OrderStore;
use crate::domain::records::{Order, OrderItem};
use crate::schema::{order_items, orders};

use super::models::{OrderItemRow, OrderRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::StoreUnavailable {
            store: "relational",
            reason: e.to_string(),
        }
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::StoreUnavailable {
            store: "relational",
            reason: e.to_string(),
        }
    }
}

// ── Store ────────────────────────────────────────────────────────────────────

/// Relational store adapter. Diesel is blocking, so every query runs on the
/// actix blocking pool via `web::block`.
pub struct DieselOrderStore {
    pool: DbPool,
}

impl DieselOrderStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for DieselOrderStore {
    async fn fetch_orders(&self) -> Result<Vec<Order>, DomainError> {
        let pool = self.pool.clone();
        let rows = web::block(move || -> Result<Vec<OrderRow>, DomainError> {
            let mut conn = pool.get()?;
            Ok(orders::table
                .select(OrderRow::as_select())
                .order(orders::id.asc())
                .load(&mut conn)?)
        })
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))??;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn fetch_order_items(&self) -> Result<Vec<OrderItem>, DomainError> {
        let pool = self.pool.clone();
        let rows = web::block(move || -> Result<Vec<OrderItemRow>, DomainError> {
            let mut conn = pool.get()?;
            Ok(order_items::table
                .select(OrderItemRow::as_select())
                .order(order_items::id.asc())
                .load(&mut conn)?)
        })
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))??;

        Ok(rows.into_iter().map(OrderItem::from).collect())
    }
}
