use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::aggregation_service::AggregationService;
use crate::domain::records::AggregatedOrder;
use crate::errors::AppError;

// ── Response DTO ─────────────────────────────────────────────────────────────

/// Wire shape of one aggregated order. Amounts are serialized as strings,
/// which is what the consuming client expects.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AggregatedOrderResponse {
    pub order_name: String,
    pub customer_company: String,
    pub customer_name: String,
    /// e.g. "Jan 2th, 3:04 PM"
    pub created_at: String,
    pub delivered_amount: String,
    pub total_amount: String,
}

impl From<AggregatedOrder> for AggregatedOrderResponse {
    fn from(record: AggregatedOrder) -> Self {
        AggregatedOrderResponse {
            order_name: record.order_name,
            customer_company: record.customer_company,
            customer_name: record.customer_name,
            created_at: record.created_at,
            delivered_amount: record.delivered_amount,
            total_amount: record.total_amount,
        }
    }
}

// ── Handler ──────────────────────────────────────────────────────────────────

/// GET /orders
///
/// Fetches every order and order item from the relational store and every
/// customer and company from the document store, joins them in memory and
/// returns one denormalized record per order. An unavailable store yields a
/// 502/503 without taking the process down.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Denormalized records for all orders", body = [AggregatedOrderResponse]),
        (status = 502, description = "Upstream store unavailable"),
        (status = 503, description = "Upstream store timed out"),
    ),
    tag = "orders"
)]
pub async fn get_orders(
    service: web::Data<AggregationService>,
) -> Result<HttpResponse, AppError> {
    let records = service.aggregate_orders().await.map_err(|e| {
        log::error!("order aggregation failed: {e}");
        AppError::from(e)
    })?;

    let body: Vec<AggregatedOrderResponse> = records.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok()
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .json(body))
}
