//! Order request handlers. Each maps one route onto one `OrderStore` operation.

use actix_web::{web, HttpResponse};
use std::time::Instant;

use crate::domain::order::{NewOrder, OrderError, OrderId, StatusUpdate};
use crate::metrics::Metrics;
use crate::store::{OrderStore, OrderSummary, StatusChange};

use super::error::ApiError;

fn record_outcome<T>(metrics: &Metrics, operation: &str, started: Instant, result: &Result<T, OrderError>) {
    metrics.observe_duration(operation, started.elapsed().as_secs_f64());
    if let Err(e) = result {
        tracing::warn!(operation, error = %e, "Order operation rejected");
        metrics.record_failure(operation, e.kind());
    }
}

/// `POST /orders`
pub async fn create_order(
    store: web::Data<OrderStore>,
    metrics: web::Data<Metrics>,
    body: web::Json<NewOrder>,
) -> Result<HttpResponse, ApiError> {
    let started = Instant::now();
    let result = store.create_order(body.into_inner()).await;
    record_outcome(&metrics, "create_order", started, &result);

    let order = result?;
    metrics.record_order_created();

    Ok(HttpResponse::Created().json(order))
}

/// `GET /orders`
pub async fn list_orders(
    store: web::Data<OrderStore>,
    metrics: web::Data<Metrics>,
) -> HttpResponse {
    let started = Instant::now();
    let orders = store.list_orders().await;
    metrics.observe_duration("list_orders", started.elapsed().as_secs_f64());

    tracing::debug!(count = orders.len(), "Listing orders");
    HttpResponse::Ok().json(orders)
}

/// `GET /orders/summary`
pub async fn order_summary(
    store: web::Data<OrderStore>,
    metrics: web::Data<Metrics>,
) -> HttpResponse {
    let started = Instant::now();
    let summary: OrderSummary = store.summary().await;
    metrics.observe_duration("summary", started.elapsed().as_secs_f64());

    HttpResponse::Ok().json(summary)
}

/// `GET /orders/{id}`
pub async fn get_order(
    store: web::Data<OrderStore>,
    metrics: web::Data<Metrics>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let id = OrderId(path.into_inner());

    let started = Instant::now();
    let result = store.get_order(id).await;
    record_outcome(&metrics, "get_order", started, &result);

    Ok(HttpResponse::Ok().json(result?))
}

/// `PUT /orders/{id}`
pub async fn update_order_status(
    store: web::Data<OrderStore>,
    metrics: web::Data<Metrics>,
    path: web::Path<u64>,
    body: web::Json<StatusUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = OrderId(path.into_inner());

    let started = Instant::now();
    let result = store.update_status(id, body.into_inner()).await;
    record_outcome(&metrics, "update_status", started, &result);

    let change: StatusChange = result?;
    metrics.record_transition(change.previous, change.order.status);

    Ok(HttpResponse::Ok().json(change.order))
}
