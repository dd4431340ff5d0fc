// ============================================================================
// API Module - HTTP transport over the OrderStore
// ============================================================================
//
// Routes:
// - POST /orders           create an order        (201)
// - GET  /orders           list all orders        (200)
// - GET  /orders/summary   count and total amount (200)
// - GET  /orders/{id}      fetch one order        (200 / 404)
// - PUT  /orders/{id}      change order status    (200 / 404 / 409 / 422)
//
// `/orders/summary` is registered before `/orders/{id}`.
//
// ============================================================================

mod error;
mod handlers;

use actix_web::web;

pub use error::ApiError;

/// JSON extractor settings: malformed bodies become `400 BAD_REQUEST` in the API error shape
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        ApiError::bad_request(err.to_string()).into()
    })
}

/// Register order routes. Expects `web::Data<OrderStore>` and `web::Data<Metrics>` as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource("/orders")
                .route(web::post().to(handlers::create_order))
                .route(web::get().to(handlers::list_orders)),
        )
        .service(web::resource("/orders/summary").route(web::get().to(handlers::order_summary)))
        .service(
            web::resource("/orders/{id}")
                .route(web::get().to(handlers::get_order))
                .route(web::put().to(handlers::update_order_status)),
        );
}
