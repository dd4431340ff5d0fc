// ============================================================================
// Store Module
// ============================================================================
//
// The only owner of order state. Created once in `main` and shared with the
// HTTP layer through `web::Data`; there is no global registry.
//
// ============================================================================

mod order_store;

pub use order_store::{OrderStore, OrderSummary, StatusChange};
