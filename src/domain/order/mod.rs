// ============================================================================
// Order Domain - Business Logic for Orders
// ============================================================================
//
// This module contains ALL Order-specific rules:
// - Value objects (OrderId, OrderItem, OrderStatus and its transition table)
// - Commands (NewOrder, StatusUpdate) with field-level validation
// - Errors (OrderError enum)
// - Aggregate (Order entity and its status changes)
//
// Storage and concurrency live in `crate::store`.
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
