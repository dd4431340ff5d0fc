// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Pure types and rules with no locking, I/O or HTTP concerns.
//
// ============================================================================

pub mod order;
