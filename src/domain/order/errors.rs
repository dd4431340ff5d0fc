use super::value_objects::{OrderId, OrderStatus};

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Customer name cannot be empty")]
    EmptyCustomerName,

    #[error("Order items cannot be empty")]
    EmptyItems,

    #[error("Item {0} has an empty name")]
    EmptyItemName(usize),

    #[error("Item {index} has invalid quantity: {quantity}")]
    InvalidQuantity { index: usize, quantity: u32 },

    #[error("Item {index} has invalid unit price: {price}")]
    InvalidUnitPrice { index: usize, price: f64 },

    #[error("Total amount must be a non-negative number, got {0}")]
    InvalidTotalAmount(f64),

    #[error("Total amount {0} would overflow the combined order total")]
    TotalAmountOverflow(f64),

    #[error("A cancellation reason is required to cancel an order")]
    MissingCancellationReason,

    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}

/// Coarse classification used by callers to decide how to report an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderErrorKind {
    Validation,
    NotFound,
    InvalidTransition,
}

impl OrderErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderErrorKind::Validation => "validation",
            OrderErrorKind::NotFound => "not_found",
            OrderErrorKind::InvalidTransition => "invalid_transition",
        }
    }
}

impl OrderError {
    pub fn kind(&self) -> OrderErrorKind {
        match self {
            OrderError::NotFound(_) => OrderErrorKind::NotFound,
            OrderError::InvalidTransition { .. } => OrderErrorKind::InvalidTransition,
            OrderError::EmptyCustomerName
            | OrderError::EmptyItems
            | OrderError::EmptyItemName(_)
            | OrderError::InvalidQuantity { .. }
            | OrderError::InvalidUnitPrice { .. }
            | OrderError::InvalidTotalAmount(_)
            | OrderError::TotalAmountOverflow(_)
            | OrderError::MissingCancellationReason => OrderErrorKind::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(OrderError::EmptyItems.kind(), OrderErrorKind::Validation);
        assert_eq!(
            OrderError::TotalAmountOverflow(1e308).kind(),
            OrderErrorKind::Validation
        );
        assert_eq!(
            OrderError::MissingCancellationReason.kind(),
            OrderErrorKind::Validation
        );
        assert_eq!(OrderError::NotFound(OrderId(7)).kind(), OrderErrorKind::NotFound);
        assert_eq!(
            OrderError::InvalidTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Cancelled,
            }
            .kind(),
            OrderErrorKind::InvalidTransition
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(OrderError::NotFound(OrderId(7)).to_string(), "Order not found: 7");
        assert_eq!(
            OrderError::InvalidTransition {
                from: OrderStatus::Preparing,
                to: OrderStatus::Delivered,
            }
            .to_string(),
            "Cannot move order from PREPARING to DELIVERED"
        );
    }
}
