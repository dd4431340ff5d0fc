use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::value_objects::{OrderItem, OrderStatus};

// ============================================================================
// Order Commands - Represent user intent
// ============================================================================

/// Input for creating an order. The store assigns id, status and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
}

impl NewOrder {
    #[cfg(test)]
    pub fn new(customer_name: impl Into<String>, items: Vec<OrderItem>, total_amount: f64) -> Self {
        Self {
            customer_name: customer_name.into(),
            items,
            total_amount,
        }
    }

    /// Field-level validation; does not depend on store state
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.customer_name.trim().is_empty() {
            return Err(OrderError::EmptyCustomerName);
        }

        if self.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }

        for (index, item) in self.items.iter().enumerate() {
            item.validate(index)?;
        }

        if !self.total_amount.is_finite() || self.total_amount < 0.0 {
            return Err(OrderError::InvalidTotalAmount(self.total_amount));
        }

        Ok(())
    }
}

/// Input for moving an order to a new status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
    #[serde(default, alias = "reason")]
    pub cancellation_reason: Option<String>,
}

impl StatusUpdate {
    #[cfg(test)]
    pub fn to(status: OrderStatus) -> Self {
        Self {
            status,
            cancellation_reason: None,
        }
    }

    #[cfg(test)]
    pub fn cancel(reason: impl Into<String>) -> Self {
        Self {
            status: OrderStatus::Cancelled,
            cancellation_reason: Some(reason.into()),
        }
    }

    /// The reason to store after this update: the supplied one when cancelling, none otherwise
    pub fn effective_reason(&self) -> Result<Option<String>, OrderError> {
        if self.status != OrderStatus::Cancelled {
            return Ok(None);
        }

        match &self.cancellation_reason {
            Some(reason) if !reason.trim().is_empty() => Ok(Some(reason.clone())),
            _ => Err(OrderError::MissingCancellationReason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> Vec<OrderItem> {
        vec![OrderItem::new("Pizza", 1)]
    }

    #[test]
    fn test_valid_new_order() {
        assert!(NewOrder::new("Alice", pizza(), 20.0).validate().is_ok());
        assert!(NewOrder::new("Alice", pizza(), 0.0).validate().is_ok());
    }

    #[test]
    fn test_new_order_rejects_bad_input() {
        assert_eq!(
            NewOrder::new("", pizza(), 20.0).validate(),
            Err(OrderError::EmptyCustomerName)
        );
        assert_eq!(
            NewOrder::new("   ", pizza(), 20.0).validate(),
            Err(OrderError::EmptyCustomerName)
        );
        assert_eq!(
            NewOrder::new("Alice", vec![], 20.0).validate(),
            Err(OrderError::EmptyItems)
        );
        assert_eq!(
            NewOrder::new("Alice", pizza(), -0.01).validate(),
            Err(OrderError::InvalidTotalAmount(-0.01))
        );
        assert!(matches!(
            NewOrder::new("Alice", pizza(), f64::INFINITY).validate(),
            Err(OrderError::InvalidTotalAmount(_))
        ));
        assert_eq!(
            NewOrder::new("Alice", vec![OrderItem::new("Pizza", 1), OrderItem::new("", 1)], 5.0)
                .validate(),
            Err(OrderError::EmptyItemName(1))
        );
    }

    #[test]
    fn test_reason_ignored_for_non_cancel_updates() {
        let update = StatusUpdate {
            status: OrderStatus::Preparing,
            cancellation_reason: Some("ignored".to_string()),
        };
        assert_eq!(update.effective_reason(), Ok(None));
    }

    #[test]
    fn test_cancel_requires_reason() {
        assert_eq!(
            StatusUpdate::to(OrderStatus::Cancelled).effective_reason(),
            Err(OrderError::MissingCancellationReason)
        );
        assert_eq!(
            StatusUpdate::cancel("").effective_reason(),
            Err(OrderError::MissingCancellationReason)
        );
        assert_eq!(
            StatusUpdate::cancel(" \t").effective_reason(),
            Err(OrderError::MissingCancellationReason)
        );
        assert_eq!(
            StatusUpdate::cancel("changed mind").effective_reason(),
            Ok(Some("changed mind".to_string()))
        );
    }

    #[test]
    fn test_status_update_accepts_reason_alias() {
        let update: StatusUpdate =
            serde_json::from_str(r#"{"status":"CANCELLED","reason":"late"}"#).unwrap();
        assert_eq!(update, StatusUpdate::cancel("late"));

        let update: StatusUpdate = serde_json::from_str(r#"{"status":"PREPARING"}"#).unwrap();
        assert_eq!(update, StatusUpdate::to(OrderStatus::Preparing));
    }
}
