use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use super::value_objects::{OrderId, OrderItem, OrderStatus};
use super::commands::{NewOrder, StatusUpdate};
use super::errors::OrderError;

// ============================================================================
// Order - Domain Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    // Identity
    pub id: OrderId,

    // Fixed at creation
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,

    // Current State
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,

    // Audit Trail
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build a freshly placed order. Callers must have validated `new_order`.
    pub fn place(id: OrderId, new_order: NewOrder, now: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: new_order.customer_name,
            items: new_order.items,
            total_amount: new_order.total_amount,
            status: OrderStatus::Placed,
            cancellation_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a status change, enforcing the transition table and the cancellation reason rule.
    ///
    /// On error the order is left untouched.
    pub fn apply_status(&mut self, update: &StatusUpdate, now: DateTime<Utc>) -> Result<(), OrderError> {
        if !self.status.can_transition_to(update.status) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: update.status,
            });
        }

        let reason = update.effective_reason()?;

        self.status = update.status;
        self.cancellation_reason = reason;
        self.updated_at = now;

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
