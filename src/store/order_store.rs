use std::collections::BTreeMap;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::domain::order::{NewOrder, Order, OrderError, OrderId, OrderStatus, StatusUpdate};

// ============================================================================
// OrderStore - In-memory, concurrency-safe order registry
// ============================================================================
//
// A single RwLock guards both the orders and the id counter:
// - Writers (create, update_status) hold the write lock for the whole
//   check-then-mutate sequence, so readers never see a half-applied change
//   and two creates can never observe the same counter value.
// - Readers (list, get, summary) share the read lock and clone out snapshots.
// - No method holds the lock across another locking call.
//
// Ids increase monotonically, so BTreeMap key order is creation order.
//
// ============================================================================

/// Aggregate figures over every order in the store
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_count: usize,
    pub total_amount: f64,
}

/// Result of a successful status update: the updated order snapshot and its prior status
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub previous: OrderStatus,
    pub order: Order,
}

struct Registry {
    orders: BTreeMap<OrderId, Order>,
    next_id: OrderId,
    // Sum of `total_amount` in insertion order; amounts never change after creation
    total_amount: f64,
}

pub struct OrderStore {
    registry: RwLock<Registry>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(Registry {
                orders: BTreeMap::new(),
                next_id: OrderId::first(),
                total_amount: 0.0,
            }),
        }
    }

    /// Validate and insert a new order in `PLACED` status
    pub async fn create_order(&self, new_order: NewOrder) -> Result<Order, OrderError> {
        new_order.validate()?;

        let mut registry = self.registry.write().await;

        let total_amount = registry.total_amount + new_order.total_amount;
        if !total_amount.is_finite() {
            return Err(OrderError::TotalAmountOverflow(new_order.total_amount));
        }

        let id = registry.next_id;
        registry.next_id = id.next();
        registry.total_amount = total_amount;

        let order = Order::place(id, new_order, Utc::now());
        registry.orders.insert(id, order.clone());

        tracing::info!(
            order_id = %order.id,
            customer_name = %order.customer_name,
            item_count = order.items.len(),
            total_amount = order.total_amount,
            "✅ Order placed"
        );

        Ok(order)
    }

    /// Snapshot of all orders in creation order
    pub async fn list_orders(&self) -> Vec<Order> {
        let registry = self.registry.read().await;
        registry.orders.values().cloned().collect()
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        let registry = self.registry.read().await;
        registry
            .orders
            .get(&id)
            .cloned()
            .ok_or(OrderError::NotFound(id))
    }

    /// Move an order to a new status. Returns the updated snapshot and the status it left.
    pub async fn update_status(&self, id: OrderId, update: StatusUpdate) -> Result<StatusChange, OrderError> {
        let mut registry = self.registry.write().await;
        let order = registry
            .orders
            .get_mut(&id)
            .ok_or(OrderError::NotFound(id))?;

        let previous = order.status;
        order.apply_status(&update, Utc::now())?;

        tracing::info!(
            order_id = %id,
            from = %previous,
            to = %order.status,
            reason = ?order.cancellation_reason,
            "Order status changed"
        );

        Ok(StatusChange {
            previous,
            order: order.clone(),
        })
    }

    /// Count and total amount over one consistent view of the registry
    pub async fn summary(&self) -> OrderSummary {
        let registry = self.registry.read().await;
        OrderSummary {
            order_count: registry.orders.len(),
            total_amount: registry.total_amount,
        }
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
