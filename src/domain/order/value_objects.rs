use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Store-assigned order identifier. Starts at 1 and only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl OrderId {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn default_quantity() -> u32 {
    1
}

/// A single line of an order. Descriptive only; the order total is supplied separately.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

impl OrderItem {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price: None,
        }
    }

    #[cfg(test)]
    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    /// Validate a single item; `index` is its position in the order for error reporting
    pub fn validate(&self, index: usize) -> Result<(), OrderError> {
        if self.name.trim().is_empty() {
            return Err(OrderError::EmptyItemName(index));
        }

        if self.quantity == 0 {
            return Err(OrderError::InvalidQuantity {
                index,
                quantity: self.quantity,
            });
        }

        if let Some(price) = self.unit_price {
            if !price.is_finite() || price < 0.0 {
                return Err(OrderError::InvalidUnitPrice { index, price });
            }
        }

        Ok(())
    }
}

/// Lifecycle stage of an order.
///
/// ```text
/// PLACED -> PREPARING -> OUT_FOR_DELIVERY -> DELIVERED
/// PLACED | PREPARING | OUT_FOR_DELIVERY -> CANCELLED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    #[cfg(test)]
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Placed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether an order in `self` may move to `next`. Same-state moves are never allowed.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        if self.is_terminal() {
            return false;
        }

        matches!(
            (*self, next),
            (Placed, Preparing)
                | (Preparing, OutForDelivery)
                | (OutForDelivery, Delivered)
                | (Placed | Preparing | OutForDelivery, Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_sequence() {
        let first = OrderId::first();
        assert_eq!(first, OrderId(1));
        assert_eq!(first.next(), OrderId(2));
        assert_eq!(first.to_string(), "1");
    }

    #[test]
    fn test_order_item_quantity_defaults_to_one() {
        let item: OrderItem = serde_json::from_str(r#"{"name":"Pizza"}"#).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price, None);
    }

    #[test]
    fn test_order_item_validation() {
        assert!(OrderItem::new("Pizza", 2).validate(0).is_ok());
        assert!(OrderItem::new("Pizza", 1).with_unit_price(0.0).validate(0).is_ok());

        assert!(matches!(
            OrderItem::new("  ", 1).validate(3),
            Err(OrderError::EmptyItemName(3))
        ));
        assert!(matches!(
            OrderItem::new("Pizza", 0).validate(0),
            Err(OrderError::InvalidQuantity { index: 0, quantity: 0 })
        ));
        assert!(matches!(
            OrderItem::new("Pizza", 1).with_unit_price(-1.5).validate(1),
            Err(OrderError::InvalidUnitPrice { index: 1, .. })
        ));
        assert!(matches!(
            OrderItem::new("Pizza", 1).with_unit_price(f64::NAN).validate(0),
            Err(OrderError::InvalidUnitPrice { .. })
        ));
    }

    #[test]
    fn test_order_status_wire_names() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let deserialized: OrderStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, deserialized);
        }

        assert!(serde_json::from_str::<OrderStatus>("\"Pending\"").is_err());
    }

    #[test]
    fn test_permitted_transitions() {
        use OrderStatus::*;

        let permitted = [
            (Placed, Preparing),
            (Preparing, OutForDelivery),
            (OutForDelivery, Delivered),
            (Placed, Cancelled),
            (Preparing, Cancelled),
            (OutForDelivery, Cancelled),
        ];

        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    permitted.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_terminal_states_have_no_exits() {
        for status in OrderStatus::ALL.into_iter().filter(|s| s.is_terminal()) {
            assert!(OrderStatus::ALL.iter().all(|next| !status.can_transition_to(*next)));
        }
    }
}
