// Private module declaration
mod server;

use prometheus::{
    HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry,
};

use crate::domain::order::{OrderErrorKind, OrderStatus};

// Re-export for public API
pub use server::configure;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Orders placed
// - Status transitions (by from/to status)
// - Rejected operations (by operation and error kind)
// - Store operation latency
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the service
pub struct Metrics {
    registry: Registry,

    pub orders_created: IntCounter,
    pub status_transitions: IntCounterVec,
    pub operation_failures: IntCounterVec,
    pub operation_duration: HistogramVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_created = IntCounter::new(
            "orders_created_total",
            "Total orders placed",
        )?;
        registry.register(Box::new(orders_created.clone()))?;

        let status_transitions = IntCounterVec::new(
            Opts::new("order_status_transitions_total", "Order status transitions"),
            &["from", "to"],
        )?;
        registry.register(Box::new(status_transitions.clone()))?;

        let operation_failures = IntCounterVec::new(
            Opts::new("order_operation_failures_total", "Rejected order operations"),
            &["operation", "kind"],
        )?;
        registry.register(Box::new(operation_failures.clone()))?;

        let operation_duration = HistogramVec::new(
            HistogramOpts::new("order_operation_duration_seconds", "Order store operation duration")
                .buckets(vec![0.00001, 0.0001, 0.001, 0.005, 0.01, 0.05, 0.1]),
            &["operation"],
        )?;
        registry.register(Box::new(operation_duration.clone()))?;

        Ok(Self {
            registry,
            orders_created,
            status_transitions,
            operation_failures,
            operation_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_order_created(&self) {
        self.orders_created.inc();
    }

    pub fn record_transition(&self, from: OrderStatus, to: OrderStatus) {
        self.status_transitions.with_label_values(&[from.as_str(), to.as_str()]).inc();
    }

    pub fn record_failure(&self, operation: &str, kind: OrderErrorKind) {
        self.operation_failures.with_label_values(&[operation, kind.as_str()]).inc();
    }

    pub fn observe_duration(&self, operation: &str, duration_secs: f64) {
        self.operation_duration.with_label_values(&[operation]).observe(duration_secs);
    }
}
