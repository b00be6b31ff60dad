//! `tracing`-backed logger and subscriber setup

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::traits::Logger;

static INIT: OnceCell<()> = OnceCell::new();

/// Logger that forwards every message to `tracing`
///
/// The component name is attached as a `component` field so subscribers can
/// filter on it.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: String,
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl TracingLogger {
    /// Create a logger tagged with the default component name
    pub fn new() -> Self {
        Self::with_component("courseqa")
    }

    /// Create a logger tagged with a custom component name
    pub fn with_component(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(component = %self.component, "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(component = %self.component, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(component = %self.component, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(component = %self.component, "{}", message);
    }
}

/// Install a global fmt subscriber
///
/// `RUST_LOG` wins over `default_filter` when set. Only the first call in a
/// process has any effect; later calls (or a subscriber installed elsewhere)
/// are ignored.
pub fn init_subscriber(default_filter: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init();
    });
}
