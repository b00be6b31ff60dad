//! Model provider implementations
//!
//! The tool loop talks to models through the `Provider` trait: one complete
//! request in, one complete response (stop reason + content blocks) out.
//!
//! `GenaiProvider` covers every API the `genai` crate speaks. Auth flows
//! through our `SecretStore`, not genai's env var lookup.
//!
//! The `MockProvider` is kept for testing purposes.

mod traits;
mod error;
mod genai_adapter;
mod genai_provider;
mod mock;

// Core traits and types
pub use traits::{ChatRequest, Provider, ProviderModelConfig};
pub use error::{ProviderError, ProviderResult};

pub use genai_provider::GenaiProvider;

// Mock provider for testing
pub use mock::{MockProvider, MockMode};

use crate::logging::Logger;
use std::sync::Arc;
use std::time::Duration;

/// Create a provider for the given provider ID
///
/// `mock` yields an echoing `MockProvider`; everything else goes through genai.
pub fn create_provider(
    provider_id: &str,
    timeout: Option<Duration>,
    logger: Arc<dyn Logger>,
) -> Arc<dyn Provider> {
    match provider_id.to_lowercase().as_str() {
        "mock" => Arc::new(MockProvider::echo(logger)),
        id => {
            let provider = GenaiProvider::new(id, logger);
            match timeout {
                Some(timeout) => Arc::new(provider.with_timeout(timeout)),
                None => Arc::new(provider),
            }
        }
    }
}
