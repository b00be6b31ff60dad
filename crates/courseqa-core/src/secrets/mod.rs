//! Secret storage for provider API keys
//!
//! - `SecretStore` trait for implementing custom stores
//! - `EnvSecretStore`: reads `*_API_KEY` environment variables
//! - `MemorySecretStore`: in-memory, for tests

mod traits;
mod env_store;
mod memory_store;

pub use traits::{SecretStore, SecretStoreError, SecretStoreResult};
pub use env_store::EnvSecretStore;
pub use memory_store::MemorySecretStore;
