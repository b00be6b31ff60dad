//! Response generation
//!
//! `ResponseGenerator` runs the bounded tool loop for one query: call the
//! model, dispatch whatever tools it asks for, feed the results back, and stop
//! at a plain answer or when the round budget runs out.

mod prompt;
mod response_generator;

pub use prompt::{system_prompt, SYSTEM_PROMPT};
pub use response_generator::{
    ResponseGenerator, DEFAULT_MAX_ROUNDS, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
