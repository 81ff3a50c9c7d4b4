pub mod client;
pub mod gateway;
#[cfg(test)]
pub mod mock;
pub mod parser;

// Public API exports
pub use client::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, ModelConfig, OpenRouterClient};
pub use gateway::{ContentGateway, ContentRequest};
pub use parser::parse_content;
