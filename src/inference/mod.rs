pub mod client;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::InferenceClient;
pub use types::{extract_summary, instruction_prompt, InferenceParameters, InferenceRequest};
