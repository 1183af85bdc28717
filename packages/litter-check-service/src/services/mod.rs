pub mod gemini;
pub mod inference;
pub mod verdict_relay;
