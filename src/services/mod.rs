// src/services/mod.rs
pub mod chatbot;
pub mod conversation_tracker;
pub mod gemini;
pub mod metrics_manager;
