// Service exports
pub mod chatbot;

pub use chatbot::{ChatbotError, ChatbotService, ModelSession};
