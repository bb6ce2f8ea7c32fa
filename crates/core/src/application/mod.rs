// Application Layer - Use Cases

pub mod chat;
pub mod intent_parser;
pub mod registry;
pub mod reply;

// Re-exports
pub use chat::ChatService;
pub use intent_parser::{KeywordIntentParser, Vocabulary};
pub use registry::ReservationRegistry;
pub use reply::{Locale, PhraseBook};
