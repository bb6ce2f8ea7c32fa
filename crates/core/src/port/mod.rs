// Port Layer - Interfaces for external collaborators

pub mod id_provider; // For deterministic testing
pub mod intent_parser;
pub mod notification_sink;
pub mod phrase_picker;
pub mod time_provider;

// Re-exports
pub use id_provider::IdProvider;
pub use intent_parser::IntentParser;
pub use notification_sink::NotificationSink;
pub use phrase_picker::PhrasePicker;
pub use time_provider::TimeProvider;
