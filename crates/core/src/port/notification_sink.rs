// Notification Sink Port (Interface)

use crate::error::Result;
use async_trait::async_trait;

/// Delivers the replies of one chat turn back to the conversation.
///
/// Called only after the registry lock has been released, so a slow transport
/// never holds up operations on other resources.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver `messages` in order to the conversation `user` spoke in
    async fn deliver(&self, user: &str, messages: &[String]) -> Result<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::sync::Mutex;

    /// Records every delivered message as `(user, message)`
    #[derive(Default)]
    pub struct RecordingSink {
        delivered: Mutex<Vec<(String, String)>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn delivered(&self) -> Vec<(String, String)> {
            self.delivered.lock().unwrap().clone()
        }

        pub fn messages(&self) -> Vec<String> {
            self.delivered().into_iter().map(|(_, m)| m).collect()
        }
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        async fn deliver(&self, user: &str, messages: &[String]) -> Result<()> {
            let mut delivered = self.delivered.lock().unwrap();
            delivered.extend(messages.iter().map(|m| (user.to_string(), m.clone())));
            Ok(())
        }
    }

    /// Always fails, for error propagation tests
    pub struct FailingSink;

    #[async_trait]
    impl NotificationSink for FailingSink {
        async fn deliver(&self, _user: &str, _messages: &[String]) -> Result<()> {
            Err(AppError::Delivery("transport unavailable".to_string()))
        }
    }
}
