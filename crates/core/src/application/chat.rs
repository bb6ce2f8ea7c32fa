// Chat Service - one conversation turn from raw text to ordered replies

use crate::application::registry::ReservationRegistry;
use crate::application::reply::PhraseBook;
use crate::domain::{Command, Intent, ReservationError};
use crate::error::Result;
use crate::port::{IdProvider, IntentParser, NotificationSink, PhrasePicker};
use std::sync::Arc;
use tracing::{debug, info_span};

/// Turns chat text into registry calls and registry outcomes into messages.
///
/// Message composition and delivery only ever see owned outcome data, so they
/// run after the registry lock has been released.
pub struct ChatService {
    registry: Arc<ReservationRegistry>,
    parser: Arc<dyn IntentParser>,
    phrases: Arc<PhraseBook>,
    picker: Arc<dyn PhrasePicker>,
    id_provider: Arc<dyn IdProvider>,
}

impl ChatService {
    pub fn new(
        registry: Arc<ReservationRegistry>,
        parser: Arc<dyn IntentParser>,
        phrases: Arc<PhraseBook>,
        picker: Arc<dyn PhrasePicker>,
        id_provider: Arc<dyn IdProvider>,
    ) -> Self {
        Self {
            registry,
            parser,
            phrases,
            picker,
            id_provider,
        }
    }

    pub fn registry(&self) -> &Arc<ReservationRegistry> {
        &self.registry
    }

    /// Handle one message from `user` and return the replies in send order
    pub fn handle(&self, user: &str, text: &str) -> Vec<String> {
        let turn_id = self.id_provider.generate_id();
        let span = info_span!("chat_turn", turn_id = %turn_id, user = %user);
        let _enter = span.enter();

        let command = self.parser.parse(text);
        debug!(intent = %command.intent, resource = ?command.resource, "Parsed chat message");
        self.dispatch(user, command)
    }

    /// Handle one message and push the replies through `sink`
    pub async fn handle_and_deliver(
        &self,
        user: &str,
        text: &str,
        sink: &dyn NotificationSink,
    ) -> Result<()> {
        let messages = self.handle(user, text);
        sink.deliver(user, &messages).await
    }

    fn dispatch(&self, user: &str, command: Command) -> Vec<String> {
        // A keyword with nothing after it reaches the registry as an empty id
        let resource = command.resource.as_deref().unwrap_or_default();

        match command.intent {
            Intent::Unknown => vec![self.phrases.not_understood.clone()],
            Intent::Acquire => match self.registry.acquire(resource, user) {
                Ok(outcome) => self.phrases.acquire_messages(&outcome),
                Err(err) => self.rejection(&err),
            },
            Intent::Release => match self.registry.release(resource, user) {
                Ok(outcome) => self.phrases.release_messages(&outcome),
                Err(err) => self.rejection(&err),
            },
            Intent::Query => match self.registry.query(resource) {
                Ok(snapshot) => self.phrases.status_messages(&snapshot),
                Err(err) => self.rejection(&err),
            },
        }
    }

    fn rejection(&self, err: &ReservationError) -> Vec<String> {
        debug!(error = %err, "Chat command rejected");
        vec![self.phrases.error_message(err, self.picker.as_ref())]
    }
}
