// Reply Composition
//
// Turns registry outcomes into the ordered list of chat messages.
// Pure functions: no I/O, no registry access.

use crate::application::intent_parser::Vocabulary;
use crate::domain::{AcquireOutcome, QueueSnapshot, ReleaseOutcome, ReservationError, UserId};
use crate::error::Result;
use crate::port::PhrasePicker;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User-facing phrases.
///
/// Templates may use the placeholders `{resource}`, `{user}`, `{owner}` and
/// `{users}`. Fields holding a list are equivalent variants; one is picked per reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseBook {
    pub acquired: String,
    pub in_use: String,
    pub next_in_line: String,
    pub users_ahead: String,
    pub released_no_successor: String,
    pub released_by: String,
    pub your_turn: String,
    pub status_owner: String,
    pub status_no_waiters: String,
    pub status_waiters: String,
    pub already_owner: String,
    pub already_waiting: String,
    pub invalid_resource: Vec<String>,
    pub not_owner: Vec<String>,
    pub not_understood: String,
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self {
            acquired: "{resource} ha sido reservado por {user}".to_string(),
            in_use: "Actualmente {resource} está siendo utilizado por @{owner}".to_string(),
            next_in_line: "Eres la siguiente en la lista".to_string(),
            users_ahead: "Estas personas están por delante tuyo: {users}".to_string(),
            released_no_successor:
                "el recurso {resource} ha sido liberado y no hay nadie a la cola.".to_string(),
            released_by: "Parece que {owner} ha liberado {resource}.".to_string(),
            your_turn: "{user} es tu turno en {resource}.".to_string(),
            status_owner: "Actualmente el recurso {resource} está reservado por {owner}."
                .to_string(),
            status_no_waiters: "Y no hay lista de espera.".to_string(),
            status_waiters: "Y están a la espera estas personas: {users}.".to_string(),
            already_owner: "El recurso ya está reservado por ti.".to_string(),
            already_waiting: "Ya estás en la lista.".to_string(),
            invalid_resource: vec![
                "Has escrito mal el nombre del recurso".to_string(),
                "Tal vez deberías pedir algo..".to_string(),
                "No puedes dejar el recurso vacío!".to_string(),
            ],
            not_owner: vec![
                "No puedes liberar lo que no posees!".to_string(),
                "Chsss ese recurso no es tuyo actualmente".to_string(),
                "Solo puedes liberar recursos que sean tuyos..".to_string(),
            ],
            not_understood: "Error al procesar texto".to_string(),
        }
    }
}

impl PhraseBook {
    pub fn acquire_messages(&self, outcome: &AcquireOutcome) -> Vec<String> {
        match outcome {
            AcquireOutcome::Acquired { resource, owner } => {
                vec![Template::new(&self.acquired)
                    .resource(resource)
                    .user(owner)
                    .render()]
            }
            AcquireOutcome::Queued {
                resource,
                owner,
                ahead,
            } => {
                let in_use = Template::new(&self.in_use)
                    .resource(resource)
                    .owner(owner)
                    .render();
                let position = if ahead.is_empty() {
                    self.next_in_line.clone()
                } else {
                    Template::new(&self.users_ahead).users(ahead).render()
                };
                vec![in_use, position]
            }
        }
    }

    pub fn release_messages(&self, outcome: &ReleaseOutcome) -> Vec<String> {
        match outcome {
            ReleaseOutcome::ReleasedNoSuccessor { resource, .. } => {
                vec![Template::new(&self.released_no_successor)
                    .resource(resource)
                    .render()]
            }
            ReleaseOutcome::ReleasedWithSuccessor {
                resource,
                previous_owner,
                new_owner,
                ..
            } => vec![
                Template::new(&self.released_by)
                    .resource(resource)
                    .owner(previous_owner)
                    .render(),
                Template::new(&self.your_turn)
                    .resource(resource)
                    .user(new_owner)
                    .render(),
            ],
        }
    }

    pub fn status_messages(&self, snapshot: &QueueSnapshot) -> Vec<String> {
        let owner = Template::new(&self.status_owner)
            .resource(&snapshot.resource)
            .owner(&snapshot.owner)
            .render();
        let waiters = if snapshot.waiters.is_empty() {
            self.status_no_waiters.clone()
        } else {
            Template::new(&self.status_waiters)
                .users(&snapshot.waiters)
                .render()
        };
        vec![owner, waiters]
    }

    pub fn error_message(&self, err: &ReservationError, picker: &dyn PhrasePicker) -> String {
        match err {
            ReservationError::InvalidResource | ReservationError::NotFound(_) => {
                picker.pick(&self.invalid_resource).to_string()
            }
            ReservationError::NotOwner { .. } => picker.pick(&self.not_owner).to_string(),
            ReservationError::AlreadyOwner { .. } => self.already_owner.clone(),
            ReservationError::AlreadyWaiting { .. } => self.already_waiting.clone(),
        }
    }
}

/// Placeholder substitution for a single phrase
struct Template<'a> {
    text: &'a str,
    resource: &'a str,
    user: &'a str,
    owner: &'a str,
    users: String,
}

impl<'a> Template<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            resource: "",
            user: "",
            owner: "",
            users: String::new(),
        }
    }

    fn resource(mut self, resource: &'a str) -> Self {
        self.resource = resource;
        self
    }

    fn user(mut self, user: &'a str) -> Self {
        self.user = user;
        self
    }

    fn owner(mut self, owner: &'a str) -> Self {
        self.owner = owner;
        self
    }

    fn users(mut self, users: &[UserId]) -> Self {
        self.users = users.join(", ");
        self
    }

    /// Single pass over the template; substituted values are never rescanned.
    fn render(self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            rest = &rest[start..];

            match self.placeholder(rest) {
                Some((name, value)) => {
                    out.push_str(value);
                    rest = &rest[name.len()..];
                }
                None => {
                    out.push('{');
                    rest = &rest[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    fn placeholder(&self, text: &str) -> Option<(&'static str, &str)> {
        [
            ("{resource}", self.resource),
            ("{user}", self.user),
            ("{owner}", self.owner),
            ("{users}", self.users.as_str()),
        ]
        .into_iter()
        .find(|(name, _)| text.starts_with(name))
    }
}

/// Keywords and phrases for one language, loadable from JSON.
///
/// ```text
/// {
///   "keywords": { "acquire": ["take"], "release": ["drop"], "query": ["show"] },
///   "phrases":  { "acquired": "{user} now holds {resource}" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub keywords: Vocabulary,
    pub phrases: PhraseBook,
}

impl Locale {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::phrase_picker::mocks::FirstPhrasePicker;

    fn phrases() -> PhraseBook {
        PhraseBook::default()
    }

    #[test]
    fn test_acquired_message() {
        let outcome = AcquireOutcome::Acquired {
            resource: "printer".to_string(),
            owner: "ana".to_string(),
        };

        assert_eq!(
            phrases().acquire_messages(&outcome),
            vec!["printer ha sido reservado por ana"]
        );
    }

    #[test]
    fn test_queued_first_in_line() {
        let outcome = AcquireOutcome::Queued {
            resource: "printer".to_string(),
            owner: "ana".to_string(),
            ahead: vec![],
        };

        assert_eq!(
            phrases().acquire_messages(&outcome),
            vec![
                "Actualmente printer está siendo utilizado por @ana",
                "Eres la siguiente en la lista",
            ]
        );
    }

    #[test]
    fn test_queued_behind_others() {
        let outcome = AcquireOutcome::Queued {
            resource: "printer".to_string(),
            owner: "ana".to_string(),
            ahead: vec!["bea".to_string(), "carl".to_string()],
        };

        let messages = phrases().acquire_messages(&outcome);

        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[1],
            "Estas personas están por delante tuyo: bea, carl"
        );
    }

    #[test]
    fn test_handoff_announces_release_then_turn() {
        let outcome = ReleaseOutcome::ReleasedWithSuccessor {
            resource: "printer".to_string(),
            previous_owner: "ana".to_string(),
            new_owner: "bea".to_string(),
            remaining: vec![],
        };

        assert_eq!(
            phrases().release_messages(&outcome),
            vec![
                "Parece que ana ha liberado printer.",
                "bea es tu turno en printer.",
            ]
        );
    }

    #[test]
    fn test_release_without_successor() {
        let outcome = ReleaseOutcome::ReleasedNoSuccessor {
            resource: "printer".to_string(),
            previous_owner: "ana".to_string(),
        };

        assert_eq!(
            phrases().release_messages(&outcome),
            vec!["el recurso printer ha sido liberado y no hay nadie a la cola."]
        );
    }

    #[test]
    fn test_status_messages() {
        let mut snapshot = QueueSnapshot {
            resource: "printer".to_string(),
            owner: "ana".to_string(),
            waiters: vec![],
            owner_since_ms: 0,
        };
        assert_eq!(
            phrases().status_messages(&snapshot),
            vec![
                "Actualmente el recurso printer está reservado por ana.",
                "Y no hay lista de espera.",
            ]
        );

        snapshot.waiters = vec!["bea".to_string()];
        assert_eq!(
            phrases().status_messages(&snapshot)[1],
            "Y están a la espera estas personas: bea."
        );
    }

    #[test]
    fn test_error_messages() {
        let phrases = phrases();
        let picker = FirstPhrasePicker;

        assert_eq!(
            phrases.error_message(&ReservationError::InvalidResource, &picker),
            "Has escrito mal el nombre del recurso"
        );
        assert_eq!(
            phrases.error_message(&ReservationError::NotFound("x".to_string()), &picker),
            "Has escrito mal el nombre del recurso"
        );
        let not_owner = ReservationError::NotOwner {
            resource: "x".to_string(),
            user: "bea".to_string(),
        };
        assert_eq!(
            phrases.error_message(&not_owner, &picker),
            "No puedes liberar lo que no posees!"
        );
    }

    #[test]
    fn test_locale_partial_override() {
        let locale = Locale::from_json(
            r#"{"phrases": {"acquired": "{user} now holds {resource}"}}"#,
        )
        .unwrap();
        let outcome = AcquireOutcome::Acquired {
            resource: "printer".to_string(),
            owner: "ana".to_string(),
        };

        assert_eq!(
            locale.phrases.acquire_messages(&outcome),
            vec!["ana now holds printer"]
        );
        assert_eq!(locale.keywords, Vocabulary::default());
        assert_eq!(locale.phrases.already_waiting, "Ya estás en la lista.");
    }

    #[test]
    fn test_locale_rejects_malformed_json() {
        assert!(Locale::from_json("{not json").is_err());
    }

    #[test]
    fn test_placeholder_text_in_ids_is_kept_verbatim() {
        let acquired = AcquireOutcome::Acquired {
            resource: "db-{user}".to_string(),
            owner: "ana".to_string(),
        };
        assert_eq!(
            phrases().acquire_messages(&acquired),
            vec!["db-{user} ha sido reservado por ana"]
        );

        let queued = AcquireOutcome::Queued {
            resource: "{owner}".to_string(),
            owner: "ana".to_string(),
            ahead: vec!["{resource}".to_string(), "bea".to_string()],
        };
        assert_eq!(
            phrases().acquire_messages(&queued),
            vec![
                "Actualmente {owner} está siendo utilizado por @ana",
                "Estas personas están por delante tuyo: {resource}, bea",
            ]
        );
    }

    #[test]
    fn test_unknown_braces_pass_through() {
        let book = PhraseBook {
            acquired: "{resource} {nope} {{user}} {".to_string(),
            ..PhraseBook::default()
        };
        let outcome = AcquireOutcome::Acquired {
            resource: "vm".to_string(),
            owner: "ana".to_string(),
        };

        assert_eq!(book.acquire_messages(&outcome), vec!["vm {nope} {ana} {"]);
    }

    #[test]
    fn test_handoff_addresses_only_new_owner() {
        let outcome = ReleaseOutcome::ReleasedWithSuccessor {
            resource: "printer".to_string(),
            previous_owner: "ana".to_string(),
            new_owner: "bea".to_string(),
            remaining: vec!["carla".to_string(), "dani".to_string()],
        };

        let messages = phrases().release_messages(&outcome);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], "bea es tu turno en printer.");
        assert!(messages.iter().all(|m| !m.contains("carla")));
    }
}
