// Intent Parser Port
//
// Keeps wording and language out of the state machine: the registry never
// sees raw text, only the structured command.

use crate::domain::Command;

/// Maps one line of chat text to a structured command
pub trait IntentParser: Send + Sync {
    /// Never fails; unrecognized text yields `Intent::Unknown`
    fn parse(&self, text: &str) -> Command;
}
