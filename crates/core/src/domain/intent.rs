// Intent Domain Model

use super::queue::ResourceId;
use serde::{Deserialize, Serialize};

/// What a chat message asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    Acquire,
    Release,
    Query,
    Unknown,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Acquire => write!(f, "ACQUIRE"),
            Intent::Release => write!(f, "RELEASE"),
            Intent::Query => write!(f, "QUERY"),
            Intent::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Structured command extracted from raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub intent: Intent,
    /// Token following the keyword, verbatim. `None` when the keyword ended the line.
    pub resource: Option<ResourceId>,
}

impl Command {
    pub fn new(intent: Intent, resource: Option<ResourceId>) -> Self {
        Self { intent, resource }
    }

    pub fn unknown() -> Self {
        Self::new(Intent::Unknown, None)
    }
}
