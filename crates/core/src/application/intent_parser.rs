// Keyword Intent Parser
//
// Grammar: the first token found in one of the keyword sets selects the
// intent, and the token right after it is the resource id, taken verbatim.

use crate::domain::{Command, Intent};
use crate::port::IntentParser;
use serde::{Deserialize, Serialize};

/// Keyword sets per intent. Missing lists in a locale file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub acquire: Vec<String>,
    pub release: Vec<String>,
    pub query: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            acquire: words(&["pido", "reservo", "pillo", "reservar", "pedir", "pillar"]),
            release: words(&["libero", "suelto", "dejo", "agur"]),
            query: words(&["ver", "mostrar", "estado"]),
        }
    }
}

impl Vocabulary {
    /// Intent selected by `token`, if it is a keyword.
    /// Sets are checked in acquire, release, query order; matching ignores ASCII case.
    pub fn intent_of(&self, token: &str) -> Option<Intent> {
        let matches = |set: &[String]| set.iter().any(|w| w.eq_ignore_ascii_case(token));

        if matches(&self.acquire) {
            Some(Intent::Acquire)
        } else if matches(&self.release) {
            Some(Intent::Release)
        } else if matches(&self.query) {
            Some(Intent::Query)
        } else {
            None
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// Whitespace tokenizer over a [`Vocabulary`]
#[derive(Debug, Clone, Default)]
pub struct KeywordIntentParser {
    vocabulary: Vocabulary,
}

impl KeywordIntentParser {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl IntentParser for KeywordIntentParser {
    fn parse(&self, text: &str) -> Command {
        let mut tokens = text.split_whitespace();
        while let Some(token) = tokens.next() {
            if let Some(intent) = self.vocabulary.intent_of(token) {
                return Command::new(intent, tokens.next().map(str::to_string));
            }
        }
        Command::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Command {
        KeywordIntentParser::default().parse(text)
    }

    #[test]
    fn test_parse_acquire() {
        assert_eq!(
            parse("pido printer"),
            Command::new(Intent::Acquire, Some("printer".to_string()))
        );
    }

    #[test]
    fn test_parse_release_and_query() {
        assert_eq!(parse("libero printer").intent, Intent::Release);
        assert_eq!(parse("estado printer").intent, Intent::Query);
    }

    #[test]
    fn test_keyword_may_appear_mid_sentence() {
        let command = parse("hola bot, reservo entorno-QA por favor");

        assert_eq!(command.intent, Intent::Acquire);
        assert_eq!(command.resource.as_deref(), Some("entorno-QA"));
    }

    #[test]
    fn test_first_keyword_wins() {
        let command = parse("suelto printer y pido scanner");

        assert_eq!(command.intent, Intent::Release);
        assert_eq!(command.resource.as_deref(), Some("printer"));
    }

    #[test]
    fn test_resource_token_is_verbatim() {
        // The token after the keyword is taken as-is, even if it is a keyword
        let command = parse("PIDO Ver");

        assert_eq!(command.intent, Intent::Acquire);
        assert_eq!(command.resource.as_deref(), Some("Ver"));
    }

    #[test]
    fn test_keyword_at_end_has_no_resource() {
        let command = parse("pido");

        assert_eq!(command, Command::new(Intent::Acquire, None));
    }

    #[test]
    fn test_unknown_text() {
        assert_eq!(parse("buenos días a todos"), Command::unknown());
        assert_eq!(parse(""), Command::unknown());
        assert_eq!(parse("   "), Command::unknown());
    }

    #[test]
    fn test_custom_vocabulary_from_json() {
        let vocabulary: Vocabulary =
            serde_json::from_str(r#"{"acquire": ["take", "grab"], "release": ["drop"]}"#).unwrap();
        let parser = KeywordIntentParser::new(vocabulary);

        assert_eq!(parser.parse("grab db-1").intent, Intent::Acquire);
        assert_eq!(parser.parse("drop db-1").intent, Intent::Release);
        // Missing list falls back to the defaults
        assert_eq!(parser.parse("estado db-1").intent, Intent::Query);
        assert_eq!(parser.parse("pido db-1").intent, Intent::Unknown);
    }
}
