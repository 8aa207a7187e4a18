//! Event record types shared by the tables and the resolver.

use serde::{Deserialize, Serialize};

/// Tone tag driving presentation styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    #[default]
    Glory,
    Crisis,
    Future,
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mood::Glory => "GLORY",
            Mood::Crisis => "CRISIS",
            Mood::Future => "FUTURE",
        };
        f.write_str(s)
    }
}

/// A table record. Quote and mood are optional here; the resolver fills
/// them in so the UI-facing record is always complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticEvent {
    pub tag: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub year_of_event: &'static str,
    pub quote: Option<&'static str>,
    pub mood: Option<Mood>,
}

/// The resolved, UI-facing record. Every field is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmanacEvent {
    pub tag: String,
    pub title: String,
    pub description: String,
    pub year_of_event: String,
    pub quote: String,
    pub mood: Mood,
}

impl AlmanacEvent {
    pub(crate) fn from_static(base: &StaticEvent, quote: &str, mood: Mood) -> Self {
        Self {
            tag: base.tag.to_string(),
            title: base.title.to_string(),
            description: base.description.to_string(),
            year_of_event: base.year_of_event.to_string(),
            quote: quote.to_string(),
            mood,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_serializes_screaming() {
        assert_eq!(
            serde_json::to_string(&Mood::Glory).unwrap(),
            "\"GLORY\""
        );
        assert_eq!(
            serde_json::to_string(&Mood::Crisis).unwrap(),
            "\"CRISIS\""
        );
        assert_eq!(
            serde_json::to_string(&Mood::Future).unwrap(),
            "\"FUTURE\""
        );
    }

    #[test]
    fn mood_defaults_to_glory() {
        assert_eq!(Mood::default(), Mood::Glory);
    }
}
