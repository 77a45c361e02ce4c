use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Normalized (trimmed, lowercased) challenge key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct TopicKey(String);

impl TopicKey {
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ToolLabel(String);

crate::impl_string_newtype!(ToolLabel);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub topic: String,
    pub tools: Vec<ToolLabel>,
}

impl TopicEntry {
    pub fn new(topic: impl Into<String>, tools: &[&str]) -> Self {
        Self {
            topic: topic.into(),
            tools: tools.iter().map(|t| ToolLabel::new(*t)).collect(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    #[error("Topic name is blank")]
    BlankTopic,
    #[error("Topic '{topic}' has no tools")]
    EmptyTools { topic: String },
}

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "stress",
        &["Mindfulness", "Time-Blocking", "Journaling", "Meditation"],
    ),
    (
        "anxiety",
        &[
            "Deep Breathing",
            "Grounding (5-4-3-2-1)",
            "Cognitive Reframing",
            "Exercise",
        ],
    ),
    (
        "procrastination",
        &["Pomodoro Technique", "Task Chunking", "Accountability Partner"],
    ),
    (
        "loneliness",
        &["Reach Out", "Volunteering", "Join a Club", "Self-Compassion"],
    ),
    (
        "burnout",
        &[
            "Boundaries",
            "Rest Days",
            "Delegation",
            "Nature Walks",
            "Sleep Hygiene",
        ],
    ),
    (
        "anger",
        &["Pause and Count", "Physical Activity", "Assertive Communication"],
    ),
    (
        "sadness",
        &[
            "Behavioral Activation",
            "Social Support",
            "Gratitude Journal",
            "Professional Help",
        ],
    ),
    (
        "low motivation",
        &["Goal Setting", "Reward System", "Habit Stacking"],
    ),
    (
        "overthinking",
        &["Worry Time", "Thought Labeling", "Mindful Walking"],
    ),
];

/// Challenge-to-tools table. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<TopicKey, Vec<ToolLabel>>,
}

impl Lexicon {
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(topic, tools)| {
                (
                    TopicKey::normalize(topic),
                    tools.iter().map(|t| ToolLabel::new(*t)).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = TopicEntry>,
    ) -> Result<Self, LexiconError> {
        Self::default().extended(entries)
    }

    /// Adds `entries` on top of this table; an entry replaces any existing
    /// tools for the same normalized topic.
    pub fn extended(
        mut self,
        entries: impl IntoIterator<Item = TopicEntry>,
    ) -> Result<Self, LexiconError> {
        for entry in entries {
            let key = TopicKey::normalize(&entry.topic);
            if key.is_empty() {
                return Err(LexiconError::BlankTopic);
            }
            if entry.tools.is_empty() {
                return Err(LexiconError::EmptyTools { topic: entry.topic });
            }
            if self.entries.insert(key.clone(), entry.tools).is_some() {
                log::info!("Topic '{}' overrides a builtin entry", key);
            }
        }
        Ok(self)
    }

    /// Exact match after lowercasing. Surrounding whitespace is the caller's
    /// business and is not stripped here.
    pub fn lookup(&self, key: &str) -> Option<&[ToolLabel]> {
        self.entries
            .get(&TopicKey(key.to_lowercase()))
            .map(Vec::as_slice)
            .filter(|tools| !tools.is_empty())
    }

    pub fn topics(&self) -> impl Iterator<Item = &TopicKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static LEXICON: OnceLock<Lexicon> = OnceLock::new();

/// Installs the process-wide table. Only the first call wins.
pub fn install(lexicon: Lexicon) -> &'static Lexicon {
    let mut pending = Some(lexicon);
    let installed = LEXICON.get_or_init(|| pending.take().unwrap_or_default());
    if pending.is_some() {
        log::warn!("Lexicon already installed; ignoring replacement");
    }
    installed
}
