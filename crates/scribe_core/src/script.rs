//! Domain types assembled during a script run.

use crate::Topic;
use serde::{Deserialize, Serialize};

/// A candidate thesis for the essay, one of the brainstormed options.
pub type Theme = String;

/// One narrative beat of the outline.
pub type OutlineEntry = String;

/// Separator placed between drafted sections in the script body.
const SECTION_SEPARATOR: &str = "\n\n";

/// Count whitespace-separated words.
///
/// # Examples
///
/// ```
/// use scribe_core::count_words;
///
/// assert_eq!(count_words("I remember the first  time\nI saw Rome."), 8);
/// assert_eq!(count_words("   "), 0);
/// ```
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Prose drafted for exactly one outline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct DraftedSection {
    /// 1-based position of the outline entry
    index: usize,
    /// The outline entry this section covers
    outline_point: OutlineEntry,
    /// Drafted prose, verbatim from the model
    text: String,
}

impl DraftedSection {
    /// Create a drafted section.
    pub fn new(index: usize, outline_point: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            index,
            outline_point: outline_point.into(),
            text: text.into(),
        }
    }

    /// Number of words in the drafted prose.
    pub fn word_count(&self) -> usize {
        count_words(&self.text)
    }
}

/// Record of an outline entry that produced no text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SectionFailure {
    /// 1-based position of the outline entry
    index: usize,
    /// The outline entry that failed
    outline_point: OutlineEntry,
    /// Why drafting failed
    reason: String,
}

impl SectionFailure {
    /// Create a failure record.
    pub fn new(index: usize, outline_point: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            index,
            outline_point: outline_point.into(),
            reason: reason.into(),
        }
    }
}

/// The assembled essay: metadata plus ordered prose.
///
/// The body is append-only. Each pushed section lands verbatim after every
/// section before it, so the body handed to the drafter as context always
/// contains the exact output of sections `1..i`.
///
/// # Examples
///
/// ```
/// use scribe_core::{DraftedSection, Script, Topic};
///
/// let topic = Topic::new("The Roman Empire").unwrap();
/// let mut script = Script::new(topic, "Rome never fell", vec!["Intro".into(), "Outro".into()]);
/// assert!(script.is_empty());
///
/// script.push_section(DraftedSection::new(1, "Intro", "I grew up near ruins."));
/// script.push_section(DraftedSection::new(2, "Outro", "Rome is still here."));
///
/// assert_eq!(script.body(), "I grew up near ruins.\n\nRome is still here.");
/// assert_eq!(script.word_count(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Script {
    /// The essay topic
    topic: Topic,
    /// The chosen theme
    theme: Theme,
    /// Ordered outline entries
    outline: Vec<OutlineEntry>,
    /// Successfully drafted sections, in outline order
    sections: Vec<DraftedSection>,
    /// Concatenated prose of all drafted sections
    #[getter(skip)]
    body: String,
}

impl Script {
    /// Start an empty script for the given metadata.
    pub fn new(topic: Topic, theme: impl Into<String>, outline: Vec<OutlineEntry>) -> Self {
        Self {
            topic,
            theme: theme.into(),
            outline,
            sections: Vec::new(),
            body: String::new(),
        }
    }

    /// Append a drafted section to the end of the body.
    pub fn push_section(&mut self, section: DraftedSection) {
        if !self.body.is_empty() {
            self.body.push_str(SECTION_SEPARATOR);
        }
        self.body.push_str(section.text());
        self.sections.push(section);
    }

    /// Concatenated prose of every drafted section so far.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// True when no prose has been drafted.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Total words across the body.
    pub fn word_count(&self) -> usize {
        count_words(&self.body)
    }
}
