use crate::error::StudyError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

lazy_static! {
    /// A drill blank is any run of three or more underscores.
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"_{3,}").expect("placeholder pattern is valid");
}

/// The three study modes a session can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyMode {
    Flashcards,
    Quiz,
    Drill,
}

impl StudyMode {
    pub const ALL: [StudyMode; 3] = [StudyMode::Flashcards, StudyMode::Quiz, StudyMode::Drill];

    pub fn label(self) -> &'static str {
        match self {
            StudyMode::Flashcards => "Flashcards",
            StudyMode::Quiz => "Quiz",
            StudyMode::Drill => "Drill",
        }
    }

    pub fn next(self) -> Self {
        match self {
            StudyMode::Flashcards => StudyMode::Quiz,
            StudyMode::Quiz => StudyMode::Drill,
            StudyMode::Drill => StudyMode::Flashcards,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            StudyMode::Flashcards => StudyMode::Drill,
            StudyMode::Quiz => StudyMode::Flashcards,
            StudyMode::Drill => StudyMode::Quiz,
        }
    }
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Application meta-state, including the non-study screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Home,
    Loading,
    Flashcards,
    Quiz,
    Drill,
}

impl From<StudyMode> for AppMode {
    fn from(mode: StudyMode) -> Self {
        match mode {
            StudyMode::Flashcards => AppMode::Flashcards,
            StudyMode::Quiz => AppMode::Quiz,
            StudyMode::Drill => AppMode::Drill,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// A trimmed, non-empty study topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    pub fn parse(raw: &str) -> Result<Self, StudyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StudyError::InvalidInput);
        }
        Ok(Topic(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillItem {
    pub id: i64,
    pub sentence: String,
    pub missing_word: String,
    pub display_sentence: String,
}

impl DrillItem {
    /// Text before and after the blank. Without a blank the whole sentence is the prefix.
    pub fn blank_parts(&self) -> (&str, &str) {
        match PLACEHOLDER_RE.find(&self.display_sentence) {
            Some(m) => (
                &self.display_sentence[..m.start()],
                &self.display_sentence[m.end()..],
            ),
            None => (self.display_sentence.as_str(), ""),
        }
    }

    pub fn placeholder_count(&self) -> usize {
        PLACEHOLDER_RE.find_iter(&self.display_sentence).count()
    }
}

/// Generated items for one session, homogeneous by mode.
#[derive(Debug, Clone, PartialEq)]
pub enum StudyContent {
    Flashcards(Arc<[Flashcard]>),
    Quiz(Arc<[QuizQuestion]>),
    Drill(Arc<[DrillItem]>),
}

impl StudyContent {
    pub fn mode(&self) -> StudyMode {
        match self {
            StudyContent::Flashcards(_) => StudyMode::Flashcards,
            StudyContent::Quiz(_) => StudyMode::Quiz,
            StudyContent::Drill(_) => StudyMode::Drill,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            StudyContent::Flashcards(cards) => cards.len(),
            StudyContent::Quiz(questions) => questions.len(),
            StudyContent::Drill(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The active topic and its generated content. Replaced wholesale, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    topic: Topic,
    content: StudyContent,
}

impl Session {
    pub fn new(topic: Topic, content: StudyContent) -> Self {
        Self { topic, content }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn mode(&self) -> StudyMode {
        self.content.mode()
    }

    pub fn content(&self) -> &StudyContent {
        &self.content
    }
}

#[derive(Debug)]
pub struct GenerationRequest {
    pub ticket: u64,
    pub topic: Topic,
    pub mode: StudyMode,
}

#[derive(Debug)]
pub struct GenerationResponse {
    pub ticket: u64,
    pub result: Result<Session, StudyError>,
}
