use async_trait::async_trait;

use crate::ai::client::OpenRouterClient;
use crate::config::Config;
use crate::error::StudyError;
use crate::logger;
use crate::models::{Difficulty, StudyMode, Topic};

/// What to generate: one topic, one mode, a fixed item count.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRequest {
    pub topic: Topic,
    pub mode: StudyMode,
    pub count: usize,
    pub difficulty: Difficulty,
}

impl ContentRequest {
    pub fn new(topic: Topic, mode: StudyMode, config: &Config) -> Self {
        Self {
            topic,
            mode,
            count: config.generation_count(mode),
            difficulty: config.quiz_difficulty,
        }
    }

    pub fn prompt(&self) -> String {
        let topic = self.topic.as_str();
        let count = self.count;
        let body = match self.mode {
            StudyMode::Flashcards => format!(
                r#"Generate {count} high-quality flashcards for the topic: "{topic}".
The front should be a concept, term, or question.
The back should be a clear, concise definition or answer.

Respond with a JSON array where every element has exactly this shape:
{{"front": string, "back": string}}"#
            ),
            StudyMode::Quiz => format!(
                r#"Generate a {difficulty} difficulty multiple-choice quiz about "{topic}" with {count} questions.
Each question has at least two distinct options and exactly one of them is correct.

Respond with a JSON array where every element has exactly this shape:
{{"id": integer, "question": string, "options": [string, ...], "correctAnswer": string, "explanation": string}}
"correctAnswer" must be copied verbatim from "options"."#,
                difficulty = self.difficulty
            ),
            StudyMode::Drill => format!(
                r#"Generate {count} "fill-in-the-blank" drill exercises for the topic: "{topic}".
Return the full sentence, the missing word (key term), and the display sentence where the missing word is replaced by underscores (_____).
The display sentence must contain exactly one blank.

Respond with a JSON array where every element has exactly this shape:
{{"id": integer, "sentence": string, "missingWord": string, "displaySentence": string}}"#
            ),
        };
        format!("{body}\n\nIMPORTANT: respond ONLY with the JSON array (no markdown, no extra text).")
    }
}

/// The text-generation service boundary. Returns the raw JSON payload; every
/// transport failure collapses into `StudyError::GenerationFailed`.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    async fn generate(&self, request: &ContentRequest) -> Result<String, StudyError>;
}

#[async_trait]
impl ContentGateway for OpenRouterClient {
    async fn generate(&self, request: &ContentRequest) -> Result<String, StudyError> {
        logger::log(&format!(
            "Requesting {} {} item(s) for '{}' from {}",
            request.count,
            request.mode,
            request.topic,
            self.model()
        ));
        match self.complete(&request.prompt()).await {
            Ok(text) => {
                logger::log(&format!("Raw generator response: {}", text));
                Ok(text)
            }
            Err(e) => {
                logger::log(&format!("Generator error: {}", e));
                Err(StudyError::generation(e.to_string()))
            }
        }
    }
}
