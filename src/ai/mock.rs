use crate::ai::gateway::{ContentGateway, ContentRequest};
use crate::error::StudyError;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Scripted gateway for tests. Replies are handed out in order and the last one
/// repeats once the script runs out.
pub struct MockGateway {
    replies: Vec<Result<String, StudyError>>,
    delay: Duration,
    calls: AtomicUsize,
    requests: Mutex<Vec<ContentRequest>>,
}

impl MockGateway {
    pub fn replying(payload: &str) -> Self {
        Self::with_replies(vec![Ok(payload.to_string())])
    }

    pub fn failing(detail: &str) -> Self {
        Self::with_replies(vec![Err(StudyError::generation(detail))])
    }

    pub fn with_replies(replies: Vec<Result<String, StudyError>>) -> Self {
        Self {
            replies,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGateway for MockGateway {
    async fn generate(&self, request: &ContentRequest) -> Result<String, StudyError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let index = call.min(self.replies.len().saturating_sub(1));
        self.replies
            .get(index)
            .cloned()
            .unwrap_or_else(|| Err(StudyError::generation("mock has no replies")))
    }
}

pub const FIVE_QUESTION_QUIZ: &str = r#"[
    {"id": 1, "question": "Which pigment absorbs light?", "options": ["Chlorophyll", "Keratin", "Melanin"], "correctAnswer": "Chlorophyll", "explanation": "Chlorophyll captures light energy."},
    {"id": 2, "question": "Which gas is consumed?", "options": ["Oxygen", "Carbon dioxide"], "correctAnswer": "Carbon dioxide", "explanation": "CO2 is fixed in the Calvin cycle."},
    {"id": 3, "question": "Which gas is released?", "options": ["Oxygen", "Nitrogen"], "correctAnswer": "Oxygen", "explanation": "Water splitting releases O2."},
    {"id": 4, "question": "Where do light reactions occur?", "options": ["Stroma", "Thylakoid membrane"], "correctAnswer": "Thylakoid membrane", "explanation": "Photosystems sit in the thylakoids."},
    {"id": 5, "question": "What sugar is produced?", "options": ["Glucose", "Lactose"], "correctAnswer": "Glucose", "explanation": "G3P is built into glucose."}
]"#;

pub const THREE_FLASHCARDS: &str = r#"[
    {"front": "Chlorophyll", "back": "Green pigment that absorbs light"},
    {"front": "Stroma", "back": "Fluid where the Calvin cycle runs"},
    {"front": "ATP", "back": "Energy carrier made in light reactions"}
]"#;

pub const TWO_DRILLS: &str = r#"[
    {"id": 1, "sentence": "Paris is the capital of France.", "missingWord": "paris", "displaySentence": "_____ is the capital of France."},
    {"id": 2, "sentence": "Plants release oxygen.", "missingWord": "oxygen", "displaySentence": "Plants release _____."}
]"#;
