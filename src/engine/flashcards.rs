use super::{EndBehavior, ItemPolicy, Progression, Step};
use crate::models::Flashcard;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct FlashcardPolicy;

impl ItemPolicy for FlashcardPolicy {
    type Item = Flashcard;
    type Outcome = ();

    const AT_END: EndBehavior = EndBehavior::Wrap;
    const REQUIRES_OUTCOME: bool = false;

    fn evaluate(_card: &Flashcard, _input: &str) -> Option<()> {
        None
    }

    fn is_success(_outcome: &()) -> bool {
        false
    }
}

/// Open-ended card review: loops forever, no score.
#[derive(Debug, Clone)]
pub struct FlashcardEngine {
    progress: Progression<FlashcardPolicy>,
    flipped: bool,
}

impl FlashcardEngine {
    pub fn new(cards: Arc<[Flashcard]>) -> Self {
        Self {
            progress: Progression::new(cards),
            flipped: false,
        }
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.progress.current()
    }

    pub fn index(&self) -> usize {
        self.progress.index()
    }

    pub fn len(&self) -> usize {
        self.progress.len()
    }

    pub fn is_empty(&self) -> bool {
        self.progress.is_empty()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn next(&mut self) -> Step {
        self.flipped = false;
        self.progress.advance()
    }

    /// No-op on the first card, including the flip state.
    pub fn prev(&mut self) -> bool {
        if self.progress.retreat() {
            self.flipped = false;
            return true;
        }
        false
    }
}
