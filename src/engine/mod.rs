//! Linear item progression shared by the study modes.
//!
//! A [`Progression`] walks a read-only item list one item at a time. What happens
//! when an item is answered, whether an answer is needed before moving on and what
//! happens after the last item are decided by an [`ItemPolicy`].

pub mod drill;
pub mod flashcards;
pub mod quiz;

pub use drill::{DrillEngine, DrillOutcome};
pub use flashcards::FlashcardEngine;
pub use quiz::{QuizAnswer, QuizEngine, QuizResult, QuizStatus};

use std::fmt::Debug;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndBehavior {
    /// Moving past the last item returns to the first one.
    Wrap,
    /// Moving past the last item ends the progression.
    Finish,
}

pub trait ItemPolicy {
    type Item;
    type Outcome: Clone + Debug + PartialEq;

    const AT_END: EndBehavior;
    /// Whether the current item must be evaluated before `advance` is allowed.
    const REQUIRES_OUTCOME: bool;

    /// `None` rejects the input and leaves the item pending.
    fn evaluate(item: &Self::Item, input: &str) -> Option<Self::Outcome>;

    fn is_success(outcome: &Self::Outcome) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemState<O> {
    Pending,
    Evaluated(O),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    Wrapped,
    Finished,
    Blocked,
}

pub struct Progression<P: ItemPolicy> {
    items: Arc<[P::Item]>,
    index: usize,
    state: ItemState<P::Outcome>,
    successes: usize,
    finished: bool,
}

impl<P: ItemPolicy> Clone for Progression<P> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            index: self.index,
            state: self.state.clone(),
            successes: self.successes,
            finished: self.finished,
        }
    }
}

impl<P: ItemPolicy> Debug for Progression<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progression")
            .field("index", &self.index)
            .field("len", &self.items.len())
            .field("state", &self.state)
            .field("successes", &self.successes)
            .field("finished", &self.finished)
            .finish()
    }
}

impl<P: ItemPolicy> Progression<P> {
    /// An empty list starts out finished.
    pub fn new(items: Arc<[P::Item]>) -> Self {
        let finished = items.is_empty();
        Self {
            items,
            index: 0,
            state: ItemState::Pending,
            successes: 0,
            finished,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&P::Item> {
        self.items.get(self.index)
    }

    pub fn state(&self) -> &ItemState<P::Outcome> {
        &self.state
    }

    pub fn outcome(&self) -> Option<&P::Outcome> {
        match &self.state {
            ItemState::Evaluated(outcome) => Some(outcome),
            ItemState::Pending => None,
        }
    }

    pub fn successes(&self) -> usize {
        self.successes
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.items.len()
    }

    /// Evaluates the current item once. Later calls on the same item are ignored
    /// and return `None`, so a success is never counted twice.
    pub fn evaluate(&mut self, input: &str) -> Option<&P::Outcome> {
        if self.finished || matches!(self.state, ItemState::Evaluated(_)) {
            return None;
        }
        let outcome = P::evaluate(self.current()?, input)?;
        if P::is_success(&outcome) {
            self.successes += 1;
        }
        self.state = ItemState::Evaluated(outcome);
        self.outcome()
    }

    pub fn advance(&mut self) -> Step {
        if self.finished {
            return Step::Finished;
        }
        if P::REQUIRES_OUTCOME && self.outcome().is_none() {
            return Step::Blocked;
        }
        self.state = ItemState::Pending;
        if !self.is_last() {
            self.index += 1;
            return Step::Moved;
        }
        match P::AT_END {
            EndBehavior::Wrap => {
                self.index = 0;
                Step::Wrapped
            }
            EndBehavior::Finish => {
                self.finished = true;
                Step::Finished
            }
        }
    }

    /// Steps back one item; a no-op on the first item.
    pub fn retreat(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.state = ItemState::Pending;
        true
    }
}

/// Case-insensitive comparison of trimmed text.
pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}
