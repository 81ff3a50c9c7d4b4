use super::{EndBehavior, ItemPolicy, Progression, Step, answers_match};
use crate::models::DrillItem;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillOutcome {
    pub correct: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct DrillPolicy;

impl ItemPolicy for DrillPolicy {
    type Item = DrillItem;
    type Outcome = DrillOutcome;

    const AT_END: EndBehavior = EndBehavior::Finish;
    const REQUIRES_OUTCOME: bool = true;

    fn evaluate(item: &DrillItem, input: &str) -> Option<DrillOutcome> {
        if input.trim().is_empty() {
            return None;
        }
        Some(DrillOutcome {
            correct: answers_match(input, &item.missing_word),
        })
    }

    // Drills keep no aggregate score.
    fn is_success(_outcome: &DrillOutcome) -> bool {
        false
    }
}

/// Fill-in-the-blank practice; terminates after the last item.
#[derive(Debug, Clone)]
pub struct DrillEngine {
    progress: Progression<DrillPolicy>,
}

impl DrillEngine {
    pub fn new(items: Arc<[DrillItem]>) -> Self {
        Self {
            progress: Progression::new(items),
        }
    }

    pub fn current(&self) -> Option<&DrillItem> {
        self.progress.current()
    }

    pub fn outcome(&self) -> Option<&DrillOutcome> {
        self.progress.outcome()
    }

    pub fn is_submitted(&self) -> bool {
        self.outcome().is_some()
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

    pub fn is_last(&self) -> bool {
        self.progress.is_last()
    }

    /// Blank input is rejected without feedback and the item stays idle.
    pub fn submit(&mut self, input: &str) -> Option<&DrillOutcome> {
        self.progress.evaluate(input)
    }

    /// `Step::Finished` after the last item means the drill is over.
    pub fn advance(&mut self) -> Step {
        self.progress.advance()
    }

    pub fn is_finished(&self) -> bool {
        self.progress.is_finished()
    }

    pub fn feedback(&self) -> Option<String> {
        let outcome = self.outcome()?;
        if outcome.correct {
            Some("Correct! Great job.".to_string())
        } else {
            let item = self.current()?;
            Some(format!("Incorrect. The answer was: {}", item.missing_word))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> DrillEngine {
        DrillEngine::new(Arc::from(vec![
            DrillItem {
                id: 1,
                sentence: "Paris is the capital of France.".to_string(),
                missing_word: "paris".to_string(),
                display_sentence: "_____ is the capital of France.".to_string(),
            },
            DrillItem {
                id: 2,
                sentence: "Plants release oxygen.".to_string(),
                missing_word: "oxygen".to_string(),
                display_sentence: "Plants release _____.".to_string(),
            },
        ]))
    }

    #[test]
    fn test_blank_submission_stays_idle() {
        let mut e = engine();
        assert!(e.submit("").is_none());
        assert!(e.submit("   \t").is_none());
        assert!(!e.is_submitted());
        assert!(e.feedback().is_none());
    }

    #[test]
    fn test_match_ignores_case_and_whitespace() {
        let mut e = engine();
        assert_eq!(e.submit(" Paris "), Some(&DrillOutcome { correct: true }));
        assert_eq!(e.feedback().unwrap(), "Correct! Great job.");
    }

    #[test]
    fn test_wrong_answer_reveals_word() {
        let mut e = engine();
        assert_eq!(e.submit("Lyon"), Some(&DrillOutcome { correct: false }));
        assert_eq!(e.feedback().unwrap(), "Incorrect. The answer was: paris");
    }

    #[test]
    fn test_submit_only_once_per_item() {
        let mut e = engine();
        e.submit("Lyon");
        assert!(e.submit("Paris").is_none());
        assert_eq!(e.outcome(), Some(&DrillOutcome { correct: false }));
    }

    #[test]
    fn test_advance_requires_submission() {
        let mut e = engine();
        assert_eq!(e.advance(), Step::Blocked);
        e.submit("paris");
        assert_eq!(e.advance(), Step::Moved);
        assert!(!e.is_submitted());
        assert_eq!(e.index(), 1);
    }

    #[test]
    fn test_last_item_finishes_instead_of_wrapping() {
        let mut e = engine();
        e.submit("paris");
        e.advance();
        e.submit("oxygen");
        assert_eq!(e.advance(), Step::Finished);
        assert!(e.is_finished());
        assert_eq!(e.index(), 1);
    }
}
