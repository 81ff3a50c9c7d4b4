use super::{EndBehavior, ItemPolicy, Progression, Step};
use crate::models::QuizQuestion;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswer {
    pub selected: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct QuizPolicy;

impl ItemPolicy for QuizPolicy {
    type Item = QuizQuestion;
    type Outcome = QuizAnswer;

    const AT_END: EndBehavior = EndBehavior::Finish;
    const REQUIRES_OUTCOME: bool = true;

    fn evaluate(question: &QuizQuestion, option: &str) -> Option<QuizAnswer> {
        if !question.options.iter().any(|o| o == option) {
            return None;
        }
        Some(QuizAnswer {
            selected: option.to_string(),
            is_correct: question.is_correct(option),
        })
    }

    fn is_success(answer: &QuizAnswer) -> bool {
        answer.is_correct
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

impl QuizResult {
    /// `100 * score / total` rounded half away from zero; 0 for an empty quiz.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((200 * self.score + self.total) / (2 * self.total)) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStatus {
    InProgress { index: usize, score: usize },
    Completed(QuizResult),
}

#[derive(Debug, Clone)]
pub struct QuizEngine {
    progress: Progression<QuizPolicy>,
}

impl QuizEngine {
    pub fn new(questions: Arc<[QuizQuestion]>) -> Self {
        Self {
            progress: Progression::new(questions),
        }
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.progress.current()
    }

    /// The recorded answer for the current question, if any.
    pub fn answer(&self) -> Option<&QuizAnswer> {
        self.progress.outcome()
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

    pub fn score(&self) -> usize {
        self.progress.successes()
    }

    /// Records the first answer for the current question; later calls are ignored.
    pub fn select_option(&mut self, option: &str) -> Option<&QuizAnswer> {
        self.progress.evaluate(option)
    }

    pub fn select_option_at(&mut self, position: usize) -> Option<&QuizAnswer> {
        let option = self.current()?.options.get(position)?.clone();
        self.select_option(&option)
    }

    pub fn advance(&mut self) -> Step {
        self.progress.advance()
    }

    pub fn status(&self) -> QuizStatus {
        if self.progress.is_finished() {
            QuizStatus::Completed(QuizResult {
                score: self.score(),
                total: self.len(),
            })
        } else {
            QuizStatus::InProgress {
                index: self.index(),
                score: self.score(),
            }
        }
    }

    pub fn result(&self) -> Option<QuizResult> {
        match self.status() {
            QuizStatus::Completed(result) => Some(result),
            QuizStatus::InProgress { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.progress.is_finished()
    }
}
