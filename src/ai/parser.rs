use crate::error::StudyError;
use crate::logger;
use crate::models::{DrillItem, Flashcard, QuizQuestion, StudyContent, StudyMode};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::Arc;

/// Strips code fences and surrounding prose, leaving the outermost JSON array.
fn clean_json_response(response: &str) -> String {
    let mut cleaned = response.trim().to_string();

    if cleaned.starts_with("```") {
        let lines: Vec<&str> = cleaned.lines().collect();
        if lines.len() > 2 {
            cleaned = lines[1..lines.len() - 1].join("\n");
        }
    }

    if let Some(start) = cleaned.find('[')
        && let Some(end) = cleaned.rfind(']')
        && start < end
    {
        cleaned = cleaned[start..=end].to_string();
    }

    cleaned.trim().to_string()
}

fn parse_items<T: DeserializeOwned>(cleaned: &str) -> Result<Vec<T>, StudyError> {
    serde_json::from_str(cleaned)
        .map_err(|e| StudyError::generation(format!("malformed payload: {}", e)))
}

fn validate_flashcard(index: usize, card: &Flashcard) -> Result<(), String> {
    if card.front.trim().is_empty() || card.back.trim().is_empty() {
        return Err(format!("flashcard {} has a blank side", index));
    }
    Ok(())
}

fn validate_question(index: usize, question: &QuizQuestion) -> Result<(), String> {
    if question.options.len() < 2 {
        return Err(format!("question {} has fewer than two options", index));
    }
    let mut seen = HashSet::new();
    if !question.options.iter().all(|o| seen.insert(o.as_str())) {
        return Err(format!("question {} repeats an option", index));
    }
    if !question.options.contains(&question.correct_answer) {
        return Err(format!(
            "question {} answer '{}' is not among its options",
            index, question.correct_answer
        ));
    }
    Ok(())
}

fn validate_drill(index: usize, item: &DrillItem) -> Result<(), String> {
    if item.missing_word.trim().is_empty() {
        return Err(format!("drill {} has a blank missing word", index));
    }
    match item.placeholder_count() {
        1 => Ok(()),
        n => Err(format!("drill {} has {} blanks, expected exactly one", index, n)),
    }
}

fn validate_all<T>(
    items: Vec<T>,
    check: impl Fn(usize, &T) -> Result<(), String>,
) -> Result<Arc<[T]>, StudyError> {
    for (i, item) in items.iter().enumerate() {
        check(i, item).map_err(StudyError::GenerationFailed)?;
    }
    Ok(Arc::from(items))
}

/// Turns a raw generator payload into typed content for `mode`.
///
/// The whole payload is rejected when any element is missing a field or breaks an
/// item invariant, so a partially valid list never reaches a session.
pub fn parse_content(mode: StudyMode, payload: &str) -> Result<StudyContent, StudyError> {
    let cleaned = clean_json_response(payload);
    if cleaned.is_empty() {
        return Ok(empty_content(mode));
    }

    let content = match mode {
        StudyMode::Flashcards => {
            StudyContent::Flashcards(validate_all(parse_items(&cleaned)?, validate_flashcard)?)
        }
        StudyMode::Quiz => {
            StudyContent::Quiz(validate_all(parse_items(&cleaned)?, validate_question)?)
        }
        StudyMode::Drill => {
            StudyContent::Drill(validate_all(parse_items(&cleaned)?, validate_drill)?)
        }
    };
    Ok(content)
}

fn empty_content(mode: StudyMode) -> StudyContent {
    logger::log(&format!("Generator returned an empty payload for {}", mode));
    match mode {
        StudyMode::Flashcards => StudyContent::Flashcards(Arc::from(Vec::new())),
        StudyMode::Quiz => StudyContent::Quiz(Arc::from(Vec::new())),
        StudyMode::Drill => StudyContent::Drill(Arc::from(Vec::new())),
    }
}
