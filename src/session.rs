use crate::ai::{ContentGateway, ContentRequest, parse_content};
use crate::config::Config;
use crate::error::StudyError;
use crate::logger;
use crate::models::{Session, StudyMode, Topic};

/// Generates and validates a new session.
///
/// A blank topic fails with `InvalidInput` before the gateway is contacted. Every
/// gateway, parse, or validation failure, and an empty item list, comes back as
/// `GenerationFailed`; nothing partial is ever returned.
pub async fn start_session(
    gateway: &dyn ContentGateway,
    topic: &str,
    mode: StudyMode,
    config: &Config,
) -> Result<Session, StudyError> {
    let topic = Topic::parse(topic)?;
    let request = ContentRequest::new(topic.clone(), mode, config);

    let payload = gateway.generate(&request).await?;
    let content = parse_content(mode, &payload).inspect_err(|e| {
        logger::log(&format!("Rejected {} payload for '{}': {}", mode, topic, e));
    })?;

    if content.is_empty() {
        return Err(StudyError::generation("generator returned no items"));
    }

    logger::log(&format!(
        "Session ready: {} {} item(s) for '{}'",
        content.len(),
        mode,
        topic
    ));
    Ok(Session::new(topic, content))
}
