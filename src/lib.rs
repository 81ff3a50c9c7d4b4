pub mod ai;
pub mod ai_worker;
pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use ai::{ContentGateway, ContentRequest, DEFAULT_MODEL, ModelConfig, OpenRouterClient};
pub use ai_worker::spawn_generation_worker;
pub use app::{App, View};
pub use config::Config;
pub use engine::{DrillEngine, FlashcardEngine, QuizEngine, QuizResult};
pub use error::StudyError;
pub use models::{AppMode, Session, StudyContent, StudyMode, Topic};
pub use session::start_session;
pub use ui::draw;
