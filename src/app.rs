use crate::engine::{DrillEngine, FlashcardEngine, QuizEngine, Step};
use crate::error::StudyError;
use crate::logger;
use crate::models::{
    AppMode, GenerationRequest, GenerationResponse, Session, StudyContent, StudyMode, Topic,
};
use crate::utils::TextInput;
use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The screen currently shown. Engine progress lives here and is dropped with the view.
#[derive(Debug)]
pub enum View {
    Home,
    Loading(StudyMode),
    Flashcards(FlashcardEngine),
    Quiz {
        engine: QuizEngine,
        highlighted: usize,
    },
    Drill {
        engine: DrillEngine,
        input: TextInput,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    Stay,
    Home,
    ConfirmExit,
}

/// Top-level controller: owns the topic field, the session and the active view.
#[derive(Debug)]
pub struct App {
    pub topic: TextInput,
    pub selected_mode: StudyMode,
    pub view: View,
    pub session: Option<Session>,
    pub status: Option<String>,
    pub confirm_exit: bool,
    pub should_quit: bool,
    pub model: String,
    /// Ticket of the request the Loading view is waiting on.
    in_flight: Option<u64>,
    next_ticket: u64,
    generation_tx: Option<Sender<GenerationRequest>>,
}

impl App {
    /// Without a request channel every generation attempt fails immediately.
    pub fn new(generation_tx: Option<Sender<GenerationRequest>>, model: impl Into<String>) -> Self {
        Self {
            topic: TextInput::default(),
            selected_mode: StudyMode::Flashcards,
            view: View::Home,
            session: None,
            status: None,
            confirm_exit: false,
            should_quit: false,
            model: model.into(),
            in_flight: None,
            next_ticket: 0,
            generation_tx,
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.generation_tx.is_some()
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn mode(&self) -> AppMode {
        match self.view {
            View::Home => AppMode::Home,
            View::Loading(_) => AppMode::Loading,
            View::Flashcards(_) => AppMode::Flashcards,
            View::Quiz { .. } => AppMode::Quiz,
            View::Drill { .. } => AppMode::Drill,
        }
    }

    /// Validates the topic and dispatches one generation request for `mode`.
    ///
    /// Ignored while the Loading view is still waiting on a reply.
    pub fn request_session(&mut self, mode: StudyMode) -> Result<(), StudyError> {
        if self.in_flight.is_some() {
            logger::log("Session request ignored: generation already in flight");
            self.status = Some("Still generating the previous request...".to_string());
            return Ok(());
        }

        let topic = match Topic::parse(self.topic.as_str()) {
            Ok(topic) => topic,
            Err(e) => return Err(self.fail(e)),
        };

        let Some(tx) = &self.generation_tx else {
            return Err(self.fail(StudyError::generation(
                "AI disabled: OPENROUTER_API_KEY is not set",
            )));
        };

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        logger::log(&format!(
            "Dispatching request {} ({} for '{}')",
            ticket, mode, topic
        ));
        if tx.send(GenerationRequest { ticket, topic, mode }).is_err() {
            return Err(self.fail(StudyError::generation("generation worker is gone")));
        }

        self.in_flight = Some(ticket);
        self.session = None;
        self.status = None;
        self.view = View::Loading(mode);
        Ok(())
    }

    /// Applies a worker reply. Replies for abandoned or superseded requests are dropped.
    pub fn handle_generation(&mut self, response: GenerationResponse) {
        if self.in_flight != Some(response.ticket) {
            logger::log(&format!("Dropping stale response {}", response.ticket));
            return;
        }
        self.in_flight = None;

        match response.result {
            Ok(session) => self.enter_session(session),
            Err(e) => {
                self.fail(e);
            }
        }
    }

    fn enter_session(&mut self, session: Session) {
        self.view = match session.content() {
            StudyContent::Flashcards(cards) => View::Flashcards(FlashcardEngine::new(cards.clone())),
            StudyContent::Quiz(questions) => View::Quiz {
                engine: QuizEngine::new(questions.clone()),
                highlighted: 0,
            },
            StudyContent::Drill(items) => View::Drill {
                engine: DrillEngine::new(items.clone()),
                input: TextInput::default(),
            },
        };
        self.session = Some(session);
        self.confirm_exit = false;
    }

    fn fail(&mut self, error: StudyError) -> StudyError {
        logger::log(&format!("Session request failed: {}", error));
        self.status = Some(error.user_message().to_string());
        self.session = None;
        self.view = View::Home;
        error
    }

    /// Discards the session and any engine progress. The topic text is kept.
    pub fn go_home(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            logger::log(&format!("Abandoning request {}", ticket));
        }
        self.view = View::Home;
        self.session = None;
        self.confirm_exit = false;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.confirm_exit {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.go_home(),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirm_exit = false
                }
                _ => {}
            }
            return;
        }

        if matches!(self.view, View::Home) {
            self.handle_home_input(key);
            return;
        }

        let nav = match &mut self.view {
            View::Home => Nav::Stay,
            View::Loading(_) => {
                if key.code == KeyCode::Esc {
                    Nav::Home
                } else {
                    Nav::Stay
                }
            }
            View::Flashcards(engine) => handle_flashcard_input(engine, key),
            View::Quiz {
                engine,
                highlighted,
            } => handle_quiz_input(engine, highlighted, key),
            View::Drill { engine, input } => handle_drill_input(engine, input, key),
        };

        match nav {
            Nav::Stay => {}
            Nav::Home => self.go_home(),
            Nav::ConfirmExit => self.confirm_exit = true,
        }
    }

    fn handle_home_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                if let Err(e) = self.request_session(self.selected_mode) {
                    logger::log(&format!("Home request not started: {}", e));
                }
            }
            KeyCode::Up | KeyCode::BackTab => self.selected_mode = self.selected_mode.prev(),
            KeyCode::Down | KeyCode::Tab => self.selected_mode = self.selected_mode.next(),
            KeyCode::Left => self.topic.move_left(),
            KeyCode::Right => self.topic.move_right(),
            KeyCode::Backspace => {
                self.topic.backspace();
                self.status = None;
            }
            KeyCode::Char(c) => {
                self.topic.insert(c);
                self.status = None;
            }
            _ => {}
        }
    }
}

fn handle_flashcard_input(engine: &mut FlashcardEngine, key: KeyEvent) -> Nav {
    match key.code {
        KeyCode::Esc => return Nav::Home,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up | KeyCode::Down => engine.flip(),
        KeyCode::Right | KeyCode::Char('n') => {
            engine.next();
        }
        KeyCode::Left | KeyCode::Char('p') => {
            engine.prev();
        }
        _ => {}
    }
    Nav::Stay
}

fn handle_quiz_input(engine: &mut QuizEngine, highlighted: &mut usize, key: KeyEvent) -> Nav {
    if engine.is_completed() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Nav::Home,
            _ => Nav::Stay,
        };
    }

    if key.code == KeyCode::Esc {
        return Nav::ConfirmExit;
    }

    let option_count = engine.current().map_or(0, |q| q.options.len());

    if engine.answer().is_none() {
        match key.code {
            KeyCode::Up => *highlighted = highlighted.saturating_sub(1),
            KeyCode::Down => {
                if *highlighted + 1 < option_count {
                    *highlighted += 1;
                }
            }
            KeyCode::Enter => {
                engine.select_option_at(*highlighted);
            }
            KeyCode::Char(c) => {
                if let Some(position) = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .filter(|&p| p < option_count)
                {
                    *highlighted = position;
                    engine.select_option_at(position);
                }
            }
            _ => {}
        }
        return Nav::Stay;
    }

    if matches!(key.code, KeyCode::Enter | KeyCode::Right) {
        match engine.advance() {
            Step::Moved => *highlighted = 0,
            Step::Finished => {
                if let Some(result) = engine.result() {
                    logger::log(&format!(
                        "Quiz completed: {}/{} ({}%)",
                        result.score,
                        result.total,
                        result.percentage()
                    ));
                }
            }
            Step::Wrapped | Step::Blocked => {}
        }
    }
    Nav::Stay
}

fn handle_drill_input(engine: &mut DrillEngine, input: &mut TextInput, key: KeyEvent) -> Nav {
    if key.code == KeyCode::Esc {
        return Nav::ConfirmExit;
    }

    if engine.is_submitted() {
        if key.code == KeyCode::Enter {
            match engine.advance() {
                Step::Finished => {
                    logger::log("Drill finished");
                    return Nav::Home;
                }
                Step::Moved => input.clear(),
                Step::Wrapped | Step::Blocked => {}
            }
        }
        return Nav::Stay;
    }

    match key.code {
        KeyCode::Enter => {
            engine.submit(input.as_str());
        }
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Char(c) => input.insert(c),
        _ => {}
    }
    Nav::Stay
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::mock::{FIVE_QUESTION_QUIZ, MockGateway, THREE_FLASHCARDS, TWO_DRILLS};
    use crate::ai::parse_content;
    use crate::ai_worker::spawn_generation_worker;
    use crate::config::Config;
    use crate::engine::{QuizResult, QuizStatus};
    use crossbeam_channel::{Receiver, unbounded};
    use std::sync::Arc;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with_channel() -> (App, Receiver<GenerationRequest>) {
        let (tx, rx) = unbounded();
        (App::new(Some(tx), "test-model"), rx)
    }

    fn session(mode: StudyMode, payload: &str) -> Session {
        Session::new(
            Topic::parse("Photosynthesis").unwrap(),
            parse_content(mode, payload).unwrap(),
        )
    }

    /// Dispatches a request and answers it with `payload`.
    fn start(app: &mut App, rx: &Receiver<GenerationRequest>, mode: StudyMode, payload: &str) {
        app.request_session(mode).unwrap();
        let request = rx.try_recv().unwrap();
        app.handle_generation(GenerationResponse {
            ticket: request.ticket,
            result: Ok(session(mode, payload)),
        });
    }

    #[test]
    fn test_empty_topic_never_dispatches() {
        let (mut app, rx) = app_with_channel();
        type_text(&mut app, "   ");
        assert_eq!(
            app.request_session(StudyMode::Quiz),
            Err(StudyError::InvalidInput)
        );
        assert!(rx.try_recv().is_err());
        assert_eq!(app.mode(), AppMode::Home);
        assert_eq!(app.status.as_deref(), Some("Please enter a topic first!"));
    }

    #[test]
    fn test_request_enters_loading() {
        let (mut app, rx) = app_with_channel();
        type_text(&mut app, "Photosynthesis");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.mode(), AppMode::Loading);
        let request = rx.try_recv().unwrap();
        assert_eq!(request.mode, StudyMode::Quiz);
        assert_eq!(request.topic.as_str(), "Photosynthesis");
    }

    #[test]
    fn test_only_one_request_while_loading() {
        let (mut app, rx) = app_with_channel();
        type_text(&mut app, "Rust");
        app.request_session(StudyMode::Flashcards).unwrap();
        app.request_session(StudyMode::Quiz).unwrap();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
        assert_eq!(app.mode(), AppMode::Loading);
    }

    #[test]
    fn test_new_request_after_leaving_loading() {
        let (mut app, rx) = app_with_channel();
        type_text(&mut app, "Rust");
        app.request_session(StudyMode::Flashcards).unwrap();
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.is_generating());

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.mode(), AppMode::Loading);

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert_eq!(second.mode, StudyMode::Quiz);
        assert!(second.ticket > first.ticket);

        app.handle_generation(GenerationResponse {
            ticket: second.ticket,
            result: Ok(session(StudyMode::Quiz, FIVE_QUESTION_QUIZ)),
        });
        assert_eq!(app.mode(), AppMode::Quiz);

        app.handle_generation(GenerationResponse {
            ticket: first.ticket,
            result: Ok(session(StudyMode::Flashcards, THREE_FLASHCARDS)),
        });
        assert_eq!(app.mode(), AppMode::Quiz);
        assert_eq!(app.session.as_ref().map(Session::mode), Some(StudyMode::Quiz));
    }

    #[test]
    fn test_no_generator_fails_without_dispatch() {
        let mut app = App::new(None, "test-model");
        type_text(&mut app, "Rust");
        let err = app.request_session(StudyMode::Drill).unwrap_err();
        assert!(matches!(err, StudyError::GenerationFailed(_)));
        assert_eq!(app.mode(), AppMode::Home);
        assert!(!app.ai_enabled());
    }

    #[test]
    fn test_generation_failure_returns_home() {
        let (mut app, rx) = app_with_channel();
        type_text(&mut app, "Rust");
        app.request_session(StudyMode::Quiz).unwrap();
        let request = rx.try_recv().unwrap();
        app.handle_generation(GenerationResponse {
            ticket: request.ticket,
            result: Err(StudyError::generation("boom")),
        });

        assert_eq!(app.mode(), AppMode::Home);
        assert!(app.session.is_none());
        assert!(!app.is_generating());
        assert!(app.status.as_deref().unwrap().starts_with("Something went wrong"));
    }

    #[test]
    fn test_abandoned_response_is_dropped() {
        let (mut app, rx) = app_with_channel();
        type_text(&mut app, "Rust");
        app.request_session(StudyMode::Flashcards).unwrap();
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.mode(), AppMode::Home);

        let request = rx.try_recv().unwrap();
        app.handle_generation(GenerationResponse {
            ticket: request.ticket,
            result: Ok(session(StudyMode::Flashcards, THREE_FLASHCARDS)),
        });

        assert_eq!(app.mode(), AppMode::Home);
        assert!(app.session.is_none());
        assert!(!app.is_generating());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let (mut app, rx) = app_with_channel();
        type_text(&mut app, "Rust");
        app.request_session(StudyMode::Flashcards).unwrap();
        let request = rx.try_recv().unwrap();

        app.handle_generation(GenerationResponse {
            ticket: request.ticket + 100,
            result: Ok(session(StudyMode::Flashcards, THREE_FLASHCARDS)),
        });
        assert_eq!(app.mode(), AppMode::Loading);
        assert!(app.is_generating());
    }

    #[test]
    fn test_flashcard_keys() {
        let (mut app, rx) = app_with_channel();
        type_text(&mut app, "Photosynthesis");
        start(&mut app, &rx, StudyMode::Flashcards, THREE_FLASHCARDS);
        assert_eq!(app.mode(), AppMode::Flashcards);

        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        let View::Flashcards(engine) = &app.view else {
            panic!("expected flashcards");
        };
        assert_eq!(engine.index(), 0);
        assert!(!engine.is_flipped());

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.mode(), AppMode::Home);
        assert!(app.session.is_none());
        assert_eq!(app.topic.as_str(), "Photosynthesis");
    }

    #[test]
    fn test_quiz_exit_needs_confirmation() {
        let (mut app, rx) = app_with_channel();
        type_text(&mut app, "Photosynthesis");
        start(&mut app, &rx, StudyMode::Quiz, FIVE_QUESTION_QUIZ);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.confirm_exit);
        app.handle_key(key(KeyCode::Char('n')));
        assert!(!app.confirm_exit);
        assert_eq!(app.mode(), AppMode::Quiz);

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('y')));
        assert_eq!(app.mode(), AppMode::Home);
    }

    #[test]
    fn test_quiz_highlight_and_enter() {
        let (mut app, rx) = app_with_channel();
        type_text(&mut app, "Photosynthesis");
        start(&mut app, &rx, StudyMode::Quiz, FIVE_QUESTION_QUIZ);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        let View::Quiz { engine, highlighted } = &app.view else {
            panic!("expected quiz");
        };
        assert_eq!(*highlighted, 2);
        assert_eq!(engine.answer().unwrap().selected, "Melanin");
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_drill_runs_to_completion_and_exits() {
        let (mut app, rx) = app_with_channel();
        type_text(&mut app, "Geography");
        start(&mut app, &rx, StudyMode::Drill, TWO_DRILLS);

        app.handle_key(key(KeyCode::Enter));
        let View::Drill { engine, .. } = &app.view else {
            panic!("expected drill");
        };
        assert!(!engine.is_submitted());

        type_text(&mut app, " Paris ");
        app.handle_key(key(KeyCode::Enter));
        let View::Drill { engine, .. } = &app.view else {
            panic!("expected drill");
        };
        assert_eq!(engine.outcome().map(|o| o.correct), Some(true));

        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "nitrogen");
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.mode(), AppMode::Home);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_photosynthesis_quiz_end_to_end() {
        let (request_tx, request_rx) = unbounded();
        let (response_tx, response_rx) = unbounded();
        let gateway = Arc::new(MockGateway::replying(FIVE_QUESTION_QUIZ));
        let _worker = spawn_generation_worker(
            gateway.clone(),
            Config::default(),
            response_tx,
            request_rx,
        )
        .unwrap();

        let mut app = App::new(Some(request_tx), "test-model");
        type_text(&mut app, "Photosynthesis");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.mode(), AppMode::Loading);

        let response = response_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        app.handle_generation(response);
        assert_eq!(app.mode(), AppMode::Quiz);
        assert_eq!(gateway.calls(), 1);

        // Correct answers sit at positions 1, 2, 1, 2, 1; get only the first and third right.
        for pick in ['1', '1', '1', '1', '2'] {
            app.handle_key(key(KeyCode::Char(pick)));
            app.handle_key(key(KeyCode::Enter));
        }

        let View::Quiz { engine, .. } = &app.view else {
            panic!("expected quiz");
        };
        let result = QuizResult { score: 2, total: 5 };
        assert_eq!(engine.status(), QuizStatus::Completed(result));
        assert_eq!(result.percentage(), 40);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.mode(), AppMode::Home);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let (mut app, rx) = app_with_channel();
        type_text(&mut app, "Rust");
        start(&mut app, &rx, StudyMode::Quiz, FIVE_QUESTION_QUIZ);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
