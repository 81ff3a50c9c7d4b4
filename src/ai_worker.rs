use crate::ai::ContentGateway;
use crate::config::Config;
use crate::error::StudyError;
use crate::logger;
use crate::models::{GenerationRequest, GenerationResponse};
use crate::session::start_session;
use crossbeam_channel::{Receiver, Sender};
use std::io;
use std::sync::Arc;
use std::thread;

/// Runs session generation off the UI thread. Requests are served one at a time;
/// the worker exits when either channel disconnects.
pub fn spawn_generation_worker(
    gateway: Arc<dyn ContentGateway>,
    config: Config,
    response_tx: Sender<GenerationResponse>,
    request_rx: Receiver<GenerationRequest>,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("mindspark::generation_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => Some(rt),
                Err(e) => {
                    logger::log(&format!("Worker failed to start runtime: {}", e));
                    None
                }
            };

            while let Ok(GenerationRequest { ticket, topic, mode }) = request_rx.recv() {
                logger::log(&format!(
                    "Worker received request {} ({} for '{}')",
                    ticket, mode, topic
                ));

                let result = match &rt {
                    Some(rt) => rt.block_on(start_session(
                        gateway.as_ref(),
                        topic.as_str(),
                        mode,
                        &config,
                    )),
                    None => Err(StudyError::generation("async runtime unavailable")),
                };

                if let Err(e) = &result {
                    logger::log(&format!("Worker request {} failed: {}", ticket, e));
                }

                if response_tx.send(GenerationResponse { ticket, result }).is_err() {
                    break;
                }
            }

            logger::log("Worker channel disconnected, exiting");
        })
}
