use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use mirror_core::AnalysisRequest;
use mirror_logging::{mirror_debug, mirror_info, mirror_warn};

use crate::api::ReviewApi;
use crate::EngineEvent;

/// Receives engine events on the runtime's worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Analyze { request: AnalysisRequest },
    RefreshHistory,
}

/// Runs service calls on a background tokio runtime.
///
/// Commands are fire-and-forget; each completion is reported once through the
/// sink. Dropping the handle stops the runtime and abandons calls in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn ReviewApi>, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("mirror-engine")
            .build()?;

        thread::Builder::new()
            .name("mirror-engine-commands".into())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(api.as_ref(), sink.as_ref(), command).await;
                    });
                }
                mirror_debug!("Engine command channel closed; shutting down runtime");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn analyze(&self, request: AnalysisRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Analyze { request });
    }

    pub fn refresh_history(&self) {
        let _ = self.cmd_tx.send(EngineCommand::RefreshHistory);
    }
}

async fn handle_command(api: &dyn ReviewApi, sink: &dyn EventSink, command: EngineCommand) {
    match command {
        EngineCommand::Analyze { request } => {
            let result = api.analyze(&request).await;
            match &result {
                Ok(analysis) => mirror_info!(
                    "Analysis of {} finished with score {}",
                    request.url(),
                    analysis.score
                ),
                Err(err) => mirror_warn!("Analysis of {} failed: {}", request.url(), err),
            }
            sink.emit(EngineEvent::AnalysisCompleted { result });
        }
        EngineCommand::RefreshHistory => {
            let result = api.history().await;
            match &result {
                Ok(records) => mirror_debug!("Fetched {} history records", records.len()),
                Err(err) => mirror_warn!("Could not fetch history: {}", err),
            }
            sink.emit(EngineEvent::HistoryFetched { result });
        }
    }
}
