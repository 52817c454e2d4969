use std::sync::{mpsc, Arc};

use anyhow::Context;
use mirror_core::{AnalysisFailure, Effect, Msg};
use mirror_engine::{
    ApiError, ApiSettings, EngineEvent, EngineHandle, EventSink, PreferenceStore,
    ReqwestReviewApi,
};
use mirror_logging::{mirror_debug, mirror_error, mirror_info};

use super::app::LoopEvent;

/// Executes effects emitted by `update` against the engine and local storage.
pub struct EffectRunner {
    engine: EngineHandle,
    preferences: PreferenceStore,
}

impl EffectRunner {
    pub fn new(
        api_settings: &ApiSettings,
        preferences: PreferenceStore,
        event_tx: mpsc::Sender<LoopEvent>,
    ) -> anyhow::Result<Self> {
        let api = ReqwestReviewApi::new(api_settings)
            .with_context(|| format!("invalid analysis service url {:?}", api_settings.base_url))?;
        mirror_info!("Using analysis service at {}", api.base_url());

        let sink = Arc::new(MsgForwarder { event_tx });
        let engine =
            EngineHandle::new(Arc::new(api), sink).context("failed to start engine runtime")?;
        Ok(Self {
            engine,
            preferences,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Analyze { request } => {
                    mirror_debug!("Analyze {}", request.url());
                    self.engine.analyze(request);
                }
                Effect::RefreshHistory => {
                    mirror_debug!("Refreshing history");
                    self.engine.refresh_history();
                }
                Effect::PersistTheme { dark_mode } => {
                    if let Err(err) = self.preferences.save(dark_mode) {
                        mirror_error!(
                            "Failed to persist theme to {:?}: {}",
                            self.preferences.path(),
                            err
                        );
                    }
                }
            }
        }
    }
}

/// Turns engine events into messages for the event loop.
struct MsgForwarder {
    event_tx: mpsc::Sender<LoopEvent>,
}

impl EventSink for MsgForwarder {
    fn emit(&self, event: EngineEvent) {
        if let Some(msg) = map_event(event) {
            let _ = self.event_tx.send(LoopEvent::Msg(msg));
        }
    }
}

/// History failures never reach the state machine; the held list stays as is.
fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::AnalysisCompleted { result } => {
            Some(Msg::AnalysisFinished(result.map_err(|err| map_failure(&err))))
        }
        EngineEvent::HistoryFetched { result: Ok(records) } => Some(Msg::HistoryLoaded(records)),
        EngineEvent::HistoryFetched { result: Err(err) } => {
            mirror_debug!("Keeping previous history after failed fetch: {}", err);
            None
        }
    }
}

fn map_failure(err: &ApiError) -> AnalysisFailure {
    AnalysisFailure::from_service_message(err.service_message().map(str::to_owned))
}
