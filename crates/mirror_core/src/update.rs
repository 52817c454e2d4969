use crate::{AnalysisRequest, AppState, Effect, Msg, RequestState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![Effect::RefreshHistory],
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::AnalysisFinished(outcome) => {
            // Only the submission in flight may settle the request state.
            if !state.request().is_loading() {
                return (state, Vec::new());
            }
            match outcome {
                Ok(result) => {
                    state.set_request(RequestState::Success(result));
                    vec![Effect::RefreshHistory]
                }
                Err(failure) => {
                    state.set_request(RequestState::Error(failure.message()));
                    Vec::new()
                }
            }
        }
        Msg::HistoryLoaded(records) => {
            state.replace_history(records);
            Vec::new()
        }
        Msg::ThemeToggled => {
            let dark_mode = state.toggle_dark_mode();
            vec![Effect::PersistTheme { dark_mode }]
        }
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    // The submit control is disabled while loading; ignore stray submits.
    if state.request().is_loading() {
        return Vec::new();
    }

    match AnalysisRequest::parse(state.input()) {
        Ok(request) => {
            state.set_request(RequestState::Loading);
            vec![Effect::Analyze { request }]
        }
        Err(failure) => {
            state.set_request(RequestState::Error(failure.message()));
            Vec::new()
        }
    }
}
