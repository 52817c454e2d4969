use std::sync::Once;

use mirror_core::{
    update, AnalysisFailure, AnalysisResult, AppState, Effect, Msg, Panel, RequestState, Tier,
    FALLBACK_FAILURE_MESSAGE, INVALID_URL_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(mirror_logging::initialize_for_tests);
}

fn submit_url(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn sample_result() -> AnalysisResult {
    AnalysisResult {
        score: 92,
        summary: "Well structured, thin on tests.".to_string(),
        roadmap: vec!["a".to_string(), "b".to_string()],
    }
}

#[test]
fn invalid_url_errors_without_network_effect() {
    init_logging();
    let (mut state, effects) = submit_url(AppState::new(), "not-a-url");

    assert!(effects.is_empty());
    assert_eq!(
        state.request(),
        &RequestState::Error(INVALID_URL_MESSAGE.to_string())
    );
    assert!(state.view().submit_enabled);
    assert!(state.consume_dirty());
}

#[test]
fn valid_url_moves_to_loading_and_emits_single_request() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "https://github.com/acme/widgets");

    assert_eq!(state.request(), &RequestState::Loading);
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::Analyze { request } => {
            assert_eq!(request.url(), "https://github.com/acme/widgets")
        }
        other => panic!("unexpected effect {other:?}"),
    }

    let view = state.view();
    assert_eq!(view.panel, Panel::Loading);
    assert!(!view.submit_enabled);
}

#[test]
fn success_echoes_payload_and_refreshes_history() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://github.com/acme/widgets");
    let (state, effects) = update(state, Msg::AnalysisFinished(Ok(sample_result())));

    assert_eq!(state.request(), &RequestState::Success(sample_result()));
    assert_eq!(effects, vec![Effect::RefreshHistory]);

    match state.view().panel {
        Panel::Result(result) => {
            assert_eq!(result.score, 92);
            assert_eq!(result.tier, Tier::Gold);
            assert_eq!(result.summary, "Well structured, thin on tests.");
            assert_eq!(result.roadmap, vec!["a".to_string(), "b".to_string()]);
        }
        other => panic!("unexpected panel {other:?}"),
    }
}

#[test]
fn service_error_is_surfaced_verbatim() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://github.com/acme/widgets");
    let (state, effects) = update(
        state,
        Msg::AnalysisFinished(Err(AnalysisFailure::Service("rate limited".to_string()))),
    );

    assert!(effects.is_empty());
    assert_eq!(
        state.request(),
        &RequestState::Error("rate limited".to_string())
    );
}

#[test]
fn transport_error_uses_fallback_message() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://github.com/acme/widgets");
    let (state, effects) = update(state, Msg::AnalysisFinished(Err(AnalysisFailure::Transport)));

    assert!(effects.is_empty());
    assert_eq!(
        state.view().panel,
        Panel::Error(FALLBACK_FAILURE_MESSAGE.to_string())
    );
}

#[test]
fn submit_while_loading_is_ignored() {
    init_logging();
    let (mut state, _) = submit_url(AppState::new(), "https://github.com/acme/widgets");
    assert!(state.consume_dirty());

    let (mut next, effects) = submit_url(state.clone(), "https://github.com/acme/other");

    assert!(effects.is_empty());
    assert_eq!(next.request(), &RequestState::Loading);
    assert!(!next.consume_dirty());
}

#[test]
fn new_submit_discards_prior_result() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://github.com/acme/widgets");
    let (state, _) = update(state, Msg::AnalysisFinished(Ok(sample_result())));

    let (state, effects) = submit_url(state, "https://github.com/acme/next");
    assert_eq!(state.request(), &RequestState::Loading);
    assert_eq!(effects.len(), 1);
    assert!(state.request().result().is_none());

    let (state, _) = submit_url(
        update(state, Msg::AnalysisFinished(Err(AnalysisFailure::Transport))).0,
        "bitbucket.org/acme/widgets",
    );
    assert_eq!(state.request().error(), Some(INVALID_URL_MESSAGE));
}

#[test]
fn completion_without_pending_request_is_dropped() {
    init_logging();
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::AnalysisFinished(Ok(sample_result())));

    assert!(effects.is_empty());
    assert_eq!(next.request(), &RequestState::Idle);
    assert!(!next.consume_dirty());
}

#[test]
fn input_change_alone_does_not_request_render() {
    let (mut next, effects) = update(AppState::new(), Msg::InputChanged("abc".into()));

    assert_eq!(next.input(), "abc");
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn surrounding_whitespace_is_sent_as_typed() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), " https://github.com/acme/widgets ");

    assert_eq!(state.request(), &RequestState::Loading);
    match effects.as_slice() {
        [Effect::Analyze { request }] => {
            assert_eq!(request.url(), " https://github.com/acme/widgets ")
        }
        other => panic!("unexpected effects {other:?}"),
    }
}
