use chrono::{TimeZone, Utc};
use mirror_core::{update, AppState, Effect, HistoryRecord, Msg, Tier};
use pretty_assertions::assert_eq;

fn record(id: &str, repo_url: &str, repo_name: Option<&str>, score: i64) -> HistoryRecord {
    HistoryRecord {
        id: id.to_string(),
        repo_url: repo_url.to_string(),
        repo_name: repo_name.map(ToString::to_string),
        score,
        created_at: Utc.with_ymd_and_hms(2024, 5, 17, 22, 30, 0).unwrap(),
    }
}

#[test]
fn startup_requests_history() {
    let (state, effects) = update(AppState::new(), Msg::Started);
    assert_eq!(effects, vec![Effect::RefreshHistory]);
    assert!(state.history().is_empty());
}

#[test]
fn refresh_replaces_instead_of_merging() {
    let first = vec![
        record("a", "https://github.com/acme/one", None, 40),
        record("b", "https://github.com/acme/two", None, 60),
    ];
    let second = vec![record("c", "https://github.com/acme/three", None, 90)];

    let (state, _) = update(AppState::new(), Msg::HistoryLoaded(first));
    assert_eq!(state.history().len(), 2);

    let (state, effects) = update(state, Msg::HistoryLoaded(second.clone()));
    assert!(effects.is_empty());
    assert_eq!(state.history().records(), second.as_slice());
}

#[test]
fn service_order_is_preserved() {
    let records = vec![
        record("z", "https://github.com/acme/low", None, 10),
        record("a", "https://github.com/acme/high", None, 99),
        record("m", "https://github.com/acme/mid", None, 55),
    ];
    let (state, _) = update(AppState::new(), Msg::HistoryLoaded(records));

    let ids: Vec<String> = state.view().history.into_iter().map(|row| row.id).collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
}

#[test]
fn history_rows_carry_name_date_and_tier() {
    let records = vec![
        record("a", "https://github.com/acme/widgets", None, 80),
        record("b", "https://github.com/acme/gears", Some("Gears"), 49),
    ];
    let (mut state, _) = update(AppState::new(), Msg::HistoryLoaded(records));
    assert!(state.consume_dirty());

    let rows = state.view().history;
    assert_eq!(rows[0].name, "acme/widgets");
    assert_eq!(rows[0].date, "2024-05-17");
    assert_eq!(rows[0].tier, Tier::Gold);
    assert_eq!(rows[1].name, "Gears");
    assert_eq!(rows[1].tier, Tier::NeedsImprovement);
}

#[test]
fn empty_snapshot_clears_held_history() {
    let (state, _) = update(
        AppState::new(),
        Msg::HistoryLoaded(vec![record("a", "https://github.com/acme/one", None, 70)]),
    );
    let (state, _) = update(state, Msg::HistoryLoaded(Vec::new()));
    assert!(state.view().history.is_empty());
}
