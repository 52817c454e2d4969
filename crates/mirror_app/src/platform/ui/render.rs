use std::fmt::Write as _;

use mirror_core::{AppViewModel, HistoryRowView, Panel, ResultView, Tier};
use owo_colors::OwoColorize;

use super::constants::*;

/// Terminal styling for one theme. With `color` off every method returns the
/// text unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dark_mode: bool,
    pub color: bool,
}

impl Palette {
    pub fn new(dark_mode: bool, color: bool) -> Self {
        Self { dark_mode, color }
    }

    fn heading(&self, text: &str) -> String {
        match (self.color, self.dark_mode) {
            (false, _) => text.to_string(),
            (true, true) => text.bold().bright_white().to_string(),
            (true, false) => text.bold().black().to_string(),
        }
    }

    fn muted(&self, text: &str) -> String {
        match (self.color, self.dark_mode) {
            (false, _) => text.to_string(),
            (true, true) => text.bright_black().to_string(),
            (true, false) => text.dimmed().to_string(),
        }
    }

    fn tier(&self, tier: Tier, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match (tier, self.dark_mode) {
            (Tier::Gold, true) => text.bright_green().to_string(),
            (Tier::Gold, false) => text.green().to_string(),
            (Tier::Silver, true) => text.bright_yellow().to_string(),
            (Tier::Silver, false) => text.yellow().to_string(),
            (Tier::NeedsImprovement, true) => text.bright_red().to_string(),
            (Tier::NeedsImprovement, false) => text.red().to_string(),
        }
    }

    fn error(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn accent(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Full screen for the current view model.
pub fn render(view: &AppViewModel, color: bool) -> String {
    let palette = Palette::new(view.dark_mode, color);
    let mut out = String::new();

    render_header(&mut out, &palette, view.dark_mode);
    out.push('\n');
    render_panel(&mut out, &palette, &view.panel);
    out.push('\n');
    render_history(&mut out, &palette, &view.history);
    out
}

pub fn render_help(dark_mode: bool, color: bool) -> String {
    let palette = Palette::new(dark_mode, color);
    let mut out = String::new();
    let _ = writeln!(out, "{}", palette.heading("Commands"));
    let _ = writeln!(out, "  <url>     scan a repository, e.g. {URL_PLACEHOLDER}");
    let _ = writeln!(out, "  {CMD_THEME}    toggle light/dark mode");
    let _ = writeln!(out, "  {CMD_HELP}     show this help");
    let _ = writeln!(out, "  {CMD_QUIT}     exit");
    out
}

pub fn busy_notice(dark_mode: bool, color: bool) -> String {
    let palette = Palette::new(dark_mode, color);
    format!(
        "{}\n",
        palette.muted("A scan is already running; wait for it to finish.")
    )
}

fn render_header(out: &mut String, palette: &Palette, dark_mode: bool) {
    let mode = if dark_mode { "dark" } else { "light" };
    let _ = writeln!(
        out,
        "{} {} {}",
        palette.heading(APP_TITLE),
        palette.muted(&format!("· {APP_SUBTITLE}")),
        palette.muted(&format!("[{mode} mode, {CMD_THEME} to switch]")),
    );
}

fn render_panel(out: &mut String, palette: &Palette, panel: &Panel) {
    match panel {
        Panel::Idle => {
            let _ = writeln!(
                out,
                "{}",
                palette.muted(&format!(
                    "Paste a repository URL ({URL_PLACEHOLDER}) and press Enter."
                ))
            );
        }
        Panel::Loading => {
            let _ = writeln!(out, "{}", palette.accent("⟳ Scanning repository..."));
        }
        Panel::Error(message) => {
            let _ = writeln!(out, "{}", palette.error(&format!("⚠ {message}")));
        }
        Panel::Result(result) => render_result(out, palette, result),
    }
}

fn render_result(out: &mut String, palette: &Palette, result: &ResultView) {
    let _ = writeln!(
        out,
        "{} {}  [{}]",
        palette.heading("Quality Score:"),
        palette.tier(result.tier, &result.score.to_string()),
        palette.tier(result.tier, &result.tier.label().to_uppercase()),
    );
    out.push('\n');
    let _ = writeln!(out, "{}", palette.heading("Review Summary"));
    let _ = writeln!(out, "  {}", result.summary);
    out.push('\n');
    let _ = writeln!(out, "{}", palette.heading("Improvement Roadmap"));
    if result.roadmap.is_empty() {
        let _ = writeln!(out, "  {}", palette.muted("Nothing to improve."));
    }
    for item in &result.roadmap {
        let _ = writeln!(out, "  {} {}", palette.tier(Tier::Gold, "✓"), item);
    }
}

fn render_history(out: &mut String, palette: &Palette, rows: &[HistoryRowView]) {
    let _ = writeln!(out, "{}", palette.heading("Recent Scans"));
    if rows.is_empty() {
        let _ = writeln!(out, "  {}", palette.muted("No history available."));
        return;
    }
    for row in rows {
        let name = truncate(&row.name, HISTORY_NAME_WIDTH);
        let _ = writeln!(
            out,
            "  {:<width$} {}  {}",
            name,
            palette.muted(&row.date),
            palette.tier(row.tier, &format!("{:>3}", row.score)),
            width = HISTORY_NAME_WIDTH,
        );
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
