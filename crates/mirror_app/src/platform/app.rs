use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use is_terminal::IsTerminal;
use mirror_core::{update, AppState, Msg};
use mirror_engine::PreferenceStore;
use mirror_logging::{mirror_debug, mirror_info, mirror_warn};

use super::effects::EffectRunner;
use super::ui::constants::PROMPT;
use super::ui::input::{parse_command, Command};
use super::ui::render;
use crate::config::AppConfig;

/// Everything the event loop reacts to, in arrival order.
#[derive(Debug)]
pub enum LoopEvent {
    Msg(Msg),
    Help,
    Quit,
    /// Stdin reached end of file.
    InputClosed,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let preferences = PreferenceStore::in_dir(&config.prefs_dir);
    let dark_mode = preferences.load();
    mirror_info!(
        "Starting with dark_mode={} prefs={:?}",
        dark_mode,
        preferences.path()
    );

    let (event_tx, event_rx) = mpsc::channel::<LoopEvent>();
    let effects = EffectRunner::new(&config.api, preferences, event_tx.clone())?;
    spawn_input_reader(event_tx).context("failed to start input reader")?;

    let stdout = io::stdout();
    let color = !config.no_color && stdout.is_terminal();
    let mut app = App {
        state: AppState::with_dark_mode(dark_mode),
        effects,
        out: stdout,
        color,
    };

    app.render()?;
    app.dispatch(Msg::Started)?;

    let mut input_closed = false;
    while let Ok(event) = event_rx.recv() {
        match event {
            LoopEvent::Msg(msg) => app.dispatch(msg)?,
            LoopEvent::Help => app.write(&render::render_help(app.state.dark_mode(), color))?,
            LoopEvent::Quit => break,
            LoopEvent::InputClosed => input_closed = true,
        }
        // Piped input: let the last scan finish before exiting.
        if input_closed && !app.state.request().is_loading() {
            break;
        }
    }

    mirror_info!("Shutting down");
    Ok(())
}

struct App<W: Write> {
    state: AppState,
    effects: EffectRunner,
    out: W,
    color: bool,
}

impl<W: Write> App<W> {
    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        if msg == Msg::SubmitClicked && self.state.request().is_loading() {
            // Submit control is disabled while a scan runs.
            let notice = render::busy_notice(self.state.dark_mode(), self.color);
            return self.write(&notice);
        }

        mirror_debug!("Dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.effects.run(effects);

        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let screen = render::render(&self.state.view(), self.color);
        self.write(&screen)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out)?;
        write!(self.out, "{text}{PROMPT}")?;
        self.out.flush()
    }
}

fn spawn_input_reader(event_tx: mpsc::Sender<LoopEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("mirror-input".into())
        .spawn(move || forward_input(io::stdin().lock(), &event_tx))?;
    Ok(())
}

/// Feeds typed lines to the event loop until end of input. Bytes that are not
/// UTF-8 are replaced rather than ending the session.
fn forward_input<R: BufRead>(mut reader: R, event_tx: &mpsc::Sender<LoopEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                mirror_warn!("Stopped reading input: {}", err);
                break;
            }
        }
        let line = String::from_utf8_lossy(&buf);
        for event in command_events(parse_command(&line)) {
            if event_tx.send(event).is_err() {
                return;
            }
        }
    }
    let _ = event_tx.send(LoopEvent::InputClosed);
}

fn command_events(command: Command) -> Vec<LoopEvent> {
    match command {
        Command::Submit(url) => vec![
            LoopEvent::Msg(Msg::InputChanged(url)),
            LoopEvent::Msg(Msg::SubmitClicked),
        ],
        Command::ToggleTheme => vec![LoopEvent::Msg(Msg::ThemeToggled)],
        Command::Help => vec![LoopEvent::Help],
        Command::Quit => vec![LoopEvent::Quit],
        Command::Empty => Vec::new(),
    }
}
