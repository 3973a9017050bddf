//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (store, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Single-threaded: the loop blocks on the next terminal event, reduces
//! it, and redraws. There is no background work to multiplex.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::Result;
use crate::store::{Effect, Session};

use super::state::{Action, App, Focus, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('l') => Some(Action::ToggleLanguage),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::BackTab => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Tab => Some(Action::MoveDown),
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Backspace => Some(Action::DeleteBack),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the user quits. Returns the final session so the
/// caller can report on it.
pub fn run(session: Session) -> Result<Session> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, App::new(session));

    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<Session> {
    tracing::info!(
        route = %app.session.route(),
        language = %app.session.language(),
        "TUI started"
    );

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue, // releases, mouse, resize (redraw on next pass)
        };
        let Some(action) = map_key(key) else {
            continue;
        };
        tracing::trace!(?action, "Key action");

        app = match update(app, &action) {
            Transition::Continue(next) => next,
            Transition::Effect(next, effect) => handle_effect(effect, next),
        };
    }

    tracing::info!(answers = app.session.answer_count(), "TUI finished");
    Ok(app.session)
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
///
/// Focus transfer is best-effort: if the target quadrant is no longer on
/// screen the request is dropped.
pub fn handle_effect(effect: Effect, mut app: App) -> App {
    match effect {
        Effect::FocusPendingInput(question_type) => {
            if app.current_question() == Some(question_type) {
                app.focus = Focus::Pending;
            } else {
                tracing::debug!(%question_type, "Focus request dropped, quadrant not shown");
            }
        }
    }
    app
}

// ============================================================================
// TESTS
// ============================================================================
