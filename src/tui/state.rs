//! TUI state algebra: pure types, zero effects.
//!
//! The session (store state) decides which screen is shown via its route.
//! This module only adds what the terminal front-end needs on top of it:
//! which field has keyboard focus and where the overview cursor sits.

use crate::store::{Effect, Session};
use crate::types::{AnswerId, QuestionType, Route};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Form state: questions, language, route, id counter.
    pub session: Session,

    /// Focused field in the detail view. Ignored on the overview.
    pub focus: Focus,

    /// Highlighted quadrant on the overview grid.
    pub grid_cursor: QuestionType,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// Which text field receives typed characters in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The new-answer input.
    #[default]
    Pending,
    /// An existing answer, edited in place.
    Answer(AnswerId),
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// Plain characters arrive as `Input`; whether a char is text or a
/// command depends on the current route, so `update` decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Open a quadrant / commit an answer.
    Enter,
    /// Navigate back to the overview.
    Back,
    /// A typed character.
    Input(char),
    /// Erase the last character of the focused field.
    DeleteBack,
    /// Switch to the other display language.
    ToggleLanguage,
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure UI transition.
///
/// Follows the Elm/TEA pattern: pure code describes WHAT should happen,
/// the run loop decides HOW.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this state.
    Continue(App),
    /// Render this state, then carry out the effect.
    Effect(App, Effect),
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Wrap a session, with focus on the pending input and the grid
    /// cursor on the routed quadrant (or the first one).
    pub fn new(session: Session) -> Self {
        let grid_cursor = session
            .route()
            .question_type()
            .unwrap_or(QuestionType::HappensHappens);
        App {
            session,
            focus: Focus::Pending,
            grid_cursor,
            should_quit: false,
        }
    }

    /// Quadrant of the detail view currently shown, if any.
    pub fn current_question(&self) -> Option<QuestionType> {
        self.session.route().question_type()
    }

    /// Focus that still points at something on screen.
    ///
    /// A focused answer may have been deleted; fall back to pending.
    pub fn effective_focus(&self) -> Focus {
        match (self.focus, self.current_question()) {
            (Focus::Answer(id), Some(qt))
                if self.session.question(qt).position_of(id).is_some() =>
            {
                Focus::Answer(id)
            }
            _ => Focus::Pending,
        }
    }

    pub fn is_overview(&self) -> bool {
        self.session.route() == Route::Overview
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(Session::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================
