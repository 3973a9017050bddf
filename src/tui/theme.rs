//! TUI color semantics and style constants.
//!
//! Each quadrant owns one color, used for its border and prompt in both
//! the overview grid and its detail view.
//!
//! Color semantics:
//! - Green / Yellow / Magenta / Blue: the four quadrants
//! - Cyan: interactive elements (selector, keybinding hints)
//! - Dim: de-emphasized (placeholders, help)
//! - Bold: important (prompts, title)

use ratatui::style::{Color, Modifier, Style};

use crate::types::QuestionType;

// ============================================================================
// QUADRANT COLORS
// ============================================================================

/// Accent color for a quadrant.
pub const fn quadrant_color(question_type: QuestionType) -> Color {
    match question_type {
        QuestionType::HappensHappens => Color::Green,
        QuestionType::HappensNotHappens => Color::Yellow,
        QuestionType::NotHappensHappens => Color::Magenta,
        QuestionType::NotHappensNotHappens => Color::Blue,
    }
}

/// Border / prompt style for a quadrant.
pub const fn quadrant_style(question_type: QuestionType) -> Style {
    Style::new().fg(quadrant_color(question_type))
}

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Active entry of the language selector.
pub const STYLE_SELECTED: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Focused row in the detail view.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
