//! Domain types for descartes-square.
//!
//! The four quadrants are a closed set, so everything keyed by quadrant
//! is a fixed-size array rather than a map.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// QUADRANTS
// ============================================================================

/// One of the four Descartes Square prompts.
///
/// The first half names the outcome (it happens / it won't happen), the
/// second half the condition (if it happens / if it doesn't).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum QuestionType {
    /// What will happen if it happens?
    #[serde(rename = "yes-yes")]
    HappensHappens,
    /// What will happen if it doesn't happen?
    #[serde(rename = "yes-no")]
    HappensNotHappens,
    /// What won't happen if it happens?
    #[serde(rename = "no-yes")]
    NotHappensHappens,
    /// What won't happen if it doesn't happen?
    #[serde(rename = "no-no")]
    NotHappensNotHappens,
}

impl QuestionType {
    /// All quadrants in grid order (row-major).
    pub const ALL: [QuestionType; 4] = [
        QuestionType::HappensHappens,
        QuestionType::HappensNotHappens,
        QuestionType::NotHappensHappens,
        QuestionType::NotHappensNotHappens,
    ];

    /// Position in [`QuestionType::ALL`].
    pub const fn index(self) -> usize {
        match self {
            QuestionType::HappensHappens => 0,
            QuestionType::HappensNotHappens => 1,
            QuestionType::NotHappensHappens => 2,
            QuestionType::NotHappensNotHappens => 3,
        }
    }

    /// Route slug: "yes-yes", "yes-no", "no-yes", "no-no".
    pub const fn slug(self) -> &'static str {
        match self {
            QuestionType::HappensHappens => "yes-yes",
            QuestionType::HappensNotHappens => "yes-no",
            QuestionType::NotHappensHappens => "no-yes",
            QuestionType::NotHappensNotHappens => "no-no",
        }
    }

    /// Inverse of [`QuestionType::slug`].
    pub fn from_slug(slug: &str) -> Option<Self> {
        QuestionType::ALL.into_iter().find(|qt| qt.slug() == slug)
    }

    /// Grid position as (row, column) in the 2×2 layout.
    pub const fn grid_position(self) -> (usize, usize) {
        (self.index() / 2, self.index() % 2)
    }

    /// Quadrant at a grid position. Out-of-range positions yield None.
    pub fn at_grid(row: usize, col: usize) -> Option<Self> {
        if row < 2 && col < 2 {
            Some(QuestionType::ALL[row * 2 + col])
        } else {
            None
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

// ============================================================================
// ANSWERS
// ============================================================================

/// Session-unique answer identifier. Assigned monotonically, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct AnswerId(pub u64);

impl AnswerId {
    /// The id that follows this one.
    pub const fn next(self) -> Self {
        AnswerId(self.0 + 1)
    }
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed answer in one quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub id: AnswerId,
    pub text: String,
}

/// A quadrant's prompt state: the draft being typed plus committed answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Immutable key.
    pub question_type: QuestionType,
    /// Uncommitted draft for the next answer.
    pub pending_input: String,
    /// Committed answers in insertion order.
    pub answers: Vec<Answer>,
}

impl Question {
    /// An empty question for the given quadrant.
    pub fn new(question_type: QuestionType) -> Self {
        Question {
            question_type,
            pending_input: String::new(),
            answers: Vec::new(),
        }
    }

    /// Position of an answer within this question.
    pub fn position_of(&self, id: AnswerId) -> Option<usize> {
        self.answers.iter().position(|a| a.id == id)
    }
}

// ============================================================================
// LANGUAGE
// ============================================================================

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Russian];

    /// Two-letter code.
    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    /// The other language.
    pub const fn toggled(self) -> Self {
        match self {
            Language::English => Language::Russian,
            Language::Russian => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// ROUTES
// ============================================================================

/// Navigation target: the overview grid or one quadrant's detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Overview,
    Question(QuestionType),
}

impl Route {
    /// Decode a route string. Never fails: anything unrecognized is Overview.
    ///
    /// Accepts "" and the four quadrant slugs, with surrounding whitespace
    /// and a single leading '/' or '#' tolerated ("#/no-yes" style
    /// fragments lose both).
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
        match QuestionType::from_slug(trimmed) {
            Some(qt) => Route::Question(qt),
            None => Route::Overview,
        }
    }

    /// Encode as a route string ("" for Overview).
    pub const fn as_str(self) -> &'static str {
        match self {
            Route::Overview => "",
            Route::Question(qt) => qt.slug(),
        }
    }

    /// The quadrant this route targets, if any.
    pub const fn question_type(self) -> Option<QuestionType> {
        match self {
            Route::Overview => None,
            Route::Question(qt) => Some(qt),
        }
    }
}

impl From<&str> for Route {
    fn from(raw: &str) -> Self {
        Route::parse(raw)
    }
}

impl From<QuestionType> for Route {
    fn from(qt: QuestionType) -> Self {
        Route::Question(qt)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for the end-of-session summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
