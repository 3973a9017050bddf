//! View projection: Session → tree of display nodes.
//!
//! Pure and terminal-agnostic. The route picks the body: the 2×2
//! overview grid, or one quadrant's detail view. Nodes borrow answer
//! text from the session, so a projection is cheap to rebuild per frame.

use crate::locale;
use crate::store::Session;
use crate::types::{AnswerId, Language, QuestionType, Route};

/// Root of the display tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    pub header: Header,
    pub body: Body<'a>,
}

/// Title plus the locale selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    pub languages: [LanguageOption; 2],
}

/// One entry of the locale selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub language: Language,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body<'a> {
    Overview(OverviewGrid<'a>),
    Detail(DetailView<'a>),
}

/// All four quadrants, in [`QuestionType::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewGrid<'a> {
    pub cells: [GridCell<'a>; 4],
}

/// One quadrant of the overview. Activating it navigates to `route`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell<'a> {
    pub question_type: QuestionType,
    pub route: Route,
    pub prompt: &'static str,
    pub answers: Vec<AnswerNode<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerNode<'a> {
    pub id: AnswerId,
    pub text: &'a str,
}

/// Single-quadrant view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView<'a> {
    pub back: BackLink,
    pub question_type: QuestionType,
    pub prompt: &'static str,
    pub answers: Vec<AnswerNode<'a>>,
    /// Shown in place of the list when there are no answers yet.
    pub empty_label: &'static str,
    pub pending: PendingInput<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackLink {
    pub label: &'static str,
    pub route: Route,
}

/// The new-answer input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingInput<'a> {
    pub placeholder: &'static str,
    pub value: &'a str,
}

/// Build the display tree for the current session.
pub fn project(session: &Session) -> View<'_> {
    let language = session.language();

    let body = match session.route() {
        Route::Overview => Body::Overview(OverviewGrid {
            cells: QuestionType::ALL.map(|qt| GridCell {
                question_type: qt,
                route: Route::Question(qt),
                prompt: locale::prompt(qt, language),
                answers: answer_nodes(session, qt),
            }),
        }),
        Route::Question(qt) => Body::Detail(DetailView {
            back: BackLink {
                label: locale::labels(language).back,
                route: Route::Overview,
            },
            question_type: qt,
            prompt: locale::prompt(qt, language),
            answers: answer_nodes(session, qt),
            empty_label: locale::labels(language).no_answers,
            pending: PendingInput {
                placeholder: locale::labels(language).placeholder,
                value: &session.question(qt).pending_input,
            },
        }),
    };

    View {
        header: header(language),
        body,
    }
}

fn header(current: Language) -> Header {
    Header {
        title: locale::labels(current).title,
        languages: Language::ALL.map(|language| LanguageOption {
            language,
            label: locale::language_name(language),
            active: language == current,
        }),
    }
}

fn answer_nodes(session: &Session, question_type: QuestionType) -> Vec<AnswerNode<'_>> {
    session
        .question(question_type)
        .answers
        .iter()
        .map(|a| AnswerNode {
            id: a.id,
            text: &a.text,
        })
        .collect()
}
