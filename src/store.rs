//! Form state store: (Session, Event) → Transition.
//!
//! Pure reducer over an immutable session snapshot. No I/O, no errors.
//! The two guards (empty commit, unknown answer id) are silent no-ops.

use crate::types::{Answer, AnswerId, Language, Question, QuestionType, Route};

// ============================================================================
// SESSION
// ============================================================================

/// The whole in-memory state of one session.
///
/// Questions live in a fixed array indexed by [`QuestionType::index`],
/// so each quadrant has exactly one question for the session lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    questions: [Question; 4],
    language: Language,
    route: Route,
    next_id: AnswerId,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Language::default(), Route::default())
    }
}

impl Session {
    /// Fresh session: four empty questions, counter at zero.
    pub fn new(language: Language, route: Route) -> Self {
        Session {
            questions: QuestionType::ALL.map(Question::new),
            language,
            route,
            next_id: AnswerId::default(),
        }
    }

    pub fn question(&self, question_type: QuestionType) -> &Question {
        &self.questions[question_type.index()]
    }

    fn question_mut(&mut self, question_type: QuestionType) -> &mut Question {
        &mut self.questions[question_type.index()]
    }

    /// All four questions in grid order.
    pub fn questions(&self) -> &[Question; 4] {
        &self.questions
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// The id the next committed answer will receive.
    pub fn next_id(&self) -> AnswerId {
        self.next_id
    }

    /// Locate an answer by id across all quadrants.
    pub fn find_answer(&self, id: AnswerId) -> Option<(QuestionType, &Answer)> {
        self.questions.iter().find_map(|q| {
            q.answers
                .iter()
                .find(|a| a.id == id)
                .map(|a| (q.question_type, a))
        })
    }

    /// Total committed answers across all quadrants.
    pub fn answer_count(&self) -> usize {
        self.questions.iter().map(|q| q.answers.len()).sum()
    }
}

// ============================================================================
// EVENTS & TRANSITIONS
// ============================================================================

/// A discrete update delivered by the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replace an answer's text; empty text deletes the answer.
    EditAnswer { id: AnswerId, text: String },
    /// Turn a quadrant's pending input into an answer.
    CommitPendingAnswer(QuestionType),
    /// Overwrite a quadrant's pending input.
    EditPendingInput { question_type: QuestionType, text: String },
    SetLanguage(Language),
    Navigate(Route),
}

/// Side effect requested by a reduction. Best-effort; never changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Move keyboard focus back to the new-answer input of this quadrant.
    FocusPendingInput(QuestionType),
}

/// Result of a reduction: the next snapshot plus an optional effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub session: Session,
    pub effect: Option<Effect>,
}

impl Transition {
    fn state(session: Session) -> Self {
        Transition { session, effect: None }
    }
}

/// Pure reducer.
pub fn reduce(session: Session, event: Event) -> Transition {
    match event {
        Event::EditAnswer { id, text } => Transition::state(edit_answer(session, id, text)),
        Event::CommitPendingAnswer(question_type) => commit_pending(session, question_type),
        Event::EditPendingInput { question_type, text } => {
            let mut session = session;
            session.question_mut(question_type).pending_input = text;
            Transition::state(session)
        }
        Event::SetLanguage(language) => Transition::state(Session { language, ..session }),
        Event::Navigate(route) => Transition::state(Session { route, ..session }),
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

fn edit_answer(mut session: Session, id: AnswerId, text: String) -> Session {
    let Some((question_type, _)) = session.find_answer(id) else {
        return session;
    };
    let question = session.question_mut(question_type);
    let Some(pos) = question.position_of(id) else {
        return session;
    };

    if text.is_empty() {
        question.answers.remove(pos);
    } else {
        question.answers[pos].text = text;
    }
    session
}

fn commit_pending(mut session: Session, question_type: QuestionType) -> Transition {
    if session.question(question_type).pending_input.is_empty() {
        return Transition::state(session);
    }

    let id = session.next_id;
    session.next_id = id.next();

    let question = session.question_mut(question_type);
    let text = std::mem::take(&mut question.pending_input);
    question.answers.push(Answer { id, text });

    Transition {
        session,
        effect: Some(Effect::FocusPendingInput(question_type)),
    }
}

// ============================================================================
// TESTS
// ============================================================================
