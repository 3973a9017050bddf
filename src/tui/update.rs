//! Pure state transitions: (App, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each action either moves UI-local state (focus, grid cursor) or is
//! translated into a store [`Event`] and reduced. Unhandled actions
//! return the app unchanged (no-op).

use crate::store::{self, Event};
use crate::types::{QuestionType, Route};

use super::state::{Action, App, Focus, Transition};

/// Pure state transition function.
pub fn update(app: App, action: &Action) -> Transition {
    match action {
        Action::Quit => return quit(app),
        Action::ToggleLanguage => return toggle_language(app),
        _ => {}
    }

    match app.current_question() {
        None => update_overview(app, action),
        Some(question_type) => update_detail(app, question_type, action),
    }
}

/// Reduce a store event and lift the result into a UI transition.
fn dispatch(mut app: App, event: Event) -> Transition {
    let store::Transition { session, effect } = store::reduce(app.session, event);
    app.session = session;
    match effect {
        Some(effect) => Transition::Effect(app, effect),
        None => Transition::Continue(app),
    }
}

fn quit(mut app: App) -> Transition {
    app.should_quit = true;
    Transition::Continue(app)
}

fn toggle_language(app: App) -> Transition {
    let language = app.session.language().toggled();
    dispatch(app, Event::SetLanguage(language))
}

// ============================================================================
// OVERVIEW
// ============================================================================

/// Overview: arrows move the grid cursor, Enter / 1-4 open a quadrant.
fn update_overview(mut app: App, action: &Action) -> Transition {
    match action {
        Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
            app.grid_cursor = move_grid_cursor(app.grid_cursor, action);
            Transition::Continue(app)
        }
        Action::Enter => {
            let question_type = app.grid_cursor;
            open_question(app, question_type)
        }
        Action::Input(c @ '1'..='4') => {
            let index = (*c as u8 - b'1') as usize;
            open_question(app, QuestionType::ALL[index])
        }
        Action::Input('l') => toggle_language(app),
        Action::Input('q') => quit(app),
        _ => Transition::Continue(app),
    }
}

fn open_question(mut app: App, question_type: QuestionType) -> Transition {
    app.grid_cursor = question_type;
    app.focus = Focus::Pending;
    dispatch(app, Event::Navigate(Route::Question(question_type)))
}

/// Step the cursor around the 2×2 grid, clamped at the edges.
fn move_grid_cursor(cursor: QuestionType, action: &Action) -> QuestionType {
    let (row, col) = cursor.grid_position();
    let (row, col) = match action {
        Action::MoveUp => (row.saturating_sub(1), col),
        Action::MoveDown => ((row + 1).min(1), col),
        Action::MoveLeft => (row, col.saturating_sub(1)),
        Action::MoveRight => (row, (col + 1).min(1)),
        _ => (row, col),
    };
    QuestionType::at_grid(row, col).unwrap_or(cursor)
}

// ============================================================================
// DETAIL
// ============================================================================

/// Detail: rows are the answers followed by the pending input.
/// Typing edits whichever row has focus.
fn update_detail(mut app: App, question_type: QuestionType, action: &Action) -> Transition {
    let focus = app.effective_focus();

    match action {
        Action::Back => {
            app.grid_cursor = question_type;
            app.focus = Focus::Pending;
            dispatch(app, Event::Navigate(Route::Overview))
        }
        Action::MoveUp => {
            app.focus = step_focus(&app, question_type, focus, Step::Up);
            Transition::Continue(app)
        }
        Action::MoveDown => {
            app.focus = step_focus(&app, question_type, focus, Step::Down);
            Transition::Continue(app)
        }
        Action::Enter => match focus {
            Focus::Pending => {
                app.focus = Focus::Pending;
                dispatch(app, Event::CommitPendingAnswer(question_type))
            }
            Focus::Answer(_) => {
                app.focus = step_focus(&app, question_type, focus, Step::Down);
                Transition::Continue(app)
            }
        },
        Action::Input(c) => {
            let mut text = focused_text(&app, question_type, focus);
            text.push(*c);
            app.focus = focus;
            edit_focused(app, question_type, focus, text)
        }
        Action::DeleteBack => {
            let mut text = focused_text(&app, question_type, focus);
            if text.pop().is_none() {
                return Transition::Continue(app);
            }
            app.focus = if text.is_empty() {
                focus_after_removal(&app, question_type, focus)
            } else {
                focus
            };
            edit_focused(app, question_type, focus, text)
        }
        _ => Transition::Continue(app),
    }
}

#[derive(Clone, Copy)]
enum Step {
    Up,
    Down,
}

/// Move focus one row. Row `answers.len()` is the pending input.
fn step_focus(app: &App, question_type: QuestionType, focus: Focus, step: Step) -> Focus {
    let answers = &app.session.question(question_type).answers;
    let last_row = answers.len();
    let row = match focus {
        Focus::Answer(id) => answers.iter().position(|a| a.id == id).unwrap_or(last_row),
        Focus::Pending => last_row,
    };
    let row = match step {
        Step::Up => row.saturating_sub(1),
        Step::Down => (row + 1).min(last_row),
    };
    answers.get(row).map_or(Focus::Pending, |a| Focus::Answer(a.id))
}

/// Where focus lands once the focused answer is erased: the answer
/// above it, or the pending input when it was the first.
fn focus_after_removal(app: &App, question_type: QuestionType, focus: Focus) -> Focus {
    let Focus::Answer(id) = focus else {
        return Focus::Pending;
    };
    let question = app.session.question(question_type);
    match question.position_of(id) {
        Some(pos) if pos > 0 => Focus::Answer(question.answers[pos - 1].id),
        _ => Focus::Pending,
    }
}

fn focused_text(app: &App, question_type: QuestionType, focus: Focus) -> String {
    let question = app.session.question(question_type);
    match focus {
        Focus::Pending => question.pending_input.clone(),
        Focus::Answer(id) => app
            .session
            .find_answer(id)
            .map(|(_, a)| a.text.clone())
            .unwrap_or_default(),
    }
}

fn edit_focused(app: App, question_type: QuestionType, focus: Focus, text: String) -> Transition {
    let event = match focus {
        Focus::Pending => Event::EditPendingInput {
            question_type,
            text,
        },
        Focus::Answer(id) => Event::EditAnswer { id, text },
    };
    dispatch(app, event)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Effect, Session};
    use crate::types::{AnswerId, Language};

    use QuestionType::*;

    /// Apply actions, following effects the way the run loop does.
    fn run(app: App, actions: &[Action]) -> App {
        actions.iter().fold(app, |app, action| match update(app, action) {
            Transition::Continue(app) => app,
            Transition::Effect(mut app, Effect::FocusPendingInput(_)) => {
                app.focus = Focus::Pending;
                app
            }
        })
    }

    fn typed(text: &str) -> Vec<Action> {
        text.chars().map(Action::Input).collect()
    }

    fn detail_app(question_type: QuestionType) -> App {
        App::new(Session::new(Language::English, Route::Question(question_type)))
    }

    /// Detail view of `question_type` holding the given committed answers.
    fn detail_with(question_type: QuestionType, answers: &[&str]) -> App {
        let mut actions = Vec::new();
        for answer in answers {
            actions.extend(typed(answer));
            actions.push(Action::Enter);
        }
        run(detail_app(question_type), &actions)
    }

    fn answer_texts(app: &App, question_type: QuestionType) -> Vec<String> {
        app.session
            .question(question_type)
            .answers
            .iter()
            .map(|a| a.text.clone())
            .collect()
    }

    // -- Global --

    #[test]
    fn quit_anywhere() {
        assert!(run(App::default(), &[Action::Quit]).should_quit);
        assert!(run(detail_app(HappensHappens), &[Action::Quit]).should_quit);
    }

    #[test]
    fn toggle_language_anywhere() {
        let app = run(App::default(), &[Action::ToggleLanguage]);
        assert_eq!(app.session.language(), Language::Russian);
        let app = run(detail_app(NotHappensHappens), &[Action::ToggleLanguage]);
        assert_eq!(app.session.language(), Language::Russian);
        assert_eq!(app.current_question(), Some(NotHappensHappens));
    }

    // -- Overview --

    #[test]
    fn overview_q_quits_and_l_toggles_language() {
        assert!(run(App::default(), &[Action::Input('q')]).should_quit);
        let app = run(App::default(), &[Action::Input('l'), Action::Input('l')]);
        assert_eq!(app.session.language(), Language::English);
    }

    #[test]
    fn overview_cursor_moves_and_clamps() {
        let app = run(App::default(), &[Action::MoveRight]);
        assert_eq!(app.grid_cursor, HappensNotHappens);
        let app = run(app, &[Action::MoveRight, Action::MoveDown, Action::MoveDown]);
        assert_eq!(app.grid_cursor, NotHappensNotHappens);
        let app = run(app, &[Action::MoveLeft, Action::MoveLeft]);
        assert_eq!(app.grid_cursor, NotHappensHappens);
        let app = run(app, &[Action::MoveUp, Action::MoveUp]);
        assert_eq!(app.grid_cursor, HappensHappens);
    }

    #[test]
    fn overview_enter_opens_cursor_quadrant() {
        let app = run(App::default(), &[Action::MoveDown, Action::Enter]);
        assert_eq!(app.session.route(), Route::parse("no-yes"));
        assert_eq!(app.focus, Focus::Pending);
    }

    #[test]
    fn overview_number_keys_open_quadrants() {
        for (i, qt) in QuestionType::ALL.iter().enumerate() {
            let key = (b'1' + i as u8) as char;
            let app = run(App::default(), &[Action::Input(key)]);
            assert_eq!(app.current_question(), Some(*qt));
            assert_eq!(app.grid_cursor, *qt);
        }
    }

    #[test]
    fn overview_ignores_other_chars() {
        let app = run(App::default(), &[Action::Input('x'), Action::Input('5')]);
        assert_eq!(app, App::default());
    }

    // -- Detail: typing and committing --

    #[test]
    fn typing_then_enter_commits_answer() {
        let app = run(detail_app(HappensHappens), &typed("raise"));
        assert_eq!(app.session.question(HappensHappens).pending_input, "raise");

        let t = update(app, &Action::Enter);
        let Transition::Effect(app, effect) = t else {
            panic!("Expected focus effect");
        };
        assert_eq!(effect, Effect::FocusPendingInput(HappensHappens));
        let q = app.session.question(HappensHappens);
        assert_eq!(q.answers.len(), 1);
        assert_eq!(q.answers[0].id, AnswerId(0));
        assert_eq!(q.answers[0].text, "raise");
        assert!(q.pending_input.is_empty());
        assert_eq!(app.session.next_id(), AnswerId(1));
    }

    #[test]
    fn enter_on_empty_pending_does_nothing() {
        let app = detail_app(HappensHappens);
        let t = update(app.clone(), &Action::Enter);
        assert_eq!(t, Transition::Continue(app));
    }

    #[test]
    fn detail_treats_command_letters_as_text() {
        let app = run(detail_app(NotHappensNotHappens), &typed("ql1"));
        assert_eq!(app.session.question(NotHappensNotHappens).pending_input, "ql1");
    }

    #[test]
    fn backspace_erases_pending() {
        let app = run(
            detail_app(HappensNotHappens),
            &[typed("abc"), vec![Action::DeleteBack]].concat(),
        );
        assert_eq!(app.session.question(HappensNotHappens).pending_input, "ab");
        let app = run(app, &[Action::DeleteBack, Action::DeleteBack, Action::DeleteBack]);
        assert_eq!(app.session.question(HappensNotHappens).pending_input, "");
    }

    #[test]
    fn backspace_handles_multibyte_chars() {
        let app = run(
            detail_app(HappensHappens),
            &[typed("ёж"), vec![Action::DeleteBack]].concat(),
        );
        assert_eq!(app.session.question(HappensHappens).pending_input, "ё");
    }

    // -- Detail: focus and in-place edits --

    #[test]
    fn up_down_walk_answers_then_pending() {
        let app = detail_with(HappensHappens, &["a", "b"]);
        assert_eq!(app.focus, Focus::Pending);

        let app = run(app, &[Action::MoveUp]);
        assert_eq!(app.focus, Focus::Answer(AnswerId(1)));
        let app = run(app, &[Action::MoveUp, Action::MoveUp]);
        assert_eq!(app.focus, Focus::Answer(AnswerId(0)));
        let app = run(app, &[Action::MoveDown, Action::MoveDown, Action::MoveDown]);
        assert_eq!(app.focus, Focus::Pending);
    }

    #[test]
    fn typing_on_answer_edits_it() {
        let app = detail_with(NotHappensHappens, &["cost"]);
        let app = run(app, &[vec![Action::MoveUp], typed("s")].concat());
        assert_eq!(answer_texts(&app, NotHappensHappens), vec!["costs"]);
        assert!(app.session.question(NotHappensHappens).pending_input.is_empty());
    }

    #[test]
    fn erasing_answer_to_empty_deletes_it_and_moves_focus_up() {
        let app = detail_with(HappensHappens, &["a", "bc", "d"]);
        let app = run(
            app,
            &[Action::MoveUp, Action::MoveUp, Action::DeleteBack, Action::DeleteBack],
        );
        assert_eq!(answer_texts(&app, HappensHappens), vec!["a", "d"]);
        assert_eq!(app.focus, Focus::Answer(AnswerId(0)));
    }

    #[test]
    fn erasing_first_answer_moves_focus_to_pending() {
        let app = detail_with(HappensHappens, &["x", "y"]);
        let app = run(app, &[Action::MoveUp, Action::MoveUp, Action::DeleteBack]);
        assert_eq!(answer_texts(&app, HappensHappens), vec!["y"]);
        assert_eq!(app.focus, Focus::Pending);
    }

    #[test]
    fn enter_on_answer_moves_focus_down() {
        let app = detail_with(HappensHappens, &["x", "y"]);
        let app = run(app, &[Action::MoveUp, Action::MoveUp, Action::Enter]);
        assert_eq!(app.focus, Focus::Answer(AnswerId(1)));
        assert_eq!(app.session.answer_count(), 2);
    }

    // -- Navigation --

    #[test]
    fn back_returns_to_overview_with_cursor_on_quadrant() {
        let app = run(detail_app(NotHappensNotHappens), &[Action::Back]);
        assert!(app.is_overview());
        assert_eq!(app.grid_cursor, NotHappensNotHappens);
    }

    #[test]
    fn reopening_a_quadrant_resets_focus_to_pending() {
        let app = detail_with(HappensHappens, &["a"]);
        let app = run(app, &[Action::MoveUp, Action::Back, Action::Enter]);
        assert_eq!(app.current_question(), Some(HappensHappens));
        assert_eq!(app.focus, Focus::Pending);
    }

    #[test]
    fn drafts_survive_navigation() {
        let app = run(
            App::default(),
            &[
                vec![Action::Input('2')],
                typed("half"),
                vec![Action::Back, Action::Input('2')],
            ]
            .concat(),
        );
        assert_eq!(app.session.question(HappensNotHappens).pending_input, "half");
    }
}
