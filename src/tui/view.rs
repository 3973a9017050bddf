//! Pure rendering: map the projected view tree to ratatui widgets.
//!
//! `render()` projects the session, then dispatches on the body variant.
//! Widget-building functions are pure (nodes in, widgets out); the only
//! effects are Frame::render_widget() and placing the terminal cursor.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::locale;
use crate::projection::{AnswerNode, Body, DetailView, GridCell, Header, OverviewGrid, project};
use crate::types::QuestionType;

use super::state::{App, Focus};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current state to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let view = project(&app.session);

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&view.header), chunks[0]);
    frame.render_widget(render_help(app), chunks[2]);

    match &view.body {
        Body::Overview(grid) => render_overview(grid, app.grid_cursor, frame, chunks[1]),
        Body::Detail(detail) => render_detail(detail, app.effective_focus(), frame, chunks[1]),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar: app name plus the language selector.
fn render_title(header: &Header) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(header.title, theme::STYLE_TITLE), Span::raw("   ")];

    for option in &header.languages {
        let style = if option.active {
            theme::STYLE_SELECTED
        } else {
            theme::STYLE_INTERACTIVE
        };
        spans.push(Span::styled(format!(" {} ", option.label), style));
        spans.push(Span::raw(" "));
    }

    Paragraph::new(Line::from(spans))
}

/// Help line showing available keybindings for the current screen.
fn render_help(app: &App) -> Paragraph<'static> {
    let labels = locale::labels(app.session.language());
    let help_text = if app.is_overview() {
        labels.help_overview
    } else {
        labels.help_detail
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn answer_line<'a>(prefix: String, answer: &AnswerNode<'a>) -> Line<'a> {
    Line::from(vec![Span::styled(prefix, theme::STYLE_DIM), Span::raw(answer.text)])
}

// ============================================================================
// SCREEN: OVERVIEW
// ============================================================================

fn render_overview(grid: &OverviewGrid, cursor: QuestionType, frame: &mut Frame, area: Rect) {
    let rows =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    for cell in &grid.cells {
        let (row, col) = cell.question_type.grid_position();
        let cols = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);
        let widget = render_cell(cell, cell.question_type == cursor);
        frame.render_widget(widget, cols[col]);
    }
}

fn render_cell<'a>(cell: &GridCell<'a>, is_cursor: bool) -> Paragraph<'a> {
    let style = theme::quadrant_style(cell.question_type);
    let block = Block::bordered()
        .border_type(if is_cursor {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
        .border_style(style)
        .title(format!(" {} ", cell.question_type.index() + 1));

    let mut lines = vec![
        Line::from(Span::styled(cell.prompt, style.patch(theme::STYLE_IMPORTANT))),
        Line::from(""),
    ];
    for answer in &cell.answers {
        lines.push(answer_line("• ".to_string(), answer));
    }

    Paragraph::new(lines).block(block).wrap(Wrap { trim: false })
}

// ============================================================================
// SCREEN: DETAIL
// ============================================================================

fn render_detail(detail: &DetailView, focus: Focus, frame: &mut Frame, area: Rect) {
    let style = theme::quadrant_style(detail.question_type);

    let chunks = Layout::vertical([
        Constraint::Length(1), // back link
        Constraint::Min(3),    // prompt + answers
        Constraint::Length(3), // pending input
    ])
    .split(area);

    let back = Line::from(vec![
        Span::styled(detail.back.label, theme::STYLE_INTERACTIVE),
        Span::styled(" (Esc)", theme::STYLE_DIM),
    ]);
    frame.render_widget(Paragraph::new(back), chunks[0]);

    // Answer list
    let list_block = Block::bordered()
        .border_style(style)
        .title(Span::styled(
            format!(" {} ", detail.prompt),
            style.patch(theme::STYLE_IMPORTANT),
        ));
    let list_inner = list_block.inner(chunks[1]);

    let focused_row = match focus {
        Focus::Answer(id) => detail.answers.iter().position(|a| a.id == id),
        Focus::Pending => None,
    };

    let mut lines: Vec<Line> = Vec::new();
    for (i, answer) in detail.answers.iter().enumerate() {
        let line = answer_line(format!("{:>2}. ", i + 1), answer);
        if Some(i) == focused_row {
            lines.push(line.style(theme::STYLE_CURSOR));
        } else {
            lines.push(line);
        }
    }
    if detail.answers.is_empty() {
        lines.push(Line::from(Span::styled(detail.empty_label, theme::STYLE_DIM)));
    }

    // Scroll: keep the focused row visible. With the input focused, keep
    // the newest answer in view.
    let visible_height = list_inner.height as usize;
    let cursor_row = focused_row.unwrap_or(detail.answers.len().saturating_sub(1));
    let scroll_offset = if cursor_row >= visible_height {
        cursor_row - visible_height + 1
    } else {
        0
    };

    let list = Paragraph::new(lines)
        .block(list_block)
        .scroll((scroll_offset as u16, 0));
    frame.render_widget(list, chunks[1]);

    // Pending input
    let input_style = if focus == Focus::Pending {
        style
    } else {
        theme::STYLE_DIM
    };
    let input_block = Block::bordered().border_style(input_style).title(" + ");
    let input_inner = input_block.inner(chunks[2]);
    let input_text = if detail.pending.value.is_empty() {
        Line::from(Span::styled(detail.pending.placeholder, theme::STYLE_DIM))
    } else {
        Line::from(detail.pending.value)
    };
    frame.render_widget(Paragraph::new(input_text).block(input_block), chunks[2]);

    // Terminal cursor at the end of the focused field
    let cursor = match (focus, focused_row) {
        (Focus::Pending, _) => Some((input_inner, 0, Line::from(detail.pending.value).width())),
        (Focus::Answer(_), Some(row)) if row >= scroll_offset => {
            let answer = &detail.answers[row];
            let width = answer_line(format!("{:>2}. ", row + 1), answer).width();
            Some((list_inner, row - scroll_offset, width))
        }
        _ => None,
    };
    if let Some((inner, row, width)) = cursor {
        if inner.width > 0 && (row as u16) < inner.height {
            let x = inner.x + (width as u16).min(inner.width - 1);
            let y = inner.y + row as u16;
            frame.set_cursor_position((x, y));
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Event, Session, reduce};
    use crate::types::{AnswerId, Language, Route};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(100, 30);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn app_with(route: Route, answers: &[(QuestionType, &str)]) -> App {
        let mut session = Session::new(Language::English, route);
        for (qt, text) in answers {
            session = reduce(
                session,
                Event::EditPendingInput {
                    question_type: *qt,
                    text: text.to_string(),
                },
            )
            .session;
            session = reduce(session, Event::CommitPendingAnswer(*qt)).session;
        }
        App::new(session)
    }

    #[test]
    fn overview_renders_all_prompts() {
        let mut terminal = make_terminal();
        let app = App::default();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Descartes Square"));
        assert!(content.contains("What will happen if it happens?"));
        assert!(content.contains("What won't happen if it happens?"));
        assert!(content.contains("[Enter/1-4] open"));
    }

    #[test]
    fn overview_shows_answers_in_their_cells() {
        let mut terminal = make_terminal();
        let app = app_with(
            Route::Overview,
            &[
                (QuestionType::HappensHappens, "more sleep"),
                (QuestionType::NotHappensNotHappens, "no refund"),
            ],
        );
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("• more sleep"));
        assert!(content.contains("• no refund"));
    }

    #[test]
    fn detail_renders_prompt_answers_and_back_link() {
        let mut terminal = make_terminal();
        let app = app_with(
            Route::parse("no-yes"),
            &[(QuestionType::NotHappensHappens, "stay in town")],
        );
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("← Back"));
        assert!(content.contains("What won't happen if it happens?"));
        assert!(content.contains("1. stay in town"));
        assert!(!content.contains("What will happen if it happens?"));
    }

    #[test]
    fn detail_shows_placeholder_when_pending_empty() {
        let mut terminal = make_terminal();
        let app = app_with(Route::parse("yes-yes"), &[]);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_text(&terminal).contains("Type an answer and press Enter"));
    }

    #[test]
    fn detail_shows_pending_text() {
        let mut terminal = make_terminal();
        let app = app_with(Route::parse("yes-no"), &[]);
        let session = reduce(
            app.session,
            Event::EditPendingInput {
                question_type: QuestionType::HappensNotHappens,
                text: "half typed".into(),
            },
        )
        .session;
        let app = App::new(session);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_text(&terminal).contains("half typed"));
    }

    #[test]
    fn russian_renders_localized_chrome() {
        let mut terminal = make_terminal();
        let mut app = app_with(Route::Overview, &[]);
        app.session = reduce(app.session, Event::SetLanguage(Language::Russian)).session;
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Квадрат Декарта"));
        assert!(content.contains("Что будет, если это произойдёт?"));
    }

    #[test]
    fn focused_answer_renders_without_panic() {
        let mut terminal = make_terminal();
        let mut app = app_with(
            Route::parse("yes-yes"),
            &[(QuestionType::HappensHappens, "a"), (QuestionType::HappensHappens, "b")],
        );
        app.focus = Focus::Answer(AnswerId(1));
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
    }

    #[test]
    fn tiny_terminal_renders_without_panic() {
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        for route in ["", "yes-yes", "no-no"] {
            let app = app_with(Route::parse(route), &[(QuestionType::NotHappensNotHappens, "x")]);
            terminal
                .draw(|frame| render(&app, frame))
                .expect("every route should render without panic");
        }
    }

    #[test]
    fn many_answers_scroll_without_panic() {
        let mut terminal = make_terminal();
        let answers: Vec<(QuestionType, String)> = (0..50)
            .map(|i| (QuestionType::HappensHappens, format!("answer {}", i)))
            .collect();
        let refs: Vec<(QuestionType, &str)> =
            answers.iter().map(|(qt, t)| (*qt, t.as_str())).collect();
        let mut app = app_with(Route::parse("yes-yes"), &refs);
        app.focus = Focus::Answer(AnswerId(49));
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_text(&terminal).contains("answer 49"));
    }

    #[test]
    fn pending_focus_keeps_newest_answer_visible() {
        let mut terminal = make_terminal();
        let answers: Vec<(QuestionType, String)> = (0..50)
            .map(|i| (QuestionType::HappensHappens, format!("answer {}", i)))
            .collect();
        let refs: Vec<(QuestionType, &str)> =
            answers.iter().map(|(qt, t)| (*qt, t.as_str())).collect();
        let app = app_with(Route::parse("yes-yes"), &refs);
        assert_eq!(app.focus, Focus::Pending);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("answer 49"));
        assert!(!content.contains("answer 0 "));
    }
}
