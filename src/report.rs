//! End-of-session summary of the square.
//!
//! Pure functions: (Session, OutputFormat) → Result<String>.
//! No I/O, no side effects. Uncommitted drafts are left out.

use serde::Serialize;

use crate::error::Result;
use crate::locale;
use crate::store::Session;
use crate::types::{Answer, Language, OutputFormat, QuestionType};

/// Format the session's answers for output.
pub fn format_summary(session: &Session, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(session)),
        OutputFormat::Json => format_json(session),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(session: &Session) -> String {
    let language = session.language();
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n\n", locale::labels(language).title));

    for question in session.questions() {
        out.push_str(&format!(
            "{}\n",
            locale::prompt(question.question_type, language)
        ));
        if question.answers.is_empty() {
            out.push_str(&format!("  {}\n", locale::labels(language).no_answers));
        }
        for answer in &question.answers {
            out.push_str(&format!("  • {}\n", answer.text));
        }
        out.push('\n');
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct Summary<'a> {
    language: Language,
    questions: Vec<QuestionSummary<'a>>,
}

#[derive(Serialize)]
struct QuestionSummary<'a> {
    question_type: QuestionType,
    prompt: &'static str,
    answers: &'a [Answer],
}

fn format_json(session: &Session) -> Result<String> {
    let language = session.language();
    let summary = Summary {
        language,
        questions: session
            .questions()
            .iter()
            .map(|q| QuestionSummary {
                question_type: q.question_type,
                prompt: locale::prompt(q.question_type, language),
                answers: &q.answers,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

// ============================================================================
// TESTS
// ============================================================================
