//! Static display strings, keyed by language.
//!
//! Prompt text is a fixed 4 × 2 table. UI chrome (labels, help lines)
//! lives in one [`Labels`] value per language.

use crate::types::{Language, QuestionType};

/// The prompt shown for a quadrant.
pub fn prompt(question_type: QuestionType, language: Language) -> &'static str {
    use QuestionType::*;

    match (language, question_type) {
        (Language::English, HappensHappens) => "What will happen if it happens?",
        (Language::English, HappensNotHappens) => "What will happen if it doesn't happen?",
        (Language::English, NotHappensHappens) => "What won't happen if it happens?",
        (Language::English, NotHappensNotHappens) => "What won't happen if it doesn't happen?",
        (Language::Russian, HappensHappens) => "Что будет, если это произойдёт?",
        (Language::Russian, HappensNotHappens) => "Что будет, если это не произойдёт?",
        (Language::Russian, NotHappensHappens) => "Чего не будет, если это произойдёт?",
        (Language::Russian, NotHappensNotHappens) => "Чего не будет, если это не произойдёт?",
    }
}

/// Short selector label for a language.
pub fn language_name(language: Language) -> &'static str {
    match language {
        Language::English => "EN",
        Language::Russian => "RU",
    }
}

/// Localized UI chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub back: &'static str,
    pub placeholder: &'static str,
    pub no_answers: &'static str,
    pub help_overview: &'static str,
    pub help_detail: &'static str,
}

const ENGLISH: Labels = Labels {
    title: "Descartes Square",
    back: "← Back",
    placeholder: "Type an answer and press Enter",
    no_answers: "(no answers)",
    help_overview: "[←↑↓→] move  [Enter/1-4] open  [l] language  [q] quit",
    help_detail: "[↑↓] select  [Enter] add  [Backspace] erase  [^L] language  [Esc] back",
};

const RUSSIAN: Labels = Labels {
    title: "Квадрат Декарта",
    back: "← Назад",
    placeholder: "Введите ответ и нажмите Enter",
    no_answers: "(нет ответов)",
    help_overview: "[←↑↓→] выбор  [Enter/1-4] открыть  [l] язык  [q] выход",
    help_detail: "[↑↓] выбор  [Enter] добавить  [Backspace] стереть  [^L] язык  [Esc] назад",
};

/// UI labels for a language.
pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &ENGLISH,
        Language::Russian => &RUSSIAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prompt_is_distinct_within_a_language() {
        for language in Language::ALL {
            let prompts: std::collections::BTreeSet<_> = QuestionType::ALL
                .iter()
                .map(|qt| prompt(*qt, language))
                .collect();
            assert_eq!(prompts.len(), 4, "duplicate prompt in {}", language);
        }
    }

    #[test]
    fn prompts_differ_between_languages() {
        for qt in QuestionType::ALL {
            assert_ne!(prompt(qt, Language::English), prompt(qt, Language::Russian));
        }
    }

    #[test]
    fn labels_follow_language() {
        assert_eq!(labels(Language::English).title, "Descartes Square");
        assert_eq!(labels(Language::Russian).title, "Квадрат Декарта");
    }
}
