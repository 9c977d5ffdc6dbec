//! Field rules for note payloads.
//!
//! Every rule is evaluated on its own, so one payload can report several
//! violations at once. Messages come back in rule-table order.

use thiserror::Error;

use crate::request::NoteInput;

pub const TITLE_MAX_CHARS: usize = 100;

pub const TITLE_BLANK: &str = "Title must not be blank";
pub const TITLE_TOO_LONG: &str = "Title must not exceed 100 characters";
pub const CONTENT_BLANK: &str = "Content must not be blank";

struct Rule {
    message: &'static str,
    violated: fn(&NoteInput) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        message: TITLE_BLANK,
        violated: title_blank,
    },
    Rule {
        message: TITLE_TOO_LONG,
        violated: title_too_long,
    },
    Rule {
        message: CONTENT_BLANK,
        violated: content_blank,
    },
];

/// All violated rules for `input`. Empty means valid.
pub fn violations(input: &NoteInput) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| (rule.violated)(input))
        .map(|rule| rule.message)
        .collect()
}

fn title_blank(input: &NoteInput) -> bool {
    is_blank(&input.title)
}

fn title_too_long(input: &NoteInput) -> bool {
    input.title.chars().count() > TITLE_MAX_CHARS
}

fn content_blank(input: &NoteInput) -> bool {
    is_blank(&input.content)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid note payload: {}", .errors.join("; "))]
pub struct ValidationError {
    pub errors: Vec<String>,
}

impl NoteInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let found = violations(self);
        if found.is_empty() {
            return Ok(());
        }
        Err(ValidationError {
            errors: found.into_iter().map(str::to_owned).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_has_no_violations() {
        assert!(violations(&NoteInput::new("T", "C")).is_empty());
        assert!(NoteInput::new("T", "C").validate().is_ok());
    }

    #[test]
    fn empty_title_and_content_report_two_messages() {
        let found = violations(&NoteInput::new("", ""));
        assert_eq!(found, vec![TITLE_BLANK, CONTENT_BLANK]);
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let found = violations(&NoteInput::new(" \t", "\n\n"));
        assert_eq!(found, vec![TITLE_BLANK, CONTENT_BLANK]);
    }

    #[test]
    fn overlong_title_reports_length_only() {
        let title = "a".repeat(TITLE_MAX_CHARS + 1);
        let found = violations(&NoteInput::new(title, "x"));
        assert_eq!(found, vec![TITLE_TOO_LONG]);
    }

    #[test]
    fn title_at_limit_is_accepted() {
        let title = "a".repeat(TITLE_MAX_CHARS);
        assert!(violations(&NoteInput::new(title, "x")).is_empty());
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(title.len() > TITLE_MAX_CHARS);
        assert!(violations(&NoteInput::new(title, "x")).is_empty());
    }

    #[test]
    fn long_blank_title_breaks_both_title_rules() {
        let title = " ".repeat(TITLE_MAX_CHARS + 1);
        let found = violations(&NoteInput::new(title, "x"));
        assert_eq!(found, vec![TITLE_BLANK, TITLE_TOO_LONG]);
    }

    #[test]
    fn content_has_no_upper_bound() {
        let content = "x".repeat(1_000_000);
        assert!(violations(&NoteInput::new("T", content)).is_empty());
    }

    #[test]
    fn validate_collects_owned_messages() {
        let err = NoteInput::new("", "C").validate().unwrap_err();
        assert_eq!(err.errors, vec![TITLE_BLANK.to_string()]);
        assert!(err.to_string().contains(TITLE_BLANK));
    }
}
