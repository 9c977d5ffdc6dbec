use serde::{Deserialize, Deserializer};

use crate::model::NewNote;

/// Client payload for `POST /notes` and `PUT /notes/:id`.
///
/// Absent or `null` fields become empty strings so they are reported by
/// the validation rules rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        NoteInput {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl From<NoteInput> for NewNote {
    fn from(input: NoteInput) -> Self {
        NewNote {
            title: input.title,
            content: input.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_empty_strings() {
        let input: NoteInput = serde_json::from_str(r#"{"title":"only title"}"#).unwrap();
        assert_eq!(input.title, "only title");
        assert_eq!(input.content, "");
    }

    #[test]
    fn null_fields_deserialize_to_empty_strings() {
        let input: NoteInput =
            serde_json::from_str(r#"{"title":null,"content":null}"#).unwrap();
        assert_eq!(input.title, "");
        assert_eq!(input.content, "");
    }

    #[test]
    fn translates_into_unsaved_note_verbatim() {
        let new_note = NewNote::from(NoteInput::new("  spaced  ", "body\nlines"));
        assert_eq!(new_note.title, "  spaced  ");
        assert_eq!(new_note.content, "body\nlines");
    }
}
