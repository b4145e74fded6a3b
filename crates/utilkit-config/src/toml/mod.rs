//! TOML roster / answer-key documents

use std::ops::Range;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utilkit_core::error::UtilError;
use utilkit_core::{AnswerMap, User, Value};

use crate::ConfigResult;

/// A roster and an answer key read from one document
///
/// ```toml
/// [answers]
/// q1 = "a"
/// q2 = 42
///
/// [[users]]
/// id = 1
/// name = "Alice"
/// age = 25
/// email = "alice@example.com"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Answers keyed by question
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub answers: AnswerMap,

    /// User records
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,
}

impl Document {
    /// Validate every user record
    pub fn validate(&self) -> ConfigResult<()> {
        self.users.iter().try_for_each(User::validate)
    }

    /// The users as a dynamic roster for the `Value` entry points
    pub fn roster(&self) -> Value {
        self.users.iter().map(Value::from).collect()
    }
}

/// Parse a TOML document
pub fn parse_document(content: &str) -> ConfigResult<Document> {
    // toml_edit first, for syntax errors with a location
    content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|e| located_error(content, e.message(), e.span()))?;

    let document: Document = ::toml::from_str(content)
        .map_err(|e| located_error(content, e.message(), e.span()))?;

    document.validate()?;

    Ok(document)
}

/// Serialize a document to TOML.
///
/// TOML has no null, so answer keys holding `Null` or `Undefined` fail.
pub fn serialize_document(document: &Document) -> ConfigResult<String> {
    ::toml::to_string_pretty(document).map_err(|e| UtilError::TomlParse {
        message: format!("TOML serialization error: {}", e),
        line: 0,
        column: 0,
    })
}

/// Load and parse a TOML document from file path
pub async fn load_from_file(path: &camino::Utf8Path) -> ConfigResult<Document> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| UtilError::io(format!("Failed to read {}", path), e))?;

    let document = parse_document(&content).map_err(|e| match e {
        UtilError::TomlParse {
            message,
            line,
            column,
        } => UtilError::TomlParse {
            message: format!("In file {}: {}", path, message),
            line,
            column,
        },
        other => other,
    })?;

    debug!(
        %path,
        users = document.users.len(),
        answers = document.answers.len(),
        "loaded TOML document"
    );

    Ok(document)
}

fn located_error(content: &str, message: &str, span: Option<Range<usize>>) -> UtilError {
    let (line, column) = span.map_or((0, 0), |span| locate(content, span.start));
    UtilError::TomlParse {
        message: message.trim().to_string(),
        line,
        column,
    }
}

/// 1-based line and column of a byte offset
fn locate(content: &str, offset: usize) -> (usize, usize) {
    let before = content.get(..offset).unwrap_or(content);
    let line = before.matches('\n').count() + 1;
    let column = before
        .rsplit('\n')
        .next()
        .map_or(0, |last| last.chars().count())
        + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use utilkit_core::ops;

    const SAMPLE: &str = r#"
[answers]
q1 = "a"
q2 = 42
q3 = true

[[users]]
id = 1
name = "Alice"
age = 25
email = "alice@example.com"

[[users]]
id = 2
name = "bob"
age = 30
email = "bob@example.com"
"#;

    #[test]
    fn test_parse_document() {
        let document = parse_document(SAMPLE).unwrap();

        assert_eq!(document.users.len(), 2);
        assert_eq!(document.users[0], User::new(1, "Alice", 25, "alice@example.com"));
        assert_eq!(document.answers.get("q1"), Some(&Value::from("a")));
        assert_eq!(document.answers.get("q2"), Some(&Value::from(42)));
        assert_eq!(document.answers.get("q3"), Some(&Value::from(true)));
    }

    #[test]
    fn test_parse_empty_document() {
        let document = parse_document("").unwrap();
        assert!(document.users.is_empty());
        assert!(document.answers.is_empty());
    }

    #[test]
    fn test_document_feeds_queries() {
        let document = parse_document(SAMPLE).unwrap();
        let roster = document.roster();

        assert!(ops::is_email_taken(&roster, "bob@example.com").unwrap());
        let sorted = ops::sort_users_by_name(&roster).unwrap();
        assert_eq!(sorted[0].get("name"), Some(&Value::from("Alice")));
        assert!(ops::check_student_knowledge(&document.answers, &document.answers));
    }

    #[test]
    fn test_syntax_error_location() {
        let err = parse_document("[answers]\nq1 = \n").unwrap_err();
        match err {
            UtilError::TomlParse { line, column, .. } => {
                assert_eq!(line, 2);
                assert!(column >= 1);
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_type_error() {
        let err = parse_document("[[users]]\nid = \"one\"\nname = \"A\"\nage = 1\nemail = \"a@b\"\n")
            .unwrap_err();
        assert!(matches!(err, UtilError::TomlParse { .. }));
    }

    #[test]
    fn test_invalid_user() {
        let err = parse_document(
            "[[users]]\nid = 1\nname = \"Old\"\nage = -3\nemail = \"old@example.com\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, UtilError::RecordValidation { ref field, .. } if field == "age"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let document = parse_document(SAMPLE).unwrap();
        let text = serialize_document(&document).unwrap();
        assert_eq!(parse_document(&text).unwrap(), document);
    }

    #[test]
    fn test_serialize_rejects_null_answers() {
        let mut document = Document::default();
        document.answers.insert("q1".to_string(), Value::Null);
        assert!(serialize_document(&document).is_err());
    }

    #[test]
    fn test_locate() {
        assert_eq!(locate("abc", 0), (1, 1));
        assert_eq!(locate("ab\ncd", 4), (2, 2));
        assert_eq!(locate("ab", 99), (1, 3));
    }
}
