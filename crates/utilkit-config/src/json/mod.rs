//! JSON rosters, answer keys and dynamic values

use tracing::debug;
use utilkit_core::error::UtilError;
use utilkit_core::{AnswerMap, User, Value};

use crate::{toml::Document, ConfigResult};

/// Parse a JSON array of user records
pub fn parse_users_json(content: &str) -> ConfigResult<Vec<User>> {
    let users: Vec<User> = serde_json::from_str(content).map_err(json_error)?;
    users.iter().try_for_each(User::validate)?;
    Ok(users)
}

/// Parse a JSON object of answers keyed by question
pub fn parse_answers_json(content: &str) -> ConfigResult<AnswerMap> {
    serde_json::from_str(content).map_err(json_error)
}

/// Parse any JSON text into a dynamic value
pub fn parse_value_json(content: &str) -> ConfigResult<Value> {
    serde_json::from_str(content).map_err(json_error)
}

/// Parse a JSON document.
///
/// Accepts either a bare array of users or an object with optional
/// `users` and `answers` members.
pub fn parse_document_json(content: &str) -> ConfigResult<Document> {
    let raw: serde_json::Value = serde_json::from_str(content).map_err(json_error)?;

    let document = if raw.is_array() {
        Document {
            users: serde_json::from_value(raw).map_err(json_error)?,
            ..Document::default()
        }
    } else {
        serde_json::from_value(raw).map_err(json_error)?
    };

    document.validate()?;
    Ok(document)
}

/// Serialize users to pretty-printed JSON
pub fn serialize_users_json(users: &[User]) -> ConfigResult<String> {
    serde_json::to_string_pretty(users).map_err(|e| UtilError::JsonParse {
        message: format!("JSON serialization error: {}", e),
    })
}

/// Load and parse a JSON document from file path
pub async fn load_from_file(path: &camino::Utf8Path) -> ConfigResult<Document> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| UtilError::io(format!("Failed to read {}", path), e))?;

    let document = parse_document_json(&content).map_err(|e| match e {
        UtilError::JsonParse { message } => UtilError::JsonParse {
            message: format!("In file {}: {}", path, message),
        },
        other => other,
    })?;

    debug!(
        %path,
        users = document.users.len(),
        answers = document.answers.len(),
        "loaded JSON document"
    );

    Ok(document)
}

/// Load just the users of a JSON document
pub async fn load_users_from_file(path: &camino::Utf8Path) -> ConfigResult<Vec<User>> {
    load_from_file(path).await.map(|document| document.users)
}

fn json_error(e: serde_json::Error) -> UtilError {
    UtilError::JsonParse {
        message: format!("JSON parsing error: {}", e),
    }
}
