//! User records.
//!
//! Rosters come either typed (`Vec<User>`) or dynamic (a `Value::Array` of
//! objects). `UserRecord` gives the query functions one view over both.

use super::Value;
use crate::error::{UtilError, UtilResult};
use serde::{Deserialize, Serialize};

/// A single user entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub email: String,
}

/// Field access shared by typed and dynamic user records.
///
/// A dynamic record may lack a field or hold the wrong kind of value there;
/// accessors return `None` in that case.
pub trait UserRecord {
    fn id(&self) -> Option<i64>;
    fn name(&self) -> Option<&str>;
    fn age(&self) -> Option<i64>;
    fn email(&self) -> Option<&str>;
}

impl User {
    /// Create a new user record
    pub fn new(id: i64, name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Check the record for values no real user can have
    pub fn validate(&self) -> UtilResult<()> {
        if self.name.trim().is_empty() {
            return Err(UtilError::RecordValidation {
                field: "name".to_string(),
                reason: format!("user {} has an empty name", self.id),
            });
        }

        if self.age < 0 {
            return Err(UtilError::RecordValidation {
                field: "age".to_string(),
                reason: format!("user {} has negative age {}", self.id, self.age),
            });
        }

        if !self.email.contains('@') {
            return Err(UtilError::RecordValidation {
                field: "email".to_string(),
                reason: format!("user {} has malformed email '{}'", self.id, self.email),
            });
        }

        Ok(())
    }
}

impl UserRecord for User {
    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn age(&self) -> Option<i64> {
        Some(self.age)
    }

    fn email(&self) -> Option<&str> {
        Some(&self.email)
    }
}

impl UserRecord for Value {
    fn id(&self) -> Option<i64> {
        self.get("id").and_then(Value::as_i64)
    }

    fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    fn age(&self) -> Option<i64> {
        self.get("age").and_then(Value::as_i64)
    }

    fn email(&self) -> Option<&str> {
        self.get("email").and_then(Value::as_str)
    }
}

impl From<User> for Value {
    fn from(user: User) -> Self {
        Value::object([
            ("id", Value::from(user.id)),
            ("name", Value::from(user.name)),
            ("age", Value::from(user.age)),
            ("email", Value::from(user.email)),
        ])
    }
}

impl From<&User> for Value {
    fn from(user: &User) -> Self {
        Value::from(user.clone())
    }
}

impl TryFrom<&Value> for User {
    type Error = UtilError;

    fn try_from(value: &Value) -> UtilResult<Self> {
        let missing = |field: &str| UtilError::RecordValidation {
            field: field.to_string(),
            reason: format!("expected {} field, found {}", field, describe(value.get(field))),
        };

        Ok(User {
            id: value.id().ok_or_else(|| missing("id"))?,
            name: value.name().ok_or_else(|| missing("name"))?.to_string(),
            age: value.age().ok_or_else(|| missing("age"))?,
            email: value.email().ok_or_else(|| missing("email"))?.to_string(),
        })
    }
}

fn describe(field: Option<&Value>) -> &'static str {
    field.map_or("nothing", Value::kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(1, "Alice", 25, "alice@example.com");
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Alice");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let err = User::new(1, "  ", 25, "a@b.c").validate().unwrap_err();
        assert!(matches!(err, UtilError::RecordValidation { ref field, .. } if field == "name"));

        let err = User::new(2, "Bob", -1, "bob@example.com").validate().unwrap_err();
        assert!(matches!(err, UtilError::RecordValidation { ref field, .. } if field == "age"));

        let err = User::new(3, "Eve", 22, "eve.example.com").validate().unwrap_err();
        assert!(matches!(err, UtilError::RecordValidation { ref field, .. } if field == "email"));
    }

    #[test]
    fn test_value_conversion() {
        let user = User::new(-1, "Negative", 25, "negative@example.com");
        let value = Value::from(&user);

        assert_eq!(value.id(), Some(-1));
        assert_eq!(value.name(), Some("Negative"));
        assert_eq!(User::try_from(&value).unwrap(), user);
    }

    #[test]
    fn test_dynamic_record_with_missing_fields() {
        let value = Value::object([("id", Value::from(7)), ("name", Value::from(42))]);

        assert_eq!(value.id(), Some(7));
        assert_eq!(value.name(), None);
        assert_eq!(value.age(), None);

        let err = User::try_from(&value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Record field 'name' is invalid: expected name field, found number"
        );
    }
}
