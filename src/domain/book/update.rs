use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::BookField;
use super::invariants::{validate_author, validate_title, validate_year};
use crate::domain::{DomainError, DomainResult};

/// A partial change to the editable fields of a book
/// `None` means "leave unchanged"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl BookUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.year.is_none()
    }

    /// Check every provided field against the creation rules, in field order.
    /// Returns the update with trimmed text; nothing is applied here.
    pub fn validated(self, current_year: i32) -> DomainResult<Self> {
        let title = self.title.as_deref().map(validate_title).transpose()?;
        let author = self.author.as_deref().map(validate_author).transpose()?;
        let year = self
            .year
            .map(|y| validate_year(y, current_year))
            .transpose()?;

        Ok(Self {
            title,
            author,
            year,
        })
    }

    /// Build an update from a loosely-typed JSON object.
    ///
    /// Unknown keys are rejected together, before any value is inspected.
    /// A present key with the wrong JSON type (including `null`) fails with
    /// that field's validation error. Year range is checked later by
    /// [`BookUpdate::validated`], which needs the clock.
    pub fn from_fields(fields: &Map<String, Value>) -> DomainResult<Self> {
        let invalid: Vec<String> = fields
            .keys()
            .filter(|key| BookField::from_key(key).is_none())
            .cloned()
            .collect();
        if !invalid.is_empty() {
            return Err(DomainError::InvalidFields(invalid));
        }

        let title = fields
            .get(BookField::Title.as_str())
            .map(|v| text_value(v, BookField::Title))
            .transpose()?;
        let author = fields
            .get(BookField::Author.as_str())
            .map(|v| text_value(v, BookField::Author))
            .transpose()?;
        let year = fields
            .get(BookField::Year.as_str())
            .map(year_value)
            .transpose()?;

        Ok(Self {
            title,
            author,
            year,
        })
    }
}

fn text_value(value: &Value, field: BookField) -> DomainResult<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(DomainError::validation(field)),
    }
}

/// Integral JSON numbers only: `2020` and `2020.0` pass, `2020.5` and `"2020"` do not
fn year_value(value: &Value) -> DomainResult<i32> {
    let Value::Number(n) = value else {
        return Err(DomainError::validation(BookField::Year));
    };

    let integral = n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    });

    integral
        .and_then(|y| i32::try_from(y).ok())
        .ok_or_else(|| DomainError::validation(BookField::Year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_builder_and_is_empty() {
        assert!(BookUpdate::new().is_empty());
        let update = BookUpdate::new().title("Ubik").year(1969);
        assert!(!update.is_empty());
        assert_eq!(update.author, None);
    }

    #[test]
    fn test_validated_trims_text() {
        let update = BookUpdate::new()
            .title("  Solaris ")
            .author(" Stanisław Lem ")
            .validated(2024)
            .unwrap();
        assert_eq!(update.title.as_deref(), Some("Solaris"));
        assert_eq!(update.author.as_deref(), Some("Stanisław Lem"));
    }

    #[test]
    fn test_validated_stops_at_first_bad_field() {
        let err = BookUpdate::new()
            .title("")
            .year(3000)
            .validated(2024)
            .unwrap_err();
        assert_eq!(err, DomainError::validation(BookField::Title));
    }

    #[test]
    fn test_unknown_keys_are_all_reported_in_order() {
        let fields = object(json!({ "title": "ok", "pages": 300, "isRead": true }));
        let err = BookUpdate::from_fields(&fields).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidFields(vec!["pages".to_string(), "isRead".to_string()])
        );
    }

    #[test]
    fn test_null_title_is_a_validation_error() {
        let fields = object(json!({ "title": null }));
        assert_eq!(
            BookUpdate::from_fields(&fields).unwrap_err(),
            DomainError::validation(BookField::Title)
        );
    }

    #[test]
    fn test_year_must_be_integral_number() {
        let whole_float = object(json!({ "year": 2020.0 }));
        assert_eq!(BookUpdate::from_fields(&whole_float).unwrap().year, Some(2020));

        for bad in [json!({ "year": 2020.5 }), json!({ "year": "2020" }), json!({ "year": null })] {
            assert_eq!(
                BookUpdate::from_fields(&object(bad)).unwrap_err(),
                DomainError::validation(BookField::Year)
            );
        }
    }

    #[test]
    fn test_typed_form_rejects_unknown_keys() {
        let parsed: Result<BookUpdate, _> = serde_json::from_value(json!({ "isbn": "x" }));
        assert!(parsed.is_err());
    }
}
