use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

use super::fields::{Field, FormFields};

/// Client-side validation failures for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Owner name is required")]
    OwnerNameRequired,
    #[error("Carpet area must be a number")]
    CarpetAreaNotNumber,
    #[error("Carpet area cannot be negative")]
    CarpetAreaNegative,
}

/// Field-scoped error messages, keyed by the field in violation.
///
/// Client validation and the service's structured 400 response both produce
/// this shape, so the form renders them the same way. Keys from the service
/// that do not name a form field are kept as unattributed messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    by_field: BTreeMap<Field, String>,
    unattributed: Vec<String>,
}

impl ValidationErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an error set from the JSON object of a structured 400 response.
    ///
    /// Non-string values are rendered as JSON text.
    pub fn from_server_map(map: Map<String, Value>) -> Self {
        let mut errors = Self::new();
        for (key, value) in map {
            let message = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            match Field::from_key(&key) {
                Some(field) => errors.insert(field, message),
                None => errors.unattributed.push(format!("{key}: {message}")),
            }
        }
        errors
    }

    /// Records `message` for `field`, replacing any previous message.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.by_field.insert(field, message.into());
    }

    /// Returns the message for `field`, if it is in violation.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.by_field.get(&field).map(String::as_str)
    }

    /// Removes the entry for `field` only. Returns `true` if one was present.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.by_field.remove(&field).is_some()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.by_field.clear();
        self.unattributed.clear();
    }

    /// Returns `true` if there are no field or unattributed messages.
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty() && self.unattributed.is_empty()
    }

    /// Number of messages, attributed or not.
    pub fn len(&self) -> usize {
        self.by_field.len() + self.unattributed.len()
    }

    /// Iterates over field messages in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.by_field.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Messages from the service that do not belong to a known field.
    pub fn unattributed(&self) -> &[String] {
        &self.unattributed
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.insert(field, message);
        }
        errors
    }
}

/// Validates the owner name: must be non-blank after trimming.
pub fn validate_owner_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        Err(FieldError::OwnerNameRequired)
    } else {
        Ok(())
    }
}

/// Parses the raw carpet area text.
///
/// Blank input means "not specified" and yields `Ok(None)`. Anything else must
/// be a finite, non-negative number.
pub fn parse_carpet_area(raw: &str) -> Result<Option<f64>, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if !n.is_finite() => Err(FieldError::CarpetAreaNotNumber),
        Ok(n) if n < 0.0 => Err(FieldError::CarpetAreaNegative),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(FieldError::CarpetAreaNotNumber),
    }
}

/// Runs every client-side rule against `fields`.
pub fn validate(fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if let Err(e) = validate_owner_name(fields.get(Field::OwnerName)) {
        errors.insert(Field::OwnerName, e.to_string());
    }
    if let Err(e) = parse_carpet_area(fields.get(Field::CarpetArea)) {
        errors.insert(Field::CarpetArea, e.to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;
    use serde_json::json;

    use super::*;

    fn fields(owner: &str, area: &str) -> FormFields {
        let mut f = FormFields::new();
        f.set(Field::OwnerName, owner);
        f.set(Field::CarpetArea, area);
        f
    }

    mod validate_fn {
        use super::*;

        #[test]
        fn empty_owner_and_empty_area() {
            let errors = validate(&fields("", ""));
            let expected: ValidationErrors = [(Field::OwnerName, "Owner name is required")]
                .into_iter()
                .collect();
            assert_eq!(errors, expected);
        }

        #[test]
        fn negative_area() {
            let errors = validate(&fields("A", "-5"));
            let expected: ValidationErrors =
                [(Field::CarpetArea, "Carpet area cannot be negative")]
                    .into_iter()
                    .collect();
            assert_eq!(errors, expected);
        }

        #[test]
        fn non_numeric_area() {
            let errors = validate(&fields("A", "abc"));
            let expected: ValidationErrors = [(Field::CarpetArea, "Carpet area must be a number")]
                .into_iter()
                .collect();
            assert_eq!(errors, expected);
        }

        #[test]
        fn whitespace_owner_is_blank() {
            let errors = validate(&fields("   ", "12.5"));
            assert_eq!(errors.get(Field::OwnerName), Some("Owner name is required"));
            assert_eq!(errors.get(Field::CarpetArea), None);
        }

        #[test]
        fn both_errors_reported_together() {
            let errors = validate(&fields("", "x"));
            assert_eq!(errors.len(), 2);
        }

        #[test]
        fn other_fields_never_fail() {
            let mut f = fields("A", "");
            f.set(Field::OwnerMobile, "not a phone");
            f.set(Field::Address, "");
            f.set(Field::Possession, "???");
            assert!(validate(&f).is_empty());
        }
    }

    mod carpet_area {
        use super::*;

        #[test]
        fn blank_is_unspecified() {
            assert_eq!(parse_carpet_area(""), Ok(None));
            assert_eq!(parse_carpet_area("   "), Ok(None));
        }

        #[test]
        fn trims_before_parsing() {
            assert_eq!(parse_carpet_area(" 850.5 "), Ok(Some(850.5)));
        }

        #[test]
        fn zero_is_valid() {
            assert_eq!(parse_carpet_area("0"), Ok(Some(0.0)));
        }

        #[test]
        fn infinity_and_nan_are_not_numbers() {
            assert_eq!(
                parse_carpet_area("inf"),
                Err(FieldError::CarpetAreaNotNumber)
            );
            assert_eq!(
                parse_carpet_area("NaN"),
                Err(FieldError::CarpetAreaNotNumber)
            );
        }

        #[test]
        fn exponent_notation_accepted() {
            assert_eq!(parse_carpet_area("1e3"), Ok(Some(1000.0)));
        }

        #[quickcheck]
        fn non_negative_finite_always_accepted(n: f64) -> bool {
            if !n.is_finite() {
                return true;
            }
            let n = n.abs();
            parse_carpet_area(&n.to_string()) == Ok(Some(n))
        }

        #[quickcheck]
        fn negative_always_rejected(n: f64) -> bool {
            if !n.is_finite() || n >= 0.0 {
                return true;
            }
            parse_carpet_area(&n.to_string()) == Err(FieldError::CarpetAreaNegative)
        }
    }

    mod error_set {
        use super::*;

        #[test]
        fn clear_field_removes_only_that_field() {
            let mut errors = validate(&fields("", "abc"));
            assert!(errors.clear_field(Field::OwnerName));
            assert_eq!(errors.get(Field::OwnerName), None);
            assert!(errors.get(Field::CarpetArea).is_some());
        }

        #[test]
        fn clear_field_absent_returns_false() {
            let mut errors = ValidationErrors::new();
            assert!(!errors.clear_field(Field::Address));
        }

        #[test]
        fn from_server_map_maps_known_keys() {
            let body = json!({ "ownerMobile": "invalid" });
            let Value::Object(map) = body else {
                unreachable!()
            };
            let errors = ValidationErrors::from_server_map(map);
            assert_eq!(errors.get(Field::OwnerMobile), Some("invalid"));
            assert!(errors.unattributed().is_empty());
        }

        #[test]
        fn from_server_map_keeps_unknown_keys() {
            let body = json!({ "gender": "too long", "ownerName": "must not be blank" });
            let Value::Object(map) = body else {
                unreachable!()
            };
            let errors = ValidationErrors::from_server_map(map);
            assert_eq!(errors.get(Field::OwnerName), Some("must not be blank"));
            assert_eq!(errors.unattributed(), ["gender: too long".to_string()]);
            assert_eq!(errors.len(), 2);
        }

        #[test]
        fn from_server_map_renders_non_string_values() {
            let body = json!({ "carpetArea": 12 });
            let Value::Object(map) = body else {
                unreachable!()
            };
            let errors = ValidationErrors::from_server_map(map);
            assert_eq!(errors.get(Field::CarpetArea), Some("12"));
        }

        #[test]
        fn clear_removes_unattributed_too() {
            let body = json!({ "gender": "bad" });
            let Value::Object(map) = body else {
                unreachable!()
            };
            let mut errors = ValidationErrors::from_server_map(map);
            assert!(!errors.is_empty());
            errors.clear();
            assert!(errors.is_empty());
        }
    }
}
