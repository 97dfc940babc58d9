use chrono::NaiveDateTime;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::{Field, FormFields};
use super::validation::{FieldError, parse_carpet_area};

/// Request body for saving a valuation.
///
/// `carpet_area` serializes as a JSON number or `null`, never as a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationPayload {
    pub owner_name: String,
    pub owner_mobile: String,
    pub address: String,
    pub carpet_area: Option<f64>,
    pub possession: String,
}

impl ValuationPayload {
    /// Normalizes form text into a payload, parsing the carpet area.
    pub fn from_fields(fields: &FormFields) -> Result<Self, FieldError> {
        Ok(Self {
            owner_name: fields.get(Field::OwnerName).to_string(),
            owner_mobile: fields.get(Field::OwnerMobile).to_string(),
            address: fields.get(Field::Address).to_string(),
            carpet_area: parse_carpet_area(fields.get(Field::CarpetArea))?,
            possession: fields.get(Field::Possession).to_string(),
        })
    }
}

/// The part of a successful save response the form cares about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedValuation {
    /// Identifier assigned by the service, stringified if it was numeric.
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    /// Server-side creation timestamp, kept as sent.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SavedValuation {
    /// Creates a saved valuation with no timestamp.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: None,
        }
    }

    /// Formats `created_at` as `YYYY-MM-DD HH:MM` when it parses as an ISO
    /// local date-time; otherwise returns the raw text.
    pub fn created_at_display(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        match raw.parse::<NaiveDateTime>() {
            Ok(ts) => Some(ts.format("%Y-%m-%d %H:%M").to_string()),
            Err(_) => Some(raw.to_string()),
        }
    }
}

fn id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("unsupported id value: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn filled() -> FormFields {
        let mut f = FormFields::new();
        f.set(Field::OwnerName, "Asha Rao");
        f.set(Field::OwnerMobile, "9820000000");
        f.set(Field::Address, "12 Marine Drive");
        f.set(Field::CarpetArea, " 850.5 ");
        f.set(Field::Possession, "Ready");
        f
    }

    mod payload {
        use super::*;

        #[test]
        fn carpet_area_parsed_to_number() {
            let payload = ValuationPayload::from_fields(&filled()).unwrap();
            let json = serde_json::to_value(&payload).unwrap();
            assert_eq!(
                json,
                json!({
                    "ownerName": "Asha Rao",
                    "ownerMobile": "9820000000",
                    "address": "12 Marine Drive",
                    "carpetArea": 850.5,
                    "possession": "Ready",
                })
            );
        }

        #[test]
        fn blank_carpet_area_is_null() {
            let mut fields = filled();
            fields.set(Field::CarpetArea, "  ");
            let payload = ValuationPayload::from_fields(&fields).unwrap();
            let json = serde_json::to_value(&payload).unwrap();
            assert_eq!(json["carpetArea"], Value::Null);
        }

        #[test]
        fn invalid_carpet_area_is_an_error() {
            let mut fields = filled();
            fields.set(Field::CarpetArea, "abc");
            assert_eq!(
                ValuationPayload::from_fields(&fields),
                Err(FieldError::CarpetAreaNotNumber)
            );
        }
    }

    mod saved {
        use super::*;

        #[test]
        fn numeric_id_is_stringified() {
            let saved: SavedValuation = serde_json::from_value(json!({ "id": 42 })).unwrap();
            assert_eq!(saved.id, "42");
            assert_eq!(saved.created_at, None);
        }

        #[test]
        fn string_id_kept() {
            let saved: SavedValuation =
                serde_json::from_value(json!({ "id": "val-7", "ownerName": "x" })).unwrap();
            assert_eq!(saved.id, "val-7");
        }

        #[test]
        fn missing_id_is_rejected() {
            let result = serde_json::from_value::<SavedValuation>(json!({ "ownerName": "x" }));
            assert!(result.is_err());
        }

        #[test]
        fn object_id_is_rejected() {
            let result = serde_json::from_value::<SavedValuation>(json!({ "id": { "x": 1 } }));
            assert!(result.is_err());
        }

        #[test]
        fn created_at_formatted() {
            let saved: SavedValuation = serde_json::from_value(json!({
                "id": 1,
                "createdAt": "2025-03-14T09:26:53.589793",
            }))
            .unwrap();
            assert_eq!(
                saved.created_at_display(),
                Some("2025-03-14 09:26".to_string())
            );
        }

        #[test]
        fn unparseable_created_at_shown_raw() {
            let mut saved = SavedValuation::new("1");
            saved.created_at = Some("yesterday".into());
            assert_eq!(saved.created_at_display(), Some("yesterday".to_string()));
        }

        #[test]
        fn absent_created_at_shows_nothing() {
            assert_eq!(SavedValuation::new("1").created_at_display(), None);
        }
    }
}
