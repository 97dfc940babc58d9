//! Form data: field values, client-side validation, and the save payload.

mod fields;
mod validation;
mod valuation;

pub use fields::{Field, FormFields};
pub use validation::{
    FieldError, ValidationErrors, parse_carpet_area, validate, validate_owner_name,
};
pub use valuation::{SavedValuation, ValuationPayload};
