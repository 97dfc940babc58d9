use std::fmt;

/// One of the five inputs of the valuation form.
///
/// The set is closed: a [`FormFields`] value always holds exactly these keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    OwnerName,
    OwnerMobile,
    Address,
    CarpetArea,
    Possession,
}

static ALL_FIELDS: &[Field] = &[
    Field::OwnerName,
    Field::OwnerMobile,
    Field::Address,
    Field::CarpetArea,
    Field::Possession,
];

impl Field {
    /// Returns all fields in display order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Returns the wire key used by the valuation service (`ownerName`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Field::OwnerName => "ownerName",
            Field::OwnerMobile => "ownerMobile",
            Field::Address => "address",
            Field::CarpetArea => "carpetArea",
            Field::Possession => "possession",
        }
    }

    /// Looks up a field by its wire key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.key() == key)
    }

    /// Display label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::OwnerName => "Owner Name",
            Field::OwnerMobile => "Owner Mobile",
            Field::Address => "Property Address",
            Field::CarpetArea => "Carpet Area (sq.ft)",
            Field::Possession => "Possession",
        }
    }

    /// Hint rendered in an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::OwnerName => "Enter owner name",
            Field::OwnerMobile => "Enter mobile number",
            Field::Address => "Enter property address",
            Field::CarpetArea => "Enter area in sq.ft",
            Field::Possession => "Ready / Under Construction",
        }
    }

    /// Whether the field must be non-blank on submit.
    pub fn is_required(self) -> bool {
        matches!(self, Field::OwnerName)
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current raw text of every form input.
///
/// Values are kept exactly as typed; trimming and numeric parsing happen at
/// validation and submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    owner_name: String,
    owner_mobile: String,
    address: String,
    carpet_area: String,
    possession: String,
}

impl FormFields {
    /// Creates an empty set of fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current text of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::OwnerName => &self.owner_name,
            Field::OwnerMobile => &self.owner_mobile,
            Field::Address => &self.address,
            Field::CarpetArea => &self.carpet_area,
            Field::Possession => &self.possession,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::OwnerName => &mut self.owner_name,
            Field::OwnerMobile => &mut self.owner_mobile,
            Field::Address => &mut self.address,
            Field::CarpetArea => &mut self.carpet_area,
            Field::Possession => &mut self.possession,
        }
    }

    /// Replaces the value of `field`; no other field is touched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Appends a character to `field`.
    pub fn push_char(&mut self, field: Field, ch: char) {
        self.slot_mut(field).push(ch);
    }

    /// Removes the last character of `field`, if any.
    pub fn pop_char(&mut self, field: Field) {
        self.slot_mut(field).pop();
    }

    /// Empties every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::all().iter().all(|&f| self.get(f).is_empty())
    }

    /// Iterates over `(field, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::all().iter().map(move |&f| (f, self.get(f)))
    }
}
