//! Validated primitives shared by the symcheck crates.
//!
//! Identifiers (`Symptom`, `ConditionName`, `BodyRegion`) are opaque strings compared by exact
//! equality. Catalog data goes through [`NonEmptyText`] and [`Weight`] so malformed names or
//! weights are rejected at load time rather than during scoring.

use std::borrow::Borrow;
use std::fmt;

/// Errors that can occur when creating validated primitive types.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The weight was outside `(0, 1]` or not a finite number
    #[error("weight must be a finite number in (0, 1], got {0}")]
    WeightOutOfRange(f64),
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// An opaque symptom identifier.
///
/// No normalisation is applied: `"Fever"` and `"fever"` are different symptoms. Any string is
/// accepted so callers can pass free-form input; an identifier outside the catalog simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Symptom(String);

impl Symptom {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symptom {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Symptom {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<NonEmptyText> for Symptom {
    fn from(text: NonEmptyText) -> Self {
        Self(text.into_string())
    }
}

impl Borrow<str> for Symptom {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name of a condition, e.g. `"Migraine"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ConditionName(NonEmptyText);

impl ConditionName {
    pub fn new(name: impl AsRef<str>) -> Result<Self, TextError> {
        NonEmptyText::new(name).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyText> for ConditionName {
    fn from(text: NonEmptyText) -> Self {
        Self(text)
    }
}

impl Borrow<str> for ConditionName {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ConditionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A body region label used to group symptoms for selection, e.g. `"Head/Neck"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BodyRegion(NonEmptyText);

impl BodyRegion {
    pub fn new(label: impl AsRef<str>) -> Result<Self, TextError> {
        NonEmptyText::new(label).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyText> for BodyRegion {
    fn from(text: NonEmptyText) -> Self {
        Self(text)
    }
}

impl Borrow<str> for BodyRegion {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How characteristic a symptom is of a condition, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Creates a weight, rejecting zero, negatives, values above one and non-finite input.
    pub fn new(value: f64) -> Result<Self, TextError> {
        if !value.is_finite() || value <= 0.0 || value > 1.0 {
            return Err(TextError::WeightOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl<'de> serde::Deserialize<'de> for Weight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Weight::new(v).map_err(serde::de::Error::custom)
    }
}
