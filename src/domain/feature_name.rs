use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Deserializer};

use super::AppError;

/// A licensed feature, usable as the package segment of `<vendor>/<feature>`.
///
/// Guarantees:
/// - Non-empty
/// - Contains only lowercase ASCII alphanumerics, `-`, `_`, or `.`
/// - Not `.` or `..`, and does not start with a separator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureName(String);

impl FeatureName {
    /// Validate and create a new instance.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if is_valid_feature(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidFeatureName(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full package name under the given vendor prefix.
    pub fn package_name(&self, vendor: &str) -> String {
        format!("{}/{}", vendor, self.0)
    }
}

fn is_valid_feature(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };
    first.is_ascii_alphanumeric()
        && name.chars().all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.')
        })
}

impl Deref for FeatureName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for FeatureName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FeatureName::new(&s).map_err(serde::de::Error::custom)
    }
}
