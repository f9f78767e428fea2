//! License key and decrypted license payload.

use std::fmt;

use serde::Deserialize;

use super::FeatureName;

/// Placeholder shown wherever a license key would otherwise be printed.
pub const REDACTED: &str = "********";

/// Raw license key as entered by the user.
///
/// `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct LicenseKey(String);

impl LicenseKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// The key text, for handing to the decoder and the license registration command.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LicenseKey({REDACTED})")
    }
}

/// Decrypted license contents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LicensePayload {
    pub valid: bool,
    /// Licensed feature modules, in license order.
    #[serde(default)]
    pub features: Vec<FeatureName>,
}

impl LicensePayload {
    /// Parse decoder output. Anything that is not a well-formed payload is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str::<LicensePayload>(raw.trim()) {
            Ok(payload) => Some(payload),
            Err(err) => {
                tracing::debug!(error = %err, "license decoder output is not a payload");
                None
            }
        }
    }
}
