//! Dependency manifest (`composer.json`) mutation.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use super::{AppError, FeatureName};

/// Manifest file name inside a scaffolded project.
pub const MANIFEST_FILE: &str = "composer.json";

const REQUIRE_KEY: &str = "require";

/// A parsed manifest. Key order is preserved so untouched entries serialize unchanged.
#[derive(Debug, Clone)]
pub struct DependencyManifest {
    path: PathBuf,
    root: Map<String, Value>,
}

impl DependencyManifest {
    /// Parse manifest content read from `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(content).map_err(|e| AppError::ManifestInvalid {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        match value {
            Value::Object(root) => Ok(Self { path: path.to_path_buf(), root }),
            _ => Err(AppError::ManifestInvalid {
                path: path.to_path_buf(),
                details: "top-level value is not an object".to_string(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `require` section, if any.
    pub fn require(&self) -> Option<&Map<String, Value>> {
        self.root.get(REQUIRE_KEY).and_then(Value::as_object)
    }

    /// Version constraint for a required package.
    pub fn constraint(&self, package: &str) -> Option<&str> {
        self.require().and_then(|require| require.get(package)).and_then(Value::as_str)
    }

    /// Set `require["<vendor>/<feature>"] = constraint` for each feature.
    ///
    /// Existing entries are never removed; an entry with the same name is overwritten.
    pub fn require_features(
        &mut self,
        vendor: &str,
        constraint: &str,
        features: &[FeatureName],
    ) -> Result<(), AppError> {
        let require = self
            .root
            .entry(REQUIRE_KEY.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(require) = require else {
            return Err(AppError::ManifestInvalid {
                path: self.path.clone(),
                details: format!("'{}' is not an object", REQUIRE_KEY),
            });
        };

        for feature in features {
            require.insert(feature.package_name(vendor), Value::String(constraint.to_string()));
        }
        Ok(())
    }

    /// Serialize with four-space indentation and a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, AppError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.root.serialize(&mut serializer).map_err(|e| AppError::ManifestInvalid {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        let mut out = String::from_utf8(buf).map_err(|e| AppError::ManifestInvalid {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        out.push('\n');
        Ok(out)
    }
}
