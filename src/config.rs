// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Optional user configuration, read from a JSON file named `.genoscanconfig`, e.g.
//
// {
//   "export_dir": "/home/me/genomes",
//   "fasta": true,
//   "report": false
// }
//
// Unknown keys are ignored, as are keys of the wrong type.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use serde_json::Value;

use crate::errors::GenoscanError;
use crate::export::ExportKinds;

pub const CONFIG_FILE_NAME: &str = ".genoscanconfig";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenoscanConfig {
    pub export_dir: Option<PathBuf>,
    pub exports: ExportKinds,
}

impl GenoscanConfig {
    pub fn from_value(value: &Value) -> Self {
        let export_dir = value
            .get("export_dir")
            .and_then(Value::as_str)
            .map(PathBuf::from);
        let mut exports = ExportKinds::empty();
        if value.get("fasta").and_then(Value::as_bool).unwrap_or(false) {
            exports |= ExportKinds::FASTA;
        }
        if value.get("report").and_then(Value::as_bool).unwrap_or(false) {
            exports |= ExportKinds::REPORT;
        }
        GenoscanConfig {
            export_dir,
            exports,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, GenoscanError> {
        let text = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;
        if !value.is_object() {
            return Err(GenoscanError::Format(format!(
                "{}: expected a JSON object",
                path.display()
            )));
        }
        Ok(Self::from_value(&value))
    }

    /// Reads the config at `path`, if any. A file that cannot be read or parsed is reported and
    /// the defaults are used instead.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return GenoscanConfig::default();
        };
        match GenoscanConfig::from_file(path) {
            Ok(cfg) => {
                info!("Using config {}", path.display());
                cfg
            }
            Err(e) => {
                eprintln!("WARNING: ignoring {}: {}", path.display(), e);
                GenoscanConfig::default()
            }
        }
    }

    // Command-line values take precedence: an explicit export dir replaces the configured one, and
    // export flags add to the configured kinds. Exports go to "." when neither names a dir.
    pub fn merged(
        self,
        export_dir: Option<PathBuf>,
        fasta: bool,
        report: bool,
    ) -> (PathBuf, ExportKinds) {
        let mut exports = self.exports;
        if fasta {
            exports |= ExportKinds::FASTA;
        }
        if report {
            exports |= ExportKinds::REPORT;
        }
        let dir = export_dir
            .or(self.export_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        (dir, exports)
    }
}

// Looks in $HOME first, then in the current directory.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_from_value() {
        let value = json!({
            "export_dir": "/tmp/genomes",
            "fasta": true,
            "report": true
        });
        let cfg = GenoscanConfig::from_value(&value);
        assert_eq!(cfg.export_dir, Some(PathBuf::from("/tmp/genomes")));
        assert_eq!(cfg.exports, ExportKinds::all());
    }

    #[test]
    fn test_config_from_value_lenient() {
        let value = json!({ "fasta": "yes", "report": true, "colour": 3 });
        let cfg = GenoscanConfig::from_value(&value);
        assert_eq!(cfg.export_dir, None);
        assert_eq!(cfg.exports, ExportKinds::REPORT);
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"fasta": true}"#).unwrap();
        let cfg = GenoscanConfig::from_file(&path).unwrap();
        assert_eq!(cfg.exports, ExportKinds::FASTA);
    }

    #[test]
    fn test_config_from_file_bad() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            GenoscanConfig::from_file(&path),
            Err(GenoscanError::Json(_))
        ));
        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(
            GenoscanConfig::from_file(&path),
            Err(GenoscanError::Format(_))
        ));
    }

    #[test]
    fn test_load_bad_config_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ \"fasta\": tru").unwrap();
        assert_eq!(GenoscanConfig::load(Some(path.as_path())), GenoscanConfig::default());
        assert_eq!(GenoscanConfig::load(None), GenoscanConfig::default());

        fs::write(&path, r#"{"export_dir": "out", "report": true}"#).unwrap();
        let cfg = GenoscanConfig::load(Some(path.as_path()));
        assert_eq!(cfg.export_dir, Some(PathBuf::from("out")));
        assert_eq!(cfg.exports, ExportKinds::REPORT);
    }

    #[test]
    fn test_merged_defaults() {
        let (dir, exports) = GenoscanConfig::default().merged(None, false, false);
        assert_eq!(dir, PathBuf::from("."));
        assert!(exports.is_empty());
    }

    #[test]
    fn test_merged_flags_override_config() {
        let cfg = GenoscanConfig {
            export_dir: Some(PathBuf::from("/from/config")),
            exports: ExportKinds::REPORT,
        };
        let (dir, exports) = cfg.clone().merged(None, false, false);
        assert_eq!(dir, PathBuf::from("/from/config"));
        assert_eq!(exports, ExportKinds::REPORT);

        let (dir, exports) = cfg.merged(Some(PathBuf::from("cli")), true, false);
        assert_eq!(dir, PathBuf::from("cli"));
        assert_eq!(exports, ExportKinds::FASTA | ExportKinds::REPORT);
    }
}
