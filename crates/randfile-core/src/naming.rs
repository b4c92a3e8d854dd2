//! Destination naming for uploaded files.
//!
//! A [`NamingPolicy`] turns an original filename into the object name stored
//! under [`UPLOAD_FOLDER`]. Every policy keeps the original extension:
//!
//! - `Original`: the filename unchanged. Two files with the same name map to
//!   the same object and the last write wins.
//! - `Random`: a fresh v4 UUID plus the extension.
//! - `Custom`: `{prefix}_{YYYYMMDD_HHMMSS}{extension}`, unique per second only.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::constants::{CUSTOM_TIMESTAMP_FORMAT, UPLOAD_FOLDER};
use crate::error::AppError;

/// Naming mode as selected on the form (`original`, `random`, `custom`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NamingMode {
    #[default]
    Original,
    Random,
    Custom,
}

impl NamingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingMode::Original => "original",
            NamingMode::Random => "random",
            NamingMode::Custom => "custom",
        }
    }

    /// Human-readable label used by the form.
    pub fn label(&self) -> &'static str {
        match self {
            NamingMode::Original => "Use original filename",
            NamingMode::Random => "Use random filename",
            NamingMode::Custom => "Custom filename",
        }
    }

    pub const ALL: [NamingMode; 3] = [NamingMode::Original, NamingMode::Random, NamingMode::Custom];
}

impl fmt::Display for NamingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "original" => Ok(NamingMode::Original),
            "random" => Ok(NamingMode::Random),
            "custom" => Ok(NamingMode::Custom),
            other => Err(AppError::InvalidInput(format!(
                "Invalid naming mode '{}'. Must be 'original', 'random', or 'custom'",
                other
            ))),
        }
    }
}

/// Prefix for custom names. Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPrefix(String);

impl CustomPrefix {
    pub fn new(prefix: impl Into<String>) -> Result<Self, AppError> {
        let prefix = prefix.into();
        if prefix.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Please enter a filename prefix".to_string(),
            ));
        }
        Ok(Self(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated naming choice for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingPolicy {
    Original,
    Random,
    Custom(CustomPrefix),
}

impl NamingPolicy {
    /// Build a policy from raw form input.
    ///
    /// The prefix is only consulted for `Custom`, where a missing or blank
    /// prefix rejects the whole submission.
    pub fn from_mode(mode: NamingMode, prefix: Option<&str>) -> Result<Self, AppError> {
        match mode {
            NamingMode::Original => Ok(NamingPolicy::Original),
            NamingMode::Random => Ok(NamingPolicy::Random),
            NamingMode::Custom => {
                let prefix = CustomPrefix::new(prefix.unwrap_or_default())?;
                Ok(NamingPolicy::Custom(prefix))
            }
        }
    }

    pub fn mode(&self) -> NamingMode {
        match self {
            NamingPolicy::Original => NamingMode::Original,
            NamingPolicy::Random => NamingMode::Random,
            NamingPolicy::Custom(_) => NamingMode::Custom,
        }
    }

    /// Object name for `original_name`, with `now` as the custom timestamp.
    pub fn object_name(&self, original_name: &str, now: NaiveDateTime) -> String {
        let extension = file_extension(original_name);
        match self {
            NamingPolicy::Original => original_name.to_string(),
            NamingPolicy::Random => format!("{}{}", Uuid::new_v4(), extension),
            NamingPolicy::Custom(prefix) => format!(
                "{}_{}{}",
                prefix,
                now.format(CUSTOM_TIMESTAMP_FORMAT),
                extension
            ),
        }
    }
}

/// Extension of `filename` including the leading dot, or `""`.
///
/// Only the last path component is considered, and leading dots do not start
/// an extension: `.env` and `..rc` have none, `a.b.txt` has `.txt`, `a.` has `.`.
pub fn file_extension(filename: &str) -> &str {
    let base_start = filename.rfind('/').map(|i| i + 1).unwrap_or(0);
    let base = &filename[base_start..];
    match base.rfind('.') {
        Some(dot) if base[..dot].chars().any(|c| c != '.') => &base[dot..],
        _ => "",
    }
}

/// Full storage key for an object name: `randfile/{name}`.
pub fn object_path(name: &str) -> String {
    format!("{}/{}", UPLOAD_FOLDER, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn extension_is_taken_from_last_dot() {
        assert_eq!(file_extension("a.b.txt"), ".txt");
        assert_eq!(file_extension("photo.PNG"), ".PNG");
        assert_eq!(file_extension("archive."), ".");
    }

    #[test]
    fn extension_is_empty_without_dot() {
        assert_eq!(file_extension("noext"), "");
        assert_eq!(file_extension(""), "");
    }

    #[test]
    fn leading_dots_do_not_start_an_extension() {
        assert_eq!(file_extension(".env"), "");
        assert_eq!(file_extension("..rc"), "");
        assert_eq!(file_extension(".config.toml"), ".toml");
    }

    #[test]
    fn extension_ignores_dots_in_directories() {
        assert_eq!(file_extension("dir.v2/readme"), "");
        assert_eq!(file_extension("dir.v2/notes.md"), ".md");
    }

    #[test]
    fn original_mode_is_identity() {
        let policy = NamingPolicy::Original;
        for name in ["photo.png", "noext", "a.b.txt", "with space.pdf", ".env"] {
            assert_eq!(policy.object_name(name, at(1, 2, 3)), name);
        }
    }

    #[test]
    fn random_mode_is_uuid_plus_extension() {
        let policy = NamingPolicy::Random;
        let name = policy.object_name("a.b.txt", at(1, 2, 3));
        assert_eq!(name.len(), 36 + ".txt".len());
        assert!(name.ends_with(".txt"));
        let id = Uuid::parse_str(&name[..36]).expect("uuid prefix");
        assert_eq!(id.get_version_num(), 4);
        assert_eq!(&name[..36], id.hyphenated().to_string());

        let bare = policy.object_name("noext", at(1, 2, 3));
        assert_eq!(bare.len(), 36);
        assert!(Uuid::parse_str(&bare).is_ok());
    }

    #[test]
    fn random_mode_never_repeats() {
        let policy = NamingPolicy::Random;
        let first = policy.object_name("x.bin", at(1, 2, 3));
        let second = policy.object_name("x.bin", at(1, 2, 3));
        assert_ne!(first, second);
    }

    #[test]
    fn custom_mode_appends_timestamp_and_extension() {
        let policy = NamingPolicy::Custom(CustomPrefix::new("report").unwrap());
        assert_eq!(
            policy.object_name("q3.final.xlsx", at(14, 5, 9)),
            "report_20240309_140509.xlsx"
        );
        assert_eq!(
            policy.object_name("noext", at(23, 59, 59)),
            "report_20240309_235959"
        );
    }

    #[test]
    fn custom_mode_requires_prefix() {
        for prefix in [None, Some(""), Some("   ")] {
            let err = NamingPolicy::from_mode(NamingMode::Custom, prefix).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(ref msg) if msg.contains("prefix")));
        }
    }

    #[test]
    fn prefix_is_ignored_outside_custom_mode() {
        assert_eq!(
            NamingPolicy::from_mode(NamingMode::Random, Some("ignored")).unwrap(),
            NamingPolicy::Random
        );
        assert_eq!(
            NamingPolicy::from_mode(NamingMode::Original, None).unwrap(),
            NamingPolicy::Original
        );
    }

    #[test]
    fn naming_mode_parses_form_values() {
        assert_eq!("custom".parse::<NamingMode>().unwrap(), NamingMode::Custom);
        assert_eq!(" Random ".parse::<NamingMode>().unwrap(), NamingMode::Random);
        assert!("sequential".parse::<NamingMode>().is_err());
    }

    #[test]
    fn object_path_uses_upload_folder() {
        assert_eq!(object_path("photo.png"), "randfile/photo.png");
    }
}
