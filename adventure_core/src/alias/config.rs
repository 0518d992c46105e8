//! Loading alias tables from TOML.

use serde::Deserialize;
use std::fs;

use super::{Alias, AliasTable};
use crate::error::AliasError;

/// On-disk layout: a list of `[[alias]]` tables, matched in file order
/// when prefixes tie.
#[derive(Debug, Deserialize)]
struct AliasFile {
    #[serde(rename = "alias", default)]
    aliases: Vec<Alias>,
}

impl AliasTable {
    /// Parse an alias table from TOML text.
    ///
    /// ```toml
    /// [[alias]]
    /// phrase = "pick up"
    /// command = "get"
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, AliasError> {
        let file: AliasFile = toml::from_str(text)?;
        if let Some(position) = file.aliases.iter().position(|a| a.phrase.is_empty()) {
            return Err(AliasError::EmptyPhrase(position));
        }
        Ok(Self::new(file.aliases))
    }

    /// Read an alias table from a TOML file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, AliasError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| AliasError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), aliases = table.len(), "loaded alias table");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_file_matches_standard_table() {
        let bundled = AliasTable::from_toml_str(include_str!("../../assets/aliases.toml")).unwrap();
        assert_eq!(bundled, AliasTable::standard());
    }

    #[test]
    fn test_custom_table() {
        let table = AliasTable::from_toml_str(
            r#"
            [[alias]]
            phrase = "take"
            command = "get"

            [[alias]]
            phrase = "l"
            command = "look"
            "#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("take lamp"), "get lamp");
        assert_eq!(table.resolve("l"), "look");
    }

    #[test]
    fn test_empty_file_gives_empty_table() {
        let table = AliasTable::from_toml_str("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.resolve("north"), "north");
    }

    #[test]
    fn test_empty_phrase_rejected() {
        let err = AliasTable::from_toml_str(
            r#"
            [[alias]]
            phrase = ""
            command = "look"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, AliasError::EmptyPhrase(0)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = AliasTable::from_toml_str("[[alias]\nphrase = ").unwrap_err();
        assert!(matches!(err, AliasError::Parse(_)));
    }
}
