use serde::{Deserialize, Serialize};

/// How source tables are laid out and which placeholder markers they use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Header of the column holding the verse identifier.
    pub citation_column: String,
    /// Cell value meaning "an explicit space here".
    pub space_marker: String,
    /// Cell value meaning "this edition has nothing here".
    pub absence_marker: String,
    /// Keep explicit spaces as whitespace tokens instead of dropping them.
    pub whitespace_is_token: bool,
    /// Cell delimiter.
    pub delimiter: char,
    /// Extension of source files when discovering a directory.
    pub extension: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            citation_column: "Citation".to_string(),
            space_marker: "⌴".to_string(),
            absence_marker: "∅".to_string(),
            whitespace_is_token: false,
            delimiter: '\t',
            extension: "tsv".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = IngestConfig::default();
        assert_eq!(c.citation_column, "Citation");
        assert_eq!(c.space_marker, "⌴");
        assert_eq!(c.absence_marker, "∅");
        assert_eq!(c.delimiter, '\t');
        assert!(!c.whitespace_is_token);
    }
}
