//! JSON output for one chapter.
//!
//! A chapter directory holds `base.json` (verse to base reading) and one
//! `<edition>.json` per variant edition (verse to change regions, verses
//! without changes left out).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use collate_diff::ChapterDiff;
use collate_types::render_text;

use crate::error::{IngestError, IngestResult};

/// File name of the base reading.
pub const BASE_FILE: &str = "base.json";

/// How the base reading of each verse is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseRendering {
    /// Display text rebuilt from the tokens.
    #[default]
    Text,
    /// The token list itself, with kinds.
    Tokens,
}

/// Write a chapter's results into `out_dir`, creating it if needed.
///
/// Returns the paths written, base first.
pub fn write_chapter(
    out_dir: &Path,
    diff: &ChapterDiff,
    rendering: BaseRendering,
    whitespace_is_token: bool,
) -> IngestResult<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|e| IngestError::io(out_dir, e))?;

    let mut written = Vec::with_capacity(diff.editions.len() + 1);

    let base_path = out_dir.join(BASE_FILE);
    match rendering {
        BaseRendering::Text => {
            let text = diff.base.map(|seq| render_text(seq, whitespace_is_token));
            write_json(&base_path, &text)?;
        }
        BaseRendering::Tokens => write_json(&base_path, &diff.base)?,
    }
    written.push(base_path);

    for (edition, verses) in &diff.editions {
        let path = out_dir.join(format!("{edition}.json"));
        write_json(&path, verses)?;
        written.push(path);
    }

    tracing::debug!(dir = %out_dir.display(), files = written.len(), "chapter written");
    Ok(written)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> IngestResult<()> {
    let file = File::create(path).map_err(|e| IngestError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
        IngestError::Serialization {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| IngestError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use collate_diff::{AlignmentDriver, Collation, DriverConfig, VerseReadings};
    use collate_types::{Sequence, Token};
    use serde_json::{json, Value};

    fn seq(words: &[&str]) -> Sequence {
        words.iter().map(|w| Token::new(*w).unwrap()).collect()
    }

    fn chapter() -> ChapterDiff {
        let driver =
            AlignmentDriver::new(DriverConfig::new(["1830", "1837", "1840"], "1830")).unwrap();
        let mut collation = Collation::new();
        collation.push(
            VerseReadings::new("Enos 1:1")
                .with_reading("1830", seq(&["I", "Nephi", ","]))
                .with_reading("1837", seq(&["I", "Enos", ","]))
                .with_reading("1840", seq(&["I", "Nephi", ","])),
        );
        collation.push(
            VerseReadings::new("Enos 1:2")
                .with_reading("1830", seq(&["And"]))
                .with_reading("1837", seq(&["And"]))
                .with_reading("1840", seq(&["And"])),
        );
        driver.diff_chapter(&collation)
    }

    fn read(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn writes_base_text_and_edition_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("book/Enos");
        let written = write_chapter(&out, &chapter(), BaseRendering::Text, false).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["base.json", "1837.json", "1840.json"]);

        assert_eq!(
            read(&out.join("base.json")),
            json!({"Enos 1:1": "I Nephi,", "Enos 1:2": "And"})
        );
        assert_eq!(
            read(&out.join("1837.json")),
            json!({
                "Enos 1:1": [{
                    "index": 1,
                    "remove": [{"text": "Nephi", "kind": "word"}],
                    "add": [{"text": "Enos", "kind": "word"}]
                }]
            })
        );
        assert_eq!(read(&out.join("1840.json")), json!({}));
    }

    #[test]
    fn base_text_spaces_quotes_and_parentheses() {
        let driver = AlignmentDriver::new(DriverConfig::new(["1830"], "1830")).unwrap();
        let mut collation = Collation::new();
        collation.push(VerseReadings::new("1:1").with_reading(
            "1830",
            seq(&["he", "said", "\u{201C}", "go", "\u{201D}", "(", "see", ")"]),
        ));
        let dir = tempfile::tempdir().unwrap();
        write_chapter(dir.path(), &driver.diff_chapter(&collation), BaseRendering::Text, false)
            .unwrap();
        assert_eq!(
            read(&dir.path().join(BASE_FILE)),
            json!({"1:1": "he said \u{201C}go\u{201D} (see)"})
        );
    }

    #[test]
    fn writes_base_tokens() {
        let dir = tempfile::tempdir().unwrap();
        write_chapter(dir.path(), &chapter(), BaseRendering::Tokens, false).unwrap();
        let base = read(&dir.path().join(BASE_FILE));
        assert_eq!(base["Enos 1:2"], json!([{"text": "And", "kind": "word"}]));
    }

    #[test]
    fn unwritable_target_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let err = write_chapter(&blocker.join("sub"), &chapter(), BaseRendering::Text, false)
            .unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
        assert!(err.to_string().contains("sub"));
    }
}
