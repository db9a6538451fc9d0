//! Finding source tables and naming their book and chapter.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::IngestResult;

/// One source table, with the book and chapter it covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Directory of the file relative to the discovery root, `/`-joined.
    /// Falls back to the root's own name for files directly under it.
    pub book: String,
    /// File stem.
    pub chapter: String,
}

impl SourceFile {
    /// Where this chapter's results go under `out_root`.
    pub fn output_dir(&self, out_root: &Path) -> PathBuf {
        let mut dir = out_root.to_path_buf();
        dir.extend(self.book.split('/').filter(|s| !s.is_empty()));
        dir.push(&self.chapter);
        dir
    }

    /// A `book/chapter` label for logs.
    pub fn label(&self) -> String {
        if self.book.is_empty() {
            self.chapter.clone()
        } else {
            format!("{}/{}", self.book, self.chapter)
        }
    }
}

/// Find source tables under `root`, siblings sorted by file name.
///
/// `root` may be a single file, which is returned as is regardless of its
/// extension. Otherwise every file whose extension matches `extension`
/// (case-insensitively) is returned.
pub fn discover_sources(root: &Path, extension: &str) -> IngestResult<Vec<SourceFile>> {
    if root.is_file() {
        let book = root
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        return Ok(vec![SourceFile {
            path: root.to_path_buf(),
            book,
            chapter: file_stem(root),
        }]);
    }

    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut sources = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if !matches {
            continue;
        }

        let relative_dir = path
            .parent()
            .and_then(|p| p.strip_prefix(root).ok())
            .map(|p| {
                p.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .unwrap_or_default();
        let book = if relative_dir.is_empty() {
            root_name.clone()
        } else {
            relative_dir
        };

        sources.push(SourceFile {
            path: path.to_path_buf(),
            book,
            chapter: file_stem(path),
        });
    }

    tracing::debug!(root = %root.display(), count = sources.len(), "sources discovered");
    Ok(sources)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
