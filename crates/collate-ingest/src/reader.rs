//! Tabular source reading.
//!
//! A source table has a header row naming its columns, one of which holds
//! the verse citation and one per edition. Each data row is one token
//! position: for every edition, the cell holds that edition's token at this
//! position, a placeholder, or nothing. Rows sharing a citation belong to
//! the same verse, in row order.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use collate_diff::{Collation, VerseReadings};
use collate_types::{EditionId, Sequence, Token, VerseId};

use crate::config::IngestConfig;
use crate::error::{IngestError, IngestResult};

/// Turn one raw cell into a token, resolving placeholders.
///
/// Blank cells and the absence marker yield nothing. The space marker
/// yields a whitespace token only when whitespace is tokenized.
pub fn resolve_cell(raw: &str, config: &IngestConfig) -> Option<Token> {
    let cell = raw.trim();
    if cell.is_empty() || cell == config.absence_marker {
        return None;
    }
    if cell == config.space_marker {
        return config.whitespace_is_token.then(Token::whitespace);
    }
    Token::new(cell).ok()
}

/// Read a source table from disk.
pub fn read_collation(
    path: &Path,
    editions: &[EditionId],
    config: &IngestConfig,
) -> IngestResult<Collation> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    parse_collation(BufReader::new(file), path, editions, config)
}

/// Parse a source table. `source` is used in errors and logs only.
pub fn parse_collation(
    reader: impl BufRead,
    source: &Path,
    editions: &[EditionId],
    config: &IngestConfig,
) -> IngestResult<Collation> {
    let mut lines = reader.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line.map_err(|e| IngestError::io(source, e))?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => {
                return Err(IngestError::MissingHeader {
                    path: source.to_path_buf(),
                })
            }
        }
    };
    let columns = ColumnMap::from_header(&header, source, editions, config)?;

    let mut collation = Collation::new();
    let mut positions: HashMap<VerseId, usize> = HashMap::new();

    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line.map_err(|e| IngestError::io(source, e))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split(config.delimiter).collect();
        if cells.len() <= columns.max_index {
            return Err(IngestError::MalformedRow {
                path: source.to_path_buf(),
                line: line_no,
                expected: columns.max_index + 1,
                found: cells.len(),
            });
        }

        let citation = cells[columns.citation].trim();
        if citation.is_empty() {
            warn!(path = %source.display(), line = line_no, "row without citation; skipping");
            continue;
        }

        let verse = VerseId::from(citation);
        let pos = *positions.entry(verse.clone()).or_insert_with(|| {
            let mut readings = VerseReadings::new(verse);
            for edition in editions {
                readings.readings.insert(edition.clone(), Sequence::new());
            }
            collation.push(readings);
            collation.len() - 1
        });

        let readings = &mut collation.verses[pos].readings;
        for (edition, &column) in editions.iter().zip(&columns.editions) {
            if let Some(token) = resolve_cell(cells[column], config) {
                readings.entry(edition.clone()).or_default().push(token);
            }
        }
    }

    debug!(path = %source.display(), verses = collation.len(), "source parsed");
    Ok(collation)
}

/// Positions of the columns we care about.
struct ColumnMap {
    citation: usize,
    /// One entry per configured edition, same order.
    editions: Vec<usize>,
    max_index: usize,
}

impl ColumnMap {
    fn from_header(
        header: &str,
        source: &Path,
        editions: &[EditionId],
        config: &IngestConfig,
    ) -> IngestResult<Self> {
        let names: Vec<&str> = header
            .trim_start_matches('\u{feff}')
            .trim_end_matches('\r')
            .split(config.delimiter)
            .map(str::trim)
            .collect();

        let find = |column: &str| {
            names
                .iter()
                .position(|n| *n == column)
                .ok_or_else(|| IngestError::MissingColumn {
                    path: source.to_path_buf(),
                    column: column.to_string(),
                })
        };

        let citation = find(&config.citation_column)?;
        let editions = editions
            .iter()
            .map(|e| find(e.as_str()))
            .collect::<IngestResult<Vec<_>>>()?;
        let max_index = editions.iter().copied().fold(citation, usize::max);

        Ok(Self {
            citation,
            editions,
            max_index,
        })
    }
}
