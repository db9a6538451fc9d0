//! The alignment driver: runs aligner and compactor for every variant
//! edition against the shared base edition.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use collate_types::{EditionId, Sequence, VerseId};

use crate::align::{AlignAlgorithm, Aligner};
use crate::compact::{compact, ChangeRegion};
use crate::error::{ConfigError, ConfigResult};

/// Editions shipped with the default configuration, oldest first.
pub const DEFAULT_EDITIONS: &[&str] = &["1830", "1837", "1840", "1841", "1879", "1920", "1981", "2013"];

/// Which editions exist and which one the others are diffed against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// All editions, in display order. Must contain `base_edition`.
    pub editions: Vec<EditionId>,
    /// The reference edition.
    pub base_edition: EditionId,
    /// Aligner used for every diff.
    #[serde(default)]
    pub algorithm: AlignAlgorithm,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            editions: DEFAULT_EDITIONS.iter().map(|e| EditionId::from(*e)).collect(),
            base_edition: EditionId::from(DEFAULT_EDITIONS[0]),
            algorithm: AlignAlgorithm::default(),
        }
    }
}

impl DriverConfig {
    /// Build a configuration from an edition list and a base edition.
    pub fn new<I, E>(editions: I, base_edition: impl Into<EditionId>) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EditionId>,
    {
        Self {
            editions: editions.into_iter().map(Into::into).collect(),
            base_edition: base_edition.into(),
            algorithm: AlignAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: AlignAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Check that the edition list is non-empty, free of duplicates, and
    /// contains the base edition.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.editions.is_empty() {
            return Err(ConfigError::NoEditions);
        }
        let mut seen = HashSet::new();
        for edition in &self.editions {
            if !seen.insert(edition) {
                return Err(ConfigError::DuplicateEdition(edition.clone()));
            }
        }
        if !seen.contains(&self.base_edition) {
            return Err(ConfigError::UnknownBase(self.base_edition.clone()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------
// Input and output models
// ---------------------------------------------------------------

/// Every edition's reading of one verse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerseReadings {
    pub verse: VerseId,
    pub readings: BTreeMap<EditionId, Sequence>,
}

impl VerseReadings {
    pub fn new(verse: impl Into<VerseId>) -> Self {
        Self {
            verse: verse.into(),
            readings: BTreeMap::new(),
        }
    }

    pub fn with_reading(mut self, edition: impl Into<EditionId>, sequence: Sequence) -> Self {
        self.readings.insert(edition.into(), sequence);
        self
    }
}

/// The verses of one chapter, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collation {
    pub verses: Vec<VerseReadings>,
}

impl Collation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, verse: VerseReadings) {
        self.verses.push(verse);
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// Verse-keyed values that keep insertion order.
///
/// Serializes as a JSON object whose keys appear in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerseMap<T>(Vec<(VerseId, T)>);

impl<T> Default for VerseMap<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> VerseMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, verse: VerseId, value: T) {
        self.0.push((verse, value));
    }

    pub fn get(&self, verse: &str) -> Option<&T> {
        self.0.iter().find(|(v, _)| v.as_str() == verse).map(|(_, t)| t)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VerseId, &T)> {
        self.0.iter().map(|(v, t)| (v, t))
    }

    /// Map every value, keeping keys and order.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> VerseMap<U> {
        VerseMap(self.0.iter().map(|(v, t)| (v.clone(), f(t))).collect())
    }
}

impl<T: Serialize> Serialize for VerseMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (verse, value) in &self.0 {
            map.serialize_entry(verse, value)?;
        }
        map.end()
    }
}

/// The result of diffing one chapter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChapterDiff {
    /// The base edition's reading of every verse.
    pub base: VerseMap<Sequence>,
    /// For each variant edition, the verses that differ from the base.
    pub editions: BTreeMap<EditionId, VerseMap<Vec<ChangeRegion>>>,
}

impl ChapterDiff {
    /// Total number of change regions across all editions and verses.
    pub fn region_count(&self) -> usize {
        self.editions
            .values()
            .flat_map(|verses| verses.iter())
            .map(|(_, regions)| regions.len())
            .sum()
    }
}

// ---------------------------------------------------------------
// Driver
// ---------------------------------------------------------------

/// Diffs every variant edition against the base edition.
///
/// Editions are never diffed against each other. The driver holds no
/// mutable state and can be shared across threads.
pub struct AlignmentDriver {
    config: DriverConfig,
    aligner: Box<dyn Aligner>,
}

impl fmt::Debug for AlignmentDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignmentDriver")
            .field("editions", &self.config.editions)
            .field("base_edition", &self.config.base_edition)
            .field("algorithm", &self.config.algorithm)
            .finish()
    }
}

impl AlignmentDriver {
    /// Create a driver, validating the configuration.
    pub fn new(config: DriverConfig) -> ConfigResult<Self> {
        config.validate()?;
        let aligner = config.algorithm.aligner();
        Ok(Self { config, aligner })
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn base_edition(&self) -> &EditionId {
        &self.config.base_edition
    }

    /// The non-base editions, in configured order.
    pub fn variants(&self) -> impl Iterator<Item = &EditionId> {
        self.config
            .editions
            .iter()
            .filter(move |e| **e != self.config.base_edition)
    }

    /// Diff one verse.
    ///
    /// Each configured variant present in `readings` is diffed against
    /// `base`; editions with no changes are left out of the result. A
    /// reading for the base edition in `readings` is ignored.
    pub fn diff_verse(
        &self,
        base: &Sequence,
        readings: &BTreeMap<EditionId, Sequence>,
    ) -> BTreeMap<EditionId, Vec<ChangeRegion>> {
        self.variants()
            .filter_map(|edition| {
                let other = readings.get(edition)?;
                let regions = compact(&self.aligner.align(base, other));
                (!regions.is_empty()).then(|| (edition.clone(), regions))
            })
            .collect()
    }

    /// Diff every verse of a chapter.
    ///
    /// A verse without a base reading is treated as having an empty base.
    /// Every variant edition gets an entry in the result, even when none of
    /// its verses differ.
    pub fn diff_chapter(&self, collation: &Collation) -> ChapterDiff {
        let mut diff = ChapterDiff {
            base: VerseMap::new(),
            editions: self
                .variants()
                .map(|edition| (edition.clone(), VerseMap::new()))
                .collect(),
        };

        let empty = Sequence::new();
        for verse in &collation.verses {
            let base = verse.readings.get(self.base_edition()).unwrap_or(&empty);
            diff.base.push(verse.verse.clone(), base.clone());

            for (edition, regions) in self.diff_verse(base, &verse.readings) {
                if let Some(verses) = diff.editions.get_mut(&edition) {
                    verses.push(verse.verse.clone(), regions);
                }
            }
        }

        debug!(
            verses = collation.len(),
            regions = diff.region_count(),
            "chapter diffed"
        );
        diff
    }
}
