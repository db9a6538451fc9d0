//! Parallel processing of many chapters.
//!
//! Each chapter is read, diffed, and written on a blocking worker. At most
//! `jobs` chapters are in flight; a chapter that fails is recorded and the
//! rest carry on.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, info};

use collate_diff::AlignmentDriver;
use collate_ingest::{
    read_collation, write_chapter, BaseRendering, IngestConfig, IngestResult, SourceFile,
};

/// Everything a worker needs, shared read-only.
#[derive(Debug)]
pub struct BatchContext {
    pub driver: AlignmentDriver,
    pub ingest: IngestConfig,
    pub out_dir: PathBuf,
    pub rendering: BaseRendering,
}

/// A chapter that was processed successfully.
#[derive(Clone, Debug)]
pub struct ChapterOutcome {
    pub source: SourceFile,
    pub verses: usize,
    pub regions: usize,
    pub files: Vec<PathBuf>,
}

/// Result of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<ChapterOutcome>,
    /// Chapter label and error message.
    pub failed: Vec<(String, String)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, label: String, result: IngestResult<ChapterOutcome>) {
        match result {
            Ok(outcome) => {
                debug!(chapter = %label, regions = outcome.regions, "chapter done");
                self.succeeded.push(outcome);
            }
            Err(e) => {
                error!(chapter = %label, error = %e, "chapter failed");
                self.failed.push((label, e.to_string()));
            }
        }
    }
}

/// Read, diff, and write one chapter.
pub fn process_chapter(source: &SourceFile, ctx: &BatchContext) -> IngestResult<ChapterOutcome> {
    let collation = read_collation(&source.path, &ctx.driver.config().editions, &ctx.ingest)?;
    let diff = ctx.driver.diff_chapter(&collation);
    let files = write_chapter(
        &source.output_dir(&ctx.out_dir),
        &diff,
        ctx.rendering,
        ctx.ingest.whitespace_is_token,
    )?;
    Ok(ChapterOutcome {
        source: source.clone(),
        verses: collation.len(),
        regions: diff.region_count(),
        files,
    })
}

/// Process `sources` with at most `jobs` chapters at a time.
pub async fn run_batch(sources: Vec<SourceFile>, ctx: Arc<BatchContext>, jobs: usize) -> BatchReport {
    let jobs = jobs.max(1);
    let mut report = BatchReport::default();
    let mut set = JoinSet::new();

    for source in sources {
        while set.len() >= jobs {
            join_one(&mut set, &mut report).await;
        }
        let ctx = Arc::clone(&ctx);
        set.spawn_blocking(move || {
            let result = process_chapter(&source, &ctx);
            (source.label(), result)
        });
    }
    while !set.is_empty() {
        join_one(&mut set, &mut report).await;
    }

    info!(
        succeeded = report.succeeded.len(),
        failed = report.failed.len(),
        "batch complete"
    );
    report
}

async fn join_one(
    set: &mut JoinSet<(String, IngestResult<ChapterOutcome>)>,
    report: &mut BatchReport,
) {
    match set.join_next().await {
        Some(Ok((label, result))) => report.record(label, result),
        Some(Err(e)) => {
            error!(error = %e, "chapter worker panicked");
            report.failed.push(("<unknown>".to_string(), e.to_string()));
        }
        None => {}
    }
}
