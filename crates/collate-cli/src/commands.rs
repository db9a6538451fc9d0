use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use serde_json::json;

use collate_diff::{AlignmentDriver, ChangeRegion};
use collate_ingest::discover_sources;
use collate_types::{render_text, tokenize, Token};

use crate::batch::{run_batch, BatchContext, BatchReport};
use crate::cli::*;
use crate::config::CollateConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CollateConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Run(args) => cmd_run(args, config, &cli.format),
        Command::Diff(args) => cmd_diff(args, config, &cli.format),
        Command::Config(_) => cmd_config(&config),
    }
}

fn cmd_run(args: RunArgs, config: CollateConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let out_dir = args.out.unwrap_or_else(|| config.output.dir.clone());
    let jobs = args.jobs.unwrap_or(config.output.jobs);

    let sources = discover_sources(&args.input, &config.ingest.extension)
        .with_context(|| format!("discovering sources under {}", args.input.display()))?;
    if sources.is_empty() {
        anyhow::bail!(
            "no .{} files found under {}",
            config.ingest.extension,
            args.input.display()
        );
    }

    let ctx = Arc::new(BatchContext {
        driver: AlignmentDriver::new(config.driver)?,
        ingest: config.ingest,
        out_dir: out_dir.clone(),
        rendering: config.output.base_rendering,
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting worker runtime")?;
    let report = runtime.block_on(run_batch(sources, ctx, jobs));

    match format {
        OutputFormat::Text => print_report_text(&report, &out_dir.display().to_string()),
        OutputFormat::Json => print_report_json(&report)?,
    }

    if !report.is_success() {
        anyhow::bail!("{} of {} chapters failed", report.failed.len(), report.total());
    }
    Ok(())
}

fn print_report_text(report: &BatchReport, out_dir: &str) {
    for outcome in &report.succeeded {
        println!(
            "  {} {} ({} verses, {} changes)",
            "✓".green(),
            outcome.source.label().bold(),
            outcome.verses,
            outcome.regions
        );
    }
    for (label, err) in &report.failed {
        println!("  {} {}: {}", "✗".red(), label.bold(), err);
    }
    let summary = format!(
        "{} of {} chapters written to {}",
        report.succeeded.len(),
        report.total(),
        out_dir
    );
    if report.is_success() {
        println!("{} {}", "✓".green().bold(), summary);
    } else {
        println!("{} {}", "✗".red().bold(), summary);
    }
}

fn print_report_json(report: &BatchReport) -> anyhow::Result<()> {
    let value = json!({
        "succeeded": report.succeeded.iter().map(|o| json!({
            "chapter": o.source.label(),
            "verses": o.verses,
            "regions": o.regions,
            "files": o.files,
        })).collect::<Vec<_>>(),
        "failed": report.failed.iter().map(|(chapter, error)| json!({
            "chapter": chapter,
            "error": error,
        })).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn cmd_diff(args: DiffArgs, config: CollateConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let whitespace = args.whitespace || config.ingest.whitespace_is_token;
    let base = tokenize(&args.base, whitespace);
    let variant = tokenize(&args.variant, whitespace);

    let aligner = config.driver.algorithm.aligner();
    let regions = collate_diff::compact(&aligner.align(&base, &variant));

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&regions)?),
        OutputFormat::Text => {
            if regions.is_empty() {
                println!("No changes.");
            }
            for region in &regions {
                println!("{}", describe_region(region, whitespace));
            }
        }
    }
    Ok(())
}

fn describe_region(region: &ChangeRegion, whitespace: bool) -> String {
    let mut line = format!("@{}", region.index).cyan().to_string();
    if !region.removed.is_empty() {
        line.push_str(&format!(" {}", bracket('-', &region.removed, whitespace).red()));
    }
    if !region.added.is_empty() {
        line.push_str(&format!(" {}", bracket('+', &region.added, whitespace).green()));
    }
    line
}

fn bracket(sign: char, tokens: &[Token], whitespace: bool) -> String {
    format!("{sign}[{}]", render_text(tokens, whitespace))
}

fn cmd_config(config: &CollateConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use collate_types::Token;

    fn region(index: usize, removed: &[&str], added: &[&str]) -> ChangeRegion {
        let toks = |w: &[&str]| w.iter().map(|t| Token::new(*t).unwrap()).collect();
        ChangeRegion {
            index,
            removed: toks(removed),
            added: toks(added),
        }
    }

    #[test]
    fn describes_replacement() {
        colored::control::set_override(false);
        assert_eq!(describe_region(&region(1, &["dog"], &["cat"]), false), "@1 -[dog] +[cat]");
        assert_eq!(describe_region(&region(0, &[], &["hello", ","]), false), "@0 +[hello,]");
        assert_eq!(describe_region(&region(3, &["d"], &[]), false), "@3 -[d]");
    }
}
