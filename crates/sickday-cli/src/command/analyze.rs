use std::path::PathBuf;

use anyhow::Context as _;
use sickday_analysis::{engine::HypothesisEngine, report::ResultReporter as _};

use super::{CenterArg, GroupArg, OutputFormat};
use crate::{
    report::{JsonReporter, TextReporter},
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    #[clap(flatten)]
    pub(super) group: GroupArg,
    /// Report format
    #[arg(long, value_enum, default_value_t)]
    pub(super) format: OutputFormat,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    pub(super) output: Option<PathBuf>,
    /// Center of Levene's test for equal variances
    #[arg(long, value_enum, default_value_t)]
    pub(super) levene_center: CenterArg,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let (records, filter, mode) = arg.group.load()?;

    let engine = HypothesisEngine::new(arg.levene_center.into());
    let report = engine
        .analyze(&records, filter, mode)
        .context("Failed to compare sick-day groups")?;

    let output = Output::from_output_path(arg.output.clone())?;
    let path = output.display_path();
    match arg.format {
        OutputFormat::Text => TextReporter::new(output).report(&report),
        OutputFormat::Json => JsonReporter::new(output).report(&report),
    }
    .with_context(|| format!("Failed to write report to {path}"))?;

    tracing::info!(test = %report.result.test_used, output = %path, "report written");
    Ok(())
}
