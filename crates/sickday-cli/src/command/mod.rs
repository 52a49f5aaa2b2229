use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sickday_analysis::{
    grouping::{FilterCriterion, GroupingMode},
    record::Record,
};
use sickday_stats::variance::LeveneCenter;
use tracing_subscriber::EnvFilter;

use self::{analyze::AnalyzeArg, describe::DescribeArg};
use crate::util;

mod analyze;
mod describe;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log filter used when `RUST_LOG` is not set (e.g. `info`, `sickday_analysis=debug`)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Test whether group A takes more sick days than group B
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Print descriptive statistics of both groups without testing
    Describe(#[clap(flatten)] DescribeArg),
}

/// Record source, filter and grouping shared by every mode.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GroupArg {
    /// CSV file with `sick_days`, `sex` and `age` columns
    records: PathBuf,
    /// Keep only records with strictly more sick days than this
    #[arg(long, allow_negative_numbers = true)]
    work_days: i64,
    /// How to split records: `sex` (men vs women) or `age` (adults vs young)
    #[arg(long)]
    group_by: String,
    /// Age threshold; adults are strictly older. Required with `--group-by age`
    #[arg(long)]
    age: Option<i64>,
}

impl GroupArg {
    fn load(&self) -> anyhow::Result<(Vec<Record>, FilterCriterion, GroupingMode)> {
        let mode = GroupingMode::from_token(&self.group_by, self.age)
            .context("Invalid grouping arguments")?;
        let records = util::read_records_csv(&self.records)?;
        tracing::info!(
            path = %self.records.display(),
            len = records.len(),
            "records loaded"
        );
        Ok((records, FilterCriterion::new(self.work_days), mode))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum CenterArg {
    #[default]
    Median,
    Mean,
}

impl From<CenterArg> for LeveneCenter {
    fn from(arg: CenterArg) -> Self {
        match arg {
            CenterArg::Median => LeveneCenter::Median,
            CenterArg::Mean => LeveneCenter::Mean,
        }
    }
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .with_context(|| format!("Invalid log level: {log_level}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(&args.log_level)?;
    match args.mode {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::Describe(arg) => describe::run(&arg)?,
    }
    Ok(())
}
