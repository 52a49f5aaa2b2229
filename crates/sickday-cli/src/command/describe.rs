use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use serde::Serialize;
use sickday_analysis::{
    grouping::{self, FilterCriterion, GroupingMode},
    result::GroupSummary,
};

use super::{GroupArg, OutputFormat};
use crate::{report, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    #[clap(flatten)]
    group: GroupArg,
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Description {
    grouping: GroupingMode,
    filter: FilterCriterion,
    group_a: GroupSummary,
    group_b: GroupSummary,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let (records, filter, mode) = arg.group.load()?;
    let (a, b) = grouping::group(&records, filter, mode);
    let description = Description {
        grouping: mode,
        filter,
        group_a: GroupSummary::from_sample(&a),
        group_b: GroupSummary::from_sample(&b),
    };

    let mut output = Output::from_output_path(arg.output.clone())?;
    match arg.format {
        OutputFormat::Text => {
            report::write_group_summaries(
                &mut output,
                &[&description.group_a, &description.group_b],
            )
            .and_then(|()| output.flush())
            .with_context(|| format!("Failed to write summary to {}", output.display_path()))?;
        }
        OutputFormat::Json => output.write_json(&description)?,
    }
    Ok(())
}
