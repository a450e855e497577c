use tracing::info;

use crate::application::run_load;
use crate::args::{LoadArgs, OutputFormat};
use crate::domain::RunSettings;
use crate::error::AppResult;
use crate::metrics::RunSummary;

use super::summary;

pub(crate) async fn run_local(args: &LoadArgs) -> AppResult<()> {
    let settings = RunSettings::from_args(args)?;

    let report = run_load(&settings).await?;
    let run_summary = RunSummary::from_report(&report);
    info!(
        "Completed {} requests in {:?}",
        run_summary.total_requests, run_summary.total_duration
    );

    match args.output_format {
        OutputFormat::Text => summary::print_summary(&run_summary),
        OutputFormat::Json => summary::print_json_summary(&run_summary)?,
    }
    Ok(())
}
