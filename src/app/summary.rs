mod json;
mod lines;

use crate::error::AppResult;
use crate::metrics::RunSummary;

pub(crate) use json::render_json;
pub(crate) use lines::summary_lines;

pub(crate) fn print_summary(summary: &RunSummary) {
    println!();
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}

pub(crate) fn print_json_summary(summary: &RunSummary) -> AppResult<()> {
    println!("{}", render_json(summary)?);
    Ok(())
}
