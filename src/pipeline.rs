use crate::config::DataPaths;
use crate::datasources::load_observations;
use crate::error::{Result, SoilCheckError};
use crate::export::export_csv;
use crate::logic::{average_moisture, classify, suggested_action};
use crate::models::{Condition, MoistureSummary, ObservationSet};

/// Outcome of a completed run. Export failures do not abort the run and are
/// carried here for the caller to report.
#[derive(Debug)]
pub struct RunReport {
    pub summary: MoistureSummary,
    pub export: Result<()>,
}

/// Aggregate, classify and advise on a set of observations.
///
/// An empty set has nothing to flag and is reported as `Normal` with a 0.0
/// average, even though `classify(0.0)` alone would say `Drought`.
pub fn analyze(observations: &ObservationSet) -> MoistureSummary {
    let average = average_moisture(observations);
    let condition = if observations.is_empty() {
        Condition::Normal
    } else {
        classify(average)
    };

    MoistureSummary {
        observations: observations.len(),
        average,
        condition,
        suggestion: suggested_action(condition).to_string(),
    }
}

/// Load the input file, analyze it and export the parsed data as CSV.
///
/// Returns `SoilCheckError::NoData` when nothing could be loaded; in that
/// case no CSV is written.
pub fn run(paths: &DataPaths) -> Result<RunReport> {
    let observations = load_observations(&paths.input);
    if observations.is_empty() {
        return Err(SoilCheckError::NoData(paths.input.clone()));
    }

    let summary = analyze(&observations);
    tracing::info!(
        "Analyzed {} observations: average {:.2}%, {}",
        summary.observations,
        summary.average,
        summary.condition
    );

    let export = export_csv(&observations, &paths.output);
    if let Err(ref e) = export {
        tracing::error!("{}", e);
    }

    Ok(RunReport { summary, export })
}
