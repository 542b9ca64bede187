//! Commands that write the CSV download or the dashboard payload.

use crate::filters::{FilterArgs, SessionArgs};
use crop_data::dashboard::Dashboard;
use crop_data::export::{export_csv, EXPORT_MIME_TYPE};
use log::info;

/// Write the filtered points as CSV to `output`.
///
/// The file is only written once the whole export has serialized.
pub fn run_export(output: &str, filters: &FilterArgs) -> anyhow::Result<()> {
    let session = filters.session.session();
    let view = session.on_criteria_changed(&filters.criteria(&session));
    let bytes = view
        .export_csv()
        .map_err(|e| anyhow::anyhow!("Export failed, no file written: {}", e))?;
    std::fs::write(output, &bytes)?;
    info!(
        "Wrote {} survey points to {} ({})",
        view.records.len(),
        output,
        EXPORT_MIME_TYPE
    );
    Ok(())
}

/// Write the dashboard JSON payload to `output`, or stdout when `None`.
pub fn run_dashboard(output: Option<&str>, filters: &FilterArgs) -> anyhow::Result<()> {
    let session = filters.session.session();
    let view = session.on_criteria_changed(&filters.criteria(&session));
    let json = Dashboard::from_view(&view).to_json()?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Wrote dashboard payload to {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Write the complete, unfiltered session dataset as CSV.
pub fn run_generate(output: &str, session_args: &SessionArgs) -> anyhow::Result<()> {
    let session = session_args.session();
    let bytes = export_csv(session.records())?;
    std::fs::write(output, &bytes)?;
    info!(
        "Wrote {} simulated survey points to {}",
        session.records().len(),
        output
    );
    Ok(())
}
