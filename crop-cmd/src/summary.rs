//! Text summary of a filtered view.

use crate::filters::FilterArgs;
use crop_data::view::NO_DATA_MESSAGE;
use crop_data::FilteredView;
use crop_utils::dates::format_date;
use std::fmt::Write;

/// Filter a fresh session and print its metrics and chart aggregates.
pub fn run_summary(filters: &FilterArgs) -> anyhow::Result<()> {
    let session = filters.session.session();
    let criteria = filters.criteria(&session);
    let view = session.on_criteria_changed(&criteria);
    print!("{}", render_summary(&view)?);
    Ok(())
}

/// Render the metric cards and chart aggregates as plain text.
pub fn render_summary(view: &FilteredView) -> anyhow::Result<String> {
    let agg = &view.aggregates;
    let mut out = String::new();

    writeln!(out, "{}", view.status_line())?;
    writeln!(out)?;
    writeln!(out, "Total Survey Points:  {}", agg.total_count)?;
    writeln!(out, "Unique Fields:        {}", agg.unique_field_count)?;
    writeln!(out, "Matching Crop Points: {}", agg.match_count)?;
    writeln!(out, "Average NDVI:         {:.2}", agg.mean_ndvi)?;

    if view.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", NO_DATA_MESSAGE)?;
        return Ok(out);
    }

    writeln!(out)?;
    writeln!(out, "Survey Crop Distribution")?;
    for (crop, count) in &agg.crop_distribution {
        writeln!(out, "  {:<10} {}", crop, count)?;
    }

    writeln!(out)?;
    writeln!(out, "Survey vs Classified Crop Match Count")?;
    for (label, count) in &agg.match_distribution {
        writeln!(out, "  {:<10} {}", label, count)?;
    }

    writeln!(out)?;
    writeln!(out, "NDVI Distribution per Crop")?;
    for (crop, values) in &agg.ndvi_by_crop {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        writeln!(
            out,
            "  {:<10} n={:<4} min={:.2} max={:.2}",
            crop,
            values.len(),
            min,
            max
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Survey Points Over Time")?;
    for (date, count) in agg.timeline() {
        writeln!(out, "  {} {}", format_date(&date), count)?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crop_data::Session;
    use crop_survey::generator::SimulationConfig;

    #[test]
    fn test_summary_lists_charts() {
        let session = Session::seeded(&SimulationConfig::default(), 21);
        let view = session.on_criteria_changed(&session.default_criteria());
        let text = render_summary(&view).unwrap();
        assert!(text.starts_with("✅ Showing "));
        assert!(text.contains("Survey Crop Distribution"));
        assert!(text.contains("Survey Points Over Time"));
        assert!(!text.contains(NO_DATA_MESSAGE));
    }

    #[test]
    fn test_summary_for_empty_view() {
        let session = Session::seeded(&SimulationConfig::default(), 21);
        let mut criteria = session.default_criteria();
        criteria.ndvi_min = 0.95;
        let view = session.on_criteria_changed(&criteria);
        let text = render_summary(&view).unwrap();
        assert!(text.contains("Total Survey Points:  0"));
        assert!(text.contains("Average NDVI:         0.00"));
        assert!(text.contains(NO_DATA_MESSAGE));
        assert!(!text.contains("Survey Crop Distribution"));
    }
}
