use crate::pipeline::stage3_report::FinalSummary;

pub fn render_report(summary: &FinalSummary) -> String {
    let mut out = String::new();
    out.push_str("Interpolation Plot Report\n");
    out.push_str("=========================\n\n");

    out.push_str("Input:\n");
    out.push_str(&format!("- Query x: {}\n", summary.input.query));
    out.push_str(&format!(
        "- Actual data: {} points ({})\n\n",
        summary.input.actual_points, summary.input.actual_file
    ));

    out.push_str("Plots:\n");
    for plot in &summary.plots {
        out.push_str(&format!("- {} ({} points)\n", plot.title, plot.n_points));
        match &plot.x_range {
            Some(r) => out.push_str(&format!("  x range: [{:.4}, {:.4}]\n", r.min, r.max)),
            None => out.push_str("  x range: empty\n"),
        }
        match &plot.marker {
            Some(m) => out.push_str(&format!(
                "  interpolated value: {:.6} (interval {})\n",
                m.y, m.interval
            )),
            None => out.push_str("  interpolated value: query outside range, no marker\n"),
        }
        out.push_str(&format!("  image: {}\n", plot.output.to_string_lossy()));
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
