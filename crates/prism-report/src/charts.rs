//! Chart builders. Each returns an inline HTML div; the page scaffold loads
//! the plotly.js runtime once from the CDN.

use plotly::common::{ColorScale, ColorScalePalette, Orientation, Title};
use plotly::{Bar, Histogram, HeatMap, Layout, Pie, Plot};

use prism_analysis::patterns::CooccurrenceMatrix;

/// Horizontal bar chart, largest value at the top.
pub fn h_bar(div_id: &str, title: &str, labels: &[String], counts: &[u64]) -> String {
    // Plotly renders the first category at the bottom; feed in ascending
    // order so the largest ends up on top.
    let mut pairs: Vec<(&String, u64)> = labels.iter().zip(counts.iter().copied()).collect();
    pairs.reverse();

    let y: Vec<String> = pairs.iter().map(|(l, _)| (*l).clone()).collect();
    let x: Vec<u64> = pairs.iter().map(|(_, c)| *c).collect();

    let trace = Bar::new(x, y).orientation(Orientation::Horizontal);
    let layout = Layout::new()
        .title(Title::from(title))
        .height(chart_height(labels.len()));

    render(div_id, trace, layout)
}

/// Vertical bar chart in the given label order.
pub fn v_bar(div_id: &str, title: &str, labels: &[String], counts: &[u64]) -> String {
    let trace = Bar::new(labels.to_vec(), counts.to_vec());
    let layout = Layout::new().title(Title::from(title)).height(420);
    render(div_id, trace, layout)
}

/// Donut chart of a small categorical distribution.
pub fn donut(div_id: &str, title: &str, labels: &[String], values: &[u64]) -> String {
    let trace = Pie::new(values.to_vec()).labels(labels.to_vec()).hole(0.3);
    let layout = Layout::new().title(Title::from(title)).height(420);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot.to_inline_html(Some(div_id))
}

/// Histogram of a numeric column.
pub fn histogram(div_id: &str, title: &str, values: &[f64]) -> String {
    let trace = Histogram::new(values.to_vec()).n_bins_x(20);
    let layout = Layout::new().title(Title::from(title)).height(420);
    render(div_id, trace, layout)
}

/// Heatmap of a co-occurrence matrix.
pub fn heatmap(div_id: &str, title: &str, matrix: &CooccurrenceMatrix) -> String {
    let z: Vec<Vec<f64>> = matrix
        .cells
        .iter()
        .map(|row| row.iter().map(|&c| c as f64).collect())
        .collect();

    let trace = HeatMap::new(matrix.cols.clone(), matrix.rows.clone(), z)
        .color_scale(ColorScale::Palette(ColorScalePalette::Blues));
    let layout = Layout::new().title(Title::from(title)).height(480);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot.to_inline_html(Some(div_id))
}

fn render<T: plotly::Trace + 'static>(div_id: &str, trace: Box<T>, layout: Layout) -> String {
    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot.to_inline_html(Some(div_id))
}

/// Taller charts for longer category lists, within sane bounds.
fn chart_height(categories: usize) -> usize {
    (categories * 24 + 160).clamp(320, 900)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_chart_embeds_div_id_and_labels() {
        let html = h_bar(
            "chart-types",
            "Shoot Types",
            &["photo".to_string(), "video".to_string()],
            &[10, 3],
        );
        assert!(html.contains("chart-types"));
        assert!(html.contains("photo"));
        assert!(html.contains("Shoot Types"));
    }

    #[test]
    fn heatmap_handles_empty_matrix() {
        let html = heatmap("hm", "Empty", &CooccurrenceMatrix::default());
        assert!(html.contains("hm"));
    }

    #[test]
    fn chart_height_clamps() {
        assert_eq!(chart_height(0), 320);
        assert_eq!(chart_height(100), 900);
    }
}
