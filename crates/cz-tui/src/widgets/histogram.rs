//! Leading-digit histogram widget
//!
//! Observed relative frequencies as bars with the Benford reference
//! overlaid as a line, digits 1..9 on the x axis.

use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget};

use cz_core::{DigitTally, benford};

use crate::theme::Theme;

/// Widget for rendering the observed-vs-Benford distribution
pub struct HistogramWidget<'a> {
    tally: &'a DigitTally,
    theme: &'a Theme,
}

impl<'a> HistogramWidget<'a> {
    pub fn new(tally: &'a DigitTally, theme: &'a Theme) -> Self {
        Self { tally, theme }
    }
}

impl Widget for HistogramWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let observed: Vec<(f64, f64)> = self
            .tally
            .frequencies()
            .iter()
            .enumerate()
            .map(|(i, &freq)| ((i + 1) as f64, freq))
            .collect();
        let reference: Vec<(f64, f64)> = benford()
            .iter()
            .enumerate()
            .map(|(i, &p)| ((i + 1) as f64, p))
            .collect();

        let datasets = vec![
            Dataset::default()
                .name("observed")
                .marker(symbols::Marker::HalfBlock)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(self.theme.hist_bar))
                .data(&observed),
            Dataset::default()
                .name("Benford")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.hist_benford))
                .data(&reference),
        ];

        // Benford's P(1) is the tallest reference bar; leave headroom
        // above whichever distribution currently peaks.
        let observed_peak = observed.iter().map(|&(_, y)| y).fold(0.0, f64::max);
        let y_max = (observed_peak.max(0.302) * 1.15).min(1.0);

        let axis_style = Style::default().fg(self.theme.axis);
        // Eleven evenly spaced labels over [0, 10] put each digit under
        // its own bar.
        let mut x_labels = vec![String::new()];
        x_labels.extend((1..=9).map(|d| d.to_string()));
        x_labels.push(String::new());

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border))
                    .title(" Leading digit distribution (observed vs Benford) "),
            )
            .x_axis(
                Axis::default()
                    .title("digit")
                    .style(axis_style)
                    .bounds([0.0, 10.0])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("freq")
                    .style(axis_style)
                    .bounds([0.0, y_max])
                    .labels(vec![
                        "0.00".to_string(),
                        format!("{:.2}", y_max / 2.0),
                        format!("{:.2}", y_max),
                    ]),
            );
        chart.render(area, buf);
    }
}
