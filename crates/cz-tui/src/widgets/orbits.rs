//! Orbit line chart widget
//!
//! Plots every orbit in the session as a line of log10(value) against
//! step index, one cycled color per orbit, with a legend entry per
//! starting value. Log scale because orbit peaks dwarf their tails.

use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget};

use cz_core::Orbit;

use crate::theme::Theme;

/// Value readout is only legible for a couple of short orbits;
/// same rule the original applied to its point labels.
const READOUT_MAX_ORBITS: usize = 2;
const READOUT_MAX_LEN: usize = 20;

/// Widget for rendering the orbit chart
pub struct OrbitChartWidget<'a> {
    orbits: &'a [Orbit],
    theme: &'a Theme,
    show_values: bool,
}

impl<'a> OrbitChartWidget<'a> {
    pub fn new(orbits: &'a [Orbit], theme: &'a Theme, show_values: bool) -> Self {
        Self {
            orbits,
            theme,
            show_values,
        }
    }

    fn readout_lines(&self) -> Vec<Line<'static>> {
        if !self.show_values
            || self.orbits.is_empty()
            || self.orbits.len() > READOUT_MAX_ORBITS
            || self.orbits.iter().any(|o| o.len() > READOUT_MAX_LEN)
        {
            return Vec::new();
        }
        self.orbits
            .iter()
            .enumerate()
            .map(|(i, orbit)| {
                let values = orbit
                    .values()
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                Line::from(format!(" {}: {} ", orbit.start(), values))
                    .style(Style::default().fg(self.theme.orbit_color(i)))
            })
            .collect()
    }
}

impl Widget for OrbitChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(" Collatz orbits (log10 scale) ");
        for line in self.readout_lines() {
            block = block.title_bottom(line);
        }

        if self.orbits.is_empty() {
            let empty = Paragraph::new("No orbits yet. Press 'a' to add one, 'e' to evolve.")
                .style(Style::default().fg(self.theme.text_dim))
                .block(block);
            empty.render(area, buf);
            return;
        }

        // Datasets borrow their point slices, so materialize all of them
        // first.
        let series: Vec<Vec<(f64, f64)>> = self.orbits.iter().map(|o| o.points_log10()).collect();
        let names: Vec<String> = self.orbits.iter().map(|o| format!("n = {}", o.start())).collect();

        let datasets: Vec<Dataset> = series
            .iter()
            .zip(&names)
            .enumerate()
            .map(|(i, (points, name))| {
                Dataset::default()
                    .name(name.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(self.theme.orbit_color(i)))
                    .data(points)
            })
            .collect();

        let max_len = self.orbits.iter().map(Orbit::len).max().unwrap_or(1);
        let x_max = (max_len.saturating_sub(1)).max(1) as f64;
        let peak = self.orbits.iter().map(Orbit::max_value).max().unwrap_or(1);
        let y_max = (peak as f64).log10().ceil().max(1.0);

        let axis_style = Style::default().fg(self.theme.axis);
        let x_labels = vec![
            "0".to_string(),
            format!("{}", (x_max / 2.0).round() as u64),
            format!("{}", x_max as u64),
        ];
        let y_labels = vec![
            "1".to_string(),
            format!("1e{}", (y_max / 2.0).round() as u64),
            format!("1e{}", y_max as u64),
        ];

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title("step")
                    .style(axis_style)
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("value")
                    .style(axis_style)
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            );
        chart.render(area, buf);
    }
}
