//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use cz_core::{Orbit, Session};

use crate::theme::Theme;

/// Widget for rendering the two status lines
pub struct StatusWidget<'a> {
    session: &'a Session,
    message: Option<&'a str>,
    message_is_error: bool,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(
        session: &'a Session,
        message: Option<&'a str>,
        message_is_error: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            session,
            message,
            message_is_error,
            theme,
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let s = self.session;

        // Line 1: session totals
        let longest = s.orbits().iter().map(Orbit::len).max().unwrap_or(0);
        let peak = s.orbits().iter().map(Orbit::max_value).max().unwrap_or(0);
        let line1 = format!(
            "Orbits:{} Values:{} Longest:{} Peak:{}",
            s.orbits().len(),
            s.tally().total(),
            longest,
            peak,
        );

        // Line 2: evolution state, then the last message
        let evo = s.evolution();
        let mut line2 = if evo.is_running() {
            let mut text = format!(
                "Evolving n = {}/{}",
                evo.current_n().min(evo.max_n()),
                evo.max_n()
            );
            if evo.is_paused() {
                text.push_str(" [paused]");
            }
            text
        } else {
            "Idle".to_string()
        };
        if let Some(msg) = self.message {
            line2.push_str("  |  ");
            line2.push_str(msg);
        }

        let msg_style = if self.message_is_error {
            Style::default().fg(self.theme.bad)
        } else {
            Style::default().fg(self.theme.text_dim)
        };
        buf.set_string(area.x, area.y, &line1, Style::default().fg(self.theme.text));
        if area.height > 1 {
            buf.set_string(area.x, area.y + 1, &line2, msg_style);
        }
    }
}
