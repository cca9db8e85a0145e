use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{AppState, View};

pub struct ShortcutsWidget;

impl ShortcutsWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let mut pairs: Vec<(&str, &str)> = vec![("q", "quit"), ("Tab", "next view")];

        match state.view {
            View::Dashboard => {
                pairs.push(("d", "quota detail"));
            }
            View::Simulator => {
                pairs.push(("←/→", "model"));
                pairs.push(("↑/↓ or i/o/r", "field"));
                pairs.push(("+/-", "adjust"));
                pairs.push(("m", "select"));
                pairs.push(("c", "compare"));
            }
            View::Roi => {}
            View::Quotas => {
                pairs.push(("d", "detail"));
            }
        }

        let mut spans = Vec::new();
        for (i, (key, action)) in pairs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(", ", Style::default().fg(Color::Gray)));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::Gray),
            ));
        }

        let shortcuts = Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center);

        frame.render_widget(shortcuts, area);
    }
}
