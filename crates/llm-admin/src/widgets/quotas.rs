use llm_admin_core::{Quota, QuotaTier};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Gauge},
    Frame,
};

use crate::AppState;

pub fn tier_color(tier: QuotaTier) -> Color {
    match tier {
        QuotaTier::Normal => Color::Green,
        QuotaTier::Warning => Color::Yellow,
        QuotaTier::Critical => Color::Red,
    }
}

pub struct QuotasWidget;

impl QuotasWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let constraints: Vec<Constraint> = state
            .quotas
            .iter()
            .map(|_| Constraint::Length(3))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (quota, chunk) in state.quotas.iter().zip(chunks.iter()) {
            Self::render_quota_gauge(frame, *chunk, quota);
        }
    }

    fn render_quota_gauge(frame: &mut Frame, area: Rect, quota: &Quota) {
        let usage = quota.usage();
        let title = format!("{} ({})", quota.name(), quota.scope().label());

        let (percent, label) = match usage.percentage() {
            Some(pct) => (
                // The gauge bar saturates at 100; the label keeps the
                // real overage figure.
                pct.min(100.0) as u16,
                format!("{:.1}%  {} / {} tokens", pct, usage.used(), usage.total()),
            ),
            None => (0, "no allowance configured".to_string()),
        };

        let gauge = Gauge::default()
            .block(Block::bordered().title(title))
            .gauge_style(Style::default().fg(tier_color(usage.tier())))
            .percent(percent)
            .label(label);

        frame.render_widget(gauge, area);
    }
}
