use chrono::Utc;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::widgets::quotas::tier_color;
use crate::AppState;

pub struct QuotaPopupWidget;

impl QuotaPopupWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let popup_area = Self::centered_rect(65, 70, area);

        frame.render_widget(Clear, popup_area);

        let popup = Paragraph::new(Self::create_detail_text(state))
            .block(
                Block::bordered()
                    .title("Quota Detail")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(popup, popup_area);
    }

    fn create_detail_text(state: &AppState) -> Vec<Line> {
        let today = Utc::now().date_naive();
        let mut text = Vec::new();

        for quota in &state.quotas {
            let usage = quota.usage();

            text.push(Line::from(vec![Span::styled(
                format!("{} ({})", quota.name(), quota.scope().label()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]));

            match usage.percentage() {
                Some(pct) => {
                    text.push(Line::from(vec![
                        Span::styled("  Usage: ", Style::default().fg(Color::White)),
                        Span::styled(
                            format!("{:.1}% ({})", pct, usage.tier().label()),
                            Style::default()
                                .fg(tier_color(usage.tier()))
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            if usage.is_over() {
                                format!(", over by {} tokens", usage.used() - usage.total())
                            } else {
                                format!(", {} tokens remaining", usage.remaining())
                            },
                            Style::default().fg(Color::Gray),
                        ),
                    ]));
                    text.push(Line::from(vec![
                        Span::styled("  Projected month-end: ", Style::default().fg(Color::White)),
                        Span::styled(
                            format!("{:.0} tokens", usage.projected_month_end(today)),
                            Style::default().fg(Color::Cyan),
                        ),
                    ]));
                }
                None => {
                    text.push(Line::from(vec![Span::styled(
                        "  No allowance configured",
                        Style::default().fg(Color::Gray),
                    )]));
                }
            }

            text.push(Line::from(" "));
        }

        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "d",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to close", Style::default().fg(Color::Gray)),
        ]));

        text
    }

    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([
                ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
                ratatui::layout::Constraint::Percentage(percent_y),
                ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Horizontal)
            .constraints([
                ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
                ratatui::layout::Constraint::Percentage(percent_x),
                ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
