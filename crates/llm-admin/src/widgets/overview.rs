use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
    Frame,
};

use crate::widgets::quotas::tier_color;
use crate::AppState;

pub struct OverviewWidget;

impl OverviewWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        Self::render_overall_gauge(frame, chunks[0], state);
        Self::render_stats(frame, chunks[1], state);
    }

    fn render_overall_gauge(frame: &mut Frame, area: Rect, state: &AppState) {
        let overall = state.overall_quota();
        let percentage = overall.percentage().unwrap_or(0.0);

        let gauge = Gauge::default()
            .block(Block::bordered().title("Fleet Token Usage"))
            .gauge_style(Style::default().fg(tier_color(overall.tier())))
            .percent(percentage.min(100.0) as u16)
            .label(format!("{:.1}%", percentage));

        frame.render_widget(gauge, area);
    }

    fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
        let overall = state.overall_quota();

        let mut stats_text = vec![
            Line::from(vec![
                Span::styled("Models: ", Style::default().fg(Color::White)),
                Span::styled(
                    format!(
                        "{} across {} providers",
                        state.catalog.len(),
                        state.catalog.providers().len()
                    ),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Quotas: ", Style::default().fg(Color::White)),
                Span::styled(
                    format!("{} tracked", state.quotas.len()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        ", {} / {} tokens consumed",
                        overall.used(),
                        overall.total()
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ];

        match state.roi_summary() {
            Ok(summary) => {
                stats_text.push(Line::from(vec![
                    Span::styled("Monthly savings: ", Style::default().fg(Color::White)),
                    Span::styled(
                        format!("${:.2} net", summary.total_net_savings()),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" across {} users", summary.user_count()),
                        Style::default().fg(Color::Gray),
                    ),
                ]));
                stats_text.push(Line::from(vec![
                    Span::styled("Average ROI: ", Style::default().fg(Color::White)),
                    Span::styled(
                        match summary.average_roi() {
                            Some(roi) => format!("{:.1}x", roi),
                            None => "N/A".to_string(),
                        },
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            Err(e) => {
                stats_text.push(Line::from(vec![
                    Span::styled("ROI: ", Style::default().fg(Color::Red)),
                    Span::styled(e.to_string(), Style::default().fg(Color::Red)),
                ]));
            }
        }

        stats_text.push(Line::from(vec![
            Span::styled("Last Update: ", Style::default().fg(Color::White)),
            Span::styled(
                state.last_update.format("%H:%M:%S UTC").to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]));

        let stats = Paragraph::new(stats_text)
            .block(Block::bordered().title("Overview"))
            .alignment(Alignment::Left);

        frame.render_widget(stats, area);
    }
}
