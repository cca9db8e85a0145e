use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Row, Table},
    Frame,
};

use crate::AppState;

pub struct RoiWidget;

impl RoiWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(5)])
            .split(area);

        Self::render_summary_cards(frame, chunks[0], state);
        Self::render_user_table(frame, chunks[1], state);
    }

    fn render_summary_cards(frame: &mut Frame, area: Rect, state: &AppState) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(area);

        let summary = match state.roi_summary() {
            Ok(summary) => summary,
            Err(e) => {
                let error = Paragraph::new(e.to_string())
                    .block(Block::bordered().title("ROI"))
                    .style(Style::default().fg(Color::Red));
                frame.render_widget(error, area);
                return;
            }
        };

        let card = |title: &'static str, value: String, detail: String, color: Color| {
            Paragraph::new(vec![
                Line::from(Span::styled(
                    value,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(detail, Style::default().fg(Color::Gray))),
            ])
            .block(Block::bordered().title(title))
            .alignment(Alignment::Center)
        };

        frame.render_widget(
            card(
                "Time Saved (monthly)",
                format!("{:.1} hours", summary.total_hours()),
                format!("across {} users", summary.user_count()),
                Color::Cyan,
            ),
            cards[0],
        );

        frame.render_widget(
            card(
                "Net Savings (monthly)",
                format!("${:.2}", summary.total_net_savings()),
                format!("after ${:.2} LLM costs", summary.total_cost()),
                Color::Green,
            ),
            cards[1],
        );

        frame.render_widget(
            card(
                "Average ROI",
                match summary.average_roi() {
                    Some(roi) => format!("{:.1}x", roi),
                    None => "N/A".to_string(),
                },
                "based on time value saved".to_string(),
                Color::Magenta,
            ),
            cards[2],
        );
    }

    fn render_user_table(frame: &mut Frame, area: Rect, state: &AppState) {
        let header = Row::new(["User", "Department", "Hours/mo", "Savings", "Net", "ROI"])
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        let rows: Vec<Row> = state
            .roi_records
            .iter()
            .map(|record| match record.outcome() {
                Ok(outcome) => Row::new(vec![
                    record.name().to_string(),
                    record.department().to_string(),
                    format!("{:.1}", outcome.monthly_hours()),
                    format!("${:.2}", outcome.monthly_savings()),
                    format!("${:.2}", outcome.net_savings()),
                    format!("{:.1}x", outcome.roi()),
                ]),
                Err(e) => Row::new(vec![
                    record.name().to_string(),
                    record.department().to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    e.to_string(),
                ])
                .style(Style::default().fg(Color::Red)),
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Length(14),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Min(8),
            ],
        )
        .header(header)
        .block(Block::bordered().title("Per-User ROI"));

        frame.render_widget(table, area);
    }
}
