use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::AppState;

pub struct ComparePopupWidget;

impl ComparePopupWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let popup_area = Self::centered_rect(70, 70, area);

        frame.render_widget(Clear, popup_area);

        let popup = Paragraph::new(Self::create_comparison_text(state))
            .block(
                Block::bordered()
                    .title("Model Comparison")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(popup, popup_area);
    }

    fn create_comparison_text(state: &AppState) -> Vec<Line> {
        let models = state.compared_models();

        if models.is_empty() {
            return vec![
                Line::from(" "),
                Line::from(Span::styled(
                    "No models selected. Press m on a model in the simulator view.",
                    Style::default().fg(Color::Gray),
                )),
            ];
        }

        let mut text = vec![Line::from(vec![Span::styled(
            format!(
                "{:<16} {:>10} {:>10} {:>10} {:>10}",
                "Model", "In $/1M", "Out $/1M", "Context", "Tok/s"
            ),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )])];

        for model in &models {
            let pricing = model.pricing();
            text.push(Line::from(vec![Span::styled(
                format!(
                    "{:<16} {:>10.2} {:>10.2} {:>10} {:>10.0}",
                    model.name(),
                    pricing.input_cost_per_token() * 1_000_000.0,
                    pricing.output_cost_per_token() * 1_000_000.0,
                    pricing.context_window(),
                    pricing.average_speed(),
                ),
                Style::default().fg(Color::White),
            )]));
        }

        text.push(Line::from(" "));
        text.push(Line::from(vec![Span::styled(
            "Daily cost under the current workload:",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]));
        text.push(Line::from(" "));

        for model in &models {
            let line = match state.simulator.simulate(&state.query, model.pricing()) {
                Ok(result) => Line::from(vec![
                    Span::styled(
                        format!("  {:<16} ", model.name()),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("${:.2}/day  ${:.2}/month", result.daily_cost(), result.monthly_cost()),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Err(e) => Line::from(vec![
                    Span::styled(
                        format!("  {:<16} ", model.name()),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(e.to_string(), Style::default().fg(Color::Red)),
                ]),
            };
            text.push(line);
        }

        text.extend(vec![
            Line::from(" "),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "c",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to close", Style::default().fg(Color::Gray)),
            ]),
        ]);

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
