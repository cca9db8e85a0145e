use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph},
    Frame,
};

use crate::{AppState, SimField};

pub struct SimulatorWidget;

impl SimulatorWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        Self::render_model_list(frame, chunks[0], state);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(5)])
            .split(chunks[1]);

        Self::render_inputs(frame, right[0], state);
        Self::render_results(frame, right[1], state);
    }

    fn render_model_list(frame: &mut Frame, area: Rect, state: &AppState) {
        let mut items = Vec::new();
        let mut last_provider = "";

        for (i, model) in state.ordered_models().iter().enumerate() {
            if model.provider() != last_provider {
                items.push(ListItem::new(Line::from(Span::styled(
                    model.provider().to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))));
                last_provider = model.provider();
            }

            let marker = if state.selection.contains(model.id()) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if i == state.model_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            items.push(ListItem::new(Line::from(Span::styled(
                format!("  {} {}", marker, model.name()),
                style,
            ))));
        }

        let title = format!(
            "Models ({} selected for compare)",
            state.selection.len()
        );
        let list = List::new(items).block(Block::bordered().title(title));

        frame.render_widget(list, area);
    }

    fn render_inputs(frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = [
            (SimField::Requests, state.query.requests_per_day()),
            (SimField::InputTokens, state.query.avg_input_tokens()),
            (SimField::OutputTokens, state.query.avg_output_tokens()),
        ];

        let input_text: Vec<Line> = rows
            .iter()
            .map(|(field, value)| {
                let style = if *field == state.sim_field {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(Span::styled(
                    format!("{:<20} {:>10.0}", field.label(), value),
                    style,
                ))
            })
            .collect();

        let inputs = Paragraph::new(input_text)
            .block(Block::bordered().title("Workload"))
            .alignment(Alignment::Left);

        frame.render_widget(inputs, area);
    }

    fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(model) = state.current_model() else {
            let empty = Paragraph::new("No models in catalog")
                .block(Block::bordered().title("Estimate"))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(empty, area);
            return;
        };

        let title = format!("Estimate - {} by {}", model.name(), model.provider());

        let result_text = match state.simulation() {
            Some(Ok(result)) => vec![
                Line::from(vec![
                    Span::styled("Daily Cost: ", Style::default().fg(Color::White)),
                    Span::styled(
                        format!("${:.2}", result.daily_cost()),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Monthly Cost: ", Style::default().fg(Color::White)),
                    Span::styled(
                        format!("${:.2}", result.monthly_cost()),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Annual Cost: ", Style::default().fg(Color::White)),
                    Span::styled(
                        format!("${:.2}", result.annual_cost()),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(" "),
                Line::from(vec![
                    Span::styled("Daily Tokens: ", Style::default().fg(Color::White)),
                    Span::styled(
                        format!("{:.1}k", result.total_tokens() / 1000.0),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Processing Time: ", Style::default().fg(Color::White)),
                    Span::styled(
                        format!("~{:.1} seconds/day", result.processing_time_secs()),
                        Style::default().fg(Color::Cyan),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Cost per Request: ", Style::default().fg(Color::White)),
                    Span::styled(
                        format!("${:.4}", result.cost_per_request()),
                        Style::default().fg(Color::Cyan),
                    ),
                ]),
            ],
            Some(Err(e)) => vec![Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(Color::Red),
            ))],
            None => vec![],
        };

        let results = Paragraph::new(result_text)
            .block(Block::bordered().title(title))
            .alignment(Alignment::Left);

        frame.render_widget(results, area);
    }
}
