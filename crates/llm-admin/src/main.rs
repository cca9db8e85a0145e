use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use llm_admin_core::prelude::*;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::interval;

mod data;
mod widgets;

use data::DemoData;
use widgets::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Simulator,
    Roi,
    Quotas,
}

impl View {
    pub const ALL: [View; 4] = [View::Dashboard, View::Simulator, View::Roi, View::Quotas];

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Simulator => "Simulator",
            View::Roi => "ROI",
            View::Quotas => "Quotas",
        }
    }

    pub fn config_name(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Simulator => "simulator",
            View::Roi => "roi",
            View::Quotas => "quotas",
        }
    }

    pub fn parse(name: &str) -> View {
        match name {
            "simulator" => View::Simulator,
            "roi" => View::Roi,
            "quotas" => View::Quotas,
            _ => View::Dashboard,
        }
    }

    pub fn next(&self) -> View {
        match self {
            View::Dashboard => View::Simulator,
            View::Simulator => View::Roi,
            View::Roi => View::Quotas,
            View::Quotas => View::Dashboard,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupType {
    ModelCompare,
    QuotaDetail,
}

/// Which simulator input the arrow keys currently adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimField {
    Requests,
    InputTokens,
    OutputTokens,
}

impl SimField {
    pub fn next(&self) -> SimField {
        match self {
            SimField::Requests => SimField::InputTokens,
            SimField::InputTokens => SimField::OutputTokens,
            SimField::OutputTokens => SimField::Requests,
        }
    }

    pub fn prev(&self) -> SimField {
        self.next().next()
    }

    pub fn label(&self) -> &'static str {
        match self {
            SimField::Requests => "Requests per day",
            SimField::InputTokens => "Avg. input tokens",
            SimField::OutputTokens => "Avg. output tokens",
        }
    }

    /// Step size used by +/- and the arrow keys.
    pub fn step(&self) -> f64 {
        match self {
            SimField::Requests => 10.0,
            SimField::InputTokens => 50.0,
            SimField::OutputTokens => 50.0,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, about = "Terminal dashboard for LLM usage, cost and ROI administration")]
struct Args {
    #[arg(short = 'v')]
    verbose: bool,

    /// View to open: dashboard, simulator, roi or quotas
    #[arg(long = "view")]
    view: Option<String>,

    /// JSON file overriding the built-in model catalog
    #[arg(long = "catalog")]
    catalog: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct AdminConfig {
    view: String,
}

fn get_config_path() -> Result<PathBuf> {
    let current_dir = std::env::current_dir()?;
    Ok(current_dir.join(".llm-admin.json"))
}

fn load_config(config_path: &Path) -> Result<AdminConfig> {
    if config_path.exists() {
        let content = fs::read_to_string(config_path)?;
        let config: AdminConfig = serde_json::from_str(&content)?;
        Ok(config)
    } else {
        Ok(AdminConfig {
            view: "dashboard".to_string(),
        })
    }
}

fn save_config(config: &AdminConfig, config_path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path, content)?;
    Ok(())
}

pub struct AppState {
    pub catalog: ModelCatalog,
    pub selection: ModelSelection,
    pub simulator: UsageSimulator,
    pub query: UsageQuery,
    pub model_index: usize,
    pub sim_field: SimField,
    pub quotas: Vec<Quota>,
    pub roi_records: Vec<RoiRecord>,
    pub view: View,
    pub active_popup: Option<PopupType>,
    pub last_update: DateTime<Utc>,
    pub error_message: Option<String>,
}

impl AppState {
    fn new(view: View, catalog: ModelCatalog) -> Self {
        let demo = DemoData::seed();

        Self {
            catalog,
            selection: ModelSelection::new(),
            simulator: UsageSimulator::new(),
            query: UsageQuery::default(),
            model_index: 0,
            sim_field: SimField::Requests,
            quotas: demo.quotas,
            roi_records: demo.roi_records,
            view,
            active_popup: None,
            last_update: Utc::now(),
            error_message: None,
        }
    }

    /// Catalog models in display order: grouped by provider, providers
    /// sorted.
    pub fn ordered_models(&self) -> Vec<&ModelInfo> {
        self.catalog
            .by_provider()
            .into_values()
            .flatten()
            .collect()
    }

    pub fn current_model(&self) -> Option<&ModelInfo> {
        self.ordered_models().get(self.model_index).copied()
    }

    pub fn simulation(&self) -> Option<Result<SimulationResult, CalcError>> {
        self.current_model()
            .map(|model| self.simulator.simulate(&self.query, model.pricing()))
    }

    pub fn roi_summary(&self) -> Result<RoiSummary, CalcError> {
        RoiSummary::from_records(&self.roi_records)
    }

    /// All quotas rolled into one gauge for the overview.
    pub fn overall_quota(&self) -> QuotaUsage {
        let used = self.quotas.iter().map(|q| q.usage().used()).sum();
        let total = self.quotas.iter().map(|q| q.usage().total()).sum();
        QuotaUsage::new(used, total)
    }

    pub fn compared_models(&self) -> Vec<&ModelInfo> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    fn next_model(&mut self) {
        let count = self.catalog.len();
        if count > 0 {
            self.model_index = (self.model_index + 1) % count;
        }
    }

    fn prev_model(&mut self) {
        let count = self.catalog.len();
        if count > 0 {
            self.model_index = (self.model_index + count - 1) % count;
        }
    }

    fn adjust_current_field(&mut self, direction: f64) {
        let delta = direction * self.sim_field.step();
        match self.sim_field {
            SimField::Requests => self.query.adjust_requests_per_day(delta),
            SimField::InputTokens => self.query.adjust_avg_input_tokens(delta),
            SimField::OutputTokens => self.query.adjust_avg_output_tokens(delta),
        }
        self.last_update = Utc::now();
    }

    fn toggle_current_model(&mut self) {
        if let Some(id) = self.current_model().map(|m| m.id().to_string()) {
            self.selection.toggle(&id);
        }
    }

    fn toggle_popup(&mut self, popup: PopupType) {
        self.active_popup = if self.active_popup == Some(popup.clone()) {
            None
        } else {
            Some(popup)
        };
    }
}

pub struct App {
    state: Arc<Mutex<AppState>>,
    exit: bool,
}

impl App {
    pub fn new(view: View, catalog: ModelCatalog) -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::new(view, catalog))),
            exit: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut tick_interval = interval(Duration::from_millis(100));

        loop {
            tokio::select! {
                _ = tick_interval.tick() => {
                    terminal.draw(|frame| self.draw(frame))?;
                }

                _ = async {
                    if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                        if let Ok(event) = event::read() {
                            self.handle_event(event);
                        }
                    }
                } => {}
            }

            if self.exit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(area);

        if let Ok(state) = self.state.lock() {
            HeaderWidget::render(frame, chunks[0], &state);

            match state.view {
                View::Dashboard => OverviewWidget::render(frame, chunks[1], &state),
                View::Simulator => SimulatorWidget::render(frame, chunks[1], &state),
                View::Roi => RoiWidget::render(frame, chunks[1], &state),
                View::Quotas => QuotasWidget::render(frame, chunks[1], &state),
            }

            ShortcutsWidget::render(frame, chunks[2], &state);

            match &state.active_popup {
                Some(PopupType::ModelCompare) => {
                    ComparePopupWidget::render(frame, area, &state);
                }
                Some(PopupType::QuotaDetail) => {
                    QuotaPopupWidget::render(frame, area, &state);
                }
                None => {}
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key_event) = event {
            if key_event.kind == KeyEventKind::Press {
                let Ok(mut state) = self.state.lock() else {
                    return;
                };

                match key_event.code {
                    KeyCode::Char('q') => self.exit = true,
                    KeyCode::Tab => state.view = state.view.next(),
                    KeyCode::Char('1') => state.view = View::Dashboard,
                    KeyCode::Char('2') => state.view = View::Simulator,
                    KeyCode::Char('3') => state.view = View::Roi,
                    KeyCode::Char('4') => state.view = View::Quotas,
                    KeyCode::Left => state.prev_model(),
                    KeyCode::Right => state.next_model(),
                    KeyCode::Up => state.sim_field = state.sim_field.prev(),
                    KeyCode::Down => state.sim_field = state.sim_field.next(),
                    KeyCode::Char('r') => state.sim_field = SimField::Requests,
                    KeyCode::Char('i') => state.sim_field = SimField::InputTokens,
                    KeyCode::Char('o') => state.sim_field = SimField::OutputTokens,
                    KeyCode::Char('+') | KeyCode::Char('=') => state.adjust_current_field(1.0),
                    KeyCode::Char('-') => state.adjust_current_field(-1.0),
                    KeyCode::Char('m') | KeyCode::Char(' ') => state.toggle_current_model(),
                    KeyCode::Char('c') => state.toggle_popup(PopupType::ModelCompare),
                    KeyCode::Char('d') => state.toggle_popup(PopupType::QuotaDetail),
                    KeyCode::Esc => state.active_popup = None,
                    _ => {}
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = get_config_path()?;
    let mut config = load_config(&config_path).unwrap_or_else(|_| AdminConfig {
        view: "dashboard".to_string(),
    });

    // A view given on the command line wins and is remembered.
    let view = if let Some(view_str) = &args.view {
        let view = View::parse(view_str);
        config.view = view.config_name().to_string();
        if let Err(e) = save_config(&config, &config_path) {
            eprintln!("Warning: Could not save config: {}", e);
        }
        view
    } else {
        View::parse(&config.view)
    };

    let catalog = match &args.catalog {
        Some(path) => ModelCatalog::from_json_file(path)?,
        None => ModelCatalog::builtin(),
    };

    if args.verbose {
        eprintln!(
            "Loaded {} models from {} providers",
            catalog.len(),
            catalog.providers().len()
        );
    }

    let mut terminal = ratatui::init();
    let mut app = App::new(view, catalog);

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn current_sim_field(app: &App) -> SimField {
        app.state.lock().unwrap().sim_field
    }

    #[test]
    fn test_field_keys_pick_simulator_field() {
        let mut app = App::new(View::Simulator, ModelCatalog::builtin());
        assert_eq!(current_sim_field(&app), SimField::Requests);

        app.handle_event(key(KeyCode::Char('i')));
        assert_eq!(current_sim_field(&app), SimField::InputTokens);

        app.handle_event(key(KeyCode::Char('o')));
        assert_eq!(current_sim_field(&app), SimField::OutputTokens);

        app.handle_event(key(KeyCode::Char('r')));
        assert_eq!(current_sim_field(&app), SimField::Requests);
    }

    #[test]
    fn test_arrow_keys_cycle_simulator_field() {
        let mut app = App::new(View::Simulator, ModelCatalog::builtin());

        app.handle_event(key(KeyCode::Down));
        assert_eq!(current_sim_field(&app), SimField::InputTokens);

        app.handle_event(key(KeyCode::Up));
        assert_eq!(current_sim_field(&app), SimField::Requests);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".llm-admin.json");

        let config = AdminConfig {
            view: "quotas".to_string(),
        };
        save_config(&config, &config_path).unwrap();

        let loaded = load_config(&config_path).unwrap();
        assert_eq!(loaded.view, "quotas");
        assert_eq!(View::parse(&loaded.view), View::Quotas);
    }

    #[test]
    fn test_missing_config_falls_back_to_dashboard() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".llm-admin.json");

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.view, "dashboard");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{ not json").unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }
}
