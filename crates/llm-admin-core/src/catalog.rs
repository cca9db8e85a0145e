use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Per-token billing rates and throughput figures for one model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    input_cost_per_token: f64,
    output_cost_per_token: f64,
    average_speed: f64,
    context_window: u64,
}

impl ModelPricing {
    pub fn new(
        input_cost_per_token: f64,
        output_cost_per_token: f64,
        average_speed: f64,
        context_window: u64,
    ) -> Self {
        Self {
            input_cost_per_token,
            output_cost_per_token,
            average_speed,
            context_window,
        }
    }

    pub fn input_cost_per_token(&self) -> f64 {
        self.input_cost_per_token
    }

    pub fn output_cost_per_token(&self) -> f64 {
        self.output_cost_per_token
    }

    /// Tokens per second the model sustains on average.
    pub fn average_speed(&self) -> f64 {
        self.average_speed
    }

    pub fn context_window(&self) -> u64 {
        self.context_window
    }

    /// Cost of a single exchange, rounded to micro-dollar precision.
    pub fn cost_for_tokens(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        let cost = (input_tokens as f64 * self.input_cost_per_token)
            + (output_tokens as f64 * self.output_cost_per_token);

        (cost * 1_000_000.0).round() / 1_000_000.0
    }
}

/// Catalog entry describing one model: identity, provider, and pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    id: String,
    name: String,
    provider: String,
    description: String,
    enabled: bool,
    specialties: Vec<String>,
    pricing: ModelPricing,
}

impl ModelInfo {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        provider: impl Into<String>,
        description: impl Into<String>,
        specialties: Vec<String>,
        pricing: ModelPricing,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            provider: provider.into(),
            description: description.into(),
            enabled: true,
            specialties,
            pricing,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    pub fn pricing(&self) -> &ModelPricing {
        &self.pricing
    }
}

/// Static reference data: the set of models the dashboard knows about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCatalog {
    models: Vec<ModelInfo>,
}

fn per_million(dollars: f64) -> f64 {
    dollars / 1_000_000.0
}

impl ModelCatalog {
    /// The built-in demo catalog. Output tokens bill at twice the input
    /// rate across the board.
    pub fn builtin() -> Self {
        let entry = |id: &str,
                     name: &str,
                     provider: &str,
                     description: &str,
                     specialties: &[&str],
                     input_per_million: f64,
                     speed: f64,
                     context_window: u64| {
            ModelInfo::new(
                id,
                name,
                provider,
                description,
                specialties.iter().map(|s| s.to_string()).collect(),
                ModelPricing::new(
                    per_million(input_per_million),
                    per_million(input_per_million * 2.0),
                    speed,
                    context_window,
                ),
            )
        };

        Self {
            models: vec![
                entry(
                    "alexa",
                    "Alexa",
                    "Amazon",
                    "Conversational AI with voice capabilities",
                    &["Voice integration", "Multi-modal support"],
                    12.0,
                    3000.0,
                    8_000,
                ),
                entry(
                    "bard",
                    "Bard",
                    "Google",
                    "Advanced conversational AI with broad knowledge",
                    &["Real-time information", "Code generation", "Creative writing"],
                    15.0,
                    2500.0,
                    32_000,
                ),
                entry(
                    "bert",
                    "BERT",
                    "Google",
                    "Specialized in understanding context and language",
                    &["Context understanding", "Language analysis"],
                    8.0,
                    3000.0,
                    512,
                ),
                entry(
                    "brainbox",
                    "BrainBox",
                    "Microsoft",
                    "Advanced reasoning and analysis",
                    &["Complex reasoning", "Data analysis"],
                    18.0,
                    2200.0,
                    32_000,
                ),
                entry(
                    "chatgen",
                    "ChatGen",
                    "Minghao.ai",
                    "Specialized chat model",
                    &["Chat optimization", "Fast responses"],
                    8.0,
                    3000.0,
                    8_192,
                ),
                entry(
                    "coconlr",
                    "CoconLR",
                    "Google",
                    "Efficient language representation model",
                    &["Efficient processing", "Language understanding"],
                    5.0,
                    4000.0,
                    2_048,
                ),
                entry(
                    "common-crawl",
                    "Common Crawl",
                    "Common Crawl",
                    "Web-scale language model",
                    &["Web content analysis", "Large-scale processing"],
                    5.0,
                    4000.0,
                    4_096,
                ),
                entry(
                    "deepmind-llm",
                    "DeepMind LLM",
                    "DeepMind",
                    "Advanced AI with deep learning capabilities",
                    &["Deep learning", "Complex problem solving"],
                    20.0,
                    1800.0,
                    50_000,
                ),
            ],
        }
    }

    /// Loads a catalog override from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)
            .with_context(|| format!("Failed to open catalog file: {}", path.as_ref().display()))?;
        let catalog: ModelCatalog = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid catalog JSON: {}", path.as_ref().display()))?;
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&ModelInfo> {
        self.models.iter().find(|m| m.id == id)
    }

    pub fn models(&self) -> &[ModelInfo] {
        &self.models
    }

    pub fn enabled_models(&self) -> Vec<&ModelInfo> {
        self.models.iter().filter(|m| m.enabled).collect()
    }

    /// Models grouped by provider, providers in sorted order.
    pub fn by_provider(&self) -> BTreeMap<&str, Vec<&ModelInfo>> {
        let mut grouped: BTreeMap<&str, Vec<&ModelInfo>> = BTreeMap::new();
        for model in &self.models {
            grouped.entry(model.provider.as_str()).or_default().push(model);
        }
        grouped
    }

    pub fn providers(&self) -> Vec<&str> {
        self.by_provider().into_keys().collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = ModelCatalog::builtin();
        let bard = catalog.get("bard").unwrap();

        assert_eq!(bard.name(), "Bard");
        assert_eq!(bard.provider(), "Google");
        assert_eq!(bard.pricing().input_cost_per_token(), 0.000015);
        assert_eq!(bard.pricing().output_cost_per_token(), 0.00003);
        assert_eq!(bard.pricing().average_speed(), 2500.0);
        assert_eq!(bard.pricing().context_window(), 32_000);
    }

    #[test]
    fn test_unknown_model_is_none() {
        let catalog = ModelCatalog::builtin();
        assert!(catalog.get("gpt-99").is_none());
    }

    #[test]
    fn test_by_provider_grouping() {
        let catalog = ModelCatalog::builtin();
        let grouped = catalog.by_provider();

        assert_eq!(grouped.get("Google").map(|m| m.len()), Some(3));

        let providers = catalog.providers();
        let mut sorted = providers.clone();
        sorted.sort();
        assert_eq!(providers, sorted);
    }

    #[test]
    fn test_cost_for_tokens_rounds_to_micro_dollars() {
        let pricing = ModelPricing::new(0.000015, 0.00003, 2500.0, 32_000);
        assert_eq!(pricing.cost_for_tokens(500, 1500), 0.0525);
    }

    #[test]
    fn test_load_catalog_from_json_file() {
        let catalog = ModelCatalog::builtin();
        let mut temp_file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        temp_file.write_all(json.as_bytes()).unwrap();

        let loaded = ModelCatalog::from_json_file(temp_file.path()).unwrap();
        assert_eq!(loaded.len(), catalog.len());
        assert!(loaded.get("bard").is_some());
    }

    #[test]
    fn test_load_catalog_missing_file_fails() {
        assert!(ModelCatalog::from_json_file("/nonexistent/catalog.json").is_err());
    }

    #[test]
    fn test_enabled_models_filter() {
        let mut catalog = ModelCatalog::builtin();
        let total = catalog.len();
        catalog.models[0].set_enabled(false);
        assert_eq!(catalog.enabled_models().len(), total - 1);
    }
}
