// Chart configuration loading
use crate::domain::color::FlairPalette;
use crate::domain::record::Metric;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub data: DataConfig,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub palette: Vec<FlairColorConfig>,
    pub default_color: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub csv_path: String,
    pub metric: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FlairColorConfig {
    pub flair: String,
    pub color: String,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            margin: Margin::default(),
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 50.0,
            left: 50.0,
        }
    }
}

impl Dimensions {
    /// Plot area width: full width minus the horizontal margins.
    pub fn bounded_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn bounded_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

impl ChartConfig {
    /// The configured palette: built-in table overlaid with config entries.
    pub fn palette(&self) -> FlairPalette {
        FlairPalette::builtin().with_overrides(
            self.palette
                .iter()
                .map(|c| (c.flair.clone(), c.color.clone())),
            self.default_color.clone(),
        )
    }

    /// The y metric to start with. Unknown names fall back to sentiment.
    pub fn metric(&self) -> Metric {
        match self.data.metric.as_deref() {
            None => Metric::CalculatedSentiment,
            Some(name) => Metric::from_name(name).unwrap_or_else(|| {
                tracing::warn!("unknown metric '{}' in config, using sentiment", name);
                Metric::CalculatedSentiment
            }),
        }
    }
}

pub fn load_chart_config() -> anyhow::Result<ChartConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/chart"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
