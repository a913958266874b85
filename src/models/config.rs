use crate::error::BenchError;
use crate::report::ReportFormat;
use lut3d::Layout;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file to load when `--config` is absent
pub const CONFIG_ENV: &str = "LUTBENCH_CONFIG";

/// Benchmark configuration.
///
/// Built from a preset, optionally overlaid with a YAML file, then with
/// command-line overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Grid points per axis of the benchmarked table
    pub size: usize,

    /// Number of random pixels in the batch
    pub pixels: usize,

    /// RNG seed for the pixel batch (random if unset)
    pub seed: Option<u64>,

    /// Split each batch across the rayon thread pool
    pub parallel: bool,

    /// Output format of the report
    pub format: ReportFormat,

    /// Flattened layouts to compare against the dense table
    pub layouts: Vec<Layout>,
}

/// On-disk form of [`BenchConfig`]; absent fields keep the underlying value
#[derive(Debug, Deserialize)]
struct ConfigFile {
    size: Option<usize>,
    pixels: Option<usize>,
    seed: Option<u64>,
    parallel: Option<bool>,
    format: Option<ReportFormat>,
    #[serde(default, deserialize_with = "deserialize_layouts")]
    layouts: Option<Vec<Layout>>,
}

fn default_size() -> usize {
    33
}

fn default_pixels() -> usize {
    100_000
}

fn default_layouts() -> Vec<Layout> {
    Layout::ALL.to_vec()
}

fn deserialize_layouts<'de, D>(deserializer: D) -> Result<Option<Vec<Layout>>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;
    names
        .iter()
        .map(|name| name.parse::<Layout>().map_err(serde::de::Error::custom))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Command-line values that take precedence over the loaded config
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub size: Option<usize>,
    pub pixels: Option<usize>,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub format: Option<ReportFormat>,
}

impl BenchConfig {
    /// Dense vs. level-ordered ("spatially local") table at 65³
    pub fn level_ordered() -> Self {
        Self {
            size: 65,
            layouts: vec![Layout::LevelOrdered],
            ..Self::default()
        }
    }

    /// Dense vs. row-major table at 33³
    pub fn row_major() -> Self {
        Self {
            size: 33,
            layouts: vec![Layout::RowMajor],
            ..Self::default()
        }
    }

    /// Load configuration from a YAML file.
    ///
    /// Missing fields fall back to the defaults of [`BenchConfig::default`].
    pub fn load(path: &Path) -> Result<Self, BenchError> {
        Self::default().overlay_file(path)
    }

    /// Overlay the fields present in a YAML file onto this config.
    pub fn overlay_file(mut self, path: &Path) -> Result<Self, BenchError> {
        let content = std::fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile =
            serde_yaml::from_str(&content).map_err(|source| BenchError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(size) = file.size {
            self.size = size;
        }
        if let Some(pixels) = file.pixels {
            self.pixels = pixels;
        }
        if file.seed.is_some() {
            self.seed = file.seed;
        }
        if let Some(parallel) = file.parallel {
            self.parallel = parallel;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(layouts) = file.layouts {
            self.layouts = layouts;
        }

        tracing::info!(
            path = %path.display(),
            size = self.size,
            pixels = self.pixels,
            layouts = self.layouts.len(),
            "Loaded configuration"
        );
        Ok(self)
    }

    /// Resolve the effective config of a benchmark command.
    ///
    /// `self` is the command's preset. The config file is `config_path`, or
    /// `$LUTBENCH_CONFIG` when that is `None`; its fields replace the preset's.
    /// With `pin_layouts` the preset's layouts survive the file. Overrides are
    /// applied last.
    pub fn resolve(
        self,
        config_path: Option<PathBuf>,
        overrides: &Overrides,
        pin_layouts: bool,
    ) -> Result<Self, BenchError> {
        let config = match config_path.or_else(Self::path_from_env) {
            Some(path) => {
                let layouts = self.layouts.clone();
                let mut loaded = self.overlay_file(&path)?;
                if pin_layouts {
                    loaded.layouts = layouts;
                }
                loaded
            }
            None => self,
        };
        Ok(config.with_overrides(overrides))
    }

    /// Config file path from the `LUTBENCH_CONFIG` environment variable
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(size) = overrides.size {
            self.size = size;
        }
        if let Some(pixels) = overrides.pixels {
            self.pixels = pixels;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.parallel {
            self.parallel = true;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            pixels: default_pixels(),
            seed: None,
            parallel: false,
            format: ReportFormat::default(),
            layouts: default_layouts(),
        }
    }
}
