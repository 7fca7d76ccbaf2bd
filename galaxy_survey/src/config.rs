// Survey configuration.
//
// `SurveyConfig` holds the CLI's defaults: the scan window used when the
// `scan` command is given no explicit bounds, the largest window a scan may
// cover, and the output format. It is loaded from JSON (`from_json` for a
// string, `load` for a file); every field has a default, so an empty object
// `{}` is a valid config.
//
// Nothing here feeds into generation. Systems depend only on coordinates.

use crate::error::{SurveyError, SurveyResult};
use galaxy_gen::{Coordinate, Region};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable report.
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Top-left sector of the default scan window.
    pub scan_origin: Coordinate,
    /// Default scan window width in sectors.
    pub scan_width: u32,
    /// Default scan window height in sectors.
    pub scan_height: u32,
    /// Upper bound on `width * height` for any scan.
    pub max_scan_cells: u64,
    /// Output format when `--format` is not given.
    pub format: OutputFormat,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            scan_origin: Coordinate::new(0, 0),
            scan_width: 32,
            scan_height: 32,
            max_scan_cells: 1 << 22,
            format: OutputFormat::Text,
        }
    }
}

impl SurveyConfig {
    /// Parse a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> SurveyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> SurveyResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| SurveyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("loaded survey config from {}", path.display());
        Ok(config)
    }

    /// The default scan window.
    pub fn default_region(&self) -> Region {
        Region::new(self.scan_origin, self.scan_width, self.scan_height)
    }

    /// The output format: the command-line choice if given, else the config's.
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.format)
    }

    /// Merge explicit scan bounds over the default window. Each bound falls
    /// back to the config independently of the others.
    pub fn resolve_region(
        &self,
        x: Option<u32>,
        y: Option<u32>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Region {
        Region::new(
            Coordinate::new(
                x.unwrap_or(self.scan_origin.x),
                y.unwrap_or(self.scan_origin.y),
            ),
            width.unwrap_or(self.scan_width),
            height.unwrap_or(self.scan_height),
        )
    }
}
