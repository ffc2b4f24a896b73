use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use crate::bbox::Bbox;

pub mod error;
pub use error::ConfigError;

/// Run configuration for the seasonal Copernicus downloads: the study area,
/// the years to fetch and where the per-dataset subdirectories are created.
#[derive(Debug, Clone)]
pub struct Config {
    bbox: Bbox,
    years: Vec<i32>,
    output_root: PathBuf,
}

// This function deserializes a Config object from a deserializer, ensuring the
// bbox coordinates are valid and at least one year is requested.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            bbox: BboxHelper,
            years: Vec<i32>,
            output_root: Option<String>,
        }

        #[derive(Deserialize)]
        struct BboxHelper {
            lon_min: f64,
            lon_max: f64,
            lat_min: f64,
            lat_max: f64,
        }

        // Deserialize into the helper struct
        let helper = ConfigHelper::deserialize(deserializer)?;

        // Validate bbox
        let bbox = Bbox::new(
            helper.bbox.lon_min,
            helper.bbox.lon_max,
            helper.bbox.lat_min,
            helper.bbox.lat_max,
        )
        .map_err(|e| D::Error::custom(ConfigError::Bbox(e)))?;

        // Ensure there is at least one year to download
        if helper.years.is_empty() {
            return Err(D::Error::custom(ConfigError::EmptyYears));
        }

        let output_root = helper
            .output_root
            .map_or_else(|| PathBuf::from("data"), PathBuf::from);

        Ok(Config {
            bbox,
            years: helper.years,
            output_root,
        })
    }
}

impl Config {
    #[allow(dead_code)]
    pub fn new(bbox: Bbox, years: Vec<i32>, output_root: PathBuf) -> Self {
        Config {
            bbox,
            years,
            output_root,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn bbox(&self) -> &Bbox {
        &self.bbox
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            // Gulf of Mexico, August-October study years
            bbox: Bbox {
                lon_min: -92.0,
                lon_max: -86.0,
                lat_min: 24.0,
                lat_max: 31.0,
            },
            years: vec![2005, 2006, 2012, 2013, 2015, 2021],
            output_root: PathBuf::from("data"),
        }
    }
}
