use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use tracing::error;
use tracing::info;

use crate::bbox::Bbox;
use crate::config::Config;
use crate::credentials::Credentials;
use crate::datasets;
use crate::runner::ToolRunner;

// August 1 through October 31, the late hurricane season window.
const SEASON_START: (u32, u32) = (8, 1);
const SEASON_END: (u32, u32) = (10, 31);

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Downloads the per-year dataset pair through the external client. Holds the
/// run configuration, the injected credentials and the runner capability.
pub struct Downloader<'a, R: ToolRunner> {
    config: &'a Config,
    credentials: &'a Credentials,
    runner: &'a R,
}

impl<'a, R: ToolRunner> Downloader<'a, R> {
    pub fn new(config: &'a Config, credentials: &'a Credentials, runner: &'a R) -> Self {
        Downloader {
            config,
            credentials,
            runner,
        }
    }

    /// Download every dataset for one year, sequentially. The first dataset
    /// that fails aborts the call; remaining datasets are not attempted.
    /// Returns true only when all datasets downloaded with a zero exit
    /// status.
    pub fn download_year(&self, year: i32) -> bool {
        info!("Starting Copernicus data download for {}", year);

        let Some((start, end)) = season_window(year) else {
            error!("Could not build the seasonal window for year {}", year);
            return false;
        };

        for dataset_id in datasets::ids_for_year(year) {
            info!("Downloading dataset: {}", dataset_id);

            let dataset_output_dir = self.config.output_root().join(dataset_id);
            if let Err(e) = fs::create_dir_all(&dataset_output_dir) {
                error!(
                    "Could not create output directory {}: {}",
                    dataset_output_dir.display(),
                    e
                );
                return false;
            }

            let args = subset_args(
                self.config.bbox(),
                dataset_id,
                &start,
                &end,
                &dataset_output_dir,
                self.credentials,
            );

            match self.runner.run(&args) {
                Ok(true) => info!("Successfully downloaded dataset: {}", dataset_id),
                Ok(false) => {
                    error!(
                        "Error downloading dataset {}: subset exited with a non-zero status",
                        dataset_id
                    );
                    return false;
                }
                Err(e) => {
                    error!("Unexpected error downloading dataset {}: {}", dataset_id, e);
                    return false;
                }
            }
        }

        info!("Completed all Copernicus data downloads for {}", year);
        true
    }
}

/// Seasonal bounds for a year: August 1 00:00:00 to October 31 23:59:59.
fn season_window(year: i32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start =
        NaiveDate::from_ymd_opt(year, SEASON_START.0, SEASON_START.1)?.and_hms_opt(0, 0, 0)?;
    let end =
        NaiveDate::from_ymd_opt(year, SEASON_END.0, SEASON_END.1)?.and_hms_opt(23, 59, 59)?;

    Some((start, end))
}

/// Argument list for one `subset` invocation, in the order the client
/// documents. The depth range collapses to the single surface level of the
/// dataset's grid.
fn subset_args(
    bbox: &Bbox,
    dataset_id: &str,
    start: &NaiveDateTime,
    end: &NaiveDateTime,
    output_dir: &Path,
    credentials: &Credentials,
) -> Vec<String> {
    let depth = datasets::surface_depth(dataset_id);

    vec![
        "subset".to_string(),
        format!("--dataset-id={}", dataset_id),
        "--minimum-longitude".to_string(),
        bbox.lon_min.to_string(),
        "--maximum-longitude".to_string(),
        bbox.lon_max.to_string(),
        "--minimum-latitude".to_string(),
        bbox.lat_min.to_string(),
        "--maximum-latitude".to_string(),
        bbox.lat_max.to_string(),
        "--file-format".to_string(),
        "netcdf".to_string(),
        "--output-directory".to_string(),
        output_dir.display().to_string(),
        "--start-datetime".to_string(),
        start.format(DATETIME_FORMAT).to_string(),
        "--end-datetime".to_string(),
        end.format(DATETIME_FORMAT).to_string(),
        "--overwrite".to_string(),
        "--username".to_string(),
        credentials.username.clone(),
        "--password".to_string(),
        credentials.password.clone(),
        "--minimum-depth".to_string(),
        depth.to_string(),
        "--maximum-depth".to_string(),
        depth.to_string(),
    ]
}
