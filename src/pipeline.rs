use std::fmt;

use tracing::info;

use crate::config::Config;
use crate::credentials::Credentials;
use crate::downloader::Downloader;
use crate::runner::ToolRunner;

/// A year failed to download; later years were not attempted.
#[derive(Debug)]
pub struct PipelineError {
    pub year: i32,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to download Copernicus data for {}", self.year)
    }
}

impl std::error::Error for PipelineError {}

/// Walk the configured years in order, downloading each one's dataset pair.
/// The first failing year halts the run; there is no retry and no
/// partial-success continuation.
pub fn run(
    config: &Config,
    credentials: &Credentials,
    runner: &impl ToolRunner,
) -> Result<(), PipelineError> {
    info!("Starting Copernicus data download module");

    let downloader = Downloader::new(config, credentials, runner);

    for &year in config.years() {
        if !downloader.download_year(year) {
            return Err(PipelineError { year });
        }
    }

    info!("Completed Copernicus data download module");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbox::Bbox;
    use std::cell::RefCell;
    use std::io;
    use tempfile::tempdir;

    struct FakeRunner {
        calls: RefCell<usize>,
        fail_from: Option<usize>,
    }

    impl ToolRunner for FakeRunner {
        fn run(&self, _args: &[String]) -> io::Result<bool> {
            let mut calls = self.calls.borrow_mut();
            let index = *calls;
            *calls += 1;
            Ok(self.fail_from.is_none_or(|n| index < n))
        }

        fn capture(&self, _args: &[String]) -> io::Result<String> {
            unreachable!();
        }
    }

    fn test_config(output_root: std::path::PathBuf, years: Vec<i32>) -> Config {
        Config::new(
            Bbox::new(-92.0, -86.0, 24.0, 31.0).expect("Invalid bbox"),
            years,
            output_root,
        )
    }

    #[test]
    fn test_all_years_succeed() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf(), vec![2005, 2021]);
        let credentials = Credentials::new("jdoe", "hunter2");
        let runner = FakeRunner {
            calls: RefCell::new(0),
            fail_from: None,
        };

        assert!(run(&config, &credentials, &runner).is_ok());

        // Two datasets per year
        assert_eq!(*runner.calls.borrow(), 4);
    }

    #[test]
    fn test_failing_year_halts_the_run() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf(), vec![2005, 2006, 2012]);
        let credentials = Credentials::new("jdoe", "hunter2");

        // 2005 succeeds (2 calls), 2006 fails on its first dataset
        let runner = FakeRunner {
            calls: RefCell::new(0),
            fail_from: Some(2),
        };

        let err = run(&config, &credentials, &runner).unwrap_err();
        assert_eq!(err.year, 2006);

        // 2012 was never attempted
        assert_eq!(*runner.calls.borrow(), 3);
    }
}
