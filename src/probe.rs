#![allow(dead_code)]
use std::collections::BTreeMap;
use std::io;

use serde::Deserialize;

use crate::runner::ToolRunner;

#[derive(Debug, Deserialize)]
struct DatasetDescription {
    #[serde(default)]
    dimensions: BTreeMap<String, serde_json::Value>,
}

/// Ask the client whether a dataset carries a depth dimension, by parsing the
/// `describe` output. Not called by the download pipeline; kept as a
/// standalone capability for callers that need to decide whether depth bounds
/// apply to a dataset at all.
pub fn dataset_has_depth(runner: &impl ToolRunner, dataset_id: &str) -> io::Result<bool> {
    let args = vec![
        "describe".to_string(),
        "--dataset-id".to_string(),
        dataset_id.to_string(),
    ];

    let stdout = runner.capture(&args)?;

    let description: DatasetDescription = serde_json::from_str(&stdout)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(description.dimensions.contains_key("depth"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct CannedRunner {
        stdout: String,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl CannedRunner {
        fn new(stdout: &str) -> Self {
            CannedRunner {
                stdout: stdout.to_string(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ToolRunner for CannedRunner {
        fn run(&self, _args: &[String]) -> io::Result<bool> {
            unreachable!("the probe only captures output");
        }

        fn capture(&self, args: &[String]) -> io::Result<String> {
            self.calls.borrow_mut().push(args.to_vec());
            Ok(self.stdout.clone())
        }
    }

    #[test]
    fn test_depth_dimension_present() {
        let runner = CannedRunner::new(
            r#"{"dimensions": {"depth": {"size": 50}, "latitude": {"size": 2041}}}"#,
        );

        assert!(dataset_has_depth(&runner, "cmems_mod_glo_phy_my_0.083deg_P1D-m").unwrap());

        let calls = runner.calls.borrow();
        assert_eq!(
            calls[0],
            vec![
                "describe",
                "--dataset-id",
                "cmems_mod_glo_phy_my_0.083deg_P1D-m"
            ]
        );
    }

    #[test]
    fn test_depth_dimension_absent() {
        let runner = CannedRunner::new(r#"{"dimensions": {"latitude": {}, "longitude": {}}}"#);

        assert!(!dataset_has_depth(&runner, "some_surface_dataset").unwrap());
    }

    #[test]
    fn test_missing_dimensions_key() {
        let runner = CannedRunner::new(r#"{"title": "a dataset"}"#);

        assert!(!dataset_has_depth(&runner, "some_dataset").unwrap());
    }

    #[test]
    fn test_malformed_output_is_an_error() {
        let runner = CannedRunner::new("not json");

        assert!(dataset_has_depth(&runner, "some_dataset").is_err());
    }
}
