use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Bbox {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl Bbox {
    pub fn new(lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> Result<Self, String> {
        if !(-180.0..=180.0).contains(&lon_min) || !(-180.0..=180.0).contains(&lon_max) {
            return Err("Longitude values must be between -180 and 180".to_string());
        }

        if !(-90.0..=90.0).contains(&lat_min) || !(-90.0..=90.0).contains(&lat_max) {
            return Err("Latitude values must be between -90 and 90".to_string());
        }

        if lon_min > lon_max || lat_min > lat_max {
            return Err("Min values must be <= max values".to_string());
        }

        Ok(Bbox {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        })
    }
}
