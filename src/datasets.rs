//! Dataset identifiers for the global physics and biogeochemistry products,
//! and the depth of their surface layer.

/// Physics, near-real-time interim stream.
pub const PHY_INTERIM: &str = "cmems_mod_glo_phy_myint_0.083deg_P1D-m";

/// Physics, multi-year reprocessed stream.
pub const PHY_REPROCESSED: &str = "cmems_mod_glo_phy_my_0.083deg_P1D-m";

/// Biogeochemistry, multi-year reprocessed stream.
pub const BGC_REPROCESSED: &str = "cmems_mod_glo_bgc_my_0.25deg_P1D-m";

/// Shallowest depth level of the 0.083 degree physics grid, in metres.
pub const PHY_SURFACE_DEPTH: f64 = 0.49402499198913574;

/// Shallowest depth level of the 0.25 degree biogeochemistry grid, in metres.
pub const BGC_SURFACE_DEPTH: f64 = 0.5057600140571594;

/// Datasets to fetch for a given year. The multi-year physics reprocessing
/// does not cover 2021; that year only exists in the interim stream.
pub fn ids_for_year(year: i32) -> [&'static str; 2] {
    if year == 2021 {
        [PHY_INTERIM, BGC_REPROCESSED]
    } else {
        [PHY_REPROCESSED, BGC_REPROCESSED]
    }
}

/// Depth of the surface layer for a dataset, used as both the minimum and
/// maximum depth of the subset request.
pub fn surface_depth(dataset_id: &str) -> f64 {
    if dataset_id == BGC_REPROCESSED {
        BGC_SURFACE_DEPTH
    } else {
        PHY_SURFACE_DEPTH
    }
}
