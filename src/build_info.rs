//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Short version line for banners: `<commit> (<date>)`.
pub fn version_line() -> String {
    format!("{} ({})", BUILD_COMMIT, BUILD_DATE)
}
