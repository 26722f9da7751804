use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
/// Rejected window geometry requests.
pub enum GeometryError {
    /// The requested width is smaller than the allowed minimum.
    #[error("window width {requested} is below the minimum of {minimum}")]
    WidthBelowMinimum {
        /// Width supplied by the caller.
        requested: f64,
        /// Smallest accepted width.
        minimum: f64,
    },
    /// The requested height is smaller than the allowed minimum.
    #[error("window height {requested} is below the minimum of {minimum}")]
    HeightBelowMinimum {
        /// Height supplied by the caller.
        requested: f64,
        /// Smallest accepted height.
        minimum: f64,
    },
    /// An explicit position lies left of or above the viewport origin.
    #[error("window {axis} position {requested} is negative")]
    NegativePosition {
        /// `"x"` or `"y"`.
        axis: &'static str,
        /// Coordinate supplied by the caller.
        requested: f64,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
/// Invalid window-manager configuration or launcher manifest.
pub enum ConfigError {
    /// The manifest payload could not be decoded.
    #[error("failed to parse launcher manifest: {0}")]
    Parse(String),
    /// The manifest was written for a different schema.
    #[error("launcher manifest schema mismatch: expected {expected} found {found}")]
    SchemaVersion {
        /// Supported schema version.
        expected: u32,
        /// Version declared by the manifest.
        found: u32,
    },
    /// Two launchers share the same window id.
    #[error("duplicate launcher id `{0}`")]
    DuplicateLauncher(String),
    /// A launcher requests a window size that would be rejected at open time.
    #[error("launcher `{launcher}` has invalid geometry: {source}")]
    InvalidGeometry {
        /// Offending launcher id.
        launcher: String,
        /// Underlying geometry rejection.
        source: GeometryError,
    },
    /// A configuration value is out of range.
    #[error("invalid `{field}`: {reason}")]
    InvalidValue {
        /// Configuration key.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
