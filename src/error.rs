use thiserror::Error;

/// Errors that can occur while building paths or fitting bounds.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PathError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or a
    /// non-finite component. Inputs are rejected, never clamped.
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("no points to fit bounds around")]
    EmptyInput,
}
