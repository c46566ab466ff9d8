#[cfg(feature = "chart-io")]
pub mod chart;

#[cfg(feature = "svg-io")]
pub mod svg;

/// Generic rendering/output errors.
///
/// Render sinks are behind cargo feature-flags.
/// When a feature is disabled the corresponding variant is *not*
/// constructed in user code.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    #[cfg(feature = "chart-io")]
    /// Error bubbled up from the `plotters` backend while drawing.
    Chart(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            #[cfg(feature = "chart-io")]
            Chart(msg) => write!(f, "Chart rendering failed: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}
