use pico_ppm::platform::PlatformError;

/// Errors that can occur while running the simulation.
#[derive(Debug, thiserror::Error)]
pub enum SitlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),
}
