use thiserror::Error;

/// Errors raised by the display surface and its collaborators
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The window or its pixel surface is not realized yet (or is gone)
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// Width or height was zero
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The backend accepted the frame but could not show it
    #[error("failed to present frame: {0}")]
    Present(String),

    /// Native window creation failed
    #[error("failed to create window: {0}")]
    Window(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
