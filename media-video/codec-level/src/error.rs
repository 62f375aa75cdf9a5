/// Failure reasons of the level calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    /// The requested constraints exceed the highest level in the table
    #[error("parameters exceed the highest defined level")]
    LevelExceeded,
    #[error("unknown level-idc {0}")]
    UnknownLevel(u8),
    #[error(transparent)]
    InvalidParameters(#[from] InvalidParameter),
}

/// Parameter rejected before any table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidParameter {
    #[error("picture width must not be zero")]
    ZeroWidth,
    #[error("picture height must not be zero")]
    ZeroHeight,
    #[error("framerate numerator must not be zero")]
    ZeroFramerateNum,
    #[error("framerate denominator must not be zero")]
    ZeroFramerateDenom,
}
