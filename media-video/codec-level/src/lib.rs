//! Codec level calculation
//!
//! Determines the lowest level a bitstream must declare for a set of encoding parameters,
//! and the bitrate, buffer and reference frame limits of a given level.

mod error;
mod params;
mod profile;
mod table;

pub mod h264;

pub use error::{InvalidParameter, LevelError};
pub use params::{EncodeParameters, Framerate, TileLayout, Tier};
pub use profile::Profile;
pub use table::{LevelRecord, LevelTable};

/// Codec a [`CodecLevel`] implementation calculates levels for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Codec {
    H264,
}

/// Level calculations shared by all codecs
///
/// Parameters which have no meaning for a codec (e.g. tier or tiles) are accepted and ignored.
///
/// Levels are identified by their codec specific level-idc.
pub trait CodecLevel {
    fn codec(&self) -> Codec;

    /// Returns the lowest level satisfying the frame size, processing rate, bitrate,
    /// buffer size and reference frame count of `params`
    ///
    /// Returns [`LevelError::LevelExceeded`] if the parameters exceed every defined level.
    fn calc_auto_level(&self, params: &EncodeParameters) -> Result<u8, LevelError>;

    /// Max bitrate in bit/s
    fn get_max_bitrate(
        &self,
        level_idc: u8,
        profile: Profile,
        tier: Tier,
    ) -> Result<u64, LevelError>;

    /// Max VBV buffer size in bits
    fn get_max_vbv_buf(&self, level_idc: u8, profile: Profile) -> Result<u64, LevelError>;

    /// Max number of reference frames for the given picture size
    fn get_max_ref(
        &self,
        width: u32,
        height: u32,
        level_idc: u8,
        interlaced: bool,
    ) -> Result<u32, LevelError>;
}
