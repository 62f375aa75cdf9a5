use crate::{InvalidParameter, Profile};
use std::num::NonZeroU32;

/// Parameters of a single level query
///
/// Not every field is meaningful for every codec. Codecs without tiers ignore `tier`,
/// codecs without tiles ignore `tiles`.
#[derive(Debug, Clone, Copy)]
pub struct EncodeParameters {
    /// Width of the picture in pixels
    pub width: u32,
    /// Height of the picture in pixels
    pub height: u32,

    /// Number of reference frames the encoder will use. 0 places no constraint on the level.
    pub ref_frames: u32,

    /// Whether the picture is coded as two fields
    pub interlaced: bool,

    /// Frame rate, for interlaced content this is the rate of field pairs
    pub framerate: Framerate,

    pub profile: Profile,
    pub tier: Tier,

    /// Requested maximum bitrate in bit/s, 0 if unconstrained
    pub max_bitrate: u64,
    /// Requested VBV buffer size in bits, 0 if unconstrained
    pub vbv_buf: u64,

    pub tiles: TileLayout,
}

impl Default for EncodeParameters {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            ref_frames: 1,
            interlaced: false,
            framerate: Framerate::from_fps(30),
            profile: Profile::High,
            tier: Tier::Main,
            max_bitrate: 0,
            vbv_buf: 0,
            tiles: TileLayout::default(),
        }
    }
}

impl EncodeParameters {
    pub fn new(width: u32, height: u32, framerate: Framerate) -> Self {
        Self {
            width,
            height,
            framerate,
            ..Self::default()
        }
    }

    pub fn with_ref_frames(mut self, ref_frames: u32) -> Self {
        self.ref_frames = ref_frames;
        self
    }

    pub fn with_interlaced(mut self, interlaced: bool) -> Self {
        self.interlaced = interlaced;
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Set the requested maximum bitrate (bit/s) and VBV buffer size (bits)
    pub fn with_vbv(mut self, max_bitrate: u64, vbv_buf: u64) -> Self {
        self.max_bitrate = max_bitrate;
        self.vbv_buf = vbv_buf;
        self
    }

    pub fn with_tiles(mut self, tiles: TileLayout) -> Self {
        self.tiles = tiles;
        self
    }

    /// Reject parameters that cannot describe a picture sequence
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        validate_dimensions(self.width, self.height)?;

        if self.framerate.num == 0 {
            return Err(InvalidParameter::ZeroFramerateNum);
        }

        if self.framerate.denom == 0 {
            return Err(InvalidParameter::ZeroFramerateDenom);
        }

        Ok(())
    }
}

pub(crate) fn validate_dimensions(width: u32, height: u32) -> Result<(), InvalidParameter> {
    if width == 0 {
        return Err(InvalidParameter::ZeroWidth);
    }

    if height == 0 {
        return Err(InvalidParameter::ZeroHeight);
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Framerate {
    pub num: u32,
    pub denom: u32,
}

impl Framerate {
    pub const fn new(num: u32, denom: u32) -> Self {
        Self { num, denom }
    }

    pub const fn from_fps(fps: u32) -> Self {
        Self { num: fps, denom: 1 }
    }
}

/// Tier of a level, only meaningful for codecs which define tiers
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    #[default]
    Main,
    High,
}

/// Tile grid of a picture, only meaningful for tiled codecs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    pub columns: NonZeroU32,
    pub rows: NonZeroU32,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            columns: NonZeroU32::MIN,
            rows: NonZeroU32::MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        let params = EncodeParameters::new(0, 1080, Framerate::from_fps(30));
        assert_eq!(params.validate(), Err(InvalidParameter::ZeroWidth));

        let params = EncodeParameters::new(1920, 0, Framerate::from_fps(30));
        assert_eq!(params.validate(), Err(InvalidParameter::ZeroHeight));
    }

    #[test]
    fn rejects_zero_framerate() {
        let params = EncodeParameters::new(1920, 1080, Framerate::new(30, 0));
        assert_eq!(params.validate(), Err(InvalidParameter::ZeroFramerateDenom));

        let params = EncodeParameters::new(1920, 1080, Framerate::new(0, 1));
        assert_eq!(params.validate(), Err(InvalidParameter::ZeroFramerateNum));
    }

    #[test]
    fn default_is_valid() {
        assert_eq!(EncodeParameters::default().validate(), Ok(()));
    }
}
