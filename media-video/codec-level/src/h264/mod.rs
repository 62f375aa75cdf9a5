//! H.264 level calculation according to ITU-T H.264 Annex A

use crate::params::validate_dimensions;
use crate::{
    Codec, CodecLevel, EncodeParameters, Framerate, LevelError, LevelRecord, LevelTable, Profile,
    Tier,
};

mod level;

pub use level::{H264Level, ParseH264LevelError};

/// Upper bound of max_dec_frame_buffering (MaxDpbFrames)
const MAX_DPB_FRAMES: u64 = 16;

/// Level calculator for H.264
///
/// Tiers and tiles do not exist in H.264, the corresponding parameters are ignored.
#[derive(Debug, Clone, Copy)]
pub struct H264CodecLevel {
    table: &'static LevelTable,
}

impl Default for H264CodecLevel {
    fn default() -> Self {
        Self::new()
    }
}

impl H264CodecLevel {
    /// Create a calculator using the levels of ITU-T H.264 Table A-1
    pub fn new() -> Self {
        Self::with_table(&level::H264_LEVEL_TABLE)
    }

    /// Create a calculator using a custom level table
    ///
    /// The table must be sorted by ascending level with capabilities never decreasing.
    pub fn with_table(table: &'static LevelTable) -> Self {
        debug_assert!(table.is_well_ordered(), "level table is not sorted");

        Self { table }
    }

    fn record(&self, level_idc: u8) -> Result<&'static LevelRecord, LevelError> {
        self.table
            .get(level_idc)
            .ok_or(LevelError::UnknownLevel(level_idc))
    }
}

impl CodecLevel for H264CodecLevel {
    fn codec(&self) -> Codec {
        Codec::H264
    }

    fn calc_auto_level(&self, params: &EncodeParameters) -> Result<u8, LevelError> {
        params.validate()?;

        let picture_mbs = frame_mbs(params.width, params.height, params.interlaced);
        let rate = mb_rate(picture_mbs, params.framerate, params.interlaced);
        let factor = params.profile.cpb_br_vcl_factor();

        let found = self.table.lowest(|record| {
            let fits = rate <= u64::from(record.max_mbps)
                && picture_mbs <= u64::from(record.max_fs)
                && params.max_bitrate <= u64::from(record.max_br) * factor
                && params.vbv_buf <= u64::from(record.max_cpb) * factor
                && dpb_fits(record, picture_mbs, params.ref_frames);

            if !fits {
                log::trace!("level {} does not fit", record.level_idc);
            }

            fits
        });

        match found {
            Some(record) => {
                log::debug!(
                    "Selected level {} for {}x{} ({picture_mbs} MBs, {rate} MB/s)",
                    record.level_idc,
                    params.width,
                    params.height,
                );

                Ok(record.level_idc)
            }
            None => Err(LevelError::LevelExceeded),
        }
    }

    fn get_max_bitrate(
        &self,
        level_idc: u8,
        profile: Profile,
        _tier: Tier,
    ) -> Result<u64, LevelError> {
        let record = self.record(level_idc)?;

        Ok(u64::from(record.max_br) * profile.cpb_br_vcl_factor())
    }

    fn get_max_vbv_buf(&self, level_idc: u8, profile: Profile) -> Result<u64, LevelError> {
        let record = self.record(level_idc)?;

        Ok(u64::from(record.max_cpb) * profile.cpb_br_vcl_factor())
    }

    /// Interlaced pictures are allowed half the reference frames of the progressive picture
    fn get_max_ref(
        &self,
        width: u32,
        height: u32,
        level_idc: u8,
        interlaced: bool,
    ) -> Result<u32, LevelError> {
        validate_dimensions(width, height)?;

        let record = self.record(level_idc)?;

        Ok(max_ref(record, frame_mbs(width, height, false), interlaced))
    }
}

/// Bitrate and buffer limits of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VbvLimits {
    /// Max bitrate in bit/s
    pub max_bitrate: u64,
    /// Max VBV buffer size in bits
    pub buffer_size: u64,
}

/// Calculate the lowest H.264 level which satisfies the given parameters
///
/// ```rust
/// # use ezk_codec_level::{EncodeParameters, Framerate, Profile, h264::calc_auto_level_h264};
/// let params = EncodeParameters::new(1280, 720, Framerate::from_fps(30))
///     .with_profile(Profile::Main)
///     .with_vbv(4_000_000, 4_000_000);
///
/// assert_eq!(calc_auto_level_h264(&params), Ok(31));
/// ```
pub fn calc_auto_level_h264(params: &EncodeParameters) -> Result<u8, LevelError> {
    H264CodecLevel::new().calc_auto_level(params)
}

/// Returns the max bitrate and VBV buffer size allowed by the given H.264 level and profile
pub fn get_vbv_value_h264(level_idc: u8, profile: Profile) -> Result<VbvLimits, LevelError> {
    let calc = H264CodecLevel::new();

    Ok(VbvLimits {
        max_bitrate: calc.get_max_bitrate(level_idc, profile, Tier::Main)?,
        buffer_size: calc.get_max_vbv_buf(level_idc, profile)?,
    })
}

/// Number of macroblocks in a frame
///
/// Interlaced frames consist of two fields which are each rounded up to whole macroblock rows.
fn frame_mbs(width: u32, height: u32, interlaced: bool) -> u64 {
    let width_mbs = u64::from(width.div_ceil(16));

    let height_mbs = if interlaced {
        u64::from(height.div_ceil(32)) * 2
    } else {
        u64::from(height.div_ceil(16))
    };

    width_mbs.saturating_mul(height_mbs)
}

/// Macroblock processing rate in MB/s, rounded up
///
/// Saturates at `u64::MAX`, which exceeds every level.
///
/// Interlaced content is processed per field: half the macroblocks at twice the frame rate.
fn mb_rate(frame_mbs: u64, framerate: Framerate, interlaced: bool) -> u64 {
    let (mbs, num) = if interlaced {
        (frame_mbs / 2, u64::from(framerate.num) * 2)
    } else {
        (frame_mbs, u64::from(framerate.num))
    };

    mbs.saturating_mul(num).div_ceil(u64::from(framerate.denom))
}

/// Whether the decoded picture buffer of `record` holds `ref_frames` frames of `frame_mbs`
///
/// The buffer holds frames, so interlaced pictures count with their full frame size.
fn dpb_fits(record: &LevelRecord, frame_mbs: u64, ref_frames: u32) -> bool {
    u64::from(ref_frames) <= MAX_DPB_FRAMES
        && u64::from(ref_frames).saturating_mul(frame_mbs) <= u64::from(record.max_dpb_mbs)
}

fn max_ref(record: &LevelRecord, frame_mbs: u64, interlaced: bool) -> u32 {
    // frame_mbs is never zero, dimensions are validated by the callers
    let refs = (u64::from(record.max_dpb_mbs) / frame_mbs).min(MAX_DPB_FRAMES) as u32;

    if interlaced { refs / 2 } else { refs }
}
