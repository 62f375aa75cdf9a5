use crate::{LevelRecord, LevelTable};
use std::{fmt, num::ParseIntError, str::FromStr};

/// H.264 levels with their corresponding capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum H264Level {
    /// Level 1.0: Max resolution 176x144 (QCIF), 15 fps
    Level_1_0,
    /// Level 1b: Level 1.0 with doubled bitrate, level-idc 9
    ///
    /// Only available for lookups, never selected by auto-level.
    Level_1_B,
    /// Level 1.1: Max resolution 352x288 (CIF), 7.5 fps
    Level_1_1,
    /// Level 1.2: Max resolution 352x288 (CIF), 15 fps
    Level_1_2,
    /// Level 1.3: Max resolution 352x288 (CIF), 30 fps
    Level_1_3,

    /// Level 2.0: Max resolution 352x288 (CIF), 30 fps
    Level_2_0,
    /// Level 2.1: Max resolution 352x576, 25 fps
    Level_2_1,
    /// Level 2.2: Max resolution 720x576 (SD), 12.5 fps
    Level_2_2,

    /// Level 3.0: Max resolution 720x576 (SD), 25 fps
    Level_3_0,
    /// Level 3.1: Max resolution 1280x720 (HD), 30 fps
    Level_3_1,
    /// Level 3.2: Max resolution 1280x1024, 42 fps
    Level_3_2,

    /// Level 4.0: Max resolution 2048x1024, 30 fps
    Level_4_0,
    /// Level 4.1: Same as 4.0 with higher bitrates
    Level_4_1,
    /// Level 4.2: Max resolution 2048x1088, 60 fps
    Level_4_2,

    /// Level 5.0: Max resolution 3680x1536, 26.7 fps
    Level_5_0,
    /// Level 5.1: Max resolution 4096x2304, 26.7 fps
    Level_5_1,
    /// Level 5.2: Max resolution 4096x2304, 56.3 fps
    Level_5_2,

    /// Level 6.0: Max resolution 8192x4352, 30 fps
    Level_6_0,
    /// Level 6.1: Max resolution 8192x4352, 60 fps
    Level_6_1,
    /// Level 6.2: Max resolution 8192x4352, 120 fps
    Level_6_2,
}

/// ITU-T H.264 Table A-1 Level Limits
///
/// Columns: level_idc, MaxMBPS (MB/s), MaxFS (MBs), MaxDpbMbs (MBs),
/// MaxBR (cpbBrVclFactor bits/s), MaxCPB (cpbBrVclFactor bits)
#[rustfmt::skip]
static H264_LEVEL_RECORDS: [LevelRecord; 19] = [
    record(10,     1485,     99,    396,     64,    175),
    record(11,     3000,    396,    900,    192,    500),
    record(12,     6000,    396,   2376,    384,   1000),
    record(13,    11880,    396,   2376,    768,   2000),
    record(20,    11880,    396,   2376,   2000,   2000),
    record(21,    19800,    792,   4752,   4000,   4000),
    record(22,    20250,   1620,   8100,   4000,   4000),
    record(30,    40500,   1620,   8100,  10000,  10000),
    record(31,   108000,   3600,  18000,  14000,  14000),
    record(32,   216000,   5120,  20480,  20000,  20000),
    record(40,   245760,   8192,  32768,  20000,  25000),
    record(41,   245760,   8192,  32768,  50000,  62500),
    record(42,   522240,   8704,  34816,  50000,  62500),
    record(50,   589824,  22080, 110400, 135000, 135000),
    record(51,   983040,  36864, 184320, 240000, 240000),
    record(52,  2073600,  36864, 184320, 240000, 240000),
    record(60,  4177920, 139264, 696320, 240000, 240000),
    record(61,  8355840, 139264, 696320, 480000, 480000),
    record(62, 16711680, 139264, 696320, 800000, 800000),
];

/// Level 1b, its level-idc 9 cannot be ordered before level 1.0 by capability
#[rustfmt::skip]
static H264_LEVEL_1B_RECORD: [LevelRecord; 1] = [
    record(9,      1485,     99,    396,    128,    350),
];

pub(crate) static H264_LEVEL_TABLE: LevelTable =
    LevelTable::new(&H264_LEVEL_RECORDS).with_lookup_only(&H264_LEVEL_1B_RECORD);

const fn record(
    level_idc: u8,
    max_mbps: u32,
    max_fs: u32,
    max_dpb_mbs: u32,
    max_br: u32,
    max_cpb: u32,
) -> LevelRecord {
    LevelRecord {
        level_idc,
        max_mbps,
        max_fs,
        max_dpb_mbs,
        max_br,
        max_cpb,
    }
}

impl H264Level {
    /// All levels considered by auto-level, in ascending order
    ///
    /// Does not contain [`H264Level::Level_1_B`].
    pub const ALL: [H264Level; 19] = [
        H264Level::Level_1_0,
        H264Level::Level_1_1,
        H264Level::Level_1_2,
        H264Level::Level_1_3,
        H264Level::Level_2_0,
        H264Level::Level_2_1,
        H264Level::Level_2_2,
        H264Level::Level_3_0,
        H264Level::Level_3_1,
        H264Level::Level_3_2,
        H264Level::Level_4_0,
        H264Level::Level_4_1,
        H264Level::Level_4_2,
        H264Level::Level_5_0,
        H264Level::Level_5_1,
        H264Level::Level_5_2,
        H264Level::Level_6_0,
        H264Level::Level_6_1,
        H264Level::Level_6_2,
    ];

    /// Returns the level idc as specified in H.264 for this level
    pub fn level_idc(self) -> u8 {
        self.record().level_idc
    }

    /// Level limits as listed in Table A-1
    pub fn record(self) -> &'static LevelRecord {
        match self {
            H264Level::Level_1_0 => &H264_LEVEL_RECORDS[0],
            H264Level::Level_1_B => &H264_LEVEL_1B_RECORD[0],
            // Level_1_B is not part of H264_LEVEL_RECORDS
            level => &H264_LEVEL_RECORDS[level as usize - 1],
        }
    }

    pub fn from_level_idc(level_idc: u8) -> Option<Self> {
        H264Level::ALL
            .into_iter()
            .chain([H264Level::Level_1_B])
            .find(|level| level.level_idc() == level_idc)
    }
}

impl TryFrom<u8> for H264Level {
    type Error = crate::LevelError;

    fn try_from(level_idc: u8) -> Result<Self, Self::Error> {
        Self::from_level_idc(level_idc).ok_or(crate::LevelError::UnknownLevel(level_idc))
    }
}

impl fmt::Display for H264Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == H264Level::Level_1_B {
            return f.write_str("1b");
        }

        let level_idc = self.level_idc();

        write!(f, "{}.{}", level_idc / 10, level_idc % 10)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseH264LevelError {
    #[error("encountered non integer value {0}")]
    InvalidValue(#[from] ParseIntError),
    #[error("unknown level {0}")]
    UnknownLevel(String),
}

/// Parses levels written as `4.1`, `4`, `1b` or as level-idc `41`
impl FromStr for H264Level {
    type Err = ParseH264LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("1b") {
            return Ok(H264Level::Level_1_B);
        }

        let level_idc = match s.split_once('.') {
            Some((major, minor)) => {
                let major: u8 = major.parse()?;
                let minor: u8 = minor.parse()?;

                if minor > 9 {
                    return Err(ParseH264LevelError::UnknownLevel(s.into()));
                }

                major.checked_mul(10).and_then(|m| m.checked_add(minor))
            }
            None => {
                let value: u8 = s.parse()?;

                if value < 10 { Some(value * 10) } else { Some(value) }
            }
        };

        level_idc
            .and_then(Self::from_level_idc)
            .ok_or_else(|| ParseH264LevelError::UnknownLevel(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_well_ordered() {
        assert!(H264_LEVEL_TABLE.is_well_ordered());
    }

    #[test]
    fn level_1b_is_lookup_only() {
        let record = H264Level::Level_1_B.record();

        assert_eq!(record.level_idc, 9);
        assert_eq!(H264_LEVEL_TABLE.get(9), Some(record));
        assert!(!H264Level::ALL.contains(&H264Level::Level_1_B));
        assert!(H264_LEVEL_TABLE.records().iter().all(|r| r.level_idc != 9));

        // same picture limits as 1.0, more bitrate
        let level_1_0 = H264Level::Level_1_0.record();
        assert_eq!(record.max_fs, level_1_0.max_fs);
        assert_eq!(record.max_mbps, level_1_0.max_mbps);
        assert!(record.max_br > level_1_0.max_br);
    }

    #[test]
    fn enum_matches_table() {
        assert_eq!(H264Level::ALL.len(), H264_LEVEL_RECORDS.len());

        for (level, record) in H264Level::ALL.iter().zip(H264_LEVEL_RECORDS.iter()) {
            assert_eq!(level.record(), record);
        }

        assert_eq!(H264Level::Level_3_1.level_idc(), 31);
        assert_eq!(H264Level::Level_6_2.level_idc(), 62);
    }

    #[test]
    fn from_level_idc() {
        assert_eq!(H264Level::from_level_idc(40), Some(H264Level::Level_4_0));
        assert_eq!(H264Level::from_level_idc(9), Some(H264Level::Level_1_B));
        assert_eq!(H264Level::from_level_idc(33), None);

        assert_eq!(
            H264Level::try_from(14),
            Err(crate::LevelError::UnknownLevel(14))
        );
    }

    #[test]
    fn display() {
        assert_eq!(H264Level::Level_4_0.to_string(), "4.0");
        assert_eq!(H264Level::Level_5_2.to_string(), "5.2");
        assert_eq!(H264Level::Level_1_B.to_string(), "1b");
    }

    #[test]
    fn parse() {
        assert_eq!("4.1".parse::<H264Level>().unwrap(), H264Level::Level_4_1);
        assert_eq!("4".parse::<H264Level>().unwrap(), H264Level::Level_4_0);
        assert_eq!("52".parse::<H264Level>().unwrap(), H264Level::Level_5_2);
        assert_eq!(" 1.3 ".parse::<H264Level>().unwrap(), H264Level::Level_1_3);
        assert_eq!("1b".parse::<H264Level>().unwrap(), H264Level::Level_1_B);
        assert_eq!("1B".parse::<H264Level>().unwrap(), H264Level::Level_1_B);

        assert!(matches!(
            "3.3".parse::<H264Level>(),
            Err(ParseH264LevelError::UnknownLevel(_))
        ));
        assert!(matches!(
            "4.10".parse::<H264Level>(),
            Err(ParseH264LevelError::UnknownLevel(_))
        ));
        assert!(matches!(
            "auto".parse::<H264Level>(),
            Err(ParseH264LevelError::InvalidValue(_))
        ));
    }
}
