/// Limits of a single level
///
/// Rates and sizes are expressed in the codec's processing unit, e.g. 16x16 macroblocks for H.264.
/// Bitrate and buffer limits are in units of the profile's bitrate factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRecord {
    pub level_idc: u8,
    /// Max unit processing rate (units/s)
    pub max_mbps: u32,
    /// Max frame size (units)
    pub max_fs: u32,
    /// Max decoded picture buffer size (units)
    pub max_dpb_mbs: u32,
    /// Max video bitrate
    pub max_br: u32,
    /// Max coded picture buffer size
    pub max_cpb: u32,
}

/// Read-only level table, sorted by ascending level
///
/// Lookup-only records can be queried by their level-idc but never take part in level selection.
#[derive(Debug)]
pub struct LevelTable {
    records: &'static [LevelRecord],
    lookup_only: &'static [LevelRecord],
}

impl LevelTable {
    /// Records must be sorted by ascending `level_idc`, with capabilities never decreasing
    pub const fn new(records: &'static [LevelRecord]) -> Self {
        Self {
            records,
            lookup_only: &[],
        }
    }

    pub const fn with_lookup_only(self, lookup_only: &'static [LevelRecord]) -> Self {
        Self {
            records: self.records,
            lookup_only,
        }
    }

    pub fn records(&self) -> &'static [LevelRecord] {
        self.records
    }

    pub fn get(&self, level_idc: u8) -> Option<&'static LevelRecord> {
        self.records
            .iter()
            .chain(self.lookup_only)
            .find(|r| r.level_idc == level_idc)
    }

    /// Returns the first (lowest) level satisfying `predicate`
    pub fn lowest(
        &self,
        mut predicate: impl FnMut(&LevelRecord) -> bool,
    ) -> Option<&'static LevelRecord> {
        self.records.iter().find(|r| predicate(r))
    }

    /// Checks that the records are strictly ascending and capabilities are monotonic
    pub fn is_well_ordered(&self) -> bool {
        self.records.windows(2).all(|w| {
            let (a, b) = (&w[0], &w[1]);

            a.level_idc < b.level_idc
                && a.max_mbps <= b.max_mbps
                && a.max_fs <= b.max_fs
                && a.max_dpb_mbs <= b.max_dpb_mbs
                && a.max_br <= b.max_br
                && a.max_cpb <= b.max_cpb
        })
    }
}
