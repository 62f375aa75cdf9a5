/// Encoding profile, defines the feature-set and the bitrate multiplier applied to level limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Baseline,
    ConstrainedBaseline,
    Main,
    Extended,
    High,
    High10,
    High422,
    High444Predictive,
    High10Intra,
    High422Intra,
    High444Intra,
    CAVLC444Intra,
}

impl Profile {
    /// `cpbBrVclFactor` from ITU-T H.264 Table A-2
    ///
    /// Level limits for MaxBR and MaxCPB are expressed in units of this factor, in bit/s and bits.
    pub fn cpb_br_vcl_factor(self) -> u64 {
        match self {
            Profile::Baseline | Profile::ConstrainedBaseline | Profile::Main | Profile::Extended => {
                1000
            }
            Profile::High => 1250,
            Profile::High10 | Profile::High10Intra => 3000,
            Profile::High422
            | Profile::High422Intra
            | Profile::High444Predictive
            | Profile::High444Intra
            | Profile::CAVLC444Intra => 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_grows_with_profile_family() {
        assert_eq!(Profile::Baseline.cpb_br_vcl_factor(), 1000);
        assert_eq!(Profile::Main.cpb_br_vcl_factor(), 1000);
        assert_eq!(Profile::High.cpb_br_vcl_factor(), 1250);
        assert_eq!(Profile::High10.cpb_br_vcl_factor(), 3000);
        assert_eq!(Profile::High444Predictive.cpb_br_vcl_factor(), 4000);
    }

    #[test]
    fn intra_variants_share_factor() {
        assert_eq!(
            Profile::High10.cpb_br_vcl_factor(),
            Profile::High10Intra.cpb_br_vcl_factor()
        );
        assert_eq!(
            Profile::High422Intra.cpb_br_vcl_factor(),
            Profile::CAVLC444Intra.cpb_br_vcl_factor()
        );
    }
}
