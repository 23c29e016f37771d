pub mod conditions;
pub mod recommendation;
pub mod shot;
pub mod situation;

pub use conditions::{
    Elevation, FairwayWidth, GreenFirmness, HandicapProfile, LieQuality, SkillLevel, Strategy,
    Surface, Tendency, TroubleSeverity, WindDirection, WindStrength,
};
pub use recommendation::{RankedRecommendation, SgTier, TroubleExposure};
pub use shot::{CandidateShot, Club, ClubCategory, FullBagRow, SwingType, Trajectory};
pub use situation::{GreenGeometry, Situation, TroubleMap};
