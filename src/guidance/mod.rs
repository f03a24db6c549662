//! Feeding Guidance
//!
//! General, status-independent feeding advice for display next to an
//! assessment.
//!
//! - `feeding.rs` - four-band short guidance list
//! - `age_groups.rs` - detailed guides per developmental stage

pub mod feeding;
pub mod age_groups;

pub use feeding::{FeedingBand, nutrition_recommendations};
pub use age_groups::{AgeGroupGuide, GuideAudience, all_guides, guide_for_age, guides_for_audience};
