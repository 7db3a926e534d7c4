//! Hospitality block: ordinal level scalar plus offering keywords.
//!
//! Layout: [level_scalar, vip, club, premium, standard]. The level scalar
//! comes from the ordinal Bronze..Platinum mapping; an unknown or absent
//! level sits at the 0.5 midpoint.

use super::contains_flag;
use catalog::HospitalityLevel;

pub const SIZE: usize = 5;

/// Encode a hospitality block.
///
/// # Arguments
/// * `level_scalar` - ordinal level mapped to {0.25, 0.5, 0.75, 1.0},
///   0.5 when unknown
/// * `text` - hospitality-type text (package side) or the whole query
pub fn encode(level_scalar: f32, text: &str) -> Vec<f32> {
    vec![
        level_scalar,
        contains_flag(text, "vip"),
        contains_flag(text, "club"),
        contains_flag(text, "premium"),
        contains_flag(text, "standard"),
    ]
}

/// Pull an explicit level mention out of free text, if any.
///
/// Lets a query like "platinum hospitality" hit the same scalar a
/// Platinum package encodes.
pub fn level_scalar_from_text(text: &str) -> f32 {
    let lowered = text.to_lowercase();
    for level in [
        HospitalityLevel::Platinum,
        HospitalityLevel::Gold,
        HospitalityLevel::Silver,
        HospitalityLevel::Bronze,
    ] {
        let name = format!("{:?}", level).to_lowercase();
        if lowered.contains(&name) {
            return level.scalar();
        }
    }
    0.5
}
