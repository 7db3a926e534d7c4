//! Sport block: per-category intensity scalars.
//!
//! Each sport maps to four scalars (indoor-ness, seasonality, excitement,
//! pace). A direct sport keyword wins over team-name resolution; team
//! names resolve to their sport's block. No match yields the neutral
//! block.

use super::neutral;

/// (sport, indoor, seasonality, excitement, pace)
const SPORT_TABLE: &[(&str, [f32; 4])] = &[
    ("basketball", [1.0, 0.6, 0.9, 0.9]),
    ("football", [0.1, 0.8, 0.95, 0.6]),
    ("baseball", [0.0, 0.4, 0.6, 0.4]),
    ("hockey", [1.0, 0.9, 0.85, 0.95]),
    ("soccer", [0.0, 0.5, 0.8, 0.7]),
    ("tennis", [0.3, 0.5, 0.7, 0.8]),
];

/// Recognized team names and the sport they resolve to.
const TEAM_TABLE: &[(&str, &str)] = &[
    ("knicks", "basketball"),
    ("lakers", "basketball"),
    ("celtics", "basketball"),
    ("warriors", "basketball"),
    ("bulls", "basketball"),
    ("yankees", "baseball"),
    ("red sox", "baseball"),
    ("dodgers", "baseball"),
    ("cubs", "baseball"),
    ("cowboys", "football"),
    ("eagles", "football"),
    ("patriots", "football"),
    ("bears", "football"),
    ("rangers", "hockey"),
    ("bruins", "hockey"),
    ("blackhawks", "hockey"),
    ("galaxy", "soccer"),
];

pub const SIZE: usize = 4;

/// Encode a sport block from free text.
///
/// Resolution order: first direct sport keyword in table order, then
/// team names. Both package sport fields ("Basketball") and queries
/// ("Lakers game friday") land on the same block.
pub fn encode(text: &str) -> Vec<f32> {
    let lowered = text.to_lowercase();

    for (sport, intensities) in SPORT_TABLE {
        if lowered.contains(sport) {
            return intensities.to_vec();
        }
    }

    for (team, sport) in TEAM_TABLE {
        if lowered.contains(team) {
            return lookup(sport);
        }
    }

    neutral(SIZE)
}

fn lookup(sport: &str) -> Vec<f32> {
    SPORT_TABLE
        .iter()
        .find(|(name, _)| *name == sport)
        .map(|(_, intensities)| intensities.to_vec())
        .unwrap_or_else(|| neutral(SIZE))
}
