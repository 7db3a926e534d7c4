//! Venue block: prestige indicator plus venue-type keywords.
//!
//! Layout: [prestigious, center_or_arena, stadium, field_or_park].
//! Prestige is membership in a fixed list; non-members sit at the 0.5
//! neutral midpoint rather than 0 so absence is not a penalty.

use super::contains_flag;

const PRESTIGIOUS_VENUES: &[&str] = &[
    "madison square garden",
    "fenway park",
    "wrigley field",
    "yankee stadium",
    "lambeau field",
    "crypto.com arena",
    "soldier field",
];

pub const SIZE: usize = 4;

/// Encode a venue block from the venue name (package side) or the whole
/// query text.
pub fn encode(text: &str) -> Vec<f32> {
    let lowered = text.to_lowercase();

    let prestigious = if PRESTIGIOUS_VENUES
        .iter()
        .any(|venue| lowered.contains(venue))
    {
        1.0
    } else {
        0.5
    };

    let center_or_arena =
        contains_flag(text, "center").max(contains_flag(text, "arena"));
    let stadium = contains_flag(text, "stadium");
    let field_or_park = contains_flag(text, "field").max(contains_flag(text, "park"));

    vec![prestigious, center_or_arena, stadium, field_or_park]
}
