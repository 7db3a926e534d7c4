//! Location block: known-city indicators plus regional proximity.
//!
//! The block is one indicator dimension per known city followed by two
//! auxiliary scalars placing the city on a coarse east-west / north-south
//! grid, so two different cities in the same region still score some
//! similarity. Unmatched text yields the neutral midpoint block.

use super::neutral;

/// Known cities with (east_west, north_south) proximity scalars in [0, 1].
/// east_west: 0 = west coast, 1 = east coast. north_south: 0 = south.
const CITY_TABLE: &[(&str, f32, f32)] = &[
    ("new york", 0.90, 0.70),
    ("los angeles", 0.05, 0.35),
    ("chicago", 0.55, 0.75),
    ("boston", 0.95, 0.80),
    ("miami", 0.85, 0.10),
    ("dallas", 0.45, 0.30),
    ("san francisco", 0.02, 0.50),
    ("philadelphia", 0.88, 0.65),
];

/// One indicator per known city + two proximity scalars.
pub const SIZE: usize = CITY_TABLE.len() + 2;

/// Encode a location block from free text.
///
/// Matching is case-insensitive substring, so both a package location of
/// "New York" and a query like "tickets in new york city" resolve to the
/// same block ("encoder alignment" depends on this).
pub fn encode(text: &str) -> Vec<f32> {
    let lowered = text.to_lowercase();

    for (position, (city, east_west, north_south)) in CITY_TABLE.iter().enumerate() {
        if lowered.contains(city) {
            let mut block = vec![0.0; CITY_TABLE.len()];
            block[position] = 1.0;
            block.push(*east_west);
            block.push(*north_south);
            return block;
        }
    }

    neutral(SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city_sets_single_indicator() {
        let block = encode("New York");
        assert_eq!(block.len(), SIZE);
        assert_eq!(block[0], 1.0);
        assert!(block[1..CITY_TABLE.len()].iter().all(|&v| v == 0.0));
        assert_eq!(block[CITY_TABLE.len()], 0.90);
        assert_eq!(block[CITY_TABLE.len() + 1], 0.70);
    }

    #[test]
    fn test_substring_and_case_insensitive_match() {
        let direct = encode("Los Angeles");
        let embedded = encode("courtside seats in LOS ANGELES tonight");
        assert_eq!(direct, embedded);
    }

    #[test]
    fn test_unknown_location_is_neutral() {
        let block = encode("Springfield");
        assert_eq!(block, vec![0.5; SIZE]);
    }

    #[test]
    fn test_first_table_entry_wins_on_multiple_mentions() {
        // Both cities present; table order decides.
        let block = encode("flying from new york to miami");
        assert_eq!(block[0], 1.0);
    }
}
