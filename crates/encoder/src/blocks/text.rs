//! Descriptive-keyword and seating blocks.
//!
//! Both are plain indicator blocks over fixed keyword lists, checked by
//! case-insensitive substring against a description, a seating category,
//! or a whole query.

use super::contains_flag;

/// Fixed description keywords, in block order.
const KEYWORDS: &[&str] = &[
    "luxury",
    "premium",
    "exclusive",
    "family",
    "group",
    "corporate",
    "special",
];

/// Seating keyword groups, in block order. Any word in a group sets the
/// group's indicator.
const SEATING_GROUPS: &[&[&str]] = &[
    &["floor", "court"],
    &["lower"],
    &["upper"],
    &["suite", "box"],
    &["club"],
];

pub const KEYWORDS_SIZE: usize = KEYWORDS.len();
pub const SEATING_SIZE: usize = SEATING_GROUPS.len();

/// One indicator per description keyword.
pub fn encode_keywords(text: &str) -> Vec<f32> {
    KEYWORDS
        .iter()
        .map(|keyword| contains_flag(text, keyword))
        .collect()
}

/// One indicator per seating keyword group.
pub fn encode_seating(text: &str) -> Vec<f32> {
    SEATING_GROUPS
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|word| contains_flag(text, word))
                .fold(0.0, f32::max)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_indicators() {
        let block = encode_keywords("Exclusive LUXURY box for corporate outings");
        assert_eq!(block, vec![1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_no_keywords() {
        assert_eq!(encode_keywords("plain seats"), vec![0.0; KEYWORDS_SIZE]);
    }

    #[test]
    fn test_seating_groups() {
        assert_eq!(
            encode_seating("Courtside Floor"),
            vec![1.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(
            encode_seating("Luxury Suite with club access"),
            vec![0.0, 0.0, 0.0, 1.0, 1.0]
        );
        assert_eq!(
            encode_seating("Lower Bowl"),
            vec![0.0, 1.0, 0.0, 0.0, 0.0]
        );
    }
}
