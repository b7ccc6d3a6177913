//! Relationship pattern sub-classification.

use super::tables::PatternMarkers;
use crate::domain::foundation::Pattern;

/// Tags a relationship utterance with an interpersonal pattern.
///
/// The triangle is checked first: an explicit "caught in the middle" phrase,
/// or two role mentions plus a connector ("my mother and my husband",
/// "between my sister and me"). The remaining patterns follow the table
/// order. Nothing matching yields [`Pattern::Unclear`].
pub fn classify_pattern(markers: &PatternMarkers, normalized: &str) -> Pattern {
    if is_triangle(markers, normalized) {
        return Pattern::Triangle;
    }

    markers
        .ordered
        .iter()
        .find(|entry| entry.keywords.matches(normalized))
        .map(|entry| entry.pattern)
        .unwrap_or(Pattern::Unclear)
}

fn is_triangle(markers: &PatternMarkers, normalized: &str) -> bool {
    let triangle = &markers.triangle;
    if triangle.phrases.matches(normalized) {
        return true;
    }
    triangle.connectors.matches(normalized) && triangle.roles.count_mentions(normalized) >= 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lexicon::KeywordTables;

    fn pattern_of(text: &str) -> Pattern {
        let tables = KeywordTables::embedded().unwrap();
        classify_pattern(&tables.patterns, text)
    }

    #[test]
    fn two_roles_joined_by_and_is_a_triangle() {
        assert_eq!(
            pattern_of("my mother and husband argued at breakfast"),
            Pattern::Triangle
        );
    }

    #[test]
    fn between_counts_as_connector() {
        assert_eq!(
            pattern_of("it's always between my dad and my sister"),
            Pattern::Triangle
        );
    }

    #[test]
    fn single_role_is_not_a_triangle() {
        assert_ne!(pattern_of("my mother and i argued"), Pattern::Triangle);
    }

    #[test]
    fn compound_role_counts_once() {
        assert_ne!(pattern_of("my mother-in-law and i"), Pattern::Triangle);
    }

    #[test]
    fn middle_phrase_alone_is_a_triangle() {
        assert_eq!(pattern_of("i feel stuck in the middle"), Pattern::Triangle);
    }

    #[test]
    fn triangle_beats_truth_distortion() {
        assert_eq!(
            pattern_of("my wife and my mom both say i'm lying"),
            Pattern::Triangle
        );
    }

    #[test]
    fn truth_distortion_beats_boundary() {
        assert_eq!(
            pattern_of("he checks my phone and then says it never happened"),
            Pattern::TruthDistortion
        );
    }

    #[test]
    fn boundary_markers() {
        assert_eq!(pattern_of("she reads my messages"), Pattern::Boundary);
    }

    #[test]
    fn fair_share_markers() {
        assert_eq!(pattern_of("i do everything at home"), Pattern::FairShare);
    }

    #[test]
    fn overload_markers() {
        assert_eq!(pattern_of("he just shuts down"), Pattern::Overload);
    }

    #[test]
    fn nothing_matching_is_unclear() {
        assert_eq!(pattern_of("my partner seems distant"), Pattern::Unclear);
    }
}
