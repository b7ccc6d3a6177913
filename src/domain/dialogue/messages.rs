//! Fixed system lines used by the dialogue machine.

use crate::domain::foundation::Pattern;

pub const FRESH_START: &str = "That sounds like a new question, so let's start fresh.";

pub const ABSORBED: &str = "Thanks, I hear you. When you're ready, pick the option that fits best.";

/// Extra intro line naming the detected relationship pattern.
pub fn pattern_line(pattern: Pattern) -> Option<String> {
    match pattern {
        Pattern::Unclear => None,
        other => Some(format!("It sounds like {}.", other.description())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclear_pattern_has_no_line() {
        assert!(pattern_line(Pattern::Unclear).is_none());
    }

    #[test]
    fn triangle_line_names_the_middle() {
        let line = pattern_line(Pattern::Triangle).unwrap();
        assert!(line.starts_with("It sounds like a triangle"));
    }
}
