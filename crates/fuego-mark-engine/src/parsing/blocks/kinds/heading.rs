use crate::model::HeadingLevel;

/// ATX heading block type with owned prefix constants.
///
/// Only levels 1 to 3 are recognised. Prefixes must be tried longest first:
/// `#` is a prefix of `##` and `###`, so testing it first would turn
/// `### Title` into a level 1 heading with `## Title` as content.
pub struct Heading;

impl Heading {
    pub const H1: &'static str = "# ";
    pub const H2: &'static str = "## ";
    pub const H3: &'static str = "### ";

    /// Prefixes in match order (longest first) with their levels.
    pub const PREFIXES: [(&'static str, HeadingLevel); 3] = [
        (Self::H3, HeadingLevel::H3),
        (Self::H2, HeadingLevel::H2),
        (Self::H1, HeadingLevel::H1),
    ];

    pub fn prefix(level: HeadingLevel) -> &'static str {
        match level {
            HeadingLevel::H1 => Self::H1,
            HeadingLevel::H2 => Self::H2,
            HeadingLevel::H3 => Self::H3,
        }
    }

    /// Strips a heading prefix, returning the level and remaining content.
    pub fn strip_prefix(s: &str) -> Option<(HeadingLevel, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, level)| s.strip_prefix(prefix).map(|rest| (*level, rest)))
    }
}
