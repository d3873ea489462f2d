/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters. They are the fallback for any unit with
/// visible text that no other block opener claims, and keep the unit's full
/// original text, leading and trailing whitespace included.
pub struct Paragraph;

impl Paragraph {
    /// Whether `s` has any visible text.
    pub fn accepts(s: &str) -> bool {
        !s.trim().is_empty()
    }
}
