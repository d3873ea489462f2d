/// Italic inline type with owned delimiter constant.
///
/// Only the underscore form is recognised; a single `*` stays literal.
pub struct Italic;

impl Italic {
    pub const DELIM: &'static str = "_";
}
