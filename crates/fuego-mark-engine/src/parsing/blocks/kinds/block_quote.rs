/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not in the classifier.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, marker plus the mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Strips the blockquote prefix, returning the quoted content.
    ///
    /// Only a single level is recognised; `> > x` quotes the text `> x`.
    pub fn strip_prefix(s: &str) -> Option<&str> {
        s.strip_prefix(Self::PREFIX)
    }
}
