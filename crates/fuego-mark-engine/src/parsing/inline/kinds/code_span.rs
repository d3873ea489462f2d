/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": once created, no inline pass looks inside
/// them again.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const DELIM: &'static str = "`";
}
