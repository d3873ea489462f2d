/// Bold inline type with owned delimiter constant.
pub struct Bold;

impl Bold {
    /// Opens and closes a bold span: `**text**`.
    pub const DELIM: &'static str = "**";
}
