pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// A fence line is exactly three backticks, optionally followed only by
    /// whitespace. An info string (```` ```rust ````) does not qualify.
    pub fn is_fence(s: &str) -> bool {
        s.strip_prefix(Self::FENCE)
            .is_some_and(|rest| rest.trim().is_empty())
    }
}
