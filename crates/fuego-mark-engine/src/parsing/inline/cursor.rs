/// A cursor over a text node for delimiter scanning.
///
/// Positions are byte offsets. Delimiters are ASCII, so every offset the
/// cursor stops at is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Unconsumed remainder.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Offset of the next occurrence of `pat`, relative to the cursor.
    pub fn find(&self, pat: &str) -> Option<usize> {
        self.rest().find(pat)
    }

    /// Consumes and returns the next `n` bytes (clamped to the end).
    pub fn take(&mut self, n: usize) -> &'a str {
        let rest = self.rest();
        let n = n.min(rest.len());
        self.i += n;
        &rest[..n]
    }

    /// Consumes everything that is left.
    pub fn take_rest(&mut self) -> &'a str {
        let rest = self.rest();
        self.i = self.s.len();
        rest
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
