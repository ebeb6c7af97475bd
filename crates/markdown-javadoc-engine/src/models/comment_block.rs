/// A legacy `/** ... */` documentation comment located in a file's text.
///
/// `start..end` covers the whole comment including both delimiters, `inner` is
/// exactly the text between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentBlock<'a> {
    start: usize,
    end: usize,
    inner: &'a str,
}

impl<'a> CommentBlock<'a> {
    pub fn new(start: usize, end: usize, inner: &'a str) -> Self {
        Self { start, end, inner }
    }

    /// Byte offset of the start delimiter
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the end delimiter
    pub fn end(&self) -> usize {
        self.end
    }

    /// Raw text between the delimiters
    pub fn inner(&self) -> &'a str {
        self.inner
    }
}
