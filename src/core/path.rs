//! Canonical path composition.

/// Separator between segments of a canonical path.
pub const KEY_DELIMITER: &str = ":";

/// Join segments into a canonical path, outermost first.
///
/// # Examples
///
/// ```rust
/// use flatjson_config::core::combine_path;
///
/// assert_eq!(combine_path(["server", "hosts", "0"]), "server:hosts:0");
/// assert_eq!(combine_path(Vec::<&str>::new()), "");
/// ```
pub fn combine_path<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut path = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            path.push_str(KEY_DELIMITER);
        }
        path.push_str(segment.as_ref());
    }
    path
}

/// Tracks the current descent position during a traversal.
///
/// The rendered path is rebuilt from the segments on every `push` and `pop`,
/// so it can never drift from the stack.
#[derive(Debug, Default)]
pub struct PathComposer {
    segments: Vec<String>,
    current: String,
}

impl PathComposer {
    /// Create an empty composer (renders as the empty path).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a child segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
        self.current = combine_path(&self.segments);
    }

    /// Leave the innermost segment, returning it.
    pub fn pop(&mut self) -> Option<String> {
        let segment = self.segments.pop();
        self.current = combine_path(&self.segments);
        segment
    }

    /// The canonical path of the current position.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Number of segments on the stack.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Whether the composer is at the root.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
