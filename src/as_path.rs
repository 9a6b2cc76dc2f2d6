use crate::SEPARATOR;

/// The `AsPath` trait allows a type to be used as a key in a `TrieMap`.
///
/// A path is an ordered sequence of segments. Strings are split on
/// [`SEPARATOR`]; slices, arrays and vectors of strings are taken one
/// element per segment. An empty path addresses the root node.
///
/// # Examples
///
/// ```
/// use pathtrie::AsPath;
///
/// let segments: Vec<&str> = "Root|Mails|Secrete".segments().collect();
/// assert_eq!(segments, ["Root", "Mails", "Secrete"]);
///
/// assert_eq!(["Root", "Mails"].to_key(), "Root|Mails");
/// assert_eq!("".segments().count(), 0);
/// ```
pub trait AsPath {
    /// Returns the segments of the path in order.
    fn segments(&self) -> impl Iterator<Item = &str>;

    /// Rebuilds the `|`-joined key for this path.
    fn to_key(&self) -> String {
        let mut key = String::new();
        for (i, segment) in self.segments().enumerate() {
            if i > 0 {
                key.push(SEPARATOR);
            }
            key.push_str(segment);
        }
        key
    }

    /// Returns `true` if every segment is non-empty and free of separators.
    fn is_valid_path(&self) -> bool {
        self.segments().all(is_valid_segment)
    }
}

pub(crate) fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(SEPARATOR)
}

impl AsPath for str {
    fn segments(&self) -> impl Iterator<Item = &str> {
        let path = (!self.is_empty()).then_some(self);
        path.into_iter().flat_map(|path| path.split(SEPARATOR))
    }
}

impl AsPath for String {
    fn segments(&self) -> impl Iterator<Item = &str> {
        AsPath::segments(self.as_str())
    }
}

impl<S: AsRef<str>> AsPath for [S] {
    fn segments(&self) -> impl Iterator<Item = &str> {
        self.iter().map(<S as AsRef<str>>::as_ref)
    }
}

impl<S: AsRef<str>> AsPath for Vec<S> {
    fn segments(&self) -> impl Iterator<Item = &str> {
        AsPath::segments(self.as_slice())
    }
}

impl<const N: usize, S: AsRef<str>> AsPath for [S; N] {
    fn segments(&self) -> impl Iterator<Item = &str> {
        AsPath::segments(self.as_slice())
    }
}

impl<T: AsPath + ?Sized> AsPath for &T {
    fn segments(&self) -> impl Iterator<Item = &str> {
        T::segments(*self)
    }
}
