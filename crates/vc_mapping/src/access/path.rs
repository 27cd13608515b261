use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::{fmt, str::FromStr};

// -----------------------------------------------------------------------------
// ParseError

/// An error returned when a dotted path string is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset of the problem in `path`.
    pub offset: usize,
    /// The path being parsed.
    pub path: String,
    /// The underlying error.
    pub error: &'static str,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Encountered an error at offset {} while parsing `{}`: {}",
            self.offset, self.path, self.error,
        )
    }
}

impl core::error::Error for ParseError {}

// -----------------------------------------------------------------------------
// FieldPath

/// A sequence of field names leading from a root value to a nested field.
///
/// The text form joins the names with `.`, e.g. `job.car.make`. The empty path
/// names the root value itself.
///
/// # Examples
///
/// ```
/// use vc_mapping::access::FieldPath;
///
/// let mut path = FieldPath::parse("car.make").unwrap();
/// path.prepend("job");
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "job.car.make");
/// assert!(FieldPath::parse("job..make").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Cow<'static, str>>,
}

impl FieldPath {
    /// Creates an empty path.
    #[inline]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parses a dotted path, copying each segment.
    ///
    /// The empty string yields the empty path. Empty segments are rejected.
    pub fn parse(path: &str) -> Result<Self, ParseError> {
        if path.is_empty() {
            return Ok(Self::new());
        }

        let mut segments = Vec::new();
        let mut offset = 0;
        for segment in path.split('.') {
            if segment.is_empty() {
                return Err(ParseError {
                    offset,
                    path: path.into(),
                    error: "empty field name",
                });
            }
            segments.push(Cow::Owned(segment.into()));
            offset += segment.len() + 1;
        }

        Ok(Self { segments })
    }

    /// Appends a segment at the end.
    #[inline]
    pub fn push(&mut self, segment: impl Into<Cow<'static, str>>) {
        self.segments.push(segment.into());
    }

    /// Inserts a segment at the front.
    #[inline]
    pub fn prepend(&mut self, segment: impl Into<Cow<'static, str>>) {
        self.segments.insert(0, segment.into());
    }

    /// Returns an iterator over the segments, root first.
    #[inline]
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.segments.iter().map(AsRef::as_ref)
    }

    /// Returns the number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path names the root value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.segments();
        if let Some(first) = iter.next() {
            f.write_str(first)?;
        }
        for segment in iter {
            f.write_str(".")?;
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// -----------------------------------------------------------------------------
// AccessPath

/// Something usable as a path for [`PathAccess`](crate::access::PathAccess).
///
/// Implemented for `&str` (parsed on use) and `&FieldPath`.
pub trait AccessPath<'a> {
    /// Returns the parsed path.
    fn to_field_path(self) -> Result<Cow<'a, FieldPath>, ParseError>;
}

impl<'a> AccessPath<'a> for &'a str {
    #[inline]
    fn to_field_path(self) -> Result<Cow<'a, FieldPath>, ParseError> {
        FieldPath::parse(self).map(Cow::Owned)
    }
}

impl<'a> AccessPath<'a> for &'a String {
    #[inline]
    fn to_field_path(self) -> Result<Cow<'a, FieldPath>, ParseError> {
        FieldPath::parse(self).map(Cow::Owned)
    }
}

impl<'a> AccessPath<'a> for &'a FieldPath {
    #[inline]
    fn to_field_path(self) -> Result<Cow<'a, FieldPath>, ParseError> {
        Ok(Cow::Borrowed(self))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::FieldPath;

    #[test]
    fn parse_and_display() {
        let path: FieldPath = "job.car.make".parse().unwrap();
        assert_eq!(path.segments().collect::<alloc::vec::Vec<_>>(), ["job", "car", "make"]);
        assert_eq!(path.to_string(), "job.car.make");

        assert!(FieldPath::parse("").unwrap().is_empty());
        assert_eq!(FieldPath::new().to_string(), "");
    }

    #[test]
    fn parse_error_offset() {
        let err = FieldPath::parse("job..make").unwrap_err();
        assert_eq!(err.offset, 4);

        let err = FieldPath::parse(".job").unwrap_err();
        assert_eq!(err.offset, 0);

        let err = FieldPath::parse("job.").unwrap_err();
        assert_eq!(err.offset, 4);
    }

    #[test]
    fn borrowed_and_owned_segments_compare_equal() {
        let mut built = FieldPath::new();
        built.push("car");
        built.push("make");
        assert_eq!(built, FieldPath::parse("car.make").unwrap());
    }
}
