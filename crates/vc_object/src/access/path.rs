//! Provide `path` interface for path accessing.

use alloc::string::String;

/// Returns `true` for characters stripped from both ends of a path.
#[inline]
fn is_path_trim(c: char) -> bool {
    c == '.' || c.is_whitespace()
}

/// Splits a dotted path into its segments.
///
/// Surrounding dots and whitespace are removed first. A path that is empty
/// after trimming yields no segments, which addresses the root.
///
/// # Examples
///
/// ```
/// # use vc_object::access::split_path;
/// assert!(split_path(" . a.b .").eq(["a", "b"]));
/// assert!(split_path("a..b").eq(["a", "", "b"]));
/// assert_eq!(split_path(" .. ").count(), 0);
/// ```
pub fn split_path(path: &str) -> impl Iterator<Item = &str> {
    let trimmed = path.trim_matches(is_path_trim);
    (!trimmed.is_empty())
        .then(|| trimmed.split('.'))
        .into_iter()
        .flatten()
}

/// An interface where the type implementing
/// this trait can be considered as a "Path" for path access.
///
/// This crate provides implementations for [`&str`], [`&String`] and
/// [`&PathAccessor`](crate::access::PathAccessor).
///
/// # Default Syntax
///
/// - Segments are separated by `.`, e.g. `user.address.city`.
/// - Leading and trailing `.` and whitespace are ignored.
/// - Every segment is an opaque object key, `items.0` looks up the key `"0"`.
///
/// [`&str`]: str
/// [`&String`]: String
pub trait AccessPath<'a> {
    /// Returns the segments of the path, outermost first.
    ///
    /// An empty iterator addresses the root object.
    fn segments(&self) -> impl Iterator<Item = &'a str>;
}

impl<'a> AccessPath<'a> for &'a str {
    #[inline]
    fn segments(&self) -> impl Iterator<Item = &'a str> {
        let &path = self;
        split_path(path)
    }
}

impl<'a> AccessPath<'a> for &'a String {
    #[inline]
    fn segments(&self) -> impl Iterator<Item = &'a str> {
        let &path = self;
        split_path(path)
    }
}

// -----------------------------------------------------------------------------
// Tests
