//! Provide multi-layer path accessing support

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::access::accessor::walk;
use crate::access::{AccessError, AccessPath, FromNode, split_path};
use crate::{Node, NodeKind, NodeRef, Object};

// -----------------------------------------------------------------------------
// Error

/// An error returned from a failed path access.
///
/// Only the `try_*` family reports this, the plain accessors collapse every
/// failure into `None`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathAccessError<'a> {
    /// The root object was `None`, which fails for every path.
    #[error("can't access a path of a nil object")]
    NilRoot,

    /// The walk stopped before the last segment.
    /// See [`AccessError`] for details.
    #[error(transparent)]
    AccessError(AccessError<'a>),

    /// The path resolved, but to a node of another kind.
    #[error("can't narrow a node of kind {actual} to {expected}")]
    InvalidDowncast { expected: NodeKind, actual: NodeKind },
}

impl<'a> From<AccessError<'a>> for PathAccessError<'a> {
    #[inline]
    fn from(value: AccessError<'a>) -> Self {
        Self::AccessError(value)
    }
}

// -----------------------------------------------------------------------------
// Resolve

/// Returns the node at `path`, or the root itself for an empty path.
///
/// `None` when `root` is `None` (for every path, the empty one included),
/// when a key is missing, or when a segment before the last does not hold an
/// [`Object`].
///
/// # Examples
///
/// ```
/// use vc_object::{NodeRef, Object};
/// use vc_object::access::resolve;
///
/// let root: Object = [("a", 1_u8)].into_iter().collect();
///
/// assert_eq!(resolve(Some(&root), " .a. "), Some(NodeRef::U8(1)));
/// assert_eq!(resolve(Some(&root), "a.b"), None);
/// assert_eq!(resolve(None, ""), None);
/// ```
#[inline]
pub fn resolve<'r, 'p>(
    root: Option<&'r Object>,
    path: impl AccessPath<'p>,
) -> Option<NodeRef<'r>> {
    try_resolve(root, path).ok()
}

/// Like [`resolve`], but reports why the path did not resolve.
pub fn try_resolve<'r, 'p>(
    root: Option<&'r Object>,
    path: impl AccessPath<'p>,
) -> Result<NodeRef<'r>, PathAccessError<'p>> {
    let root = root.ok_or(PathAccessError::NilRoot)?;
    Ok(walk(root, path.segments())?)
}

// -----------------------------------------------------------------------------
// Reusable Multi-layer accessor

/// Reusable path, a thin wrapper over `Box<[Box<str>]>`.
///
/// Trimming and splitting happen once in [`parse`](Self::parse), later
/// accesses only walk. A `&PathAccessor` is an [`AccessPath`], so it can be
/// passed to every method of [`ObjectPathAccess`].
///
/// # Examples
///
/// ```
/// use vc_object::Object;
/// use vc_object::access::{ObjectPathAccess, PathAccessor};
///
/// let mut user = Object::new();
/// user.insert("name", "Ann");
/// let mut root = Object::new();
/// root.insert("user", user);
///
/// let accessor = PathAccessor::parse(" user.name ");
/// assert_eq!(accessor.len(), 2);
/// assert_eq!(root.string_at(&accessor), Some("Ann"));
/// assert_eq!(accessor.access_as::<&str>(&root), Some("Ann"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathAccessor(Box<[Box<str>]>);

impl PathAccessor {
    /// Trims and splits `path`, storing a copy of every segment.
    pub fn parse(path: &str) -> Self {
        Self(split_path(path).map(Box::<str>::from).collect())
    }

    /// Returns the number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this path addresses the root object.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the node at this path, see [`ObjectPathAccess::value_at`].
    #[inline]
    pub fn access<'r>(&self, root: impl ObjectPathAccess<'r>) -> Option<NodeRef<'r>> {
        root.value_at(self)
    }

    /// Returns the narrowed value at this path, see [`ObjectPathAccess::get_as`].
    #[inline]
    pub fn access_as<'r, T: FromNode<'r>>(&self, root: impl ObjectPathAccess<'r>) -> Option<T> {
        root.get_as::<T>(self)
    }

    /// Appends the segments of `other` to this path.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_object::access::PathAccessor;
    /// let path = PathAccessor::parse("user").concat(PathAccessor::parse("address.city"));
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.to_string(), "user.address.city");
    /// ```
    pub fn concat(self, other: PathAccessor) -> Self {
        let mut segments: Vec<Box<str>> = self.0.into_vec();
        segments.extend(other.0);
        Self(segments.into_boxed_slice())
    }
}

impl From<&str> for PathAccessor {
    #[inline]
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl<'a> AccessPath<'a> for &'a PathAccessor {
    #[inline]
    fn segments(&self) -> impl Iterator<Item = &'a str> {
        let &accessor = self;
        accessor.0.iter().map(|segment| -> &'a str { segment })
    }
}

impl fmt::Display for PathAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.0.iter().enumerate() {
            if index != 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Trait for typed path access

macro_rules! typed_accessors {
    ($($name:ident => $ty:ty, $what:literal;)*) => {
        $(
            #[doc = concat!("Returns the ", $what, " stored at `path`.")]
            ///
            /// `None` if the path does not resolve or the node is of another kind.
            #[inline]
            fn $name<'p>(self, path: impl AccessPath<'p>) -> Option<$ty> {
                self.get_as::<$ty>(path)
            }
        )*
    };
}

/// Typed access to the nodes of an object tree by dotted path.
///
/// Implemented for `&Object`, and for `Option<&Object>` and `&Option<Object>`
/// where `None` stands for a nil object: every access on it fails, including
/// the empty path. Results borrow from the tree for `'r`, not from the value
/// the method was called on.
///
/// Every accessor narrows by exact kind, see [`FromNode`].
///
/// # Examples
///
/// ```
/// use vc_object::{Node, Object};
/// use vc_object::access::{ObjectPathAccess, PathAccessError};
///
/// let user: Object = [("name", Node::from("Ann")), ("age", Node::from(30_i32))]
///     .into_iter()
///     .collect();
/// let root: Object = [("user", user)].into_iter().collect();
///
/// assert_eq!(root.string_at("user.name"), Some("Ann"));
/// assert_eq!(root.i32_at("user.age"), Some(30));
/// assert_eq!(root.i64_at("user.age"), None);
/// assert_eq!(root.object_at("user").map(Object::len), Some(2));
///
/// let err = root.try_get_as::<i64>("user.age").unwrap_err();
/// assert!(matches!(err, PathAccessError::InvalidDowncast { .. }));
///
/// let nil: Option<&Object> = None;
/// assert_eq!(nil.object_at(""), None);
/// ```
pub trait ObjectPathAccess<'r>: Sized {
    /// Returns the object that paths start from, `None` for a nil object.
    fn root_object(self) -> Option<&'r Object>;

    /// Returns the node at `path`, or why it could not be reached.
    #[inline]
    fn try_value_at<'p>(
        self,
        path: impl AccessPath<'p>,
    ) -> Result<NodeRef<'r>, PathAccessError<'p>> {
        try_resolve(self.root_object(), path)
    }

    /// Returns the value of type `T` at `path`, or why it could not be read.
    fn try_get_as<'p, T: FromNode<'r>>(
        self,
        path: impl AccessPath<'p>,
    ) -> Result<T, PathAccessError<'p>> {
        let node = self.try_value_at(path)?;
        T::from_node(node).ok_or(PathAccessError::InvalidDowncast {
            expected: T::KIND,
            actual: node.kind(),
        })
    }

    /// Returns the node at `path`, the root object for an empty path.
    #[inline]
    fn value_at<'p>(self, path: impl AccessPath<'p>) -> Option<NodeRef<'r>> {
        resolve(self.root_object(), path)
    }

    /// Returns the value of type `T` at `path`.
    ///
    /// `None` if the path does not resolve or the node is not exactly a `T`.
    #[inline]
    fn get_as<'p, T: FromNode<'r>>(self, path: impl AccessPath<'p>) -> Option<T> {
        self.value_at(path).and_then(T::from_node)
    }

    typed_accessors! {
        string_at => &'r str, "string";
        bytes_at => &'r [u8], "byte sequence";
        bool_at => bool, "boolean";
        f32_at => f32, "`f32`";
        f64_at => f64, "`f64`";
        i8_at => i8, "`i8`";
        i16_at => i16, "`i16`";
        i32_at => i32, "`i32`";
        i64_at => i64, "`i64`";
        isize_at => isize, "`isize`";
        u8_at => u8, "`u8`";
        u16_at => u16, "`u16`";
        u32_at => u32, "`u32`";
        u64_at => u64, "`u64`";
        usize_at => usize, "`usize`";
        object_at => &'r Object, "nested object";
        object_array_at => &'r [Object], "object array";
        array_at => &'r [Node], "heterogeneous array";
    }
}

impl<'r> ObjectPathAccess<'r> for &'r Object {
    #[inline]
    fn root_object(self) -> Option<&'r Object> {
        Some(self)
    }
}

impl<'r> ObjectPathAccess<'r> for Option<&'r Object> {
    #[inline]
    fn root_object(self) -> Option<&'r Object> {
        self
    }
}

impl<'r> ObjectPathAccess<'r> for &'r Option<Object> {
    #[inline]
    fn root_object(self) -> Option<&'r Object> {
        self.as_ref()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;

    use super::{ObjectPathAccess, PathAccessError, PathAccessor, resolve, try_resolve};
    use crate::access::accessor::walk;
    use crate::access::{AccessErrorKind, split_path};
    use crate::{Node, NodeKind, NodeRef, Object};

    fn user_tree() -> Object {
        let user: Object = [("name", Node::from("Ann")), ("age", Node::from(30_i32))]
            .into_iter()
            .collect();
        [("user", user)].into_iter().collect()
    }

    fn scalar_tree() -> Object {
        let mut object = Object::new();
        object.insert("string", "text");
        object.insert("bytes", vec![1_u8, 2, 3]);
        object.insert("bool", true);
        object.insert("f32", 1.5_f32);
        object.insert("f64", 2.5_f64);
        object.insert("i8", -8_i8);
        object.insert("i16", -16_i16);
        object.insert("i32", -32_i32);
        object.insert("i64", -64_i64);
        object.insert("isize", -1_isize);
        object.insert("u8", 8_u8);
        object.insert("u16", 16_u16);
        object.insert("u32", 32_u32);
        object.insert("u64", 64_u64);
        object.insert("usize", 1_usize);
        object.insert("objects", vec![Object::new(), Object::new()]);
        object.insert("array", vec![Node::from(1_u8), Node::from("x")]);

        let mut root = Object::new();
        root.insert("s", object);
        root
    }

    #[test]
    fn user_scenario() {
        let root = user_tree();

        assert_eq!(root.string_at("user.name"), Some("Ann"));
        assert_eq!(root.i32_at("user.age"), Some(30));
        assert_eq!(root.i64_at("user.age"), None);
        assert_eq!(root.string_at("user.missing"), None);

        let user = root.object_at("user").unwrap();
        let expected: Object = [("name", Node::from("Ann")), ("age", Node::from(30_i32))]
            .into_iter()
            .collect();
        assert_eq!(user, &expected);
    }

    #[test]
    fn every_typed_accessor() {
        let root = scalar_tree();

        assert_eq!(root.string_at("s.string"), Some("text"));
        assert_eq!(root.bytes_at("s.bytes"), Some(&[1_u8, 2, 3][..]));
        assert_eq!(root.bool_at("s.bool"), Some(true));
        assert_eq!(root.f32_at("s.f32"), Some(1.5));
        assert_eq!(root.f64_at("s.f64"), Some(2.5));
        assert_eq!(root.i8_at("s.i8"), Some(-8));
        assert_eq!(root.i16_at("s.i16"), Some(-16));
        assert_eq!(root.i32_at("s.i32"), Some(-32));
        assert_eq!(root.i64_at("s.i64"), Some(-64));
        assert_eq!(root.isize_at("s.isize"), Some(-1));
        assert_eq!(root.u8_at("s.u8"), Some(8));
        assert_eq!(root.u16_at("s.u16"), Some(16));
        assert_eq!(root.u32_at("s.u32"), Some(32));
        assert_eq!(root.u64_at("s.u64"), Some(64));
        assert_eq!(root.usize_at("s.usize"), Some(1));
        assert_eq!(root.object_array_at("s.objects").map(<[_]>::len), Some(2));
        assert_eq!(
            root.array_at("s.array"),
            Some(&[Node::from(1_u8), Node::from("x")][..])
        );
        assert!(root.object_at("s").is_some());
    }

    #[test]
    fn accessors_never_coerce() {
        let root = scalar_tree();

        assert_eq!(root.i64_at("s.i32"), None);
        assert_eq!(root.i32_at("s.i8"), None);
        assert_eq!(root.isize_at("s.i64"), None);
        assert_eq!(root.usize_at("s.u64"), None);
        assert_eq!(root.u8_at("s.i8"), None);
        assert_eq!(root.f64_at("s.f32"), None);
        assert_eq!(root.string_at("s.bytes"), None);
        assert_eq!(root.bytes_at("s.string"), None);
        assert_eq!(root.string_at("s.bool"), None);
        assert_eq!(root.bool_at("s.u8"), None);
        assert_eq!(root.array_at("s.objects"), None);
        assert_eq!(root.object_array_at("s.array"), None);
        assert_eq!(root.object_at("s.array"), None);
    }

    #[test]
    fn non_object_intermediate_fails() {
        let root = scalar_tree();

        assert_eq!(root.value_at("s.string.len"), None);
        assert_eq!(root.u8_at("s.array.0"), None);
        assert_eq!(root.object_at("s.objects.0"), None);
        assert_eq!(root.bool_at("missing.bool"), None);
    }

    #[test]
    fn empty_path_is_root() {
        let root = user_tree();

        for path in ["", "   ", ".", " .. "] {
            match root.value_at(path) {
                Some(NodeRef::Object(object)) => assert!(core::ptr::eq(object, &root)),
                other => panic!("unexpected {other:?} for {path:?}"),
            }
        }
        assert!(root.object_at("").is_some());
        assert_eq!(root.string_at(""), None);
    }

    #[test]
    fn nil_root_never_resolves() {
        let nil: Option<&Object> = None;
        assert_eq!(nil.value_at(""), None);
        assert_eq!(nil.value_at("any.path"), None);
        assert_eq!(nil.object_at(""), None);
        assert_eq!(resolve(None, ""), None);
        assert_eq!(try_resolve(None, "a"), Err(PathAccessError::NilRoot));

        let owned: Option<Object> = None;
        assert_eq!(owned.string_at("user.name"), None);

        let some = Some(user_tree());
        assert_eq!(some.string_at("user.name"), Some("Ann"));
        assert_eq!(some.as_ref().i32_at("user.age"), Some(30));
    }

    #[test]
    fn empty_object_is_not_nil() {
        let empty = Object::new();
        assert!(empty.object_at("").is_some());
        assert_eq!(empty.value_at("a"), None);
    }

    #[test]
    fn trimming_is_transparent() {
        let root = user_tree();
        assert_eq!(root.value_at("  .user.name. "), root.value_at("user.name"));
        assert_eq!(root.string_at("\tuser.name\n"), Some("Ann"));
        assert_eq!(root.string_at("user. name"), None);
    }

    #[test]
    fn segments_are_opaque_keys() {
        let mut inner = Object::new();
        inner.insert("0", "zero");
        inner.insert("", "blank");
        let mut root = Object::new();
        root.insert("items", inner);
        root.insert("a.b", 1_u8);

        assert_eq!(root.string_at("items.0"), Some("zero"));
        assert_eq!(root.string_at("items..x"), None);
        assert_eq!(root.string_at("items. "), None);
        assert_eq!(root.u8_at("a.b"), None);
    }

    #[test]
    fn interior_empty_segment_looks_up_empty_key() {
        let mut inner = Object::new();
        inner.insert("b", 7_u16);
        let mut blank = Object::new();
        blank.insert("", inner);
        let mut root = Object::new();
        root.insert("a", blank);

        assert_eq!(root.u16_at("a..b"), Some(7));
    }

    #[test]
    fn repeated_access_is_stable() {
        let root = user_tree();
        let first = root.value_at("user.age");
        for _ in 0..3 {
            assert_eq!(root.value_at("user.age"), first);
            assert_eq!(root.i32_at("user.age"), Some(30));
        }
        assert_eq!(root, user_tree());
    }

    #[test]
    fn try_variants_report_causes() {
        let root = user_tree();

        assert_eq!(root.try_get_as::<&str>("user.name"), Ok("Ann"));

        match root.try_value_at("user.nope") {
            Err(PathAccessError::AccessError(err)) => {
                assert_eq!(err.kind(), AccessErrorKind::MissingKey);
                assert_eq!(err.segment(), "nope");
                assert_eq!(err.depth(), 1);
            }
            other => panic!("unexpected {other:?}"),
        }

        match root.try_value_at("user.name.first") {
            Err(PathAccessError::AccessError(err)) => {
                assert_eq!(err.kind(), AccessErrorKind::NotAnObject(NodeKind::String));
                assert_eq!(err.segment(), "name");
            }
            other => panic!("unexpected {other:?}"),
        }

        let err = root.try_get_as::<i64>("user.age").unwrap_err();
        assert_eq!(
            err,
            PathAccessError::InvalidDowncast {
                expected: NodeKind::I64,
                actual: NodeKind::I32,
            }
        );
        assert_eq!(format!("{err}"), "can't narrow a node of kind i32 to i64");
    }

    #[test]
    fn walk_errors_convert_with_question_mark() {
        fn walked_len(
            root: &Object,
            path: &'static str,
        ) -> Result<usize, PathAccessError<'static>> {
            walk(root, split_path(path))?;
            Ok(path.len())
        }

        let root = user_tree();
        assert_eq!(walked_len(&root, "user.age"), Ok(8));
        match walked_len(&root, "user.age.years") {
            Err(PathAccessError::AccessError(err)) => {
                assert_eq!(err.kind(), AccessErrorKind::NotAnObject(NodeKind::I32));
                assert_eq!(err.segment(), "age");
                assert_eq!(err.depth(), 1);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            format!("{}", walked_len(&root, "nope").unwrap_err()),
            "missing key at segment `nope` (depth 0)"
        );
    }

    #[test]
    fn results_outlive_the_root_handle() {
        fn name_of<'a>(root: Option<&'a Object>) -> Option<&'a str> {
            root.string_at("user.name")
        }

        fn user_of<'a>(root: &'a Object) -> Option<&'a Object> {
            root.object_at("user")
        }

        fn age_of(root: &Option<Object>) -> Result<i32, PathAccessError<'static>> {
            root.try_get_as::<i32>("user.age")
        }

        let root = user_tree();
        assert_eq!(name_of(Some(&root)), Some("Ann"));
        assert_eq!(name_of(None), None);
        assert_eq!(user_of(&root).map(Object::len), Some(2));
        assert_eq!(age_of(&Some(user_tree())), Ok(30));
        assert_eq!(age_of(&None), Err(PathAccessError::NilRoot));
    }

    #[test]
    fn path_accessor_matches_string_paths() {
        let root = user_tree();

        for path in ["user.name", " .user.age. ", "user", "", "user.missing", "x.y"] {
            let accessor = PathAccessor::parse(path);
            assert_eq!(root.value_at(&accessor), root.value_at(path));
            assert_eq!(accessor.access(&root), root.value_at(path));
        }

        let accessor = PathAccessor::from("user.age");
        assert_eq!(accessor.access_as::<i32>(&root), Some(30));
        assert_eq!(accessor.access_as::<i64>(&root), None);
        assert_eq!(accessor.access_as::<i32>(&None::<Object>), None);
    }

    #[test]
    fn path_accessor_shape() {
        let root = PathAccessor::parse(" . ");
        assert!(root.is_root());
        assert_eq!(root.len(), 0);
        assert_eq!(format!("{root}"), "");

        let path = PathAccessor::parse(".a.b.").concat(PathAccessor::parse("c"));
        assert_eq!(path.len(), 3);
        assert_eq!(format!("{path}"), "a.b.c");
        assert_eq!(path, PathAccessor::parse("a.b.c"));

        let owned = String::from("a.b.c");
        assert_eq!(PathAccessor::parse(&owned), path);
    }
}
