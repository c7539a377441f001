use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::object::{Array, Object, ObjectArray};

// -----------------------------------------------------------------------------
// Node

/// A value stored in an object tree.
///
/// The set of variants is closed: a tree holds exactly these scalars and
/// containers and nothing else. Narrowing a node to a Rust type is an exact
/// variant match, so an [`I32`](Node::I32) is never read back as an `i64`.
///
/// # Examples
///
/// ```
/// use vc_object::{Node, NodeKind};
///
/// let node = Node::from(7_u16);
/// assert_eq!(node.kind(), NodeKind::U16);
/// assert_eq!(node, Node::U16(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    String(String),
    Bytes(Vec<u8>),
    Bool(bool),
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    /// A nested object, the only node that paths can descend into.
    Object(Object),
    /// A homogeneous sequence of objects.
    ObjectArray(ObjectArray),
    /// A heterogeneous sequence of nodes.
    Array(Array),
}

/// The discriminant of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    String,
    Bytes,
    Bool,
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    Object,
    ObjectArray,
    Array,
}

impl NodeKind {
    /// Returns the lowercase name used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Bool => "bool",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::Object => "object",
            Self::ObjectArray => "object array",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for NodeKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// NodeRef

/// A borrowed view of a [`Node`], or of the root [`Object`] of a lookup.
///
/// Path resolution returns this instead of `&Node` because the empty path
/// addresses the root object, which is not stored inside any node.
///
/// Scalars that are `Copy` are carried by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    String(&'a str),
    Bytes(&'a [u8]),
    Bool(bool),
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    Object(&'a Object),
    ObjectArray(&'a [Object]),
    Array(&'a [Node]),
}

impl Node {
    /// Returns the [`NodeKind`] of this node.
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.as_node_ref().kind()
    }

    /// Returns a borrowed view of this node.
    #[inline]
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Self::String(v) => NodeRef::String(v.as_str()),
            Self::Bytes(v) => NodeRef::Bytes(v.as_slice()),
            Self::Bool(v) => NodeRef::Bool(*v),
            Self::F32(v) => NodeRef::F32(*v),
            Self::F64(v) => NodeRef::F64(*v),
            Self::I8(v) => NodeRef::I8(*v),
            Self::I16(v) => NodeRef::I16(*v),
            Self::I32(v) => NodeRef::I32(*v),
            Self::I64(v) => NodeRef::I64(*v),
            Self::Isize(v) => NodeRef::Isize(*v),
            Self::U8(v) => NodeRef::U8(*v),
            Self::U16(v) => NodeRef::U16(*v),
            Self::U32(v) => NodeRef::U32(*v),
            Self::U64(v) => NodeRef::U64(*v),
            Self::Usize(v) => NodeRef::Usize(*v),
            Self::Object(v) => NodeRef::Object(v),
            Self::ObjectArray(v) => NodeRef::ObjectArray(v.as_slice()),
            Self::Array(v) => NodeRef::Array(v.as_slice()),
        }
    }

    /// Returns the nested object if this node is one.
    #[inline]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl<'a> NodeRef<'a> {
    /// Returns the [`NodeKind`] of the viewed node.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::String(_) => NodeKind::String,
            Self::Bytes(_) => NodeKind::Bytes,
            Self::Bool(_) => NodeKind::Bool,
            Self::F32(_) => NodeKind::F32,
            Self::F64(_) => NodeKind::F64,
            Self::I8(_) => NodeKind::I8,
            Self::I16(_) => NodeKind::I16,
            Self::I32(_) => NodeKind::I32,
            Self::I64(_) => NodeKind::I64,
            Self::Isize(_) => NodeKind::Isize,
            Self::U8(_) => NodeKind::U8,
            Self::U16(_) => NodeKind::U16,
            Self::U32(_) => NodeKind::U32,
            Self::U64(_) => NodeKind::U64,
            Self::Usize(_) => NodeKind::Usize,
            Self::Object(_) => NodeKind::Object,
            Self::ObjectArray(_) => NodeKind::ObjectArray,
            Self::Array(_) => NodeKind::Array,
        }
    }

    /// Returns the viewed object if it is one.
    #[inline]
    pub const fn as_object(self) -> Option<&'a Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    #[inline]
    fn from(value: &'a Node) -> Self {
        value.as_node_ref()
    }
}

impl<'a> From<&'a Object> for NodeRef<'a> {
    #[inline]
    fn from(value: &'a Object) -> Self {
        Self::Object(value)
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_value!(
    String => String,
    Vec<u8> => Bytes,
    bool => Bool,
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    Object => Object,
    ObjectArray => ObjectArray,
    Array => Array,
);

impl From<&str> for Node {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<&[u8]> for Node {
    #[inline]
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.into())
    }
}

// -----------------------------------------------------------------------------
// Tests
