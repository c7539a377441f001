use crate::{Node, NodeKind, NodeRef, Object};

/// Exact narrowing of a [`NodeRef`] to a Rust type.
///
/// Narrowing never converts: a node narrows to `T` only when its variant is
/// the one `T` is stored as. There is no widening between integer widths, no
/// float/integer crossover and no parsing of strings.
///
/// # Examples
///
/// ```
/// use vc_object::NodeRef;
/// use vc_object::access::FromNode;
///
/// assert_eq!(i32::from_node(NodeRef::I32(30)), Some(30));
/// assert_eq!(i64::from_node(NodeRef::I32(30)), None);
/// assert_eq!(<&str>::from_node(NodeRef::String("Ann")), Some("Ann"));
/// ```
pub trait FromNode<'a>: Sized {
    /// The only [`NodeKind`] this type narrows from.
    const KIND: NodeKind;

    /// Returns the value if `node` is exactly of kind [`KIND`](Self::KIND).
    fn from_node(node: NodeRef<'a>) -> Option<Self>;
}

macro_rules! impl_from_node {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> FromNode<'a> for $ty {
                const KIND: NodeKind = NodeKind::$variant;

                #[inline]
                fn from_node(node: NodeRef<'a>) -> Option<Self> {
                    match node {
                        NodeRef::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_node!(
    &'a str => String,
    &'a [u8] => Bytes,
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
    &'a Object => Object,
    &'a [Object] => ObjectArray,
    &'a [Node] => Array,
);

// -----------------------------------------------------------------------------
// Tests
