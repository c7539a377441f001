//! Provide path-based access helpers for object trees.
//!
//! A path is a string of `.`-separated object keys such as
//! `"user.address.city"`. Resolving it walks one [`Object`](crate::Object)
//! per segment and returns the node found under the last one. There are two
//! complementary APIs:
//!
//! - [`ObjectPathAccess`]: typed accessors (`string_at`, `i32_at`,
//!   `object_at`, ...) implemented for `&Object` and for `Option<&Object>` /
//!   `&Option<Object>`, where `None` is a nil object.
//! - [`PathAccessor`]: a pre-split path for lookups that run repeatedly.
//!
//! # Syntax
//!
//! - Leading and trailing `.` and whitespace are removed.
//! - An empty path addresses the root object itself.
//! - Every segment is an opaque key. There is no array indexing and no way
//!   to escape a `.` inside a key.
//!
//! # Failures
//!
//! The plain accessors return `Option`: a missing key, a non-object segment
//! in the middle of the path, a nil root and a node of the wrong kind all
//! give `None`. The `try_*` variants return [`PathAccessError`] instead,
//! which tells these cases apart.
//!
//! # Examples
//!
//! ```
//! use vc_object::{Node, Object};
//! use vc_object::access::{AccessErrorKind, ObjectPathAccess, PathAccessError};
//!
//! let mut address = Object::new();
//! address.insert("city", "Oslo");
//! let mut root = Object::new();
//! root.insert("address", address);
//! root.insert("tags", vec![Node::from("a"), Node::from(1_u8)]);
//!
//! assert_eq!(root.string_at("address.city"), Some("Oslo"));
//! assert_eq!(root.array_at("tags").map(<[_]>::len), Some(2));
//! assert_eq!(root.string_at("tags.0"), None);
//!
//! match root.try_value_at("address.city.name") {
//!     Err(PathAccessError::AccessError(err)) => {
//!         assert_eq!(err.segment(), "city");
//!         assert!(matches!(err.kind(), AccessErrorKind::NotAnObject(_)));
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod narrow;
mod path;
mod path_access;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::{AccessError, AccessErrorKind};
pub use narrow::FromNode;
pub use path::{AccessPath, split_path};
pub use path_access::{ObjectPathAccess, PathAccessError, PathAccessor};
pub use path_access::{resolve, try_resolve};
