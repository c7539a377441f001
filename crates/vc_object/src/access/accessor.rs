//! Provide the object walk behind every path access.

use thiserror::Error;

use crate::{Node, NodeKind, NodeRef, Object};

// -----------------------------------------------------------------------------
// Error

/// The kind of [`AccessError`], along with some kind-specific information.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessErrorKind {
    #[error("missing key")]
    MissingKey,

    #[error("expected an object to descend into, found {0}")]
    NotAnObject(NodeKind),
}

/// An error originating from a single segment of a path walk.
///
/// Use the `Display` impl of this type to get information on the error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at segment `{segment}` (depth {depth})")]
pub struct AccessError<'a> {
    kind: AccessErrorKind,
    segment: &'a str,
    depth: usize,
}

impl<'a> AccessError<'a> {
    /// Returns the kind of this error.
    #[inline]
    pub const fn kind(&self) -> AccessErrorKind {
        self.kind
    }

    /// Returns the segment that could not be walked.
    #[inline]
    pub const fn segment(&self) -> &'a str {
        self.segment
    }

    /// Returns the zero-based position of [`segment`](Self::segment) in the path.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}

// -----------------------------------------------------------------------------
// Walk

/// Walks `segments` down from `root`.
///
/// Every segment but the last must name an [`Object`], the last one may name
/// any node. No segments at all yields `root` itself.
pub(crate) fn walk<'r, 'p>(
    root: &'r Object,
    segments: impl Iterator<Item = &'p str>,
) -> Result<NodeRef<'r>, AccessError<'p>> {
    let mut current = root;
    let mut segments = segments.enumerate().peekable();

    while let Some((depth, segment)) = segments.next() {
        let error = |kind| AccessError {
            kind,
            segment,
            depth,
        };

        let node = current
            .get(segment)
            .ok_or_else(|| error(AccessErrorKind::MissingKey))?;

        if segments.peek().is_none() {
            return Ok(node.as_node_ref());
        }

        current = match node {
            Node::Object(object) => object,
            other => return Err(error(AccessErrorKind::NotAnObject(other.kind()))),
        };
    }

    Ok(NodeRef::Object(current))
}

// -----------------------------------------------------------------------------
// Tests
