#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod node;
mod object;

pub mod access;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use node::{Node, NodeKind, NodeRef};
pub use object::{Array, KeyHashState, Object, ObjectArray};
