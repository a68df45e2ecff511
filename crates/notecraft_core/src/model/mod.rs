//! Content tree model for note bodies.
//!
//! # Responsibility
//! - Define the node tree produced by the block scanner and consumed by
//!   renderers and the serializer.
//! - Validate trees that arrive from outside the parser (structured edits).
//!
//! # Invariants
//! - Nodes are plain values; a tree is never mutated after construction.
//! - Raw note text stays the source of truth, the tree is always derived.

pub mod node;
