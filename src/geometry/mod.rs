//! Rounded zig-zag paths between checkpoints.
//!
//! Every generated leg is axis-aligned, so corners are classified by a pair of
//! [`direction::Direction`]s and replaced by quarter-circle arcs. Paths are kept as
//! [`command::PathSegment`] draw lists (exact, SVG-printable) and converted to
//! `kurbo::BezPath` only for sampling.

pub(crate) mod command;
pub(crate) mod corner;
pub(crate) mod direction;
pub(crate) mod zigzag;
