//! Static SVG output of a roadmap snapshot.

pub(crate) mod scene;
pub(crate) mod svg;
