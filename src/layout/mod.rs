//! Checkpoint placement from container width and device class.

pub(crate) mod placement;
