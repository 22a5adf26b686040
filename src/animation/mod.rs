//! Avatar motion along the roadmap.
//!
//! Timing is external: callers feed elapsed milliseconds into
//! [`avatar::AvatarAnimator::tick`]. Positions are a pure function of a
//! normalized progress value and a curve ([`sampler::position`]).

pub(crate) mod avatar;
pub(crate) mod ease;
pub(crate) mod sampler;
