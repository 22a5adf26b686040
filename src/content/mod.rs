//! Checkpoint content, navigation targets and the lesson detail view.

pub(crate) mod catalog;
pub(crate) mod lesson;
pub(crate) mod route;
