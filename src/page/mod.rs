//! The roadmap page: single-threaded controller that owns layout, progress and the
//! avatar, and talks to the outside world through [`notify::Notifier`] and
//! [`navigate::Navigator`].

pub(crate) mod controller;
pub(crate) mod navigate;
pub(crate) mod notify;
pub(crate) mod schedule;
