//! Client-side state modules.

pub mod viewer;
