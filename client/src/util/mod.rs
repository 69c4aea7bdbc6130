//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate logging and component-lifecycle concerns from the
//! viewer logic so that logic can run under plain unit tests.

pub mod diagnostics;
pub mod liveness;
