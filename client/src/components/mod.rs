//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fractal_plot` owns the fetch lifecycle and chooses between the loading
//! placeholder and `image_plot`, which draws pixels onto a canvas.

pub mod fractal_plot;
pub mod image_plot;
