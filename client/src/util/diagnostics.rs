//! Failure reporting for the fractal fetch.
//!
//! In the browser, `log` records go to the devtools console through
//! `console_log` (installed by `hydrate()`). Nothing is shown to the user.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use crate::net::api::FetchError;

/// Receives fetch/parse failures.
pub trait DiagnosticSink {
    fn report(&self, err: &FetchError);
}

/// Writes failures to the `log` facade at error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&self, err: &FetchError) {
        log::error!("{}", failure_message(err));
    }
}

pub(crate) fn failure_message(err: &FetchError) -> String {
    format!("fractal fetch failed: {err}")
}
