//! Fractal viewer state and its fetch lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `FractalPlot` owns one `RwSignal<ViewerState>` and runs [`load_fractal`]
//! once per mount. The viewer starts `Loading` and becomes `Loaded` at most
//! once; there is no error state.
//!
//! TRADE-OFFS
//! ==========
//! A failed fetch is reported to the diagnostic sink and otherwise ignored, so
//! the placeholder stays up indefinitely. There is no retry.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::components::image_plot::PlotSpec;
use crate::net::api::FractalSource;
use crate::net::payload::FractalImage;
use crate::util::diagnostics::DiagnosticSink;
use crate::util::liveness::Liveness;

/// Placeholder shown until the image arrives.
pub const LOADING_TEXT: &str = "Loading fractal...";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewerState {
    #[default]
    Loading,
    Loaded(FractalImage),
}

impl ViewerState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn image(&self) -> Option<&FractalImage> {
        match self {
            Self::Loading => None,
            Self::Loaded(image) => Some(image),
        }
    }

    /// Move from `Loading` to `Loaded`. Returns `false` (and keeps the
    /// current image) if already loaded.
    pub fn receive(&mut self, image: FractalImage) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = Self::Loaded(image);
        true
    }

    /// Plot for the current state; `None` while loading.
    pub fn plot(&self) -> Option<PlotSpec> {
        self.image().cloned().map(PlotSpec::image)
    }
}

/// How a [`load_fractal`] run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The image was handed to `commit`.
    Loaded,
    /// The fetch failed and was reported.
    Failed,
    /// The view was retired before the fetch resolved; the result was dropped.
    Abandoned,
}

/// Fetch the image once and deliver it to `commit` if the view is still mounted.
pub async fn load_fractal<S, D, F>(source: &S, sink: &D, liveness: &Liveness, commit: F) -> LoadOutcome
where
    S: FractalSource,
    D: DiagnosticSink,
    F: FnOnce(FractalImage),
{
    let result = source.fetch().await;

    if !liveness.is_alive() {
        log::debug!("fractal viewer unmounted before fetch resolved; dropping result");
        return LoadOutcome::Abandoned;
    }

    match result {
        Ok(image) => {
            log::debug!("fractal loaded: {}x{}", image.width(), image.height());
            commit(image);
            LoadOutcome::Loaded
        }
        Err(err) => {
            sink.report(&err);
            LoadOutcome::Failed
        }
    }
}
