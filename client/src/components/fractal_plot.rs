//! Fractal viewer: fetches the Newton fractal once per mount and plots it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server rendering and the first hydrated frame both show the loading
//! placeholder. The fetch only runs in the browser; its result is dropped if
//! the component has been cleaned up in the meantime.

#[cfg(all(test, feature = "ssr"))]
#[path = "fractal_plot_test.rs"]
mod fractal_plot_test;

use leptos::prelude::*;

use crate::components::image_plot::ImagePlot;
use crate::state::viewer::{LOADING_TEXT, ViewerState};

/// Loading placeholder until the image arrives, then an image plot.
#[component]
pub fn FractalPlot() -> impl IntoView {
    let viewer = RwSignal::new(ViewerState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::HttpFractalSource;
        use crate::state::viewer::load_fractal;
        use crate::util::diagnostics::ConsoleSink;
        use crate::util::liveness::Liveness;

        let liveness = Liveness::new();
        let liveness_task = liveness.clone();
        leptos::task::spawn_local(async move {
            let source = HttpFractalSource::default();
            load_fractal(&source, &ConsoleSink, &liveness_task, move |image| {
                viewer.update(|state| {
                    state.receive(image);
                });
            })
            .await;
        });
        on_cleanup(move || liveness.retire());
    }

    view! { <FractalView viewer/> }
}

/// Placeholder or plot for the given viewer state.
#[component]
pub fn FractalView(viewer: RwSignal<ViewerState>) -> impl IntoView {
    view! {
        <Show
            when=move || viewer.with(|state| !state.is_loading())
            fallback=|| view! { <p class="fractal-plot__loading">{LOADING_TEXT}</p> }
        >
            {move || viewer.with(ViewerState::plot).map(|spec| view! { <ImagePlot spec/> })}
        </Show>
    }
}
