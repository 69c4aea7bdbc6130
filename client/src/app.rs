//! Root application component and SSR document shell.

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::fractal_plot::FractalPlot;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Holds no state; the single route hosts the fractal viewer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Newton Fractal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=FractalPage/>
            </Routes>
        </Router>
    }
}

/// Page scaffolding around the viewer.
#[component]
fn FractalPage() -> impl IntoView {
    view! {
        <div class="App">
            <header class="App-header">
                <FractalPlot/>
            </header>
        </div>
    }
}
