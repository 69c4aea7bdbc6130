//! Image plot: a fixed-size canvas showing one RGB image per trace.
//!
//! ARCHITECTURE
//! ============
//! [`PlotSpec`] is a plain description (traces, layout, config) built by the
//! viewer state. The component maps it to DOM: a sized container and one
//! `<canvas>` per trace whose intrinsic size equals the image size, so the
//! browser scales pixels up to the layout box.

#[cfg(test)]
#[path = "image_plot_test.rs"]
mod image_plot_test;

use leptos::prelude::*;

use crate::net::payload::FractalImage;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{Clamped, JsCast, JsValue};

/// Logical width of the plot area in CSS pixels.
pub const PLOT_WIDTH: u32 = 800;
/// Logical height of the plot area in CSS pixels.
pub const PLOT_HEIGHT: u32 = 800;

/// How a trace's `z` data is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceKind {
    /// `z` holds RGB pixels.
    #[default]
    Image,
}

impl TraceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
        }
    }
}

/// One plotted data series.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageTrace {
    pub kind: TraceKind,
    pub z: FractalImage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotLayout {
    pub width: u32,
    pub height: u32,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self { width: PLOT_WIDTH, height: PLOT_HEIGHT }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlotConfig {
    /// Shrink with the parent width, keeping the layout aspect ratio.
    pub responsive: bool,
}

/// Everything needed to draw a plot.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSpec {
    pub data: Vec<ImageTrace>,
    pub layout: PlotLayout,
    pub config: PlotConfig,
}

impl PlotSpec {
    /// A single image trace in an 800×800 responsive plot.
    pub fn image(z: FractalImage) -> Self {
        Self {
            data: vec![ImageTrace { kind: TraceKind::Image, z }],
            layout: PlotLayout::default(),
            config: PlotConfig { responsive: true },
        }
    }

    /// Inline CSS for the plot container.
    pub fn container_style(&self) -> String {
        let PlotLayout { width, height } = self.layout;
        if self.config.responsive {
            format!("width: 100%; max-width: {width}px; aspect-ratio: {width} / {height};")
        } else {
            format!("width: {width}px; height: {height}px;")
        }
    }
}

/// Canvas styling: fill the container and keep hard pixel edges when scaled.
const TRACE_STYLE: &str = "display: block; width: 100%; height: 100%; image-rendering: pixelated;";

/// Draws every trace of `spec` inside a sized container.
#[component]
pub fn ImagePlot(spec: PlotSpec) -> impl IntoView {
    let style = spec.container_style();
    let traces = spec.data.into_iter().map(|trace| view! { <TraceCanvas trace/> }).collect_view();

    view! {
        <div class="image-plot" style=style>
            {traces}
        </div>
    }
}

#[component]
fn TraceCanvas(trace: ImageTrace) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let width = trace.z.width().to_string();
    let height = trace.z.height().to_string();
    let kind = trace.kind.as_str();

    #[cfg(feature = "hydrate")]
    {
        let image = trace.z;
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if let Err(err) = draw_image(&canvas, &image) {
                log::warn!("image plot draw failed: {err:?}");
            }
        });
    }

    view! {
        <canvas
            class="image-plot__trace"
            node_ref=canvas_ref
            data-trace-kind=kind
            width=width
            height=height
            style=TRACE_STYLE
        ></canvas>
    }
}

/// Write `image` into `canvas` one canvas pixel per image pixel.
#[cfg(feature = "hydrate")]
fn draw_image(canvas: &web_sys::HtmlCanvasElement, image: &FractalImage) -> Result<(), JsValue> {
    let width = u32::try_from(image.width()).map_err(|_| JsValue::from_str("image too wide"))?;
    let height = u32::try_from(image.height()).map_err(|_| JsValue::from_str("image too tall"))?;
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(JsValue::from)?;

    let rgba = image.to_rgba();
    let data = web_sys::ImageData::new_with_u8_clamped_array_and_sh(Clamped(rgba.as_slice()), width, height)?;
    ctx.put_image_data(&data, 0.0, 0.0)
}
