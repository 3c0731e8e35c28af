//! Bridge from the drawing pad's `<canvas>` element to the exporter port.
//!
//! The export path never reads the on-screen canvas directly: the visible pad
//! can be any CSS size, so the pixels are redrawn onto an offscreen canvas at
//! the fixed generation resolution before encoding. A pad with zero recorded
//! strokes exports nothing, which the orchestrator treats as an empty scene.

use chat::sketch::{Sketch, SketchExporter};
use leptos::html::Canvas;
use leptos::prelude::*;

/// Exporter over the studio's drawing pad.
#[derive(Clone, Copy)]
pub struct PadExporter {
    canvas: NodeRef<Canvas>,
    strokes: RwSignal<u32>,
}

impl PadExporter {
    pub fn new(canvas: NodeRef<Canvas>, strokes: RwSignal<u32>) -> Self {
        Self { canvas, strokes }
    }
}

#[cfg(feature = "hydrate")]
impl SketchExporter for PadExporter {
    fn export(&self) -> Option<Sketch> {
        use chat::sketch::SKETCH_SIZE;
        use wasm_bindgen::JsCast;

        if self.strokes.get_untracked() == 0 {
            return None;
        }
        let canvas = self.canvas.get_untracked()?;

        // Redraw onto a white square at the generation resolution, then
        // encode as a data URL.
        let document = web_sys::window()?.document()?;
        let staging = document
            .create_element("canvas")
            .ok()?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .ok()?;
        staging.set_width(SKETCH_SIZE);
        staging.set_height(SKETCH_SIZE);

        let ctx = staging
            .get_context("2d")
            .ok()??
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .ok()?;
        ctx.set_fill_style_str("#ffffff");
        ctx.fill_rect(0.0, 0.0, f64::from(SKETCH_SIZE), f64::from(SKETCH_SIZE));
        ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &canvas,
            0.0,
            0.0,
            f64::from(SKETCH_SIZE),
            f64::from(SKETCH_SIZE),
        )
        .ok()?;

        let data_url = staging.to_data_url().ok()?;
        Sketch::from_data_url(&data_url)
    }
}

// No canvas on the server; exports only happen after hydration.
#[cfg(not(feature = "hydrate"))]
impl SketchExporter for PadExporter {
    fn export(&self) -> Option<Sketch> {
        None
    }
}
