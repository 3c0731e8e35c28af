//! Freehand scribble pad backing the sketch-guided pipeline.
//!
//! Pointer strokes draw directly onto the `<canvas>`; the completed-stroke
//! count lives in a signal owned by the studio page so the export adapter can
//! tell a blank pad from a drawn one. Clearing resets both the pixels and the
//! count.

use chat::sketch::SKETCH_SIZE;
use leptos::html::Canvas;
use leptos::prelude::*;

/// The drawing surface. `strokes` counts completed strokes; zero means the
/// pad is blank.
#[component]
pub fn SketchPad(canvas: NodeRef<Canvas>, strokes: RwSignal<u32>) -> impl IntoView {
    let drawing = RwSignal::new(false);

    let on_pointerdown = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        drawing.set(true);

        #[cfg(feature = "hydrate")]
        if let Some(ctx) = context_2d(canvas) {
            ctx.begin_path();
            ctx.move_to(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        }
    };

    let on_pointermove = move |ev: leptos::ev::PointerEvent| {
        if !drawing.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        if let Some(ctx) = context_2d(canvas) {
            ctx.line_to(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
            ctx.stroke();
        }
    };

    let end_stroke = move || {
        if drawing.get_untracked() {
            drawing.set(false);
            strokes.update(|count| *count += 1);
        }
    };

    let on_clear = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(ctx) = context_2d(canvas) {
            ctx.clear_rect(0.0, 0.0, f64::from(SKETCH_SIZE), f64::from(SKETCH_SIZE));
        }
        strokes.set(0);
    };

    // Stroke style is set once the element exists.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        if let Some(ctx) = context_2d(canvas) {
            ctx.set_stroke_style_str("#1a1a1a");
            ctx.set_line_width(3.0);
            ctx.set_line_cap("round");
        }
    });

    view! {
        <div class="sketch-pad">
            <canvas
                class="sketch-pad__canvas"
                width=SKETCH_SIZE
                height=SKETCH_SIZE
                node_ref=canvas
                on:pointerdown=on_pointerdown
                on:pointermove=on_pointermove
                on:pointerup=move |_| end_stroke()
                on:pointerleave=move |_| end_stroke()
            >
                "Your browser does not support canvas."
            </canvas>
            <button class="btn sketch-pad__clear" on:click=on_clear>
                "Clear"
            </button>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn context_2d(canvas: NodeRef<Canvas>) -> Option<web_sys::CanvasRenderingContext2d> {
    use wasm_bindgen::JsCast;

    canvas
        .get_untracked()?
        .get_context("2d")
        .ok()??
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .ok()
}
