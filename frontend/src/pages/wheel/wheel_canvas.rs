use std::f64::consts::{FRAC_PI_2, PI};

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use shared::constants::{SEGMENT_ARC_DEGREES, SEGMENT_OFFSET_DEGREES, SPIN_DURATION_MS};
use shared::wheel::WHEEL_LABELS;

const SEGMENT_COLORS: [&str; 6] = [
    "#ef4444", // red (NO WIN)
    "#22c55e", // green (WIN)
    "#f97316", // orange (BAD)
    "#06b6d4", // cyan (GOOD)
    "#8b5cf6", // violet (UNLUCKY)
    "#f59e0b", // amber (LUCKY)
];

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    /// Absolute rotation in degrees, applied clockwise.
    pub rotation: u32,
    pub is_spinning: bool,
}

/// The wheel face. The canvas itself is drawn once; spinning is a CSS
/// transform transition on the wrapper, timed to the session's fixed
/// resolution delay, with the pointer fixed outside the rotating element.
#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let context = canvas
                    .get_context("2d")
                    .unwrap()
                    .unwrap()
                    .dyn_into::<CanvasRenderingContext2d>()
                    .unwrap();

                let width = canvas.width() as f64;
                let height = canvas.height() as f64;
                let center_x = width / 2.0;
                let center_y = height / 2.0;
                let radius = width.min(height) / 2.0 - 10.0;

                context.clear_rect(0.0, 0.0, width, height);

                // Segment i covers wheel angles [20 + 60i, 80 + 60i),
                // measured counterclockwise from the pointer at the top, so
                // that after a clockwise rotation R the label under the
                // pointer is exactly resolve_outcome(R % 360)
                for (i, label) in WHEEL_LABELS.iter().enumerate() {
                    let start_deg =
                        (SEGMENT_OFFSET_DEGREES + SEGMENT_ARC_DEGREES * i as u32) as f64;
                    let end_deg = start_deg + SEGMENT_ARC_DEGREES as f64;
                    let arc_start = -FRAC_PI_2 - end_deg.to_radians();
                    let arc_end = -FRAC_PI_2 - start_deg.to_radians();

                    context.begin_path();
                    context.set_fill_style_str(SEGMENT_COLORS[i]);
                    context.move_to(center_x, center_y);
                    let _ = context.arc(center_x, center_y, radius, arc_start, arc_end);
                    context.fill();

                    // Divider between segments
                    context.begin_path();
                    context.set_stroke_style_str("rgba(255, 255, 255, 0.85)");
                    context.set_line_width(2.5);
                    context.move_to(center_x, center_y);
                    context.line_to(
                        center_x + radius * arc_start.cos(),
                        center_y + radius * arc_start.sin(),
                    );
                    context.stroke();

                    // Label along the segment's middle radius
                    let mid = -FRAC_PI_2 - (start_deg + SEGMENT_ARC_DEGREES as f64 / 2.0).to_radians();
                    context.save();
                    let _ = context.translate(center_x, center_y);
                    let _ = context.rotate(mid);
                    let _ = context.translate(radius * 0.6, 0.0);
                    context.set_font("bold 18px 'Segoe UI', Roboto, system-ui, sans-serif");
                    context.set_text_align("center");
                    context.set_text_baseline("middle");
                    context.set_fill_style_str("#ffffff");
                    let _ = context.fill_text(label.display_name(), 0.0, 0.0);
                    context.restore();
                }

                // Hub
                context.begin_path();
                context.set_fill_style_str("#031926");
                let _ = context.arc(center_x, center_y, radius * 0.12, 0.0, 2.0 * PI);
                context.fill();

                // Outer ring
                context.begin_path();
                context.set_stroke_style_str("#031926");
                context.set_line_width(4.0);
                let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
                context.stroke();
            }
            || ()
        });
    }

    let wheel_style = format!(
        "transform: rotate({}deg); transition: transform {}ms cubic-bezier(0.12, 0.8, 0.25, 1);",
        props.rotation, SPIN_DURATION_MS
    );

    html! {
        <div class="relative">
            <div style={wheel_style}>
                <canvas
                    ref={canvas_ref}
                    width="450"
                    height="450"
                    class={crate::styles::CANVAS}
                    style={if props.is_spinning {
                        "filter: drop-shadow(0px 5px 20px rgba(3, 25, 38, 0.4));"
                    } else {
                        "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                    }}
                />
            </div>
            <i class={crate::styles::POINTER}>{"▼"}</i>
        </div>
    }
}
