//! Canvas 2D render surface

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

use crate::consts::*;
use crate::platform::RenderSurface;
use crate::sim::MatchState;

const BACKGROUND: &str = "black";
const FOREGROUND: &str = "white";
const CENTRE_LINE: &str = "grey";
const SCORE_FONT: &str = "32px Courier New";

/// Playfield drawn on a `<canvas>` the size of the field
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Create the canvas and append it to `body`
    pub fn new(document: &Document, body: &HtmlElement) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        body.append_child(&canvas)?;

        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Left edge of the field in client coordinates
    pub fn field_left(&self) -> f32 {
        self.canvas.get_bounding_client_rect().left() as f32
    }

    fn draw(&self, state: &MatchState) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let width = FIELD_WIDTH as f64;
        let height = FIELD_HEIGHT as f64;

        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, width, height);

        // Paddles
        ctx.set_fill_style_str(FOREGROUND);
        ctx.fill_rect(
            state.human_paddle_x as f64,
            HUMAN_PADDLE_Y as f64,
            PADDLE_WIDTH as f64,
            PADDLE_HEIGHT as f64,
        );
        ctx.fill_rect(
            state.ai_paddle_x as f64,
            AI_PADDLE_Y as f64,
            PADDLE_WIDTH as f64,
            PADDLE_HEIGHT as f64,
        );

        // Dashed centre line
        ctx.begin_path();
        ctx.set_line_dash(&js_sys::Array::of1(&JsValue::from_f64(4.0)))?;
        ctx.move_to(0.0, height / 2.0);
        ctx.line_to(width, height / 2.0);
        ctx.set_stroke_style_str(CENTRE_LINE);
        ctx.stroke();

        // Ball
        ctx.begin_path();
        ctx.arc(
            state.ball.pos.x as f64,
            state.ball.pos.y as f64,
            state.ball.radius as f64,
            0.0,
            TAU,
        )?;
        ctx.set_fill_style_str(FOREGROUND);
        ctx.fill();

        // Scores, human below the line
        ctx.set_font(SCORE_FONT);
        ctx.fill_text(&state.human_score.to_string(), 20.0, height / 2.0 + 50.0)?;
        ctx.fill_text(&state.ai_score.to_string(), 20.0, height / 2.0 - 30.0)?;

        Ok(())
    }
}

impl RenderSurface for CanvasSurface {
    fn render(&mut self, state: &MatchState) {
        if let Err(err) = self.draw(state) {
            log::warn!("Render error: {:?}", err);
        }
    }
}
