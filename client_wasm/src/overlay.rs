//! 2D canvas layered over the WebGPU canvas for score and instruction text

use crate::batch::TextItem;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct TextOverlay {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl TextOverlay {
    pub fn new(canvas: &HtmlCanvasElement, font_size: f32) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
            .ok_or_else(|| "Canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context has unexpected type".to_string())?;

        ctx.set_font(&format!("{}px Constantia, serif", font_size));
        ctx.set_text_baseline("top");

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn draw(&self, texts: &[TextItem]) -> Result<(), String> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        for item in texts {
            self.ctx.set_fill_style_str(&item.color.to_css());
            self.ctx
                .fill_text(&item.text, item.pos.x as f64, item.pos.y as f64)
                .map_err(|e| format!("Failed to draw text: {:?}", e))?;
        }
        Ok(())
    }
}
