// src/app/renderer.rs
//! Canvas 2D に描く `Renderer` の実装。

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::{trace, warn};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::controller::GameController;
use crate::render::{draw_game, Renderer};

const TABLE_COLOR: &str = "#0b6623";
const EMPTY_ZONE_COLOR: &str = "#d8d8d8";
const CARD_FACE_COLOR: &str = "#ffffff";
const CARD_BACK_COLOR: &str = "#5b3f8c";
const CARD_TEXT_COLOR: &str = "#202020";

pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    images: HashMap<String, HtmlImageElement>,
}

impl CanvasRenderer {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self {
            context,
            images: HashMap::new(),
        }
    }

    /// テクスチャ名 ("AS", "back_purple" など) に画像を登録する。
    pub fn register_texture(&mut self, name: String, image: HtmlImageElement) {
        self.images.insert(name, image);
    }

    /// 画像がまだないときの代わり。白い四角に名前を書く (裏面は塗りつぶし)。
    fn draw_placeholder(&self, texture: &str, x: f64, y: f64, width: f64, height: f64) {
        let ctx = &self.context;
        let is_back = texture.starts_with("back_");
        ctx.set_fill_style_str(if is_back { CARD_BACK_COLOR } else { CARD_FACE_COLOR });
        ctx.fill_rect(x, y, width, height);
        ctx.set_stroke_style_str(CARD_TEXT_COLOR);
        ctx.set_line_width(1.0);
        ctx.stroke_rect(x, y, width, height);
        if !is_back {
            ctx.set_fill_style_str(CARD_TEXT_COLOR);
            ctx.set_font("20px sans-serif");
            if let Err(e) = ctx.fill_text(texture, x + 6.0, y + 24.0) {
                warn!("fill_text failed for {}: {:?}", texture, e);
            }
        }
    }
}

impl Renderer for CanvasRenderer {
    fn draw_texture(&mut self, texture: &str, x: f32, y: f32, width: f32, height: f32) {
        let (x, y, width, height) = (f64::from(x), f64::from(y), f64::from(width), f64::from(height));
        match self.images.get(texture) {
            Some(image) if image.complete() => {
                if let Err(e) = self
                    .context
                    .draw_image_with_html_image_element_and_dw_and_dh(image, x, y, width, height)
                {
                    warn!("draw_image failed for {}: {:?}", texture, e);
                    self.draw_placeholder(texture, x, y, width, height);
                }
            }
            _ => self.draw_placeholder(texture, x, y, width, height),
        }
    }

    fn draw_empty_zone(&mut self, x: f32, y: f32, width: f32, height: f32, thickness: f32) {
        self.context.set_stroke_style_str(EMPTY_ZONE_COLOR);
        self.context.set_line_width(f64::from(thickness));
        self.context
            .stroke_rect(f64::from(x), f64::from(y), f64::from(width), f64::from(height));
    }
}

/// 画面をクリアして1フレーム描く。
pub fn render_game(
    controller_arc: &Arc<Mutex<GameController>>,
    canvas: &HtmlCanvasElement,
    renderer: &mut CanvasRenderer,
) -> Result<(), JsValue> {
    let controller = controller_arc
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock controller: {}", e)))?;

    let (width, height) = (f64::from(canvas.width()), f64::from(canvas.height()));
    renderer.context.set_fill_style_str(TABLE_COLOR);
    renderer.context.fill_rect(0.0, 0.0, width, height);

    draw_game(renderer, &controller);
    trace!("frame rendered (score {})", controller.score());
    Ok(())
}
