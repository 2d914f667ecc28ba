// src/app/game_app.rs

use std::sync::{Arc, Mutex};

use log::{error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, HtmlImageElement};

use crate::app::browser_event_manager;
use crate::app::input::ClickClassifier;
use crate::app::renderer::{self, CanvasRenderer};
use crate::app::state_getter;
use crate::app::storage;
use crate::config::game_config::GameConfig;
use crate::controller::GameController;
use crate::high_score::{HighScore, HighScoreTable};

// --- ブラウザから見えるゲーム本体 ---
#[wasm_bindgen]
pub struct GameApp {
    controller: Arc<Mutex<GameController>>,
    // ダブルクリック判定。mousedown のクロージャと共有する
    classifier: Arc<Mutex<ClickClassifier>>,
    high_scores: HighScoreTable,
    // イベントリスナーのクロージャ。GameApp が生きている間ずっと持っておく
    event_closures: Arc<Mutex<Vec<Closure<dyn FnMut(Event)>>>>,
    canvas: HtmlCanvasElement,
    renderer: CanvasRenderer,
    // このゲームのスコアをもうハイスコア表に記録したか
    recorded_win: bool,
}

#[wasm_bindgen]
impl GameApp {
    /// `canvas_id` の canvas に描くゲームを作る。`config_json` を省略するとデフォルト設定。
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<GameApp, JsValue> {
        info!("GameApp: Initializing...");
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => GameConfig::default(),
        };

        let window = web_sys::window().ok_or("Failed to get window")?;
        let document = window.document().ok_or("Failed to get document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("Canvas element with id '{}' not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Element is not an HtmlCanvasElement"))?;
        canvas.set_width(config.window_width as u32);
        canvas.set_height(config.window_height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Context is not CanvasRenderingContext2d"))?;

        let classifier = Arc::new(Mutex::new(ClickClassifier::new(config.double_click_ms)));
        let controller = Arc::new(Mutex::new(GameController::new(config)));
        let event_closures = Arc::new(Mutex::new(Vec::new()));

        browser_event_manager::attach_canvas_listeners(
            &canvas,
            Arc::clone(&controller),
            Arc::clone(&classifier),
            &event_closures,
        )?;

        let high_scores = storage::load_high_scores();
        info!("GameApp: Initialized ({} high score(s) loaded).", high_scores.entries().len());

        Ok(Self {
            controller,
            classifier,
            high_scores,
            event_closures,
            canvas,
            renderer: CanvasRenderer::new(context),
            recorded_win: false,
        })
    }

    /// 配り直して最初から。
    pub fn new_game(&mut self) -> Result<(), JsValue> {
        let threshold_ms = {
            let mut controller = self.lock_controller()?;
            controller.new_game();
            controller.config().double_click_ms
        };
        self.recorded_win = false;
        match self.classifier.lock() {
            Ok(mut classifier) => *classifier = ClickClassifier::new(threshold_ms),
            Err(e) => error!("Failed to lock click classifier: {}", e),
        }
        Ok(())
    }

    /// 1フレーム進める。`dt` は前のフレームからの秒数。
    /// クリアした瞬間に一度だけハイスコアを記録するよ。
    pub fn tick(&mut self, dt: f32) -> Result<(), JsValue> {
        let finished_score = {
            let mut controller = self.lock_controller()?;
            controller.update(dt);
            controller.game_over().then(|| controller.score())
        };

        if let (Some(score), false) = (finished_score, self.recorded_win) {
            self.recorded_win = true;
            let date = String::from(js_sys::Date::new_0().to_iso_string());
            if self.high_scores.record(HighScore::new(score, date)) {
                info!("🏆 ハイスコア更新！ {}", score);
                if let Err(e) = storage::save_high_scores(&self.high_scores) {
                    warn!("ハイスコアを保存できませんでした: {:?}", e);
                }
            }
        }
        Ok(())
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        renderer::render_game(&self.controller, &self.canvas, &mut self.renderer)
    }

    /// 盤面を JSON で返す。
    pub fn get_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_state_json(&self.controller)
    }

    /// カード画像を登録する。名前は "AS", "10H", "back_purple" など。
    pub fn register_texture(&mut self, name: String, image: HtmlImageElement) {
        self.renderer.register_texture(name, image);
    }

    pub fn request_auto_win(&self) -> Result<bool, JsValue> {
        Ok(self.lock_controller()?.request_auto_win())
    }

    pub fn score(&self) -> Result<u32, JsValue> {
        Ok(self.lock_controller()?.score())
    }

    pub fn game_over(&self) -> Result<bool, JsValue> {
        Ok(self.lock_controller()?.game_over())
    }

    /// ハイスコア表を `score,date` の行で返す。
    pub fn high_scores_text(&self) -> String {
        self.high_scores.to_text()
    }

    /// リスナーを外す。JS 側で canvas を捨てる前に呼んでね。
    pub fn detach_listeners(&self) -> Result<(), JsValue> {
        browser_event_manager::detach_canvas_listeners(&self.canvas, &self.event_closures)
    }
}

impl GameApp {
    fn lock_controller(&self) -> Result<std::sync::MutexGuard<'_, GameController>, JsValue> {
        self.controller.lock().map_err(|e| {
            let error_msg = format!("Failed to lock controller: {}", e);
            error!("{}", error_msg);
            JsValue::from_str(&error_msg)
        })
    }
}
