// src/app/state_getter.rs
//! Gets the current game state from the controller and converts it to JSON.

use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::JsValue;

use crate::controller::GameController;

/// 盤面の状態を JSON 文字列として返します。
pub fn get_state_json(controller_arc: &Arc<Mutex<GameController>>) -> Result<JsValue, JsValue> {
    let controller = controller_arc.lock().map_err(|e| {
        let error_msg = format!("Failed to lock controller for getting state: {}", e);
        error!("{}", error_msg);
        JsValue::from_str(&error_msg)
    })?;

    let snapshot = controller.snapshot();
    match snapshot.to_json() {
        Ok(json_string) => {
            debug!("Serialized board state ({} bytes)", json_string.len());
            Ok(JsValue::from_str(&json_string))
        }
        Err(e) => {
            let error_msg = format!("Failed to serialize board state: {}", e);
            error!("{}", error_msg);
            Err(JsValue::from_str(&error_msg))
        }
    }
}
