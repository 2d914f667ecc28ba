// src/app/browser_event_manager.rs
//! Attaches the canvas mouse listeners and forwards pointer events to the controller.

use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MouseEvent};

use crate::app::input::ClickClassifier;
use crate::controller::GameController;

type EventClosure = Closure<dyn FnMut(Event)>;

/// Canvas 上の座標。`offset_x/offset_y` は canvas の左上からの位置だよ。
fn pointer_position(event: Event) -> Option<(MouseEvent, f32, f32)> {
    match event.dyn_into::<MouseEvent>() {
        Ok(mouse_event) => {
            let (x, y) = (mouse_event.offset_x() as f32, mouse_event.offset_y() as f32);
            Some((mouse_event, x, y))
        }
        Err(_) => {
            error!("Failed to cast event to MouseEvent");
            None
        }
    }
}

/// `controller` をロックして `f` を呼ぶ。ロックに失敗したらログだけ出す。
fn with_controller(controller_arc: &Arc<Mutex<GameController>>, f: impl FnOnce(&mut GameController)) {
    match controller_arc.lock() {
        Ok(mut controller) => f(&mut controller),
        Err(e) => error!("Failed to lock controller in event listener: {}", e),
    }
}

/// mousedown / mousemove / mouseup のリスナーを canvas に付けて、クロージャを `closures` に保持する。
pub(crate) fn attach_canvas_listeners(
    canvas: &HtmlCanvasElement,
    controller_arc: Arc<Mutex<GameController>>,
    classifier_arc: Arc<Mutex<ClickClassifier>>,
    closures: &Arc<Mutex<Vec<EventClosure>>>,
) -> Result<(), JsValue> {
    // --- MouseDown Listener ---
    let mousedown = {
        let controller_arc = Arc::clone(&controller_arc);
        Closure::wrap(Box::new(move |event: Event| {
            let Some((mouse_event, x, y)) = pointer_position(event) else {
                return;
            };
            let kind = match classifier_arc.lock() {
                Ok(mut classifier) => classifier.classify(mouse_event.time_stamp()),
                Err(e) => {
                    error!("Failed to lock click classifier: {}", e);
                    return;
                }
            };
            debug!("mousedown ({}, {}) {:?}", x, y, kind);
            with_controller(&controller_arc, |controller| controller.handle_pointer_down(x, y, kind));
        }) as Box<dyn FnMut(Event)>)
    };

    // --- MouseMove Listener ---
    let mousemove = {
        let controller_arc = Arc::clone(&controller_arc);
        Closure::wrap(Box::new(move |event: Event| {
            if let Some((_, x, y)) = pointer_position(event) {
                with_controller(&controller_arc, |controller| controller.handle_pointer_move(x, y));
            }
        }) as Box<dyn FnMut(Event)>)
    };

    // --- MouseUp Listener ---
    let mouseup = {
        let controller_arc = Arc::clone(&controller_arc);
        Closure::wrap(Box::new(move |event: Event| {
            if let Some((_, x, y)) = pointer_position(event) {
                debug!("mouseup ({}, {})", x, y);
                with_controller(&controller_arc, |controller| controller.handle_pointer_up(x, y));
            }
        }) as Box<dyn FnMut(Event)>)
    };

    let mut stored = closures
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock event closures: {}", e)))?;
    for (name, closure) in [("mousedown", mousedown), ("mousemove", mousemove), ("mouseup", mouseup)] {
        canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        stored.push(closure);
        debug!("  Attached {} listener.", name);
    }
    Ok(())
}

/// 付けたリスナーを全部外す。
pub(crate) fn detach_canvas_listeners(
    canvas: &HtmlCanvasElement,
    closures: &Arc<Mutex<Vec<EventClosure>>>,
) -> Result<(), JsValue> {
    let mut stored = closures
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock event closures: {}", e)))?;
    for (name, closure) in ["mousedown", "mousemove", "mouseup"].into_iter().zip(stored.drain(..)) {
        canvas.remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    }
    Ok(())
}
