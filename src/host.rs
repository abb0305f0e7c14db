//! DOM wiring between the page and the imperative `canvas::Engine`.
//!
//! All handlers and the frame callback run on the browser's single event
//! loop, so the shared `Rc<RefCell<Engine>>` is never borrowed re-entrantly.
//! Listener closures are leaked on purpose: they live as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use canvas::config::EditorConfig;
use canvas::engine::{Action, Engine};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, DragEvent, Event, EventTarget, FileList, HtmlCanvasElement, MouseEvent, Window};

use crate::error::{HostError, describe_js};
use crate::loader;
use crate::pointer::mouse_point;

type SharedEngine = Rc<RefCell<Engine>>;

/// The first `<canvas>` in the document.
///
/// # Errors
///
/// Returns [`HostError::CanvasNotFound`] if there is none.
pub fn find_canvas(document: &Document) -> Result<HtmlCanvasElement, HostError> {
    document
        .query_selector("canvas")?
        .ok_or(HostError::CanvasNotFound)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| HostError::CanvasNotFound)
}

/// Bind an engine to `canvas`, register input listeners, and start the render loop.
///
/// # Errors
///
/// Fails if the canvas has no 2D context or a listener cannot be registered.
pub fn mount(window: &Window, canvas: HtmlCanvasElement, config: EditorConfig) -> Result<SharedEngine, HostError> {
    let engine: SharedEngine = Rc::new(RefCell::new(Engine::new(canvas.clone(), config)?));
    let target: &EventTarget = canvas.as_ref();

    listen(target, "dragover", {
        let engine = Rc::clone(&engine);
        move |ev: DragEvent| {
            ev.stop_propagation();
            ev.prevent_default();
            if let Some(transfer) = ev.data_transfer() {
                transfer.set_drop_effect(engine.borrow().on_drag_over().as_str());
            }
        }
    })?;

    listen(target, "drop", {
        let engine = Rc::clone(&engine);
        move |ev: DragEvent| {
            ev.stop_propagation();
            ev.prevent_default();
            let files = ev.data_transfer().and_then(|transfer| transfer.files());
            let count = files.as_ref().map_or(0, FileList::length);
            let actions = engine.borrow_mut().on_drop(usize::try_from(count).unwrap_or_default());
            for action in actions {
                if let Action::LoadFile { index } = action {
                    let file = u32::try_from(index)
                        .ok()
                        .and_then(|i| files.as_ref().and_then(|list| list.get(i)));
                    if let Some(file) = file {
                        loader::load_dropped_file(Rc::clone(&engine), file);
                    }
                }
            }
        }
    })?;

    listen(target, "mousedown", {
        let engine = Rc::clone(&engine);
        let canvas = canvas.clone();
        move |ev: MouseEvent| {
            let actions = engine.borrow_mut().on_pointer_down(mouse_point(&ev, &canvas));
            trace_actions(&actions);
        }
    })?;

    listen(target, "mousemove", {
        let engine = Rc::clone(&engine);
        let canvas = canvas.clone();
        move |ev: MouseEvent| {
            let actions = engine.borrow_mut().on_pointer_move(mouse_point(&ev, &canvas));
            trace_actions(&actions);
        }
    })?;

    listen(target, "mouseup", {
        let engine = Rc::clone(&engine);
        move |_: MouseEvent| {
            let actions = engine.borrow_mut().on_pointer_up();
            trace_actions(&actions);
        }
    })?;

    listen(target, "mouseleave", {
        let engine = Rc::clone(&engine);
        move |_: MouseEvent| {
            let actions = engine.borrow_mut().on_pointer_leave();
            trace_actions(&actions);
        }
    })?;

    start_render_loop(window, Rc::clone(&engine))?;
    Ok(engine)
}

fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F) -> Result<(), HostError>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| handler(ev.unchecked_into::<E>()));
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn trace_actions(actions: &[Action]) {
    for action in actions {
        log::trace!("{action:?}");
    }
}

/// Repaint every animation frame for the life of the page.
fn start_render_loop(window: &Window, engine: SharedEngine) -> Result<(), HostError> {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_for_cb = Rc::clone(&frame);
    let window_for_cb = window.clone();

    *frame.borrow_mut() = Some(Closure::new(move |_ts: f64| {
        engine.borrow_mut().render();
        if let Some(cb) = frame_for_cb.borrow().as_ref() {
            if let Err(err) = window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("could not schedule next frame: {}", describe_js(&err));
            }
        }
    }));

    let first = frame.borrow();
    if let Some(cb) = first.as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
