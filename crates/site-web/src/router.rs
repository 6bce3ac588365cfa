//! pushState navigation between the home and project-detail views.

use crate::App;
use site_core::Route;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Push the route onto the history stack and render it.
pub fn navigate(app: &Rc<RefCell<App>>, route: Route) {
    if let Some(window) = web::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path()));
        }
    }
    crate::render_route(app, route);
}

/// Back/forward buttons re-render from the location. Wired once at boot; the
/// listener lives as long as the page does.
pub fn wire_popstate(app: &Rc<RefCell<App>>) {
    if let Some(window) = web::window() {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PopStateEvent| {
            crate::render_route(&app, current_route());
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn current_route() -> Route {
    web::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Home)
}
