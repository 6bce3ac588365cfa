#![cfg(target_arch = "wasm32")]
//! WASM entry point for the Meridian Geomatics site: boots the app shell,
//! routes between the home and project-detail views, and owns the animated
//! hero background session.

mod background;
mod dom;
mod events;
mod frame;
mod render;
mod router;
mod views;

use site_core::{parse_hex_color, Route, Theme};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub(crate) type EventHandle = wasm_bindgen::closure::Closure<dyn FnMut(web::Event)>;

pub struct App {
    document: web::Document,
    root: web::Element,
    theme: Theme,
    route: Route,
    background: Option<background::BackgroundView>,
    /// Bumped on every render; an async background mount only installs its
    /// session if the epoch it captured is still current, so two sessions can
    /// never coexist for one mount point.
    mount_epoch: u64,
    handles: Vec<EventHandle>,
    /// Closures from the previous render, kept one render longer so the
    /// handler that triggered a navigation is never dropped while executing.
    retired: Vec<EventHandle>,
}

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = boot() {
        log::error!("boot error: {:?}", e);
    }
    Ok(())
}

fn boot() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id("app")
        .ok_or_else(|| anyhow::anyhow!("missing #app"))?;

    let app = Rc::new(RefCell::new(App {
        document,
        root,
        theme: Theme::default(),
        route: Route::Home,
        background: None,
        mount_epoch: 0,
        handles: Vec::new(),
        retired: Vec::new(),
    }));
    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

    router::wire_popstate(&app);
    render_route(&app, router::current_route());
    Ok(())
}

/// Theming hook for the host page. A changed primary token re-renders the
/// current route, which tears the hero session down and re-initializes it
/// with the new point color.
#[wasm_bindgen]
pub fn set_primary_color(token: &str) {
    let Some(rgb) = parse_hex_color(token) else {
        log::warn!("ignoring invalid color token: {token}");
        return;
    };
    let app = APP.with(|slot| slot.borrow().clone());
    if let Some(app) = app {
        let route = {
            let mut a = app.borrow_mut();
            a.theme = Theme::from_hex(rgb);
            a.route
        };
        log::info!("primary color changed to {token}; re-rendering");
        render_route(&app, route);
    }
}

pub(crate) fn render_route(app_rc: &Rc<RefCell<App>>, route: Route) {
    let mut app = app_rc.borrow_mut();

    // Tear the previous view down first: background session, then closures.
    if let Some(mut bg) = app.background.take() {
        bg.unmount();
    }
    app.mount_epoch += 1;
    let previous = std::mem::take(&mut app.handles);
    app.retired = previous;
    app.route = route;
    dom::clear_children(&app.root);

    let document = app.document.clone();
    let root = app.root.clone();
    app.handles = match route {
        Route::Home => views::home::render(&document, &root, app_rc),
        Route::Project(id) => views::project::render(&document, &root, app_rc, id),
        Route::NotFound => views::project::render_not_found(&document, &root, app_rc),
    };

    if route == Route::Home {
        let epoch = app.mount_epoch;
        let theme = app.theme;
        drop(app);
        let app_rc = app_rc.clone();
        spawn_local(async move {
            let Some(document) = dom::window_document() else {
                return;
            };
            let view = background::BackgroundView::mount(&document, "hero-canvas", theme).await;
            let mut app = app_rc.borrow_mut();
            if app.mount_epoch == epoch {
                app.background = view;
            } else if let Some(mut stale) = view {
                // Navigated away while the GPU was initializing.
                stale.unmount();
            }
        });
    }
}
