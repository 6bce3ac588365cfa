//! The project detail view, and the terminal not-found state it degrades to
//! for unknown identifiers.

use crate::dom::{self, closest_with_attribute};
use crate::{router, App, EventHandle};
use site_core::{find_project, Project, Route};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn render(
    document: &web::Document,
    root: &web::Element,
    app: &Rc<RefCell<App>>,
    id: u32,
) -> Vec<EventHandle> {
    scroll_to_top();
    match find_project(id) {
        Some(project) => render_detail(document, root, app, project),
        None => render_not_found(document, root, app),
    }
}

/// Terminal state for unknown ids and unknown paths: a message plus a path
/// back to the catalog. Never partial data, never a panic.
pub fn render_not_found(
    document: &web::Document,
    root: &web::Element,
    app: &Rc<RefCell<App>>,
) -> Vec<EventHandle> {
    scroll_to_top();
    let Some(section) = dom::el(document, "section", "not-found") else {
        return Vec::new();
    };
    if let Some(title) = dom::el_text(document, "h2", "", "Project not found") {
        let _ = section.append_child(&title);
    }
    if let Some(back) = dom::el_text(document, "button", "button primary", "Back to home") {
        let _ = back.set_attribute("data-route", "/");
        let _ = section.append_child(&back);
    }
    let handles = wire_back_links(&section, app);
    let _ = root.append_child(&section);
    handles
}

fn render_detail(
    document: &web::Document,
    root: &web::Element,
    app: &Rc<RefCell<App>>,
    project: &'static Project,
) -> Vec<EventHandle> {
    let Some(page) = dom::el(document, "div", "project-detail") else {
        return Vec::new();
    };

    if let Some(bar) = dom::el(document, "div", "detail-topbar") {
        if let Some(back) = dom::el_text(document, "button", "back-link", "Back to all projects") {
            let _ = back.set_attribute("data-route", "/");
            let _ = bar.append_child(&back);
        }
        let _ = page.append_child(&bar);
    }

    if let Some(header) = dom::el(document, "header", "detail-header") {
        if let Some(chip) = dom::el_text(document, "span", "project-label", project.label) {
            let _ = header.append_child(&chip);
        }
        if let Some(title) = dom::el_text(document, "h1", "detail-title", project.title) {
            let _ = header.append_child(&title);
        }
        let _ = page.append_child(&header);
    }

    if let Some(image) = dom::el(document, "img", "detail-image") {
        let _ = image.set_attribute("src", project.image);
        let _ = image.set_attribute("alt", project.title);
        let _ = page.append_child(&image);
    }

    if let Some(info) = dom::el(document, "dl", "detail-info") {
        append_info_row(document, &info, "Client", project.client);
        append_info_row(document, &info, "Location", project.location);
        append_info_row(document, &info, "Year", project.year);
        append_info_row(document, &info, "Status", project.status);
        let _ = page.append_child(&info);
    }

    if let Some(description) = dom::el_text(
        document,
        "p",
        "detail-description",
        project.long_description,
    ) {
        let _ = page.append_child(&description);
    }

    append_string_list(document, &page, "Challenges", project.challenges);
    append_string_list(document, &page, "Solutions & outcomes", project.solutions);

    let handles = wire_back_links(&page, app);
    let _ = root.append_child(&page);
    handles
}

fn append_info_row(document: &web::Document, info: &web::Element, term: &str, detail: &str) {
    if let Some(dt) = dom::el_text(document, "dt", "", term) {
        let _ = info.append_child(&dt);
    }
    if let Some(dd) = dom::el_text(document, "dd", "", detail) {
        let _ = info.append_child(&dd);
    }
}

fn append_string_list(
    document: &web::Document,
    page: &web::Element,
    heading: &str,
    items: &[&str],
) {
    let Some(block) = dom::el(document, "section", "detail-list") else {
        return;
    };
    if let Some(title) = dom::el_text(document, "h2", "", heading) {
        let _ = block.append_child(&title);
    }
    if let Some(list) = dom::el(document, "ul", "") {
        for item in items {
            if let Some(li) = dom::el_text(document, "li", "", item) {
                let _ = list.append_child(&li);
            }
        }
        let _ = block.append_child(&list);
    }
    let _ = page.append_child(&block);
}

fn wire_back_links(container: &web::Element, app: &Rc<RefCell<App>>) -> Vec<EventHandle> {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some((_, path)) = closest_with_attribute(ev.target(), "data-route") {
            ev.prevent_default();
            router::navigate(&app, Route::parse(&path));
        }
    }) as Box<dyn FnMut(_)>);
    let _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    vec![closure]
}

fn scroll_to_top() {
    if let Some(window) = web::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
