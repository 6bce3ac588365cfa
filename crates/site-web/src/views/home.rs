//! The home view: navbar, hero (with the background mount container),
//! services tabs, stats band, filterable portfolio grid and footer.

use crate::dom::{self, closest_with_attribute};
use crate::{router, App, EventHandle};
use site_core::{
    filter_projects, nav_links, services, stats, strengths, Category, CategoryFilter, Route,
    TabSelection, COMPANY_NAME, COMPANY_TAGLINE, FOOTER_CONTACT, HERO_HEADLINE, HERO_SUBHEAD,
    STRENGTHS_INTRO, STRENGTHS_TAG, STRENGTHS_TITLE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn render(
    document: &web::Document,
    root: &web::Element,
    app: &Rc<RefCell<App>>,
) -> Vec<EventHandle> {
    let mut handles = Vec::new();

    if let Some(nav) = build_navbar(document) {
        handles.extend(wire_route_links(&nav, app));
        let _ = root.append_child(&nav);
    }
    if let Some(hero) = build_hero(document) {
        let _ = root.append_child(&hero);
    }
    if let Some((section, strip, panel)) = build_services(document) {
        handles.extend(wire_service_tabs(&strip, document, panel));
        let _ = root.append_child(&section);
    }
    if let Some(section) = build_stats(document) {
        let _ = root.append_child(&section);
    }
    if let Some(section) = build_strengths(document) {
        let _ = root.append_child(&section);
    }
    if let Some((section, chips, grid)) = build_portfolio(document) {
        handles.extend(wire_filter_chips(&chips, document, grid.clone()));
        handles.extend(wire_project_cards(&grid, app));
        let _ = root.append_child(&section);
    }
    if let Some(footer) = build_footer(document) {
        let _ = root.append_child(&footer);
    }

    handles
}

fn build_navbar(document: &web::Document) -> Option<web::Element> {
    let nav = dom::el(document, "nav", "navbar")?;
    let brand = dom::el_text(document, "a", "navbar-brand", COMPANY_NAME)?;
    let _ = brand.set_attribute("href", "/");
    let _ = brand.set_attribute("data-route", "/");
    let _ = nav.append_child(&brand);

    let links = dom::el(document, "div", "navbar-links")?;
    for link in nav_links() {
        let a = dom::el_text(document, "a", "navbar-link", link.label)?;
        let _ = a.set_attribute("href", link.href);
        if link.href.starts_with('/') {
            let _ = a.set_attribute("data-route", link.href);
        }
        let _ = links.append_child(&a);
    }
    let _ = nav.append_child(&links);
    Some(nav)
}

fn build_hero(document: &web::Document) -> Option<web::Element> {
    let section = dom::el(document, "section", "hero")?;
    let _ = section.set_attribute("id", "home");

    // The background session attaches its canvas here; when the container is
    // missing the session skips initialization entirely.
    let mount = dom::el(document, "div", "hero-background")?;
    let _ = mount.set_attribute("id", "hero-canvas");
    let _ = section.append_child(&mount);

    let content = dom::el(document, "div", "hero-content")?;
    let _ = content.append_child(&dom::el_text(document, "span", "hero-tag", COMPANY_TAGLINE)?);
    let _ = content.append_child(&dom::el_text(document, "h1", "hero-headline", HERO_HEADLINE)?);
    let _ = content.append_child(&dom::el_text(document, "p", "hero-subhead", HERO_SUBHEAD)?);

    let actions = dom::el(document, "div", "hero-actions")?;
    let primary = dom::el_text(document, "a", "button primary", "View our projects")?;
    let _ = primary.set_attribute("href", "#portfolio");
    let secondary = dom::el_text(document, "a", "button outlined", "Our services")?;
    let _ = secondary.set_attribute("href", "#services");
    let _ = actions.append_child(&primary);
    let _ = actions.append_child(&secondary);
    let _ = content.append_child(&actions);
    let _ = section.append_child(&content);
    Some(section)
}

fn build_services(document: &web::Document) -> Option<(web::Element, web::Element, web::Element)> {
    let section = dom::el(document, "section", "services")?;
    let _ = section.set_attribute("id", "services");
    let _ = section.append_child(&dom::el_text(document, "h2", "section-title", "Services")?);

    let strip = dom::el(document, "div", "tab-strip")?;
    for (i, service) in services().iter().enumerate() {
        let tab = dom::el_text(
            document,
            "button",
            if i == 0 { "tab active" } else { "tab" },
            service.title,
        )?;
        let _ = tab.set_attribute("data-tab", &i.to_string());
        let _ = strip.append_child(&tab);
    }
    let _ = section.append_child(&strip);

    let panel = dom::el(document, "div", "service-panel")?;
    fill_service_panel(document, &panel, 0);
    let _ = section.append_child(&panel);
    Some((section, strip, panel))
}

/// Rewrite the detail panel for the selected service index.
fn fill_service_panel(document: &web::Document, panel: &web::Element, index: usize) {
    dom::clear_children(panel);
    let Some(service) = services().get(index) else {
        return;
    };
    if let Some(summary) = dom::el_text(document, "p", "service-summary", service.summary) {
        let _ = panel.append_child(&summary);
    }
    if let Some(list) = dom::el(document, "ul", "service-features") {
        for feature in service.features {
            if let Some(item) = dom::el_text(document, "li", "", feature) {
                let _ = list.append_child(&item);
            }
        }
        let _ = panel.append_child(&list);
    }
}

fn build_stats(document: &web::Document) -> Option<web::Element> {
    let section = dom::el(document, "section", "stats")?;
    let _ = section.set_attribute("id", "stats");
    for stat in stats() {
        let card = dom::el(document, "div", "stat-card")?;
        let _ = card.append_child(&dom::el_text(document, "div", "stat-value", stat.value)?);
        let _ = card.append_child(&dom::el_text(document, "div", "stat-label", stat.label)?);
        let _ = section.append_child(&card);
    }
    Some(section)
}

fn build_strengths(document: &web::Document) -> Option<web::Element> {
    let section = dom::el(document, "section", "strengths")?;
    let _ = section.set_attribute("id", "strengths");

    let header = dom::el(document, "div", "strengths-header")?;
    let _ = header.append_child(&dom::el_text(document, "span", "section-tag", STRENGTHS_TAG)?);
    let _ = header.append_child(&dom::el_text(
        document,
        "h2",
        "section-title",
        STRENGTHS_TITLE,
    )?);
    let _ = header.append_child(&dom::el_text(
        document,
        "p",
        "strengths-intro",
        STRENGTHS_INTRO,
    )?);
    let _ = section.append_child(&header);

    let grid = dom::el(document, "div", "strengths-grid")?;
    for (i, strength) in strengths().iter().enumerate() {
        let card = dom::el(document, "div", "strength-card")?;
        // Numbered watermark, 01 through 04.
        let _ = card.append_child(&dom::el_text(
            document,
            "span",
            "strength-number",
            &format!("{:02}", i + 1),
        )?);
        let _ = card.append_child(&dom::el_text(
            document,
            "h3",
            "strength-title",
            strength.title,
        )?);
        let _ = card.append_child(&dom::el_text(
            document,
            "p",
            "strength-description",
            strength.description,
        )?);
        let _ = grid.append_child(&card);
    }
    let _ = section.append_child(&grid);
    Some(section)
}

fn build_portfolio(document: &web::Document) -> Option<(web::Element, web::Element, web::Element)> {
    let section = dom::el(document, "section", "portfolio")?;
    let _ = section.set_attribute("id", "portfolio");
    let _ = section.append_child(&dom::el_text(document, "h2", "section-title", "Portfolio")?);

    let chips = dom::el(document, "div", "filter-chips")?;
    let all = dom::el_text(document, "button", "chip active", "All")?;
    let _ = all.set_attribute("data-filter", "all");
    let _ = chips.append_child(&all);
    for category in Category::ALL {
        let chip = dom::el_text(document, "button", "chip", category_label(category))?;
        let _ = chip.set_attribute("data-filter", category.slug());
        let _ = chips.append_child(&chip);
    }
    let _ = section.append_child(&chips);

    let grid = dom::el(document, "div", "portfolio-grid")?;
    fill_portfolio_grid(document, &grid, CategoryFilter::All);
    let _ = section.append_child(&grid);
    Some((section, chips, grid))
}

fn build_footer(document: &web::Document) -> Option<web::Element> {
    let footer = dom::el(document, "footer", "footer")?;
    let _ = footer.set_attribute("id", "footer");
    let _ = footer.append_child(&dom::el_text(document, "h3", "footer-brand", COMPANY_NAME)?);
    let _ = footer.append_child(&dom::el_text(
        document,
        "p",
        "footer-tagline",
        COMPANY_TAGLINE,
    )?);
    let _ = footer.append_child(&dom::el_text(
        document,
        "p",
        "footer-contact",
        FOOTER_CONTACT,
    )?);
    Some(footer)
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Topography => "Topography",
        Category::Cadastre => "Cadastre",
        Category::Photogrammetry => "Photogrammetry",
        Category::Gis => "GIS",
    }
}

/// Rebuild the grid for the given filter. Cards are plain anchors; one
/// delegated listener on the grid handles navigation, so rebuilding creates
/// no new closures. A filter with zero matches leaves the grid empty.
fn fill_portfolio_grid(document: &web::Document, grid: &web::Element, filter: CategoryFilter) {
    dom::clear_children(grid);
    for project in filter_projects(filter) {
        let Some(card) = dom::el(document, "a", "project-card") else {
            continue;
        };
        let _ = card.set_attribute("href", &Route::Project(project.id).path());
        let _ = card.set_attribute("data-project", &project.id.to_string());
        if let Some(label) = dom::el_text(document, "span", "project-label", project.label) {
            let _ = card.append_child(&label);
        }
        if let Some(title) = dom::el_text(document, "h3", "project-title", project.title) {
            let _ = card.append_child(&title);
        }
        let _ = grid.append_child(&card);
    }
}

/// Intercept internal route links (navbar brand, "Home") so navigation stays
/// client-side.
fn wire_route_links(nav: &web::Element, app: &Rc<RefCell<App>>) -> Vec<EventHandle> {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some((_, path)) = closest_with_attribute(ev.target(), "data-route") {
            ev.prevent_default();
            router::navigate(&app, Route::parse(&path));
        }
    }) as Box<dyn FnMut(_)>);
    let _ = nav.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    vec![closure]
}

fn wire_service_tabs(
    strip: &web::Element,
    document: &web::Document,
    panel: web::Element,
) -> Vec<EventHandle> {
    let selection = Rc::new(RefCell::new(TabSelection::new(services().len())));
    let document = document.clone();
    let strip_el = strip.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some((_, value)) = closest_with_attribute(ev.target(), "data-tab") else {
            return;
        };
        let Ok(index) = value.parse::<usize>() else {
            return;
        };
        // Out-of-range indices are ignored by the selection itself.
        if selection.borrow_mut().select(index) {
            set_active_by_attribute(&strip_el, "data-tab", &value);
            fill_service_panel(&document, &panel, index);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = strip.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    vec![closure]
}

fn wire_filter_chips(
    chips: &web::Element,
    document: &web::Document,
    grid: web::Element,
) -> Vec<EventHandle> {
    let document = document.clone();
    let chips_el = chips.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some((_, value)) = closest_with_attribute(ev.target(), "data-filter") else {
            return;
        };
        let filter = match Category::from_slug(&value) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::All,
        };
        set_active_by_attribute(&chips_el, "data-filter", &value);
        fill_portfolio_grid(&document, &grid, filter);
    }) as Box<dyn FnMut(_)>);
    let _ = chips.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    vec![closure]
}

fn wire_project_cards(grid: &web::Element, app: &Rc<RefCell<App>>) -> Vec<EventHandle> {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some((_, id)) = closest_with_attribute(ev.target(), "data-project") {
            ev.prevent_default();
            match id.parse::<u32>() {
                Ok(id) => router::navigate(&app, Route::Project(id)),
                Err(_) => router::navigate(&app, Route::NotFound),
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    vec![closure]
}

/// Toggle the `active` class within a control group by matching a data
/// attribute value.
fn set_active_by_attribute(group: &web::Element, attribute: &str, value: &str) {
    let mut child = group.first_element_child();
    while let Some(element) = child {
        let is_match = element.get_attribute(attribute).as_deref() == Some(value);
        if is_match {
            let _ = element.class_list().add_1("active");
        } else {
            let _ = element.class_list().remove_1("active");
        }
        child = element.next_element_sibling();
    }
}
