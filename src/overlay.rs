use crate::core::Mode;
use web_sys as web;

fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "display:none");
    } else {
        _ = cl.remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

fn is_element_hidden(el: &web::Element) -> bool {
    el.class_list().contains("hidden")
        || el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false)
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        set_hidden(&el, false);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        set_hidden(&el, true);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id("start-overlay")
        .map(|el| is_element_hidden(&el))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

pub fn set_mode_label(document: &web::Document, mode: Mode) {
    if let Some(el) = document.get_element_by_id("mode-label") {
        el.set_text_content(Some(mode.label()));
    }
}

/// The icon is drawn by CSS from `data-muted`.
pub fn set_muted_icon(document: &web::Document, muted: bool) {
    if let Some(el) = document.get_element_by_id("mute-toggle") {
        _ = el.set_attribute("data-muted", if muted { "true" } else { "false" });
        _ = el.set_attribute("aria-pressed", if muted { "true" } else { "false" });
    }
}

pub fn set_gesture_panel_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id("gesture-panel") {
        set_hidden(&el, !visible);
    }
}

/// `None` hides the status line.
pub fn set_gesture_status(document: &web::Document, text: Option<&str>) {
    if let Some(el) = document.get_element_by_id("gesture-status") {
        match text {
            Some(t) => {
                el.set_text_content(Some(t));
                set_hidden(&el, false);
            }
            None => {
                el.set_text_content(None);
                set_hidden(&el, true);
            }
        }
    }
}
