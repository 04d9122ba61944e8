//! Browser adapters for the core traits
//!
//! `localStorage` for persistence, the `<body>` class list for the expanded
//! style flag, and DOM containment checks for outside-click classification.
//! All of these degrade silently when the browser refuses access.

use navshell_core::{KeyValueStore, NavError, PointerTarget, StyleFlag};
use wasm_bindgen::JsCast;

/// `window.localStorage` backend
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> navshell_core::Result<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| NavError::storage_unavailable("no window"))?;
        window
            .local_storage()
            .map_err(|e| NavError::storage_unavailable(format!("{:?}", e)))?
            .ok_or_else(|| NavError::storage_unavailable("localStorage disabled"))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> navshell_core::Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| NavError::storage_unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> navshell_core::Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| NavError::storage_unavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> navshell_core::Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| NavError::storage_unavailable(format!("{:?}", e)))
    }
}

/// Toggles a class on `document.body`
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyClassFlag;

impl StyleFlag for BodyClassFlag {
    fn apply(&self, name: &str, enabled: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };

        let classes = body.class_list();
        let result = if enabled {
            classes.add_1(name)
        } else {
            classes.remove_1(name)
        };
        if let Err(e) = result {
            leptos::logging::warn!("Failed to toggle body class {}: {:?}", name, e);
        }
    }
}

/// Current `window.innerWidth` in CSS pixels
pub fn viewport_width() -> Option<u32> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width.max(0.0) as u32)
}

/// Classify a click target against the panel and its trigger
///
/// Returns `None` while either element is not mounted yet; such clicks are
/// ignored rather than treated as outside.
pub fn classify_pointer(
    target: Option<web_sys::EventTarget>,
    panel: Option<web_sys::Node>,
    trigger: Option<web_sys::Node>,
) -> Option<PointerTarget> {
    let (panel, trigger) = (panel?, trigger?);
    let Some(node) = target.and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return Some(PointerTarget::Outside);
    };

    if panel.contains(Some(&node)) {
        Some(PointerTarget::Panel)
    } else if trigger.contains(Some(&node)) {
        Some(PointerTarget::Trigger)
    } else {
        Some(PointerTarget::Outside)
    }
}
