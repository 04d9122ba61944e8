//! Leaf navigation link with route-derived highlight

use leptos::prelude::*;
use leptos_router::components::A;
use navshell_core::Leaf;

use super::icons::NavIconSvg;
use crate::shell_context::use_sidebar;

/// Link entry, highlighted while its match policy accepts the current path
#[component]
pub fn MenuLink(
    leaf: Leaf,
    /// Rendered directly in a section rather than inside a group
    #[prop(optional)]
    top_level: bool,
) -> impl IntoView {
    let shell = use_sidebar().shell;
    let Leaf {
        path, label, icon, ..
    } = leaf.clone();
    let leaf = StoredValue::new(leaf);
    let active = move || shell.with(|s| leaf.with_value(|l| s.is_link_active(l)));

    view! {
        <li
            class="nav-item"
            class:nav-item-top=top_level
            class:nav-item-active=active
        >
            <A href=path attr:class="sidebar-link">
                {icon.map(|icon| view! {
                    <span class="sidebar-link-icon">
                        <NavIconSvg icon=icon />
                    </span>
                })}
                <span class="sidebar-link-label">{label}</span>
            </A>
        </li>
    }
}
