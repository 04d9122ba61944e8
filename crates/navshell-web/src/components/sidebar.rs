//! Sidebar shell: sections, collapsible groups, links and the expand toggle

use leptos::prelude::*;
use leptos::web_sys::MouseEvent;
use leptos_router::components::A;
use navshell_core::{NavGroup, NavIcon, NavNode, NavSection};

use super::icons::{Chevron, NavIconSvg};
use super::link_group::SidebarLinkGroup;
use super::menu_link::MenuLink;
use crate::shell_context::{mount_sidebar, use_sidebar};

/// Sidebar with navigation menu
///
/// Mounting attaches the outside-click and resize listeners; unmounting
/// releases them.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_sidebar();
    let shell = ctx.shell;
    mount_sidebar(ctx);

    let sections = shell.with_untracked(|s| s.tree().sections.clone());
    let overlay_open = move || shell.with(|s| s.overlay_open());
    let sidebar_open = move || shell.with(|s| s.is_sidebar_open());
    let expanded = move || shell.with(|s| s.is_expanded());

    view! {
        <>
            // Backdrop overlay for narrow viewports; clicks on it dismiss via the document listener
            <Show when=overlay_open>
                <div class="sidebar-backdrop" aria-hidden="true"></div>
            </Show>

            <aside
                id="sidebar"
                class="sidebar"
                node_ref=ctx.panel
                class:sidebar-open=sidebar_open
                class:sidebar-labels=move || shell.with(|s| s.labels_visible())
            >
                <div class="sidebar-header">
                    <button
                        class="sidebar-close"
                        on:click=move |_| ctx.toggle_visibility()
                        aria-controls="sidebar"
                        aria-expanded=move || sidebar_open().to_string()
                        aria-label="Close sidebar"
                    >
                        "✕"
                    </button>

                    <A href="/" attr:class="sidebar-logo">
                        <span class="sidebar-link-icon">
                            <NavIconSvg icon=NavIcon::Dashboard />
                        </span>
                        <span class="sidebar-link-label">"Dashboard"</span>
                    </A>
                </div>

                <nav class="nav">
                    {sections.into_iter().map(section_view).collect_view()}
                </nav>

                <div class="sidebar-footer">
                    <button
                        class="sidebar-expand-toggle"
                        class:sidebar-expand-toggle-on=expanded
                        on:click=move |_| ctx.toggle_expanded()
                        aria-pressed=move || expanded().to_string()
                    >
                        <span class="sr-only">"Expand / collapse sidebar"</span>
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M20 12l-10 0"/>
                            <path d="M20 12l-4 4"/>
                            <path d="M20 12l-4 -4"/>
                            <path d="M4 4l0 16"/>
                        </svg>
                    </button>
                </div>
            </aside>
        </>
    }
}

fn section_view(section: NavSection) -> impl IntoView {
    let NavSection { title, items } = section;
    view! {
        <div class="sidebar-section">
            <h3 class="sidebar-section-title">
                <span class="sidebar-section-dots" aria-hidden="true">"•••"</span>
                <span class="sidebar-section-label">{title}</span>
            </h3>
            <ul class="nav-list">
                {items.into_iter().map(|node| node_view(node, true)).collect_view()}
            </ul>
        </div>
    }
}

fn node_view(node: NavNode, top_level: bool) -> AnyView {
    match node {
        NavNode::Leaf(leaf) => view! { <MenuLink leaf=leaf top_level=top_level /> }.into_any(),
        NavNode::Group(group) => group_view(group),
    }
}

fn group_view(group: NavGroup) -> AnyView {
    let NavGroup {
        id,
        label,
        icon,
        children,
    } = group;
    let label = StoredValue::new(label);
    let children = StoredValue::new(children);

    view! {
        <SidebarLinkGroup group=id let:handle>
            <a
                href="#"
                class="sidebar-link sidebar-group-header"
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    handle.on_header_click.run(());
                }
                aria-expanded=move || handle.open.get().to_string()
            >
                <span class="sidebar-link-icon">
                    <NavIconSvg icon=icon />
                </span>
                <span class="sidebar-link-label">{label.get_value()}</span>
                <Chevron open=handle.open />
            </a>
            <ul class="nav-sublist" class:hidden=move || !handle.open.get()>
                {children
                    .get_value()
                    .into_iter()
                    .map(|node| node_view(node, false))
                    .collect_view()}
            </ul>
        </SidebarLinkGroup>
    }
    .into_any()
}
