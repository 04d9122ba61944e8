//! Collapsible menu group with a render-prop body

use leptos::prelude::*;
use navshell_core::GroupId;

use crate::shell_context::use_sidebar;

/// What a group body receives from [`SidebarLinkGroup`]
#[derive(Clone, Copy)]
pub struct GroupHandle {
    /// Group is expanded
    pub open: Signal<bool>,
    /// Current route lies inside the group
    pub active: Signal<bool>,
    /// Header click: pins a collapsed sidebar, otherwise toggles the group
    pub on_header_click: Callback<()>,
}

/// Wraps one menu group; the body decides how header and children look
///
/// ```rust,ignore
/// <SidebarLinkGroup group=id let:handle>
///     <button on:click=move |_| handle.on_header_click.run(())>"Header"</button>
///     <Show when=move || handle.open.get()>"children"</Show>
/// </SidebarLinkGroup>
/// ```
#[component]
pub fn SidebarLinkGroup<F, IV>(group: GroupId, children: F) -> impl IntoView
where
    F: Fn(GroupHandle) -> IV + Send + Clone + 'static,
    IV: IntoView + 'static,
{
    let shell = use_sidebar().shell;
    let id = StoredValue::new(group);

    let open = Signal::derive(move || shell.with(|s| id.with_value(|id| s.is_group_open(id))));
    let active =
        Signal::derive(move || shell.with(|s| id.with_value(|id| s.is_group_active(id))));
    let on_header_click = Callback::new(move |_: ()| {
        shell.update(|s| {
            if let Err(e) = id.with_value(|id| s.click_group_header(id)) {
                leptos::logging::warn!("Header click ignored: {}", e);
            }
        });
    });

    let handle = GroupHandle {
        open,
        active,
        on_header_click,
    };

    view! {
        <li class="nav-item nav-group" class:nav-item-active=move || active.get()>
            {children(handle)}
        </li>
    }
}
