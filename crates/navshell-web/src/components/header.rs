//! Header component

use leptos::prelude::*;

use crate::shell_context::use_sidebar;

/// Header with title and the mobile hamburger that opens the sidebar
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_sidebar();
    let shell = ctx.shell;

    view! {
        <header class="header">
            <button
                class="hamburger"
                node_ref=ctx.trigger
                on:click=move |_| ctx.toggle_visibility()
                aria-controls="sidebar"
                aria-label="Toggle sidebar"
                aria-expanded=move || shell.with(|s| s.is_sidebar_open()).to_string()
            >
                <span class="hamburger-icon">"☰"</span>
            </button>

            <div class="header-content">
                <h1 class="logo">"navshell"</h1>
                <p class="subtitle">"Dashboard"</p>
            </div>
        </header>
    }
}
