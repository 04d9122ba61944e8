//! Inline Tabler-style SVG icons for navigation entries

use leptos::prelude::*;
use navshell_core::NavIcon;

/// Icon for a navigation node
#[component]
pub fn NavIconSvg(icon: NavIcon) -> impl IntoView {
    let paths = match icon {
        NavIcon::Dashboard => view! {
            <path d="M12 13m-2 0a2 2 0 1 0 4 0a2 2 0 1 0 -4 0"/>
            <path d="M13.45 11.55l2.05 -2.05"/>
            <path d="M6.4 20a9 9 0 1 1 11.2 0z"/>
        }
        .into_any(),
        NavIcon::Home => view! {
            <path d="M5 12l-2 0l9 -9l9 9l-2 0"/>
            <path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7"/>
            <path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6"/>
        }
        .into_any(),
        NavIcon::Shop => view! {
            <path d="M4 7l.867 12.143a2 2 0 0 0 2 1.857h10.276a2 2 0 0 0 2 -1.857l.867 -12.143h-16z"/>
            <path d="M8.5 7c0 -1.653 1.5 -4 3.5 -4s3.5 2.347 3.5 4"/>
        }
        .into_any(),
        NavIcon::Briefcase => view! {
            <path d="M3 7m0 2a2 2 0 0 1 2 -2h14a2 2 0 0 1 2 2v9a2 2 0 0 1 -2 2h-14a2 2 0 0 1 -2 -2z"/>
            <path d="M8 7v-2a2 2 0 0 1 2 -2h4a2 2 0 0 1 2 2v2"/>
            <path d="M12 12l0 .01"/>
            <path d="M3 13a20 20 0 0 0 18 0"/>
        }
        .into_any(),
        NavIcon::ListDetails => view! {
            <path d="M13 5h8"/>
            <path d="M13 9h5"/>
            <path d="M13 15h8"/>
            <path d="M13 19h5"/>
            <path d="M3 4m0 1a1 1 0 0 1 1 -1h4a1 1 0 0 1 1 1v4a1 1 0 0 1 -1 1h-4a1 1 0 0 1 -1 -1z"/>
            <path d="M3 14m0 1a1 1 0 0 1 1 -1h4a1 1 0 0 1 1 1v4a1 1 0 0 1 -1 1h-4a1 1 0 0 1 -1 -1z"/>
        }
        .into_any(),
        NavIcon::Inbox => view! {
            <path d="M4 4m0 2a2 2 0 0 1 2 -2h12a2 2 0 0 1 2 2v12a2 2 0 0 1 -2 2h-12a2 2 0 0 1 -2 -2z"/>
            <path d="M4 13h3l3 3h4l3 -3h3"/>
        }
        .into_any(),
        NavIcon::Calendar => view! {
            <path d="M4 7a2 2 0 0 1 2 -2h12a2 2 0 0 1 2 2v12a2 2 0 0 1 -2 2h-12a2 2 0 0 1 -2 -2v-12z"/>
            <path d="M16 3v4"/>
            <path d="M8 3v4"/>
            <path d="M4 11h16"/>
        }
        .into_any(),
        NavIcon::Campaign => view! {
            <path d="M3 7l9 6l9 -6"/>
            <path d="M3 7m0 2a2 2 0 0 1 2 -2h14a2 2 0 0 1 2 2v8a2 2 0 0 1 -2 2h-14a2 2 0 0 1 -2 -2z"/>
        }
        .into_any(),
        NavIcon::Settings => view! {
            <path d="M10.325 4.317c.426 -1.756 2.924 -1.756 3.35 0a1.724 1.724 0 0 0 2.573 1.066c1.543 -.94 3.31 .826 2.37 2.37a1.724 1.724 0 0 0 1.065 2.572c1.756 .426 1.756 2.924 0 3.35a1.724 1.724 0 0 0 -1.066 2.573c.94 1.543 -.826 3.31 -2.37 2.37a1.724 1.724 0 0 0 -2.572 1.065c-.426 1.756 -2.924 1.756 -3.35 0a1.724 1.724 0 0 0 -2.573 -1.066c-1.543 .94 -3.31 -.826 -2.37 -2.37a1.724 1.724 0 0 0 -1.065 -2.572c-1.756 -.426 -1.756 -2.924 0 -3.35a1.724 1.724 0 0 0 1.066 -2.573c-.94 -1.543 .826 -3.31 2.37 -2.37c1 .608 2.296 .07 2.572 -1.065z"/>
            <path d="M9 12a3 3 0 1 0 6 0a3 3 0 0 0 -6 0"/>
        }
        .into_any(),
        NavIcon::UserScan => view! {
            <path d="M10 9a2 2 0 1 0 4 0a2 2 0 0 0 -4 0"/>
            <path d="M4 8v-2a2 2 0 0 1 2 -2h2"/>
            <path d="M4 16v2a2 2 0 0 0 2 2h2"/>
            <path d="M16 4h2a2 2 0 0 1 2 2v2"/>
            <path d="M16 20h2a2 2 0 0 0 2 -2v-2"/>
            <path d="M8 16a2 2 0 0 1 2 -2h4a2 2 0 0 1 2 2"/>
        }
        .into_any(),
    };

    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            {paths}
        </svg>
    }
}

/// Disclosure chevron, rotated while the group is open
#[component]
pub fn Chevron(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    view! {
        <span class="sidebar-chevron" class:sidebar-chevron-open=move || open.get()>
            <svg xmlns="http://www.w3.org/2000/svg" width="12" height="12" viewBox="0 0 12 12" fill="currentColor">
                <path d="M5.9 11.4L.5 6l1.4-1.4 4 4 4-4L11.3 6z"/>
            </svg>
        </span>
    }
}
