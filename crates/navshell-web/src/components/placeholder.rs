//! Placeholder body for routes that only exist to exercise navigation

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Page stub naming the route it was reached through
#[component]
pub fn PagePlaceholder(
    /// Page title (e.g., "Customers", "Main")
    title: &'static str,
    /// Optional one-line hint shown under the title
    #[prop(optional)]
    hint: Option<&'static str>,
) -> impl IntoView {
    let location = use_location();

    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="64"
                    height="64"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <path d="M4 4h6v8h-6z"/>
                    <path d="M4 16h6v4h-6z"/>
                    <path d="M14 12h6v8h-6z"/>
                    <path d="M14 4h6v4h-6z"/>
                </svg>
            </div>
            <h2 class="empty-state-title">{title}</h2>
            <p class="empty-state-description">
                "Current route: " <code>{move || location.pathname.get()}</code>
            </p>

            {hint.map(|h| {
                view! { <div class="empty-state-workaround">{h}</div> }
            })}

            <A href="/" attr:class="empty-state-link">
                "Back to Main"
            </A>
        </div>
    }
}

/// Fallback for paths with no page of their own
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <PagePlaceholder
            title="Not found"
            hint="The sidebar still highlights whichever entry matches this path."
        />
    }
}
