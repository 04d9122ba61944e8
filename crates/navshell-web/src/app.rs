//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use navshell_core::ShellConfig;

use crate::components::{Header, NotFound, PagePlaceholder, Sidebar};
use crate::shell_context::provide_sidebar_context;

/// Provides the sidebar shell to its children
///
/// Must sit inside `<Router>` so the initial path can be read.
#[component]
pub fn SidebarProvider(
    #[prop(optional)] config: Option<ShellConfig>,
    children: Children,
) -> impl IntoView {
    provide_sidebar_context(config.unwrap_or_default());
    children()
}

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <SidebarProvider>
                <div class="app">
                    <Header />
                    <div class="layout">
                        <Sidebar />
                        <main class="content">
                            <Routes fallback=NotFound>
                                <Route
                                    path=path!("/")
                                    view=|| view! { <PagePlaceholder title="Main" /> }
                                />
                                <Route
                                    path=path!("/ecommerce/customers")
                                    view=|| view! {
                                        <PagePlaceholder
                                            title="Customers"
                                            hint="Opening this page expands the E-Commerce group."
                                        />
                                    }
                                />
                            </Routes>
                        </main>
                    </div>
                </div>
            </SidebarProvider>
        </Router>
    }
}
