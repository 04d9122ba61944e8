//! navshell-web - Leptos sidebar shell plus the Axum server that hosts it

#![recursion_limit = "1024"]

pub mod app;
pub mod browser;
pub mod components;
#[cfg(feature = "ssr")]
pub mod router;
pub mod shell_context;

pub use app::{App, SidebarProvider};
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use anyhow::Result;
    use std::net::SocketAddr;
    use std::path::Path;
    use tokio::net::TcpListener;
    use tracing::info;

    use crate::router::create_router;

    /// Run the web server, serving the built frontend from `dist`
    pub async fn run(dist: &Path, port: u16) -> Result<()> {
        let router = create_router(dist);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr).await?;

        info!(dist = %dist.display(), "Web server listening on http://{}", addr);
        println!("Web server listening on http://{}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}
