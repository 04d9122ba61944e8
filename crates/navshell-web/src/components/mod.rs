//! Leptos UI components

mod header;
mod icons;
mod link_group;
mod menu_link;
mod placeholder;
mod sidebar;

pub use header::Header;
pub use icons::{Chevron, NavIconSvg};
pub use link_group::{GroupHandle, SidebarLinkGroup};
pub use menu_link::MenuLink;
pub use placeholder::{NotFound, PagePlaceholder};
pub use sidebar::Sidebar;
