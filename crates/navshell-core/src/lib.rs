//! navshell-core - Core library for navshell
//!
//! Provides the navigation tree, route matching, persisted expansion state,
//! the per-group state machine and the sidebar shell controller. Nothing in
//! here touches the DOM; the web crate plugs browser adapters into the
//! storage, style flag and listener traits.

pub mod config;
pub mod error;
pub mod expansion;
pub mod group;
pub mod listener;
pub mod matcher;
pub mod nav;
pub mod shell;
pub mod storage;

pub use config::ShellConfig;
pub use error::{NavError, Result};
pub use expansion::{ExpansionState, ExpansionStore, NoopStyleFlag, RecordingStyleFlag, StyleFlag};
pub use group::{GroupState, HeaderClick, MenuGroup, OpenOrigin};
pub use listener::{ListenerHost, ScopedListener};
pub use matcher::RouteMatcher;
pub use nav::{GroupId, Leaf, MatchPolicy, NavGroup, NavIcon, NavNode, NavSection, NavTree};
pub use shell::{
    GroupView, LayoutMode, LinkView, NodeView, PointerTarget, SectionView, ShellEvent,
    SidebarShell, SidebarView,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
