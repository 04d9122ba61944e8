//! Sidebar shell controller
//!
//! Owns the navigation tree, the per-group state machines, the persisted
//! expansion store and the (non-persisted) overlay visibility. Every
//! operation runs synchronously to completion and returns the
//! [`ShellEvent`]s it produced, so a renderer can react to exactly what
//! changed.

use crate::config::ShellConfig;
use crate::error::{NavError, Result};
use crate::expansion::{ExpansionState, ExpansionStore, StyleFlag};
use crate::group::{GroupState, HeaderClick, MenuGroup};
use crate::listener::{ListenerHost, ScopedListener};
use crate::matcher::RouteMatcher;
use crate::nav::{GroupId, Leaf, NavIcon, NavNode, NavTree};
use crate::storage::KeyValueStore;
use serde::Serialize;
use tracing::debug;

/// How the sidebar is laid out for the current viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Narrow viewport: sidebar slides in over the content
    Overlay,
    /// Desktop: icon rail unless pinned/expanded
    Rail,
    /// Very wide viewport: labels always visible
    Full,
}

impl LayoutMode {
    pub fn from_width(width: u32, config: &ShellConfig) -> Self {
        if width < config.narrow_breakpoint_px {
            LayoutMode::Overlay
        } else if width >= config.wide_breakpoint_px {
            LayoutMode::Full
        } else {
            LayoutMode::Rail
        }
    }
}

/// Where a document pointer event landed, as classified by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the sidebar panel
    Panel,
    /// Inside the hamburger/close trigger
    Trigger,
    Outside,
}

/// State change produced by a shell operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    ExpandedChanged(bool),
    GroupToggled { id: GroupId, state: GroupState },
    VisibilityChanged(bool),
    Navigated(String),
    LayoutChanged(LayoutMode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub path: String,
    pub label: String,
    pub icon: Option<NavIcon>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub id: GroupId,
    pub label: String,
    pub icon: NavIcon,
    pub open: bool,
    pub active: bool,
    pub children: Vec<NodeView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeView {
    Link(LinkView),
    Group(GroupView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub title: String,
    pub items: Vec<NodeView>,
}

/// Snapshot of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub path: String,
    pub layout: LayoutMode,
    pub expanded: bool,
    pub labels_visible: bool,
    pub overlay_open: bool,
    pub sections: Vec<SectionView>,
}

pub struct SidebarShell<S, F> {
    tree: NavTree,
    config: ShellConfig,
    store: ExpansionStore<S, F>,
    groups: Vec<MenuGroup>,
    path: String,
    sidebar_open: bool,
    layout: LayoutMode,
    listener: Option<ScopedListener>,
}

impl<S: KeyValueStore, F: StyleFlag> SidebarShell<S, F> {
    /// Build the shell for the route at mount time
    ///
    /// The expansion store is opened from the same `config`, after it has
    /// been validated. Groups containing the route start open; others follow
    /// the persisted open-group set. Route seeding never touches that set.
    /// The overlay always starts closed.
    pub fn new(
        tree: NavTree,
        storage: S,
        flag: F,
        config: ShellConfig,
        path: impl Into<String>,
    ) -> Self {
        let config = config.validated();
        let store = ExpansionStore::open(storage, flag, &config);
        let path = path.into();
        let groups: Vec<MenuGroup> = tree
            .groups()
            .into_iter()
            .map(|group| MenuGroup::mount(group, &path, store.is_group_open(&group.id)))
            .collect();

        debug!(path = %path, groups = groups.len(), "Sidebar shell created");

        Self {
            tree,
            config,
            store,
            groups,
            path,
            sidebar_open: false,
            layout: LayoutMode::Rail,
            listener: None,
        }
    }

    /// Attach the outside-click listener; no-op if already mounted
    pub fn mount<H: ListenerHost + ?Sized>(&mut self, host: &H) -> bool {
        if self.listener.is_some() {
            debug!("Sidebar shell already mounted, keeping existing listener");
            return false;
        }
        self.listener = Some(host.attach_dismissal());
        true
    }

    /// Detach the outside-click listener; no-op if not mounted
    pub fn unmount(&mut self) -> bool {
        match self.listener.take() {
            Some(listener) => {
                listener.release();
                true
            }
            None => false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn expansion(&self) -> &ExpansionState {
        self.store.state()
    }

    pub fn is_expanded(&self) -> bool {
        self.store.is_expanded()
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Labels are hidden only on the collapsed desktop rail
    pub fn labels_visible(&self) -> bool {
        match self.layout {
            LayoutMode::Overlay | LayoutMode::Full => true,
            LayoutMode::Rail => self.is_expanded(),
        }
    }

    /// Visibility is only meaningful on narrow viewports
    pub fn overlay_open(&self) -> bool {
        self.layout == LayoutMode::Overlay && self.sidebar_open
    }

    pub fn group(&self, id: &GroupId) -> Option<&MenuGroup> {
        self.groups.iter().find(|g| g.id() == id)
    }

    pub fn is_group_open(&self, id: &GroupId) -> bool {
        self.group(id).is_some_and(MenuGroup::is_open)
    }

    pub fn is_group_active(&self, id: &GroupId) -> bool {
        self.tree
            .group(id)
            .is_some_and(|group| RouteMatcher::group_matches(group, &self.path))
    }

    pub fn is_link_active(&self, leaf: &Leaf) -> bool {
        RouteMatcher::leaf_matches(leaf, &self.path)
    }

    /// Expand/collapse button
    pub fn toggle_expanded(&mut self) -> Vec<ShellEvent> {
        let expanded = !self.is_expanded();
        self.set_expanded(expanded)
    }

    pub fn set_expanded(&mut self, expanded: bool) -> Vec<ShellEvent> {
        if self.is_expanded() == expanded {
            return Vec::new();
        }
        self.store.set_expanded(expanded);
        vec![ShellEvent::ExpandedChanged(expanded)]
    }

    /// Click on a group header: pins a collapsed sidebar, otherwise toggles
    pub fn click_group_header(&mut self, id: &GroupId) -> Result<Vec<ShellEvent>> {
        let expanded = self.store.is_expanded();
        let menu = self
            .groups
            .iter_mut()
            .find(|g| g.id() == id)
            .ok_or_else(|| NavError::UnknownGroup { id: id.to_string() })?;

        match menu.click_header(expanded) {
            HeaderClick::PinnedSidebar => {
                debug!(group = %id, "Header click pinned the sidebar");
                self.store.set_expanded(true);
                Ok(vec![ShellEvent::ExpandedChanged(true)])
            }
            HeaderClick::Toggled(state) => {
                self.store.set_group_open(id, state.is_open());
                Ok(vec![ShellEvent::GroupToggled {
                    id: id.clone(),
                    state,
                }])
            }
        }
    }

    /// Hamburger button
    pub fn toggle_visibility(&mut self) -> Vec<ShellEvent> {
        let open = !self.sidebar_open;
        self.set_sidebar_open(open)
    }

    pub fn set_sidebar_open(&mut self, open: bool) -> Vec<ShellEvent> {
        if self.sidebar_open == open {
            return Vec::new();
        }
        self.sidebar_open = open;
        debug!(open, "Sidebar visibility changed");
        vec![ShellEvent::VisibilityChanged(open)]
    }

    /// Document pointer event: dismiss when it lands outside panel and trigger
    pub fn handle_pointer(&mut self, target: PointerTarget) -> Vec<ShellEvent> {
        if !self.sidebar_open || target != PointerTarget::Outside {
            return Vec::new();
        }
        self.set_sidebar_open(false)
    }

    /// Route change: re-seed groups the route enters, optionally close the overlay
    pub fn navigate(&mut self, path: impl Into<String>) -> Vec<ShellEvent> {
        let path = path.into();
        if path == self.path {
            return Vec::new();
        }
        debug!(from = %self.path, to = %path, "Sidebar navigated");
        self.path = path;

        let mut events = vec![ShellEvent::Navigated(self.path.clone())];
        for (menu, group) in self.groups.iter_mut().zip(self.tree.groups()) {
            let active = RouteMatcher::group_matches(group, &self.path);
            if let Some(state) = menu.on_navigate(active) {
                events.push(ShellEvent::GroupToggled {
                    id: group.id.clone(),
                    state,
                });
            }
        }

        if self.config.close_on_navigate {
            events.extend(self.set_sidebar_open(false));
        }
        events
    }

    /// Viewport resize: leaving the narrow layout dismisses the overlay
    pub fn resize(&mut self, width: u32) -> Vec<ShellEvent> {
        let layout = LayoutMode::from_width(width, &self.config);
        if layout == self.layout {
            return Vec::new();
        }
        let was_overlay = self.layout == LayoutMode::Overlay;
        self.layout = layout;

        let mut events = vec![ShellEvent::LayoutChanged(layout)];
        if was_overlay {
            events.extend(self.set_sidebar_open(false));
        }
        events
    }

    pub fn view(&self) -> SidebarView {
        SidebarView {
            path: self.path.clone(),
            layout: self.layout,
            expanded: self.is_expanded(),
            labels_visible: self.labels_visible(),
            overlay_open: self.overlay_open(),
            sections: self
                .tree
                .sections
                .iter()
                .map(|section| SectionView {
                    title: section.title.clone(),
                    items: section.items.iter().map(|n| self.node_view(n)).collect(),
                })
                .collect(),
        }
    }

    fn node_view(&self, node: &NavNode) -> NodeView {
        match node {
            NavNode::Leaf(leaf) => NodeView::Link(LinkView {
                path: leaf.path.clone(),
                label: leaf.label.clone(),
                icon: leaf.icon,
                active: self.is_link_active(leaf),
            }),
            NavNode::Group(group) => NodeView::Group(GroupView {
                id: group.id.clone(),
                label: group.label.clone(),
                icon: group.icon,
                open: self.is_group_open(&group.id),
                active: RouteMatcher::group_matches(group, &self.path),
                children: group.children.iter().map(|n| self.node_view(n)).collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expansion::RecordingStyleFlag;
    use crate::storage::MemoryStore;

    fn shell_at(path: &str) -> SidebarShell<MemoryStore, RecordingStyleFlag> {
        SidebarShell::new(
            NavTree::dashboard(),
            MemoryStore::new(),
            RecordingStyleFlag::new(),
            ShellConfig::default(),
            path,
        )
    }

    #[test]
    fn test_layout_from_width() {
        let config = ShellConfig::default();
        assert_eq!(LayoutMode::from_width(375, &config), LayoutMode::Overlay);
        assert_eq!(LayoutMode::from_width(1024, &config), LayoutMode::Rail);
        assert_eq!(LayoutMode::from_width(1535, &config), LayoutMode::Rail);
        assert_eq!(LayoutMode::from_width(1920, &config), LayoutMode::Full);
    }

    #[test]
    fn test_pointer_inside_keeps_overlay() {
        let mut shell = shell_at("/");
        shell.toggle_visibility();
        assert!(shell.handle_pointer(PointerTarget::Panel).is_empty());
        assert!(shell.handle_pointer(PointerTarget::Trigger).is_empty());
        assert!(shell.is_sidebar_open());

        assert_eq!(
            shell.handle_pointer(PointerTarget::Outside),
            vec![ShellEvent::VisibilityChanged(false)]
        );
    }

    #[test]
    fn test_pointer_ignored_when_closed() {
        let mut shell = shell_at("/");
        assert!(shell.handle_pointer(PointerTarget::Outside).is_empty());
    }

    #[test]
    fn test_unknown_group_click() {
        let mut shell = shell_at("/");
        let err = shell
            .click_group_header(&GroupId::from("nope"))
            .unwrap_err();
        assert!(matches!(err, NavError::UnknownGroup { .. }));
    }

    #[test]
    fn test_resize_to_wide_closes_overlay() {
        let mut shell = shell_at("/");
        shell.resize(600);
        shell.toggle_visibility();
        assert!(shell.overlay_open());

        let events = shell.resize(1280);
        assert_eq!(
            events,
            vec![
                ShellEvent::LayoutChanged(LayoutMode::Rail),
                ShellEvent::VisibilityChanged(false)
            ]
        );
        assert!(shell.resize(1300).is_empty());
    }

    #[test]
    fn test_labels_visibility_per_layout() {
        let mut shell = shell_at("/");
        assert!(!shell.labels_visible());
        shell.resize(1600);
        assert!(shell.labels_visible());
        shell.resize(500);
        assert!(shell.labels_visible());
        shell.resize(1200);
        shell.toggle_expanded();
        assert!(shell.labels_visible());
    }

    #[test]
    fn test_navigate_same_path_is_noop() {
        let mut shell = shell_at("/inbox");
        assert!(shell.navigate("/inbox").is_empty());
    }

    #[test]
    fn test_view_marks_active_nodes() {
        let shell = shell_at("/ecommerce/orders");
        let view = shell.view();
        let NodeView::Group(ecommerce) = &view.sections[0].items[1] else {
            panic!("expected group");
        };
        assert!(ecommerce.active && ecommerce.open);

        let active: Vec<_> = ecommerce
            .children
            .iter()
            .filter_map(|c| match c {
                NodeView::Link(link) if link.active => Some(link.label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(active, vec!["Orders"]);
    }

    #[test]
    fn test_toggles_report_events() {
        let mut shell = shell_at("/");
        assert_eq!(
            shell.toggle_visibility(),
            vec![ShellEvent::VisibilityChanged(true)]
        );
        assert_eq!(shell.toggle_expanded(), vec![ShellEvent::ExpandedChanged(true)]);
        assert!(shell.set_expanded(true).is_empty());
        assert!(shell.is_sidebar_open() && shell.is_expanded());
    }

    #[test]
    fn test_user_closed_group_survives_navigation_inside_it() {
        let mut shell = shell_at("/ecommerce/customers");
        shell.set_expanded(true);
        let ecommerce = GroupId::from("ecommerce");
        shell.click_group_header(&ecommerce).unwrap();
        assert!(!shell.is_group_open(&ecommerce));

        shell.navigate("/ecommerce/orders");
        assert!(!shell.is_group_open(&ecommerce));

        shell.navigate("/inbox");
        let events = shell.navigate("/ecommerce/invoices");
        assert!(shell.is_group_open(&ecommerce));
        assert!(events.contains(&ShellEvent::GroupToggled {
            id: ecommerce,
            state: GroupState::Open,
        }));
    }
}
