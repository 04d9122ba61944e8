//! Navigation tree model
//!
//! The tree is authored once, validated at authoring time, and never mutated
//! at runtime. Sections group top-level nodes under a heading ("Pages",
//! "More"); groups nest at most two levels deep.

use crate::error::{NavError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Maximum nesting depth for groups (a group inside a group is depth 2)
pub const MAX_GROUP_DEPTH: usize = 2;

/// Stable identifier of a collapsible menu group
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a leaf decides whether it is the active route
///
/// `Contains` is deliberately loose: `/ecommerce/customers-archive` also
/// activates a leaf declared with segment `ecommerce/customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "segment", rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Current path must equal the leaf path
    Exact,
    /// Current path must contain the segment anywhere
    Contains(String),
}

/// Icon set used by the sidebar (rendered as inline SVG by the web crate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Dashboard,
    Home,
    Shop,
    Briefcase,
    ListDetails,
    Inbox,
    Calendar,
    Campaign,
    Settings,
    UserScan,
}

/// A navigable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    pub path: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<NavIcon>,
    pub policy: MatchPolicy,
}

impl Leaf {
    /// Leaf active only when the path matches exactly (the home entry)
    pub fn exact(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            icon: None,
            policy: MatchPolicy::Exact,
        }
    }

    /// Leaf active when the current path contains its own path (minus the leading `/`)
    pub fn link(path: impl Into<String>, label: impl Into<String>) -> Self {
        let path = path.into();
        let segment = path.trim_start_matches('/').to_string();
        Self {
            path,
            label: label.into(),
            icon: None,
            policy: MatchPolicy::Contains(segment),
        }
    }

    /// Override the containment segment (e.g. `inbox` for `/inbox/thread/4`)
    pub fn matching(mut self, segment: impl Into<String>) -> Self {
        self.policy = MatchPolicy::Contains(segment.into());
        self
    }

    pub fn with_icon(mut self, icon: NavIcon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// A collapsible group of nodes
///
/// A group has no path segment of its own: it is active only while one of
/// its leaves matches, so `/ecommerce/products/7` leaves "E-Commerce" dark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    pub id: GroupId,
    pub label: String,
    pub icon: NavIcon,
    pub children: Vec<NavNode>,
}

impl NavGroup {
    pub fn new(id: impl Into<GroupId>, label: impl Into<String>, icon: NavIcon) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, node: impl Into<NavNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// All descendant leaves in document order
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        for child in &self.children {
            child.collect_leaves(&mut out);
        }
        out
    }
}

/// A node of the navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavNode {
    Leaf(Leaf),
    Group(NavGroup),
}

impl NavNode {
    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Leaf>) {
        match self {
            NavNode::Leaf(leaf) => out.push(leaf),
            NavNode::Group(group) => {
                for child in &group.children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    fn collect_groups<'a>(&'a self, out: &mut Vec<&'a NavGroup>) {
        if let NavNode::Group(group) = self {
            out.push(group);
            for child in &group.children {
                child.collect_groups(out);
            }
        }
    }
}

impl From<Leaf> for NavNode {
    fn from(leaf: Leaf) -> Self {
        NavNode::Leaf(leaf)
    }
}

impl From<NavGroup> for NavNode {
    fn from(group: NavGroup) -> Self {
        NavNode::Group(group)
    }
}

/// Titled run of top-level nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    pub title: String,
    pub items: Vec<NavNode>,
}

impl NavSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, node: impl Into<NavNode>) -> Self {
        self.items.push(node.into());
        self
    }
}

/// The full, immutable navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTree {
    pub sections: Vec<NavSection>,
}

impl NavTree {
    pub fn new(sections: Vec<NavSection>) -> Self {
        Self { sections }
    }

    /// The dashboard's navigation tree
    pub fn dashboard() -> Self {
        let pages = NavSection::new("Pages")
            .item(
                NavGroup::new("dashboard", "Dashboard", NavIcon::Home)
                    .child(Leaf::exact("/", "Main")),
            )
            .item(
                NavGroup::new("ecommerce", "E-Commerce", NavIcon::Shop)
                    .child(Leaf::link("/ecommerce/customers", "Customers"))
                    .child(Leaf::link("/ecommerce/orders", "Orders"))
                    .child(Leaf::link("/ecommerce/invoices", "Invoices")),
            )
            .item(
                NavGroup::new("job-board", "Job Board", NavIcon::Briefcase)
                    .child(Leaf::link("/job/company-profile", "Company Profile")),
            )
            .item(
                NavGroup::new("tasks", "Tasks", NavIcon::ListDetails)
                    .child(Leaf::link("/tasks/kanban", "Kanban")),
            )
            .item(Leaf::link("/inbox", "Inbox").with_icon(NavIcon::Inbox))
            .item(Leaf::link("/calendar", "Calendar").with_icon(NavIcon::Calendar))
            .item(Leaf::link("/campaigns", "Campaigns").with_icon(NavIcon::Campaign))
            .item(
                NavGroup::new("settings", "Settings", NavIcon::Settings)
                    .child(Leaf::link("/settings/account", "My Account")),
            );

        let more = NavSection::new("More").item(
            NavGroup::new("authentication", "Authentication", NavIcon::UserScan)
                .child(Leaf::link("/signin", "Sign in"))
                .child(Leaf::link("/signup", "Sign up")),
        );

        Self::new(vec![pages, more])
    }

    /// Top-level nodes across all sections, in document order
    pub fn nodes(&self) -> impl Iterator<Item = &NavNode> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// Every group (nested ones included), depth-first
    pub fn groups(&self) -> Vec<&NavGroup> {
        let mut out = Vec::new();
        for node in self.nodes() {
            node.collect_groups(&mut out);
        }
        out
    }

    /// Every leaf, depth-first
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        for node in self.nodes() {
            node.collect_leaves(&mut out);
        }
        out
    }

    pub fn group(&self, id: &GroupId) -> Option<&NavGroup> {
        self.groups().into_iter().find(|g| &g.id == id)
    }

    /// Authoring-time consistency check
    ///
    /// Rejects duplicate or empty group ids, groups without children, and
    /// groups nested deeper than [`MAX_GROUP_DEPTH`].
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for node in self.nodes() {
            validate_node(node, 1, &mut seen)?;
        }
        Ok(())
    }
}

impl Default for NavTree {
    fn default() -> Self {
        Self::dashboard()
    }
}

fn validate_node<'a>(node: &'a NavNode, depth: usize, seen: &mut HashSet<&'a str>) -> Result<()> {
    let NavNode::Group(group) = node else {
        return Ok(());
    };

    if depth > MAX_GROUP_DEPTH {
        return Err(NavError::invalid_tree(format!(
            "group '{}' nested deeper than {}",
            group.id, MAX_GROUP_DEPTH
        )));
    }
    if group.id.as_str().is_empty() {
        return Err(NavError::invalid_tree(format!(
            "group '{}' has an empty id",
            group.label
        )));
    }
    if !seen.insert(group.id.as_str()) {
        return Err(NavError::invalid_tree(format!(
            "duplicate group id '{}'",
            group.id
        )));
    }
    if group.children.is_empty() {
        return Err(NavError::invalid_tree(format!(
            "group '{}' has no children",
            group.id
        )));
    }

    for child in &group.children {
        validate_node(child, depth + 1, seen)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_tree_is_valid() {
        let tree = NavTree::dashboard();
        tree.validate().unwrap();
        assert_eq!(tree.sections.len(), 2);
        assert_eq!(tree.groups().len(), 6);
        assert!(tree.group(&GroupId::from("ecommerce")).is_some());
        assert!(tree.group(&GroupId::from("missing")).is_none());
    }

    #[test]
    fn test_link_derives_contains_segment() {
        let leaf = Leaf::link("/ecommerce/orders", "Orders");
        assert_eq!(
            leaf.policy,
            MatchPolicy::Contains("ecommerce/orders".to_string())
        );
        assert_eq!(Leaf::exact("/", "Main").policy, MatchPolicy::Exact);
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let tree = NavTree::new(vec![NavSection::new("Pages")
            .item(NavGroup::new("a", "A", NavIcon::Home).child(Leaf::link("/x", "X")))
            .item(NavGroup::new("a", "A again", NavIcon::Home).child(Leaf::link("/y", "Y")))]);
        let err = tree.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate group id 'a'"));
    }

    #[test]
    fn test_validate_rejects_empty_and_deep_groups() {
        let empty = NavTree::new(vec![
            NavSection::new("Pages").item(NavGroup::new("a", "A", NavIcon::Home))
        ]);
        assert!(empty.validate().is_err());

        let deep = NavTree::new(vec![NavSection::new("Pages").item(
            NavGroup::new("a", "A", NavIcon::Home).child(
                NavGroup::new("b", "B", NavIcon::Home)
                    .child(NavGroup::new("c", "C", NavIcon::Home).child(Leaf::link("/c", "C"))),
            ),
        )]);
        assert!(deep.validate().unwrap_err().to_string().contains("nested deeper"));
    }

    #[test]
    fn test_tree_serializes_with_tags() {
        let json = serde_json::to_value(NavTree::dashboard()).unwrap();
        let first = &json["sections"][0]["items"][0];
        assert_eq!(first["kind"], "group");
        assert_eq!(first["id"], "dashboard");
        assert_eq!(first["children"][0]["policy"]["mode"], "exact");
    }
}
