//! Route matching
//!
//! Pure functions from the current location path to the active node(s).
//! Evaluated on every render; the tree is small so nothing is cached.

use crate::nav::{GroupId, Leaf, MatchPolicy, NavGroup, NavNode, NavTree};

/// Maps the current path onto the navigation tree
pub struct RouteMatcher;

impl RouteMatcher {
    /// Whether a leaf's declared policy accepts `path`
    pub fn leaf_matches(leaf: &Leaf, path: &str) -> bool {
        match &leaf.policy {
            MatchPolicy::Exact => path == leaf.path,
            MatchPolicy::Contains(segment) => path.contains(segment.as_str()),
        }
    }

    /// A group is active iff any descendant leaf matches
    pub fn group_matches(group: &NavGroup, path: &str) -> bool {
        group
            .children
            .iter()
            .any(|child| Self::matches(child, path))
    }

    pub fn matches(node: &NavNode, path: &str) -> bool {
        match node {
            NavNode::Leaf(leaf) => Self::leaf_matches(leaf, path),
            NavNode::Group(group) => Self::group_matches(group, path),
        }
    }

    /// First matching leaf in document order
    pub fn active_leaf<'a>(tree: &'a NavTree, path: &str) -> Option<&'a Leaf> {
        tree.leaves()
            .into_iter()
            .find(|leaf| Self::leaf_matches(leaf, path))
    }

    /// Ids of every group reporting active for `path`
    pub fn active_groups<'a>(tree: &'a NavTree, path: &str) -> Vec<&'a GroupId> {
        tree.groups()
            .into_iter()
            .filter(|group| Self::group_matches(group, path))
            .map(|group| &group.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{NavIcon, NavSection};

    #[test]
    fn test_root_entry_is_exact() {
        let main = Leaf::exact("/", "Main");
        assert!(RouteMatcher::leaf_matches(&main, "/"));
        assert!(!RouteMatcher::leaf_matches(&main, "/inbox"));
        assert!(!RouteMatcher::leaf_matches(&main, ""));
    }

    #[test]
    fn test_contains_is_loose() {
        let inbox = Leaf::link("/inbox", "Inbox");
        assert!(RouteMatcher::leaf_matches(&inbox, "/inbox"));
        assert!(RouteMatcher::leaf_matches(&inbox, "/inbox/thread/7"));
        // Known false positive of substring matching
        assert!(RouteMatcher::leaf_matches(&inbox, "/archive/inbox-old"));
        assert!(!RouteMatcher::leaf_matches(&inbox, "/calendar"));
    }

    #[test]
    fn test_group_active_iff_descendant_matches() {
        let tree = NavTree::dashboard();
        let ecommerce = tree.group(&GroupId::from("ecommerce")).unwrap();

        assert!(RouteMatcher::group_matches(ecommerce, "/ecommerce/orders"));
        assert!(!RouteMatcher::group_matches(ecommerce, "/tasks/kanban"));
        // No leaf covers the bare prefix
        assert!(!RouteMatcher::group_matches(ecommerce, "/ecommerce"));
        assert!(!RouteMatcher::group_matches(ecommerce, "/ecommerce/products/7"));
    }

    #[test]
    fn test_nested_group_propagates_activity() {
        let outer = NavGroup::new("outer", "Outer", NavIcon::Home).child(
            NavGroup::new("inner", "Inner", NavIcon::Home).child(Leaf::link("/deep/page", "Deep")),
        );
        let node = NavNode::Group(outer);
        assert!(RouteMatcher::matches(&node, "/deep/page"));
        assert!(!RouteMatcher::matches(&node, "/shallow"));
    }

    #[test]
    fn test_active_leaf_and_groups() {
        let tree = NavTree::dashboard();

        let leaf = RouteMatcher::active_leaf(&tree, "/ecommerce/invoices").unwrap();
        assert_eq!(leaf.label, "Invoices");
        assert_eq!(
            RouteMatcher::active_groups(&tree, "/ecommerce/invoices"),
            vec![&GroupId::from("ecommerce")]
        );

        assert_eq!(RouteMatcher::active_leaf(&tree, "/").unwrap().label, "Main");
        assert!(RouteMatcher::active_leaf(&tree, "/nowhere").is_none());
        assert!(RouteMatcher::active_groups(&tree, "/inbox").is_empty());
    }

    #[test]
    fn test_empty_tree_has_no_active_node() {
        let tree = NavTree::new(vec![NavSection::new("Pages")]);
        assert!(RouteMatcher::active_leaf(&tree, "/").is_none());
    }
}
