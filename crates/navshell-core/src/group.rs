//! Per-group open/closed state machine
//!
//! `Closed <-> Open` on explicit header clicks, seeded from the route at
//! mount. While the sidebar is collapsed to icons, a header click pins the
//! sidebar instead of toggling; a second click is needed to open the group.
//!
//! Precedence between route seeding and user toggles: an explicit toggle
//! wins until the group goes from inactive to active again. Navigation
//! never closes a group.

use crate::matcher::RouteMatcher;
use crate::nav::{GroupId, NavGroup};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupState {
    Closed,
    Open,
}

impl GroupState {
    pub fn is_open(self) -> bool {
        matches!(self, GroupState::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            GroupState::Closed => GroupState::Open,
            GroupState::Open => GroupState::Closed,
        }
    }
}

impl From<bool> for GroupState {
    fn from(open: bool) -> Self {
        if open {
            GroupState::Open
        } else {
            GroupState::Closed
        }
    }
}

/// What last decided the group's open flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenOrigin {
    /// Closed since mount, nothing touched it
    Default,
    /// Opened because the current route lies inside the group
    Seeded,
    /// Restored from the persisted open-group set
    Persisted,
    /// Set by a header click
    User,
}

/// Result of a header click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderClick {
    /// Sidebar was collapsed; it is now pinned and the group is untouched
    PinnedSidebar,
    Toggled(GroupState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    id: GroupId,
    state: GroupState,
    origin: OpenOrigin,
    was_active: bool,
}

impl MenuGroup {
    /// Mount-time state: open if the route is inside the group, otherwise
    /// whatever the persisted set says
    pub fn mount(group: &NavGroup, path: &str, persisted_open: bool) -> Self {
        let active = RouteMatcher::group_matches(group, path);
        let (state, origin) = if active {
            (GroupState::Open, OpenOrigin::Seeded)
        } else if persisted_open {
            (GroupState::Open, OpenOrigin::Persisted)
        } else {
            (GroupState::Closed, OpenOrigin::Default)
        };

        Self {
            id: group.id.clone(),
            state,
            origin,
            was_active: active,
        }
    }

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn origin(&self) -> OpenOrigin {
        self.origin
    }

    /// Unconditional user toggle
    pub fn toggle(&mut self) -> GroupState {
        self.state = self.state.toggled();
        self.origin = OpenOrigin::User;
        self.state
    }

    /// Header click under the two-step rule
    pub fn click_header(&mut self, sidebar_expanded: bool) -> HeaderClick {
        if sidebar_expanded {
            HeaderClick::Toggled(self.toggle())
        } else {
            HeaderClick::PinnedSidebar
        }
    }

    /// Re-evaluate seeding after a route change; returns the new state if it changed
    pub fn on_navigate(&mut self, active_now: bool) -> Option<GroupState> {
        let became_active = active_now && !self.was_active;
        self.was_active = active_now;

        if !active_now || self.state.is_open() {
            if became_active {
                self.origin = OpenOrigin::Seeded;
            }
            return None;
        }

        if became_active || self.origin != OpenOrigin::User {
            self.state = GroupState::Open;
            self.origin = OpenOrigin::Seeded;
            return Some(self.state);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{Leaf, NavIcon};

    fn ecommerce() -> NavGroup {
        NavGroup::new("ecommerce", "E-Commerce", NavIcon::Shop)
            .child(Leaf::link("/ecommerce/customers", "Customers"))
            .child(Leaf::link("/ecommerce/orders", "Orders"))
    }

    #[test]
    fn test_mount_seeds_from_route() {
        let group = MenuGroup::mount(&ecommerce(), "/ecommerce/customers", false);
        assert_eq!(group.state(), GroupState::Open);
        assert_eq!(group.origin(), OpenOrigin::Seeded);

        let group = MenuGroup::mount(&ecommerce(), "/inbox", false);
        assert_eq!(group.state(), GroupState::Closed);
        assert_eq!(group.origin(), OpenOrigin::Default);

        let group = MenuGroup::mount(&ecommerce(), "/inbox", true);
        assert_eq!(group.state(), GroupState::Open);
        assert_eq!(group.origin(), OpenOrigin::Persisted);
    }

    #[test]
    fn test_collapsed_click_does_not_toggle() {
        let mut group = MenuGroup::mount(&ecommerce(), "/", false);
        assert_eq!(group.click_header(false), HeaderClick::PinnedSidebar);
        assert_eq!(group.state(), GroupState::Closed);

        assert_eq!(
            group.click_header(true),
            HeaderClick::Toggled(GroupState::Open)
        );
        assert_eq!(group.origin(), OpenOrigin::User);
    }

    #[test]
    fn test_navigation_never_closes() {
        let mut group = MenuGroup::mount(&ecommerce(), "/ecommerce/customers", false);
        assert_eq!(group.on_navigate(false), None);
        assert!(group.is_open());
    }

    #[test]
    fn test_user_close_wins_while_active() {
        let mut group = MenuGroup::mount(&ecommerce(), "/ecommerce/customers", false);
        group.toggle();
        assert!(!group.is_open());

        // Moving between pages of the same group keeps the user's choice
        assert_eq!(group.on_navigate(true), None);
        assert!(!group.is_open());
    }

    #[test]
    fn test_reentering_group_reseeds() {
        let mut group = MenuGroup::mount(&ecommerce(), "/ecommerce/customers", false);
        group.toggle();

        assert_eq!(group.on_navigate(false), None);
        assert_eq!(group.on_navigate(true), Some(GroupState::Open));
        assert_eq!(group.origin(), OpenOrigin::Seeded);
    }

    #[test]
    fn test_untouched_group_opens_when_route_enters() {
        let mut group = MenuGroup::mount(&ecommerce(), "/inbox", false);
        assert_eq!(group.on_navigate(true), Some(GroupState::Open));
    }
}
