//! Static navigation tree for the dashboard shell
//!
//! The tree is built once at startup and never mutated. All runtime views
//! (search filtering, expansion, active highlighting) are derived from it by
//! `domain::services::menu_tree`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::icon::Icon;

/// One entry in the navigation tree.
///
/// A node with a non-empty `children` list is a group and renders as a
/// collapsible section; a node with empty `children` is a leaf and renders
/// as a link. A node may in principle carry both a route and children, in
/// which case it still behaves as a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Globally unique across the whole tree; key for expansion state.
    pub id: String,
    pub title: String,
    pub icon: Icon,
    /// Present on actionable (leaf) nodes, absent on pure groups.
    pub route: Option<String>,
    #[serde(default)]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn leaf(id: &str, title: &str, icon: Icon, route: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            icon,
            route: Some(route.to_string()),
            children: Vec::new(),
        }
    }

    pub fn group(id: &str, title: &str, icon: Icon, children: Vec<MenuNode>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            icon,
            route: None,
            children,
        }
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The fixed TOGETA MOVE navigation tree, two levels deep.
pub static MAIN_MENU: Lazy<Vec<MenuNode>> = Lazy::new(|| {
    vec![
        MenuNode::leaf("dashboard", "DASHBOARD", Icon::Home, "/"),
        MenuNode::group(
            "mainmenu",
            "MAIN MENU",
            Icon::Menu,
            vec![
                MenuNode::leaf(
                    "tracking-history",
                    "Tracking history",
                    Icon::Clock,
                    "/mainmenu/tracking-history",
                ),
                MenuNode::leaf(
                    "tracking-manual",
                    "Tracking manual",
                    Icon::MapPin,
                    "/mainmenu/tracking-manual",
                ),
                MenuNode::leaf("calendar", "Calendar", Icon::Calendar, "/mainmenu/calendar"),
                MenuNode::leaf("reserve", "Reserve", Icon::CalendarPlus, "/mainmenu/reserve"),
                MenuNode::leaf(
                    "approved-reserve",
                    "Approved reserve",
                    Icon::CheckCircle,
                    "/mainmenu/approved-reserve",
                ),
                MenuNode::leaf(
                    "reserve-setting",
                    "Reserve setting",
                    Icon::Settings,
                    "/mainmenu/reserve-setting",
                ),
                MenuNode::leaf("shift", "Shift", Icon::Clock, "/mainmenu/shift"),
                MenuNode::leaf("adjust-time", "Adjust time", Icon::Timer, "/mainmenu/adjust-time"),
            ],
        ),
        MenuNode::group(
            "rpa",
            "RPA",
            Icon::Bot,
            vec![
                MenuNode::leaf("rpa-overview", "Rpa", Icon::Bot, "/rpa/rpa"),
                MenuNode::leaf("arrange", "Arrange", Icon::Grid, "/rpa/arrange"),
            ],
        ),
        MenuNode::group(
            "report",
            "REPORT",
            Icon::FileText,
            vec![
                MenuNode::leaf(
                    "reserve-summary",
                    "Reserve summary",
                    Icon::FileText,
                    "/report/reserve-summary",
                ),
                MenuNode::leaf("attendance", "Attendance", Icon::Users, "/report/attendance"),
                MenuNode::leaf(
                    "comment-feedback",
                    "Comment feedback",
                    Icon::MessageSquare,
                    "/report/comment-feedback",
                ),
            ],
        ),
        MenuNode::group(
            "configuration",
            "CONFIGURATION",
            Icon::Settings,
            vec![
                MenuNode::leaf("employee", "Employee", Icon::Users, "/configuration/employee"),
                MenuNode::leaf(
                    "configuration-general",
                    "Configuration",
                    Icon::Settings,
                    "/configuration/configuration",
                ),
                MenuNode::leaf("zone", "Zone", Icon::MapPin, "/configuration/zone"),
                MenuNode::leaf("route-zone", "Route zone", Icon::Route, "/configuration/route-zone"),
                MenuNode::leaf("route", "Route", Icon::Route, "/configuration/route"),
            ],
        ),
        MenuNode::group(
            "vender-setting",
            "VENDER SETTING",
            Icon::Building2,
            vec![
                MenuNode::leaf("vender", "Vender", Icon::Building2, "/vender-setting/vender"),
                MenuNode::leaf("driver", "Driver", Icon::User, "/vender-setting/driver"),
                MenuNode::leaf("vehicle", "Vehicle", Icon::Car, "/vender-setting/vehicle"),
                MenuNode::leaf(
                    "vehicle-type",
                    "Vehicle type",
                    Icon::Car,
                    "/vender-setting/vehicle-type",
                ),
            ],
        ),
        MenuNode::group(
            "setting",
            "SETTING",
            Icon::Settings,
            vec![
                MenuNode::leaf("company", "Company", Icon::Building, "/setting/company"),
                MenuNode::leaf(
                    "organization",
                    "Organization",
                    Icon::Building2,
                    "/setting/organization",
                ),
                MenuNode::leaf(
                    "employee-type",
                    "Employee type",
                    Icon::UserCheck,
                    "/setting/employee-type",
                ),
                MenuNode::leaf(
                    "employee-level",
                    "Employee level",
                    Icon::UserCheck,
                    "/setting/employee-level",
                ),
                MenuNode::leaf("permission", "Permission", Icon::Shield, "/setting/permission"),
                MenuNode::leaf("module", "Module", Icon::Package, "/setting/module"),
                MenuNode::leaf(
                    "menu-passenger",
                    "Menu passenger",
                    Icon::Menu,
                    "/setting/menu-passenger",
                ),
                MenuNode::leaf("coordinator", "Coordinator", Icon::Users, "/setting/coordinator"),
            ],
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect_ids<'a>(nodes: &'a [MenuNode], ids: &mut Vec<&'a str>) {
        for node in nodes {
            ids.push(node.id.as_str());
            collect_ids(&node.children, ids);
        }
    }

    #[test]
    fn test_menu_ids_are_globally_unique() {
        let mut ids = Vec::new();
        collect_ids(&MAIN_MENU, &mut ids);

        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len(), "duplicate menu id in static tree");
    }

    #[test]
    fn test_every_leaf_has_a_route() {
        fn check(nodes: &[MenuNode]) {
            for node in nodes {
                if node.is_group() {
                    check(&node.children);
                } else {
                    assert!(node.route.is_some(), "leaf {} has no route", node.id);
                }
            }
        }
        check(&MAIN_MENU);
    }

    #[test]
    fn test_dashboard_is_the_root_route() {
        assert_eq!(MAIN_MENU[0].id, "dashboard");
        assert_eq!(MAIN_MENU[0].route.as_deref(), Some("/"));
        assert!(!MAIN_MENU[0].is_group());
    }

    #[test]
    fn test_tree_is_two_levels_deep() {
        for item in MAIN_MENU.iter() {
            for child in &item.children {
                assert!(child.children.is_empty(), "{} nests deeper than two levels", child.id);
            }
        }
    }
}
