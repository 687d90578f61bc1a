//! Menu tree engine
//!
//! Single consolidated implementation of menu search filtering, active-item
//! resolution and expansion state. Every sidebar/navbar variant consumes this
//! module instead of carrying its own copy of the logic.
//!
//! All queries here are pure functions over the static tree; the only mutable
//! piece is [`ExpansionState`], owned by the presentation layer and updated
//! through the explicit operations below.

use std::collections::HashSet;

use crate::domain::models::menu::MenuNode;

/// Literal, case-insensitive containment. Never interpreted as a pattern, so
/// user-typed metacharacters cannot change match semantics.
fn title_matches(title: &str, needle_lower: &str) -> bool {
    title.to_lowercase().contains(needle_lower)
}

/// Filter the tree down to nodes that match `query` themselves or through a
/// descendant.
///
/// The keep predicate is `title matches OR some filtered child survives`, and
/// a kept node always carries its recursively filtered children: a title
/// match on an ancestor does not exempt descendants from the match test.
/// Sibling order is preserved. An empty (or whitespace-only) query returns a
/// structural copy of the input.
pub fn filter_tree(tree: &[MenuNode], query: &str) -> Vec<MenuNode> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tree.to_vec();
    }
    filter_nodes(tree, &needle)
}

fn filter_nodes(nodes: &[MenuNode], needle_lower: &str) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter_map(|node| {
            let children = filter_nodes(&node.children, needle_lower);
            if title_matches(&node.title, needle_lower) || !children.is_empty() {
                Some(MenuNode {
                    children,
                    ..node.clone()
                })
            } else {
                None
            }
        })
        .collect()
}

/// Total number of nodes in a (sub)tree, groups included.
pub fn count_nodes(nodes: &[MenuNode]) -> usize {
    nodes.iter().map(|node| 1 + count_nodes(&node.children)).sum()
}

/// Result of resolving the current location against the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveMenu {
    pub node_id: Option<String>,
    pub title: String,
}

/// Resolve which node the current path points at.
///
/// Scans top-level nodes in declaration order; for each, its own route is
/// checked first, then its direct children's routes. Routes compare by exact
/// string equality, with no prefix or trailing-slash normalization. When
/// nothing matches, `node_id` is `None` and `fallback_title` is returned.
pub fn resolve_active(tree: &[MenuNode], current_path: &str, fallback_title: &str) -> ActiveMenu {
    for item in tree {
        if item.route.as_deref() == Some(current_path) {
            return ActiveMenu {
                node_id: Some(item.id.clone()),
                title: item.title.clone(),
            };
        }
        for child in &item.children {
            if child.route.as_deref() == Some(current_path) {
                return ActiveMenu {
                    node_id: Some(child.id.clone()),
                    title: child.title.clone(),
                };
            }
        }
    }
    ActiveMenu {
        node_id: None,
        title: fallback_title.to_string(),
    }
}

/// Whether a node should highlight (and auto-expand) for the current path:
/// its own route matches, or a DIRECT child's route matches.
///
/// Deliberately not recursive past one level. The shipped tree is exactly two
/// levels deep, and a grandchild match marking a distant ancestor active is
/// not wanted behavior for this shell.
pub fn is_active_group(node: &MenuNode, current_path: &str) -> bool {
    node.route.as_deref() == Some(current_path)
        || node
            .children
            .iter()
            .any(|child| child.route.as_deref() == Some(current_path))
}

/// A slice of a menu title, flagged when it is part of a query match.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleSegment {
    pub text: String,
    pub matched: bool,
}

impl TitleSegment {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// Split `title` into alternating plain/matched segments for a literal,
/// case-insensitive query, preserving the original casing. An empty query
/// yields the whole title as a single unmatched segment.
pub fn highlight_title(title: &str, query: &str) -> Vec<TitleSegment> {
    let needle = query.trim().to_lowercase();
    let lower = title.to_lowercase();
    // Case folding that changes byte length (non-ASCII edge) defeats the
    // index mapping back into `title`; render unhighlighted in that case.
    if needle.is_empty() || lower.len() != title.len() {
        return vec![TitleSegment::new(title, false)];
    }

    let mut segments = Vec::new();
    let mut pos = 0;
    while let Some(found) = lower[pos..].find(&needle) {
        let start = pos + found;
        let end = start + needle.len();
        // Equal total length does not guarantee aligned offsets: compensating
        // folds ("İẞ" folds 2→3 and 3→2 bytes) can land a match offset inside
        // a character of `title`. Render unhighlighted rather than slice there.
        if !title.is_char_boundary(start) || !title.is_char_boundary(end) {
            return vec![TitleSegment::new(title, false)];
        }
        if start > pos {
            segments.push(TitleSegment::new(&title[pos..start], false));
        }
        segments.push(TitleSegment::new(&title[start..end], true));
        pos = end;
    }
    if pos < title.len() {
        segments.push(TitleSegment::new(&title[pos..], false));
    }
    segments
}

/// Set of group ids currently rendered expanded.
///
/// Auto-expansion only ever adds ids; the only way a group closes is an
/// explicit [`toggle`](ExpansionState::toggle).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState {
    open: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a configured default-open set (by convention the root
    /// group only).
    pub fn with_defaults<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            open: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Flip membership. An id the tree does not contain is still just a set
    /// entry, never a fault.
    pub fn toggle(&mut self, id: &str) {
        if !self.open.remove(id) {
            self.open.insert(id.to_string());
        }
    }

    /// Open every group the current path is nested inside (per
    /// [`is_active_group`]). Never closes anything.
    pub fn auto_expand_for_route(&mut self, tree: &[MenuNode], current_path: &str) {
        self.expand_active(tree, current_path);
    }

    fn expand_active(&mut self, nodes: &[MenuNode], current_path: &str) {
        for node in nodes {
            if node.is_group() {
                if is_active_group(node, current_path) {
                    self.open.insert(node.id.clone());
                }
                self.expand_active(&node.children, current_path);
            }
        }
    }

    /// Open every group that survived filtering with at least one child, so
    /// search hits are visible without manual expansion. Never closes groups
    /// the user had open.
    pub fn auto_expand_for_search(&mut self, filtered: &[MenuNode]) {
        for node in filtered {
            if node.is_group() {
                self.open.insert(node.id.clone());
                self.auto_expand_for_search(&node.children);
            }
        }
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::icon::Icon;

    fn leaf(id: &str, title: &str, route: &str) -> MenuNode {
        MenuNode::leaf(id, title, Icon::FileText, route)
    }

    fn group(id: &str, title: &str, children: Vec<MenuNode>) -> MenuNode {
        MenuNode::group(id, title, Icon::Menu, children)
    }

    /// Two-level tree shaped like the shipped navigation.
    fn sample_tree() -> Vec<MenuNode> {
        vec![
            leaf("dashboard", "Dashboard", "/"),
            group(
                "mainmenu",
                "Main Menu",
                vec![
                    leaf("reserve", "Reserve", "/mainmenu/reserve"),
                    leaf("shift", "Shift", "/mainmenu/shift"),
                ],
            ),
            group(
                "report",
                "Report",
                vec![leaf("attendance", "Attendance", "/report/attendance")],
            ),
        ]
    }

    fn subtree_matches(node: &MenuNode, needle_lower: &str) -> bool {
        node.title.to_lowercase().contains(needle_lower)
            || node.children.iter().any(|c| subtree_matches(c, needle_lower))
    }

    #[test]
    fn test_filter_identity_on_empty_query() {
        let tree = sample_tree();
        assert_eq!(filter_tree(&tree, ""), tree);
        assert_eq!(filter_tree(&tree, "   "), tree);
    }

    #[test]
    fn test_filter_keeps_only_matching_subtrees() {
        let tree = sample_tree();
        let filtered = filter_tree(&tree, "reserve");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "mainmenu");
        assert_eq!(filtered[0].children.len(), 1);
        assert_eq!(filtered[0].children[0].id, "reserve");

        // Monotonicity: every surviving node matches itself or via descendant
        for node in &filtered {
            assert!(subtree_matches(node, "reserve"));
        }
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let tree = sample_tree();
        assert_eq!(filter_tree(&tree, "RESERVE"), filter_tree(&tree, "reserve"));
    }

    #[test]
    fn test_filter_preserves_sibling_order() {
        let tree = vec![
            leaf("a", "Alpha site", "/a"),
            leaf("b", "Beta alpha", "/b"),
            leaf("c", "Alphabet", "/c"),
        ];
        let ids: Vec<String> = filter_tree(&tree, "alpha").into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        // "s" hits Dashboard plus both mainmenu children; report has no match
        let tree = sample_tree();
        let filtered = filter_tree(&tree, "s");
        let ids: Vec<&str> = filtered.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["dashboard", "mainmenu"]);

        let child_ids: Vec<&str> = filtered[1].children.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(child_ids, vec!["reserve", "shift"]);
    }

    #[test]
    fn test_matching_group_title_still_filters_children() {
        // Group title matches the query but no child does: the group is kept
        // with an empty child list, not with its children verbatim.
        let tree = vec![group(
            "report",
            "Report",
            vec![leaf("attendance", "Attendance", "/report/attendance")],
        )];
        let filtered = filter_tree(&tree, "report");
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].children.is_empty());
    }

    #[test]
    fn test_filter_drops_nonmatching_leaves() {
        let tree = sample_tree();
        let filtered = filter_tree(&tree, "shift");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].children.len(), 1);
        assert_eq!(filtered[0].children[0].id, "shift");
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let tree = sample_tree();
        let snapshot = tree.clone();
        let _ = filter_tree(&tree, "reserve");
        assert_eq!(tree, snapshot);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let tree = vec![leaf("a", "Plain (extra)", "/a"), leaf("b", "Other", "/b")];
        let filtered = filter_tree(&tree, "(extra)");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "a");
        // A regex-style wildcard matches nothing as a literal
        assert!(filter_tree(&tree, ".*").is_empty());
    }

    #[test]
    fn test_resolve_active_exact_match() {
        let tree = sample_tree();

        let active = resolve_active(&tree, "/", "Dashboard");
        assert_eq!(active.node_id.as_deref(), Some("dashboard"));
        assert_eq!(active.title, "Dashboard");

        let active = resolve_active(&tree, "/mainmenu/reserve", "Dashboard");
        assert_eq!(active.node_id.as_deref(), Some("reserve"));
        assert_eq!(active.title, "Reserve");
    }

    #[test]
    fn test_resolve_active_unknown_path_falls_back() {
        let tree = sample_tree();
        let active = resolve_active(&tree, "/unknown", "Dashboard");
        assert_eq!(active.node_id, None);
        assert_eq!(active.title, "Dashboard");
    }

    #[test]
    fn test_resolve_active_no_prefix_matching() {
        let tree = sample_tree();
        let active = resolve_active(&tree, "/mainmenu/reserve/extra", "Dashboard");
        assert_eq!(active.node_id, None);
    }

    #[test]
    fn test_is_active_group_direct_children_only() {
        let tree = sample_tree();
        let mainmenu = &tree[1];

        assert!(is_active_group(mainmenu, "/mainmenu/reserve"));
        assert!(!is_active_group(mainmenu, "/mainmenu/reserve/extra"));
        assert!(!is_active_group(mainmenu, "/report/attendance"));

        // A grandchild match does not mark a top-level group active
        let deep = vec![group(
            "top",
            "Top",
            vec![group("mid", "Mid", vec![leaf("leaf", "Leaf", "/top/mid/leaf")])],
        )];
        assert!(!is_active_group(&deep[0], "/top/mid/leaf"));
        assert!(is_active_group(&deep[0].children[0], "/top/mid/leaf"));
    }

    #[test]
    fn test_toggle_pairing_restores_prior_state() {
        let mut state = ExpansionState::with_defaults(["mainmenu"]);

        state.toggle("mainmenu");
        state.toggle("mainmenu");
        assert!(state.is_open("mainmenu"));

        state.toggle("report");
        state.toggle("report");
        assert!(!state.is_open("report"));
    }

    #[test]
    fn test_toggle_unknown_id_is_harmless() {
        let mut state = ExpansionState::new();
        state.toggle("no-such-group");
        assert!(state.is_open("no-such-group"));
        state.toggle("no-such-group");
        assert!(!state.is_open("no-such-group"));
    }

    #[test]
    fn test_auto_expand_for_route_opens_active_groups_only() {
        let tree = sample_tree();
        let mut state = ExpansionState::new();

        state.auto_expand_for_route(&tree, "/mainmenu/reserve");
        assert!(state.is_open("mainmenu"));
        assert!(!state.is_open("report"));

        // Re-running on a new path only adds
        state.auto_expand_for_route(&tree, "/report/attendance");
        assert!(state.is_open("mainmenu"));
        assert!(state.is_open("report"));
    }

    #[test]
    fn test_search_expansion_survives_cleared_query() {
        let tree = sample_tree();
        let mut state = ExpansionState::new();

        let filtered = filter_tree(&tree, "reserve");
        state.auto_expand_for_search(&filtered);
        assert!(state.is_open("mainmenu"));

        // Clearing the query is not an expansion operation; the group stays
        // open until explicitly toggled.
        let _ = filter_tree(&tree, "");
        assert!(state.is_open("mainmenu"));

        state.toggle("mainmenu");
        assert!(!state.is_open("mainmenu"));
    }

    #[test]
    fn test_end_to_end_search_scenario() {
        let tree = vec![
            leaf("dashboard", "Dashboard", "/"),
            group("mainmenu", "Main Menu", vec![leaf("reserve", "Reserve", "/mainmenu/reserve")]),
        ];

        let filtered = filter_tree(&tree, "rese");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "mainmenu");
        assert_eq!(filtered[0].children.len(), 1);
        assert_eq!(filtered[0].children[0].id, "reserve");
    }

    #[test]
    fn test_end_to_end_route_scenario() {
        let tree = vec![
            leaf("dashboard", "Dashboard", "/"),
            group("mainmenu", "Main Menu", vec![leaf("reserve", "Reserve", "/mainmenu/reserve")]),
        ];
        let path = "/mainmenu/reserve";

        let active = resolve_active(&tree, path, "Dashboard");
        assert_eq!(active.node_id.as_deref(), Some("reserve"));
        assert_eq!(active.title, "Reserve");
        assert!(is_active_group(&tree[1], path));

        let mut state = ExpansionState::new();
        state.auto_expand_for_route(&tree, path);
        assert!(state.is_open("mainmenu"));
    }

    #[test]
    fn test_highlight_title_segments() {
        let segments = highlight_title("Reserve setting", "se");
        let rendered: Vec<(&str, bool)> =
            segments.iter().map(|s| (s.text.as_str(), s.matched)).collect();
        assert_eq!(
            rendered,
            vec![("Re", false), ("se", true), ("rve ", false), ("se", true), ("tting", false)]
        );

        // Original casing is preserved in matched segments
        let segments = highlight_title("RESERVE", "reserve");
        assert_eq!(segments.len(), 1);
        assert!(segments[0].matched);
        assert_eq!(segments[0].text, "RESERVE");
    }

    #[test]
    fn test_highlight_title_compensating_case_folds() {
        // 'İ' lowercases 2→3 bytes and 'ẞ' 3→2, so the folded string keeps
        // the original total length while its match offsets fall inside
        // characters of the original. The title must render as one unmatched
        // segment, not panic on a mid-character slice.
        let segments = highlight_title("İẞ", "ß");
        assert_eq!(segments, vec![TitleSegment::new("İẞ", false)]);
    }

    #[test]
    fn test_highlight_title_length_changing_fold() {
        // 'İ' alone grows under folding; length mismatch renders unhighlighted
        let segments = highlight_title("İstanbul", "stan");
        assert_eq!(segments, vec![TitleSegment::new("İstanbul", false)]);
    }

    #[test]
    fn test_highlight_title_empty_query() {
        let segments = highlight_title("Reserve", "");
        assert_eq!(segments, vec![TitleSegment::new("Reserve", false)]);
    }

    #[test]
    fn test_count_nodes() {
        let tree = sample_tree();
        assert_eq!(count_nodes(&tree), 6);
        assert_eq!(count_nodes(&filter_tree(&tree, "reserve")), 2);
    }
}
