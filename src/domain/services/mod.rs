pub mod menu_tree;

pub use menu_tree::{
    count_nodes, filter_tree, highlight_title, is_active_group, resolve_active, ActiveMenu,
    ExpansionState, TitleSegment,
};
