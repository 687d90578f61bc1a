//! Structured logging for the dashboard shell
//!
//! Provides consistent, contextual logging across the application.
//! All helpers emit through `tracing` with an `operation` field so shell
//! events can be filtered by concern.

/// Log categories for shell operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    MenuFilter,
    ActiveResolve,
    Expansion,
    Navigation,
    Prefs,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::MenuFilter => "menu_filter",
            LogOperation::ActiveResolve => "active_resolve",
            LogOperation::Expansion => "expansion",
            LogOperation::Navigation => "navigation",
            LogOperation::Prefs => "prefs",
        }
    }
}

/// Log the outcome of a menu filter pass
pub fn log_filter_result(query: &str, total: usize, kept: usize) {
    tracing::debug!(
        operation = LogOperation::MenuFilter.as_str(),
        query = query,
        total_nodes = total,
        kept_nodes = kept,
        "Menu tree filtered"
    );
}

/// Log the resolved active menu for a path
pub fn log_active_resolved(path: &str, node_id: Option<&str>, title: &str) {
    tracing::debug!(
        operation = LogOperation::ActiveResolve.as_str(),
        path = path,
        node_id = node_id.unwrap_or("<none>"),
        title = title,
        "Active menu resolved"
    );
}

/// Log an explicit group toggle
pub fn log_group_toggled(id: &str, now_open: bool) {
    tracing::debug!(
        operation = LogOperation::Expansion.as_str(),
        group_id = id,
        now_open = now_open,
        "Group toggled"
    );
}

/// Log an auto-expansion pass (route change or live search)
pub fn log_auto_expand(trigger: &str, open_count: usize) {
    tracing::debug!(
        operation = LogOperation::Expansion.as_str(),
        trigger = trigger,
        open_groups = open_count,
        "Auto-expansion applied"
    );
}

/// Log a route change seen by the layout
pub fn log_navigation(path: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        "Navigated"
    );
}

/// Log a preference load/save failure (non-fatal, shell falls back to defaults)
pub fn log_prefs_error(action: &str, error: &crate::shared::errors::AppError) {
    tracing::warn!(
        operation = LogOperation::Prefs.as_str(),
        action = action,
        error = %error,
        "UI preference persistence failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::MenuFilter.as_str(), "menu_filter");
        assert_eq!(LogOperation::ActiveResolve.as_str(), "active_resolve");
        assert_eq!(LogOperation::Expansion.as_str(), "expansion");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Prefs.as_str(), "prefs");
    }
}
