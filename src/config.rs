//! Shell configuration
//!
//! Branding and navigation defaults consumed across the layout via context.
//! Compiled-in defaults; serde derives keep the shape loadable from JSON if a
//! deployment ever needs to override branding.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Product name shown in the sidebar header.
    pub app_name: String,
    pub app_subtitle: String,
    /// Tenant line shown under the active menu title in the navbar.
    pub customer_name: String,
    /// Title shown when no menu route matches the current path.
    pub fallback_title: String,
    /// Group ids expanded on first render.
    pub default_open: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "TOGETA MOVE".to_string(),
            app_subtitle: "Reservation System".to_string(),
            customer_name: "Toyota Mortor Asia (TMA)".to_string(),
            fallback_title: "Dashboard".to_string(),
            default_open: vec!["dashboard".to_string()],
        }
    }
}
