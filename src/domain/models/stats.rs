//! Static mock data for the dashboard page.

use serde::{Deserialize, Serialize};

use super::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

/// One tile in the dashboard stats grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub icon: Icon,
}

impl StatCard {
    fn new(title: &str, value: &str, change: &str, trend: Trend, icon: Icon) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            change: change.to_string(),
            trend,
            icon,
        }
    }
}

/// One row in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u32,
    pub action: String,
    pub user: String,
    pub time: String,
}

impl ActivityEntry {
    fn new(id: u32, action: &str, user: &str, time: &str) -> Self {
        Self {
            id,
            action: action.to_string(),
            user: user.to_string(),
            time: time.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,
    pub icon: Icon,
}

pub fn dashboard_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("Total Revenue", "$45,231.89", "+20.1%", Trend::Up, Icon::DollarSign),
        StatCard::new("Active Users", "2,350", "+180.1%", Trend::Up, Icon::Users),
        StatCard::new("Orders", "12,234", "+19%", Trend::Up, Icon::ShoppingCart),
        StatCard::new("Page Views", "573,240", "+201%", Trend::Up, Icon::Eye),
    ]
}

pub fn recent_activities() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry::new(1, "New user registered", "Alice Johnson", "2 minutes ago"),
        ActivityEntry::new(2, "Order #1234 completed", "System", "5 minutes ago"),
        ActivityEntry::new(3, "Product updated", "Bob Smith", "10 minutes ago"),
        ActivityEntry::new(4, "Payment received", "Charlie Brown", "15 minutes ago"),
        ActivityEntry::new(5, "New review posted", "Diana Prince", "20 minutes ago"),
    ]
}

pub fn quick_actions() -> Vec<QuickAction> {
    [
        ("Add User", Icon::Users),
        ("New Product", Icon::Package),
        ("View Reports", Icon::BarChart),
        ("Analytics", Icon::TrendingUp),
    ]
    .into_iter()
    .map(|(label, icon)| QuickAction {
        label: label.to_string(),
        icon,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_stats_shape() {
        let stats = dashboard_stats();
        assert_eq!(stats.len(), 4);
        assert!(stats.iter().all(|s| s.trend == Trend::Up));
    }

    #[test]
    fn test_activity_ids_are_sequential() {
        let activities = recent_activities();
        for (index, entry) in activities.iter().enumerate() {
            assert_eq!(entry.id as usize, index + 1);
        }
    }
}
