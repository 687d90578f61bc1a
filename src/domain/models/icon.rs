use serde::{Deserialize, Serialize};

/// Fixed icon set referenced by menu nodes and dashboard widgets.
///
/// Icons are plain identifiers resolved to a glyph at render time, never
/// stored renderer callbacks, so domain data stays serializable and inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    Home,
    Menu,
    Clock,
    MapPin,
    Calendar,
    CalendarPlus,
    CheckCircle,
    Settings,
    Timer,
    Bot,
    Grid,
    FileText,
    Users,
    MessageSquare,
    Route,
    Building,
    Building2,
    User,
    UserCheck,
    Car,
    Shield,
    Package,
    DollarSign,
    ShoppingCart,
    Eye,
    TrendingUp,
    Activity,
    BarChart,
    Bell,
    Globe,
    Search,
    LogOut,
}

impl Icon {
    /// Glyph rendered by the presentation layer.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "🏠",
            Icon::Menu => "☰",
            Icon::Clock => "🕒",
            Icon::MapPin => "📍",
            Icon::Calendar => "📅",
            Icon::CalendarPlus => "🗓️",
            Icon::CheckCircle => "✅",
            Icon::Settings => "⚙️",
            Icon::Timer => "⏱️",
            Icon::Bot => "🤖",
            Icon::Grid => "🔲",
            Icon::FileText => "📄",
            Icon::Users => "👥",
            Icon::MessageSquare => "💬",
            Icon::Route => "🛣️",
            Icon::Building => "🏢",
            Icon::Building2 => "🏬",
            Icon::User => "👤",
            Icon::UserCheck => "🪪",
            Icon::Car => "🚗",
            Icon::Shield => "🛡️",
            Icon::Package => "📦",
            Icon::DollarSign => "💲",
            Icon::ShoppingCart => "🛒",
            Icon::Eye => "👁️",
            Icon::TrendingUp => "📈",
            Icon::Activity => "⚡",
            Icon::BarChart => "📊",
            Icon::Bell => "🔔",
            Icon::Globe => "🌐",
            Icon::Search => "🔍",
            Icon::LogOut => "🚪",
        }
    }
}
