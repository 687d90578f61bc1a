pub mod footer;
pub mod layout;
pub mod navbar;
pub mod sidebar;

pub use footer::AppFooter;
pub use layout::AppLayout;
pub use navbar::AppNavbar;
pub use sidebar::AppSidebar;
