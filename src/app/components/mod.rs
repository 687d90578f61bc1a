pub mod activity_feed;
pub mod card;
pub mod locale_menu;
pub mod search_bar;
pub mod stat_card;
pub mod user_menu;

pub use activity_feed::ActivityFeed;
pub use card::Card;
pub use locale_menu::LocaleMenu;
pub use search_bar::SearchBar;
pub use stat_card::StatCardView;
pub use user_menu::UserMenu;
