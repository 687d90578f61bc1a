pub mod dashboard;
pub mod placeholder;
pub mod routes;

pub use dashboard::Dashboard;
pub use placeholder::{MenuPage, NotFound};
pub use routes::{App, Route};
