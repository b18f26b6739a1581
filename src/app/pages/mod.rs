pub mod home;
pub mod register;
pub mod routes;
pub mod search;

pub use home::Home;
pub use register::RegisterPage;
pub use routes::{App, Route};
pub use search::SearchPage;
