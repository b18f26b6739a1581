pub mod errors;
pub mod icons;
pub mod logging;
pub mod services;
pub mod session;
pub mod utils;

// Available in fullstack mode (both client and server)
pub mod hooks;
