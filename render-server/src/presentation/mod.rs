pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod views;
