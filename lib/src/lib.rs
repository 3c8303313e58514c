pub mod api;
pub mod query;
pub mod song;
pub mod state;
pub mod theme;
