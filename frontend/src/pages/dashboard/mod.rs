pub mod components;
pub mod layout;
pub mod panel;
pub mod range;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::DashboardPage;
