pub mod base;
pub mod components;
pub mod fetch;
pub mod layout;
pub mod page;
pub mod state;
