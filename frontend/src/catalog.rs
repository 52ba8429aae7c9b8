pub mod api;
pub mod card;
pub mod components;
pub mod engine;
pub mod filter_options;
pub mod state;
