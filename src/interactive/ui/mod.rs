pub mod app_state;
pub mod components;
pub mod events;
pub mod renderer;
