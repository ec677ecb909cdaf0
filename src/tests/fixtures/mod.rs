pub mod directory;
pub mod events;
pub mod state;
