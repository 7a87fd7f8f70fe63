// Modal rendering modules
mod components;
mod confirm;
mod group_dialog;
mod help;

pub use components::*;
pub use confirm::*;
pub use group_dialog::*;
pub use help::*;
