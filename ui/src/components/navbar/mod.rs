pub mod menu;
pub mod utils;
pub mod view;

pub use menu::{Menu, MenuState};
pub use view::NavBar;
