pub mod keys;
pub mod layout;
pub mod pane;
pub mod renderer;
pub mod table;
pub mod theme;
pub mod widgets;
