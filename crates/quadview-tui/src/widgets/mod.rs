pub mod pane_frame;
pub mod table_view;
