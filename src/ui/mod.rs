pub mod file_dialogs;
pub mod grid_view;
pub mod main_window;
