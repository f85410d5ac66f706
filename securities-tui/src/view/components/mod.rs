pub mod detail;
pub mod list;
pub mod modal;
pub mod statusbar;
pub mod toolbar;
