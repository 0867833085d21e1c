pub mod content_view;
pub mod controls;
pub mod sidebar;
