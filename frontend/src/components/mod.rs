pub mod footer;
pub mod form_state;
pub mod icons;
pub mod navbar;
pub mod pagination;
pub mod resource_dialog;
pub mod resource_screen;
pub mod toast;
