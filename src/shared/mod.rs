pub mod api;
pub mod patch_field;
pub mod validation;
