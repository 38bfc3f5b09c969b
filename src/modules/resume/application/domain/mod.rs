pub mod entities;
pub mod inputs;
pub mod section;
