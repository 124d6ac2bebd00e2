pub mod keys;
pub mod layout;
pub mod palette;
pub mod render;
