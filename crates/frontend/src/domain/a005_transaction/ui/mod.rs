pub mod details;
pub mod list;
pub mod movement;
pub mod sale;
