pub mod details;
pub mod list;
pub mod move_product;
