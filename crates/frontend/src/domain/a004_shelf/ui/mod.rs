pub mod locations;
pub mod shelves;
