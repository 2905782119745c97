pub mod aggregate;

pub use aggregate::{
    AddLocationDto, LocationFilter, NewShelfDto, ProductLocation, Shelf, UpdateQuantityDto,
    UpdateShelfDto,
};
