pub mod aggregate;

pub use aggregate::{Supplier, SupplierDto};
