pub mod a001_product;
pub mod a002_supplier;
pub mod a003_position;
pub mod a004_shelf;
pub mod a005_transaction;
pub mod a006_stocktaking;
