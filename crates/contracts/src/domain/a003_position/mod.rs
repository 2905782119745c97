pub mod aggregate;

pub use aggregate::{
    explain_move_failure, MoveProductData, MoveProductRequest, Position, PositionDetails,
    PositionProduct,
};
