pub mod session_status;
pub mod transaction_type;
pub mod user_role;
pub mod working_shift;

pub use session_status::SessionStatus;
pub use transaction_type::TransactionType;
pub use user_role::UserRole;
pub use working_shift::WorkingShift;
