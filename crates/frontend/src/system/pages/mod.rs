pub mod login;
pub mod personal;
