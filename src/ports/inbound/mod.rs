//! These traits define what the application can do.

pub mod add_account;
pub mod controller;

pub use add_account::*;
pub use controller::*;
