//! Seams between the signup core and the outside world.

pub mod inbound;
pub mod outbound;
