pub mod controls;
pub mod session;
