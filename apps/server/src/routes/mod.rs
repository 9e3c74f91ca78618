pub mod session;
pub mod topics;
