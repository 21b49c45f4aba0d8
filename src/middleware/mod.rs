pub mod access;
pub mod authentication;
pub mod cors;
