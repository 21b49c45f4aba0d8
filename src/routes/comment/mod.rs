pub mod add;
pub mod delete;
pub mod get;
pub mod unsupported;
pub mod update;
