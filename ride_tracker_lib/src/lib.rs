pub mod chat;
pub mod ride;
pub mod vehicle;
