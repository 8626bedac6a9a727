pub mod chat;
pub mod root_route;
