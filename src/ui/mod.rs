pub mod controller;
pub mod detail;
pub mod feed;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod route;
pub mod save;
pub mod users;
