pub mod config;
pub mod error;
pub mod logging;

pub mod align;
pub mod inventory;
pub mod legacy;
pub mod mapping;
pub mod repair;
pub mod retry;
pub mod stage;
pub mod url_model;
pub mod verify;
pub mod workspace;
