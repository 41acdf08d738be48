//! User registry service

mod service;

pub use service::UserService;
