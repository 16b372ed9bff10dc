// Library for tests to access modules

pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod routes;
pub mod service;
pub mod source;
pub mod sysinfo_repo;
