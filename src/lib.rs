//! Mergington activities - browse extracurricular activities and, once logged
//! in as a teacher, sign students up or remove them.

pub mod auth;
pub mod catalog;
pub mod credentials;
pub mod error;
pub mod http_server;
pub mod roster;
pub mod session;
pub mod state;
