pub mod actions;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod forms;
pub mod models;
pub mod routes;
pub mod session;
