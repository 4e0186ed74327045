pub mod catalog;
pub mod common;
pub mod components;
pub mod course;
pub mod routes;
