// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod messages;
pub mod openapi;
pub mod routes;
pub mod state;
