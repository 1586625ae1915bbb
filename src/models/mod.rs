// src/models/mod.rs
pub mod email;
pub mod event;
pub mod user;
