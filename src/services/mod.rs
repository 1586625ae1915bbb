// src/services/mod.rs
pub mod email_service;
pub mod event_service;
pub mod user_service;
