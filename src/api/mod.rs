//! HTTP layer: handlers, DTOs and route wiring helpers.

pub mod dto;
pub mod handlers;
