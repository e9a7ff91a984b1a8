//! Folio: backend for a personal portfolio site
//!
//! A small REST API over an in-memory store of showcased projects and
//! contact-form messages, seeded with sample projects at startup.

// Environment-driven configuration
pub mod config;

// Domain layer - records, schemas, seed data and storage
pub mod portfolio;

// HTTP API layer - REST endpoints and error mapping
pub mod api;

// Server setup and initialization
pub mod server;

pub use portfolio::{Contact, MemStorage, PortfolioStorage, Project, User};
pub use server::{build_app, start_server};
