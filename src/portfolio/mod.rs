//! Portfolio domain layer
//!
//! Record types, request-body schemas, seed data and the in-memory store.

// Records and typed insert/patch payloads
pub mod types;

// JSON body validation into typed payloads
pub mod schema;

// Sample projects loaded at startup
pub mod seed;

// Storage contract and in-memory implementation
pub mod storage;

pub use storage::{MemStorage, PortfolioStorage, StorageError};
pub use types::{Contact, NewContact, NewProject, NewUser, Project, ProjectPatch, User};
