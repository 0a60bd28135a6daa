//! Shared types and pure data logic for PharmaIQ.
//!
//! Everything here is used by both the wasm frontend and the mock backend,
//! so the crate stays free of browser and runtime dependencies.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod store;
pub mod system;
pub mod usecases;
