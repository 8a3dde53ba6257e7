//! Server-side components of the vessel service.
//!
//! ## Submodules
//!
//! - [`config`] - CLI/environment configuration and fleet seeding.
//! - [`repository`] - The in-memory vessel registry and its first-fit lookup.
//! - [`service`] - gRPC handler for `vessel.VesselService`.
//! - [`serve`] - Wires the handler, health and reflection into a tonic server.

pub mod config;
pub mod repository;
pub mod serve;
pub mod service;
