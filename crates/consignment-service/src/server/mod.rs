//! Server-side components of the consignment service.
//!
//! ## Submodules
//!
//! - [`config`] - CLI/environment configuration.
//! - [`repository`] - The append-only consignment registry.
//! - [`vessel`] - Client side of the vessel registry ([`vessel::VesselLocator`]).
//! - [`service`] - gRPC handler orchestrating vessel lookup and storage.
//! - [`serve`] - Wires the handler, health and reflection into a tonic server.

pub mod config;
pub mod repository;
pub mod serve;
pub mod service;
pub mod vessel;
