//! gRPC service implementation for vessel lookups.
//!
//! ## Structure
//!
//! - [`handler`] - gRPC service entry point (`VesselHandler`).

pub mod handler;
