//! gRPC service implementation for consignment creation and listing.
//!
//! ## Structure
//!
//! - [`handler`] - gRPC service entry point (`ShippingHandler`).

pub mod handler;
