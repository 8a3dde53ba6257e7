//! Contracts and types shared by the shipping services and the client.
//!
//! - [`proto`] - Generated Protobuf messages, clients and server traits.
//! - [`error`] - The unified [`Error`] type and its gRPC status mapping.
//! - [`types`] - Domain helpers layered on the generated messages.

pub mod error;
pub mod proto;
pub mod types;

pub use error::{Error, Result};
