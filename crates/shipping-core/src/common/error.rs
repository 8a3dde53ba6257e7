//! Error types for the shipping services and client.
//!
//! This module defines the central `Error` enum shared by every crate in the
//! workspace. It implements `From<Error>` for `tonic::Status` so handlers can
//! propagate failures to callers with `?`, and the vessel client can map a
//! status back into a typed error.
//!
//! ## Error Cases
//! - `VesselNotFound`: No registered vessel satisfies a specification.
//! - `InvalidRequest`: The request cannot be turned into a vessel query.
//! - `Io`: An input document could not be read.
//! - `Decode`: An input document is not a valid JSON rendition of the
//!   expected message.
//! - `Rpc`: A remote call failed with a status; passed through unchanged.
//! - `Transport`: The channel to a remote service could not be established.

use std::path::PathBuf;
use tonic::Status;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the shipping services.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No vessel meets the requested capacity and weight.
    #[error("No vessel found for specification (capacity: {capacity}, max weight: {max_weight})")]
    VesselNotFound { capacity: i32, max_weight: i32 },

    /// The request was malformed or exceeded constraints.
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// Reading an input document failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input document could not be decoded.
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A remote call returned a non-OK status.
    #[error("RPC failed: {0}")]
    Rpc(#[from] Status),

    /// Connecting to a remote service failed.
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::VesselNotFound { .. } => Status::not_found(err.to_string()),
            Error::InvalidRequest { reason } => Status::invalid_argument(reason),
            Error::Io { .. } | Error::Decode { .. } => Status::internal(err.to_string()),
            Error::Rpc(status) => status,
            Error::Transport(e) => Status::unavailable(format!("Transport error: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn vessel_not_found_maps_to_not_found() {
        let status: Status = Error::VesselNotFound {
            capacity: 501,
            max_weight: 5000,
        }
        .into();
        assert_eq!(status.code(), Code::NotFound);
        assert!(status.message().contains("capacity: 501"));
        assert!(status.message().contains("max weight: 5000"));
    }

    #[test]
    fn invalid_request_maps_to_invalid_argument() {
        let status: Status = Error::InvalidRequest {
            reason: "too many containers".to_string(),
        }
        .into();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "too many containers");
    }

    #[test]
    fn rpc_status_passes_through_unchanged() {
        let original = Status::permission_denied("nope");
        let status: Status = Error::from(original).into();
        assert_eq!(status.code(), Code::PermissionDenied);
        assert_eq!(status.message(), "nope");
    }

    #[test]
    fn io_error_maps_to_internal() {
        let status: Status = Error::Io {
            path: PathBuf::from("fleet.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
        .into();
        assert_eq!(status.code(), Code::Internal);
        assert!(status.message().contains("fleet.json"));
    }
}
