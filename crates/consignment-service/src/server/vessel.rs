//! Client side of the vessel registry.
//!
//! [`VesselLocator`] is the capability the orchestrator needs: "find me a
//! vessel for this specification". [`VesselClient`] implements it over the
//! generated gRPC client; tests plug in local implementations.

use core::time::Duration;
use shipping_core::{
    Error, Result,
    proto::vessel::{Specification, Vessel, vessel_service_client::VesselServiceClient},
};
#[cfg(feature = "tls")]
use tonic::transport::ClientTlsConfig;
use tonic::{
    Code,
    codec::CompressionEncoding,
    transport::{Channel, Endpoint},
};

/// Finds a vessel able to carry a specification.
#[tonic::async_trait]
pub trait VesselLocator: Send + Sync + 'static {
    /// # Errors
    ///
    /// - [`Error::VesselNotFound`] if no vessel fits `spec`.
    /// - Any other error if the lookup itself failed.
    async fn find_available(&self, spec: Specification) -> Result<Vessel>;
}

/// gRPC client for `vessel.VesselService`.
#[derive(Debug, Clone)]
pub struct VesselClient {
    client: VesselServiceClient<Channel>,
}

impl VesselClient {
    pub fn new(channel: Channel) -> Self {
        // Requests go out uncompressed so servers without zstd still answer.
        let client = VesselServiceClient::new(channel).accept_compressed(CompressionEncoding::Zstd);
        Self { client }
    }

    /// Creates a client that connects on first use, so the consignment
    /// service can start before the vessel service is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if `addr` is not a valid URI.
    pub fn connect_lazy(addr: &str, connect_timeout: Duration) -> Result<Self> {
        let endpoint = Endpoint::from_shared(addr.to_string())?.connect_timeout(connect_timeout);
        #[cfg(feature = "tls")]
        let endpoint = if addr.starts_with("https://") {
            endpoint.tls_config(ClientTlsConfig::new().with_native_roots())?
        } else {
            endpoint
        };
        Ok(Self::new(endpoint.connect_lazy()))
    }
}

#[tonic::async_trait]
impl VesselLocator for VesselClient {
    async fn find_available(&self, spec: Specification) -> Result<Vessel> {
        let not_found = Error::VesselNotFound {
            capacity: spec.capacity,
            max_weight: spec.max_weight,
        };

        // The generated client needs `&mut self`; clones share the channel.
        let mut client = self.client.clone();
        match client.find_available(spec).await {
            // A server that swallows its lookup error answers OK with no
            // vessel. Treat that the same as NOT_FOUND.
            Ok(res) => res.into_inner().vessel.ok_or(not_found),
            Err(status) if status.code() == Code::NotFound => Err(not_found),
            Err(status) => Err(Error::Rpc(status)),
        }
    }
}
