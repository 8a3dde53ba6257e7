//! gRPC service implementation for consignment orchestration.
//!
//! [`ShippingHandler`] implements the [`ShippingService`] trait generated from
//! `proto/consignment.proto`. Creating a consignment is a single call chain:
//!
//! 1. derive a [`Specification`] from the consignment's weight and
//!    container count,
//! 2. ask the vessel registry for the first vessel that fits,
//! 3. stitch the vessel id into the consignment,
//! 4. store it in the consignment registry.
//!
//! A failed lookup aborts the chain before anything is stored, so every
//! stored consignment carries a vessel assignment. There are no retries and
//! no deadlines.

use crate::server::{
    repository::{ConsignmentRepository, Repository},
    vessel::{VesselClient, VesselLocator},
};
use shipping_core::{
    proto::{
        consignment::{
            Consignment, GetRequest, Response as ShippingResponse,
            shipping_service_server::ShippingService,
        },
        vessel::Specification,
    },
    telemetry::{
        increment_consignments_created, increment_errors, increment_requests,
        record_request_duration,
    },
};
use std::{sync::Arc, time::Instant};
use tonic::{Request, Response, Status};

const CREATE_CONSIGNMENT: &str = "CreateConsignment";
const GET_CONSIGNMENTS: &str = "GetConsignments";

/// gRPC front end of the consignment registry.
///
/// Holds the registry it stores into and the locator it queries; both are
/// shared by every clone of the handler.
pub struct ShippingHandler<R = ConsignmentRepository, V = VesselClient> {
    repo: Arc<R>,
    vessels: Arc<V>,
}

impl<R, V> Clone for ShippingHandler<R, V> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            vessels: Arc::clone(&self.vessels),
        }
    }
}

impl<R: Repository, V: VesselLocator> ShippingHandler<R, V> {
    pub fn new(repo: R, vessels: V) -> Self {
        Self {
            repo: Arc::new(repo),
            vessels: Arc::new(vessels),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    async fn assign_and_store(
        &self,
        mut consignment: Consignment,
    ) -> shipping_core::Result<Consignment> {
        let spec = Specification::for_consignment(&consignment)?;
        let vessel = self.vessels.find_available(spec).await?;
        tracing::info!(vessel_id = %vessel.id, "Found vessel: {}", vessel.name);

        consignment.vessel_id = vessel.id;
        self.repo.create(consignment)
    }
}

#[tonic::async_trait]
impl<R: Repository, V: VesselLocator> ShippingService for ShippingHandler<R, V> {
    /// Assigns a vessel to the consignment and stores it.
    ///
    /// # Errors
    ///
    /// - `NOT_FOUND` if no vessel can carry the consignment. Nothing is
    ///   stored.
    /// - `INVALID_ARGUMENT` if the consignment cannot be turned into a
    ///   vessel query.
    /// - The vessel service's status, unchanged, if the lookup call failed.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %req.get_ref().id,
            weight = req.get_ref().weight,
            containers = req.get_ref().containers.len()
        )
    )]
    async fn create_consignment(
        &self,
        req: Request<Consignment>,
    ) -> Result<Response<ShippingResponse>, Status> {
        let start = Instant::now();
        increment_requests(CREATE_CONSIGNMENT);

        let result = self.assign_and_store(req.into_inner()).await;
        record_request_duration(CREATE_CONSIGNMENT, start.elapsed().as_secs_f64() * 1000.0);

        match result {
            Ok(consignment) => {
                increment_consignments_created();
                Ok(Response::new(ShippingResponse {
                    created: true,
                    consignment: Some(consignment),
                    consignments: Vec::new(),
                }))
            }
            Err(e) => {
                tracing::warn!("Consignment rejected: {e}");
                increment_errors(CREATE_CONSIGNMENT);
                Err(e.into())
            }
        }
    }

    /// Lists every stored consignment in insertion order.
    #[tracing::instrument(skip_all)]
    async fn get_consignments(
        &self,
        _req: Request<GetRequest>,
    ) -> Result<Response<ShippingResponse>, Status> {
        let start = Instant::now();
        increment_requests(GET_CONSIGNMENTS);

        let consignments = self.repo.get_all();
        tracing::debug!(count = consignments.len(), "Listing consignments");
        record_request_duration(GET_CONSIGNMENTS, start.elapsed().as_secs_f64() * 1000.0);

        Ok(Response::new(ShippingResponse {
            created: false,
            consignment: None,
            consignments,
        }))
    }
}
