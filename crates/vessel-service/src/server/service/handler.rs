//! gRPC service implementation for vessel lookups.
//!
//! [`VesselHandler`] implements the [`VesselService`] trait generated from
//! `proto/vessel.proto`. It owns a handle to the vessel registry and turns a
//! failed lookup into a `NOT_FOUND` status, so callers can never mistake
//! "no vessel" for a successful empty response.

use crate::server::repository::{Repository, VesselRepository};
use shipping_core::{
    proto::vessel::{Response as VesselResponse, Specification, vessel_service_server::VesselService},
    telemetry::{increment_errors, increment_requests, record_request_duration},
};
use std::{sync::Arc, time::Instant};
use tonic::{Request, Response, Status};

const FIND_AVAILABLE: &str = "FindAvailable";

/// gRPC front end of the vessel registry.
pub struct VesselHandler<R = VesselRepository> {
    repo: Arc<R>,
}

impl<R> Clone for VesselHandler<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: Repository> VesselHandler<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

#[tonic::async_trait]
impl<R: Repository> VesselService for VesselHandler<R> {
    /// Returns the first registered vessel that fits the specification.
    ///
    /// # Errors
    ///
    /// `NOT_FOUND` when no vessel qualifies. The status message carries the
    /// requested capacity and weight.
    #[tracing::instrument(
        skip_all,
        fields(
            capacity = req.get_ref().capacity,
            max_weight = req.get_ref().max_weight
        )
    )]
    async fn find_available(
        &self,
        req: Request<Specification>,
    ) -> Result<Response<VesselResponse>, Status> {
        let start = Instant::now();
        increment_requests(FIND_AVAILABLE);

        let spec = req.into_inner();
        let result = self.repo.find_available(&spec);
        record_request_duration(FIND_AVAILABLE, start.elapsed().as_secs_f64() * 1000.0);

        match result {
            Ok(vessel) => {
                tracing::info!(vessel_id = %vessel.id, name = %vessel.name, "Found vessel");
                Ok(Response::new(VesselResponse {
                    vessel: Some(vessel),
                    vessels: Vec::new(),
                }))
            }
            Err(e) => {
                tracing::warn!("{e}");
                increment_errors(FIND_AVAILABLE);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipping_core::proto::vessel::Vessel;
    use tonic::Code;

    fn handler() -> VesselHandler {
        VesselHandler::new(VesselRepository::new(vec![Vessel {
            id: "vessel001".to_string(),
            name: "Bob's Secret Vessel".to_string(),
            capacity: 500,
            max_weight: 200_000,
        }]))
    }

    #[tokio::test]
    async fn responds_with_matching_vessel() {
        let res = handler()
            .find_available(Request::new(Specification {
                capacity: 2,
                max_weight: 5000,
            }))
            .await
            .unwrap()
            .into_inner();

        let vessel = res.vessel.expect("vessel in response");
        assert_eq!(vessel.id, "vessel001");
        assert!(res.vessels.is_empty());
    }

    #[tokio::test]
    async fn unmatched_specification_is_not_found() {
        let status = handler()
            .find_available(Request::new(Specification {
                capacity: 501,
                max_weight: 5000,
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
        assert!(status.message().contains("capacity: 501"));
    }

    #[test]
    fn clones_share_the_registry() {
        let a = handler();
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.repo, &b.repo));
    }
}
