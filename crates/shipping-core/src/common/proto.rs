//! gRPC service and message definitions generated from `proto/`.
//!
//! ## Services
//!
//! - [`consignment::shipping_service_server::ShippingService`] -
//!   `CreateConsignment` and `GetConsignments`.
//! - [`vessel::vessel_service_server::VesselService`] - `FindAvailable`.
//!
//! Both packages share [`FILE_DESCRIPTOR_SET`], which the servers register
//! with gRPC reflection.

pub mod consignment {
    tonic::include_proto!("consignment");
}

pub mod vessel {
    tonic::include_proto!("vessel");
}

pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("shipping_descriptor");
