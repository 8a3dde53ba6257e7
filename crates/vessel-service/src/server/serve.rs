use crate::server::{repository::Repository, service::handler::VesselHandler};
use core::future::Future;
use futures::Stream;
use shipping_core::proto::{FILE_DESCRIPTOR_SET, vessel::vessel_service_server::VesselServiceServer};
use tokio::io::{AsyncRead, AsyncWrite};
use tonic::transport::server::Connected;
use tonic::{codec::CompressionEncoding, transport::Server};
use tonic_reflection::server::Builder;
use tonic_web::GrpcWebLayer;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Serves `VesselService` (plus health and reflection) on `incoming` until
/// `shutdown` completes.
///
/// Health reports `SERVING` for the vessel service while the server runs and
/// flips to `NOT_SERVING` as soon as `shutdown` resolves, before in-flight
/// requests drain.
pub async fn serve_with_incoming<R, I, IO, IE, F>(
    handler: VesselHandler<R>,
    incoming: I,
    shutdown: F,
) -> anyhow::Result<()>
where
    R: Repository,
    I: Stream<Item = Result<IO, IE>>,
    IO: AsyncRead + AsyncWrite + Connected + Unpin + Send + 'static,
    IE: Into<tower::BoxError>,
    F: Future<Output = ()>,
{
    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<VesselServiceServer<VesselHandler<R>>>()
        .await;

    let reflection = Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let signal = async move {
        shutdown.await;
        health_reporter
            .set_not_serving::<VesselServiceServer<VesselHandler<R>>>()
            .await;
    };

    Server::builder()
        .accept_http1(true)
        .http2_adaptive_window(Some(true))
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(GrpcWebLayer::new()),
        )
        .add_service(health_service)
        .add_service(reflection)
        .add_service(build_vessel_service(handler))
        .serve_with_incoming_shutdown(incoming, signal)
        .await?;

    tracing::info!("Vessel service shut down");
    Ok(())
}

fn build_vessel_service<R: Repository>(
    handler: VesselHandler<R>,
) -> VesselServiceServer<VesselHandler<R>> {
    VesselServiceServer::new(handler)
        .send_compressed(CompressionEncoding::Zstd)
        .send_compressed(CompressionEncoding::Gzip)
        .send_compressed(CompressionEncoding::Deflate)
        .accept_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Gzip)
        .accept_compressed(CompressionEncoding::Deflate)
}
