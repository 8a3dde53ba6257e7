use crate::server::{
    repository::Repository, service::handler::ShippingHandler, vessel::VesselLocator,
};
use core::future::Future;
use futures::Stream;
use shipping_core::proto::{
    FILE_DESCRIPTOR_SET, consignment::shipping_service_server::ShippingServiceServer,
};
use tokio::io::{AsyncRead, AsyncWrite};
use tonic::transport::server::Connected;
use tonic::{codec::CompressionEncoding, transport::Server};
use tonic_reflection::server::Builder;
use tonic_web::GrpcWebLayer;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Serves `ShippingService` (plus health and reflection) on `incoming` until
/// `shutdown` completes.
///
/// Health flips to `NOT_SERVING` as soon as `shutdown` resolves, before
/// in-flight requests drain.
pub async fn serve_with_incoming<R, V, I, IO, IE, F>(
    handler: ShippingHandler<R, V>,
    incoming: I,
    shutdown: F,
) -> anyhow::Result<()>
where
    R: Repository,
    V: VesselLocator,
    I: Stream<Item = Result<IO, IE>>,
    IO: AsyncRead + AsyncWrite + Connected + Unpin + Send + 'static,
    IE: Into<tower::BoxError>,
    F: Future<Output = ()>,
{
    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<ShippingServiceServer<ShippingHandler<R, V>>>()
        .await;

    let reflection = Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let signal = async move {
        shutdown.await;
        health_reporter
            .set_not_serving::<ShippingServiceServer<ShippingHandler<R, V>>>()
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
        .add_service(build_shipping_service(handler))
        .serve_with_incoming_shutdown(incoming, signal)
        .await?;

    tracing::info!("Consignment service shut down");
    Ok(())
}

fn build_shipping_service<R: Repository, V: VesselLocator>(
    handler: ShippingHandler<R, V>,
) -> ShippingServiceServer<ShippingHandler<R, V>> {
    ShippingServiceServer::new(handler)
        .send_compressed(CompressionEncoding::Zstd)
        .send_compressed(CompressionEncoding::Gzip)
        .send_compressed(CompressionEncoding::Deflate)
        .accept_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Gzip)
        .accept_compressed(CompressionEncoding::Deflate)
}
