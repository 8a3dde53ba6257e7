//! Drives `vessel.VesselService` over a real gRPC connection.

use shipping_core::proto::vessel::{
    Specification, Vessel, vessel_service_client::VesselServiceClient,
};
use tokio::{net::TcpListener, sync::oneshot};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{Code, transport::Channel};
use vessel_service::server::{
    config::default_fleet, repository::VesselRepository, serve::serve_with_incoming,
    service::handler::VesselHandler,
};

/// Keeps the server alive until `stop` is sent or dropped.
struct Running {
    client: VesselServiceClient<Channel>,
    stop: oneshot::Sender<()>,
    task: tokio::task::JoinHandle<anyhow::Result<()>>,
}

async fn start(fleet: Vec<Vessel>) -> Running {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = format!("http://{}", listener.local_addr().unwrap());
    let (stop, stopped) = oneshot::channel::<()>();

    let handler = VesselHandler::new(VesselRepository::new(fleet));
    let task = tokio::spawn(serve_with_incoming(
        handler,
        TcpListenerStream::new(listener),
        async move {
            let _ = stopped.await;
        },
    ));

    let client = VesselServiceClient::connect(addr).await.unwrap();
    Running { client, stop, task }
}

fn spec(capacity: i32, max_weight: i32) -> Specification {
    Specification {
        capacity,
        max_weight,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn default_fleet_serves_small_consignments() {
    let mut server = start(default_fleet()).await;

    let vessel = server
        .client
        .find_available(spec(2, 5000))
        .await
        .unwrap()
        .into_inner()
        .vessel
        .expect("vessel in response");

    assert_eq!(vessel.id, "vessel001");
    assert_eq!(vessel.name, "Bob's Secret Vessel");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn no_fit_is_an_error_not_an_empty_success() {
    let mut server = start(default_fleet()).await;

    let status = server.client.find_available(spec(501, 5000)).await.unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    let status = server.client.find_available(spec(1, 200_001)).await.unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn first_registered_fit_wins() {
    let fleet = vec![
        Vessel {
            id: "tug".to_string(),
            capacity: 1,
            max_weight: 100,
            ..Default::default()
        },
        Vessel {
            id: "feeder".to_string(),
            capacity: 100,
            max_weight: 50_000,
            ..Default::default()
        },
        Vessel {
            id: "mega".to_string(),
            capacity: 20_000,
            max_weight: 2_000_000,
            ..Default::default()
        },
    ];
    let mut server = start(fleet).await;

    for (query, expected) in [
        (spec(1, 100), "tug"),
        (spec(2, 100), "feeder"),
        (spec(1, 101), "feeder"),
        (spec(101, 0), "mega"),
    ] {
        let label = format!("{query:?}");
        let vessel = server
            .client
            .find_available(query)
            .await
            .unwrap()
            .into_inner()
            .vessel
            .unwrap();
        assert_eq!(vessel.id, expected, "{label}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stops_when_shutdown_completes() {
    let Running { client, stop, task } = start(default_fleet()).await;
    drop(client);

    stop.send(()).unwrap();
    let res = tokio::time::timeout(core::time::Duration::from_secs(10), task)
        .await
        .expect("server stopped in time")
        .unwrap();
    assert!(res.is_ok());
}
