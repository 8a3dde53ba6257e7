//! Runs the client against both services started in-process.

use consignment_cli::{CliArgs, run};
use consignment_service::server::{
    repository::ConsignmentRepository, serve::serve_with_incoming,
    service::handler::ShippingHandler, vessel::VesselClient,
};
use core::time::Duration;
use shipping_core::Error;
use std::io::Write;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::Code;
use vessel_service::server::{
    config::default_fleet, repository::VesselRepository,
    serve::serve_with_incoming as serve_vessels, service::handler::VesselHandler,
};

async fn start_services() -> String {
    let vessel_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let vessel_addr = format!("http://{}", vessel_listener.local_addr().unwrap());
    tokio::spawn(serve_vessels(
        VesselHandler::new(VesselRepository::new(default_fleet())),
        TcpListenerStream::new(vessel_listener),
        std::future::pending(),
    ));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = format!("http://{}", listener.local_addr().unwrap());
    let vessels = VesselClient::connect_lazy(&vessel_addr, Duration::from_secs(5)).unwrap();
    tokio::spawn(serve_with_incoming(
        ShippingHandler::new(ConsignmentRepository::new(), vessels),
        TcpListenerStream::new(listener),
        std::future::pending(),
    ));
    addr
}

fn document(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn submits_and_lists() {
    let server_addr = start_services().await;
    let file = document(
        r#"{
            "description": "two boxes",
            "weight": 5000,
            "containers": [
                { "customer_id": "cust001", "origin": "Manchester, United Kingdom" },
                { "customer_id": "cust002", "origin": "Liverpool, United Kingdom" }
            ]
        }"#,
    );
    let args = CliArgs {
        file: file.path().to_path_buf(),
        server_addr,
    };

    let first = run(&args).await.unwrap();
    assert!(first.created);
    let created = first.consignment.expect("consignment in response");
    assert_eq!(created.vessel_id, "vessel001");
    assert_eq!(first.consignments, vec![created.clone()]);

    // Submitting the same document again appends a second entry.
    let second = run(&args).await.unwrap();
    assert_eq!(second.consignments.len(), 2);
    assert_eq!(second.consignments[0], created);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn rejected_consignment_is_reported_as_rpc_error() {
    let server_addr = start_services().await;
    let file = document(r#"{ "description": "too heavy", "weight": 200001 }"#);
    let args = CliArgs {
        file: file.path().to_path_buf(),
        server_addr,
    };

    match run(&args).await {
        Err(Error::Rpc(status)) => assert_eq!(status.code(), Code::NotFound),
        other => panic!("expected NOT_FOUND, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server_addr = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let file = document(r#"{ "weight": 1 }"#);
    let args = CliArgs {
        file: file.path().to_path_buf(),
        server_addr,
    };

    assert!(matches!(run(&args).await, Err(Error::Transport(_))));
}
