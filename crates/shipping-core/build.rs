/// Builds the gRPC client and server code for the shipping `.proto` contracts
/// using `tonic-prost-build`.
///
/// Both packages (`consignment` and `vessel`) are compiled in one pass so a
/// single file descriptor set can back gRPC reflection on either service.
///
/// # Serde
///
/// `Consignment`, `Container` and `Vessel` are also read from JSON documents
/// (the client input file and the vessel fleet file), so they derive
/// `serde::{Serialize, Deserialize}`. `#[serde(default)]` mirrors proto3
/// semantics: a missing field decodes to its zero value.
///
/// # Panics
///
/// Panics if code generation fails, e.g. when `protoc` is not installed.
use std::env;
use std::path::PathBuf;

const SERDE_TYPES: &[&str] = &[
    ".consignment.Consignment",
    ".consignment.Container",
    ".vessel.Vessel",
];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let descriptor_path = out_dir.join("shipping_descriptor.bin");

    let mut config = tonic_prost_build::Config::new();
    config.file_descriptor_set_path(&descriptor_path);

    for path in SERDE_TYPES {
        config.type_attribute(
            path,
            "#[derive(serde::Serialize, serde::Deserialize)] #[serde(default)]",
        );
    }

    tonic_prost_build::configure()
        .compile_with_config(
            config,
            &["proto/consignment.proto", "proto/vessel.proto"],
            &["proto"],
        )
        .unwrap();

    println!("cargo:rerun-if-changed=proto");
}
