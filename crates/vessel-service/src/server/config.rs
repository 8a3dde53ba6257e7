use anyhow::bail;
use clap::Parser;
use shipping_core::{proto::vessel::Vessel, types::read_json_file};
use std::{collections::HashSet, path::PathBuf};

/// Runtime configuration for the `vessel-service` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file is honored).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "vessel-service",
    version,
    about = "A gRPC registry that finds a vessel able to carry a consignment"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:50052"))]
    pub server_addr: String,

    /// JSON file holding the fleet as an array of vessels, in registration
    /// order. Lookups return the first vessel that fits, so order matters.
    ///
    /// When omitted the registry is seeded with a single built-in vessel.
    ///
    /// Environment variable: `FLEET_FILE`
    #[arg(long, env = "FLEET_FILE")]
    pub fleet: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub fleet: Vec<Vessel>,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let fleet = match &args.fleet {
            Some(path) => read_json_file::<Vec<Vessel>>(path)?,
            None => default_fleet(),
        };

        validate_fleet(&fleet)?;

        Ok(Self {
            server_addr: args.server_addr,
            fleet,
        })
    }
}

/// The fleet the registry starts with when no fleet file is given.
pub fn default_fleet() -> Vec<Vessel> {
    vec![Vessel {
        id: "vessel001".to_string(),
        name: "Bob's Secret Vessel".to_string(),
        max_weight: 200_000,
        capacity: 500,
    }]
}

fn validate_fleet(fleet: &[Vessel]) -> anyhow::Result<()> {
    if fleet.is_empty() {
        bail!("Fleet must contain at least one vessel");
    }

    let mut seen = HashSet::with_capacity(fleet.len());
    for (idx, vessel) in fleet.iter().enumerate() {
        if vessel.id.is_empty() {
            bail!("Vessel at index {idx} has an empty id");
        }
        if !seen.insert(vessel.id.as_str()) {
            bail!("Duplicate vessel id `{}` in fleet", vessel.id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(fleet: Option<PathBuf>) -> CliArgs {
        CliArgs {
            server_addr: "127.0.0.1:0".to_string(),
            fleet,
        }
    }

    fn fleet_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_to_builtin_fleet() {
        let config = ServerConfig::try_from(args(None)).unwrap();
        assert_eq!(config.fleet.len(), 1);
        assert_eq!(config.fleet[0].id, "vessel001");
        assert_eq!(config.fleet[0].capacity, 500);
        assert_eq!(config.fleet[0].max_weight, 200_000);
    }

    #[test]
    fn loads_fleet_in_file_order() {
        let file = fleet_file(
            r#"[
                { "id": "a", "name": "Alpha", "capacity": 10, "max_weight": 100 },
                { "id": "b", "name": "Bravo", "capacity": 20, "max_weight": 200 }
            ]"#,
        );
        let config = ServerConfig::try_from(args(Some(file.path().to_path_buf()))).unwrap();
        let ids: Vec<_> = config.fleet.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(config.fleet[1].max_weight, 200);
    }

    #[test]
    fn rejects_missing_fleet_file() {
        let err = ServerConfig::try_from(args(Some(PathBuf::from("/nonexistent/fleet.json"))))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn rejects_malformed_fleet_file() {
        let file = fleet_file("{ not json");
        let err = ServerConfig::try_from(args(Some(file.path().to_path_buf()))).unwrap_err();
        assert!(err.to_string().contains("Failed to decode"));
    }

    #[test]
    fn rejects_empty_fleet() {
        let file = fleet_file("[]");
        assert!(ServerConfig::try_from(args(Some(file.path().to_path_buf()))).is_err());
    }

    #[test]
    fn rejects_duplicate_and_blank_ids() {
        let dup = fleet_file(r#"[{ "id": "a" }, { "id": "a" }]"#);
        let err = ServerConfig::try_from(args(Some(dup.path().to_path_buf()))).unwrap_err();
        assert!(err.to_string().contains("Duplicate vessel id"));

        let blank = fleet_file(r#"[{ "name": "nameless" }]"#);
        let err = ServerConfig::try_from(args(Some(blank.path().to_path_buf()))).unwrap_err();
        assert!(err.to_string().contains("empty id"));
    }
}
