//! # CRD Generator
//!
//! Generates Kubernetes CustomResourceDefinition (CRD) YAML for the
//! `Configuration` and `Provider` resources.
//!
//! ## Usage
//!
//! ```bash
//! # Generate CRD YAML
//! cargo run --bin crdgen > config/crd/crds.yaml
//!
//! # Generate and apply directly
//! cargo run --bin crdgen | kubectl apply -f -
//! ```

use configuration_controller::crd::{Configuration, Provider};
use kube::core::CustomResourceExt;

fn main() {
    let crds = [Configuration::crd(), Provider::crd()];

    for crd in &crds {
        match serde_yaml::to_string(crd) {
            Ok(yaml) => {
                println!("---");
                print!("{yaml}");
            }
            Err(e) => {
                eprintln!("Failed to serialize CRD to YAML: {e}");
                std::process::exit(1);
            }
        }
    }
}
