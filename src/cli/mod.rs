//! # CONFCTL CLI
//!
//! Command-line interface for the Configuration Controller.
//!
//! Renders Configurations the same way the controller does, either fully
//! offline from manifest files or against the Provider records in a cluster.
//!
//! ## Usage
//!
//! ```bash
//! # Render a Configuration using Providers from files
//! confctl render --configuration configuration.yaml --provider provider.yaml
//!
//! # Render a Configuration using Providers from the current cluster
//! confctl render --configuration configuration.yaml --from-cluster
//!
//! # Only look up Providers that are explicitly referenced
//! confctl render --configuration configuration.yaml --lookup-policy referenced-only
//!
//! # Compare two env var lists for drift
//! confctl compare-envs desired.yaml observed.yaml
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration_controller::config::ControllerConfig;
use configuration_controller::controller::configuration::ConfigurationValidator;
use configuration_controller::controller::env::compare_container_envs;
use configuration_controller::controller::manifest::{read_env_list, read_manifest};
use configuration_controller::controller::provider::{
    InMemoryProviderStore, KubeProviderStore, ProviderLookupPolicy, ProviderStore,
};
use configuration_controller::controller::render::TemplateBackendRenderer;
use configuration_controller::crd::{Configuration, Provider};
use configuration_controller::observability::logging::init_tracing;
use configuration_controller::observability::metrics::{gather_metrics, register_metrics};
use kube::Client;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Configuration Controller CLI
#[derive(Debug, Parser)]
#[command(name = "confctl")]
#[command(about = "Configuration Controller CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render a Configuration into the definition handed to the execution engine
    Render {
        /// Path to the Configuration manifest
        #[arg(short, long, value_name = "FILE")]
        configuration: PathBuf,

        /// Path to a Provider manifest (repeatable)
        #[arg(short, long = "provider", value_name = "FILE", conflicts_with = "from_cluster")]
        providers: Vec<PathBuf>,

        /// Resolve Providers from the current Kubernetes context instead of files
        #[arg(long)]
        from_cluster: bool,

        /// Namespace Providers are resolved in (default: PROVIDER_NAMESPACE or "default")
        #[arg(long)]
        provider_namespace: Option<String>,

        /// Namespace the controller runs in (default: POD_NAMESPACE or "provisioning-system")
        #[arg(long)]
        controller_namespace: Option<String>,

        /// Provider lookup policy for unreferenced Configurations: always, referenced-only
        #[arg(long)]
        lookup_policy: Option<ProviderLookupPolicy>,

        /// Print validation metrics in Prometheus text format to stderr after rendering
        #[arg(long)]
        metrics: bool,
    },
    /// Compare two YAML lists of container env vars, ignoring order
    #[command(name = "compare-envs")]
    CompareEnvs {
        #[arg(value_name = "LEFT")]
        left: PathBuf,
        #[arg(value_name = "RIGHT")]
        right: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configure rustls crypto provider FIRST, before any other operations
    // Required for rustls 0.23+ when no default provider is set via features
    rustls::crypto::ring::default_provider()
        .install_default()
        .unwrap_or_else(|_| panic!("Failed to install rustls crypto provider"));

    let mut config = ControllerConfig::from_env();
    init_tracing(&config)?;
    register_metrics()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            configuration,
            providers,
            from_cluster,
            provider_namespace,
            controller_namespace,
            lookup_policy,
            metrics,
        } => {
            if let Some(ns) = provider_namespace {
                config.provider_namespace = ns;
            }
            if let Some(ns) = controller_namespace {
                config.controller_namespace = ns;
            }
            if let Some(policy) = lookup_policy {
                config.provider_lookup_policy = policy;
            }
            let result = render_command(&config, &configuration, &providers, from_cluster).await;
            if metrics {
                eprint!("{}", gather_metrics()?);
            }
            result
        }
        Commands::CompareEnvs { left, right } => compare_envs_command(&left, &right),
    }
}

async fn render_command(
    config: &ControllerConfig,
    configuration_path: &Path,
    provider_paths: &[PathBuf],
    from_cluster: bool,
) -> Result<()> {
    let configuration: Configuration = read_manifest(configuration_path)?;

    let store: Arc<dyn ProviderStore> = if from_cluster {
        let client = Client::try_default()
            .await
            .context("Failed to create Kubernetes client. Ensure kubeconfig is configured.")?;
        Arc::new(KubeProviderStore::new(client))
    } else {
        let mut store = InMemoryProviderStore::new();
        for path in provider_paths {
            let provider: Provider = read_manifest(path)?;
            store
                .insert(&config.provider_namespace, provider)
                .with_context(|| format!("Invalid Provider manifest {}", path.display()))?;
        }
        Arc::new(store)
    };

    let renderer = Arc::new(TemplateBackendRenderer::new()?);
    let validator = ConfigurationValidator::from_config(store, renderer, config);

    info!(
        provider_namespace = %config.provider_namespace,
        lookup_policy = %config.provider_lookup_policy,
        "Rendering {}",
        configuration_path.display()
    );
    let validated = validator.validate(&configuration).await?;

    print!("{}", validated.rendered);
    if let Some(backend) = validated.backend {
        eprintln!("# resolved backend ({})", validated.kind.as_str());
        eprint!("{}", serde_yaml::to_string(&backend)?);
    }
    Ok(())
}

fn compare_envs_command(left: &Path, right: &Path) -> Result<()> {
    let left_envs = read_env_list(left)?;
    let right_envs = read_env_list(right)?;

    if compare_container_envs(&left_envs, &right_envs) {
        println!("✔ env vars are equal");
        Ok(())
    } else {
        println!("✗ env vars differ");
        std::process::exit(1);
    }
}
