use asyncstore_module::HostConfig;
use clap::Parser;
use eyre::WrapErr;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "asyncstore")]
#[command(about = "Read and edit an application's local storage file", long_about = None)]
#[command(version)]
struct Cli {
    /// Application identity that scopes the storage file [default: $ASYNCSTORE_APP_ID]
    #[arg(long)]
    app_id: Option<String>,

    /// Runtime directory to use instead of the platform default or XDG_RUNTIME_DIR
    /// [default: $ASYNCSTORE_RUNTIME_DIR]
    #[arg(long)]
    runtime_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Host configuration from the environment, with flags taking precedence
    fn host_config(&self) -> eyre::Result<HostConfig> {
        let mut host = HostConfig::from_env().wrap_err("Failed to read host configuration")?;
        if let Some(app_id) = &self.app_id {
            host.application_identity = app_id.clone();
        }
        if let Some(runtime_dir) = &self.runtime_dir {
            host.runtime_dir = Some(runtime_dir.clone());
        }
        Ok(host)
    }
}

fn main() -> eyre::Result<ExitCode> {
    let cli = Cli::parse();

    asyncstore_utils::tracing::init()
        .map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))?;

    let host = cli.host_config()?;
    let output = cli.command.execute(&host)?;
    println!("{}", serde_json::to_string(&output)?);

    // A populated error slot means the operation failed
    let failed = output.get(0).is_some_and(|slot| !slot.is_null());
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use asyncstore_core::constants::{ASYNCSTORE_APP_ID_VAR, ASYNCSTORE_RUNTIME_DIR_VAR};
    use asyncstore_utils::SyncEnv;
    use serial_test::serial;

    fn host_for(args: &[&str]) -> HostConfig {
        SyncEnv::with_var(ASYNCSTORE_APP_ID_VAR, Some("org.example.env"), || {
            SyncEnv::with_var(ASYNCSTORE_RUNTIME_DIR_VAR, Some("/tmp/env-runtime"), || {
                Cli::try_parse_from(args).unwrap().host_config().unwrap()
            })
        })
        .unwrap()
        .unwrap()
    }

    #[test]
    #[serial]
    fn test_host_config_falls_back_to_environment() {
        let host = host_for(&["asyncstore", "keys"]);
        assert_eq!(
            host,
            HostConfig::new("org.example.env").with_runtime_dir("/tmp/env-runtime")
        );
    }

    #[test]
    #[serial]
    fn test_flags_override_environment() {
        let host = host_for(&[
            "asyncstore",
            "--app-id",
            "org.example.flag",
            "--runtime-dir",
            "/tmp/flag-runtime",
            "keys",
        ]);
        assert_eq!(
            host,
            HostConfig::new("org.example.flag").with_runtime_dir("/tmp/flag-runtime")
        );
    }
}
