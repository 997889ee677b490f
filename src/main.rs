use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use stepform::config::Config;
use stepform::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(
    name = "stepform",
    about = "Create projects through a multi-step terminal wizard",
    version
)]
struct Cli {
    /// Config file (default: ~/.config/stepform/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Organization to offer; repeat for several. Replaces the configured list.
    #[arg(long = "org", value_name = "NAME")]
    organizations: Vec<String>,

    /// Log file base path; STEPFORM_LOG takes precedence
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    config.override_organizations(cli.organizations);

    let log_file = cli.log_file.or_else(|| config.logging.file.clone());
    init_tracing(log_file.as_deref(), &config.logging.filter);
    tracing::info!(config = %path.display(), "Starting stepform");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    stepform::ui::run(config, runtime.handle().clone()).context("Terminal UI failed")?;

    tracing::info!("Exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn org_flag_is_repeatable() {
        let cli = Cli::try_parse_from(["stepform", "--org", "acme", "--org", "globex"])
            .expect("valid arguments");
        assert_eq!(cli.organizations, vec!["acme", "globex"]);
        assert!(cli.config.is_none());
    }

    #[test]
    fn config_and_log_paths_parse() {
        let cli = Cli::try_parse_from([
            "stepform",
            "--config",
            "/tmp/stepform.toml",
            "--log-file",
            "/tmp/stepform.log",
        ])
        .expect("valid arguments");
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/stepform.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/stepform.log")));
    }
}
