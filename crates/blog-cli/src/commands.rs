use std::path::Path;

use anyhow::Context;
use blog_server::{BlogServer, ServerConfig};
use colored::Colorize;
use tracing::Level;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.log_level, cli.verbose)?;

    match cli.command {
        Command::Serve(args) => cmd_serve(apply_overrides(config, args)).await,
        Command::Config(_) => cmd_config(&config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

fn parse_level(level: &str, verbose: bool) -> anyhow::Result<Level> {
    if verbose {
        return Ok(Level::DEBUG);
    }
    level
        .parse::<Level>()
        .with_context(|| format!("invalid log_level {level:?}"))
}

fn init_logging(level: &str, verbose: bool) -> anyhow::Result<()> {
    let level = parse_level(level, verbose)?;
    tracing_subscriber::fmt().with_max_level(level).init();
    Ok(())
}

fn apply_overrides(mut config: ServerConfig, args: ServeArgs) -> ServerConfig {
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(policy) = args.id_policy {
        config.id_policy = policy.into();
    }
    if args.strict {
        config.strict_validation = true;
    }
    config
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

async fn cmd_serve(config: ServerConfig) -> anyhow::Result<()> {
    println!(
        "{} Blog server on {} (ids: {}, strict validation: {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.id_policy.to_string().cyan(),
        if config.strict_validation { "on".yellow() } else { "off".dimmed() },
    );
    let bind_addr = config.bind_addr;
    BlogServer::new(config)
        .serve_with_shutdown(shutdown_signal())
        .await
        .with_context(|| format!("serving on {bind_addr}"))
}

fn cmd_config(config: &ServerConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_store::IdPolicy;
    use std::io::Write;

    fn serve_args(bind: Option<&str>, id_policy: Option<IdPolicyArg>, strict: bool) -> ServeArgs {
        ServeArgs {
            bind: bind.map(|b| b.parse().unwrap()),
            id_policy,
            strict,
        }
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = apply_overrides(
            ServerConfig::default(),
            serve_args(Some("0.0.0.0:9999"), Some(IdPolicyArg::CollectionSize), true),
        );
        assert_eq!(config.bind_addr, "0.0.0.0:9999".parse().unwrap());
        assert_eq!(config.id_policy, IdPolicy::CollectionSize);
        assert!(config.strict_validation);
    }

    #[test]
    fn absent_overrides_keep_file_values() {
        let base = ServerConfig {
            strict_validation: true,
            id_policy: IdPolicy::CollectionSize,
            ..Default::default()
        };
        let config = apply_overrides(base.clone(), serve_args(None, None, false));
        assert_eq!(config, base);
    }

    #[test]
    fn no_config_path_means_defaults() {
        assert_eq!(load_config(None).unwrap(), ServerConfig::default());
    }

    #[test]
    fn config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"127.0.0.1:7000\"").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:7000".parse().unwrap());
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.toml"));
    }

    #[test]
    fn log_levels() {
        assert_eq!(parse_level("warn", false).unwrap(), Level::WARN);
        assert_eq!(parse_level("warn", true).unwrap(), Level::DEBUG);
        assert!(parse_level("loud", false).is_err());
    }
}
