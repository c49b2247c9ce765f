use anyhow::Result;
use clap::Parser;
use folio::{
    cli::{Cli, Commands, ConfigAction, ContentAction},
    config::AppConfig,
    console::{console, init_console},
    content::PortfolioContent,
};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config to get configured verbosity level
    let (config, config_err) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    // Initialize console with effective verbosity (CLI takes precedence over config)
    let effective_verbosity = cli.get_effective_verbosity(config.get_verbosity());
    init_console(effective_verbosity);

    if let Some(err) = config_err {
        console().warning(&format!("Using default configuration: {:#}", err));
    }

    match &cli.command {
        None => {
            let content = load_content(cli.content.as_deref().or(config.content.as_deref()))?;
            folio::tui::run(content, &config).await
        }
        Some(Commands::Config { action }) => handle_config(action),
        Some(Commands::Content { action }) => handle_content(action, &cli, &config),
    }
}

fn load_content(path: Option<&str>) -> Result<PortfolioContent> {
    match path {
        Some(path) => {
            console().verbose(&format!("Loading content profile from {}", path));
            PortfolioContent::load(Path::new(path))
        }
        None => Ok(PortfolioContent::default()),
    }
}

fn handle_config(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = AppConfig::load()?;
            console().debug(&format!(
                "config file: {}",
                AppConfig::config_path()?.display()
            ));
            if let Some(ref verbosity) = config.verbosity {
                console().plain(&format!("verbosity = \"{}\"", verbosity));
            }
            if let Some(ref content) = config.content {
                console().plain(&format!("content = \"{}\"", content));
            }
            console().plain(&format!("tick_rate_ms = {}", config.tick_rate_ms));
        }
        ConfigAction::Set { key, value } => {
            let mut config = AppConfig::load()?;
            match config.set_value(key, value.clone()) {
                Ok(()) => {
                    config.save()?;
                    console().success("Configuration updated successfully");
                }
                Err(e) => {
                    console().error(&format!(
                        "{}. Available keys: verbosity, content, tick_rate_ms",
                        e
                    ));
                }
            }
        }
    }
    Ok(())
}

fn handle_content(action: &ContentAction, cli: &Cli, config: &AppConfig) -> Result<()> {
    match action {
        ContentAction::Check { file } => {
            let path = file
                .as_deref()
                .or(cli.content.as_deref())
                .or(config.content.as_deref());
            let content = load_content(path)?;
            match path {
                Some(path) => console().success(&format!("{} is a valid content profile", path)),
                None => console().info("No content profile configured, showing built-in content"),
            }
            console().plain(&format!(
                "{} · {}",
                content.profile.name, content.profile.headline
            ));
            console().plain(&format!(
                "{} projects, {} education entries, {} skills, {} social links",
                content.projects.len(),
                content.education.len(),
                content.skills.technical.len() + content.skills.soft.len(),
                content.socials.len()
            ));
        }
    }
    Ok(())
}
