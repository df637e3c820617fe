use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::logging;
use crate::session_loader::SessionLoader;
use anyhow::Result;
use teamtrace_core::{expand_tilde, resolve_log_root};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = match cli.config.as_deref() {
        Some(path) => expand_tilde(path),
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)?;

    let log_root = resolve_log_root(cli.log_root.as_deref().or(config.log_root.as_deref()))?;
    let loader = SessionLoader::new(log_root);

    match cli.command {
        Commands::View {
            session_id,
            template,
            output,
            no_open,
        } => handlers::view::handle(&loader, &config, &session_id, template, output, no_open),

        Commands::Export {
            session_id,
            output,
            pretty,
        } => handlers::export::handle(&loader, &session_id, output, pretty),
    }
}
