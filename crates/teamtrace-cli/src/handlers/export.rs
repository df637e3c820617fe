use crate::session_loader::SessionLoader;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn handle(
    loader: &SessionLoader,
    session_id: &str,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let document = loader.load(session_id)?;

    let json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, json)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            println!(
                "Exported {} events to {}",
                document.stats.total_events,
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
