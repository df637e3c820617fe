use crate::config::Config;
use crate::session_loader::SessionLoader;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use teamtrace_core::normalize_path;
use teamtrace_engine::render_html;
use teamtrace_types::SessionDocument;
use tracing::warn;

pub fn handle(
    loader: &SessionLoader,
    config: &Config,
    session_id: &str,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    no_open: bool,
) -> Result<()> {
    let template_path = template.or_else(|| config.template()).context(
        "No viewer template configured; pass --template or set `template` in config.toml",
    )?;

    if !template_path.is_file() {
        anyhow::bail!("Template not found at {}", template_path.display());
    }

    println!("Building session data for {}...", session_id);
    let document = loader.load(session_id)?;
    print!("{}", format_summary(&document));

    let output_path =
        output.unwrap_or_else(|| config.output_dir().join(format!("{}.html", session_id)));

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    println!("Generating HTML...");
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template: {}", template_path.display()))?;
    let html = render_html(&template, &document)?;
    fs::write(&output_path, html)
        .with_context(|| format!("Failed to write file: {}", output_path.display()))?;
    println!("Written to {}", output_path.display());

    if !no_open {
        match open::that(normalize_path(&output_path)) {
            Ok(()) => println!("Opened in browser."),
            Err(e) => warn!(error = %e, "failed to open browser"),
        }
    }

    Ok(())
}

fn format_summary(document: &SessionDocument) -> String {
    let mut summary = format!("  Type: {}\n", document.session_type);
    if let Some(team_name) = &document.team_name {
        summary.push_str(&format!("  Team: {}\n", team_name));
    }
    summary.push_str(&format!("  Agents: {}\n", document.agents.len()));
    summary.push_str(&format!("  Events: {}\n", document.stats.total_events));
    summary.push_str(&format!(
        "  Duration: {}\n",
        format_duration(document.stats.duration_seconds)
    ));
    summary
}

fn format_duration(seconds: i64) -> String {
    format!("{}m {}s", seconds.div_euclid(60), seconds.rem_euclid(60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamtrace_types::{Agent, SessionStats, SessionType};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0m 0s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(3600), "60m 0s");
    }

    #[test]
    fn test_format_summary_team() {
        let document = SessionDocument {
            session_id: "abc".to_string(),
            session_type: SessionType::Team,
            team_name: Some("alpha".to_string()),
            project_name: "-repo".to_string(),
            lead_log_path: String::new(),
            agents: vec![Agent::lead(), Agent::new("s-2", "researcher", 1)],
            events: Vec::new(),
            stats: SessionStats {
                total_events: 0,
                duration_seconds: 61,
                agent_count: 2,
            },
        };

        assert_eq!(
            format_summary(&document),
            "  Type: team\n  Team: alpha\n  Agents: 2\n  Events: 0\n  Duration: 1m 1s\n"
        );
    }
}
