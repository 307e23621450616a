use std::path::Path;

use anyhow::{Context, bail};

use grn_config::{GithubConfig, GreenroomConfig, RegistryConfig};

use crate::cli::GlobalFlags;

const CONFIG_DIR: &str = ".greenroom";
const CONFIG_FILE: &str = ".greenroom/config.toml";

/// Handle `grn init`: write a starter config file for the current project.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    write_starter(Path::new("."))?;
    if !flags.quiet {
        println!("wrote {CONFIG_FILE}");
    }
    Ok(())
}

/// Write the starter config under `base`, refusing to overwrite.
fn write_starter(base: &Path) -> anyhow::Result<()> {
    let path = base.join(CONFIG_FILE);
    if path.exists() {
        bail!("{} already exists; refusing to overwrite", path.display());
    }

    std::fs::create_dir_all(base.join(CONFIG_DIR))
        .with_context(|| format!("failed to create {CONFIG_DIR}"))?;
    std::fs::write(&path, starter_toml()?)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn starter_toml() -> anyhow::Result<String> {
    let starter = GreenroomConfig {
        github: GithubConfig {
            owner: "your-org".into(),
            repo: "sessions-123".into(),
            project_number: 1,
            ..Default::default()
        },
        registry: RegistryConfig {
            base_url: "https://registry.example.org/api/v1".into(),
            ..Default::default()
        },
    };
    let body = toml::to_string_pretty(&starter)?;
    Ok(format!(
        "# Greenroom configuration.\n\
         # Every value here can be overridden with a GRN_* environment variable,\n\
         # e.g. GRN_GITHUB__TOKEN; leave tokens out of committed files.\n\n{body}"
    ))
}
