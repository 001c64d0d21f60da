use std::path::Path;

use anyhow::{Result, bail};

use crate::config::{self, Engine};

/// `pixdiff init`: create .pixdiff/config.toml under `dir`.
pub fn init(dir: &Path, engine: Engine, force: bool) -> Result<()> {
    if !force && config::config_file_exists(dir) {
        bail!(".pixdiff/config.toml already exists (use --force to overwrite)");
    }

    config::write_template(dir, engine)?;

    let verb = if force { "Regenerated" } else { "Created" };
    println!("{verb} .pixdiff/config.toml");
    Ok(())
}
