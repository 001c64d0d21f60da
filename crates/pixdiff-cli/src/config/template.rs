use std::path::Path;

use anyhow::{Context, Result};

use super::{CONFIG_DIR, CONFIG_FILE};

/// Hand-crafted config template with commented-out keys, so users can see
/// the available knobs.
const CONFIG_TEMPLATE: &str = r##"# ─────────────────────────────────────────────────────────
# Comparison. All fields optional. CLI flags and PIXDIFF_* env
# variables override these.
# ─────────────────────────────────────────────────────────
[diff]
engine = "{engine}"                 # "exact" | "perceptual"
# threshold = 0.1                   # perceptual only: 0.0 = any visible change fails
# ignore_color = "#ffd800"          # pixels of this color are never reported
# diff_color = "#ff0000"            # highlight for changed pixels
"##;

pub fn config_file_exists(dir: &Path) -> bool {
    dir.join(CONFIG_DIR).join(CONFIG_FILE).exists()
}

/// Write the config template under `<dir>/.pixdiff/`.
pub fn write_template(dir: &Path, engine: super::Engine) -> Result<()> {
    let dir = dir.join(CONFIG_DIR);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(CONFIG_FILE);
    let engine = match engine {
        super::Engine::Exact => "exact",
        super::Engine::Perceptual => "perceptual",
    };
    let content = CONFIG_TEMPLATE.replace("{engine}", engine);
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::{Engine, load_from};
    use super::*;

    #[test]
    fn template_round_trips_through_loader() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!config_file_exists(tmp.path()));

        write_template(tmp.path(), Engine::Perceptual).unwrap();
        assert!(config_file_exists(tmp.path()));

        let config = load_from(tmp.path()).unwrap();
        assert_eq!(config.diff.engine, Some(Engine::Perceptual));
        assert_eq!(config.diff.threshold, None);
    }
}
