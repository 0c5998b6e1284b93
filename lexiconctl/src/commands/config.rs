use anyhow::{Context, Result, bail};
use lexicon_config::{ConfigLoad, LexiconConfig};

use crate::cli::ConfigAction;

pub fn config(load: &ConfigLoad, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("# source: {}", load.source);
            print!("{}", load.config.to_toml_string()?);
        }
        ConfigAction::Init { path, force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            let rendered = LexiconConfig::default().to_toml_string()?;
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
