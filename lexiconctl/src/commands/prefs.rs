use anyhow::{Context, Result};
use lexicon_config::ConfigLoad;
use lexicon_model::{DisplayToggle, PreferenceKey};

use crate::app::open_preferences;
use crate::cli::PrefsAction;

pub fn prefs(load: &ConfigLoad, action: PrefsAction) -> Result<()> {
    let mut store = open_preferences(load)?;
    match action {
        PrefsAction::Show => {
            let current = store.preferences();
            for key in PreferenceKey::ALL {
                println!("{} = {}", key.storage_key(), current.stored_value(key));
            }
        }
        PrefsAction::Toggle { which } => {
            let toggle = DisplayToggle::from(which);
            let value = store
                .toggle(toggle)
                .context("failed to save preference")?;
            println!("{} = {value}", toggle.key().storage_key());
        }
        PrefsAction::PageSize { size } => {
            store
                .set_page_size(size)
                .with_context(|| format!("cannot use page size {size}"))?;
            println!("{} = {size}", PreferenceKey::PageSize.storage_key());
        }
    }
    Ok(())
}
