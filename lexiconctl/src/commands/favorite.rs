use anyhow::{Context, Result, bail};
use lexicon_config::ConfigLoad;
use lexicon_core::{FavoriteOp, ToggleOutcome};
use lexicon_model::EntryId;

use crate::app::open_view;
use crate::cli::FavoriteAction;

pub async fn favorite(load: &ConfigLoad, action: FavoriteAction) -> Result<()> {
    match action {
        FavoriteAction::Toggle { user, entry_id } => {
            let mut view = open_view(load, Some(&user)).await?;
            let entry = EntryId(entry_id);
            let Some(word) = view.catalog().get(entry).map(|e| e.word.clone())
            else {
                bail!("no catalog entry with id {entry_id}");
            };

            match view.toggle_favorite(entry) {
                ToggleOutcome::Committed { edit, remote } => {
                    remote
                        .await
                        .context("favorite sync task failed")?
                        .context("failed to save favorite")?;
                    match edit.op {
                        FavoriteOp::Add => println!("Added {entry_id}. {word} to favorites"),
                        FavoriteOp::Remove => {
                            println!("Removed {entry_id}. {word} from favorites")
                        }
                    }
                }
                ToggleOutcome::SignInRequired => {
                    bail!("a user is required to save favorites")
                }
            }
        }
        FavoriteAction::List { user } => {
            let view = open_view(load, Some(&user)).await?;
            let ids = view.favorites().ids();
            if ids.is_empty() {
                println!("{user} has no favorites");
            }
            for id in ids {
                match view.catalog().get(id) {
                    Some(entry) => {
                        println!("{:>4}. {} - {}", id.get(), entry.word, entry.translation)
                    }
                    None => println!("{:>4}. (not in catalog)", id.get()),
                }
            }
        }
    }
    Ok(())
}
