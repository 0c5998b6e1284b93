//! Builds engine components from the loaded configuration.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use lexicon_config::{ConfigLoad, ConfigLoader};
use lexicon_core::infra::{JsonFileFavoriteStore, JsonFileStorage};
use lexicon_core::{
    Catalog, CatalogView, FavoritesSync, NoticeCenter, PreferenceStore,
    open_source,
};
use lexicon_model::{PreferenceSet, UserId};
use tracing::warn;

pub type FileView = CatalogView<JsonFileFavoriteStore, JsonFileStorage>;

pub fn load_config(explicit: Option<&Path>) -> Result<ConfigLoad> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = explicit {
        loader = loader.with_config_path(path);
    }
    let load = loader.load().context("failed to load configuration")?;
    for warning in &load.warnings.items {
        match &warning.hint {
            Some(hint) => warn!(hint = %hint, "{}", warning.message),
            None => warn!("{}", warning.message),
        }
    }
    Ok(load)
}

pub fn open_preferences(
    load: &ConfigLoad,
) -> Result<PreferenceStore<JsonFileStorage>> {
    let path = &load.config.storage.preferences_path;
    let storage = JsonFileStorage::open(path).with_context(|| {
        format!("failed to open preferences at {}", path.display())
    })?;
    let defaults = PreferenceSet {
        page_size: load.config.engine.default_page_size,
        ..PreferenceSet::default()
    };
    Ok(PreferenceStore::load(Arc::new(storage), defaults))
}

pub fn open_catalog(load: &ConfigLoad) -> Result<Catalog> {
    let catalog = &load.config.catalog;
    let source = open_source(&catalog.path, catalog.format);
    Catalog::load(source.as_ref()).with_context(|| {
        format!("failed to load catalog from {}", catalog.path.display())
    })
}

/// Assemble a view and, when `user` is given, wait for their favorites.
pub async fn open_view(load: &ConfigLoad, user: Option<&str>) -> Result<FileView> {
    let catalog = open_catalog(load)?;
    let preferences = open_preferences(load)?;
    let favorites = FavoritesSync::new(
        Arc::new(JsonFileFavoriteStore::new(
            &load.config.storage.favorites_path,
        )),
        NoticeCenter::new(load.config.engine.notice_duration()),
    );
    if let Some(user) = user {
        favorites.set_identity(Some(&UserId::new(user))).await;
    }
    Ok(CatalogView::new(
        catalog,
        preferences,
        favorites,
        load.config.engine.clone(),
    )?)
}
