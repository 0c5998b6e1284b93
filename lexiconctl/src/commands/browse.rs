use anyhow::{Context, Result};
use lexicon_config::ConfigLoad;
use lexicon_model::{FilterScope, Letter};

use crate::app::open_view;
use crate::cli::BrowseArgs;
use crate::render::{Terminal, format_notices, format_page};

pub async fn browse(load: &ConfigLoad, args: BrowseArgs) -> Result<()> {
    let mut view = open_view(load, args.user.as_deref()).await?;

    if let Some(size) = args.page_size {
        view.set_page_size(size)
            .with_context(|| format!("invalid page size {size}"))?;
    }
    if let Some(search) = args.search {
        view.set_search_text(search);
    }
    if let Some(raw) = args.letter {
        let letter = Letter::parse(&raw)
            .with_context(|| format!("invalid letter {raw:?}"))?;
        view.select_letter(letter);
    }
    if args.favorites {
        view.set_scope(FilterScope::FavoritesOnly);
    }

    let mut terminal = Terminal::default();
    view.set_page(args.page, &mut terminal);
    let page = match terminal.take() {
        Some(page) => page,
        None => view.page_view(),
    };

    print!("{}", format_page(&page));
    eprint!("{}", format_notices(&page));
    Ok(())
}
