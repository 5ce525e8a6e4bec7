use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, ListedPhoto};
use crate::error::Result;
use crate::nav::{self, Page};
use crate::store::{FileStore, PreferenceStore};

pub async fn run<F: FileStore, P: PreferenceStore>(
    catalog: &mut Catalog<F, P>,
    page: Page,
) -> Result<CmdResult> {
    let view = nav::navigate(catalog, page).await?;
    let favorites = catalog.favorites().await?;

    let listed: Vec<ListedPhoto> = view
        .records
        .into_iter()
        .enumerate()
        .map(|(i, record)| ListedPhoto {
            index: i + 1,
            is_favorite: favorites.iter().any(|fav| fav.name == record.name),
            record,
        })
        .collect();

    let mut result = CmdResult::default().with_listed_photos(view.page, listed);
    if page == Page::Home {
        if !catalog.is_loaded() {
            catalog.load().await?;
        }
        result.add_message(CmdMessage::info(format!(
            "{} photo(s), {} favorite(s).",
            catalog.images().len(),
            favorites.len()
        )));
    }
    Ok(result)
}
