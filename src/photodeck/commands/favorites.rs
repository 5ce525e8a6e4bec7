use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{FileStore, PreferenceStore};

use super::helpers::resolve_selectors;

pub async fn toggle<F: FileStore, P: PreferenceStore, S: AsRef<str>>(
    catalog: &mut Catalog<F, P>,
    selectors: &[S],
) -> Result<CmdResult> {
    let records = resolve_selectors(catalog, selectors).await?;
    let mut result = CmdResult::default();

    for record in records {
        let is_favorite = catalog.toggle_favorite(&record).await?;
        let verb = if is_favorite {
            "Added to favorites"
        } else {
            "Removed from favorites"
        };
        result.add_message(CmdMessage::success(format!("{}: {}", verb, record.name)));
        result.affected_photos.push(record);
    }

    Ok(result)
}

pub async fn clear<F: FileStore, P: PreferenceStore>(
    catalog: &mut Catalog<F, P>,
) -> Result<CmdResult> {
    let removed = catalog.favorites().await?;
    catalog.clear_favorites().await?;

    let mut result = CmdResult::default().with_affected_photos(removed);
    result.add_message(CmdMessage::success(format!(
        "Cleared {} favorite(s).",
        result.affected_photos.len()
    )));
    Ok(result)
}
