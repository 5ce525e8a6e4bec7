use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::nav;
use crate::store::{FileStore, PreferenceStore};

/// Delete every photo and favorite.
pub async fn all<F: FileStore, P: PreferenceStore>(
    catalog: &mut Catalog<F, P>,
    skip_confirm: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !skip_confirm {
        if !catalog.is_loaded() {
            catalog.load().await?;
        }
        result.add_message(CmdMessage::warning(format!(
            "This deletes {} photo(s) and all favorites. Re-run with --yes to confirm.",
            catalog.images().len()
        )));
        return Ok(result);
    }

    let deleted = catalog.clear_all().await?;
    result.add_message(CmdMessage::success(format!(
        "Deleted {} photo(s).",
        deleted
    )));
    Ok(result)
}

/// Forget the shared gallery list without touching photos.
pub async fn gallery<F: FileStore, P: PreferenceStore>(
    catalog: &mut Catalog<F, P>,
) -> Result<CmdResult> {
    nav::clear_gallery(catalog.prefs()).await?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Gallery list cleared."));
    Ok(result)
}
