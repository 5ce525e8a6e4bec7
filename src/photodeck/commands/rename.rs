use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DeckError, Result};
use crate::store::{FileStore, PreferenceStore};

use super::helpers::resolve_selectors;

pub async fn run<F: FileStore, P: PreferenceStore>(
    catalog: &mut Catalog<F, P>,
    selector: &str,
    new_name: &str,
) -> Result<CmdResult> {
    let record = resolve_selectors(catalog, &[selector])
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| DeckError::PhotoNotFound(selector.to_string()))?;

    let renamed = catalog.rename(&record, new_name.trim()).await?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Photo renamed: {} -> {}",
        record.name, renamed.name
    )));
    result.affected_photos.push(renamed);
    Ok(result)
}
