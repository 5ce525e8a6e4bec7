use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{FileStore, PreferenceStore};

use super::helpers::resolve_selectors;

pub async fn run<F: FileStore, P: PreferenceStore, S: AsRef<str>>(
    catalog: &mut Catalog<F, P>,
    selectors: &[S],
) -> Result<CmdResult> {
    let records = resolve_selectors(catalog, selectors).await?;
    let mut result = CmdResult::default();

    for record in records {
        if catalog.remove(&record).await? {
            result.add_message(CmdMessage::success(format!(
                "Photo deleted: {}",
                record.name
            )));
            result.affected_photos.push(record);
        } else {
            result.add_message(CmdMessage::info(format!(
                "Photo already gone: {}",
                record.name
            )));
        }
    }

    Ok(result)
}
