use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PhotoData;
use crate::store::{FileStore, PreferenceStore};
use crate::upload::UploadClient;

use super::helpers::resolve_selectors;

/// Upload each selected photo once.
///
/// Network and endpoint failures become error notifications instead of errors, so
/// one failed upload neither aborts the rest nor touches the catalog.
pub async fn run<F: FileStore, P: PreferenceStore, S: AsRef<str>>(
    catalog: &mut Catalog<F, P>,
    client: &UploadClient,
    selectors: &[S],
) -> Result<CmdResult> {
    let records = resolve_selectors(catalog, selectors).await?;
    let mut result = CmdResult::default();

    for mut record in records {
        if record.data == PhotoData::Deferred {
            record.data = PhotoData::DataUri(catalog.resolve_data(&record).await?);
        }

        match client.upload(&record).await {
            Ok(receipt) if receipt.success => {
                result.add_message(CmdMessage::success(format!(
                    "File upload complete: {}",
                    receipt.file_name
                )));
                result.affected_photos.push(record);
            }
            Ok(receipt) => {
                tracing::warn!(name = %record.name, "endpoint reported failure");
                result.add_message(CmdMessage::error(format!(
                    "File upload failed: {}",
                    receipt.file_name
                )));
            }
            Err(e) => {
                tracing::warn!(name = %record.name, error = %e, "upload failed");
                result.add_message(CmdMessage::error(format!(
                    "File upload failed: {} ({})",
                    record.name, e
                )));
            }
        }
    }

    Ok(result)
}
