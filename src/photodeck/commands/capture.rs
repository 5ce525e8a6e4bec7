use crate::capture::CaptureInput;
use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{FileStore, PreferenceStore};

pub async fn run<F: FileStore, P: PreferenceStore>(
    catalog: &mut Catalog<F, P>,
    inputs: Vec<CaptureInput>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for input in inputs {
        let source = input.resolve().await?;
        let kind = source.kind();
        let record = catalog.add(source).await?;
        result.add_message(CmdMessage::success(format!(
            "Photo saved ({}): {}",
            kind, record.name
        )));
        result.affected_photos.push(record);
    }

    Ok(result)
}
