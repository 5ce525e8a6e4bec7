use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{FileStore, PreferenceStore};

/// Reload from disk and report what reconciliation had to fix.
pub async fn run<F: FileStore, P: PreferenceStore>(
    catalog: &mut Catalog<F, P>,
) -> Result<CmdResult> {
    let report = catalog.load().await?;
    let mut result = CmdResult::default();

    if report.created_dir {
        result.add_message(CmdMessage::info("Photo directory created."));
    }
    result.add_message(CmdMessage::success(format!(
        "Loaded {} photo(s).",
        report.loaded
    )));
    if report.pruned_favorites > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Removed {} favorite(s) whose photo no longer exists.",
            report.pruned_favorites
        )));
    }

    Ok(result.with_affected_photos(catalog.images().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureSource;
    use crate::naming::SequenceNamer;
    use crate::store::memory::{MemFileStore, MemPreferenceStore};
    use crate::store::FileStore;

    #[tokio::test]
    async fn reports_pruned_favorites() {
        let mut catalog = Catalog::new(MemFileStore::new(), MemPreferenceStore::new())
            .with_namer(SequenceNamer::starting_at(1000));
        let a = catalog
            .add(CaptureSource::CameraCapture(b"a".to_vec()))
            .await
            .unwrap();
        catalog.toggle_favorite(&a).await.unwrap();
        catalog.files().delete("1000.jpeg").await.unwrap();

        let result = run(&mut catalog).await.unwrap();
        let text: Vec<&str> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            text,
            vec![
                "Loaded 0 photo(s).",
                "Removed 1 favorite(s) whose photo no longer exists."
            ]
        );
    }
}
