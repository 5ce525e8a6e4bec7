use crate::catalog::Catalog;
use crate::error::{DeckError, Result};
use crate::model::PhotoRecord;
use crate::store::{FileStore, PreferenceStore};

/// Resolve user selectors to catalog records.
///
/// A selector is an exact photo name or a 1-based position in the current list.
/// Names win: timestamp names are all digits and would otherwise read as positions.
pub async fn resolve_selectors<F, P, S>(
    catalog: &mut Catalog<F, P>,
    selectors: &[S],
) -> Result<Vec<PhotoRecord>>
where
    F: FileStore,
    P: PreferenceStore,
    S: AsRef<str>,
{
    if !catalog.is_loaded() {
        catalog.load().await?;
    }

    selectors
        .iter()
        .map(|s| {
            let s = s.as_ref().trim();
            if let Some(record) = catalog.find(s) {
                return Ok(record.clone());
            }
            s.parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .and_then(|n| catalog.images().get(n - 1))
                .cloned()
                .ok_or_else(|| DeckError::PhotoNotFound(s.to_string()))
        })
        .collect()
}
