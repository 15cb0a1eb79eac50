use crate::api::DeviceApi;
use shared::file_entry::sort_newest_first;
use shared::memory::DiskUsage;
use tracing::{info, warn};

/// One storage snapshot: card state, usage split, newest-first listing.
/// Nothing is retained between snapshots.
pub async fn show_snapshot(api: &DeviceApi) -> Result<(), String> {
    let card = api
        .memory()
        .await
        .map_err(|e| format!("Could not read card info - {e}"))?;

    if !card.present {
        warn!("SD card not found");
        return Ok(());
    }

    let usage = DiskUsage::from(&card);
    info!("Card type  {}", card.cardtype);
    info!("Total      {}", usage.format_total());
    info!("Used       {}", usage.format_used());

    let mut entries = api
        .list_dir()
        .await
        .map_err(|e| format!("Could not list the card directory - {e}"))?;
    sort_newest_first(&mut entries);

    if entries.is_empty() {
        info!("No files stored");
        return Ok(());
    }
    for (i, entry) in entries.iter().enumerate() {
        info!(
            "{:>3}  {}  {:>10}  {}",
            i + 1,
            entry.display_date(),
            entry.display_size(),
            entry.name
        );
    }
    Ok(())
}

/// delete then re-list, so the caller sees the post-delete state
pub async fn delete_file(api: &DeviceApi, file_name: &str) -> Result<(), String> {
    api.delete_file(file_name)
        .await
        .map_err(|e| format!("Could not delete '{file_name}' - {e}"))?;
    info!("Deleted '{file_name}'");
    show_snapshot(api).await
}
