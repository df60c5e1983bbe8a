use tracing::info;

use crate::database::Database;
use crate::error::Result;
use crate::track::TrackInfo;

/// Builds a track from the two values and persists it in its own transaction.
///
/// Single attempt: any failure is returned and the uncommitted transaction is
/// rolled back when it goes out of scope.
pub async fn create_and_store_track_info(
    db: &Database,
    track_name: &str,
    file_location: &str,
) -> Result<TrackInfo> {
    let mut uow = db.begin().await?;
    let track = uow.save(TrackInfo::new(track_name, file_location)).await?;
    uow.commit().await?;
    info!(id = ?track.id(), "stored track");
    Ok(track)
}
