use sqlx::{Any, Transaction};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::schema::Backend;
use crate::track::TrackInfo;

/// An open transaction.
///
/// Nothing saved through it is visible to others until [`commit`](Self::commit).
/// Dropping it without committing rolls everything back.
pub struct UnitOfWork {
    tx: Transaction<'static, Any>,
    backend: Backend,
}
impl UnitOfWork {
    pub(crate) fn new(tx: Transaction<'static, Any>, backend: Backend) -> Self {
        Self { tx, backend }
    }

    /// Inserts a transient track and returns it with its generated id.
    pub async fn save(&mut self, track: TrackInfo) -> Result<TrackInfo> {
        if let Some(id) = track.id() {
            return Err(StoreError::AlreadyPersisted(id));
        }

        let insert = self.backend.insert_track();
        let id = match self.backend {
            Backend::MySql => sqlx::query(insert)
                .bind(track.track_name())
                .bind(track.file_location())
                .execute(&mut *self.tx)
                .await?
                .last_insert_id()
                .ok_or(StoreError::MissingGeneratedId)?,
            Backend::Sqlite => {
                sqlx::query_scalar::<_, i64>(insert)
                    .bind(track.track_name())
                    .bind(track.file_location())
                    .fetch_one(&mut *self.tx)
                    .await?
            }
        };
        debug!(id, "inserted track");

        Ok(track.persisted(id))
    }

    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        debug!("transaction committed");
        Ok(())
    }

    pub async fn rollback(self) -> Result<()> {
        self.tx.rollback().await?;
        debug!("transaction rolled back");
        Ok(())
    }
}
