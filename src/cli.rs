use clap::Parser;
use tracing::warn;

use crate::database::Database;
use crate::error::Result;
use crate::manager::create_and_store_track_info;
use crate::track::TrackInfo;

/// The only action that writes anything.
pub const STORE_ACTION: &str = "store";
pub const DEMO_TRACK_NAME: &str = "New Record";
pub const DEMO_FILE_LOCATION: &str = "testing twice";

#[derive(Debug, Parser)]
#[command(name = "track-store", version, about = "Stores a demonstration track record")]
pub struct Cli {
    /// Pass `store` to persist the demonstration track. Anything else is a no-op.
    pub action: String,
}

/// Runs the action, then closes the database whatever the outcome.
pub async fn execute(db: Database, action: &str) -> Result<Option<TrackInfo>> {
    let outcome = run(&db, action).await;
    db.close().await;
    outcome
}

/// Runs the requested action against an open database.
///
/// Returns the stored track when the action was `store`.
pub async fn run(db: &Database, action: &str) -> Result<Option<TrackInfo>> {
    if action == STORE_ACTION {
        let track = create_and_store_track_info(db, DEMO_TRACK_NAME, DEMO_FILE_LOCATION).await?;
        Ok(Some(track))
    } else {
        warn!(action, "unknown action, nothing stored");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_positional_action() {
        let cli = Cli::try_parse_from(["track-store", "store"]).unwrap();
        assert_eq!(cli.action, STORE_ACTION);

        let cli = Cli::try_parse_from(["track-store", "list"]).unwrap();
        assert_eq!(cli.action, "list");
    }

    #[test]
    fn missing_action_is_a_usage_error() {
        let err = Cli::try_parse_from(["track-store"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["track-store", "store", "again"]).is_err());
    }

    #[tokio::test]
    async fn execute_closes_the_database_after_storing() {
        let db = Database::open_in_memory().await;
        let handle = db.clone();

        let stored = execute(db, STORE_ACTION).await.unwrap().unwrap();
        assert_eq!(stored.track_name(), DEMO_TRACK_NAME);
        assert!(handle.is_closed());
    }

    #[tokio::test]
    async fn execute_closes_the_database_when_nothing_runs() {
        let db = Database::open_in_memory().await;
        let handle = db.clone();

        assert!(execute(db, "list").await.unwrap().is_none());
        assert!(handle.is_closed());
    }

    #[tokio::test]
    async fn execute_closes_the_database_when_storing_fails() {
        let db = Database::open_in_memory().await;
        db.reject_track_name(DEMO_TRACK_NAME).await;
        let handle = db.clone();

        let err = execute(db, STORE_ACTION).await.unwrap_err();
        assert!(matches!(err, crate::error::StoreError::Database(_)));
        assert!(handle.is_closed());
    }
}
