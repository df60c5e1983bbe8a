use std::fmt;

/// One row of the `track_info` table.
///
/// A track without an `id` is transient. The id is assigned by the database
/// when the track is saved through a [`UnitOfWork`](crate::unit_of_work::UnitOfWork)
/// and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct TrackInfo {
    id: Option<i64>,
    track_name: String,
    file_location: String,
}
impl TrackInfo {
    pub fn new(track_name: impl Into<String>, file_location: impl Into<String>) -> Self {
        Self {
            id: None,
            track_name: track_name.into(),
            file_location: file_location.into(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn track_name(&self) -> &str {
        &self.track_name
    }

    pub fn file_location(&self) -> &str {
        &self.file_location
    }

    pub fn is_transient(&self) -> bool {
        self.id.is_none()
    }

    pub fn with_track_name(self, track_name: impl Into<String>) -> Self {
        Self {
            track_name: track_name.into(),
            ..self
        }
    }

    pub fn with_file_location(self, file_location: impl Into<String>) -> Self {
        Self {
            file_location: file_location.into(),
            ..self
        }
    }

    // only the unit of work hands out ids
    pub(crate) fn persisted(self, id: i64) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl fmt::Display for TrackInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "track_name = {}\nfile_location = {}",
            self.track_name, self.file_location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_name_then_location() {
        let track = TrackInfo::new("New Record", "testing twice");
        assert_eq!(
            track.to_string(),
            "track_name = New Record\nfile_location = testing twice"
        );
    }

    #[test]
    fn new_track_is_transient() {
        let track = TrackInfo::new("a", "b");
        assert!(track.is_transient());
        assert_eq!(track.id(), None);
        assert!(TrackInfo::default().is_transient());
    }

    #[test]
    fn empty_fields_are_accepted() {
        let track = TrackInfo::new("", "");
        assert_eq!(track.to_string(), "track_name = \nfile_location = ");
    }

    #[test]
    fn builders_replace_one_field_and_keep_the_id() {
        let track = TrackInfo::new("old", "/music/old.ogg")
            .persisted(7)
            .with_track_name("new");
        assert_eq!(track.id(), Some(7));
        assert_eq!(track.track_name(), "new");
        assert_eq!(track.file_location(), "/music/old.ogg");

        let moved = track.with_file_location("/music/new.ogg");
        assert_eq!(moved.file_location(), "/music/new.ogg");
        assert!(!moved.is_transient());
    }
}
