use giggen_core::db::migrations::latest_version;
use giggen_core::db::open_db_in_memory;
use giggen_core::{
    MediaItem, MediaKind, RepoError, SqliteTimelineRepository, TimelineEvent, TimelineRepository,
    TimelineSource, Visibility,
};
use rusqlite::Connection;
use uuid::Uuid;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTimelineRepository::try_new(&conn).unwrap();
    let source = TimelineSource::Project(Uuid::new_v4());

    let mut event = TimelineEvent::new("Festivaldebut", "performance");
    event.date = Some("2023-08-12".to_string());
    event.location_name = Some("Øyafestivalen".to_string());
    event.city = Some("Oslo".to_string());
    event.country = Some("Norge".to_string());
    event.media = vec![MediaItem {
        kind: MediaKind::Image,
        url: "https://cdn.giggen.no/oya.jpg".to_string(),
    }];

    let id = repo.create_event(&source, &event).unwrap();
    let loaded = repo.get_event(&source, id).unwrap().unwrap();

    assert_eq!(loaded.uuid, event.uuid);
    assert_eq!(loaded.title, "Festivaldebut");
    assert_eq!(loaded.visibility, Visibility::Public);
    assert_eq!(loaded.date.as_deref(), Some("2023-08-12"));
    assert_eq!(loaded.location_name.as_deref(), Some("Øyafestivalen"));
    assert_eq!(loaded.media, event.media);
}

#[test]
fn update_existing_event() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTimelineRepository::try_new(&conn).unwrap();
    let source = TimelineSource::Entity(Uuid::new_v4());

    let mut event = TimelineEvent::new("Nyåpning", "opening");
    repo.create_event(&source, &event).unwrap();

    event.title = "Relansering av scenen".to_string();
    event.event_type = "relaunch".to_string();
    event.visibility = Visibility::Pro;
    event.year = Some(2022);
    repo.update_event(&source, &event).unwrap();

    let loaded = repo.get_event(&source, event.uuid).unwrap().unwrap();
    assert_eq!(loaded.title, "Relansering av scenen");
    assert_eq!(loaded.event_type, "relaunch");
    assert_eq!(loaded.visibility, Visibility::Pro);
    assert_eq!(loaded.year, Some(2022));
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTimelineRepository::try_new(&conn).unwrap();
    let source = TimelineSource::Persona(Uuid::new_v4());

    let event = TimelineEvent::new("missing", "milestone");
    let err = repo.update_event(&source, &event).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == event.uuid));
}

#[test]
fn update_under_wrong_owner_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTimelineRepository::try_new(&conn).unwrap();
    let owner = TimelineSource::Project(Uuid::new_v4());
    let stranger = TimelineSource::Project(Uuid::new_v4());

    let event = TimelineEvent::new("owned row", "milestone");
    repo.create_event(&owner, &event).unwrap();

    let err = repo.update_event(&stranger, &event).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn delete_removes_the_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTimelineRepository::try_new(&conn).unwrap();
    let source = TimelineSource::Persona(Uuid::new_v4());

    let event = TimelineEvent::new("kort levetid", "milestone");
    repo.create_event(&source, &event).unwrap();
    repo.delete_event(&source, event.uuid).unwrap();

    assert!(repo.get_event(&source, event.uuid).unwrap().is_none());

    let err = repo.delete_event(&source, event.uuid).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == event.uuid));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteTimelineRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_tables() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTimelineRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("project_timeline_events"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    for table in [
        "project_timeline_events",
        "entity_timeline_events",
        "persona_timeline_events",
    ] {
        let owner_column = match table {
            "project_timeline_events" => "project_id",
            "entity_timeline_events" => "entity_id",
            _ => "persona_id",
        };
        conn.execute_batch(&format!(
            "CREATE TABLE {table} (
                uuid TEXT PRIMARY KEY NOT NULL,
                {owner_column} TEXT NOT NULL,
                title TEXT NOT NULL
            );"
        ))
        .unwrap();
    }
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTimelineRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "project_timeline_events",
            column: "event_type"
        })
    ));
}

#[test]
fn corrupt_media_payload_surfaces_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTimelineRepository::try_new(&conn).unwrap();
    let source = TimelineSource::Project(Uuid::new_v4());

    let event = TimelineEvent::new("media row", "milestone");
    repo.create_event(&source, &event).unwrap();

    conn.execute(
        "UPDATE project_timeline_events SET media = 'not-json' WHERE uuid = ?1;",
        [event.uuid.to_string()],
    )
    .unwrap();

    let err = repo.get_event(&source, event.uuid).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
