use std::fs;

use social_swarm::seed::{SeedData, SeedError};
use social_swarm::store::GroupStore;

#[test]
fn test_custom_seed_file_drives_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    fs::write(
        &path,
        r#"{
            "profiles": [
                {"id": "a", "name": "Ann Example", "username": "@ann", "network": "instagram", "avatar": "", "accessToken": "t"}
            ],
            "groups": [
                {"id": "team", "name": "Team", "description": "", "profiles": ["a", "b"], "createdAt": "2024-06-01T12:00:00.000Z", "updatedAt": "2024-06-01T12:00:00.000Z"}
            ]
        }"#,
    )
    .unwrap();

    let store = GroupStore::from_seed(SeedData::load(&path).unwrap());
    let members = store.profiles_for_group("team");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].initials(), "AE");
}

#[test]
fn test_malformed_seed_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    fs::write(&path, r#"{"profiles": [{"id": "a"}]}"#).unwrap();

    let err = SeedData::load(&path).unwrap_err();
    assert!(matches!(err, SeedError::Parse(_)));
}

#[test]
fn test_unknown_network_is_rejected() {
    let json = r#"{"profiles": [
        {"id": "a", "name": "A", "username": "a", "network": "myspace", "avatar": "", "accessToken": "t"}
    ]}"#;
    assert!(SeedData::from_json(json).is_err());
}
