use social_swarm::app::App;
use social_swarm::query::GroupQuery;
use social_swarm::seed::SeedData;
use social_swarm::store::GroupStore;
use swarm_types::{GroupSortKey, NewGroup, SortDirection};

fn seeded_store() -> GroupStore {
    GroupStore::from_seed(SeedData::builtin().expect("built-in seed should parse"))
}

#[test]
fn test_full_group_lifecycle() {
    let mut store = seeded_store();
    let initial = store.group_count();

    // Create
    let created = store
        .add_group(NewGroup {
            name: "Campaign".to_string(),
            description: "Holiday campaign".to_string(),
            profiles: vec!["p3".to_string(), "p1".to_string(), "nope".to_string()],
        })
        .clone();
    assert_eq!(store.group_count(), initial + 1);
    assert_eq!(created.created_at, created.updated_at);

    // Membership resolves in profile order without the dangling id
    let members: Vec<&str> = store
        .profiles_for_group(&created.id)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(members, vec!["p1", "p3"]);

    // Update
    let mut edited = created.clone();
    edited.description = "Winter campaign".to_string();
    let updated = store.update_group(edited).cloned().expect("group exists");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    // Delete
    store.delete_group(&created.id);
    assert_eq!(store.group_count(), initial);
    let listed = GroupQuery::default().apply(&store);
    assert!(listed.iter().all(|v| v.group.id != created.id));
}

#[test]
fn test_search_and_sort_over_seed() {
    let store = seeded_store();

    let query = GroupQuery {
        search: "VIDEO".to_string(),
        ..Default::default()
    };
    let found: Vec<&str> = query.apply(&store).iter().map(|v| v.group.name.as_str()).collect();
    assert_eq!(found, vec!["Video Channels"]);

    let mut query = GroupQuery {
        sort_key: GroupSortKey::ProfileCount,
        direction: SortDirection::Descending,
        ..Default::default()
    };
    let counts: Vec<usize> = query.apply(&store).iter().map(|v| v.profiles.len()).collect();
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));

    query.direction = query.direction.toggle();
    let counts: Vec<usize> = query.apply(&store).iter().map(|v| v.profiles.len()).collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_app_state_is_transient() {
    let mut app = App::new(seeded_store());
    app.enter_search_mode();
    app.push_search_char('x');
    app.toggle_sort_direction();
    drop(app);

    // A fresh app starts from defaults again
    let app = App::new(seeded_store());
    assert!(app.groups_pane.query.search.is_empty());
    assert_eq!(app.groups_pane.query.direction, SortDirection::Ascending);
}
