use std::cmp::Ordering;

use swarm_types::{GroupSortKey, ProfileGroup, ProfileSortKey, SocialProfile, SortDirection};

use crate::store::GroupStore;

/// A group together with its resolved members, as shown in the list
#[derive(Debug, Clone)]
pub struct GroupView<'a> {
    pub group: &'a ProfileGroup,
    pub profiles: Vec<&'a SocialProfile>,
}

/// Case-insensitive substring match; a blank term matches everything
fn matches_term(term: &str, fields: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    fields.iter().any(|field| field.to_lowercase().contains(&term))
}

pub fn group_matches(group: &ProfileGroup, term: &str) -> bool {
    matches_term(term, &[group.name.as_str(), group.description.as_str()])
}

pub fn profile_matches(profile: &SocialProfile, term: &str) -> bool {
    matches_term(term, &[profile.name.as_str(), profile.username.as_str()])
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn sort_groups(views: &mut [GroupView<'_>], key: GroupSortKey, direction: SortDirection) {
    views.sort_by(|a, b| {
        let ordering = match key {
            GroupSortKey::Name => compare_names(&a.group.name, &b.group.name),
            GroupSortKey::Created => a.group.created_at.cmp(&b.group.created_at),
            GroupSortKey::ProfileCount => a.profiles.len().cmp(&b.profiles.len()),
        };
        directed(ordering, direction)
    });
}

pub fn sort_profiles(profiles: &mut [&SocialProfile], key: ProfileSortKey, direction: SortDirection) {
    profiles.sort_by(|a, b| {
        let ordering = match key {
            ProfileSortKey::Name => compare_names(&a.name, &b.name),
            ProfileSortKey::Network => a.network.as_str().cmp(b.network.as_str()),
        };
        directed(ordering, direction)
    });
}

/// Search and sort settings for the group list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupQuery {
    pub search: String,
    pub sort_key: GroupSortKey,
    pub direction: SortDirection,
}

impl GroupQuery {
    pub fn apply<'a>(&self, store: &'a GroupStore) -> Vec<GroupView<'a>> {
        let mut views: Vec<GroupView<'a>> = store
            .groups()
            .iter()
            .filter(|group| group_matches(group, &self.search))
            .map(|group| GroupView {
                group,
                profiles: store.resolve_members(group),
            })
            .collect();
        sort_groups(&mut views, self.sort_key, self.direction);
        views
    }
}

/// Search and sort settings for a profile list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileQuery {
    pub search: String,
    pub sort_key: ProfileSortKey,
    pub direction: SortDirection,
}

impl ProfileQuery {
    pub fn apply<'a>(&self, profiles: &[&'a SocialProfile]) -> Vec<&'a SocialProfile> {
        let mut filtered: Vec<&'a SocialProfile> = profiles
            .iter()
            .copied()
            .filter(|profile| profile_matches(profile, &self.search))
            .collect();
        sort_profiles(&mut filtered, self.sort_key, self.direction);
        filtered
    }
}
