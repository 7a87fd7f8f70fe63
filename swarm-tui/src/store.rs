use chrono::{DateTime, Duration, SubsecRound, Utc};
use swarm_types::{NewGroup, ProfileGroup, SocialProfile};
use uuid::Uuid;

use crate::seed::SeedData;

/// In-memory store of profile groups and the profiles they reference.
///
/// Profiles are seeded once and never mutated. Groups are created, updated
/// and deleted through the methods below; operations on unknown ids are
/// no-ops rather than errors.
#[derive(Debug, Clone, Default)]
pub struct GroupStore {
    groups: Vec<ProfileGroup>,
    profiles: Vec<SocialProfile>,
}

impl GroupStore {
    pub fn new(profiles: Vec<SocialProfile>, groups: Vec<ProfileGroup>) -> Self {
        Self { groups, profiles }
    }

    pub fn from_seed(seed: SeedData) -> Self {
        log::info!(
            target: "store",
            "Seeding store with {} profiles and {} groups",
            seed.profiles.len(),
            seed.groups.len()
        );
        Self::new(seed.profiles, seed.groups)
    }

    pub fn groups(&self) -> &[ProfileGroup] {
        &self.groups
    }

    pub fn profiles(&self) -> &[SocialProfile] {
        &self.profiles
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn group(&self, id: &str) -> Option<&ProfileGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn profile(&self, id: &str) -> Option<&SocialProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Create a group, assigning its id and timestamps, and append it
    pub fn add_group(&mut self, new_group: NewGroup) -> &ProfileGroup {
        let now = current_timestamp();
        let group = ProfileGroup {
            id: self.next_group_id(),
            name: new_group.name,
            description: new_group.description,
            profiles: new_group.profiles,
            created_at: now,
            updated_at: now,
        };

        log::info!(target: "store", "Created group {} ({:?})", group.id, group.name);
        self.groups.push(group);
        &self.groups[self.groups.len() - 1]
    }

    /// Replace the group with the same id.
    ///
    /// The stored `created_at` is kept and `updated_at` always moves forward.
    pub fn update_group(&mut self, updated: ProfileGroup) -> Option<&ProfileGroup> {
        let Some(index) = self.groups.iter().position(|g| g.id == updated.id) else {
            log::debug!(target: "store", "Ignoring update for unknown group {}", updated.id);
            return None;
        };

        let existing = &self.groups[index];
        let group = ProfileGroup {
            created_at: existing.created_at,
            updated_at: timestamp_after(existing.updated_at),
            ..updated
        };

        log::info!(target: "store", "Updated group {} ({:?})", group.id, group.name);
        self.groups[index] = group;
        Some(&self.groups[index])
    }

    pub fn delete_group(&mut self, id: &str) -> Option<ProfileGroup> {
        let Some(index) = self.groups.iter().position(|g| g.id == id) else {
            log::debug!(target: "store", "Ignoring delete for unknown group {}", id);
            return None;
        };

        let removed = self.groups.remove(index);
        log::info!(target: "store", "Deleted group {} ({:?})", removed.id, removed.name);
        Some(removed)
    }

    /// Resolve a group's membership in profile order, skipping dangling ids
    pub fn profiles_for_group(&self, id: &str) -> Vec<&SocialProfile> {
        match self.group(id) {
            Some(group) => self.resolve_members(group),
            None => Vec::new(),
        }
    }

    pub fn resolve_members(&self, group: &ProfileGroup) -> Vec<&SocialProfile> {
        self.profiles
            .iter()
            .filter(|profile| group.contains(&profile.id))
            .collect()
    }

    fn next_group_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.group(&id).is_none() {
                return id;
            }
        }
    }
}

/// Current time at the millisecond precision used on the wire
fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn timestamp_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = current_timestamp();
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}
