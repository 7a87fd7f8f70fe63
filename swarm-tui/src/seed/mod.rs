// Initial profile and group data the store is built from
pub mod error;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use swarm_types::{ProfileGroup, SocialProfile};

pub use error::{SeedError, SeedResult};

const BUILTIN_SEED: &str = include_str!("../../data/seed.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    pub profiles: Vec<SocialProfile>,
    #[serde(default)]
    pub groups: Vec<ProfileGroup>,
}

impl SeedData {
    /// Seed data compiled into the binary
    pub fn builtin() -> SeedResult<Self> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Load seed data from a JSON file on disk
    pub fn load(path: &Path) -> SeedResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> SeedResult<Self> {
        let seed: SeedData = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Ids must be unique; dangling membership references are allowed
    pub fn validate(&self) -> SeedResult<()> {
        let mut seen = HashSet::new();
        for profile in &self.profiles {
            if !seen.insert(profile.id.as_str()) {
                return Err(SeedError::DuplicateProfileId(profile.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if !seen.insert(group.id.as_str()) {
                return Err(SeedError::DuplicateGroupId(group.id.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_seed_parses() {
        let seed = SeedData::builtin().unwrap();
        assert!(!seed.profiles.is_empty());
        assert!(!seed.groups.is_empty());
    }

    #[test]
    fn test_builtin_seed_covers_every_network() {
        let seed = SeedData::builtin().unwrap();
        for network in swarm_types::SocialNetwork::ALL {
            assert!(
                seed.profiles.iter().any(|p| p.network == network),
                "missing a {} profile",
                network.as_str()
            );
        }
    }

    #[test]
    fn test_duplicate_profile_id_rejected() {
        let json = r#"{
            "profiles": [
                {"id": "p1", "name": "A", "username": "a", "network": "twitter", "avatar": "", "accessToken": "x"},
                {"id": "p1", "name": "B", "username": "b", "network": "facebook", "avatar": "", "accessToken": "y"}
            ]
        }"#;
        let err = SeedData::from_json(json).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateProfileId(id) if id == "p1"));
    }

    #[test]
    fn test_duplicate_group_id_rejected() {
        let json = r#"{
            "profiles": [],
            "groups": [
                {"id": "g1", "name": "A", "description": "", "profiles": [], "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"},
                {"id": "g1", "name": "B", "description": "", "profiles": [], "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"}
            ]
        }"#;
        let err = SeedData::from_json(json).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateGroupId(id) if id == "g1"));
    }

    #[test]
    fn test_dangling_membership_is_accepted() {
        let json = r#"{
            "profiles": [],
            "groups": [
                {"id": "g1", "name": "A", "description": "", "profiles": ["gone"], "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"}
            ]
        }"#;
        let seed = SeedData::from_json(json).unwrap();
        assert_eq!(seed.groups[0].profiles, vec!["gone".to_string()]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"profiles": [], "groups": []}}"#).unwrap();

        let seed = SeedData::load(file.path()).unwrap();
        assert!(seed.profiles.is_empty());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = SeedData::load(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/seed.json"));
    }
}
