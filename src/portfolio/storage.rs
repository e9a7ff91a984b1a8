//! In-memory portfolio storage
//!
//! `PortfolioStorage` is the contract the HTTP layer talks to; `MemStorage`
//! keeps every entity in process memory behind a single async `RwLock`.
//! Nothing is persisted: a restart drops contacts, users and edits and
//! re-seeds the sample projects.

use crate::portfolio::{
    seed,
    types::{
        created_at_millis, Contact, NewContact, NewProject, NewUser, Project, ProjectPatch,
        RecordId, User, NEW_CONTACT_STATUS,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Failures raised by a storage backend
///
/// Lookups that miss are not errors; they return `None` or `false`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("username already taken: {0}")]
    UsernameTaken(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage contract between route handlers and the data store
#[async_trait]
pub trait PortfolioStorage: Send + Sync {
    async fn get_user(&self, id: RecordId) -> StorageResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;
    async fn create_user(&self, user: NewUser) -> StorageResult<User>;

    async fn get_projects(&self) -> StorageResult<Vec<Project>>;
    async fn get_featured_projects(&self) -> StorageResult<Vec<Project>>;
    async fn get_project(&self, id: RecordId) -> StorageResult<Option<Project>>;
    async fn create_project(&self, project: NewProject) -> StorageResult<Project>;
    async fn update_project(
        &self,
        id: RecordId,
        patch: ProjectPatch,
    ) -> StorageResult<Option<Project>>;
    async fn delete_project(&self, id: RecordId) -> StorageResult<bool>;

    async fn get_contacts(&self) -> StorageResult<Vec<Contact>>;
    async fn create_contact(&self, contact: NewContact) -> StorageResult<Contact>;
    async fn update_contact_status(
        &self,
        id: RecordId,
        status: String,
    ) -> StorageResult<Option<Contact>>;
}

/// Maps and id counters guarded as one unit
#[derive(Debug)]
struct StoreState {
    users: BTreeMap<RecordId, User>,
    projects: BTreeMap<RecordId, Project>,
    contacts: BTreeMap<RecordId, Contact>,
    next_user_id: RecordId,
    next_project_id: RecordId,
    next_contact_id: RecordId,
}

impl StoreState {
    fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            projects: BTreeMap::new(),
            contacts: BTreeMap::new(),
            next_user_id: 1,
            next_project_id: 1,
            next_contact_id: 1,
        }
    }

    fn insert_project(&mut self, new: NewProject) -> Project {
        let id = self.next_project_id;
        self.next_project_id += 1;

        let project = Project {
            id,
            title: new.title,
            description: new.description,
            long_description: non_empty(new.long_description),
            technologies: new.technologies,
            features: new.features,
            category: new.category,
            status: new.status,
            live_url: non_empty(new.live_url),
            github_url: non_empty(new.github_url),
            video_url: non_empty(new.video_url),
            image_url: non_empty(new.image_url),
            featured: new.featured.unwrap_or(false),
            created_at: Some(Utc::now()),
        };
        self.projects.insert(id, project.clone());
        project
    }
}

/// Empty strings count as "no value" for optional text fields
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Newest first; equal timestamps fall back to the later id first
fn newest_first<T>(
    mut records: Vec<T>,
    key: impl Fn(&T) -> (i64, RecordId),
) -> Vec<T> {
    records.sort_by(|a, b| key(b).cmp(&key(a)));
    records
}

fn sort_projects(projects: Vec<Project>) -> Vec<Project> {
    newest_first(projects, |p| (created_at_millis(&p.created_at), p.id))
}

fn sort_contacts(contacts: Vec<Contact>) -> Vec<Contact> {
    newest_first(contacts, |c| (created_at_millis(&c.created_at), c.id))
}

/// Process-lifetime in-memory store
#[derive(Debug)]
pub struct MemStorage {
    state: RwLock<StoreState>,
}

impl MemStorage {
    /// Create an empty store with all counters at 1
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::new()),
        }
    }

    /// Create a store pre-populated with the sample projects
    pub fn seeded() -> Self {
        let mut state = StoreState::new();
        for project in seed::sample_projects() {
            state.insert_project(project);
        }
        tracing::info!("🌱 Seeded storage with {} sample projects", state.projects.len());

        Self {
            state: RwLock::new(state),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl PortfolioStorage for MemStorage {
    async fn get_user(&self, id: RecordId) -> StorageResult<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> StorageResult<User> {
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.username == user.username) {
            tracing::warn!("Rejected duplicate username: {}", user.username);
            return Err(StorageError::UsernameTaken(user.username));
        }

        let id = state.next_user_id;
        state.next_user_id += 1;

        let user = User {
            id,
            username: user.username,
            password: user.password,
        };
        state.users.insert(id, user.clone());
        tracing::debug!("Created user {} ({})", user.id, user.username);

        Ok(user)
    }

    async fn get_projects(&self) -> StorageResult<Vec<Project>> {
        let state = self.state.read().await;
        Ok(sort_projects(state.projects.values().cloned().collect()))
    }

    async fn get_featured_projects(&self) -> StorageResult<Vec<Project>> {
        let state = self.state.read().await;
        Ok(sort_projects(
            state
                .projects
                .values()
                .filter(|project| project.featured)
                .cloned()
                .collect(),
        ))
    }

    async fn get_project(&self, id: RecordId) -> StorageResult<Option<Project>> {
        Ok(self.state.read().await.projects.get(&id).cloned())
    }

    async fn create_project(&self, project: NewProject) -> StorageResult<Project> {
        let project = self.state.write().await.insert_project(project);
        tracing::info!("📌 Created project {} ({})", project.id, project.title);
        Ok(project)
    }

    async fn update_project(
        &self,
        id: RecordId,
        patch: ProjectPatch,
    ) -> StorageResult<Option<Project>> {
        let mut state = self.state.write().await;

        let Some(project) = state.projects.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(project);
        tracing::info!("✏️ Updated project {} ({})", project.id, project.title);

        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: RecordId) -> StorageResult<bool> {
        let removed = self.state.write().await.projects.remove(&id).is_some();
        if removed {
            tracing::info!("🗑️ Deleted project {}", id);
        }
        Ok(removed)
    }

    async fn get_contacts(&self) -> StorageResult<Vec<Contact>> {
        let state = self.state.read().await;
        Ok(sort_contacts(state.contacts.values().cloned().collect()))
    }

    async fn create_contact(&self, contact: NewContact) -> StorageResult<Contact> {
        let mut state = self.state.write().await;

        let id = state.next_contact_id;
        state.next_contact_id += 1;

        let contact = Contact {
            id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            project_type: contact.project_type,
            message: contact.message,
            status: NEW_CONTACT_STATUS.to_string(),
            created_at: Some(Utc::now()),
        };
        state.contacts.insert(id, contact.clone());
        tracing::info!("📨 Stored contact message {} from {}", contact.id, contact.email);

        Ok(contact)
    }

    async fn update_contact_status(
        &self,
        id: RecordId,
        status: String,
    ) -> StorageResult<Option<Contact>> {
        let mut state = self.state.write().await;

        let Some(contact) = state.contacts.get_mut(&id) else {
            return Ok(None);
        };
        contact.status = status;
        tracing::debug!("Contact {} status -> {}", contact.id, contact.status);

        Ok(Some(contact.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn new_project(title: &str) -> NewProject {
        NewProject {
            title: title.to_string(),
            description: "desc".to_string(),
            technologies: vec!["Rust".to_string()],
            category: "Tool".to_string(),
            status: "Live".to_string(),
            ..Default::default()
        }
    }

    fn new_contact(email: &str) -> NewContact {
        NewContact {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            project_type: "Web".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_project() {
        let storage = MemStorage::new();

        let created = storage.create_project(new_project("X")).await.unwrap();
        let fetched = storage.get_project(created.id).await.unwrap().unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.id, 1);
        assert_eq!(fetched.title, "X");
        assert_eq!(fetched.technologies, vec!["Rust".to_string()]);
        assert!(fetched.created_at.is_some());
        assert_eq!(fetched.long_description, None);
        assert_eq!(fetched.features, None);
        assert_eq!(fetched.live_url, None);
        assert_eq!(fetched.github_url, None);
        assert_eq!(fetched.video_url, None);
        assert_eq!(fetched.image_url, None);
        assert!(!fetched.featured);
    }

    #[tokio::test]
    async fn test_empty_optional_text_becomes_none() {
        let storage = MemStorage::new();
        let mut input = new_project("X");
        input.live_url = Some(String::new());
        input.github_url = Some("https://github.com/x".to_string());

        let created = storage.create_project(input).await.unwrap();

        assert_eq!(created.live_url, None);
        assert_eq!(created.github_url.as_deref(), Some("https://github.com/x"));
    }

    #[tokio::test]
    async fn test_ids_increase_across_deletes() {
        let storage = MemStorage::new();
        let mut seen = Vec::new();

        for i in 0..4 {
            let project = storage.create_project(new_project(&format!("p{i}"))).await.unwrap();
            seen.push(project.id);
            if i % 2 == 0 {
                assert!(storage.delete_project(project.id).await.unwrap());
            }
        }
        let last = storage.create_project(new_project("last")).await.unwrap();
        seen.push(last.id);

        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_projects_listed_newest_first() {
        let storage = MemStorage::new();
        let a = storage.create_project(new_project("A")).await.unwrap();
        let b = storage.create_project(new_project("B")).await.unwrap();

        let projects = storage.get_projects().await.unwrap();
        let ids: Vec<_> = projects.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn test_missing_timestamp_sorts_last() {
        let storage = MemStorage::new();
        storage.create_project(new_project("A")).await.unwrap();
        storage.create_project(new_project("B")).await.unwrap();
        {
            let mut state = storage.state.write().await;
            state.projects.get_mut(&2).unwrap().created_at = None;
            state.projects.get_mut(&1).unwrap().created_at =
                Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        }

        let ids: Vec<_> = storage
            .get_projects()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_featured_is_ordered_subset() {
        let storage = MemStorage::new();
        for (title, featured) in [("a", true), ("b", false), ("c", true), ("d", false)] {
            let mut input = new_project(title);
            input.featured = Some(featured);
            storage.create_project(input).await.unwrap();
        }

        let all = storage.get_projects().await.unwrap();
        let featured = storage.get_featured_projects().await.unwrap();
        let expected: Vec<_> = all.into_iter().filter(|p| p.featured).collect();

        assert_eq!(featured, expected);
        assert_eq!(featured.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[tokio::test]
    async fn test_update_changes_only_supplied_fields() {
        let storage = MemStorage::new();
        let before = storage.create_project(new_project("X")).await.unwrap();

        let patch = ProjectPatch {
            status: Some("Archived".to_string()),
            ..Default::default()
        };
        let after = storage.update_project(before.id, patch).await.unwrap().unwrap();

        assert_eq!(after.status, "Archived");
        assert_eq!(
            Project {
                status: before.status.clone(),
                ..after.clone()
            },
            before
        );
        assert_eq!(storage.get_project(before.id).await.unwrap(), Some(after));
    }

    #[tokio::test]
    async fn test_update_unknown_project_is_none() {
        let storage = MemStorage::new();
        let result = storage.update_project(42, ProjectPatch::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let storage = MemStorage::new();
        let project = storage.create_project(new_project("X")).await.unwrap();

        assert!(storage.delete_project(project.id).await.unwrap());
        assert!(storage.get_project(project.id).await.unwrap().is_none());
        assert!(!storage.delete_project(project.id).await.unwrap());
        assert!(!storage.delete_project(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_contact_status_forced_new_and_updatable() {
        let storage = MemStorage::new();
        let contact = storage.create_contact(new_contact("a@b.co")).await.unwrap();

        assert_eq!(contact.status, NEW_CONTACT_STATUS);
        assert!(contact.created_at.is_some());

        let updated = storage
            .update_contact_status(contact.id, "read".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, "read");
        assert_eq!(updated.email, contact.email);
        assert_eq!(updated.created_at, contact.created_at);

        assert!(storage
            .update_contact_status(99, "read".to_string())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_contacts_listed_newest_first() {
        let storage = MemStorage::new();
        storage.create_contact(new_contact("first@b.co")).await.unwrap();
        storage.create_contact(new_contact("second@b.co")).await.unwrap();
        {
            let mut state = storage.state.write().await;
            let first = state.contacts.get_mut(&1).unwrap();
            first.created_at = first.created_at.map(|ts| ts + Duration::seconds(60));
        }

        let emails: Vec<_> = storage
            .get_contacts()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.email)
            .collect();

        assert_eq!(emails, vec!["first@b.co", "second@b.co"]);
    }

    #[tokio::test]
    async fn test_users_unique_by_username() {
        let storage = MemStorage::new();
        let user = storage
            .create_user(NewUser {
                username: "admin".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(storage.get_user(1).await.unwrap(), Some(user.clone()));
        assert_eq!(
            storage.get_user_by_username("admin").await.unwrap(),
            Some(user)
        );
        assert!(storage.get_user_by_username("nobody").await.unwrap().is_none());

        let duplicate = storage
            .create_user(NewUser {
                username: "admin".to_string(),
                password: "other".to_string(),
            })
            .await;
        assert!(matches!(duplicate, Err(StorageError::UsernameTaken(name)) if name == "admin"));
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let storage = MemStorage::seeded();

        let projects = storage.get_projects().await.unwrap();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(storage.get_featured_projects().await.unwrap().len(), 3);

        let next = storage.create_project(new_project("X")).await.unwrap();
        assert_eq!(next.id, 4);
    }
}
