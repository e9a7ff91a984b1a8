//! Portfolio record definitions
//!
//! Stored records (`User`, `Project`, `Contact`) and the typed insert/patch
//! payloads that the schema layer produces from request bodies. Records
//! serialize with camelCase keys and emit `null` for absent optional fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric identity shared by every entity type
pub type RecordId = u64;

/// Status every new contact message starts in
pub const NEW_CONTACT_STATUS: &str = "new";

/// A site user (admin account)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    /// Unique across all users
    pub username: String,
    pub password: String,
}

/// Fields required to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// A showcased piece of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    /// Ordered list of technology names
    pub technologies: Vec<String>,
    pub features: Option<Vec<String>>,
    /// Free-text category (e.g. "Automation", "Mobile")
    pub category: String,
    /// Free-text lifecycle status (e.g. "Live", "In Progress")
    pub status: String,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    /// Assigned by storage at creation; never client-supplied
    pub created_at: Option<DateTime<Utc>>,
}

/// Validated payload for project creation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub technologies: Vec<String>,
    pub features: Option<Vec<String>>,
    pub category: String,
    pub status: String,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
}

/// Validated partial update for a project
///
/// Outer `None` leaves the field alone. For nullable fields the inner
/// `Option` distinguishes "set to a value" from "clear to null".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<Option<String>>,
    pub technologies: Option<Vec<String>>,
    pub features: Option<Option<Vec<String>>>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub live_url: Option<Option<String>>,
    pub github_url: Option<Option<String>>,
    pub video_url: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub featured: Option<bool>,
}

impl ProjectPatch {
    /// Shallow-merge the supplied fields onto `project`
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(long_description) = self.long_description {
            project.long_description = long_description;
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
        if let Some(features) = self.features {
            project.features = features;
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(live_url) = self.live_url {
            project.live_url = live_url;
        }
        if let Some(github_url) = self.github_url {
            project.github_url = github_url;
        }
        if let Some(video_url) = self.video_url {
            project.video_url = video_url;
        }
        if let Some(image_url) = self.image_url {
            project.image_url = image_url;
        }
        if let Some(featured) = self.featured {
            project.featured = featured;
        }
    }
}

/// An inbound contact-form message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Validated payload for contact creation (status is server-assigned)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

/// Aggregate counters returned by the stats endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    pub total_projects: usize,
    pub views: u64,
    /// Contacts still in the "new" state
    pub messages: usize,
}

/// Newest-first ordering key; a missing timestamp counts as epoch zero
pub(crate) fn created_at_millis(created_at: &Option<DateTime<Utc>>) -> i64 {
    created_at.map(|ts| ts.timestamp_millis()).unwrap_or(0)
}
