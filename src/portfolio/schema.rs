//! Request body schemas
//!
//! Compiles untyped JSON bodies into the typed insert/patch records the
//! storage layer accepts. Every field is checked and all failures are
//! collected, so a single 400 response lists every offending field.
//! Keys the schema does not know are ignored.

use crate::portfolio::types::{NewContact, NewProject, ProjectPatch};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

/// One failed field check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Machine-readable failure kind ("invalid_type", "invalid_string")
    pub code: String,
    /// Path to the offending value; empty for the body itself
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    fn invalid_type(path: &[&str], message: impl Into<String>) -> Self {
        Self {
            code: "invalid_type".to_string(),
            path: path.iter().map(|p| p.to_string()).collect(),
            message: message.into(),
        }
    }

    fn required(field: &str) -> Self {
        Self::invalid_type(&[field], "Required")
    }

    fn invalid_email(field: &str) -> Self {
        Self {
            code: "invalid_string".to_string(),
            path: vec![field.to_string()],
            message: "Invalid email".to_string(),
        }
    }
}

pub type SchemaResult<T> = std::result::Result<T, Vec<ValidationIssue>>;

// Local part may not start with a dot or contain "..", checked separately
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

/// Loose RFC-5322-ish email check
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(path: &[&str], want: &str, got: &Value) -> ValidationIssue {
    ValidationIssue::invalid_type(path, format!("Expected {}, received {}", want, type_name(got)))
}

/// Field reader that accumulates issues instead of failing fast
struct FieldReader<'a> {
    body: &'a Map<String, Value>,
    issues: Vec<ValidationIssue>,
}

impl<'a> FieldReader<'a> {
    fn from_body(body: &'a Value) -> SchemaResult<Self> {
        match body {
            Value::Object(map) => Ok(Self {
                body: map,
                issues: Vec::new(),
            }),
            other => Err(vec![expected(&[], "object", other)]),
        }
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.body.get(field)
    }

    /// Required, non-null string
    fn string(&mut self, field: &str) -> String {
        match self.get(field) {
            None => {
                self.issues.push(ValidationIssue::required(field));
                String::new()
            }
            Some(value) => self.as_string(field, value).unwrap_or_default(),
        }
    }

    /// Optional, non-nullable string
    fn opt_string(&mut self, field: &str) -> Option<String> {
        let value = self.get(field)?;
        self.as_string(field, value)
    }

    /// Optional, nullable string: `Some(None)` means an explicit null
    fn nullable_string(&mut self, field: &str) -> Option<Option<String>> {
        match self.get(field)? {
            Value::Null => Some(None),
            value => self.as_string(field, value).map(Some),
        }
    }

    /// Required, non-null string list
    fn string_list(&mut self, field: &str) -> Vec<String> {
        match self.get(field) {
            None => {
                self.issues.push(ValidationIssue::required(field));
                Vec::new()
            }
            Some(value) => self.as_string_list(field, value).unwrap_or_default(),
        }
    }

    fn opt_string_list(&mut self, field: &str) -> Option<Vec<String>> {
        let value = self.get(field)?;
        self.as_string_list(field, value)
    }

    fn nullable_string_list(&mut self, field: &str) -> Option<Option<Vec<String>>> {
        match self.get(field)? {
            Value::Null => Some(None),
            value => self.as_string_list(field, value).map(Some),
        }
    }

    /// Optional boolean; null reads as false
    fn opt_bool(&mut self, field: &str) -> Option<bool> {
        match self.get(field)? {
            Value::Null => Some(false),
            Value::Bool(b) => Some(*b),
            other => {
                self.issues.push(expected(&[field], "boolean", other));
                None
            }
        }
    }

    fn as_string(&mut self, field: &str, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                self.issues.push(expected(&[field], "string", other));
                None
            }
        }
    }

    fn as_string_list(&mut self, field: &str, value: &Value) -> Option<Vec<String>> {
        let Value::Array(items) = value else {
            self.issues.push(expected(&[field], "array", value));
            return None;
        };

        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.clone()),
                other => {
                    let index = index.to_string();
                    self.issues.push(expected(&[field, &index], "string", other));
                    ok = false;
                }
            }
        }
        ok.then_some(out)
    }

    fn finish<T>(self, value: T) -> SchemaResult<T> {
        if self.issues.is_empty() {
            Ok(value)
        } else {
            Err(self.issues)
        }
    }
}

/// Validate a project creation body
pub fn parse_new_project(body: &Value) -> SchemaResult<NewProject> {
    let mut r = FieldReader::from_body(body)?;

    let project = NewProject {
        title: r.string("title"),
        description: r.string("description"),
        long_description: r.nullable_string("longDescription").flatten(),
        technologies: r.string_list("technologies"),
        features: r.nullable_string_list("features").flatten(),
        category: r.string("category"),
        status: r.string("status"),
        live_url: r.nullable_string("liveUrl").flatten(),
        github_url: r.nullable_string("githubUrl").flatten(),
        video_url: r.nullable_string("videoUrl").flatten(),
        image_url: r.nullable_string("imageUrl").flatten(),
        featured: r.opt_bool("featured"),
    };

    r.finish(project)
}

/// Validate a partial project update body; every field is optional
pub fn parse_project_patch(body: &Value) -> SchemaResult<ProjectPatch> {
    let mut r = FieldReader::from_body(body)?;

    let patch = ProjectPatch {
        title: r.opt_string("title"),
        description: r.opt_string("description"),
        long_description: r.nullable_string("longDescription"),
        technologies: r.opt_string_list("technologies"),
        features: r.nullable_string_list("features"),
        category: r.opt_string("category"),
        status: r.opt_string("status"),
        live_url: r.nullable_string("liveUrl"),
        github_url: r.nullable_string("githubUrl"),
        video_url: r.nullable_string("videoUrl"),
        image_url: r.nullable_string("imageUrl"),
        featured: r.opt_bool("featured"),
    };

    r.finish(patch)
}

/// Validate a contact-form body; any client-sent `status` is dropped
pub fn parse_new_contact(body: &Value) -> SchemaResult<NewContact> {
    let mut r = FieldReader::from_body(body)?;

    let contact = NewContact {
        first_name: r.string("firstName"),
        last_name: r.string("lastName"),
        email: r.string("email"),
        project_type: r.string("projectType"),
        message: r.string("message"),
    };

    if r.get("email").is_some_and(Value::is_string) && !is_valid_email(&contact.email) {
        r.issues.push(ValidationIssue::invalid_email("email"));
    }

    r.finish(contact)
}

/// Extract the required non-empty `status` string of a status update body
pub fn parse_status_update(body: &Value) -> Option<String> {
    body.get("status")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
