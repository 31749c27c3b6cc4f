use serde::{Deserialize, Serialize};

use crate::entities::{lenient, record::Record};

/// A portfolio project. Every field is optional; the body of a create request
/// is stored as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,

    /// URL or path of a screenshot
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,

    #[serde(default, deserialize_with = "lenient::text_list")]
    pub tech: Vec<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}

pub type ProjectRecord = Record<Project>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn reads_camel_case_links() {
        let project: Project = serde_json::from_value(json!({
            "title": "Portfolio",
            "githubLink": "https://github.com/me/portfolio",
            "liveLink": "https://me.dev",
            "tech": ["React", "Node.js", "MongoDB"]
        }))
        .unwrap();

        assert_eq!(project.github_link.as_deref(), Some("https://github.com/me/portfolio"));
        assert_eq!(project.live_link.as_deref(), Some("https://me.dev"));
        assert_eq!(project.tech, vec!["React", "Node.js", "MongoDB"]);
    }

    #[test]
    fn tolerates_empty_body() {
        let project: Project = serde_json::from_value(json!({})).unwrap();
        assert_eq!(project, Project::default());
    }

    #[test]
    fn drops_unknown_fields() {
        let project: Project = serde_json::from_value(json!({"title": "X", "stars": 12})).unwrap();
        let stored = serde_json::to_value(&project).unwrap();
        assert_eq!(stored, json!({"title": "X", "tech": []}));
    }

    #[test]
    fn casts_loosely_typed_fields() {
        let project: Project = serde_json::from_value(json!({
            "title": 42,
            "tech": "React",
            "outcome": null
        }))
        .unwrap();

        assert_eq!(project.title.as_deref(), Some("42"));
        assert_eq!(project.tech, vec!["React"]);
        assert!(project.outcome.is_none());

        let project: Project = serde_json::from_value(json!({"tech": null})).unwrap();
        assert!(project.tech.is_empty());
    }

    #[test]
    fn record_exposes_underscore_id() {
        let id = Uuid::new_v4();
        let record = Record::new(id, Project { title: Some("X".into()), ..Default::default() });
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["_id"], json!(id.to_string()));
        assert_eq!(value["title"], "X");
        assert!(value.get("description").is_none());
    }
}
