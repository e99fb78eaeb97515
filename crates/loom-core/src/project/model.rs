use crate::collection::Identified;
use crate::user::UserRef;
use serde::{Deserialize, Serialize};

/// A collaborative coding project as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name chosen at creation
    pub name: String,
    /// Collaborators, in server order
    #[serde(default)]
    pub users: Vec<UserRef>,
}

/// Wire shape of a project. Records may carry `_id`, `id` or both; `_id`
/// wins when both are present.
#[derive(Deserialize)]
struct ProjectRecord {
    #[serde(rename = "_id")]
    mongo_id: Option<String>,
    id: Option<String>,
    name: String,
    #[serde(default)]
    users: Vec<UserRef>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = String;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let id = record
            .mongo_id
            .or(record.id)
            .ok_or_else(|| "missing field `_id`".to_string())?;
        Ok(Self {
            id,
            name: record.name,
            users: record.users,
        })
    }
}

impl Project {
    pub fn collaborator_count(&self) -> usize {
        self.users.len()
    }
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_from_server_json() {
        let json = r#"{"_id":"p1","name":"Compiler","users":["u1","u2"],"__v":0}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "p1");
        assert_eq!(project.name, "Compiler");
        assert_eq!(project.collaborator_count(), 2);
    }

    #[test]
    fn test_project_without_users() {
        let project: Project = serde_json::from_str(r#"{"id":"p2","name":"Empty"}"#).unwrap();
        assert_eq!(project.collaborator_count(), 0);
        assert_eq!(Identified::id(&project), "p2");
    }

    #[test]
    fn test_project_with_both_id_keys_prefers_mongo_id() {
        let json = r#"{"_id":"p1","id":"p1","name":"Compiler","users":[]}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "p1");

        let json = r#"{"_id":"mongo","id":"legacy","name":"Compiler"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "mongo");
    }

    #[test]
    fn test_project_without_any_id_is_rejected() {
        let err = serde_json::from_str::<Project>(r#"{"name":"Orphan"}"#).unwrap_err();
        assert!(err.to_string().contains("_id"));
    }

    #[test]
    fn test_project_serializes_mongo_id() {
        let project: Project = serde_json::from_str(r#"{"id":"p3","name":"Lexer"}"#).unwrap();
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["_id"], "p3");
        assert!(value.get("id").is_none());
    }
}
