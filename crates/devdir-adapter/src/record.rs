//! Employee JSON records - The ingestion boundary
//!
//! The upstream document is not validated. Every field is read
//! leniently and coerced to its empty value when it is missing or has
//! the wrong type:
//!
//! | field shape            | becomes                      |
//! |------------------------|------------------------------|
//! | missing / non-string   | `""` (or `None` for optionals) |
//! | missing / non-array    | `[]`                         |
//! | non-string skill entry | dropped                      |
//! | non-object record      | record with all-empty fields |
//!
//! The same records serialize the domain back out for `/api/employees`.

use devdir_domain::{Employee, FetchError, Project, Task, TeamMember};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// One entry of the `employees` array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(deserialize_with = "lenient_string")]
    pub designation: String,

    #[serde(deserialize_with = "lenient_strings")]
    pub skills: Vec<String>,

    #[serde(deserialize_with = "lenient_list")]
    pub projects: Vec<ProjectRecord>,
}

/// A project attached to an employee
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(deserialize_with = "lenient_string")]
    pub description: String,

    #[serde(deserialize_with = "lenient_list")]
    pub team: Vec<TeamMemberRecord>,

    #[serde(deserialize_with = "lenient_list")]
    pub tasks: Vec<TaskRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMemberRecord {
    #[serde(
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
}

// ========== Lenient field readers ==========

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(coerce_record).collect(),
        _ => Vec::new(),
    })
}

fn coerce_record<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(value).unwrap_or_default()
}

// ========== Domain conversion ==========

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Employee::new(record.name)
            .with_designation(record.designation)
            .with_skills(record.skills)
            .with_projects(record.projects.into_iter().map(Project::from))
    }
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        let project = Project::new(record.name).with_description(record.description);
        let project = record
            .team
            .into_iter()
            .fold(project, |p, m| p.with_member(TeamMember::new(m.name, m.role)));
        record
            .tasks
            .into_iter()
            .fold(project, |p, t| p.with_task(Task::new(t.name, t.status)))
    }
}

impl From<&Employee> for EmployeeRecord {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name().to_string(),
            designation: employee.designation().to_string(),
            skills: employee.skills().to_vec(),
            projects: employee.projects().iter().map(ProjectRecord::from).collect(),
        }
    }
}

impl From<&Project> for ProjectRecord {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name().to_string(),
            description: project.description().to_string(),
            team: project
                .team()
                .iter()
                .map(|m| TeamMemberRecord {
                    name: m.name.clone(),
                    role: m.role.clone(),
                })
                .collect(),
            tasks: project
                .tasks()
                .iter()
                .map(|t| TaskRecord {
                    name: t.name.clone(),
                    status: t.status.clone(),
                })
                .collect(),
        }
    }
}

// ========== Document parsing ==========

/// Extract the `employees` array from an already-parsed document
///
/// A missing or non-array `employees` field yields an empty list.
pub fn employees_from_document(document: Value) -> Vec<Employee> {
    match document {
        Value::Object(mut fields) => match fields.remove("employees") {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(coerce_record::<EmployeeRecord>)
                .map(Employee::from)
                .collect(),
            Some(_) => {
                warn!("Document field 'employees' is not an array; treating as empty");
                Vec::new()
            }
            None => {
                warn!("Document has no 'employees' field; treating as empty");
                Vec::new()
            }
        },
        _ => {
            warn!("Document is not a JSON object; treating as empty");
            Vec::new()
        }
    }
}

/// Parse raw bytes of an employee document
pub fn parse_employees_document(bytes: &[u8]) -> Result<Vec<Employee>, FetchError> {
    let document: Value =
        serde_json::from_slice(bytes).map_err(|e| FetchError::InvalidJson {
            message: e.to_string(),
        })?;
    Ok(employees_from_document(document))
}
