use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TaskListError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Open,
    Closed,
}

impl Status {
    pub const ALL: &[Status] = &[Status::Open, Status::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "OPEN",
            Status::Closed => "CLOSED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::Closed => "Closed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "OPEN" => Some(Status::Open),
            "CLOSED" => Some(Status::Closed),
            _ => None,
        }
    }

    /// The status a task moves to when its checkbox is flipped.
    pub fn toggled(&self) -> Self {
        match self {
            Status::Open => Status::Closed,
            Status::Closed => Status::Open,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: &[Priority] = &[Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Priority::High => "!!",
            Priority::Medium => "!",
            Priority::Low => "-",
        }
    }

    /// Accepts the wire name in any letter case, so CLI input like `high` parses.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "HIGH" => Some(Priority::High),
            "MEDIUM" => Some(Priority::Medium),
            "LOW" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A task as returned by the server. Which list owns it is expressed only by
/// the key it is cached under, never by a field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub priority: Priority,
    pub status: Status,
}

impl Task {
    /// Copy of this task with its status flipped.
    pub fn with_toggled_status(&self) -> Task {
        Task {
            status: self.status.toggled(),
            ..self.clone()
        }
    }

    pub fn is_closed(&self) -> bool {
        self.status == Status::Closed
    }
}

/// Body of `POST /task-lists/{listId}/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "open")]
    pub status: Status,
}

fn open() -> Status {
    Status::Open
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Convert a calendar date typed into a form (`YYYY-MM-DD`) into the
/// ISO-8601 timestamp sent to the server: midnight UTC with millisecond
/// precision. Blank input means no due date.
pub fn due_date_from_input(input: &str) -> Result<Option<String>, TaskListError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| TaskListError::InvalidDueDate(input.to_string()))?;
    let midnight = Utc.from_utc_datetime(&NaiveDateTime::new(date, NaiveTime::MIN));
    Ok(Some(midnight.to_rfc3339_opts(SecondsFormat::Millis, true)))
}

/// The calendar-date part of a stored due date, for seeding an edit form.
pub fn due_date_input(due_date: Option<&str>) -> String {
    due_date
        .and_then(|d| d.split('T').next())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(status: Status) -> Task {
        Task {
            id: "T1".into(),
            title: "Buy milk".into(),
            description: String::new(),
            due_date: None,
            priority: Priority::Low,
            status,
        }
    }

    #[test]
    fn enums_use_uppercase_wire_names() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"HIGH\"");
        assert_eq!(serde_json::to_string(&Status::Closed).unwrap(), "\"CLOSED\"");
        for p in Priority::ALL {
            assert_eq!(Priority::from_str(p.as_str()), Some(*p));
        }
        for s in Status::ALL {
            assert_eq!(Status::from_str(s.as_str()), Some(*s));
        }
        assert_eq!(Priority::from_str("low"), Some(Priority::Low));
        assert_eq!(Status::from_str("done"), None);
    }

    #[test]
    fn toggling_flips_between_open_and_closed() {
        assert_eq!(task(Status::Open).with_toggled_status().status, Status::Closed);
        assert_eq!(task(Status::Closed).with_toggled_status().status, Status::Open);
    }

    #[test]
    fn task_json_is_camel_case_and_omits_missing_due_date() {
        let mut t = task(Status::Open);
        let json = serde_json::to_value(&t).unwrap();
        assert!(json.get("dueDate").is_none());

        t.due_date = Some("2024-05-01T00:00:00.000Z".into());
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["dueDate"], "2024-05-01T00:00:00.000Z");
        assert_eq!(json["priority"], "LOW");
    }

    #[test]
    fn null_description_decodes_as_empty() {
        let t: Task = serde_json::from_str(
            r#"{"id":"T1","title":"x","description":null,"priority":"HIGH","status":"OPEN"}"#,
        )
        .unwrap();
        assert_eq!(t.description, "");
        assert_eq!(t.due_date, None);
    }

    #[test]
    fn due_date_input_round_trips_through_form() {
        let iso = due_date_from_input("2024-05-01").unwrap().unwrap();
        assert_eq!(iso, "2024-05-01T00:00:00.000Z");
        assert_eq!(due_date_input(Some(&iso)), "2024-05-01");
        assert_eq!(due_date_input(None), "");
        assert_eq!(due_date_from_input("  ").unwrap(), None);
        assert!(matches!(
            due_date_from_input("next tuesday"),
            Err(TaskListError::InvalidDueDate(_))
        ));
    }
}
