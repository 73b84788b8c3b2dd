use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskListError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("invalid due date: {0}")]
    InvalidDueDate(String),
}

/// Trim a user-entered title, rejecting titles that are blank.
pub fn validate_title(raw: &str) -> Result<String, TaskListError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TaskListError::EmptyTitle);
    }
    Ok(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_titles_are_rejected() {
        assert_eq!(validate_title(""), Err(TaskListError::EmptyTitle));
        assert_eq!(validate_title("   \t"), Err(TaskListError::EmptyTitle));
    }

    #[test]
    fn titles_are_trimmed() {
        assert_eq!(validate_title("  Buy milk ").unwrap(), "Buy milk");
    }
}
