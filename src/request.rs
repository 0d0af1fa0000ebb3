//! Typed requests, one per store command, validated before dispatch

use crate::snippet::resolve_hidden;
use crate::{Error, Result};

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidRequest("snippet name must not be empty".into()));
    }
    Ok(())
}

/// Store or update a snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRequest {
    pub name: String,
    pub body: String,
    pub hidden: bool,
}

impl PutRequest {
    pub fn new(name: String, body: String, hide: bool, unhide: bool) -> Result<Self> {
        validate_name(&name)?;
        Ok(Self {
            name,
            body,
            hidden: resolve_hidden(hide, unhide),
        })
    }
}

/// Fetch a snippet body by exact name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRequest {
    pub name: String,
}

impl GetRequest {
    pub fn new(name: String) -> Result<Self> {
        validate_name(&name)?;
        Ok(Self { name })
    }
}

/// Search visible snippet bodies for a literal substring.
///
/// An empty needle matches every visible body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub needle: String,
}

impl SearchRequest {
    pub fn new(needle: String) -> Self {
        Self { needle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_request_resolves_flags() {
        let req = PutRequest::new("shell".into(), "ls".into(), true, false).unwrap();
        assert!(req.hidden);

        let req = PutRequest::new("shell".into(), "ls".into(), true, true).unwrap();
        assert!(!req.hidden);
    }

    #[test]
    fn test_empty_names_rejected() {
        assert!(matches!(
            PutRequest::new(String::new(), "ls".into(), false, false),
            Err(Error::InvalidRequest(_))
        ));
        assert!(matches!(GetRequest::new(String::new()), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_whitespace_names_accepted() {
        assert_eq!(GetRequest::new(" ".into()).unwrap().name, " ");
        assert!(PutRequest::new("  ".into(), "ls".into(), false, false).is_ok());
    }
}
