//! Snippet model and visibility flag resolution

use serde::{Deserialize, Serialize};

/// A named piece of stored text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub name: String,
    pub body: String,
    #[serde(default)]
    pub hidden: bool,
}

impl Snippet {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            hidden: false,
        }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Resolve the `--hide` / `--unhide` switches into the stored flag.
///
/// `unhide` wins when both are set.
pub fn resolve_hidden(hide: bool, unhide: bool) -> bool {
    hide && !unhide
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_hidden_truth_table() {
        assert!(!resolve_hidden(false, false));
        assert!(resolve_hidden(true, false));
        assert!(!resolve_hidden(false, true));
        assert!(!resolve_hidden(true, true));
    }

    #[test]
    fn test_snippet_defaults_visible() {
        let snippet = Snippet::new("shell", "cat bash.txt | sh");
        assert!(!snippet.hidden);
        assert!(snippet.hidden(true).hidden);
    }

    #[test]
    fn test_snippet_json_hidden_defaults_false() {
        let snippet: Snippet = serde_json::from_str(r#"{"name":"a","body":"b"}"#).unwrap();
        assert_eq!(snippet, Snippet::new("a", "b"));
    }
}
