//! Database schema definitions

/// SQL to create the snippets table
pub const CREATE_SNIPPETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS snippets (
    keyword TEXT PRIMARY KEY,
    message TEXT NOT NULL,
    hidden BOOLEAN NOT NULL DEFAULT 0
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_snippets_hidden ON snippets(hidden)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_SNIPPETS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
