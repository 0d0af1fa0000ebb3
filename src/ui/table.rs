use tabled::{settings::Style, Table, Tabled};
use crate::storage::DbStats;

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Snippets")]
    pub label: String,
    #[tabled(rename = "Count")]
    pub count: usize,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, count: usize) {
        self.rows.push(TableRow {
            label: label.to_string(),
            count,
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stats_table(stats: &DbStats) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("total", stats.total);
    builder.add_row("visible", stats.visible);
    builder.add_row("hidden", stats.hidden);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_renders_nothing() {
        assert_eq!(TableBuilder::new().build(), "");
    }

    #[test]
    fn test_stats_table_lists_counts() {
        let table = stats_table(&DbStats { total: 3, visible: 2, hidden: 1 });
        assert!(table.contains("visible"));
        assert!(table.contains("hidden"));
        assert!(table.contains('3'));
    }
}
