use owo_colors::OwoColorize;
use tabled::{settings::Style, Table, Tabled};

use crate::ui::theme;

#[derive(Tabled)]
pub struct NameRow {
    #[tabled(rename = "Source")]
    pub source: String,
    #[tabled(rename = "Output")]
    pub output: String,
}

/// Authored vs generated identifiers
#[derive(Default)]
pub struct NameTable {
    rows: Vec<NameRow>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, source: &str, output: &str) {
        self.rows.push(NameRow {
            source: source.style(theme().source.clone()).to_string(),
            output: output.style(theme().output.clone()).to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }
        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

#[derive(Tabled)]
pub struct StateRow {
    #[tabled(rename = "Group")]
    pub group: String,
    #[tabled(rename = "State")]
    pub state: String,
    #[tabled(rename = "Defined in")]
    pub origin: String,
}

/// Merged states with the block each one came from
#[derive(Default)]
pub struct StateTable {
    rows: Vec<StateRow>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, group: &str, state: &str, origin: &str) {
        self.rows.push(StateRow {
            group: group.to_string(),
            state: state.to_string(),
            origin: origin.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }
        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tables_render_nothing() {
        assert_eq!(NameTable::new().build(), "");
        assert_eq!(StateTable::new().build(), "");
    }

    #[test]
    fn test_name_table_contains_rows() {
        let mut table = NameTable::new();
        table.add_row(".nav", "B__nav");
        let rendered = table.build();

        assert_eq!(table.len(), 1);
        assert!(rendered.contains("Source"));
        assert!(rendered.contains(".nav"));
        assert!(rendered.contains("B__nav"));
    }
}
