//! Box size display formatting

use tabled::{Table, Tabled};

use crate::models::catalog::BoxSpec;

#[derive(Tabled)]
struct BoxRow {
    #[tabled(rename = "Box")]
    name: &'static str,
    #[tabled(rename = "Dimensions")]
    dimensions: &'static str,
    #[tabled(rename = "Shipping")]
    price: String,
}

/// Format the available box sizes as a table
pub fn format_box_list(specs: &[BoxSpec]) -> String {
    let rows = specs.iter().map(|s| BoxRow {
        name: s.name,
        dimensions: s.dimensions,
        price: s.price.to_string(),
    });

    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::box_specs;

    #[test]
    fn test_table_lists_both_sizes() {
        let table = format_box_list(&box_specs());
        assert!(table.contains("Standard Box"));
        assert!(table.contains("Large Box"));
        assert!(table.contains("$20"));
        assert!(table.contains("$30"));
    }
}
