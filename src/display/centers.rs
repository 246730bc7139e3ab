//! Drop-off center display formatting

use tabled::{Table, Tabled};

use crate::models::catalog::DropoffCenter;

#[derive(Tabled)]
struct CenterRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Address")]
    address: &'static str,
    #[tabled(rename = "Distance")]
    distance: &'static str,
    #[tabled(rename = "Hours")]
    hours: &'static str,
}

/// Format the drop-off centers as a table
pub fn format_center_list(centers: &[DropoffCenter]) -> String {
    if centers.is_empty() {
        return "No collection centers found.".to_string();
    }

    let rows = centers.iter().map(|c| CenterRow {
        name: c.name,
        address: c.address,
        distance: c.distance,
        hours: c.hours,
    });

    Table::new(rows).to_string()
}
