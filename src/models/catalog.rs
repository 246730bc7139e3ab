//! Static reference data
//!
//! Box specifications and nearby drop-off centers. This is read-only
//! pass-through data for display; it plays no role in the state machine.

use super::donation::BoxSize;
use super::money::Money;

/// A shipping box offered for pickup donations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSpec {
    pub size: BoxSize,
    pub name: &'static str,
    pub dimensions: &'static str,
    pub price: Money,
}

/// All box specs, smallest first
pub fn box_specs() -> [BoxSpec; 2] {
    [
        BoxSpec {
            size: BoxSize::Standard,
            name: BoxSize::Standard.label(),
            dimensions: BoxSize::Standard.dimensions(),
            price: BoxSize::Standard.price(),
        },
        BoxSpec {
            size: BoxSize::Large,
            name: BoxSize::Large.label(),
            dimensions: BoxSize::Large.dimensions(),
            price: BoxSize::Large.price(),
        },
    ]
}

/// A collection center a donor can drop items off at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropoffCenter {
    pub name: &'static str,
    pub address: &'static str,
    pub distance: &'static str,
    pub hours: &'static str,
}

/// Collection centers near the donor, closest first
pub const NEARBY_CENTERS: [DropoffCenter; 3] = [
    DropoffCenter {
        name: "Downtown Collection Center",
        address: "123 Main St, Downtown",
        distance: "2.5 miles",
        hours: "Mon-Fri 9AM-6PM",
    },
    DropoffCenter {
        name: "Westside Community Hub",
        address: "456 West Ave, Westside",
        distance: "4.1 miles",
        hours: "Mon-Sat 8AM-8PM",
    },
    DropoffCenter {
        name: "Northshore Drop-off",
        address: "789 North Blvd, Northshore",
        distance: "6.8 miles",
        hours: "Daily 10AM-4PM",
    },
];
