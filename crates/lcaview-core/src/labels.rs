//! Fixed lookups applied to summary tables after aggregation.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Display labels for the employment-type counters, in column order.
pub const EMPLOYMENT_TYPE_LABELS: [&str; 5] = [
    "New Employment",
    "Continued Employment",
    "Change Previous Employment",
    "New Concurrent Employment",
    "Change Employer",
];

pub static WORKSITE_STATES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("CA", "California"),
        ("TX", "Texas"),
        ("NY", "New York"),
        ("WA", "Washington"),
        ("NJ", "New Jersey"),
    ])
});

pub static ATTORNEY_STATES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("CA", "California"),
        ("NY", "New York"),
        ("TX", "Texas"),
        ("MA", "Massachusetts"),
        ("IL", "Illinois"),
    ])
});

pub static COURT_STATES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("NY", "New York"),
        ("CA", "California"),
        ("TX", "Texas"),
        ("MA", "Massachusetts"),
        ("DC", "District of Columbia"),
    ])
});

pub static NAICS_DESCRIPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("541211", "Offices of Certified Public Accountants"),
        ("54151", "Computer Systems Design and Related Services"),
        ("611310", "Colleges, Universities, and Professional Schools"),
        ("541512", "Computer Systems Design Services"),
        ("541511", "Custom Computer Programming Services"),
    ])
});
