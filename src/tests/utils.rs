// src/tests/utils.rs

use crate::domain::property::{PropertyRecord, ReviewStatus};

/// A record with nothing filled in; tests set the fields they care about.
pub fn record(id: &str) -> PropertyRecord {
    PropertyRecord {
        id: id.to_string(),
        name: format!("Property {id}"),
        address: String::new(),
        price: None,
        cap_rate: None,
        noi: None,
        lease_type: None,
        rent_increases: None,
        options: None,
        term_remaining: None,
        lease_commencement: None,
        lease_expiration: None,
        new_construction: false,
        pop_1_mile: None,
        pop_3_mile: None,
        med_income: None,
        vpd: None,
        building_size: None,
        lot_size: None,
        guarantor: None,
        property_stats: None,
        image_url: None,
        sale_pdf_url: None,
        review_status: ReviewStatus::Reviewing,
    }
}
