// src/domain/fields.rs

use crate::domain::format::{Better, FieldKind, FieldValue};
use crate::domain::property::PropertyRecord;

/// One row of the detail panel and the comparison table.
pub struct FieldSpec {
    pub label: &'static str,
    /// Direction that counts as an improvement, for compared fields only.
    pub better: Option<Better>,
    pub kind: Option<FieldKind>,
    pub get: fn(&PropertyRecord) -> FieldValue,
}

/// Display order of every shown attribute. Lease commencement and
/// expiration are tracked on the record but have never been part of
/// this table.
pub const COMPARE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        label: "Address",
        better: None,
        kind: None,
        get: |p| FieldValue::Text(Some(p.address.clone())),
    },
    FieldSpec {
        label: "Cap Rate",
        better: Some(Better::Higher),
        kind: Some(FieldKind::Percent),
        get: |p| FieldValue::num(p.cap_rate),
    },
    FieldSpec {
        label: "Price",
        better: Some(Better::Lower),
        kind: Some(FieldKind::Dollar),
        get: |p| FieldValue::num(p.price),
    },
    FieldSpec {
        label: "NOI",
        better: Some(Better::Higher),
        kind: Some(FieldKind::Dollar),
        get: |p| FieldValue::num(p.noi),
    },
    FieldSpec {
        label: "Lease Type",
        better: None,
        kind: None,
        get: |p| FieldValue::text(&p.lease_type),
    },
    FieldSpec {
        label: "Rent Increases",
        better: None,
        kind: None,
        get: |p| FieldValue::text(&p.rent_increases),
    },
    FieldSpec {
        label: "Options",
        better: None,
        kind: None,
        get: |p| FieldValue::text(&p.options),
    },
    FieldSpec {
        label: "Term Remaining",
        better: None,
        kind: None,
        get: |p| FieldValue::text(&p.term_remaining),
    },
    FieldSpec {
        label: "Population (1 mile)",
        better: Some(Better::Higher),
        kind: Some(FieldKind::Number),
        get: |p| FieldValue::num(p.pop_1_mile),
    },
    FieldSpec {
        label: "Population (3 mile)",
        better: Some(Better::Higher),
        kind: Some(FieldKind::Number),
        get: |p| FieldValue::num(p.pop_3_mile),
    },
    FieldSpec {
        label: "Median Income",
        better: Some(Better::Higher),
        kind: Some(FieldKind::Dollar),
        get: |p| FieldValue::num(p.med_income),
    },
    FieldSpec {
        label: "VPD",
        better: Some(Better::Higher),
        kind: Some(FieldKind::Number),
        get: |p| FieldValue::num(p.vpd),
    },
    FieldSpec {
        label: "Building Size",
        better: None,
        kind: None,
        get: |p| FieldValue::text(&p.building_size),
    },
    FieldSpec {
        label: "Lot Size",
        better: None,
        kind: None,
        get: |p| FieldValue::text(&p.lot_size),
    },
    FieldSpec {
        label: "Guarantor",
        better: None,
        kind: None,
        get: |p| FieldValue::text(&p.guarantor),
    },
    FieldSpec {
        label: "Property Stats",
        better: None,
        kind: None,
        get: |p| FieldValue::text(&p.property_stats),
    },
];
