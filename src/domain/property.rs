// src/domain/property.rs

use crate::notion::fields;
use crate::notion::Page;
use serde_json::{Map, Value};

/// One listing, flattened out of a Notion page: everything tracked
/// about a site — pricing, lease terms, demographics, documents.
/// Built once per fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    /// Notion page id. Unique and stable across renders; doubles as the
    /// list key and the selection-membership key.
    pub id: String,
    /// Empty when the title column is blank; the view shows a placeholder.
    pub name: String,
    pub address: String,

    pub price: Option<f64>,
    pub cap_rate: Option<f64>,
    pub noi: Option<f64>,

    pub lease_type: Option<String>,
    pub rent_increases: Option<String>,
    pub options: Option<String>,
    pub term_remaining: Option<String>,
    pub lease_commencement: Option<String>,
    pub lease_expiration: Option<String>,
    pub new_construction: bool,

    pub pop_1_mile: Option<f64>,
    pub pop_3_mile: Option<f64>,
    pub med_income: Option<f64>,
    pub vpd: Option<f64>,

    /// Free text in the source ("12,000 sq ft", "NF", ...).
    pub building_size: Option<String>,
    pub lot_size: Option<String>,

    pub guarantor: Option<String>,
    pub property_stats: Option<String>,

    pub image_url: Option<String>,
    pub sale_pdf_url: Option<String>,

    pub review_status: ReviewStatus,
}

impl PropertyRecord {
    /// Flatten a raw page into a record. The labels are the exact column
    /// names of the Notion database (case- and wording-sensitive). A page
    /// with every optional column empty still maps to a valid record; the
    /// view renders placeholders for whatever is missing.
    pub fn from_page(page: &Page) -> Self {
        let props = &page.properties;

        Self {
            id: page.id.clone(),
            name: fields::title_text(props, "Name").unwrap_or_default(),
            address: fields::rich_text(props, "Address").unwrap_or_default(),
            price: fields::number(props, "Price"),
            cap_rate: fields::number(props, "Cap Rate"),
            noi: fields::number(props, "NOI"),
            lease_type: fields::rich_text(props, "Lease Type"),
            rent_increases: fields::rich_text(props, "Rent Increases"),
            options: fields::rich_text(props, "Options"),
            term_remaining: fields::rich_text(props, "Term Remaining"),
            lease_commencement: fields::rich_text(props, "Lease Commencement"),
            lease_expiration: fields::rich_text(props, "Lease Expiration"),
            new_construction: fields::checkbox(props, "New Construction?"),
            pop_1_mile: fields::number(props, "Pop 1 mile"),
            pop_3_mile: fields::number(props, "Pop 3 mile"),
            med_income: fields::number(props, "Med Income"),
            vpd: fields::number(props, "VPD"),
            building_size: fields::rich_text(props, "Building size"),
            lot_size: fields::rich_text(props, "Lot Size"),
            guarantor: fields::rich_text(props, "Guarantor"),
            property_stats: fields::rich_text(props, "Property Stats"),
            image_url: fields::file_url(props, "Image"),
            sale_pdf_url: fields::file_url(props, "Sale PDF Link"),
            review_status: derive_review_status(props),
        }
    }
}

/// Review lifecycle of a listing. Sorting uses the fixed rank below,
/// never the label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Reviewing,
    Bought,
    Reviewed,
}

impl ReviewStatus {
    /// Position in the review lifecycle: Reviewing < Bought < Reviewed.
    pub fn rank(self) -> u8 {
        match self {
            ReviewStatus::Reviewing => 0,
            ReviewStatus::Bought => 1,
            ReviewStatus::Reviewed => 2,
        }
    }

    pub fn from_select_name(name: &str) -> Option<Self> {
        match name {
            "Reviewing" => Some(ReviewStatus::Reviewing),
            "Bought" => Some(ReviewStatus::Bought),
            "Reviewed" => Some(ReviewStatus::Reviewed),
            _ => None,
        }
    }
}

/// The `Review Status` select wins when present and recognized. Older
/// rows carry only the `Previously Bought` checkbox, which folds in as
/// `Bought`. Everything else counts as still under review.
fn derive_review_status(props: &Map<String, Value>) -> ReviewStatus {
    if let Some(status) = fields::select_name(props, "Review Status")
        .as_deref()
        .and_then(ReviewStatus::from_select_name)
    {
        return status;
    }
    if fields::checkbox(props, "Previously Bought") {
        return ReviewStatus::Bought;
    }
    ReviewStatus::Reviewing
}
