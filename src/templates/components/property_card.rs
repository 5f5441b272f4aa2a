// templates/components/property_card.rs

use crate::domain::compare::CompareState;
use crate::domain::fields::COMPARE_FIELDS;
use crate::domain::format::format_value;
use crate::domain::property::{PropertyRecord, ReviewStatus};
use maud::{html, Markup};

/// One listing card. Clicking anywhere on the card toggles selection
/// via the stretched overlay link; the chevron and PDF links sit above
/// the overlay so they keep their own targets.
pub fn property_card(record: &PropertyRecord, state: &CompareState) -> Markup {
    let selected = state.is_selected(&record.id);
    let expanded = state.is_expanded(&record.id);

    let mut card_class = match record.review_status {
        ReviewStatus::Bought => "property-card status-bought",
        ReviewStatus::Reviewed => "property-card status-reviewed",
        ReviewStatus::Reviewing => "property-card",
    }
    .to_string();
    if selected {
        card_class.push_str(" selected");
    }

    let chevron_class = if expanded {
        "chevron above-overlay open"
    } else {
        "chevron above-overlay"
    };

    html! {
        div class=(card_class) {
            a class="select-overlay"
                href={ "/?" (state.with_selection_toggled(&record.id).to_query()) }
                aria-label={ "Toggle selection for " (record.name) } {}

            @if let Some(url) = &record.image_url {
                div class="card-image" { img src=(url) alt=(record.name); }
            } @else {
                div class="card-image placeholder" role="img" aria-label="No image available" {}
            }

            div class="card-head" {
                h3 {
                    (record.name)
                    @if record.review_status == ReviewStatus::Bought {
                        span class="badge badge-bought" { "Previously Bought" }
                    }
                    @if record.review_status == ReviewStatus::Reviewed {
                        span class="badge badge-reviewed" { "Reviewed" }
                    }
                }

                @if selected {
                    a class=(chevron_class)
                        href={ "/?" (state.with_expanded_toggled(&record.id).to_query()) }
                        aria-label="Toggle details" { "▾" }
                }
            }

            p class="card-address" { (record.address) }

            @if let Some(url) = &record.sale_pdf_url {
                a class="pdf-link above-overlay"
                    href=(url) target="_blank" rel="noopener noreferrer" {
                    "View Sale PDF"
                }
            }

            @if expanded {
                div class="card-details" {
                    @for field in COMPARE_FIELDS {
                        p {
                            strong { (field.label) ":" }
                            " "
                            (format_value(&(field.get)(record), field.kind))
                        }
                    }
                }
            }
        }
    }
}
