// templates/pages/compare.rs

use crate::domain::compare::{CompareState, SortDirection, SortField};
use crate::domain::property::PropertyRecord;
use crate::templates::components::{comparison_table, property_card};
use crate::templates::desktop_layout;
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub struct CompareVm {
    pub records: Vec<PropertyRecord>,
    pub state: CompareState,
    pub fetched_at: DateTime<Utc>,
}

const SORT_OPTIONS: &[(SortField, &str)] = &[
    (SortField::Price, "Price"),
    (SortField::CapRate, "Cap Rate"),
    (SortField::Noi, "NOI"),
    (SortField::ReviewStatus, "Review Status"),
];

/// The whole page is derived from the view model on every request:
/// sorted grid, clear bar while anything is selected, comparison table
/// once exactly two selections resolve.
pub fn compare_page(vm: &CompareVm) -> Markup {
    let sorted = vm.state.sorted(&vm.records);
    let selected = vm.state.selected_records(&vm.records);

    desktop_layout(
        "QSR Property Compare",
        html! {
            main class="container" {
                (sort_controls(&vm.state))

                div class="property-grid" {
                    @for record in sorted {
                        (property_card(record, &vm.state))
                    }
                }

                @if !vm.state.selected.is_empty() {
                    div class="clear-bar" {
                        a class="clear-btn" href={ "/?" (vm.state.cleared().to_query()) } {
                            "Clear Selection"
                        }
                    }
                }

                @if let &[left, right] = selected.as_slice() {
                    (comparison_table(left, right))
                }

                footer class="fetch-note" {
                    p {
                        (vm.records.len()) " properties · fetched "
                        (vm.fetched_at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                    }
                }
            }
        },
    )
}

// Changing either menu navigates to the same URL with just that key
// replaced, so selection and open panels survive a re-sort.
fn sort_controls(state: &CompareState) -> Markup {
    let sort_base = state.query_without("sort");
    let dir_base = state.query_without("dir");

    html! {
        div class="controls" {
            div {
                label for="sort" { "Sort By" }
                select
                    id="sort"
                    onchange=(format!("window.location='/?{sort_base}&sort=' + this.value"))
                {
                    @for (field, label) in SORT_OPTIONS {
                        option value=(field.as_param()) selected[state.sort_field == *field] {
                            (label)
                        }
                    }
                }
            }

            div {
                label for="dir" { "Direction" }
                select
                    id="dir"
                    onchange=(format!("window.location='/?{dir_base}&dir=' + this.value"))
                {
                    option value="asc" selected[state.sort_direction == SortDirection::Asc] {
                        "Ascending"
                    }
                    option value="desc" selected[state.sort_direction == SortDirection::Desc] {
                        "Descending"
                    }
                }
            }
        }
    }
}
