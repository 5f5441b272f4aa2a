// templates/components/comparison.rs

use crate::domain::fields::COMPARE_FIELDS;
use crate::domain::format::{format_value, trend, Trend, PLACEHOLDER};
use crate::domain::property::PropertyRecord;
use maud::{html, Markup};

/// Side-by-side table for exactly two selections; the left column is
/// the earlier selection. A row where both sides come out blank is
/// dropped entirely.
pub fn comparison_table(left: &PropertyRecord, right: &PropertyRecord) -> Markup {
    html! {
        section class="comparison" {
            h2 { "Comparison" }
            div class="comparison-scroll" {
                table {
                    thead {
                        tr {
                            th { "Attribute" }
                            (header_cell(left))
                            (header_cell(right))
                        }
                    }
                    tbody {
                        @for field in COMPARE_FIELDS {
                            @let a = (field.get)(left);
                            @let b = (field.get)(right);
                            @let fa = format_value(&a, field.kind);
                            @let fb = format_value(&b, field.kind);
                            @if !(fa == PLACEHOLDER && fb == PLACEHOLDER) {
                                tr {
                                    td class="attr" { (field.label) }
                                    td {
                                        (fa)
                                        @if let Some(better) = field.better {
                                            (trend_marker(trend(&a, &b, better)))
                                        }
                                    }
                                    td {
                                        (fb)
                                        @if let Some(better) = field.better {
                                            (trend_marker(trend(&b, &a, better)))
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn header_cell(record: &PropertyRecord) -> Markup {
    html! {
        th {
            div class="head-cell" {
                @if let Some(url) = &record.image_url {
                    img class="thumb" src=(url) alt=(record.name);
                }
                (record.name)
            }
        }
    }
}

fn trend_marker(t: Option<Trend>) -> Markup {
    html! {
        @match t {
            Some(Trend::Better) => { span class="trend-up" { "▲" } }
            Some(Trend::Worse) => { span class="trend-down" { "▼" } }
            None => {}
        }
    }
}
