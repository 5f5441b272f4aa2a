// src/domain/compare.rs

use crate::domain::property::PropertyRecord;
use url::form_urlencoded;

/// Attribute the grid is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Price,
    CapRate,
    Noi,
    ReviewStatus,
}

impl SortField {
    pub fn as_param(self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::CapRate => "cap_rate",
            SortField::Noi => "noi",
            SortField::ReviewStatus => "review_status",
        }
    }

    fn from_param(s: &str) -> Option<Self> {
        match s {
            "price" => Some(SortField::Price),
            "cap_rate" => Some(SortField::CapRate),
            "noi" => Some(SortField::Noi),
            "review_status" => Some(SortField::ReviewStatus),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_param(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    fn from_param(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Most records a comparison can hold.
pub const MAX_SELECTED: usize = 2;

/// The whole interaction state of the compare view, carried in the URL
/// query string so every request re-derives the page from scratch.
///
/// `selected` is an ordered rolling buffer of at most two ids; the
/// comparison table renders index 0 on the left. `expanded` is a set of
/// ids whose detail panel is open, independent of selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareState {
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub selected: Vec<String>,
    pub expanded: Vec<String>,
}

impl Default for CompareState {
    fn default() -> Self {
        Self {
            sort_field: SortField::ReviewStatus,
            sort_direction: SortDirection::Asc,
            selected: Vec::new(),
            expanded: Vec::new(),
        }
    }
}

impl CompareState {
    /// Decode the state from parsed query pairs. Unrecognized sort
    /// values fall back to the defaults; `sel` and `open` are repeated
    /// keys. Selection is deduped and capped at two, so a hand-edited
    /// URL cannot overfill the buffer.
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        let mut state = CompareState::default();

        for (key, value) in pairs {
            match key.as_str() {
                "sort" => {
                    if let Some(field) = SortField::from_param(value) {
                        state.sort_field = field;
                    }
                }
                "dir" => {
                    if let Some(dir) = SortDirection::from_param(value) {
                        state.sort_direction = dir;
                    }
                }
                "sel" => {
                    if state.selected.len() < MAX_SELECTED && !state.is_selected(value) {
                        state.selected.push(value.clone());
                    }
                }
                "open" => {
                    if !state.is_expanded(value) {
                        state.expanded.push(value.clone());
                    }
                }
                _ => {}
            }
        }

        state
    }

    /// Encode the state back into a query string (inverse of `from_query`).
    pub fn to_query(&self) -> String {
        self.query_without("")
    }

    /// Query string with one key left out. The sort menus use this to
    /// splice their own value back in on change.
    pub fn query_without(&self, skip: &str) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if skip != "sort" {
            ser.append_pair("sort", self.sort_field.as_param());
        }
        if skip != "dir" {
            ser.append_pair("dir", self.sort_direction.as_param());
        }
        for id in &self.selected {
            ser.append_pair("sel", id);
        }
        for id in &self.expanded {
            ser.append_pair("open", id);
        }
        ser.finish()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.iter().any(|s| s == id)
    }

    /// Selection toggle. Already selected → drop it. Room left → append.
    /// Buffer full → evict the older selection and keep the newer one
    /// plus the new id, in that order.
    pub fn with_selection_toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.selected.iter().position(|s| s == id) {
            next.selected.remove(pos);
        } else if next.selected.len() < MAX_SELECTED {
            next.selected.push(id.to_string());
        } else {
            next.selected.remove(0);
            next.selected.push(id.to_string());
        }
        next
    }

    /// Set-membership toggle for one record's detail panel.
    pub fn with_expanded_toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.expanded.iter().position(|s| s == id) {
            next.expanded.remove(pos);
        } else {
            next.expanded.push(id.to_string());
        }
        next
    }

    /// Drop the selection and every open detail panel in one step; the
    /// sort configuration survives.
    pub fn cleared(&self) -> Self {
        Self {
            selected: Vec::new(),
            expanded: Vec::new(),
            ..self.clone()
        }
    }

    /// Sorted view of the records, non-mutating. Numeric fields compare
    /// as numbers with absent treated as 0; review status compares by
    /// lifecycle rank, never by label text. Ties keep their input order.
    pub fn sorted<'a>(&self, records: &'a [PropertyRecord]) -> Vec<&'a PropertyRecord> {
        let mut view: Vec<&PropertyRecord> = records.iter().collect();
        view.sort_by(|a, b| {
            let ord = match self.sort_field {
                SortField::ReviewStatus => a.review_status.rank().cmp(&b.review_status.rank()),
                field => sort_key(a, field).total_cmp(&sort_key(b, field)),
            };
            match self.sort_direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        view
    }

    /// The selected records in selection order, skipping ids that no
    /// longer resolve. The comparison table needs exactly two of these.
    pub fn selected_records<'a>(&self, records: &'a [PropertyRecord]) -> Vec<&'a PropertyRecord> {
        self.selected
            .iter()
            .filter_map(|id| records.iter().find(|r| &r.id == id))
            .collect()
    }
}

fn sort_key(record: &PropertyRecord, field: SortField) -> f64 {
    let value = match field {
        SortField::Price => record.price,
        SortField::CapRate => record.cap_rate,
        SortField::Noi => record.noi,
        SortField::ReviewStatus => None,
    };
    value.unwrap_or(0.0)
}
