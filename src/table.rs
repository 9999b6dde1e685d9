//! Tabular data engine
//!
//! Derives an ordered, filtered view over an arbitrary row collection:
//! a global substring filter across all rendered cell values, an exact-match
//! categorical filter on one designated column, and per-column stable
//! sorting. Each table owns its own state; nothing here is shared between
//! instances, so several tables can coexist without cross-contamination.

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// One column of the fixed schema: a stable id, a header label, and an
/// accessor producing the rendered cell value for a row.
pub struct Column<R> {
    pub id: &'static str,
    pub label: &'static str,
    pub value: fn(&R) -> String,
}

/// View-level row derivation state. Cleared only by user interaction, never
/// by new data arriving.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableViewState {
    pub sort: Option<(&'static str, SortDirection)>,
    pub global_filter: String,
    pub categorical_filter: Option<String>,
}

/// What the table body should show, in precedence order: skeleton rows while
/// the source collection loads, a single no-results row when the derived view
/// is empty, otherwise the derived rows.
#[derive(Debug, PartialEq)]
pub enum TableContent<'a, R> {
    Loading { placeholder_rows: usize },
    EmptyResult,
    Populated(Vec<&'a R>),
}

/// A table over rows of type `R`: fixed column schema plus the mutable view
/// state driven by user interaction.
pub struct Table<R> {
    columns: Vec<Column<R>>,
    categorical_column: Option<&'static str>,
    case_sensitive: bool,
    placeholder_rows: usize,
    state: TableViewState,
}

pub const DEFAULT_PLACEHOLDER_ROWS: usize = 5;

impl<R> Table<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            categorical_column: None,
            case_sensitive: false,
            placeholder_rows: DEFAULT_PLACEHOLDER_ROWS,
            state: TableViewState::default(),
        }
    }

    /// Designate the column backing the exact-match categorical filter.
    pub fn with_categorical_column(mut self, column_id: &'static str) -> Self {
        self.categorical_column = Some(column_id);
        self
    }

    /// Case-sensitive global filtering. Default is case-insensitive.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Number of skeleton rows rendered while the source collection loads.
    pub fn placeholder_rows(mut self, count: usize) -> Self {
        self.placeholder_rows = count;
        self
    }

    pub fn global_filter(&self) -> &str {
        &self.state.global_filter
    }

    pub fn categorical_filter(&self) -> Option<&str> {
        self.state.categorical_filter.as_deref()
    }

    pub fn sort_for(&self, column_id: &str) -> Option<SortDirection> {
        match self.state.sort {
            Some((id, direction)) if id == column_id => Some(direction),
            _ => None,
        }
    }

    /// Cycle the sort for a column header click: a fresh column sorts
    /// ascending, repeated clicks alternate ascending/descending.
    pub fn toggle_sort(&mut self, column_id: &'static str) {
        self.state.sort = match self.state.sort {
            Some((id, direction)) if id == column_id => Some((id, direction.toggled())),
            _ => Some((column_id, SortDirection::Ascending)),
        };
    }

    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.state.global_filter = text.into();
    }

    pub fn set_categorical_filter(&mut self, value: Option<String>) {
        self.state.categorical_filter = value;
    }

    /// The derived view: stable sort by the active column, then the global
    /// substring filter, then the categorical exact-match filter. Degrades to
    /// an empty view over an empty source, never errors.
    pub fn rows<'a>(&self, source: &'a [R]) -> Vec<&'a R> {
        let mut rows: Vec<&R> = source.iter().collect();

        if let Some((column_id, direction)) = self.state.sort {
            if let Some(column) = self.column(column_id) {
                rows.sort_by(|a, b| {
                    let ord = (column.value)(a).cmp(&(column.value)(b));
                    match direction {
                        SortDirection::Ascending => ord,
                        SortDirection::Descending => ord.reverse(),
                    }
                });
            }
        }

        if !self.state.global_filter.is_empty() {
            rows.retain(|row| self.matches_global_filter(row));
        }

        if let (Some(column_id), Some(wanted)) = (
            self.categorical_column,
            self.state.categorical_filter.as_deref(),
        ) {
            if let Some(column) = self.column(column_id) {
                rows.retain(|row| (column.value)(row) == wanted);
            }
        }

        rows
    }

    /// Distinct values of the categorical column across the *loaded* (not
    /// filtered) rows, in first-seen order. Backs the filter menu options.
    pub fn distinct_categorical_values(&self, source: &[R]) -> Vec<String> {
        let Some(column) = self.categorical_column.and_then(|id| self.column(id)) else {
            return Vec::new();
        };
        let mut values: Vec<String> = Vec::new();
        for row in source {
            let value = (column.value)(row);
            if !values.contains(&value) {
                values.push(value);
            }
        }
        values
    }

    /// Resolve the three-way body state. Loading takes precedence over an
    /// empty filtered result.
    pub fn content<'a>(&self, source: &'a [R], is_loading: bool) -> TableContent<'a, R> {
        if is_loading {
            return TableContent::Loading {
                placeholder_rows: self.placeholder_rows,
            };
        }
        let rows = self.rows(source);
        if rows.is_empty() {
            TableContent::EmptyResult
        } else {
            TableContent::Populated(rows)
        }
    }

    fn column(&self, column_id: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    fn matches_global_filter(&self, row: &R) -> bool {
        let needle = &self.state.global_filter;
        if self.case_sensitive {
            self.columns
                .iter()
                .any(|column| (column.value)(row).contains(needle))
        } else {
            let needle = needle.to_lowercase();
            self.columns
                .iter()
                .any(|column| (column.value)(row).to_lowercase().contains(&needle))
        }
    }
}
