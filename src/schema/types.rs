/// Identity fields every tidy row starts with, ahead of the per-table value
/// columns.
pub const ID_FIELDS: [&str; 4] = ["GEO_ID", "NAME", "line_no", "label"];

/// Whether a variable is the estimate or the margin of error for its group.
/// The API encodes this as the trailing `E`/`M` of the variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    Estimate,
    MarginOfError,
}

impl Measure {
    pub fn code(self) -> char {
        match self {
            Measure::Estimate => 'E',
            Measure::MarginOfError => 'M',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'E' => Some(Measure::Estimate),
            'M' => Some(Measure::MarginOfError),
            _ => None,
        }
    }
}

/// One value column of the tidy output: which group of the subject table it
/// reads from and which measure of that group it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueColumn {
    pub name: &'static str,
    pub group: &'static str,
    pub measure: Measure,
}

pub const fn est(name: &'static str, group: &'static str) -> ValueColumn {
    ValueColumn {
        name,
        group,
        measure: Measure::Estimate,
    }
}

pub const fn moe(name: &'static str, group: &'static str) -> ValueColumn {
    ValueColumn {
        name,
        group,
        measure: Measure::MarginOfError,
    }
}

/// Output layout for one subject table. Immutable; built once at startup by
/// the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub columns: &'static [ValueColumn],
}

impl TableSchema {
    /// Full output header: identity fields followed by the value columns.
    pub fn field_names(&self) -> Vec<&'static str> {
        ID_FIELDS
            .iter()
            .copied()
            .chain(self.columns.iter().map(|c| c.name))
            .collect()
    }
}
