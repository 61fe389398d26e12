use crate::observation::Observation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    Io(String),
    Malformed { record: u64, reason: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "dataset unavailable: {msg}"),
            LoadError::Malformed { record, reason } => {
                write!(f, "malformed dataset record {record}: {reason}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// A one-shot provider of observation rows.
///
/// Loading happens exactly once at startup; a failure here is fatal since
/// no scene can render without data.
pub trait ObservationSource {
    fn load(&self) -> Result<Vec<Observation>, LoadError>;
}

/// Fixed in-memory rows, for tests and fixtures.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    rows: Vec<Observation>,
}

impl InMemorySource {
    pub fn new(rows: Vec<Observation>) -> Self {
        Self { rows }
    }
}

impl ObservationSource for InMemorySource {
    fn load(&self) -> Result<Vec<Observation>, LoadError> {
        Ok(self.rows.clone())
    }
}

/// The loaded, immutable dataset held for the process lifetime.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Observation>,
}

impl Dataset {
    pub fn load_from(source: &dyn ObservationSource) -> Result<Self, LoadError> {
        Ok(Self {
            records: source.load()?,
        })
    }

    pub fn from_records(records: Vec<Observation>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Observation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
