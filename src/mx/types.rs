#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Result of one MX lookup: the queried ASCII domain and its records,
/// sorted ascending by preference and deduplicated.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxLookup {
    pub ascii_domain: String,
    pub records: Vec<MxRecord>,
}

impl MxLookup {
    /// The lowest-preference (best) exchange, if the domain has any.
    pub fn primary(&self) -> Option<&MxRecord> {
        self.records.first()
    }

    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }
}
