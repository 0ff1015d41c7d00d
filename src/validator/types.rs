use thiserror::Error;

/// Local-part rule set applied by [`validate_address`](crate::validator::validate_address).
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    #[default]
    Strict,
    Relaxed,
}

/// An address split into its parts, with the domain also in IDNA/ASCII form.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCandidate {
    pub local: String,
    pub domain: String,
    pub ascii_domain: String,
}

impl EmailCandidate {
    /// Recompose the address using the ASCII domain.
    pub fn ascii_address(&self) -> String {
        format!("{}@{}", self.local, self.ascii_domain)
    }
}

/// Outcome of a syntactic check. `reasons` lists every rule the input broke.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub ok: bool,
    pub reasons: Vec<String>,
}

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("address must contain exactly one '@'")]
    Shape,
    #[error("empty local part or domain")]
    EmptyPart,
    #[error("domain punycode conversion failed: {0}")]
    Idna(String),
}
