#![forbid(unsafe_code)]
//! mailvet_lib — email deliverability verdicts via provider APIs.

pub mod config;
pub mod finder;
pub mod providers;
pub mod validator;
pub mod verdict;

pub use config::ApiCredentials;
pub use finder::{FinderError, find_email};
pub use providers::{
    FinderOutcome, FinderReport, PersonQuery, ProviderKind, ProviderResult, ProviderStatus,
    TransportError,
};
pub use validator::{
    AddressError, EmailCandidate, ValidationMode, ValidationReport, parse_candidate,
    validate_address,
};
pub use verdict::{Verdict, VerdictStatus, VerifyOptions, verify_email};

#[cfg(feature = "with-mx")]
pub mod mx;
#[cfg(feature = "with-mx")]
pub use mx::{Error as MxError, MxLookup, MxRecord, check_mx};
