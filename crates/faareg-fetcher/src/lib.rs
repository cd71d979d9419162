//! faareg Fetcher - FAA aircraft registration lookup.
//!
//! Queries the FAA N-number inquiry page for a tail number and extracts the
//! aircraft, registered owner and airworthiness sections into a typed
//! [`Registration`].
//!
//! # Example
//!
//! ```rust,ignore
//! use faareg_fetcher::{FetchError, RegistrationFetcher};
//!
//! let fetcher = RegistrationFetcher::new()?;
//! match fetcher.fetch("265FT").await {
//!     Ok(registration) => println!("{}", registration.aircraft.model),
//!     Err(FetchError::NotAssigned { .. }) => println!("not assigned"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

#[allow(missing_docs)]
pub mod error;
#[allow(missing_docs)]
pub mod extract;
pub mod fetcher;
#[allow(missing_docs)]
pub mod model;
#[allow(missing_docs)]
pub mod scanner;
#[allow(missing_docs)]
pub mod selectors;
#[allow(missing_docs)]
pub mod url_builder;

// Re-export commonly used types
pub use error::{FetchError, Result};
pub use extract::{
    extract_aircraft, extract_airworthiness, extract_registered_owner, registration_status,
    RegistrationStatus,
};
pub use fetcher::RegistrationFetcher;
pub use model::{Aircraft, Airworthiness, LabeledRecord, RegisteredOwner, Registration};
pub use scanner::{DocumentScanner, HtmlScanner, LabeledCell};
pub use url_builder::build_lookup_url;
