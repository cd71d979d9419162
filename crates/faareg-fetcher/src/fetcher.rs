//! Registry lookup: one GET, one parse, one status decision.

use crate::error::{FetchError, Result};
use crate::extract::{
    extract_aircraft, extract_airworthiness, extract_registered_owner, registration_status,
};
use crate::model::Registration;
use crate::scanner::{DocumentScanner, HtmlScanner};
use crate::url_builder::build_lookup_url;
use faareg_core::{AppConfig, TailNumber};
use reqwest::Client;
use std::time::Duration;

/// Looks up registrations on the FAA N-number inquiry page.
///
/// Holds no state between calls besides the HTTP client.
pub struct RegistrationFetcher {
    client: Client,
    base_url: String,
}

impl RegistrationFetcher {
    /// Create a fetcher with default settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::from_config(&AppConfig::default())
    }

    /// Create a fetcher using the endpoint, timeout and user agent from `config`.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .user_agent(config.http.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.registry.base_url.clone(),
        })
    }

    /// The inquiry endpoint identifiers are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and extract the registration for `identifier`.
    ///
    /// # Errors
    /// - [`FetchError::UnableToQuery`] if the request fails, times out, or
    ///   answers with a non-success status.
    /// - [`FetchError::NotAssigned`] if the page reports the number as not
    ///   assigned or reserved.
    pub async fn fetch(&self, identifier: &str) -> Result<Registration> {
        let url = build_lookup_url(&self.base_url, identifier)?;
        tracing::debug!("Querying registry: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::unable_to_query(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::unable_to_query(
                url.as_str(),
                format!("HTTP {status}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::unable_to_query(url.as_str(), e))?;

        Self::extract(identifier, &body)
    }

    /// Extract a registration from an already retrieved inquiry page.
    ///
    /// # Errors
    /// Returns [`FetchError::NotAssigned`] unless the page reports the number
    /// as assigned.
    pub fn extract(identifier: &str, html: &str) -> Result<Registration> {
        let scanner = HtmlScanner::parse(html);
        Self::extract_from(&TailNumber::new(identifier), &scanner)
    }

    /// Extract a registration through any [`DocumentScanner`].
    ///
    /// Sections are extracted before the status is checked; on a not
    /// assigned page they are dropped.
    pub fn extract_from(
        tail_number: &TailNumber,
        scanner: &impl DocumentScanner,
    ) -> Result<Registration> {
        let mut aircraft = extract_aircraft(scanner);
        let registered_owner = extract_registered_owner(scanner);
        let airworthiness = extract_airworthiness(scanner);

        let status = registration_status(scanner);
        if !status.is_assigned() {
            tracing::info!("{} is not assigned ({:?})", tail_number, status);
            return Err(FetchError::NotAssigned {
                identifier: tail_number.as_str().to_string(),
            });
        }

        aircraft.registration = tail_number.registration();
        tracing::info!("Found registration {}", aircraft.registration);

        Ok(Registration {
            aircraft,
            registered_owner,
            airworthiness,
        })
    }
}
