//! Upstream client for aviationweather.gov and the NOAA text feed
//!
//! Thin async wrappers over the public data endpoints. Every call is
//! at most once; there are no retries and no circuit breaking, a failed
//! fetch surfaces immediately to the caller.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::UpstreamConfig;
use crate::models::SigmetRecord;
use crate::{Result, SkyBriefError};

/// HTTP client for the upstream weather feeds.
pub struct AwcClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl AwcClient {
    /// Build a client with the configured timeout.
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent(concat!("SkyBrief/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| {
                SkyBriefError::general(format!("Failed to build HTTP client: {err}"))
            })?;
        Ok(Self { http, config })
    }

    /// METAR reports for a station over the given time window, as the
    /// upstream JSON.
    #[instrument(skip(self))]
    pub async fn metar(&self, icao: &str, hours: f64) -> Result<Value> {
        let url = format!(
            "{}?ids={}&format=json&hours={hours}",
            self.config.metar_url,
            urlencoding::encode(icao)
        );
        self.get_json(&url).await
    }

    /// Latest TAF for a station, as the upstream JSON.
    #[instrument(skip(self))]
    pub async fn taf(&self, icao: &str) -> Result<Value> {
        let url = format!(
            "{}?ids={}&format=json",
            self.config.taf_url,
            urlencoding::encode(icao)
        );
        self.get_json(&url).await
    }

    /// PIREPs near a station within a radius (nautical miles) and time
    /// window (hours), as the upstream JSON.
    #[instrument(skip(self))]
    pub async fn pireps(&self, icao: &str, hours: f64, distance: u32) -> Result<Value> {
        let url = format!(
            "{}?format=json&hours={hours}&center={}&distance={distance}",
            self.config.pirep_url,
            urlencoding::encode(icao)
        );
        self.get_json(&url).await
    }

    /// International SIGMETs filtered by hazard and level, as the
    /// upstream JSON.
    #[instrument(skip(self))]
    pub async fn intl_sigmets(
        &self,
        hazard: &str,
        level: u32,
        date: Option<&str>,
    ) -> Result<Value> {
        let mut url = format!(
            "{}?format=json&hazard={}&level={level}",
            self.config.sigmet_url,
            urlencoding::encode(hazard)
        );
        if let Some(date) = date {
            url.push_str("&date=");
            url.push_str(&urlencoding::encode(date));
        }
        self.get_json(&url).await
    }

    /// Domestic AIR/SIGMET snapshot, as the upstream JSON.
    #[instrument(skip(self))]
    pub async fn airsigmets(&self) -> Result<Value> {
        let url = format!("{}?format=json", self.config.airsigmet_url);
        self.get_json(&url).await
    }

    /// Current advisory snapshot projected into [`SigmetRecord`]s.
    pub async fn sigmet_records(&self) -> Result<Vec<SigmetRecord>> {
        let feed = self.airsigmets().await?;
        Ok(SigmetRecord::from_feed(&feed))
    }

    /// Latest raw METAR report for a station from the NOAA text feed.
    ///
    /// The feed returns a two-line blob (issue time, then the report);
    /// anything shorter means no report is available.
    #[instrument(skip(self))]
    pub async fn raw_metar(&self, icao: &str) -> Result<String> {
        let icao = icao.to_uppercase();
        let url = format!(
            "{}/{icao}.TXT",
            self.config.noaa_text_url.trim_end_matches('/')
        );
        debug!("Fetching raw METAR from {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| SkyBriefError::upstream(format!("NOAA text feed: {err}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SkyBriefError::not_found(format!(
                "No METAR report available for {icao}"
            )));
        }
        let response = response
            .error_for_status()
            .map_err(|err| SkyBriefError::upstream(format!("NOAA text feed: {err}")))?;

        let body = response
            .text()
            .await
            .map_err(|err| SkyBriefError::upstream(format!("NOAA text feed: {err}")))?;

        let mut lines = body.lines();
        let _issued_at = lines.next();
        match lines.next() {
            Some(report) if !report.trim().is_empty() => Ok(report.trim().to_string()),
            _ => Err(SkyBriefError::not_found(format!(
                "No METAR report available for {icao}"
            ))),
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| SkyBriefError::upstream(format!("{url}: {err}")))?
            .error_for_status()
            .map_err(|err| SkyBriefError::upstream(format!("{url}: {err}")))?;

        response
            .json()
            .await
            .map_err(|err| SkyBriefError::upstream(format!("Invalid JSON from {url}: {err}")))
    }
}
