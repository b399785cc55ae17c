//! Remote schedule lookups against the MyQuran API.
//!
//! Optional: the local estimator never depends on it. Results are used to
//! cross-check locally computed times.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use reqwest::Url;
use tracing::debug;

use waktu_types::{Timings, WaktuError, parse_hhmm};

pub const DEFAULT_BASE_URL: &str = "https://api.myquran.com/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// A city in MyQuran's own numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCity {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub lokasi: String,
}

/// One day's schedule as MyQuran returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSchedule {
    #[serde(default)]
    pub tanggal: String,
    pub imsak: String,
    pub subuh: String,
    pub terbit: String,
    pub dhuha: String,
    pub dzuhur: String,
    pub ashar: String,
    pub maghrib: String,
    pub isya: String,
}

impl RemoteSchedule {
    /// Parses the `HH:MM` fields.
    ///
    /// # Errors
    /// `NetworkError` naming the first field that is not a valid time.
    pub fn to_timings(&self) -> Result<Timings, WaktuError> {
        let field = |name: &str, value: &str| {
            parse_hhmm(value).ok_or_else(|| WaktuError::NetworkError(format!("bad {name} time: {value:?}")))
        };
        Ok(Timings {
            imsak: field("imsak", &self.imsak)?,
            fajr: field("subuh", &self.subuh)?,
            sunrise: field("terbit", &self.terbit)?,
            dhuha: field("dhuha", &self.dhuha)?,
            dhuhr: field("dzuhur", &self.dzuhur)?,
            asr: field("ashar", &self.ashar)?,
            maghrib: field("maghrib", &self.maghrib)?,
            isha: field("isya", &self.isya)?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Num(u64),
    Str(String),
}

fn id_string<'de, D: serde::Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match IdRepr::deserialize(d)? {
        IdRepr::Num(n) => n.to_string(),
        IdRepr::Str(s) => s,
    })
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: bool,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ScheduleData {
    jadwal: RemoteSchedule,
}

/// Thin async client.
#[derive(Debug, Clone)]
pub struct MyQuranClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MyQuranClient {
    /// Client against the public endpoint.
    ///
    /// # Errors
    /// `NetworkError` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, WaktuError> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Client against another deployment (or a mock server).
    ///
    /// # Errors
    /// `NetworkError` if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn with_base_url(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, WaktuError> {
        let base_url = Url::parse(base_url.as_ref())
            .ok()
            .filter(|u| !u.cannot_be_a_base())
            .ok_or_else(|| WaktuError::NetworkError(format!("invalid base URL: {:?}", base_url.as_ref())))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("waktu/", env!("CARGO_PKG_VERSION"), " (prayer times)"))
            .timeout(timeout)
            .build()
            .map_err(|e| WaktuError::NetworkError(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `base_url` with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Cities whose name contains `name`.
    pub async fn search_city(&self, name: &str) -> Result<Vec<RemoteCity>, WaktuError> {
        let keyword = name.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }
        let url = self.endpoint(&["sholat", "kota", "cari", keyword]);
        // an unknown keyword comes back as status false; that is just "no hits"
        match self.get::<Vec<RemoteCity>>(url).await {
            Ok(cities) => Ok(cities),
            Err(WaktuError::NetworkError(msg)) if msg.starts_with("api:") => {
                debug!(keyword, %msg, "myquran city search empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// The schedule for one city and day.
    pub async fn schedule(&self, city_id: &str, date: NaiveDate) -> Result<RemoteSchedule, WaktuError> {
        let (year, month, day) = (
            format!("{:04}", date.year()),
            format!("{:02}", date.month()),
            format!("{:02}", date.day()),
        );
        let url = self.endpoint(&["sholat", "jadwal", city_id, &year, &month, &day]);
        Ok(self.get::<ScheduleData>(url).await?.jadwal)
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, WaktuError> {
        debug!(url = %url, "myquran request");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| WaktuError::NetworkError(format!("MyQuran request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WaktuError::NetworkError(format!("MyQuran returned HTTP {status}")));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| WaktuError::NetworkError(format!("failed to parse MyQuran response: {e}")))?;

        match (envelope.status, envelope.data) {
            (true, Some(data)) => Ok(data),
            (_, _) => Err(WaktuError::NetworkError(format!(
                "api: {}",
                envelope.message.unwrap_or_else(|| "no data".into())
            ))),
        }
    }
}
