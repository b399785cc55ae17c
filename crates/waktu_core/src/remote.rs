//! Cross-checking local estimates against MyQuran.
//!
//! Purely diagnostic: the remote schedule is logged next to the local one
//! and never replaces it.

use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info};

use waktu_astronomy::DailyTimes;
use waktu_cities::{CityKind, IndonesianCitiesService};
use waktu_location::ResolvedLocation;
use waktu_network::{MyQuranClient, RemoteCity};
use waktu_types::{Timings, WaktuError};

use crate::config::RemoteConfig;

/// MyQuran only covers Indonesia; farther than this from a gazetteer city, skip.
const MAX_CITY_DISTANCE_KM: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct RemoteCheck {
    client: MyQuranClient,
}

impl RemoteCheck {
    pub fn from_config(config: &RemoteConfig) -> Result<Option<Self>, WaktuError> {
        if !config.enabled {
            return Ok(None);
        }
        let client = MyQuranClient::with_base_url(&config.base_url, Duration::from_secs(config.timeout_secs))?;
        Ok(Some(Self { client }))
    }

    /// Logs per-prayer differences. Failures are logged and swallowed.
    pub async fn compare(&self, cities: &IndonesianCitiesService, location: &ResolvedLocation, times: &DailyTimes) {
        match self.fetch(cities, location, times.date).await {
            Ok(remote) => {
                let mut worst = 0;
                for (prayer, local) in times.timings.entries() {
                    let diff = (local - remote.get(prayer)).num_minutes();
                    worst = worst.max(diff.abs());
                    debug!(%prayer, diff_minutes = diff, "local vs myquran");
                }
                info!(location = %location.label, max_diff_minutes = worst, "myquran cross-check");
            }
            Err(e) => debug!(error = %e, "myquran cross-check skipped"),
        }
    }

    async fn fetch(
        &self,
        cities: &IndonesianCitiesService,
        location: &ResolvedLocation,
        date: NaiveDate,
    ) -> Result<Timings, WaktuError> {
        let (city, km) = cities
            .nearest(location.coords)
            .filter(|(_, km)| *km <= MAX_CITY_DISTANCE_KM)
            .ok_or_else(|| WaktuError::city_not_found(location.label.clone()))?;
        debug!(city = city.id, km, "matching myquran city");

        let hits = self.client.search_city(city.name).await?;
        let remote = pick_city(&hits, city.name, city.kind).ok_or_else(|| WaktuError::city_not_found(city.name))?;
        self.client.schedule(&remote.id, date).await?.to_timings()
    }
}

/// Prefers the hit of the same administrative kind (`KOTA` vs `KAB.`).
fn pick_city<'a>(hits: &'a [RemoteCity], name: &str, kind: CityKind) -> Option<&'a RemoteCity> {
    let name = name.to_uppercase();
    let prefix = match kind {
        CityKind::Kota => "KOTA ",
        CityKind::Kabupaten => "KAB. ",
    };
    hits.iter()
        .find(|h| h.lokasi == format!("{prefix}{name}"))
        .or_else(|| hits.iter().find(|h| h.lokasi.contains(&name)))
        .or_else(|| hits.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, lokasi: &str) -> RemoteCity {
        RemoteCity {
            id: id.into(),
            lokasi: lokasi.into(),
        }
    }

    #[test]
    fn test_pick_city_prefers_matching_kind() {
        let hits = [hit("1202", "KAB. BANDUNG"), hit("1219", "KOTA BANDUNG")];
        assert_eq!(pick_city(&hits, "Bandung", CityKind::Kota).unwrap().id, "1219");
        assert_eq!(pick_city(&hits, "Bandung", CityKind::Kabupaten).unwrap().id, "1202");
        assert!(pick_city(&[], "Bandung", CityKind::Kota).is_none());
    }

    #[test]
    fn test_disabled_by_default() {
        assert!(RemoteCheck::from_config(&RemoteConfig::default()).unwrap().is_none());
    }

    mod service {
        use std::sync::Arc;

        use chrono::{NaiveDate, TimeZone, Utc};
        use serde_json::json;
        use waktu_location::{MemoryStore, NoGps};
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        use crate::config::Config;
        use crate::service::PrayerTimesService;

        fn remote_service(base_url: &str) -> PrayerTimesService {
            let mut config = Config::default();
            config.remote.enabled = true;
            config.remote.base_url = base_url.to_string();
            config.remote.timeout_secs = 2;
            let mut svc = PrayerTimesService::new(config, Arc::new(MemoryStore::new()), NoGps).unwrap();
            svc.set_manual_city("Jakarta").unwrap();
            svc
        }

        fn date() -> NaiveDate {
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        }

        #[tokio::test]
        async fn test_cross_check_never_replaces_local_times() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/sholat/kota/cari/Jakarta"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "status": true,
                    "data": [{ "id": "1301", "lokasi": "KOTA JAKARTA" }]
                })))
                .expect(1)
                .mount(&server)
                .await;
            // deliberately far from any real schedule
            Mock::given(method("GET"))
                .and(path("/sholat/jadwal/1301/2025/03/01"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "status": true,
                    "data": { "jadwal": {
                        "imsak": "01:00", "subuh": "01:10", "terbit": "02:00", "dhuha": "02:30",
                        "dzuhur": "09:00", "ashar": "10:00", "maghrib": "11:00", "isya": "12:00"
                    }}
                })))
                .expect(1)
                .mount(&server)
                .await;

            let mut svc = remote_service(&server.uri());
            let now = Utc.with_ymd_and_hms(2025, 3, 1, 1, 0, 0).unwrap();
            let schedule = svc.prayer_times(date(), now).await.unwrap();

            let local = svc.times_at(schedule.location.coords, date());
            assert_eq!(schedule.times.timings, local.timings);
            assert_eq!(schedule.times.utc_offset_minutes, 420);
        }

        #[tokio::test]
        async fn test_server_error_is_ignored() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(500))
                .mount(&server)
                .await;

            let mut svc = remote_service(&server.uri());
            let now = Utc.with_ymd_and_hms(2025, 3, 1, 1, 0, 0).unwrap();
            let schedule = svc.prayer_times(date(), now).await.unwrap();
            assert_eq!(schedule.times.timings, svc.times_at(schedule.location.coords, date()).timings);
        }

        #[tokio::test]
        async fn test_unreachable_server_is_ignored() {
            let mut svc = remote_service("http://127.0.0.1:1");
            let now = Utc.with_ymd_and_hms(2025, 3, 1, 1, 0, 0).unwrap();
            assert!(svc.prayer_times(date(), now).await.is_ok());
        }
    }
}
