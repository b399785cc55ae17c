//! Prayer reminders.
//!
//! [`plan_reminders`] decides what should fire and when; the
//! [`NotificationService`] turns a plan into tokio timers that hand
//! [`Notification`]s to a platform [`Notifier`].

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use waktu_astronomy::DailyTimes;
use waktu_types::{Prayer, WaktuError, format_hhmm};

pub const DEFAULT_LEAD_MINUTES: i64 = 10;

/// Platform notification permission, mirroring the browser's three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NotificationPermission {
    #[default]
    Default,
    Granted,
    Denied,
}

/// A message ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub prayer: Prayer,
    pub title: String,
    pub body: String,
}

/// Delivery backend.
pub trait Notifier: Send + Sync + 'static {
    fn request_permission(&self) -> impl Future<Output = NotificationPermission> + Send;
    fn deliver(&self, notification: &Notification) -> Result<(), WaktuError>;
}

/// One planned reminder, in the schedule's local clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub prayer: Prayer,
    pub prayer_at: NaiveDateTime,
    pub fire_at: NaiveDateTime,
}

impl Reminder {
    pub fn notification(&self) -> Notification {
        let lead = (self.prayer_at - self.fire_at).num_minutes();
        let name = self.prayer.label_id();
        let at = format_hhmm(self.prayer_at.time());
        let body = if lead > 0 {
            format!("{name} pukul {at}, {lead} menit lagi")
        } else {
            format!("Sudah masuk waktu {name} ({at})")
        };
        Notification {
            prayer: self.prayer,
            title: format!("Waktu {name}"),
            body,
        }
    }
}

/// Reminders for the obligatory prayers whose fire time is still ahead.
///
/// `now` must be in the same local clock as `times`. Negative leads count as
/// zero; a lead reaching outside the calendar plans nothing.
pub fn plan_reminders(times: &DailyTimes, now: NaiveDateTime, lead_minutes: i64) -> Vec<Reminder> {
    let Some(lead) = Duration::try_minutes(lead_minutes.max(0)) else {
        return Vec::new();
    };
    Prayer::OBLIGATORY
        .iter()
        .filter_map(|&prayer| {
            let prayer_at = times.at(prayer);
            let fire_at = prayer_at.checked_sub_signed(lead)?;
            Some(Reminder {
                prayer,
                prayer_at,
                fire_at,
            })
        })
        .filter(|r| r.fire_at > now)
        .collect()
}

fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, WaktuError> {
    m.lock().map_err(|_| WaktuError::StorageError("notification state poisoned".into()))
}

/// Schedules reminders against a [`Notifier`].
pub struct NotificationService<N: Notifier> {
    notifier: Arc<N>,
    lead_minutes: i64,
    permission: Mutex<NotificationPermission>,
    scheduled: Mutex<Vec<(Reminder, JoinHandle<()>)>>,
}

impl<N: Notifier> NotificationService<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            notifier: Arc::new(notifier),
            lead_minutes: DEFAULT_LEAD_MINUTES,
            permission: Mutex::new(NotificationPermission::Default),
            scheduled: Mutex::new(Vec::new()),
        }
    }

    pub fn lead_minutes(mut self, minutes: i64) -> Self {
        self.lead_minutes = minutes;
        self
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn permission(&self) -> Result<NotificationPermission, WaktuError> {
        Ok(*lock(&self.permission)?)
    }

    /// Asks the backend and remembers the answer. A denial is sticky.
    pub async fn request_permission(&self) -> Result<NotificationPermission, WaktuError> {
        if self.permission()? == NotificationPermission::Denied {
            return Ok(NotificationPermission::Denied);
        }
        let answer = self.notifier.request_permission().await;
        *lock(&self.permission)? = answer;
        info!(?answer, "notification permission");
        Ok(answer)
    }

    /// Replaces any pending reminders with timers for `times`.
    ///
    /// Returns how many were scheduled. Must be called from inside a tokio runtime.
    pub fn schedule(&self, times: &DailyTimes, now: NaiveDateTime) -> Result<usize, WaktuError> {
        self.cancel_all()?;
        if self.permission()? != NotificationPermission::Granted {
            debug!("notifications not granted, nothing scheduled");
            return Ok(0);
        }
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| WaktuError::invalid_config(format!("reminders need a tokio runtime: {e}")))?;

        let plan = plan_reminders(times, now, self.lead_minutes);
        let mut scheduled = lock(&self.scheduled)?;
        for reminder in plan {
            let delay = (reminder.fire_at - now).to_std().unwrap_or_default();
            let notifier = Arc::clone(&self.notifier);
            let handle = runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                let notification = reminder.notification();
                if let Err(e) = notifier.deliver(&notification) {
                    warn!(prayer = %reminder.prayer, error = %e, "reminder delivery failed");
                }
            });
            debug!(prayer = %reminder.prayer, fire_at = %reminder.fire_at, "reminder scheduled");
            scheduled.push((reminder, handle));
        }
        Ok(scheduled.len())
    }

    /// Aborts every pending timer.
    pub fn cancel_all(&self) -> Result<(), WaktuError> {
        let mut scheduled = lock(&self.scheduled)?;
        for (_, handle) in scheduled.drain(..) {
            handle.abort();
        }
        Ok(())
    }

    /// Reminders that have not fired yet.
    pub fn pending(&self) -> Result<Vec<Reminder>, WaktuError> {
        Ok(lock(&self.scheduled)?
            .iter()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(reminder, _)| *reminder)
            .collect())
    }
}

impl<N: Notifier> Drop for NotificationService<N> {
    fn drop(&mut self) {
        if let Ok(scheduled) = self.scheduled.get_mut() {
            for (_, handle) in scheduled.drain(..) {
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use waktu_astronomy::LocalPrayerTimesCalculator;
    use waktu_types::{CalculationMethod, GeoCoordinate};

    /// Answers permission requests from `answers` in turn, then grants.
    #[derive(Default)]
    struct Recorder {
        answers: Vec<NotificationPermission>,
        asked: Mutex<usize>,
        delivered: Mutex<Vec<Notification>>,
    }

    impl Notifier for Recorder {
        async fn request_permission(&self) -> NotificationPermission {
            let mut asked = self.asked.lock().unwrap();
            let answer = self.answers.get(*asked).copied().unwrap_or(NotificationPermission::Granted);
            *asked += 1;
            answer
        }

        fn deliver(&self, notification: &Notification) -> Result<(), WaktuError> {
            self.delivered.lock().unwrap().push(notification.clone());
            Ok(())
        }
    }

    fn jakarta() -> DailyTimes {
        LocalPrayerTimesCalculator::new(CalculationMethod::Kemenag).calculate(
            GeoCoordinate::new_unchecked(-6.2088, 106.8456),
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        )
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_plan_skips_past_prayers() {
        let times = jakarta();
        assert_eq!(plan_reminders(&times, at(0, 0), 10).len(), 5);

        let plan = plan_reminders(&times, at(13, 0), 10);
        let prayers: Vec<_> = plan.iter().map(|r| r.prayer).collect();
        assert_eq!(prayers, vec![Prayer::Asr, Prayer::Maghrib, Prayer::Isha]);
        for r in &plan {
            assert_eq!((r.prayer_at - r.fire_at).num_minutes(), 10);
        }
        assert!(plan_reminders(&times, at(23, 59), 10).is_empty());
    }

    #[test]
    fn test_plan_boundary_is_exclusive() {
        let times = jakarta();
        let fire = times.at(Prayer::Maghrib) - Duration::minutes(10);
        let plan = plan_reminders(&times, fire, 10);
        assert_eq!(plan.first().map(|r| r.prayer), Some(Prayer::Isha));
    }

    #[test]
    fn test_notification_text() {
        let times = jakarta();
        let r = plan_reminders(&times, at(0, 0), 10)[0];
        let n = r.notification();
        assert_eq!(n.title, "Waktu Subuh");
        assert!(n.body.contains("10 menit lagi"));

        let r = plan_reminders(&times, at(0, 0), 0)[0];
        assert!(r.notification().body.starts_with("Sudah masuk waktu Subuh"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reminders_fire_in_order() {
        let svc = NotificationService::new(Recorder::default()).lead_minutes(5);
        assert_eq!(svc.request_permission().await.unwrap(), NotificationPermission::Granted);

        let count = svc.schedule(&jakarta(), at(11, 0)).unwrap();
        assert_eq!(count, 4);
        assert_eq!(svc.pending().unwrap().len(), 4);

        tokio::time::sleep(std::time::Duration::from_secs(14 * 3600)).await;

        let delivered = svc.notifier().delivered.lock().unwrap().clone();
        let prayers: Vec<_> = delivered.iter().map(|n| n.prayer).collect();
        assert_eq!(prayers, vec![Prayer::Dhuhr, Prayer::Asr, Prayer::Maghrib, Prayer::Isha]);
        assert!(svc.pending().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_and_cancel_stops() {
        let svc = NotificationService::new(Recorder::default());
        svc.request_permission().await.unwrap();

        svc.schedule(&jakarta(), at(0, 0)).unwrap();
        assert_eq!(svc.schedule(&jakarta(), at(13, 0)).unwrap(), 3);
        svc.cancel_all().unwrap();
        assert!(svc.pending().unwrap().is_empty());

        tokio::time::sleep(std::time::Duration::from_secs(24 * 3600)).await;
        assert!(svc.notifier().delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_nothing_without_permission() {
        let svc = NotificationService::new(Recorder::default());
        assert_eq!(svc.schedule(&jakarta(), at(0, 0)).unwrap(), 0);
        assert_eq!(*svc.notifier().asked.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_denial_is_sticky() {
        // the backend would grant on a second ask
        let svc = NotificationService::new(Recorder {
            answers: vec![NotificationPermission::Denied, NotificationPermission::Granted],
            ..Default::default()
        });
        assert_eq!(svc.request_permission().await.unwrap(), NotificationPermission::Denied);
        assert_eq!(svc.request_permission().await.unwrap(), NotificationPermission::Denied);
        assert_eq!(*svc.notifier().asked.lock().unwrap(), 1);
        assert_eq!(svc.permission().unwrap(), NotificationPermission::Denied);
        assert_eq!(svc.schedule(&jakarta(), at(0, 0)).unwrap(), 0);
    }

    #[test]
    fn test_huge_lead_plans_nothing() {
        assert!(plan_reminders(&jakarta(), at(0, 0), i64::MAX).is_empty());
        assert_eq!(plan_reminders(&jakarta(), at(0, 0), -5).len(), 5);
    }

    #[test]
    fn test_schedule_outside_runtime_errors() {
        let svc = NotificationService::new(Recorder::default());
        *svc.permission.lock().unwrap() = NotificationPermission::Granted;
        assert!(matches!(
            svc.schedule(&jakarta(), at(0, 0)),
            Err(WaktuError::InvalidConfiguration { .. })
        ));
    }
}
