use powerplant_core::PacingSettings;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    min: Duration,
    max: Duration,
}

impl DelayRange {
    /// Bounds given in either order are normalized so that `min <= max`.
    pub fn new(a: Duration, b: Duration) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_secs([a, b]: [u64; 2]) -> Self {
        Self::new(Duration::from_secs(a), Duration::from_secs(b))
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn contains(&self, delay: Duration) -> bool {
        delay >= self.min && delay <= self.max
    }

    /// Uniform draw from `[min, max]`.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> Duration {
        let spread = self.max - self.min;
        self.min + spread.mul_f64(rng.f64())
    }
}

#[derive(Debug, Clone)]
pub struct PacingConfig {
    pub request_delay: DelayRange,
    pub follow_delay: DelayRange,
}

impl PacingConfig {
    pub fn instagram() -> Self {
        Self::from(&PacingSettings::default())
    }

    /// No waiting at all; for tests and dry runs.
    pub fn immediate() -> Self {
        Self {
            request_delay: DelayRange::new(Duration::ZERO, Duration::ZERO),
            follow_delay: DelayRange::new(Duration::ZERO, Duration::ZERO),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self::instagram()
    }
}

impl From<&PacingSettings> for PacingConfig {
    fn from(settings: &PacingSettings) -> Self {
        Self {
            request_delay: DelayRange::from_secs(settings.request_delay_secs),
            follow_delay: DelayRange::from_secs(settings.follow_delay_secs),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PacingStatus {
    pub waits: u64,
    pub total_waited: Duration,
    pub last_wait: Option<Duration>,
}

/// Human-like pauses between platform actions.
#[derive(Debug)]
pub struct Pacer {
    config: PacingConfig,
    rng: Mutex<fastrand::Rng>,
    status: Mutex<PacingStatus>,
}

impl Pacer {
    pub fn new(config: PacingConfig) -> Self {
        Self::with_rng(config, fastrand::Rng::new())
    }

    pub fn with_rng(config: PacingConfig, rng: fastrand::Rng) -> Self {
        Self {
            config,
            rng: Mutex::new(rng),
            status: Mutex::new(PacingStatus::default()),
        }
    }

    pub fn config(&self) -> &PacingConfig {
        &self.config
    }

    /// Sleeps for a random duration within the follow delay range and returns it.
    pub async fn after_follow(&self) -> Duration {
        self.wait(self.config.follow_delay).await
    }

    async fn wait(&self, range: DelayRange) -> Duration {
        let delay = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            range.sample(&mut rng)
        };

        tracing::debug!("Pacing: waiting {:?}", delay);
        sleep(delay).await;

        let mut status = self.status.lock().unwrap_or_else(|e| e.into_inner());
        status.waits += 1;
        status.total_waited += delay;
        status.last_wait = Some(delay);

        delay
    }

    pub fn status(&self) -> PacingStatus {
        self.status
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
