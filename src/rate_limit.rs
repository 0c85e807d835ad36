use crate::error::AppError;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

/// Fixed-window per-client submission gate. State lives in app state, not a
/// global; the window is keyed by unix timestamp so entries age out naturally.
pub struct RateLimiter {
    window_secs: i64,
    max_hits: u32,
    state: Mutex<HashMap<String, (i64, u32)>>,
}

impl RateLimiter {
    pub fn new(window_secs: i64, max_hits: u32) -> Self {
        RateLimiter {
            window_secs,
            max_hits,
            state: Mutex::new(HashMap::new()),
        }
    }

    pub fn check(&self, key: &str) -> Result<(), AppError> {
        self.check_at(key, Utc::now().timestamp())
    }

    fn check_at(&self, key: &str, now: i64) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();

        // Drop stale windows once the map gets big; cheap because hits on
        // live keys reset their window below.
        if state.len() > 1024 {
            let cutoff = now - self.window_secs;
            state.retain(|_, (start, _)| *start > cutoff);
        }

        let entry = state.entry(key.to_string()).or_insert((now, 0));
        if now - entry.0 >= self.window_secs {
            *entry = (now, 0);
        }
        if entry.1 >= self.max_hits {
            return Err(AppError::RateLimited(
                "Too many submissions, slow down".into(),
            ));
        }
        entry.1 += 1;
        Ok(())
    }
}
