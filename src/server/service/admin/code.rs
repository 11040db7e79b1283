//! One-time admin registration codes.
//!
//! When the server starts without any admin account it issues a code and logs a
//! registration link containing it. Registering with role ADMIN requires presenting
//! that code. Codes live only in memory, expire after 60 seconds and can be redeemed
//! once.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Lifetime of an issued code.
pub const ADMIN_CODE_TTL: Duration = Duration::from_secs(60);

const CODE_LENGTH: usize = 32;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

struct IssuedCode {
    value: String,
    expires_at: Instant,
}

/// A code taken out of the service by [`AdminCodeService::claim`].
///
/// Hand it back with [`AdminCodeService::restore`] when the registration it was
/// claimed for fails.
pub struct ClaimedCode(IssuedCode);

/// Holder of the current admin registration code, shared through `AppState`.
#[derive(Clone)]
pub struct AdminCodeService {
    current: Arc<Mutex<Option<IssuedCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    /// Creates a service whose codes expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            ttl,
        }
    }

    /// Issues a fresh 32 character alphanumeric code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The code to embed in the registration link
    pub async fn issue(&self) -> String {
        let mut rng = rand::rng();
        let value: String = (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect();

        *self.current.lock().await = Some(IssuedCode {
            value: value.clone(),
            expires_at: Instant::now() + self.ttl,
        });

        value
    }

    /// Claims a presented code.
    ///
    /// A matching, unexpired code is taken out. An expired code is discarded whatever
    /// was presented; a wrong code leaves a valid one in place.
    ///
    /// # Returns
    /// - `Some(ClaimedCode)` - The code was valid and can no longer be claimed
    /// - `None` - No code issued, code expired, or mismatch
    pub async fn claim(&self, presented: &str) -> Option<ClaimedCode> {
        let mut current = self.current.lock().await;

        let issued = current.as_ref()?;

        if Instant::now() >= issued.expires_at {
            *current = None;
            return None;
        }

        if issued.value != presented {
            return None;
        }

        current.take().map(ClaimedCode)
    }

    /// Puts a claimed code back with its original expiry.
    ///
    /// Does nothing when the code has expired meanwhile or a newer code was issued.
    pub async fn restore(&self, claimed: ClaimedCode) {
        let mut current = self.current.lock().await;

        if current.is_none() && Instant::now() < claimed.0.expires_at {
            *current = Some(claimed.0);
        }
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
