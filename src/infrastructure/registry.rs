//! In-memory shortcode registry.
//!
//! Owns both indexes over [`UrlRecord`] behind a single mutex. Every public
//! operation takes the lock once and holds it until it returns, which makes
//! the duplicate check, code selection and double insertion of `create` one
//! atomic step, and likewise the counter bump and history append of
//! `resolve`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::entities::{ClickEvent, NewUrlRecord, UrlRecord, UrlStats};
use crate::domain::repositories::UrlRepository;
use crate::domain::{Clock, RegistryError, SystemClock};
use crate::utils::code_generator::{
    CodeGenerator, DEFAULT_CODE_LENGTH, RandomCodeGenerator, is_reserved_code,
    validate_custom_code,
};

/// Default number of random candidates tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Tuning knobs for random shortcode allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    pub code_length: usize,
    pub max_attempts: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// The two indexes plus the insertion order used for listing.
#[derive(Debug, Default)]
struct Indexes {
    by_shortcode: HashMap<String, UrlRecord>,
    by_original_url: HashMap<String, String>,
    insertion_order: Vec<String>,
}

impl Indexes {
    /// Active record currently registered for `original_url`, if any.
    fn active_for_url(&self, original_url: &str, now: DateTime<Utc>) -> Option<&UrlRecord> {
        let shortcode = self.by_original_url.get(original_url)?;
        self.by_shortcode
            .get(shortcode)
            .filter(|record| !record.is_expired_at(now))
    }

    fn insert(&mut self, record: UrlRecord) {
        self.by_original_url
            .insert(record.original_url.clone(), record.shortcode.clone());
        self.insertion_order.push(record.shortcode.clone());
        self.by_shortcode.insert(record.shortcode.clone(), record);
    }

    fn remove(&mut self, shortcode: &str) -> Option<UrlRecord> {
        let record = self.by_shortcode.remove(shortcode)?;

        // A newer record may own the back-reference after this one expired.
        if self
            .by_original_url
            .get(&record.original_url)
            .is_some_and(|owner| owner == shortcode)
        {
            self.by_original_url.remove(&record.original_url);
        }

        self.insertion_order.retain(|code| code != shortcode);
        Some(record)
    }
}

/// In-memory implementation of [`UrlRepository`].
///
/// Shared across request tasks behind an `Arc`. Methods are synchronous and
/// bounded; the lock is never held across an `.await`.
pub struct Registry {
    indexes: Mutex<Indexes>,
    config: RegistryConfig,
    clock: Arc<dyn Clock>,
    generator: Arc<dyn CodeGenerator>,
}

impl Registry {
    /// Creates an empty registry using wall-clock time and random codes.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_parts(config, Arc::new(SystemClock), Arc::new(RandomCodeGenerator))
    }

    /// Creates an empty registry with an explicit time source and generator.
    pub fn with_parts(
        config: RegistryConfig,
        clock: Arc<dyn Clock>,
        generator: Arc<dyn CodeGenerator>,
    ) -> Self {
        Self {
            indexes: Mutex::new(Indexes::default()),
            config,
            clock,
            generator,
        }
    }

    /// Picks a random code not present in `indexes`.
    fn generate_unique_code(&self, indexes: &Indexes) -> Result<String, RegistryError> {
        for attempt in 1..=self.config.max_attempts {
            let code = self.generator.generate(self.config.code_length);

            if !indexes.by_shortcode.contains_key(&code) && !is_reserved_code(&code) {
                return Ok(code);
            }

            debug!(attempt, "Shortcode collision, retrying");
        }

        Err(RegistryError::ResourceExhausted {
            attempts: self.config.max_attempts,
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

/// Computes `created_at + validity_minutes` without panicking on overflow.
fn expiry(created_at: DateTime<Utc>, validity_minutes: i64) -> Result<DateTime<Utc>, RegistryError> {
    TimeDelta::try_minutes(validity_minutes)
        .and_then(|validity| created_at.checked_add_signed(validity))
        .ok_or(RegistryError::InvalidValidity {
            minutes: validity_minutes,
        })
}

fn short_url(base_url: &str, shortcode: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), shortcode)
}

impl UrlRepository for Registry {
    fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, RegistryError> {
        if let Some(custom) = &new_record.custom_shortcode {
            validate_custom_code(custom)?;
        }

        let mut indexes = self.indexes.lock();
        let now = self.clock.now();

        if let Some(existing) = indexes.active_for_url(&new_record.original_url, now) {
            return Ok(existing.clone());
        }

        let shortcode = match new_record.custom_shortcode {
            Some(custom) => {
                if indexes.by_shortcode.contains_key(&custom) {
                    return Err(RegistryError::DuplicateShortcode(custom));
                }
                custom
            }
            None => self.generate_unique_code(&indexes)?,
        };

        let expires_at = expiry(now, new_record.validity_minutes)?;

        let record = UrlRecord::new(
            shortcode.clone(),
            new_record.original_url,
            short_url(&new_record.base_url, &shortcode),
            now,
            expires_at,
        );

        indexes.insert(record.clone());
        Ok(record)
    }

    fn resolve(
        &self,
        shortcode: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<String, RegistryError> {
        let mut indexes = self.indexes.lock();
        let now = self.clock.now();

        let record = indexes
            .by_shortcode
            .get_mut(shortcode)
            .filter(|record| !record.is_expired_at(now))
            .ok_or_else(|| RegistryError::NotFound(shortcode.to_string()))?;

        record.record_click(ClickEvent::new(now, ip_address, user_agent));
        Ok(record.original_url.clone())
    }

    fn stats(&self, shortcode: &str) -> Result<UrlStats, RegistryError> {
        let indexes = self.indexes.lock();
        let now = self.clock.now();

        indexes
            .by_shortcode
            .get(shortcode)
            .map(|record| UrlStats::from_record(record, now))
            .ok_or_else(|| RegistryError::NotFound(shortcode.to_string()))
    }

    fn list_all(&self) -> Vec<UrlStats> {
        let indexes = self.indexes.lock();
        let now = self.clock.now();

        indexes
            .insertion_order
            .iter()
            .filter_map(|code| indexes.by_shortcode.get(code))
            .map(|record| UrlStats::from_record(record, now))
            .collect()
    }

    fn delete(&self, shortcode: &str) -> Result<(), RegistryError> {
        self.indexes
            .lock()
            .remove(shortcode)
            .map(|_| ())
            .ok_or_else(|| RegistryError::NotFound(shortcode.to_string()))
    }

    fn count(&self) -> usize {
        self.indexes.lock().by_shortcode.len()
    }
}
