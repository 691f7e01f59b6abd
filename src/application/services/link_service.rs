//! Link creation, resolution and analytics service.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::RegistryError;
use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::validate_custom_code;
use crate::utils::url_validator::validate_target_url;

/// Validity applied when a request does not specify one.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Maximum number of items accepted by a single bulk request.
pub const DEFAULT_BULK_LIMIT: usize = 5;

/// A single shortening request as accepted by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLink {
    pub original_url: String,
    pub custom_shortcode: Option<String>,
    pub validity_minutes: Option<i64>,
}

/// Service in front of the shortcode registry.
///
/// Pre-checks targets and custom codes, applies the default validity,
/// implements bulk semantics, and emits logs and counters for every
/// registry operation.
pub struct LinkService<R: UrlRepository> {
    repository: Arc<R>,
    default_validity_minutes: i64,
    bulk_limit: usize,
}

impl<R: UrlRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, default_validity_minutes: i64, bulk_limit: usize) -> Self {
        Self {
            repository,
            default_validity_minutes,
            bulk_limit,
        }
    }

    /// Creates a short link, or returns the active one already registered for
    /// the same URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - URL is not an absolute HTTP(S) URL
    /// - Custom shortcode is malformed or already taken
    /// - Validity is out of range
    ///
    /// Returns [`AppError::Internal`] if no free shortcode could be generated.
    pub fn create_short_link(
        &self,
        request: CreateLink,
        base_url: &str,
    ) -> Result<UrlRecord, AppError> {
        validate_target_url(&request.original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(custom) = &request.custom_shortcode {
            validate_custom_code(custom)?;
        }

        let record = self.repository.create(NewUrlRecord {
            original_url: request.original_url,
            custom_shortcode: request.custom_shortcode,
            validity_minutes: request
                .validity_minutes
                .unwrap_or(self.default_validity_minutes),
            base_url: base_url.to_string(),
        })?;

        info!(
            "Created short URL: {} for {}",
            record.shortcode, record.original_url
        );
        metrics::counter!("links_created_total").increment(1);

        Ok(record)
    }

    /// Creates several short links, skipping the ones that fail.
    ///
    /// # Batch Processing
    ///
    /// Items are converted and attempted independently in order. Items that
    /// fail conversion or creation are logged and left out of the result; an
    /// unexpected failure aborts the batch. The size limit counts every item,
    /// valid or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the batch is empty, larger than the
    /// configured limit, or no item could be created.
    pub fn create_bulk<T>(
        &self,
        requests: Vec<T>,
        base_url: &str,
    ) -> Result<Vec<UrlRecord>, AppError>
    where
        T: TryInto<CreateLink>,
        T::Error: Into<AppError>,
    {
        if requests.is_empty() {
            return Err(AppError::bad_request(
                "At least one URL is required",
                json!({}),
            ));
        }

        if requests.len() > self.bulk_limit {
            return Err(AppError::bad_request(
                format!("Cannot create more than {} URLs at once", self.bulk_limit),
                json!({ "limit": self.bulk_limit, "provided": requests.len() }),
            ));
        }

        let mut created = Vec::with_capacity(requests.len());

        for item in requests {
            let request = match item.try_into() {
                Ok(request) => request,
                Err(err) => {
                    let err: AppError = err.into();
                    error!("Skipping invalid bulk item: {}", err);
                    continue;
                }
            };
            let original_url = request.original_url.clone();

            match self.create_short_link(request, base_url) {
                Ok(record) => created.push(record),
                Err(err @ AppError::Internal { .. }) => return Err(err),
                Err(err) => {
                    error!("Error creating short URL for {}: {}", original_url, err);
                }
            }
        }

        if created.is_empty() {
            return Err(AppError::bad_request("No URLs could be created", json!({})));
        }

        Ok(created)
    }

    /// Resolves a shortcode to its target, recording a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode is absent or expired.
    pub fn resolve(
        &self,
        shortcode: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<String, AppError> {
        let client_ip = ip_address.clone().unwrap_or_else(|| "-".to_string());

        match self.repository.resolve(shortcode, ip_address, user_agent) {
            Ok(original_url) => {
                info!(
                    "Redirecting {} to {} from IP: {}",
                    shortcode, original_url, client_ip
                );
                metrics::counter!("link_clicks_total").increment(1);
                Ok(original_url)
            }
            Err(RegistryError::NotFound(_)) => {
                warn!("Shortcode not found or expired: {}", shortcode);
                metrics::counter!("link_misses_total").increment(1);
                Err(AppError::not_found(
                    "Short URL not found or expired",
                    json!({ "shortcode": shortcode }),
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns statistics for a shortcode, expired ones included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode is absent.
    pub fn stats(&self, shortcode: &str) -> Result<UrlStats, AppError> {
        let stats = self.repository.stats(shortcode)?;
        info!("Retrieved stats for shortcode: {}", shortcode);
        Ok(stats)
    }

    /// Returns statistics for every stored record.
    pub fn list_all(&self) -> Vec<UrlStats> {
        let urls = self.repository.list_all();
        info!("Retrieved {} URLs", urls.len());
        urls
    }

    /// Deletes a shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode is absent.
    pub fn delete(&self, shortcode: &str) -> Result<(), AppError> {
        self.repository.delete(shortcode)?;
        info!("Deleted shortcode: {}", shortcode);
        metrics::counter!("links_deleted_total").increment(1);
        Ok(())
    }

    /// Number of stored records.
    pub fn count(&self) -> usize {
        self.repository.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::{Duration, Utc};

    const BASE: &str = "http://short.test";

    fn record_for(new_record: &NewUrlRecord) -> UrlRecord {
        let code = new_record
            .custom_shortcode
            .clone()
            .unwrap_or_else(|| "abc123".to_string());
        let now = Utc::now();
        UrlRecord::new(
            code.clone(),
            new_record.original_url.clone(),
            format!("{}/{}", new_record.base_url, code),
            now,
            now + Duration::minutes(new_record.validity_minutes),
        )
    }

    fn request(url: &str, custom: Option<&str>) -> CreateLink {
        CreateLink {
            original_url: url.to_string(),
            custom_shortcode: custom.map(str::to_string),
            validity_minutes: None,
        }
    }

    fn service(mock: MockUrlRepository) -> LinkService<MockUrlRepository> {
        LinkService::new(Arc::new(mock), DEFAULT_VALIDITY_MINUTES, DEFAULT_BULK_LIMIT)
    }

    #[test]
    fn test_create_short_link_applies_defaults() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_create()
            .withf(|new_record| {
                new_record.validity_minutes == DEFAULT_VALIDITY_MINUTES
                    && new_record.base_url == BASE
                    && new_record.custom_shortcode.is_none()
            })
            .times(1)
            .returning(|new_record| Ok(record_for(&new_record)));

        let record = service(mock_repo)
            .create_short_link(request("https://example.com", None), BASE)
            .unwrap();

        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.short_url, "http://short.test/abc123");
    }

    #[test]
    fn test_create_short_link_keeps_explicit_validity() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_create()
            .withf(|new_record| new_record.validity_minutes == -1)
            .times(1)
            .returning(|new_record| Ok(record_for(&new_record)));

        let mut req = request("https://example.com", None);
        req.validity_minutes = Some(-1);

        assert!(service(mock_repo).create_short_link(req, BASE).is_ok());
    }

    #[test]
    fn test_create_short_link_invalid_url() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_create().times(0);

        let result = service(mock_repo).create_short_link(request("not-a-url", None), BASE);

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[test]
    fn test_create_short_link_invalid_custom_code() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_create().times(0);

        let result =
            service(mock_repo).create_short_link(request("https://example.com", Some("ab")), BASE);

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("between 3 and 20"));
    }

    #[test]
    fn test_create_short_link_duplicate_code() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(RegistryError::DuplicateShortcode("promo1".to_string())));

        let result = service(mock_repo)
            .create_short_link(request("https://example.com", Some("promo1")), BASE);

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Custom shortcode already exists");
    }

    #[test]
    fn test_create_short_link_exhaustion_is_internal() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(RegistryError::ResourceExhausted { attempts: 10 }));

        let result = service(mock_repo).create_short_link(request("https://example.com", None), BASE);

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[test]
    fn test_bulk_skips_failed_items() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_create()
            .times(2)
            .returning(|new_record| {
                if new_record.original_url == "https://taken.com" {
                    Err(RegistryError::DuplicateShortcode("promo1".to_string()))
                } else {
                    Ok(record_for(&new_record))
                }
            });

        let created = service(mock_repo)
            .create_bulk(
                vec![
                    request("https://ok.com", None),
                    request("not-a-url", None),
                    request("https://taken.com", Some("promo1")),
                ],
                BASE,
            )
            .unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].original_url, "https://ok.com");
    }

    #[test]
    fn test_bulk_fails_when_nothing_created() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_create().times(0);

        let result = service(mock_repo).create_bulk(
            vec![request("not-a-url", None), request("ftp://x.com", None)],
            BASE,
        );

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "No URLs could be created");
    }

    #[test]
    fn test_bulk_rejects_empty_batch() {
        let mock_repo = MockUrlRepository::new();

        let err = service(mock_repo)
            .create_bulk(Vec::<CreateLink>::new(), BASE)
            .unwrap_err();
        assert_eq!(err.to_string(), "At least one URL is required");
    }

    #[test]
    fn test_bulk_rejects_oversized_batch() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_create().times(0);

        let requests: Vec<CreateLink> = (0..6)
            .map(|i| request(&format!("https://example.com/{i}"), None))
            .collect();

        let err = service(mock_repo).create_bulk(requests, BASE).unwrap_err();
        assert_eq!(err.to_string(), "Cannot create more than 5 URLs at once");
    }

    #[test]
    fn test_bulk_aborts_on_internal_error() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(RegistryError::ResourceExhausted { attempts: 10 }));

        let result = service(mock_repo).create_bulk(
            vec![
                request("https://a.com", None),
                request("https://b.com", None),
            ],
            BASE,
        );

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[test]
    fn test_resolve_passes_client_metadata() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_resolve()
            .withf(|code, ip, ua| {
                code == "abc123"
                    && ip.as_deref() == Some("10.0.0.1")
                    && ua.as_deref() == Some("curl/8.0")
            })
            .times(1)
            .returning(|_, _, _| Ok("https://example.com".to_string()));

        let url = service(mock_repo)
            .resolve(
                "abc123",
                Some("10.0.0.1".to_string()),
                Some("curl/8.0".to_string()),
            )
            .unwrap();

        assert_eq!(url, "https://example.com");
    }

    #[test]
    fn test_resolve_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_resolve()
            .times(1)
            .returning(|code, _, _| Err(RegistryError::NotFound(code.to_string())));

        let err = service(mock_repo).resolve("gone", None, None).unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Short URL not found or expired");
    }

    #[test]
    fn test_stats_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_stats()
            .times(1)
            .returning(|code| Err(RegistryError::NotFound(code.to_string())));

        let err = service(mock_repo).stats("missing").unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_delete_and_count_delegate() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_delete()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(()));
        mock_repo.expect_count().times(1).return_const(0usize);

        let service = service(mock_repo);
        assert!(service.delete("abc123").is_ok());
        assert_eq!(service.count(), 0);
    }
}
