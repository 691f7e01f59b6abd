#![allow(dead_code)]

use axum::Router;
use axum::extract::ConnectInfo;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use parking_lot::Mutex;
use shortcode_registry::application::services::LinkService;
use shortcode_registry::domain::Clock;
use shortcode_registry::domain::entities::NewUrlRecord;
use shortcode_registry::infrastructure::{Registry, RegistryConfig};
use shortcode_registry::routes::app_router;
use shortcode_registry::state::AppState;
use shortcode_registry::utils::code_generator::CodeGenerator;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const TEST_BASE_URL: &str = "http://short.test";
pub const TEST_CLIENT_IP: &str = "127.0.0.1";

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()),
        }
    }

    pub fn advance_minutes(&self, minutes: i64) {
        let mut now = self.now.lock();
        *now += TimeDelta::try_minutes(minutes).unwrap();
    }

    pub fn advance_seconds(&self, seconds: i64) {
        let mut now = self.now.lock();
        *now += TimeDelta::try_seconds(seconds).unwrap();
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Generator replaying a fixed list of codes, then repeating the last one.
pub struct ScriptedGenerator {
    codes: Mutex<VecDeque<String>>,
    last: Mutex<String>,
}

impl ScriptedGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            last: Mutex::new(codes.last().map(|c| c.to_string()).unwrap_or_default()),
        }
    }
}

impl CodeGenerator for ScriptedGenerator {
    fn generate(&self, _length: usize) -> String {
        match self.codes.lock().pop_front() {
            Some(code) => {
                *self.last.lock() = code.clone();
                code
            }
            None => self.last.lock().clone(),
        }
    }
}

pub fn new_record(url: &str, custom: Option<&str>, validity_minutes: i64) -> NewUrlRecord {
    NewUrlRecord {
        original_url: url.to_string(),
        custom_shortcode: custom.map(str::to_string),
        validity_minutes,
        base_url: TEST_BASE_URL.to_string(),
    }
}

pub fn registry_with_clock(clock: Arc<ManualClock>) -> Registry {
    Registry::with_parts(
        RegistryConfig::default(),
        clock,
        Arc::new(shortcode_registry::utils::code_generator::RandomCodeGenerator),
    )
}

pub fn create_state_with_registry(registry: Registry) -> AppState {
    let link_service = Arc::new(LinkService::new(Arc::new(registry), 30, 5));
    AppState::new(link_service, Some(TEST_BASE_URL.to_string()))
}

pub fn create_test_state() -> AppState {
    create_state_with_registry(Registry::default())
}

/// Full application router with a fixed peer address.
pub fn test_app(state: AppState) -> Router {
    app_router(
        state,
        &[
            "http://localhost:3000".to_string(),
            "http://localhost:5173".to_string(),
        ],
    )
    .layer(MockConnectInfoLayer)
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = format!("{TEST_CLIENT_IP}:12345").parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
