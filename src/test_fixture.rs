//! Stub query service and request helpers shared by handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{HeaderValue, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::app::build_router;
use crate::config::Config;
use crate::models::{Location, Path, Point, Segment};
use crate::query::QueryService;
use crate::state::AppState;

/// Fixed graph with `CSE` and `MGH` connected through one junction and an
/// isolated `ISLAND`. Records every call it receives.
pub struct StubQueryService {
    locations: Vec<Location>,
    pub exists_checks: Mutex<Vec<String>>,
    pub path_lookups: AtomicUsize,
}

impl QueryService for StubQueryService {
    fn all_locations(&self) -> Vec<Location> {
        self.locations.clone()
    }

    fn exists(&self, short_name: &str) -> bool {
        self.exists_checks
            .lock()
            .unwrap()
            .push(short_name.to_string());
        self.locations.iter().any(|l| l.short_name == short_name)
    }

    fn shortest_path(&self, src: &str, dest: &str) -> Option<Path> {
        self.path_lookups.fetch_add(1, Ordering::SeqCst);
        let find = |name: &str| self.locations.iter().find(|l| l.short_name == name);
        let (from, to) = (find(src)?, find(dest)?);

        if from == to {
            return Some(Path {
                start: from.point(),
                path: vec![],
                cost: 0.0,
            });
        }
        if from.short_name == "ISLAND" || to.short_name == "ISLAND" {
            return None;
        }

        let junction = Point {
            x: (from.x + to.x) / 2.0,
            y: from.y,
        };
        Some(Path {
            start: from.point(),
            path: vec![
                Segment {
                    start: from.point(),
                    end: junction,
                    cost: 10.0,
                },
                Segment {
                    start: junction,
                    end: to.point(),
                    cost: 15.0,
                },
            ],
            cost: 25.0,
        })
    }
}

pub fn sample_service() -> StubQueryService {
    let location = |short_name: &str, long_name: &str, x: f64, y: f64| Location {
        short_name: short_name.to_string(),
        long_name: long_name.to_string(),
        x,
        y,
    };

    StubQueryService {
        locations: vec![
            location(
                "CSE",
                "Paul G. Allen Center for Computer Science & Engineering",
                2259.7863,
                1715.5089,
            ),
            location("MGH", "Mary Gates Hall", 1876.6176, 1565.3107),
            location("ISLAND", "Lake Washington Boat House", 3812.0, 2643.5),
        ],
        exists_checks: Mutex::new(Vec::new()),
        path_lookups: AtomicUsize::new(0),
    }
}

pub fn sample_state(
    service: Arc<dyn QueryService>,
    cors_allow_origin: Option<HeaderValue>,
) -> AppState {
    let mut config = Config::from_vars(|_| None).unwrap();
    config.cors_allow_origin = cors_allow_origin;

    AppState {
        query_service: service,
        config: Arc::new(config),
    }
}

/// Router over a fresh stub, plus a handle to inspect the calls it saw
pub fn sample_app() -> (Router, Arc<StubQueryService>) {
    let service = Arc::new(sample_service());
    (build_router(sample_state(service.clone(), None)), service)
}

/// Send a GET request and decode the body as JSON (`Null` when empty)
pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
