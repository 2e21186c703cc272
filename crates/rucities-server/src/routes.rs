//! HTTP routes.
//!
//! Every handler parses its query string, calls one core query, and wraps
//! the result in the `{status, message}` envelope.

use crate::error::{Result, ServerError};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use rucities_core::api::{ComparisonView, PageView, PlaceView};
use rucities_core::{CitySearch, DbStats, GeoError};
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

type Params = Query<HashMap<String, String>>;

const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Response body shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(message: T) -> Self {
        Envelope {
            status: "success",
            message: Some(message),
        }
    }
}

impl Envelope<String> {
    pub fn failed(message: String) -> Self {
        Envelope {
            status: "failed",
            message: Some(message),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/api/v1/info_by_id", get(info_by_id))
        .route("/api/v1/cities_page", get(cities_page))
        .route("/api/v1/compare", get(compare))
        .route("/api/v1/city", get(city_by_name))
        .route("/api/v1/search", get(search))
        .route("/api/v1/stats", get(stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle GET /
async fn handle_root() -> Json<Envelope<()>> {
    Json(Envelope {
        status: "success",
        message: None,
    })
}

/// Handle GET /api/v1/info_by_id?id=
async fn info_by_id(
    State(state): State<Arc<AppState>>,
    Query(params): Params,
) -> Result<Json<Envelope<PlaceView>>> {
    let id: i64 = required(&params, "id")?;
    let place = state.store.find_by_id(id)?;
    Ok(Json(Envelope::success(PlaceView::from(place))))
}

/// Handle GET /api/v1/cities_page?page=&count=
async fn cities_page(
    State(state): State<Arc<AppState>>,
    Query(params): Params,
) -> Result<Json<Envelope<PageView>>> {
    let page = non_negative(required::<i64>(&params, "page")?, "page")?;
    let count = non_negative(required::<i64>(&params, "count")?, "count")?;
    let count = state.config.check_page_size(count).ok_or_else(|| {
        GeoError::invalid_argument(format!(
            "count must not exceed {}",
            state.config.max_page_size
        ))
    })?;

    let page = state.store.page(page, count)?;
    Ok(Json(Envelope::success(PageView::from(&page))))
}

/// Handle GET /api/v1/compare?city1=&city2=
async fn compare(
    State(state): State<Arc<AppState>>,
    Query(params): Params,
) -> Result<Json<Envelope<ComparisonView>>> {
    let city1: String = required(&params, "city1")?;
    let city2: String = required(&params, "city2")?;
    let cmp = state.store.compare_by_names(&city1, &city2)?;
    Ok(Json(Envelope::success(ComparisonView::from(&cmp))))
}

/// Handle GET /api/v1/city?name=
async fn city_by_name(
    State(state): State<Arc<AppState>>,
    Query(params): Params,
) -> Result<Json<Envelope<PlaceView>>> {
    let name: String = required(&params, "name")?;
    let place = state.store.resolve_by_name(&name)?;
    Ok(Json(Envelope::success(PlaceView::from(place))))
}

/// Handle GET /api/v1/search?q=&limit=
async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Params,
) -> Result<Json<Envelope<Vec<PlaceView>>>> {
    let q: String = required(&params, "q")?;
    let limit = match optional::<i64>(&params, "limit")? {
        Some(l) => non_negative(l, "limit")?,
        None => DEFAULT_SEARCH_LIMIT,
    };
    // Over-large limits are clamped rather than rejected.
    let limit = state
        .config
        .check_page_size(limit)
        .unwrap_or(state.config.max_page_size);

    let hits = state.store.find_by_substring(&q, limit);
    Ok(Json(Envelope::success(
        hits.into_iter().map(PlaceView::from).collect(),
    )))
}

/// Handle GET /api/v1/stats
async fn stats(State(state): State<Arc<AppState>>) -> Json<Envelope<DbStats>> {
    Json(Envelope::success(state.store.stats()))
}

// -----------------------------------------------------------------------------
// Parameter helpers
// -----------------------------------------------------------------------------

fn required<T: FromStr>(params: &HashMap<String, String>, name: &str) -> Result<T> {
    optional(params, name)?
        .ok_or_else(|| ServerError::bad_request(format!("Parameter {name} is not defined")))
}

fn optional<T: FromStr>(params: &HashMap<String, String>, name: &str) -> Result<Option<T>> {
    match params.get(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            ServerError::bad_request(format!("Parameter {name} has an invalid value: {raw:?}"))
        }),
    }
}

fn non_negative(value: i64, name: &str) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        ServerError::from(GeoError::invalid_argument(format!(
            "{name} must not be negative, got {value}"
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn required_param_reports_its_name() {
        let err = required::<i64>(&params(&[]), "id").unwrap_err();
        assert!(matches!(&err, ServerError::BadRequest(m) if m.contains("id")));

        let err = required::<i64>(&params(&[("id", "abc")]), "id").unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));

        assert_eq!(required::<i64>(&params(&[("id", " 42 ")]), "id").unwrap(), 42);
    }

    #[test]
    fn negative_values_are_invalid_arguments() {
        let err = non_negative(-1, "page").unwrap_err();
        assert!(matches!(err, ServerError::Geo(GeoError::InvalidArgument(_))));
        assert_eq!(non_negative(3, "page").unwrap(), 3);
    }
}
