//! Route, schedule, and bus-stop HTTP handlers

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::config::CompanyInfo;
use crate::domain::RouteCatalog;
use crate::interfaces::http::common::{error_reply, ApiResponse};

use super::dto::*;

/// Schedule sentinel for routes without a published departure time.
const SCHEDULE_UNAVAILABLE: &str = "N/A";

/// Application state for public catalog handlers.
#[derive(Clone)]
pub struct RoutesAppState {
    pub catalog: Arc<dyn RouteCatalog>,
    pub company: CompanyInfo,
}

#[utoipa::path(
    get,
    path = "/api/config",
    tag = "Routes",
    responses(
        (status = 200, description = "Catalog and company configuration", body = ApiResponse<ConfigResponse>)
    )
)]
pub async fn get_config(
    State(state): State<RoutesAppState>,
) -> Result<Json<ApiResponse<ConfigResponse>>, (StatusCode, Json<ApiResponse<ConfigResponse>>)> {
    let cities = state.catalog.cities().await.map_err(error_reply)?;
    let all_routes = state.catalog.list_routes().await.map_err(error_reply)?;
    let total_seats = state.catalog.total_seats().await.map_err(error_reply)?;

    let mut routes = BTreeMap::new();
    let mut schedules = BTreeMap::new();
    for route in &all_routes {
        routes.insert(route.name(), route.fare);
        if let Some(schedule) = &route.schedule {
            schedules.insert(route.name(), schedule.clone());
        }
    }

    let mut stops = BTreeMap::new();
    for city in &cities {
        if let Some(description) = state.catalog.stop_info(city).await.map_err(error_reply)? {
            stops.insert(city.clone(), description);
        }
    }

    Ok(Json(ApiResponse::success(ConfigResponse {
        cities,
        routes,
        schedules,
        stops,
        total_seats,
        company_name: state.company.name,
        contact_phone: state.company.contact_phone,
        contact_email: state.company.contact_email,
    })))
}

#[utoipa::path(
    post,
    path = "/api/route-info",
    tag = "Routes",
    request_body = RouteInfoRequest,
    responses(
        (status = 200, description = "Fare and schedule for the route", body = ApiResponse<RouteInfoResponse>),
        (status = 400, description = "Missing departure or destination"),
        (status = 404, description = "No direct route available")
    )
)]
pub async fn route_info(
    State(state): State<RoutesAppState>,
    Json(request): Json<RouteInfoRequest>,
) -> Result<Json<ApiResponse<RouteInfoResponse>>, (StatusCode, Json<ApiResponse<RouteInfoResponse>>)>
{
    let (Some(departure), Some(destination)) = (request.departure, request.destination) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Missing departure or destination")),
        ));
    };

    let fare = state
        .catalog
        .fare(&departure, &destination)
        .await
        .map_err(error_reply)?;

    let Some(fare) = fare else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("No direct route available")),
        ));
    };

    let schedule = state
        .catalog
        .schedule(&departure, &destination)
        .await
        .map_err(error_reply)?
        .unwrap_or_else(|| SCHEDULE_UNAVAILABLE.to_string());

    Ok(Json(ApiResponse::success(RouteInfoResponse {
        fare,
        schedule,
    })))
}

#[utoipa::path(
    get,
    path = "/api/schedules",
    tag = "Routes",
    responses(
        (status = 200, description = "Scheduled departures, sorted by route", body = ApiResponse<Vec<ScheduleEntry>>)
    )
)]
pub async fn list_schedules(
    State(state): State<RoutesAppState>,
) -> Result<
    Json<ApiResponse<Vec<ScheduleEntry>>>,
    (StatusCode, Json<ApiResponse<Vec<ScheduleEntry>>>),
> {
    let routes = state.catalog.list_routes().await.map_err(error_reply)?;

    // Unscheduled routes are omitted, matching the printed timetable.
    let entries: Vec<ScheduleEntry> = routes
        .into_iter()
        .filter_map(|route| {
            route.schedule.clone().map(|schedule| ScheduleEntry {
                route: route.name(),
                schedule,
                fare: route.fare,
            })
        })
        .collect();

    Ok(Json(ApiResponse::success(entries)))
}

#[utoipa::path(
    get,
    path = "/api/stops/{city}",
    tag = "Routes",
    params(("city" = String, Path, description = "City name")),
    responses(
        (status = 200, description = "Stop locations for the city", body = ApiResponse<StopInfoResponse>),
        (status = 404, description = "City not found")
    )
)]
pub async fn stop_info(
    State(state): State<RoutesAppState>,
    Path(city): Path<String>,
) -> Result<Json<ApiResponse<StopInfoResponse>>, (StatusCode, Json<ApiResponse<StopInfoResponse>>)>
{
    let stops = state.catalog.stop_info(&city).await.map_err(error_reply)?;

    let Some(stops) = stops else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("City not found")),
        ));
    };

    Ok(Json(ApiResponse::success(StopInfoResponse { city, stops })))
}
