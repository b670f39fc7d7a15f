//! API router
//!
//! Wires the per-resource modules together, gates the operator routes
//! behind the credential check, and serves the OpenAPI document.

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::{Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::application::{BookingService, StatsService};
use crate::auth::CredentialGate;
use crate::config::CompanyInfo;
use crate::domain::RouteCatalog;

use super::middleware::admin_auth;
use super::modules::admin::{self, AdminAppState};
use super::modules::bookings::{self, BookingAppState};
use super::modules::routes::{self, RoutesAppState};
use super::modules::{health, metrics};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chikukwa Bus Booking API",
        description = "Reservation service for the Chikukwa intercity bus network"
    ),
    paths(
        bookings::handlers::create_booking,
        bookings::handlers::get_booking,
        bookings::handlers::cancel_booking,
        routes::handlers::get_config,
        routes::handlers::route_info,
        routes::handlers::list_schedules,
        routes::handlers::stop_info,
        admin::handlers::login,
        admin::handlers::list_bookings,
        admin::handlers::stats,
        admin::handlers::list_routes,
        admin::handlers::update_fare,
        health::handlers::health,
        metrics::handlers::render,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Bookings", description = "Create, look up, and cancel bookings"),
        (name = "Routes", description = "Routes, schedules, and bus stops"),
        (name = "Admin", description = "Operator endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
        openapi
            .components
            .get_or_insert_with(Default::default)
            .add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
            );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[allow(clippy::too_many_arguments)]
pub fn create_api_router(
    booking: Arc<BookingService>,
    stats: Arc<StatsService>,
    catalog: Arc<dyn RouteCatalog>,
    gate: Arc<dyn CredentialGate>,
    company: CompanyInfo,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let booking_state = BookingAppState {
        service: booking.clone(),
    };
    let routes_state = RoutesAppState {
        catalog: catalog.clone(),
        company,
    };
    let admin_state = AdminAppState {
        booking,
        stats,
        catalog,
        gate: gate.clone(),
    };

    let public = Router::new()
        .route("/api/config", get(routes::handlers::get_config))
        .route("/api/route-info", post(routes::handlers::route_info))
        .route("/api/schedules", get(routes::handlers::list_schedules))
        .route("/api/stops/{city}", get(routes::handlers::stop_info))
        .with_state(routes_state);

    let booking_routes = Router::new()
        .route("/api/bookings", post(bookings::handlers::create_booking))
        .route(
            "/api/bookings/{ticket_id}",
            get(bookings::handlers::get_booking).delete(bookings::handlers::cancel_booking),
        )
        .with_state(booking_state);

    let admin_open = Router::new()
        .route("/api/admin/login", post(admin::handlers::login))
        .with_state(admin_state.clone());

    let admin_gated = Router::new()
        .route("/api/admin/bookings", get(admin::handlers::list_bookings))
        .route("/api/admin/stats", get(admin::handlers::stats))
        .route(
            "/api/admin/routes",
            get(admin::handlers::list_routes).put(admin::handlers::update_fare),
        )
        .route_layer(from_fn_with_state(gate, admin_auth))
        .with_state(admin_state);

    let operational = Router::new()
        .route("/api/health", get(health::handlers::health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(
            Router::new()
                .route("/metrics", get(metrics::handlers::render))
                .with_state(prometheus_handle),
        );

    Router::new()
        .merge(public)
        .merge(booking_routes)
        .merge(admin_open)
        .merge(admin_gated)
        .merge(operational)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
