use axum::routing::get;

use super::endpoints;
use super::State;

pub fn router(state: State) -> axum::Router {
    axum::Router::new()
        .route("/", get(endpoints::index))
        .route("/api/v1.0/precipitation", get(endpoints::precipitation))
        .route("/api/v1.0/stations", get(endpoints::stations))
        .route("/api/v1.0/tobs", get(endpoints::temperature_observations))
        .route("/api/v1.0/:start", get(endpoints::summary_from_start))
        .route("/api/v1.0/:start/:end", get(endpoints::summary_for_range))
        .with_state(state)
}
