use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;

use super::types::*;
use super::ApiError;

pub type Result<T> = std::result::Result<T, ApiError>;

const INDEX_PAGE: &str = r#"Homepage<br/>
<br/>Available paths:<br/>
<a href='/api/v1.0/precipitation'>/api/v1.0/precipitation</a><br/>
<a href='/api/v1.0/stations'>/api/v1.0/stations</a><br/>
<a href='/api/v1.0/tobs'>/api/v1.0/tobs</a><br/>
<br/><br/>Enter date ranges below (YYYY-MM-DD):<br/><br/>
/api/v1.0/start-date<br/>
/api/v1.0/start-date/end-date<br/>
<br/><br/><br/>Example:<br/>
<a href='/api/v1.0/2012-06-12'>/api/v1.0/2012-06-12</a><br/>
<a href='/api/v1.0/2012-06-12/2016-05-18'>/api/v1.0/2012-06-12/2016-05-18</a><br/>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn precipitation(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PrecipitationRecord>>> {
    // The index page advertises the last 12 months, but no date filter is
    // applied and the whole table comes back. Kept as-is for compatibility;
    // the discrepancy is tracked in DESIGN.md.
    let rows: Vec<(String, Option<f64>)> =
        sqlx::query_as("SELECT date, precipitation FROM measurement;")
            .fetch_all(&pool)
            .await?;

    let records = rows
        .into_iter()
        .map(|(date, precipitation)| PrecipitationRecord {
            date,
            precipitation,
        })
        .collect();

    Ok(Json(records))
}

pub async fn stations(State(pool): State<SqlitePool>) -> Result<Json<Vec<serde_json::Value>>> {
    let rows: Vec<(i64, String, String)> =
        sqlx::query_as("SELECT id, station_id, name FROM station;")
            .fetch_all(&pool)
            .await?;

    // One flat array, three values per station. Existing consumers depend on
    // this shape; new consumers should not imitate it.
    let mut values = Vec::with_capacity(rows.len() * 3);
    for (row_id, station_id, name) in rows {
        values.push(serde_json::Value::from(row_id));
        values.push(serde_json::Value::from(station_id));
        values.push(serde_json::Value::from(name));
    }

    Ok(Json(values))
}

pub async fn temperature_observations(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<TemperatureObservation>>> {
    // 1. Station with the most observations. Ties fall to whichever group
    //    the store yields first.
    let most_active: Option<String> = sqlx::query_scalar(
        "SELECT station_id FROM measurement
         GROUP BY station_id
         ORDER BY COUNT(station_id) DESC
         LIMIT 1;",
    )
    .fetch_optional(&pool)
    .await?;

    let Some(station_id) = most_active else {
        return Err(ApiError::DataUnavailable(
            "dataset has no observations".to_string(),
        ));
    };

    // 2. Latest observation date across all stations.
    let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement;")
        .fetch_one(&pool)
        .await?;

    let latest = latest.ok_or_else(|| {
        ApiError::DataUnavailable("dataset has no observations".to_string())
    })?;

    // 3. Trailing window is exactly 365 days, not one calendar year.
    let cutoff = trailing_year_start(&latest)?;

    // 4. That station's observations inside the window, oldest first.
    let rows: Vec<(String, f64)> = sqlx::query_as(
        "SELECT date, temperature FROM measurement
         WHERE station_id = ?1 AND date >= ?2
         ORDER BY date ASC;",
    )
    .bind(&station_id)
    .bind(&cutoff)
    .fetch_all(&pool)
    .await?;

    let observations = rows
        .into_iter()
        .map(|(date, temperature)| TemperatureObservation { date, temperature })
        .collect();

    Ok(Json(observations))
}

pub async fn summary_from_start(
    State(pool): State<SqlitePool>,
    Path(SummaryStartPath { start }): Path<SummaryStartPath>,
) -> Result<Json<Vec<TemperatureSummary>>> {
    if !date_exists(&pool, &start).await? {
        return Err(ApiError::DateNotFound(format!(
            "Start Date on {start} not found."
        )));
    }

    let summary = temperature_summary(&pool, &start, None).await?;

    Ok(Json(vec![summary]))
}

pub async fn summary_for_range(
    State(pool): State<SqlitePool>,
    Path(SummaryRangePath { start, end }): Path<SummaryRangePath>,
) -> Result<Json<Vec<TemperatureSummary>>> {
    if !date_exists(&pool, &start).await? || !date_exists(&pool, &end).await? {
        return Err(ApiError::DateNotFound(format!(
            "Start Date on {start} or End Date {end} not found."
        )));
    }

    let summary = temperature_summary(&pool, &start, Some(&end)).await?;

    Ok(Json(vec![summary]))
}

// Exact string membership against the date column. A malformed date string
// fails the same way as a well-formed date with no observations.
async fn date_exists(pool: &SqlitePool, date: &str) -> Result<bool> {
    let present: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM measurement WHERE date = ?1);")
            .bind(date)
            .fetch_one(pool)
            .await?;

    Ok(present)
}

async fn temperature_summary(
    pool: &SqlitePool,
    start: &str,
    end: Option<&str>,
) -> Result<TemperatureSummary> {
    let query = if end.is_some() {
        "SELECT MIN(temperature), AVG(temperature), MAX(temperature)
         FROM measurement
         WHERE date >= ?1 AND date <= ?2;"
    } else {
        "SELECT MIN(temperature), AVG(temperature), MAX(temperature)
         FROM measurement
         WHERE date >= ?1;"
    };

    let mut aggregate =
        sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>)>(query).bind(start);

    if let Some(end) = end {
        aggregate = aggregate.bind(end);
    }

    // An ungrouped aggregate always yields exactly one row; its values are
    // NULL only when no observation matched the filter.
    let (minimum, average, maximum) = aggregate.fetch_one(pool).await?;

    match (minimum, average, maximum) {
        (Some(minimum), Some(average), Some(maximum)) => Ok(TemperatureSummary {
            minimum,
            average,
            maximum,
        }),
        _ => Err(ApiError::DataUnavailable(
            "no observations in the requested range".to_string(),
        )),
    }
}

// Exactly 365 days back, so the window loses a day whenever it spans a
// February 29th.
fn trailing_year_start(latest: &str) -> Result<String> {
    let latest = NaiveDate::parse_from_str(latest, "%Y-%m-%d").map_err(|e| {
        ApiError::DataUnavailable(format!("latest observation date is not ISO formatted: {e}"))
    })?;

    Ok((latest - Duration::days(365)).format("%Y-%m-%d").to_string())
}
