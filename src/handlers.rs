use crate::errors::AppError;
use crate::export::{serialize, XmlDownload};
use crate::models::{DateRange, ViewResponse, WeekRequest};
use crate::state::{AppState, ViewState};
use crate::storage::persist_export;
use crate::ui::render_index;
use crate::week::{today, week_range, weeks_in_month};
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection, QueryRejection},
        Query, State,
    },
    response::{Html, Redirect},
    Form, Json,
};
use chrono::NaiveDate;
use tracing::{error, info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.view.lock().await.clone();
    Html(render_index(&view, weeks_in_month(today())))
}

pub async fn get_view(State(state): State<AppState>) -> Json<ViewResponse> {
    let view = state.view.lock().await;
    Json(view.to_response())
}

pub async fn get_range(
    query: Result<Query<WeekRequest>, QueryRejection>,
) -> Result<Json<DateRange>, AppError> {
    let Query(query) = query?;
    Ok(Json(resolve_range(query.week, today())?))
}

pub async fn week_form(
    State(state): State<AppState>,
    payload: Result<Form<WeekRequest>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(payload) = payload?;
    select_week(&state, payload.week).await?;
    Ok(Redirect::to("/"))
}

pub async fn track_form(
    State(state): State<AppState>,
    payload: Result<Form<WeekRequest>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(payload) = payload?;
    track(&state, payload.week, today()).await?;
    Ok(Redirect::to("/"))
}

pub async fn week_json(
    State(state): State<AppState>,
    payload: Result<Json<WeekRequest>, JsonRejection>,
) -> Result<Json<ViewResponse>, AppError> {
    let Json(payload) = payload?;
    let view = select_week(&state, payload.week).await?;
    Ok(Json(view.to_response()))
}

pub async fn track_json(
    State(state): State<AppState>,
    payload: Result<Json<WeekRequest>, JsonRejection>,
) -> Result<Json<ViewResponse>, AppError> {
    let Json(payload) = payload?;
    let view = track(&state, payload.week, today()).await?;
    Ok(Json(view.to_response()))
}

pub async fn export_xml(State(state): State<AppState>) -> Result<XmlDownload, AppError> {
    let (range, xml) = {
        let view = state.view.lock().await;
        let (range, series) = view
            .export_payload()
            .ok_or_else(|| AppError::not_found("no temperature data to export"))?;
        (range, serialize(series)?)
    };

    if let Some(dir) = &state.export_dir {
        persist_export(dir, range, &xml).await?;
    }

    Ok(XmlDownload(xml))
}

/// Clears the display and export action for a new week selection.
pub async fn select_week(state: &AppState, week: u32) -> Result<ViewState, AppError> {
    validate_week(week)?;
    let mut view = state.view.lock().await;
    *view = view.select_week(week);
    Ok(view.clone())
}

/// Fetches the week's temperatures and moves the view to its outcome.
///
/// The view lock is released while the request is in flight. A result is
/// only applied if the selection did not change in the meantime.
pub async fn track(state: &AppState, week: u32, today: NaiveDate) -> Result<ViewState, AppError> {
    let range = resolve_range(week, today)?;

    let generation = {
        let mut view = state.view.lock().await;
        if view.week != week {
            *view = view.select_week(week);
        }
        view.generation
    };

    let outcome = state.weather.fetch_daily(range).await;

    let mut view = state.view.lock().await;
    if view.generation != generation {
        warn!(week, "selection changed while fetching, discarding forecast");
        return Ok(view.clone());
    }

    let next = match outcome {
        Ok(series) => {
            if series.is_empty() {
                info!(week, start = %range.start, end = %range.end, "no daily data returned");
            } else {
                info!(week, days = series.len(), "loaded daily temperatures");
            }
            view.loaded(range, series)
        }
        Err(err) => {
            error!("failed to fetch forecast for {}..{}: {err:?}", range.start, range.end);
            view.failed()
        }
    };
    *view = next.clone();
    Ok(next)
}

fn resolve_range(week: u32, today: NaiveDate) -> Result<DateRange, AppError> {
    validate_week(week)?;
    week_range(week, today).ok_or_else(|| AppError::bad_request("week is out of range"))
}

fn validate_week(week: u32) -> Result<(), AppError> {
    if week == 0 {
        return Err(AppError::bad_request("week must be a positive integer"));
    }
    Ok(())
}
