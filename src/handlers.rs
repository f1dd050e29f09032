use crate::analytics::build_breakdown;
use crate::errors::AppError;
use crate::models::{AnalyticsItem, DateRange, Expense, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::info;

pub async fn health() -> &'static str {
    "Expense Tracking API is running"
}

pub async fn get_expenses(
    State(state): State<AppState>,
    date: Result<Path<NaiveDate>, PathRejection>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let Path(date) = date?;
    let expenses = state.store.fetch_by_date(date).await?;
    Ok(Json(expenses))
}

/// Replaces every expense on `date` with the submitted list.
///
/// The delete and the inserts run as separate statements, so a failure part
/// way through leaves the date with only the rows inserted so far.
pub async fn replace_expenses(
    State(state): State<AppState>,
    date: Result<Path<NaiveDate>, PathRejection>,
    payload: Result<Json<Vec<Expense>>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(date) = date?;
    let Json(expenses) = payload?;

    state.store.delete_by_date(date).await?;
    for expense in &expenses {
        state
            .store
            .insert(date, expense.amount, &expense.category, &expense.notes)
            .await?;
    }
    info!("replaced expenses for {date} with {} rows", expenses.len());

    Ok(Json(MessageResponse {
        message: "Expenses updated successfully".to_string(),
    }))
}

pub async fn get_analytics(
    State(state): State<AppState>,
    payload: Result<Json<DateRange>, JsonRejection>,
) -> Result<Json<BTreeMap<String, AnalyticsItem>>, AppError> {
    let Json(range) = payload?;
    let summary = state
        .store
        .fetch_summary(range.start_date, range.end_date)
        .await?;
    Ok(Json(build_breakdown(&summary)))
}
