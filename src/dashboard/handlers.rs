use crate::dashboard::client::ClientError;
use crate::dashboard::form::EditForm;
use crate::dashboard::report::AnalyticsReport;
use crate::dashboard::ui::{render_analytics, render_edit, Notice};
use crate::dashboard::DashboardState;
use crate::models::DateRange;
use axum::{
    extract::{Form, Query, State},
    response::{Html, Redirect},
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
pub struct EditQuery {
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub async fn index() -> Redirect {
    Redirect::to("/edit")
}

pub async fn edit_page(
    State(state): State<DashboardState>,
    Query(query): Query<EditQuery>,
) -> Html<String> {
    let date = parse_date(query.date.as_deref()).unwrap_or_else(today);

    let (existing, notice) = match state.client.fetch_expenses(date).await {
        Ok(expenses) => (expenses, None),
        Err(ClientError::Transport(err)) => {
            warn!("failed to load expenses for {date}: {err}");
            (Vec::new(), Some(Notice::error("API server not reachable")))
        }
        Err(err) => {
            warn!("failed to load expenses for {date}: {err}");
            (Vec::new(), None)
        }
    };

    Html(render_edit(date, &EditForm::from_existing(&existing), notice.as_ref()))
}

pub async fn submit_edit(
    State(state): State<DashboardState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Html<String> {
    let form = EditForm::from_fields(&fields);
    let Some(date) = parse_date(fields.get("date").map(String::as_str)) else {
        let notice = Notice::error("Please pick a valid date.");
        return Html(render_edit(today(), &form, Some(&notice)));
    };

    let notice = match form.submission() {
        Err(warning) => Notice::warning(warning.to_string()),
        Ok(expenses) => match state.client.replace_expenses(date, &expenses).await {
            Ok(_) => Notice::success("Expenses updated successfully!"),
            Err(ClientError::Transport(err)) => {
                warn!("failed to save expenses for {date}: {err}");
                Notice::error("Failed to connect to API.")
            }
            Err(err) => {
                warn!("failed to save expenses for {date}: {err}");
                Notice::error("Failed to update expenses.")
            }
        },
    };

    Html(render_edit(date, &form, Some(&notice)))
}

/// Shows the range picker, and the breakdown once both dates are given.
pub async fn analytics_page(
    State(state): State<DashboardState>,
    Query(query): Query<AnalyticsQuery>,
) -> Html<String> {
    let start = parse_date(query.start_date.as_deref());
    let end = parse_date(query.end_date.as_deref());

    let (Some(start_date), Some(end_date)) = (start, end) else {
        let today = today();
        let first_of_month = today.with_day(1).unwrap_or(today);
        return Html(render_analytics(
            start.unwrap_or(first_of_month),
            end.unwrap_or(today),
            None,
            None,
        ));
    };

    let range = DateRange {
        start_date,
        end_date,
    };
    match state.client.fetch_analytics(range).await {
        Ok(breakdown) if breakdown.is_empty() => Html(render_analytics(
            start_date,
            end_date,
            None,
            Some(&Notice::warning("No data available for the selected date range.")),
        )),
        Ok(breakdown) => {
            let report = AnalyticsReport::from_breakdown(&breakdown);
            Html(render_analytics(start_date, end_date, Some(&report), None))
        }
        Err(err) => {
            warn!("failed to fetch analytics for {start_date}..{end_date}: {err}");
            Html(render_analytics(
                start_date,
                end_date,
                None,
                Some(&Notice::error("Failed to fetch analytics")),
            ))
        }
    }
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<NaiveDate>().ok())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
