use crate::dashboard::form::{EditForm, CATEGORIES};
use crate::dashboard::report::AnalyticsReport;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Success => "ok",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// One-line status message shown above the tab content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Edit,
    Analytics,
}

pub fn render_edit(date: NaiveDate, form: &EditForm, notice: Option<&Notice>) -> String {
    let mut rows = String::new();
    for (i, row) in form.rows.iter().enumerate() {
        let mut options = String::new();
        if !CATEGORIES.contains(&row.category.as_str()) {
            let category = escape_html(&row.category);
            options.push_str(&format!(r#"<option value="{category}" selected>{category}</option>"#));
        }
        for category in CATEGORIES {
            let selected = if category == row.category { " selected" } else { "" };
            options.push_str(&format!(r#"<option value="{category}"{selected}>{category}</option>"#));
        }

        rows.push_str(&format!(
            r#"
        <div class="row">
          <input type="number" name="amount_{i}" min="0" step="any" value="{amount}" aria-label="Amount" />
          <select name="category_{i}" aria-label="Category">{options}</select>
          <input type="text" name="notes_{i}" value="{notes}" aria-label="Notes" />
        </div>"#,
            amount = row.amount,
            notes = escape_html(&row.notes),
        ));
    }

    let content = EDIT_HTML
        .replace("{{DATE}}", &date.to_string())
        .replace("{{NOTICE}}", &render_notice(notice))
        .replace("{{ROWS}}", &rows);
    render_page(Tab::Edit, &content)
}

pub fn render_analytics(
    start: NaiveDate,
    end: NaiveDate,
    report: Option<&AnalyticsReport>,
    notice: Option<&Notice>,
) -> String {
    let results = match report {
        Some(report) if !report.is_empty() => render_report(report),
        _ => String::new(),
    };

    let content = ANALYTICS_HTML
        .replace("{{START}}", &start.to_string())
        .replace("{{END}}", &end.to_string())
        .replace("{{NOTICE}}", &render_notice(notice))
        .replace("{{RESULTS}}", &results);
    render_page(Tab::Analytics, &content)
}

fn render_report(report: &AnalyticsReport) -> String {
    let mut bars = String::new();
    let mut table = String::new();
    for row in &report.rows {
        let category = escape_html(&row.category);
        bars.push_str(&format!(
            r#"
          <div class="bar">
            <span class="bar-label">{category}</span>
            <span class="bar-track"><span class="bar-fill" style="width: {width:.2}%"></span></span>
            <span class="bar-value">{percentage}%</span>
          </div>"#,
            width = report.bar_width(row),
            percentage = row.percentage_display(),
        ));
        table.push_str(&format!(
            "<tr><td>{category}</td><td>{}</td><td>{}</td></tr>",
            row.total_display(),
            row.percentage_display(),
        ));
    }

    format!(
        r#"
      <h2>Expense Breakdown By Category</h2>
      <div class="chart-card">{bars}
      </div>
      <table>
        <thead><tr><th>Category</th><th>Total</th><th>Percentage</th></tr></thead>
        <tbody>{table}</tbody>
      </table>"#
    )
}

fn render_notice(notice: Option<&Notice>) -> String {
    match notice {
        Some(notice) => format!(
            r#"<div class="status" data-type="{}">{}</div>"#,
            notice.kind.as_str(),
            escape_html(&notice.message)
        ),
        None => String::new(),
    }
}

fn render_page(tab: Tab, content: &str) -> String {
    let (edit_class, analytics_class) = match tab {
        Tab::Edit => ("tab active", "tab"),
        Tab::Analytics => ("tab", "tab active"),
    };
    PAGE_HTML
        .replace("{{EDIT_TAB}}", edit_class)
        .replace("{{ANALYTICS_TAB}}", analytics_class)
        .replace("{{CONTENT}}", content)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const EDIT_HTML: &str = r#"
    <section class="panel">
      <h2>Add / Update Expenses</h2>
      <form method="get" action="/edit" class="date-picker">
        <input type="date" name="date" value="{{DATE}}" aria-label="Enter Date" />
        <button class="btn-secondary" type="submit">Load</button>
      </form>
      {{NOTICE}}
      <form method="post" action="/edit">
        <input type="hidden" name="date" value="{{DATE}}" />
        <div class="row header"><span>Amount</span><span>Category</span><span>Notes</span></div>{{ROWS}}
        <button class="btn-primary" type="submit">Save Expenses</button>
      </form>
    </section>
"#;

const ANALYTICS_HTML: &str = r#"
    <section class="panel">
      <h2>Expense Analytics</h2>
      <form method="get" action="/analytics" class="range-picker">
        <label>Start Date <input type="date" name="start_date" value="{{START}}" /></label>
        <label>End Date <input type="date" name="end_date" value="{{END}}" /></label>
        <button class="btn-primary" type="submit">Get Analytics</button>
      </form>
      {{NOTICE}}{{RESULTS}}
    </section>
"#;

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Expense Tracking System</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1100px, 100%);
      margin: 0 auto;
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Georgia", serif;
      margin: 0;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      border-radius: 999px;
      padding: 8px 16px;
      font-weight: 600;
      color: #6b645d;
      text-decoration: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .panel {
      display: grid;
      gap: 16px;
    }

    .row {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 12px;
      margin-bottom: 8px;
    }

    .row.header {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    input, select {
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      font-size: 1rem;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    .btn-primary {
      background: var(--accent);
    }

    .btn-secondary {
      background: var(--accent-2);
    }

    .date-picker, .range-picker {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: end;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 10px;
    }

    .bar {
      display: grid;
      grid-template-columns: 140px 1fr 80px;
      gap: 12px;
      align-items: center;
    }

    .bar-track {
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      height: 18px;
      overflow: hidden;
    }

    .bar-fill {
      display: block;
      height: 100%;
      background: var(--accent);
    }

    table {
      border-collapse: collapse;
      width: 100%;
    }

    th, td {
      text-align: left;
      padding: 8px 12px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.12);
    }

    .status {
      font-size: 0.95rem;
      padding: 10px 14px;
      border-radius: 12px;
    }

    .status[data-type="error"] {
      color: #c63b2b;
      background: rgba(198, 59, 43, 0.08);
    }

    .status[data-type="warning"] {
      color: #8a6100;
      background: rgba(255, 196, 0, 0.12);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
      background: rgba(45, 122, 75, 0.08);
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Expense Tracking System</h1>
    <nav class="tabs">
      <a class="{{EDIT_TAB}}" href="/edit">Add / Update</a>
      <a class="{{ANALYTICS_TAB}}" href="/analytics">Analytics</a>
    </nav>
{{CONTENT}}
  </main>
</body>
</html>
"#;
