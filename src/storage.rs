use crate::config::Config;
use crate::models::{CategoryTotal, Expense};
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS expenses(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        expense_date TEXT NOT NULL,
        amount REAL NOT NULL,
        category TEXT NOT NULL,
        notes TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(expense_date);
"#;

/// Access to the `expenses` table.
///
/// Every operation checks a connection out of the pool, runs exactly one
/// statement and hands the connection back when the guard drops, whether the
/// statement succeeded or not.
#[derive(Clone)]
pub struct ExpenseStore {
    pool: SqlitePool,
}

impl ExpenseStore {
    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::raw_sql(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn fetch_by_date(&self, date: NaiveDate) -> Result<Vec<Expense>, sqlx::Error> {
        info!("fetch_by_date called with {date}");
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Expense>(
            "SELECT amount, category, notes FROM expenses WHERE expense_date = ? ORDER BY id",
        )
        .bind(date)
        .fetch_all(&mut *conn)
        .await
    }

    pub async fn delete_by_date(&self, date: NaiveDate) -> Result<(), sqlx::Error> {
        info!("delete_by_date called with {date}");
        let mut conn = self.pool.acquire().await?;
        sqlx::query("DELETE FROM expenses WHERE expense_date = ?")
            .bind(date)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    pub async fn insert(
        &self,
        date: NaiveDate,
        amount: f64,
        category: &str,
        notes: &str,
    ) -> Result<(), sqlx::Error> {
        info!("insert called with {date}, amount: {amount}, category: {category}, notes: {notes}");
        let mut conn = self.pool.acquire().await?;
        sqlx::query(
            "INSERT INTO expenses (expense_date, amount, category, notes) VALUES (?, ?, ?, ?)",
        )
        .bind(date)
        .bind(amount)
        .bind(category)
        .bind(notes)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    /// Sums amounts per category for `start..=end`. Categories with no
    /// expenses in the range are absent.
    pub async fn fetch_summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CategoryTotal>, sqlx::Error> {
        info!("fetch_summary called with start: {start}, end: {end}");
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, CategoryTotal>(
            "SELECT category, TOTAL(amount) AS total
             FROM expenses
             WHERE expense_date BETWEEN ? AND ?
             GROUP BY category
             ORDER BY category",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&mut *conn)
        .await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
