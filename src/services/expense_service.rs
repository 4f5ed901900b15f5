use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crate::database::models::{CategoryTotal, Expense};
use super::error::ServiceError;
use super::ownership::lock_owned_trip;

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub category: String,
    pub amount: Decimal,
    pub description: String,
    pub expense_date: NaiveDate,
}

/// Expenses of one trip with their per-category sums
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseLedger {
    pub expenses: Vec<Expense>,
    pub category_totals: Vec<CategoryTotal>,
}

pub struct ExpenseService {
    pool: PgPool,
}

impl ExpenseService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Most recent expenses first, plus one total per category present
    pub async fn list(&self, trip_id: i64, user_id: &str) -> Result<ExpenseLedger, ServiceError> {
        let mut tx = self.pool.begin().await?;
        lock_owned_trip(&mut tx, trip_id, user_id).await?;

        let expenses = sqlx::query_as::<_, Expense>(
            "SELECT * FROM expenses
             WHERE trip_id = $1
             ORDER BY expense_date DESC, expense_id DESC",
        )
        .bind(trip_id)
        .fetch_all(&mut *tx)
        .await?;

        let category_totals = sqlx::query_as::<_, CategoryTotal>(
            "SELECT category, SUM(amount) AS total
             FROM expenses
             WHERE trip_id = $1
             GROUP BY category
             ORDER BY category",
        )
        .bind(trip_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(ExpenseLedger { expenses, category_totals })
    }

    pub async fn add(&self, trip_id: i64, user_id: &str, expense: NewExpense) -> Result<Expense, ServiceError> {
        let mut tx = self.pool.begin().await?;
        lock_owned_trip(&mut tx, trip_id, user_id).await?;

        let created = sqlx::query_as::<_, Expense>(
            "INSERT INTO expenses (trip_id, category, amount, description, expense_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(trip_id)
        .bind(&expense.category)
        .bind(expense.amount)
        .bind(&expense.description)
        .bind(expense.expense_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(trip_id, expense_id = created.expense_id, amount = %created.amount, "Expense added");
        Ok(created)
    }

    pub async fn delete(&self, trip_id: i64, expense_id: i64, user_id: &str) -> Result<(), ServiceError> {
        let mut tx = self.pool.begin().await?;
        lock_owned_trip(&mut tx, trip_id, user_id).await?;

        let result = sqlx::query("DELETE FROM expenses WHERE expense_id = $1 AND trip_id = $2")
            .bind(expense_id)
            .bind(trip_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::not_found("Expense not found"));
        }

        tx.commit().await?;
        info!(trip_id, expense_id, "Expense deleted");
        Ok(())
    }
}
