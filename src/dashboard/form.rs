use crate::models::Expense;
use std::collections::HashMap;
use std::fmt;

pub const CATEGORIES: [&str; 5] = ["Rent", "Food", "Shopping", "Entertainment", "Other"];
pub const DEFAULT_CATEGORY: &str = "Shopping";
pub const FORM_ROWS: usize = 5;

/// Returned instead of a payload when no row has a positive amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitWarning;

impl fmt::Display for SubmitWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Please enter at least one expense.")
    }
}

impl std::error::Error for SubmitWarning {}

/// The fixed five-row edit grid for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub rows: Vec<Expense>,
}

impl EditForm {
    /// Fills the grid from stored expenses. Anything past the fifth record is
    /// not shown; missing rows get the blank default.
    pub fn from_existing(expenses: &[Expense]) -> Self {
        let mut rows: Vec<Expense> = expenses.iter().take(FORM_ROWS).cloned().collect();
        rows.resize_with(FORM_ROWS, blank_row);
        Self { rows }
    }

    /// Reads `amount_N`, `category_N` and `notes_N` fields of a posted form.
    /// Amounts that are missing or not finite numbers count as zero.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let rows = (0..FORM_ROWS)
            .map(|i| {
                let amount = fields
                    .get(&format!("amount_{i}"))
                    .and_then(|value| value.trim().parse::<f64>().ok())
                    .filter(|value| value.is_finite())
                    .unwrap_or(0.0);
                let category = fields
                    .get(&format!("category_{i}"))
                    .map(|value| value.trim())
                    .filter(|value| !value.is_empty())
                    .unwrap_or(DEFAULT_CATEGORY)
                    .to_string();
                let notes = fields
                    .get(&format!("notes_{i}"))
                    .cloned()
                    .unwrap_or_default();
                Expense {
                    amount,
                    category,
                    notes,
                }
            })
            .collect();
        Self { rows }
    }

    /// Rows worth sending to the API, in grid order.
    pub fn submission(&self) -> Result<Vec<Expense>, SubmitWarning> {
        let expenses: Vec<Expense> = self
            .rows
            .iter()
            .filter(|row| row.amount > 0.0)
            .cloned()
            .collect();

        if expenses.is_empty() {
            return Err(SubmitWarning);
        }
        Ok(expenses)
    }
}

fn blank_row() -> Expense {
    Expense {
        amount: 0.0,
        category: DEFAULT_CATEGORY.to_string(),
        notes: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: f64, category: &str, notes: &str) -> Expense {
        Expense {
            amount,
            category: category.to_string(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn short_lists_are_padded_with_defaults() {
        let form = EditForm::from_existing(&[expense(12.0, "Food", "tea")]);

        assert_eq!(form.rows.len(), FORM_ROWS);
        assert_eq!(form.rows[0], expense(12.0, "Food", "tea"));
        for row in &form.rows[1..] {
            assert_eq!(*row, expense(0.0, "Shopping", ""));
        }
    }

    #[test]
    fn records_past_the_fifth_are_dropped() {
        let existing: Vec<Expense> = (1..=7)
            .map(|i| expense(i as f64, "Other", &format!("#{i}")))
            .collect();
        let form = EditForm::from_existing(&existing);

        assert_eq!(form.rows.len(), FORM_ROWS);
        assert_eq!(form.rows[4].notes, "#5");
    }

    #[test]
    fn submission_keeps_only_positive_amounts_in_order() {
        let form = EditForm {
            rows: vec![
                expense(0.0, "Shopping", ""),
                expense(25.0, "Food", "dinner"),
                expense(-3.0, "Other", "typo"),
                expense(1200.0, "Rent", ""),
                expense(0.0, "Shopping", "note without amount"),
            ],
        };

        assert_eq!(
            form.submission(),
            Ok(vec![expense(25.0, "Food", "dinner"), expense(1200.0, "Rent", "")])
        );
    }

    #[test]
    fn all_zero_rows_give_a_warning() {
        let form = EditForm::from_existing(&[]);
        let warning = form.submission().unwrap_err();
        assert_eq!(warning.to_string(), "Please enter at least one expense.");
    }

    #[test]
    fn posted_fields_are_coerced() {
        let fields: HashMap<String, String> = [
            ("amount_0", "15.5"),
            ("category_0", "Entertainment"),
            ("notes_0", "cinema"),
            ("amount_1", "abc"),
            ("category_1", "Food"),
            ("amount_2", "inf"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let form = EditForm::from_fields(&fields);
        assert_eq!(form.rows.len(), FORM_ROWS);
        assert_eq!(form.rows[0], expense(15.5, "Entertainment", "cinema"));
        assert_eq!(form.rows[1], expense(0.0, "Food", ""));
        assert_eq!(form.rows[2].amount, 0.0);
        assert_eq!(form.rows[4], expense(0.0, "Shopping", ""));
        assert_eq!(form.submission().unwrap().len(), 1);
    }
}
