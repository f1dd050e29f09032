use crate::storage::ExpenseStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ExpenseStore,
}

impl AppState {
    pub fn new(store: ExpenseStore) -> Self {
        Self { store }
    }
}
