use super::model::UserRecord;

#[derive(Debug, Default)]
pub(super) struct UsersState {
    rows: Vec<UserRecord>,
    filter: String,
}

impl UsersState {
    pub(super) fn new(rows: Vec<UserRecord>) -> Self {
        Self {
            rows,
            filter: String::new(),
        }
    }

    pub(super) fn rows(&self) -> &[UserRecord] {
        &self.rows
    }

    pub(super) fn filter(&self) -> &str {
        &self.filter
    }

    pub(super) fn set_filter(&mut self, filter: String) {
        self.filter = filter;
    }

    /// Rows matching the current filter, in declared order.
    pub(super) fn visible_rows(&self) -> Vec<&UserRecord> {
        self.rows
            .iter()
            .filter(|row| row.matches(&self.filter))
            .collect()
    }
}
