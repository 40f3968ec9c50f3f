//! JSON file backed expense repository
//!
//! Keeps the whole collection in memory and rewrites the expenses file after
//! every mutation.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseId, Money, NewExpense};

use super::codec::{load_expenses, save_expenses};
use super::ledger::ExpenseLedger;
use super::repository::ExpenseRepository;

/// Repository persisting to a single JSON document
pub struct JsonExpenseRepository {
    path: PathBuf,
    ledger: ExpenseLedger,
    recovered_from_corruption: bool,
}

impl JsonExpenseRepository {
    /// Open the repository backed by `path`
    ///
    /// A missing or blank file starts an empty collection. An unreadable file
    /// also starts an empty collection so the application can still run; the
    /// condition is logged and reported by [`recovered_from_corruption`].
    /// The unreadable file is left in place and is overwritten by the next
    /// save.
    ///
    /// [`recovered_from_corruption`]: Self::recovered_from_corruption
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let (ledger, recovered_from_corruption) = match load_expenses(&path) {
            Ok(expenses) => {
                log::info!(
                    "Loaded {} expense(s) from {}",
                    expenses.len(),
                    path.display()
                );
                (ExpenseLedger::from_expenses(expenses), false)
            }
            Err(e) => {
                log::warn!(
                    "Could not read expenses from {}, starting with an empty list: {}",
                    path.display(),
                    e
                );
                (ExpenseLedger::new(), true)
            }
        };

        Self {
            path,
            ledger,
            recovered_from_corruption,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file existed but could not be read at startup
    pub fn recovered_from_corruption(&self) -> bool {
        self.recovered_from_corruption
    }

    fn persist(&self) -> ExpenseResult<()> {
        save_expenses(self.ledger.as_slice(), &self.path).map_err(|e| {
            log::warn!("Failed to save expenses to {}: {}", self.path.display(), e);
            e
        })?;
        log::debug!(
            "Saved {} expense(s) to {}",
            self.ledger.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl ExpenseRepository for JsonExpenseRepository {
    fn get_all(&self) -> Vec<Expense> {
        self.ledger.as_slice().to_vec()
    }

    fn add(&mut self, expense: NewExpense) -> ExpenseResult<Expense> {
        let stored = self.ledger.insert(expense)?;
        self.persist()?;
        Ok(stored)
    }

    fn update(&mut self, expense: Expense) -> ExpenseResult<Option<Expense>> {
        match self.ledger.update(&expense) {
            Some(updated) => {
                self.persist()?;
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    fn delete(&mut self, id: ExpenseId) -> ExpenseResult<bool> {
        if self.ledger.remove(id).is_none() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn get_by_id(&self, id: ExpenseId) -> Option<Expense> {
        self.ledger.get(id).cloned()
    }

    fn get_by_category(&self, category: &str) -> Vec<Expense> {
        self.ledger.by_category(category)
    }

    fn get_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
        self.ledger.by_date_range(start, end)
    }

    fn total_spending(&self) -> Money {
        self.ledger.total()
    }

    fn count(&self) -> usize {
        self.ledger.len()
    }

    fn save(&self) -> ExpenseResult<()> {
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use chrono::NaiveDateTime;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, JsonExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = JsonExpenseRepository::open(path);
        (temp_dir, repo)
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_open() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.count(), 0);
        assert!(repo.total_spending().is_zero());
        assert!(!repo.recovered_from_corruption());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_add_then_get_by_id() {
        let (_temp_dir, mut repo) = create_test_repo();

        let stored = repo
            .add(NewExpense::new(Money::new(dec!(12.50)), "Coffee", "Food").with_date(at(3, 9)))
            .unwrap();

        assert_eq!(stored.id, ExpenseId::new(1));
        assert_eq!(repo.get_by_id(stored.id), Some(stored));
    }

    #[test]
    fn test_add_persists_immediately() {
        let (_temp_dir, mut repo) = create_test_repo();
        let stored = repo
            .add(NewExpense::new(Money::from_cents(999), "Lunch", "Food"))
            .unwrap();

        let reopened = JsonExpenseRepository::open(repo.path().to_path_buf());
        assert_eq!(reopened.get_all(), vec![stored]);
    }

    #[test]
    fn test_spending_example() {
        let (_temp_dir, mut repo) = create_test_repo();

        repo.add(NewExpense::new(Money::new(dec!(12.50)), "Coffee", "Food"))
            .unwrap();
        repo.add(NewExpense::new(Money::new(dec!(40.00)), "Gas", "Transport"))
            .unwrap();
        assert_eq!(repo.total_spending().amount(), dec!(52.50));
        assert_eq!(repo.count(), 2);

        assert!(repo.delete(ExpenseId::new(1)).unwrap());
        assert_eq!(repo.count(), 1);
        assert_eq!(repo.total_spending().amount(), dec!(40.00));
    }

    #[test]
    fn test_next_id_after_reopen_follows_max() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.add(NewExpense::new(Money::from_cents(100), "a", "")).unwrap();
        let second = repo.add(NewExpense::new(Money::from_cents(100), "b", "")).unwrap();
        repo.delete(second.id).unwrap();

        // Deleting the highest id and reopening resumes after the survivor
        let mut reopened = JsonExpenseRepository::open(repo.path().to_path_buf());
        let third = reopened
            .add(NewExpense::new(Money::from_cents(100), "c", ""))
            .unwrap();
        assert_eq!(third.id, ExpenseId::new(2));

        // Within one session ids only go up
        let fourth = reopened
            .add(NewExpense::new(Money::from_cents(100), "d", ""))
            .unwrap();
        assert!(fourth.id > third.id);
    }

    #[test]
    fn test_delete_then_get_is_none() {
        let (_temp_dir, mut repo) = create_test_repo();
        let stored = repo.add(NewExpense::new(Money::from_cents(100), "a", "")).unwrap();

        assert!(repo.delete(stored.id).unwrap());
        assert!(repo.get_by_id(stored.id).is_none());
        assert!(!repo.delete(stored.id).unwrap());
    }

    #[test]
    fn test_update() {
        let (_temp_dir, mut repo) = create_test_repo();
        let mut stored = repo.add(NewExpense::new(Money::from_cents(100), "a", "x")).unwrap();

        stored.amount = Money::new(dec!(7.25));
        stored.description = "b".into();
        stored.category = "y".into();
        stored.date = at(10, 12);

        let updated = repo.update(stored.clone()).unwrap().unwrap();
        assert_eq!(updated, stored);

        let reopened = JsonExpenseRepository::open(repo.path().to_path_buf());
        assert_eq!(reopened.get_by_id(stored.id), Some(stored));
    }

    #[test]
    fn test_update_missing_leaves_state_unchanged() {
        let (_temp_dir, mut repo) = create_test_repo();
        let mut stored = repo.add(NewExpense::new(Money::from_cents(100), "a", "x")).unwrap();
        let before = repo.get_all();

        stored.id = ExpenseId::new(42);
        stored.amount = Money::from_cents(1);
        assert!(repo.update(stored).unwrap().is_none());
        assert_eq!(repo.get_all(), before);
    }

    #[test]
    fn test_get_all_is_a_snapshot() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.add(NewExpense::new(Money::from_cents(100), "a", "x")).unwrap();

        let mut snapshot = repo.get_all();
        snapshot.clear();
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn test_get_by_category_ignores_case() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.add(NewExpense::new(Money::from_cents(100), "a", "food")).unwrap();
        repo.add(NewExpense::new(Money::from_cents(100), "b", "FOOD")).unwrap();
        repo.add(NewExpense::new(Money::from_cents(100), "c", "Fuel")).unwrap();

        let found = repo.get_by_category("Food");
        assert_eq!(found.len(), 2);
        assert!(repo.get_by_category("Foo").is_empty());
    }

    #[test]
    fn test_get_by_date_range_ignores_time() {
        let (_temp_dir, mut repo) = create_test_repo();
        let early = repo
            .add(NewExpense::new(Money::from_cents(100), "early", "").with_date(at(5, 0)))
            .unwrap();
        let late = repo
            .add(
                NewExpense::new(Money::from_cents(100), "late", "")
                    .with_date(at(5, 23) + chrono::Duration::minutes(59)),
            )
            .unwrap();
        repo.add(NewExpense::new(Money::from_cents(100), "next", "").with_date(at(6, 0)))
            .unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(repo.get_by_date_range(day, day), vec![early, late]);

        let next_day = NaiveDate::from_ymd_opt(2024, 6, 6).unwrap();
        assert_eq!(repo.get_by_date_range(day, next_day).len(), 3);
        assert!(repo.get_by_date_range(next_day, day).is_empty());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "[{\"id\": oops").unwrap();

        let mut repo = JsonExpenseRepository::open(path.clone());
        assert!(repo.recovered_from_corruption());
        assert_eq!(repo.count(), 0);

        // Corrupt content is replaced on the next save
        let stored = repo.add(NewExpense::new(Money::from_cents(100), "a", "")).unwrap();
        assert_eq!(stored.id, ExpenseId::FIRST);
        let reopened = JsonExpenseRepository::open(path);
        assert!(!reopened.recovered_from_corruption());
        assert_eq!(reopened.count(), 1);
    }

    #[test]
    fn test_blank_file_is_not_corruption() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "\n").unwrap();

        let repo = JsonExpenseRepository::open(path);
        assert!(!repo.recovered_from_corruption());
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_failed_save_keeps_change_in_memory() {
        let temp_dir = TempDir::new().unwrap();
        // The backing path is a directory, so every write fails
        let path = temp_dir.path().join("expenses.json");
        fs::create_dir(&path).unwrap();

        let mut repo = JsonExpenseRepository::open(path);
        let err = repo
            .add(NewExpense::new(Money::from_cents(100), "a", ""))
            .unwrap_err();

        assert!(err.is_io());
        assert_eq!(repo.count(), 1);
        assert!(repo.save().is_err());
    }

    #[test]
    fn test_explicit_save_is_idempotent() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.add(NewExpense::new(Money::from_cents(100), "a", "")).unwrap();

        let before = fs::read_to_string(repo.path()).unwrap();
        repo.save().unwrap();
        repo.save().unwrap();
        assert_eq!(fs::read_to_string(repo.path()).unwrap(), before);
    }

    #[test]
    fn test_largest_id_loads_but_refuses_add() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let contents = r#"[{"id": 4294967295, "amount": 1, "description": "", "category": "", "date": "2024-01-01T00:00:00"}]"#;
        fs::write(&path, contents).unwrap();

        let mut repo = JsonExpenseRepository::open(path.clone());
        assert!(!repo.recovered_from_corruption());
        assert_eq!(repo.get_all()[0].id, ExpenseId::MAX);

        let err = repo
            .add(NewExpense::new(Money::from_cents(100), "a", ""))
            .unwrap_err();
        assert!(matches!(err, ExpenseError::Validation(_)));
        assert_eq!(repo.count(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    }

    #[test]
    fn test_reopen_keeps_every_digit_of_amounts() {
        let (_temp_dir, mut repo) = create_test_repo();
        let large = repo
            .add(NewExpense::new(Money::new(dec!(12345678901234567.89)), "a", ""))
            .unwrap();
        let precise = repo
            .add(NewExpense::new(Money::new(dec!(0.1234567890123456789)), "b", ""))
            .unwrap();

        let reopened = JsonExpenseRepository::open(repo.path().to_path_buf());
        assert_eq!(reopened.get_by_id(large.id), Some(large));
        assert_eq!(reopened.get_by_id(precise.id), Some(precise));
    }
}
