use parking_lot::Mutex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::taxcode::is_valid_tax_code;
use super::types::Person;

/// Column names of the persisted file, in fixed order. The header row is
/// always present, even when the collection is empty.
pub const CSV_HEADERS: [&str; 4] = ["id", "firstName", "lastName", "taxCode"];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid tax code")]
    InvalidTaxCode,
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("path id {path} does not match body id {body}")]
    IdMismatch { path: u64, body: u64 },
    #[error("an item with id {0} already exists")]
    DuplicateId(u64),
    #[error("an item with this tax code already exists")]
    DuplicateTaxCode,
    #[error("no item with id {0}")]
    NotFound(u64),
    #[error("malformed id field {0:?} in data file")]
    Corrupt(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Row as it sits on disk. The id stays a string here so that a row with an
/// empty id field can be skipped before integer parsing runs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRow {
    id: String,
    first_name: String,
    last_name: String,
    tax_code: String,
}

/// File-backed record collection.
///
/// The single source of truth for person records. Every operation re-reads
/// the full set from disk and, on write paths, rewrites the whole file; the
/// entire read-modify-write sequence of each operation runs under one lock,
/// so concurrent requests are totally ordered and never lose an update.
pub struct CsvStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the data file with only the header row when it is absent.
    /// Idempotent, and invoked again by every load.
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        self.init_unlocked()
    }

    /// Reads the full record set from disk.
    pub fn load_all(&self) -> Result<Vec<Person>, StoreError> {
        let _guard = self.lock.lock();
        self.load_unlocked()
    }

    /// Rewrites the whole file: header row, then one row per record in the
    /// order given.
    pub fn save_all(&self, people: &[Person]) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        self.save_unlocked(people)
    }

    /// Linear scan for the first record with a matching id.
    pub fn find_by_id(&self, id: u64) -> Result<Option<Person>, StoreError> {
        let _guard = self.lock.lock();
        let people = self.load_unlocked()?;
        Ok(people.into_iter().find(|p| p.id == id))
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let _guard = self.lock.lock();
        Ok(self.load_unlocked()?.len())
    }

    pub fn list(&self) -> Result<Vec<Person>, StoreError> {
        let _guard = self.lock.lock();
        self.load_unlocked()
    }

    pub fn get(&self, id: u64) -> Result<Person, StoreError> {
        let _guard = self.lock.lock();
        let people = self.load_unlocked()?;
        people
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Appends a new record after format and uniqueness checks.
    ///
    /// Check order: tax-code format, non-empty names, duplicate id,
    /// duplicate tax code. A rejected request never changes the file.
    pub fn create(&self, person: Person) -> Result<Person, StoreError> {
        let _guard = self.lock.lock();
        validate_fields(&person)?;

        let mut people = self.load_unlocked()?;
        if people.iter().any(|p| p.id == person.id) {
            return Err(StoreError::DuplicateId(person.id));
        }
        if people.iter().any(|p| p.tax_code == person.tax_code) {
            return Err(StoreError::DuplicateTaxCode);
        }

        people.push(person.clone());
        self.save_unlocked(&people)?;
        Ok(person)
    }

    /// Fully replaces the record with id `id`. The body id must match the
    /// path id, and the tax code must not be held by any other record.
    pub fn update(&self, id: u64, person: Person) -> Result<Person, StoreError> {
        let _guard = self.lock.lock();
        validate_fields(&person)?;
        if person.id != id {
            return Err(StoreError::IdMismatch {
                path: id,
                body: person.id,
            });
        }

        let mut people = self.load_unlocked()?;
        if people
            .iter()
            .any(|p| p.tax_code == person.tax_code && p.id != id)
        {
            return Err(StoreError::DuplicateTaxCode);
        }

        let slot = people
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = person.clone();

        self.save_unlocked(&people)?;
        Ok(person)
    }

    /// Removes the record with id `id` when present. Persists and succeeds
    /// either way, so deleting an absent id is an idempotent no-op.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        let mut people = self.load_unlocked()?;
        people.retain(|p| p.id != id);
        self.save_unlocked(&people)
    }

    fn init_unlocked(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        self.save_unlocked(&[])
    }

    fn load_unlocked(&self) -> Result<Vec<Person>, StoreError> {
        self.init_unlocked()?;

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut people = Vec::new();
        for row in reader.deserialize::<RawRow>() {
            let row = row?;
            if row.id.is_empty() {
                continue;
            }
            // A non-empty id that fails to parse means the file itself is
            // damaged; skipping it would silently hide existing records.
            let id = row
                .id
                .parse::<u64>()
                .map_err(|_| StoreError::Corrupt(row.id.clone()))?;
            people.push(Person {
                id,
                first_name: row.first_name,
                last_name: row.last_name,
                tax_code: row.tax_code,
            });
        }
        Ok(people)
    }

    fn save_unlocked(&self, people: &[Person]) -> Result<(), StoreError> {
        let tmp = self.tmp_path();

        let mut writer = csv::Writer::from_path(&tmp)?;
        writer.write_record(CSV_HEADERS)?;
        for person in people {
            let id = person.id.to_string();
            writer.write_record([
                id.as_str(),
                person.first_name.as_str(),
                person.last_name.as_str(),
                person.tax_code.as_str(),
            ])?;
        }
        writer.flush()?;
        drop(writer);

        // Sibling file, so the rename stays on one filesystem and readers
        // only ever observe a complete file.
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

fn validate_fields(person: &Person) -> Result<(), StoreError> {
    if !is_valid_tax_code(&person.tax_code) {
        return Err(StoreError::InvalidTaxCode);
    }
    if person.first_name.is_empty() {
        return Err(StoreError::EmptyField("firstName"));
    }
    if person.last_name.is_empty() {
        return Err(StoreError::EmptyField("lastName"));
    }
    Ok(())
}
