//! CSV Catalog Import
//!
//! Replaces the built-in sample catalog with one maintained as a CSV file.
//!
//! Expected header (column order is free, `institution`, `professor`,
//! `usefulness`, `fun` and `description` are optional):
//!
//! ```text
//! institution,id,title,code,professor,rating,difficulty,workload,usefulness,fun,description,reviews
//! uncch,10,COMP 110,Introduction to Programming,Prof. X,4.8,3,3,,,Fundamentals of programming.,1200
//! ```
//!
//! Rows that fail to parse are counted and reported, not fatal.

use super::{Catalog, CourseRecord};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Catalog import errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to open catalog {path:?}: {error}")]
    Open { path: PathBuf, error: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog contains no usable rows")]
    Empty,
}

/// Result of a CSV import operation
#[derive(Debug)]
pub struct CsvImportResult {
    pub catalog: Catalog,
    pub rows_processed: usize,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    institution: Option<String>,
    id: u32,
    title: String,
    code: String,
    #[serde(default)]
    professor: Option<String>,
    rating: f64,
    difficulty: f64,
    workload: f64,
    #[serde(default)]
    usefulness: Option<f64>,
    #[serde(default)]
    fun: Option<f64>,
    #[serde(default)]
    description: Option<String>,
    reviews: u32,
}

impl CsvRow {
    fn into_record(self) -> (Option<String>, CourseRecord) {
        let professor = self
            .professor
            .filter(|p| !p.trim().is_empty() && p != "N/A");

        let record = CourseRecord {
            id: self.id,
            title: self.title.trim().to_string(),
            code: self.code.trim().to_string(),
            professor,
            rating: self.rating,
            difficulty: self.difficulty,
            workload: self.workload,
            usefulness: self.usefulness,
            fun: self.fun,
            description: self.description.unwrap_or_default(),
            review_count: self.reviews,
        };

        let institution = self.institution.filter(|i| !i.trim().is_empty());
        (institution, record)
    }
}

/// CSV catalog importer
pub struct CatalogCsvImporter {
    /// Institution used for rows without an `institution` column
    default_institution: String,
}

impl CatalogCsvImporter {
    pub fn new(default_institution: impl Into<String>) -> Self {
        Self {
            default_institution: default_institution.into(),
        }
    }

    /// Import from a file on disk
    pub fn import_file(&self, path: &Path) -> Result<CsvImportResult, CatalogError> {
        let file = std::fs::File::open(path).map_err(|e| CatalogError::Open {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        self.import_reader(file)
    }

    /// Import from any reader
    pub fn import_reader<R: Read>(&self, reader: R) -> Result<CsvImportResult, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut result = CsvImportResult {
            catalog: Catalog::new(),
            rows_processed: 0,
            rows_failed: 0,
            errors: Vec::new(),
        };

        for (idx, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
            match row {
                Ok(row) => {
                    let (institution, record) = row.into_record();
                    if record.catalog_number().is_none() {
                        result.rows_failed += 1;
                        result
                            .errors
                            .push(format!("row {}: title {:?} has no catalog number", idx + 1, record.title));
                        continue;
                    }
                    let institution = institution
                        .map(|i| i.to_lowercase())
                        .unwrap_or_else(|| self.default_institution.clone());
                    result.catalog.insert(&institution, record);
                    result.rows_processed += 1;
                }
                Err(e) => {
                    result.rows_failed += 1;
                    result.errors.push(format!("row {}: {}", idx + 1, e));
                }
            }
        }

        if result.catalog.is_empty() {
            return Err(CatalogError::Empty);
        }

        tracing::info!(
            rows = result.rows_processed,
            failed = result.rows_failed,
            "Imported course catalog"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
institution,id,title,code,professor,rating,difficulty,workload,usefulness,fun,description,reviews
uncch,10,COMP 110,Introduction to Programming,Prof. X,4.8,3,3,,,Fundamentals.,1200
,11,COMP 301,Databases,N/A,4.2,4,4,3.5,4,Relational models.,350
duke,30,CS 101,Intro CS,,4.0,3,3,,,,10
";

    #[test]
    fn test_import_reader() {
        let importer = CatalogCsvImporter::new("uncch");
        let result = importer.import_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(result.rows_processed, 3);
        assert_eq!(result.rows_failed, 0);

        let unc = result.catalog.institution("uncch").unwrap();
        let comp = unc.subject("COMP").unwrap();
        assert_eq!(comp.len(), 2);
        assert_eq!(comp[1].professor, None);
        assert_eq!(comp[1].usefulness, Some(3.5));

        let duke = result.catalog.institution("duke").unwrap();
        assert_eq!(duke.subject("CS").unwrap()[0].review_count, 10);
    }

    #[test]
    fn test_bad_rows_are_counted() {
        let csv = "\
id,title,code,rating,difficulty,workload,reviews
1,COMP 110,Intro,4.8,3,3,100
2,COMP 301,Databases,not-a-number,4,4,50
3,SEMINAR,No number,4.0,2,2,5
";
        let importer = CatalogCsvImporter::new("uncch");
        let result = importer.import_reader(csv.as_bytes()).unwrap();

        assert_eq!(result.rows_processed, 1);
        assert_eq!(result.rows_failed, 2);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_empty_catalog_is_error() {
        let csv = "id,title,code,rating,difficulty,workload,reviews\n";
        let importer = CatalogCsvImporter::new("uncch");
        assert!(matches!(
            importer.import_reader(csv.as_bytes()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_import_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let importer = CatalogCsvImporter::new("uncch");
        let result = importer.import_file(file.path()).unwrap();
        assert_eq!(result.catalog.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let importer = CatalogCsvImporter::new("uncch");
        let err = importer
            .import_file(Path::new("/definitely/not/here.csv"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Open { .. }));
    }
}
