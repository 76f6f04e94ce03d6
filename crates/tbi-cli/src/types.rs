use std::path::PathBuf;

#[derive(Debug)]
pub struct BatchResult {
    pub batch_folder: PathBuf,
    pub output_dir: PathBuf,
    pub documents: Vec<DocumentSummary>,
    pub errors: Vec<String>,
    pub has_failures: bool,
}

#[derive(Debug)]
pub struct DocumentSummary {
    pub filename: String,
    pub vng: bool,
    pub ctsib: bool,
    pub creyos: bool,
    pub field_count: usize,
    pub anomalies: usize,
    pub failed_passes: Vec<String>,
    pub record_written: bool,
    pub report_written: bool,
}
