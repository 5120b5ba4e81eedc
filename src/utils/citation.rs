use chrono::Local;

use crate::utils::constants::{DATASET_NAME, DATASET_URL};

/// Dated attribution line for the JODC 500m mesh dataset. Written next to
/// every export so the provenance of derived files stays visible.
pub fn citation_line() -> String {
    let date = Local::now().format("%Y-%m-%d");
    format!(
        "Derived from \"{}\" ({}), retrieved {}",
        DATASET_NAME, DATASET_URL, date
    )
}
