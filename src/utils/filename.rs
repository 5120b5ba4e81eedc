use crate::models::OutputKind;
use crate::utils::constants::MESH_PREFIX;

/// Extract the mesh basename (e.g. `mesh500_35_139`) from a source
/// identifier such as a download URL or file path.
///
/// The recognized pattern is `mesh500_` followed by two groups of 2-3 digits
/// separated by an underscore. The first group must be exactly 2-3 digits
/// long; the second is cut off after 3 digits.
pub fn extract_mesh_basename(source: &str) -> Option<String> {
    let start = source.find(MESH_PREFIX)?;
    let rest = &source[start + MESH_PREFIX.len()..];

    let first_len = leading_digit_run(rest);
    if !(2..=3).contains(&first_len) {
        return None;
    }
    let (first, rest) = rest.split_at(first_len);

    let rest = rest.strip_prefix('_')?;
    let second_len = leading_digit_run(rest);
    if second_len < 2 {
        return None;
    }
    let second = &rest[..second_len.min(3)];

    Some(format!("{}{}_{}", MESH_PREFIX, first, second))
}

fn leading_digit_run(s: &str) -> usize {
    s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len())
}

/// Build the suggested output filename: `{base}_{suffix}.{ext}`.
pub fn output_filename(basename: &str, kind: OutputKind) -> String {
    format!("{}_{}.{}", basename, kind.suffix(), kind.extension())
}
