use crate::models::SexagesimalSounding;

/// Serializes sexagesimal soundings back to the fixed-width table format:
///
/// ```text
/// 1  35°30'00.000" 139°30'00.000" 100
/// ```
///
/// Minutes are zero-padded to 2 digits; seconds carry 3 decimals and are
/// zero-padded to a total width of 6. Lines are joined with a single newline
/// and the output has no trailing newline.
pub struct SexagesimalTextWriter;

impl SexagesimalTextWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, records: &[SexagesimalSounding]) -> String {
        let lines: Vec<String> = records.iter().map(Self::render_line).collect();
        lines.join("\n")
    }

    fn render_line(record: &SexagesimalSounding) -> String {
        format!(
            "{}  {}°{:02}'{:06.3}\" {}°{:02}'{:06.3}\" {}",
            record.type_code,
            record.lat_deg,
            record.lat_min,
            record.lat_sec,
            record.lon_deg,
            record.lon_min,
            record.lon_sec,
            record.depth
        )
    }
}

impl Default for SexagesimalTextWriter {
    fn default() -> Self {
        Self::new()
    }
}
