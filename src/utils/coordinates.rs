/// Decompose decimal degrees into a (degrees, minutes, seconds) triple.
///
/// Seconds are rounded to 3 decimal places. The decomposition is floor-based:
/// for a negative input the degrees come out negative while minutes and
/// seconds stay non-negative (e.g. -0.25 -> (-1, 45, 0.0)). This is not
/// sign-symmetric, but the 500m mesh tables only carry non-negative
/// coordinates and the sexagesimal output must stay byte-stable, so the
/// decomposition is kept as-is rather than generalized.
///
/// # Examples
/// ```
/// use mesh500_processor::utils::coordinates::to_dms;
///
/// let (d, m, s) = to_dms(139.5);
/// assert_eq!((d, m), (139, 30));
/// assert_eq!(s, 0.0);
/// ```
pub fn to_dms(decimal: f64) -> (i32, u8, f64) {
    let degrees = decimal.floor();
    let minutes_total = (decimal - degrees) * 60.0;
    let minutes = minutes_total.floor();
    let seconds = (minutes_total - minutes) * 60.0;

    // Hold seconds to 3-decimal precision, matching the rendered text
    let seconds = (seconds * 1000.0).round() / 1000.0;

    (degrees as i32, minutes as u8, seconds)
}
