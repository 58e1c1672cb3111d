//! Human-readable durations.

const MICRO: u64 = 1_000;
const MILLI: u64 = 1_000_000;
const SECOND: u64 = 1_000_000_000;

/// Formats a nanosecond count with a unit and precision suited to its size.
///
/// Results keep roughly four significant digits: `1.234 µs`, `12.35 µs`,
/// `123.5 µs`, and likewise for milliseconds. Anything from one second up is
/// shown in seconds with three decimals. Rounding is half-up.
///
/// ```
/// use extrautils_time::format_nanos;
///
/// assert_eq!(format_nanos(123), "123 ns");
/// assert_eq!(format_nanos(12_345), "12.35 µs");
/// assert_eq!(format_nanos(1_234_567_890), "1.235 s");
/// ```
pub fn format_nanos(nanos: u64) -> String {
    match nanos {
        n if n < MICRO => format!("{} ns", n),
        n if n < 10 * MICRO => format!("{} µs", fixed(n, MICRO, 3)),
        n if n < 100 * MICRO => format!("{} µs", fixed(n, MICRO, 2)),
        n if n < MILLI => format!("{} µs", fixed(n, MICRO, 1)),
        n if n < 10 * MILLI => format!("{} ms", fixed(n, MILLI, 3)),
        n if n < 100 * MILLI => format!("{} ms", fixed(n, MILLI, 2)),
        n if n < SECOND => format!("{} ms", fixed(n, MILLI, 1)),
        n => format!("{} s", fixed(n, SECOND, 3)),
    }
}

/// `value / unit` with `decimals` fractional digits, rounded half-up in
/// integer arithmetic (`12.345` must print as `12.35`).
fn fixed(value: u64, unit: u64, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    let unit = u128::from(unit);
    let scaled = (u128::from(value) * scale + unit / 2) / unit;
    format!(
        "{}.{:0width$}",
        scaled / scale,
        scaled % scale,
        width = decimals as usize
    )
}
