//! Text formatting shared by every frontend.

/// Milliseconds as seconds, using the shortest exact decimal.
///
/// `12345` becomes `12.345` and `120000` becomes `120`.
pub fn seconds(elapsed_ms: u64) -> String {
    let whole = elapsed_ms / 1000;
    let millis = elapsed_ms % 1000;
    if millis == 0 {
        return whole.to_string();
    }

    let fraction = format!("{millis:03}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}
