//! Number formatting for markup attributes.
//!
//! Numbers are printed the way a JavaScript engine stringifies them
//! (`0.1 + 0.2` prints as `0.30000000000000004`, `1.0` as `1`), so output is
//! byte-comparable with documents produced by browser-side tooling.

/// Append the JavaScript string form of `v` to `out`.
///
/// Non-finite values print as `0` and negative zero as `0`.
pub fn push_number(out: &mut String, v: f64) {
    let mut buf = ryu_js::Buffer::new();
    out.push_str(js_number(v, &mut buf));
}

/// The JavaScript string form of `v`.
#[must_use]
pub fn fmt_number(v: f64) -> String {
    let mut out = String::new();
    push_number(&mut out, v);
    out
}

fn js_number(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if !v.is_finite() {
        return "0";
    }
    if v == -0.0 {
        v = 0.0;
    }
    buf.format_finite(v)
}
