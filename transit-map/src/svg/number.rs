//! Number formatting for SVG attributes.
//!
//! Maps are compared byte-for-byte against reference output, which prints
//! floating-point values the way a default C++ stream does: `%g` with six
//! significant digits, trailing zeros removed.

use std::fmt::{self, Write};

const SIGNIFICANT_DIGITS: i32 = 6;

/// Formats an `f64` in `%g` style with six significant digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // Rounding to six significant digits can bump the exponent
        // (999999.5 -> 1e+06), so read it off the rounded scientific form.
        let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        if (-4..SIGNIFICANT_DIGITS).contains(&exponent) {
            let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
            let fixed = format!("{value:.decimals$}");
            f.write_str(trim_fraction(&fixed))
        } else {
            f.write_str(trim_fraction(mantissa))?;
            f.write_char('e')?;
            f.write_char(if exponent < 0 { '-' } else { '+' })?;
            write!(f, "{:02}", exponent.abs())
        }
    }
}

/// Strip trailing zeros after a decimal point, and the point itself if bare.
fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
