// Display form of decimal numbers

use std::fmt;

use num_bigint::BigInt;
use num_traits::Signed;

use super::constants::DISPLAY_SCALE;
use super::{rescale, Decimal, RoundingMode};

impl Decimal {
    /// Fixed-point text with at most [`DISPLAY_SCALE`] fractional digits.
    ///
    /// Extra digits are floored (rounded toward negative infinity). There is
    /// never an exponent and never a grouping separator.
    pub fn to_display_string(&self) -> String {
        if self.scale <= DISPLAY_SCALE {
            return render_fixed(&self.unscaled, self.scale);
        }

        let floored = rescale(&self.unscaled, self.scale, DISPLAY_SCALE, RoundingMode::Floor);
        let shown = Decimal::normalized(floored, DISPLAY_SCALE);
        render_fixed(&shown.unscaled, shown.scale)
    }
}

fn render_fixed(unscaled: &BigInt, scale: u32) -> String {
    let digits = unscaled.abs().to_string();
    let sign = if unscaled.is_negative() { "-" } else { "" };
    let scale = scale as usize;

    if scale == 0 {
        format!("{sign}{digits}")
    } else if digits.len() > scale {
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        format!("{sign}{int_part}.{frac_part}")
    } else {
        let zeros = "0".repeat(scale - digits.len());
        format!("{sign}0.{zeros}{digits}")
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_display_string())
    }
}
