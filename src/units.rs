//! Units conversion
//!
//! Converts TeX lengths into ems of the current font size. Absolute units go
//! through TeX points; `mu` follows the current style; `ex` and `em` always
//! refer to the text-style font at the current size.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::context::Context;

/// A TeX length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum Unit {
    Pt,
    Mm,
    Cm,
    In,
    Bp,
    Pc,
    Dd,
    Cc,
    Nd,
    Nc,
    Sp,
    Px,
    Ex,
    Em,
    Mu,
}

impl Unit {
    /// TeX points per unit, `None` for the font-relative units.
    #[must_use]
    pub const fn pt_per_unit(self) -> Option<f64> {
        match self {
            // https://en.wikibooks.org/wiki/LaTeX/Lengths
            Self::Pt => Some(1.0),
            Self::Mm => Some(7227.0 / 2540.0),
            Self::Cm => Some(7227.0 / 254.0),
            Self::In => Some(72.27),
            // \pdfpxdimen defaults to 1 bp
            Self::Bp | Self::Px => Some(803.0 / 800.0),
            Self::Pc => Some(12.0),
            Self::Dd => Some(1238.0 / 1157.0),
            Self::Cc => Some(14856.0 / 1157.0),
            Self::Nd => Some(685.0 / 642.0),
            Self::Nc => Some(1370.0 / 107.0),
            Self::Sp => Some(1.0 / 65536.0),
            Self::Ex | Self::Em | Self::Mu => None,
        }
    }
}

/// A length as written by the author, e.g. `3mu` or `0.5em`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    /// Magnitude
    pub number: f64,
    /// Unit
    pub unit: Unit,
}

impl Measurement {
    /// Shorthand constructor.
    #[must_use]
    pub const fn new(number: f64, unit: Unit) -> Self {
        Self { number, unit }
    }

    /// A length in math units.
    #[must_use]
    pub const fn mu(number: f64) -> Self {
        Self::new(number, Unit::Mu)
    }

    /// A length in ems.
    #[must_use]
    pub const fn em(number: f64) -> Self {
        Self::new(number, Unit::Em)
    }
}

/// Convert `size` into ems of `ctx`'s font, clamped by `ctx.max_size`.
#[must_use]
pub fn calculate_size(size: &Measurement, ctx: &Context<'_>) -> f64 {
    let scale = match size.unit {
        Unit::Mu => ctx.metrics().css_em_per_mu,
        Unit::Ex | Unit::Em => {
            let unit_ctx = if ctx.style.is_tight() {
                ctx.having_style(ctx.style.text())
            } else {
                ctx.clone()
            };
            let metrics = unit_ctx.metrics();
            let mut scale = if size.unit == Unit::Ex {
                metrics.x_height
            } else {
                metrics.quad
            };
            if unit_ctx.size != ctx.size {
                scale *= unit_ctx.size_multiplier / ctx.size_multiplier;
            }
            scale
        }
        absolute => {
            let pt = absolute.pt_per_unit().unwrap_or(1.0);
            pt / ctx.metrics().pt_per_em / ctx.size_multiplier
        }
    };
    f64::min(size.number * scale, ctx.max_size)
}

/// Round to 4 decimal places and append "em", dropping trailing zeros.
#[must_use]
pub fn make_em(n: f64) -> String {
    let mut s = format!("{n:.4}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        "0".clone_into(&mut s);
    }
    s.push_str("em");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_metrics::BuiltinMetrics;
    use crate::style;
    use crate::types::Settings;
    use core::str::FromStr;

    #[test]
    fn test_unit_names() {
        assert_eq!(Unit::from_str("mu").unwrap(), Unit::Mu);
        assert_eq!(Unit::Pt.as_ref(), "pt");
        assert!(Unit::from_str("bogus").is_err());
    }

    #[test]
    fn test_make_em_rounding() {
        assert_eq!(make_em(1.0), "1em");
        assert_eq!(make_em(1.23456), "1.2346em");
        assert_eq!(make_em(-0.00001), "0em");
    }

    #[test]
    fn test_absolute_units() {
        let metrics = BuiltinMetrics::new();
        let ctx = Context::new(&metrics, &Settings::default()).unwrap();
        let ems = calculate_size(&Measurement::new(10.0, Unit::Pt), &ctx);
        assert!((ems - 1.0).abs() < 1e-9);
        // absolute lengths do not shrink with the style
        let script = ctx.having_style(style::SCRIPT);
        let ems = calculate_size(&Measurement::new(10.0, Unit::Pt), &script);
        assert!((ems * script.size_multiplier - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_relative_units() {
        let metrics = BuiltinMetrics::new();
        let ctx = Context::new(&metrics, &Settings::default()).unwrap();
        assert!((calculate_size(&Measurement::em(2.0), &ctx) - 2.0).abs() < 1e-9);
        assert!((calculate_size(&Measurement::new(1.0, Unit::Ex), &ctx) - 0.431).abs() < 1e-9);
        assert!((calculate_size(&Measurement::mu(18.0), &ctx) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_size_clamps() {
        let metrics = BuiltinMetrics::new();
        let settings = Settings::builder().max_size(2.0).build();
        let ctx = Context::new(&metrics, &settings).unwrap();
        assert_eq!(calculate_size(&Measurement::em(10.0), &ctx), 2.0);
    }
}
