//! Inter-atom spacing tables
//!
//! Glue inserted between two adjacent boxes of an hlist depends only on their
//! class tags. Display and text styles use [`SPACINGS`]; script styles use the
//! reduced [`TIGHT_SPACINGS`]. Values are in math units.
//!
//! | Left \ Right | mord | mop  | mbin | mrel | mopen | mclose | mpunct | minner |
//! |--------------|------|------|------|------|-------|--------|--------|--------|
//! | mord         | -    | thin | med  | thick| -     | -      | -      | thin   |
//! | mop          | thin | thin | -    | thick| -     | -      | -      | thin   |
//! | mbin         | med  | med  | -    | -    | med   | -      | -      | med    |
//! | mrel         | thick| thick| -    | -    | thick | -      | -      | thick  |
//! | mopen        | -    | -    | -    | -    | -     | -      | -      | -      |
//! | mclose       | -    | thin | med  | thick| -     | -      | -      | thin   |
//! | mpunct       | thin | thin | -    | thick| thin  | thin   | thin   | thin   |
//! | minner       | thin | thin | med  | thick| thin  | -      | thin   | thin   |

use phf::{Map, phf_map, phf_set};

use crate::span::SpanType;
use crate::units::{Measurement, Unit};

/// `\,`
pub const THINSPACE: Measurement = Measurement::new(3.0, Unit::Mu);
/// `\:`
pub const MEDIUMSPACE: Measurement = Measurement::new(4.0, Unit::Mu);
/// `\;`
pub const THICKSPACE: Measurement = Measurement::new(5.0, Unit::Mu);

/// Left class name to right class name to glue.
pub type Spacings = Map<&'static str, Map<&'static str, Measurement>>;

/// Spacing for display and text styles.
pub const SPACINGS: Spacings = phf_map! {
    "mord" => phf_map! {
        "mop" => THINSPACE,
        "mbin" => MEDIUMSPACE,
        "mrel" => THICKSPACE,
        "minner" => THINSPACE,
    },
    "mop" => phf_map! {
        "mord" => THINSPACE,
        "mop" => THINSPACE,
        "mrel" => THICKSPACE,
        "minner" => THINSPACE,
    },
    "mbin" => phf_map! {
        "mord" => MEDIUMSPACE,
        "mop" => MEDIUMSPACE,
        "mopen" => MEDIUMSPACE,
        "minner" => MEDIUMSPACE,
    },
    "mrel" => phf_map! {
        "mord" => THICKSPACE,
        "mop" => THICKSPACE,
        "mopen" => THICKSPACE,
        "minner" => THICKSPACE,
    },
    "mopen" => phf_map!{},
    "mclose" => phf_map! {
        "mop" => THINSPACE,
        "mbin" => MEDIUMSPACE,
        "mrel" => THICKSPACE,
        "minner" => THINSPACE,
    },
    "mpunct" => phf_map! {
        "mord" => THINSPACE,
        "mop" => THINSPACE,
        "mrel" => THICKSPACE,
        "mopen" => THINSPACE,
        "mclose" => THINSPACE,
        "mpunct" => THINSPACE,
        "minner" => THINSPACE,
    },
    "minner" => phf_map! {
        "mord" => THINSPACE,
        "mop" => THINSPACE,
        "mbin" => MEDIUMSPACE,
        "mrel" => THICKSPACE,
        "mopen" => THINSPACE,
        "mpunct" => THINSPACE,
        "minner" => THINSPACE,
    },
};

/// Spacing for script and scriptscript styles.
pub const TIGHT_SPACINGS: Spacings = phf_map! {
    "mord" => phf_map! {
        "mop" => THINSPACE,
    },
    "mop" => phf_map! {
        "mord" => THINSPACE,
        "mop" => THINSPACE,
    },
    "mbin" => phf_map!{},
    "mrel" => phf_map!{},
    "mopen" => phf_map!{},
    "mclose" => phf_map! {
        "mop" => THINSPACE,
    },
    "mpunct" => phf_map!{},
    "minner" => phf_map! {
        "mop" => THINSPACE,
    },
};

/// A binary operator following one of these (or nothing) becomes ordinary.
pub const BIN_LEFT_CANCELLER: phf::Set<&'static str> =
    phf_set! { "leftmost", "mbin", "mopen", "mrel", "mop", "mpunct" };

/// A binary operator followed by one of these (or nothing) becomes ordinary.
pub const BIN_RIGHT_CANCELLER: phf::Set<&'static str> =
    phf_set! { "rightmost", "mrel", "mclose", "mpunct" };

/// Glue between a `left` box and a `right` box, if any.
#[must_use]
pub fn spacing_between(left: SpanType, right: SpanType, tight: bool) -> Option<Measurement> {
    let table = if tight { &TIGHT_SPACINGS } else { &SPACINGS };
    table
        .get(left.as_ref())
        .and_then(|row| row.get(right.as_ref()))
        .copied()
}
