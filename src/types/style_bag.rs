use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, FromRepr};

/// Presentation properties a span can carry for the renderer.
///
/// Layout never reads these back except for the vertical offset and margins
/// it wrote itself; they exist so a renderer can place and paint the box.
#[derive(
    EnumIter, Debug, Copy, AsRefStr, PartialEq, Eq, Hash, Clone, Display, EnumCount, FromRepr,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum StyleProperty {
    /// Foreground color.
    Color,
    /// Fill behind the box.
    BackgroundColor,
    /// Color of all borders.
    BorderColor,
    /// Border line style (`solid`, `dashed`, ...).
    BorderStyle,
    /// Width of all four borders, in em.
    BorderWidth,
    /// Thickness of the bottom border; rules and lines are drawn with it.
    BorderBottomWidth,
    /// Thickness of the right border; array column rules are drawn with it.
    BorderRightWidth,
    /// Style of the right border.
    BorderRightStyle,
    /// Vertical offset of a vlist row, measured downward, in em.
    Top,
    /// Explicit height, in em.
    Height,
    /// Explicit width, in em.
    Width,
    /// Minimum width, in em.
    MinWidth,
    /// Horizontal offset before the box, in em.
    MarginLeft,
    /// Horizontal offset after the box, in em.
    MarginRight,
    /// Horizontal position for overlap boxes, in em.
    Left,
}

/// A single property value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StyleValue {
    /// A length in em.
    Em(f64),
    /// A color name or keyword.
    Keyword(String),
}

impl StyleValue {
    /// The length, if this value is one.
    #[must_use]
    pub const fn as_em(&self) -> Option<f64> {
        match self {
            Self::Em(value) => Some(*value),
            Self::Keyword(_) => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Em(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Keyword(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Keyword(value)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Em(value) => write!(f, "{value:.4}em"),
            Self::Keyword(keyword) => f.write_str(keyword),
        }
    }
}

/// Array-backed map from [`StyleProperty`] to [`StyleValue`].
#[derive(Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleBag {
    map: [Option<StyleValue>; StyleProperty::COUNT],
}

impl fmt::Debug for StyleBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ds = f.debug_struct("StyleBag");
        for (property, value) in self {
            ds.field(property.as_ref(), value);
        }
        ds.finish()
    }
}

/// Iterator over the properties that are set.
pub struct StyleBagIter<'a> {
    index: usize,
    data: &'a [Option<StyleValue>; StyleProperty::COUNT],
}

impl<'a> Iterator for StyleBagIter<'a> {
    type Item = (StyleProperty, &'a StyleValue);
    fn next(&mut self) -> Option<Self::Item> {
        while self.index < StyleProperty::COUNT {
            let idx = self.index;
            self.index += 1;
            if let Some(v) = &self.data[idx]
                && let Some(prop) = StyleProperty::from_repr(idx as u8)
            {
                return Some((prop, v));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a StyleBag {
    type Item = (StyleProperty, &'a StyleValue);
    type IntoIter = StyleBagIter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        StyleBagIter {
            index: 0,
            data: &self.map,
        }
    }
}

impl StyleBag {
    /// Inserts or replaces a property.
    #[inline]
    pub fn insert<T>(&mut self, property: StyleProperty, value: T)
    where
        T: Into<StyleValue>,
    {
        self.map[property as usize] = Some(value.into());
    }

    /// Copies every property set in `other` over this bag.
    pub fn extend(&mut self, other: &Self) {
        for (property, value) in other {
            self.map[property as usize] = Some(value.clone());
        }
    }

    /// Removes a property, returning its previous value.
    pub const fn remove(&mut self, property: StyleProperty) -> Option<StyleValue> {
        self.map[property as usize].take()
    }

    /// Whether the property is set.
    #[must_use]
    pub const fn contains_key(&self, property: StyleProperty) -> bool {
        self.map[property as usize].is_some()
    }

    /// The value of a property.
    #[must_use]
    pub const fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.map[property as usize].as_ref()
    }

    /// The value of a length property, in em.
    #[must_use]
    pub fn em(&self, property: StyleProperty) -> Option<f64> {
        self.get(property).and_then(StyleValue::as_em)
    }

    /// Whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.iter().all(Option::is_none)
    }

    /// Iterates over set properties in declaration order.
    #[must_use]
    pub fn iter(&self) -> StyleBagIter<'_> {
        self.into_iter()
    }
}
