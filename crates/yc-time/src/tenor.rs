//! `Tenor` — a signed magnitude plus a unit code, e.g. `3M`, `-1Y`, `2B`.
//!
//! Tenors are parsed from and printed back to their exact source text, so
//! `"+3M"` prints as `"+3M"`.  Equality and hashing use the canonical form,
//! which drops a leading `+`.

use std::hash::{Hash, Hasher};
use std::str::FromStr;

use yc_core::errors::{Error, Result};

/// The unit of a [`Tenor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenorUnit {
    /// Calendar days (`D`, or the legacy alias `B`).
    Day,
    /// Calendar months (`M`).
    Month,
    /// Quarters of three months (`Q`).
    Quarter,
    /// Calendar years (`Y`).
    Year,
    /// `F` tenors.  Provisional: stepped as a quarter until its own meaning
    /// is settled.
    F,
    /// Sentinel meaning "no offset, use the reference date as-is" (`E`).
    E,
}

impl TenorUnit {
    /// Map a unit character to a unit, or `None` if it is not recognized.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'D' | 'B' => Some(TenorUnit::Day),
            'M' => Some(TenorUnit::Month),
            'Q' => Some(TenorUnit::Quarter),
            'Y' => Some(TenorUnit::Year),
            'F' => Some(TenorUnit::F),
            'E' => Some(TenorUnit::E),
            _ => None,
        }
    }

    /// The canonical unit character.
    pub fn to_char(self) -> char {
        match self {
            TenorUnit::Day => 'D',
            TenorUnit::Month => 'M',
            TenorUnit::Quarter => 'Q',
            TenorUnit::Year => 'Y',
            TenorUnit::F => 'F',
            TenorUnit::E => 'E',
        }
    }
}

impl std::fmt::Display for TenorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TenorUnit::Day => write!(f, "Day(s)"),
            TenorUnit::Month => write!(f, "Month(s)"),
            TenorUnit::Quarter => write!(f, "Quarter(s)"),
            TenorUnit::Year => write!(f, "Year(s)"),
            TenorUnit::F => write!(f, "F"),
            TenorUnit::E => write!(f, "E"),
        }
    }
}

/// A relative time offset such as three months or one day.
#[derive(Clone)]
pub struct Tenor {
    text: String,
    magnitude: i32,
    unit: TenorUnit,
}

impl Tenor {
    /// Parse a tenor from `[+-]?<digits><unit>`.
    ///
    /// An empty numeric prefix means a magnitude of zero, so `"E"` is valid.
    ///
    /// # Errors
    /// [`Error::Parse`] echoing `text` when the unit is not recognized or the
    /// prefix is not an integer.
    pub fn parse(text: &str) -> Result<Self> {
        let unit_char = text
            .chars()
            .last()
            .ok_or_else(|| Error::parse(text, "empty tenor"))?;
        let unit = TenorUnit::from_char(unit_char)
            .ok_or_else(|| Error::parse(text, format!("unknown tenor unit '{unit_char}'")))?;
        let prefix = &text[..text.len() - unit_char.len_utf8()];
        let magnitude = if prefix.is_empty() {
            0
        } else {
            prefix
                .parse::<i32>()
                .map_err(|e| Error::parse(text, format!("invalid magnitude '{prefix}': {e}")))?
        };
        if magnitude == i32::MIN {
            return Err(Error::parse(text, "magnitude cannot be negated"));
        }
        Ok(Self {
            text: text.to_owned(),
            magnitude,
            unit,
        })
    }

    /// Build a tenor from a magnitude and unit, printing it canonically.
    ///
    /// `i32::MIN` has no negation and is clamped to `-i32::MAX`, the same
    /// bound [`Tenor::parse`] enforces.
    pub fn new(magnitude: i32, unit: TenorUnit) -> Self {
        let magnitude = magnitude.max(-i32::MAX);
        Self {
            text: format!("{magnitude}{}", unit.to_char()),
            magnitude,
            unit,
        }
    }

    /// `n` calendar days.
    pub fn days(n: i32) -> Self {
        Self::new(n, TenorUnit::Day)
    }

    /// `n` months.
    pub fn months(n: i32) -> Self {
        Self::new(n, TenorUnit::Month)
    }

    /// `n` years.
    pub fn years(n: i32) -> Self {
        Self::new(n, TenorUnit::Year)
    }

    /// The sentinel tenor `E`.
    pub fn sentinel() -> Self {
        Self {
            text: "E".to_owned(),
            magnitude: 0,
            unit: TenorUnit::E,
        }
    }

    /// Signed number of units.
    pub fn magnitude(&self) -> i32 {
        self.magnitude
    }

    /// The unit.
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// `true` for the `E` sentinel, which carries no offset.
    pub fn is_sentinel(&self) -> bool {
        self.unit == TenorUnit::E
    }

    /// The exact text the tenor was built from.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn canonical(&self) -> &str {
        self.text.strip_prefix('+').unwrap_or(&self.text)
    }

    /// Flip the sign of the magnitude, keeping the unit.
    ///
    /// Works on the text: a leading `-` is removed, a leading `+` becomes
    /// `-`, anything else gets a `-` prepended.  A tenor with no digits
    /// (such as `E`) is returned unchanged.
    pub fn negate(&self) -> Self {
        // Unit characters are ASCII, so the prefix is everything but the last byte.
        if self.text.len() == 1 {
            return self.clone();
        }
        let text = if let Some(rest) = self.text.strip_prefix('-') {
            rest.to_owned()
        } else if let Some(rest) = self.text.strip_prefix('+') {
            format!("-{rest}")
        } else {
            format!("-{}", self.text)
        };
        Self {
            text,
            magnitude: self.magnitude.saturating_neg(),
            unit: self.unit,
        }
    }
}

impl std::ops::Neg for Tenor {
    type Output = Tenor;
    fn neg(self) -> Tenor {
        self.negate()
    }
}

impl std::ops::Neg for &Tenor {
    type Output = Tenor;
    fn neg(self) -> Tenor {
        self.negate()
    }
}

impl PartialEq for Tenor {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Tenor {}

impl Hash for Tenor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl FromStr for Tenor {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Tenor::parse(s)
    }
}

impl TryFrom<&str> for Tenor {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        Tenor::parse(s)
    }
}

impl std::fmt::Display for Tenor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::fmt::Debug for Tenor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tenor({})", self.text)
    }
}
