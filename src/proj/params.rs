//! `+key=value` parameter sets and their typed accessors.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of a projection definition, keyed by name.
///
/// Keys keep their case (`R_A` and `r_a` are different keys). A key repeated
/// in the definition keeps its last value. Accessors never fail: a missing
/// key and a value that does not parse as the requested type both read as
/// [`None`].
///
/// # Example
///
/// ```
/// use projector::ParamSet;
///
/// let params = ParamSet::parse("+proj=merc +lat_ts=12d30'S +over +k=0.9996");
/// assert_eq!(params.string("proj"), Some("merc"));
/// assert_eq!(params.bool("over"), Some(true));
/// assert_eq!(params.float("k"), Some(0.9996));
/// assert!((params.degree("lat_ts").unwrap() + 12.5_f64.to_radians()).abs() < 1e-15);
/// assert_eq!(params.float("x_0"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParamSet {
    params: HashMap<String, String>,
}

impl ParamSet {
    /// Makes a [`ParamSet`] from a `+`-delimited definition string.
    ///
    /// Each token is `key` or `key=value`, split on the first `=`.
    /// Tokens that are empty after trimming are skipped.
    pub fn parse(definition: &str) -> Self {
        definition
            .split('+')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(key_value)
            .collect()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Returns `true` if `key` was given, with or without a value.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the raw value of `key`.
    #[inline]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns `key` as a boolean.
    ///
    /// A bare flag (`+over`) reads as `true`; otherwise the value must be one
    /// of `1 t T true TRUE True 0 f F false FALSE False`.
    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.string(key)? {
            "" => Some(true),
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
            _ => None,
        }
    }

    /// Returns `key` as a float.
    pub fn float(&self, key: &str) -> Option<f64> {
        self.string(key)?.trim().parse::<f64>().ok()
    }

    /// Returns `key` as an angle in radians, read with [`parse_dms`].
    pub fn degree(&self, key: &str) -> Option<f64> {
        parse_dms(self.string(key)?).map(f64::to_radians)
    }
}

impl<K, V> FromIterator<(K, V)> for ParamSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = ParamSet::default();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Splits `key=value` on the first `=`. A token without `=` has an empty value.
pub(crate) fn key_value(token: &str) -> (&str, &str) {
    token.split_once('=').unwrap_or((token, ""))
}

/// Returns degrees from a DMS notation angle.
///
/// Accepts an optional leading sign, then any of `<deg>d`, `<min>'` and
/// `<sec>"` in that order, then an optional hemisphere letter (`W`/`S` flip
/// the sign, `E`/`N` do not). A string without `d` is read as plain degrees.
/// Returns [`None`] if any component is not a number.
///
/// # Example
///
/// ```
/// # use projector::proj::params::parse_dms;
/// assert_eq!(parse_dms("18.5"), Some(18.5));
/// assert_eq!(parse_dms("17d40'W"), Some(-(17.0 + 40.0 / 60.0)));
/// assert_eq!(parse_dms("0dE"), Some(0.0));
/// assert_eq!(parse_dms("north"), None);
/// ```
pub fn parse_dms(s: &str) -> Option<f64> {
    let s = s.trim();

    let (s, flip) = match s.char_indices().last() {
        Some((i, 'W' | 'w' | 'S' | 's')) => (&s[..i], true),
        Some((i, 'E' | 'e' | 'N' | 'n')) => (&s[..i], false),
        _ => (s, false),
    };

    let (s, negative) = if let Some(rest) = s.strip_prefix('-') {
        (rest, true)
    } else {
        (s.strip_prefix('+').unwrap_or(s), false)
    };

    let mut rest = s;
    let mut value = 0.0;
    let mut marked = false;
    let mut digits = false;
    for (mark, per_degree) in [('d', 1.0), ('\'', 60.0), ('"', 3600.0)] {
        if let Some((component, tail)) = rest.split_once(mark) {
            let component = component.trim();
            if !component.is_empty() {
                value += parse_component(component)? / per_degree;
                digits = true;
            }
            rest = tail;
            marked = true;
        }
    }

    let rest = rest.trim();
    if !rest.is_empty() {
        if marked {
            return None;
        }
        value = parse_component(rest)?;
        digits = true;
    }
    if !digits {
        return None;
    }

    if negative != flip {
        value = -value;
    }
    Some(value)
}

fn parse_component(s: &str) -> Option<f64> {
    if s.starts_with(['+', '-']) {
        return None;
    }
    s.parse::<f64>().ok()
}
