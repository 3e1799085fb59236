//! Canonical text keys for specifications and their child series.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rnd_calendar::Frequency;

use crate::error::{AddressingError, ProviderError};
use crate::spec::{Coefficients, ModelSpecification};

/// Prefix of every configuration key.
pub const KEY_PREFIX: &str = "rnd:v1?";

const SCALAR_FIELDS: [&str; 11] = [
    "p", "d", "q", "bp", "bd", "bq", "freq", "seed", "stde", "count", "length",
];
const COEFFICIENT_FIELDS: [&str; 4] = ["phi", "theta", "bphi", "btheta"];

/// Canonical encoded identity of a [`ModelSpecification`].
///
/// Used both as the address of a configuration and as the batch cache key.
/// Floats are written with the shortest representation that parses back to
/// the same value, so decoding an encoded key yields an equal
/// specification.
///
/// # Example
///
/// ```
/// use rnd_provider::{ConfigKey, ModelSpecification};
///
/// let spec = ModelSpecification::builder().seed(7).build().unwrap();
/// let key = ConfigKey::encode(&spec);
/// assert_eq!(key.decode().unwrap(), spec);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Encodes `spec` into its canonical key.
    pub fn encode(spec: &ModelSpecification) -> Self {
        let (p, d, q) = spec.regular_orders();
        let (bp, bd, bq) = spec.seasonal_orders();
        let mut key = format!(
            "{KEY_PREFIX}p={p}&d={d}&q={q}&bp={bp}&bd={bd}&bq={bq}&freq={}&seed={}&stde={}&count={}&length={}",
            spec.frequency().periods_per_year(),
            spec.seed(),
            spec.noise_scale(),
            spec.count(),
            spec.length(),
        );
        if let Some(c) = spec.coefficients() {
            for (name, values) in COEFFICIENT_FIELDS
                .iter()
                .zip([&c.phi, &c.theta, &c.bphi, &c.btheta])
            {
                let joined: Vec<String> = values.iter().map(f64::to_string).collect();
                key.push('&');
                key.push_str(name);
                key.push('=');
                key.push_str(&joined.join(","));
            }
        }
        Self(key)
    }

    /// Wraps a key string without checking it.
    ///
    /// Malformed keys are reported by [`ConfigKey::decode()`].
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the key into a validated specification.
    ///
    /// Parameters may appear in any order; the result is identical to the
    /// canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidKey`] when the prefix is missing, a
    /// parameter is unknown, duplicated, missing or unparsable, and
    /// [`ProviderError::InvalidSpecification`] when the decoded values are
    /// rejected by the specification builder.
    pub fn decode(&self) -> Result<ModelSpecification, ProviderError> {
        let query = self
            .0
            .strip_prefix(KEY_PREFIX)
            .ok_or_else(|| self.invalid(format!("missing '{KEY_PREFIX}' prefix")))?;

        let mut params: BTreeMap<&str, &str> = BTreeMap::new();
        for pair in query.split('&') {
            let (name, value) = pair
                .split_once('=')
                .ok_or_else(|| self.invalid(format!("parameter '{pair}' has no value")))?;
            if !SCALAR_FIELDS.contains(&name) && !COEFFICIENT_FIELDS.contains(&name) {
                return Err(self.invalid(format!("unknown parameter '{name}'")));
            }
            if params.insert(name, value).is_some() {
                return Err(self.invalid(format!("duplicate parameter '{name}'")));
            }
        }

        let periods_per_year: u16 = self.scalar(&params, "freq")?;
        let frequency = Frequency::from_periods_per_year(periods_per_year)?;

        let mut builder = ModelSpecification::builder()
            .regular_orders(
                self.scalar(&params, "p")?,
                self.scalar(&params, "d")?,
                self.scalar(&params, "q")?,
            )
            .seasonal_orders(
                self.scalar(&params, "bp")?,
                self.scalar(&params, "bd")?,
                self.scalar(&params, "bq")?,
            )
            .frequency(frequency)
            .seed(self.scalar(&params, "seed")?)
            .noise_scale(self.scalar(&params, "stde")?)
            .count(self.scalar(&params, "count")?)
            .length(self.scalar(&params, "length")?);

        let present = COEFFICIENT_FIELDS
            .iter()
            .filter(|name| params.contains_key(*name))
            .count();
        if present == COEFFICIENT_FIELDS.len() {
            builder = builder.coefficients(Coefficients {
                phi: self.list(&params, "phi")?,
                theta: self.list(&params, "theta")?,
                bphi: self.list(&params, "bphi")?,
                btheta: self.list(&params, "btheta")?,
            });
        } else if present > 0 {
            return Err(self.invalid(
                "coefficients must list all of phi, theta, bphi and btheta".to_string(),
            ));
        }

        builder.build()
    }

    fn scalar<T: FromStr>(&self, params: &BTreeMap<&str, &str>, name: &str) -> Result<T, ProviderError> {
        let raw = params
            .get(name)
            .ok_or_else(|| self.invalid(format!("missing parameter '{name}'")))?;
        raw.parse()
            .map_err(|_| self.invalid(format!("cannot parse {name}='{raw}'")))
    }

    fn list(&self, params: &BTreeMap<&str, &str>, name: &str) -> Result<Vec<f64>, ProviderError> {
        let raw = params.get(name).copied().unwrap_or_default();
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        raw.split(',')
            .map(|v| {
                v.parse()
                    .map_err(|_| self.invalid(format!("cannot parse {name} value '{v}'")))
            })
            .collect()
    }

    fn invalid(&self, reason: String) -> ProviderError {
        ProviderError::InvalidKey {
            key: self.0.clone(),
            reason,
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&ModelSpecification> for ConfigKey {
    fn from(spec: &ModelSpecification) -> Self {
        Self::encode(spec)
    }
}

/// Address of one series within a configuration: `(key, index)`.
///
/// Its textual moniker is `"<key>#<index>"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChildRef {
    source: ConfigKey,
    index: usize,
}

impl ChildRef {
    /// Creates a child reference. The index is checked on resolution.
    pub fn new(source: ConfigKey, index: usize) -> Self {
        Self { source, index }
    }

    /// Returns the configuration key.
    pub fn source(&self) -> &ConfigKey {
        &self.source
    }

    /// Returns the series index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the `"<key>#<index>"` moniker.
    pub fn moniker(&self) -> String {
        format!("{}#{}", self.source, self.index)
    }
}

impl fmt::Display for ChildRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.source, self.index)
    }
}

impl FromStr for ChildRef {
    type Err = AddressingError;

    /// Parses a `"<key>#<index>"` moniker.
    ///
    /// The key part is not decoded here. An index that is not written as
    /// plain decimal digits without leading zeros (`-1`, `+1`, `01`, `one`)
    /// is an [`AddressingError::InvalidIndex`].
    fn from_str(moniker: &str) -> Result<Self, Self::Err> {
        let (source, index) =
            moniker
                .rsplit_once('#')
                .ok_or_else(|| AddressingError::MalformedMoniker {
                    moniker: moniker.to_string(),
                })?;
        let invalid = || AddressingError::InvalidIndex {
            index: index.to_string(),
        };
        // Plain digits without leading zeros: every accepted moniker is canonical.
        let digits = !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit());
        if !digits || (index.len() > 1 && index.starts_with('0')) {
            return Err(invalid());
        }
        let index = index.parse().map_err(|_| invalid())?;
        Ok(Self::new(ConfigKey::from_raw(source), index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> ModelSpecification {
        ModelSpecification::builder()
            .regular_orders(1, 0, 0)
            .seasonal_orders(0, 0, 0)
            .frequency(Frequency::Monthly)
            .seed(42)
            .noise_scale(0.1)
            .count(3)
            .length(24)
            .build()
            .unwrap()
    }

    #[test]
    fn canonical_text() {
        assert_eq!(
            ConfigKey::encode(&example()).as_str(),
            "rnd:v1?p=1&d=0&q=0&bp=0&bd=0&bq=0&freq=12&seed=42&stde=0.1&count=3&length=24"
        );
    }

    #[test]
    fn round_trip_without_coefficients() {
        let spec = example();
        assert_eq!(ConfigKey::encode(&spec).decode().unwrap(), spec);
    }

    #[test]
    fn round_trip_with_coefficients() {
        let spec = ModelSpecification::builder()
            .regular_orders(2, 1, 1)
            .seasonal_orders(1, 1, 0)
            .frequency(Frequency::Quarterly)
            .seed(u64::MAX)
            .noise_scale(1.0 / 3.0)
            .coefficients(Coefficients {
                phi: vec![-0.123456789012345, 0.1 + 0.2],
                theta: vec![1e-300],
                bphi: vec![-0.5],
                btheta: vec![],
            })
            .build()
            .unwrap();
        let key = ConfigKey::encode(&spec);
        assert!(key.as_str().contains("&btheta="));
        assert_eq!(key.decode().unwrap(), spec);
    }

    #[test]
    fn parameter_order_does_not_matter() {
        let key = ConfigKey::from_raw(
            "rnd:v1?length=24&count=3&stde=0.1&seed=42&freq=12&bq=0&bd=0&bp=0&q=0&d=0&p=1",
        );
        assert_eq!(key.decode().unwrap(), example());
    }

    #[test]
    fn missing_prefix() {
        let err = ConfigKey::from_raw("p=1").decode().unwrap_err();
        assert!(matches!(err, ProviderError::InvalidKey { .. }));
    }

    #[test]
    fn unknown_parameter() {
        let raw = format!("{}&colour=red", ConfigKey::encode(&example()));
        let err = ConfigKey::from_raw(raw).decode().unwrap_err();
        assert!(err.to_string().contains("unknown parameter 'colour'"));
    }

    #[test]
    fn duplicate_parameter() {
        let raw = format!("{}&seed=1", ConfigKey::encode(&example()));
        let err = ConfigKey::from_raw(raw).decode().unwrap_err();
        assert!(err.to_string().contains("duplicate parameter 'seed'"));
    }

    #[test]
    fn missing_parameter() {
        let raw = ConfigKey::encode(&example()).as_str().replace("&length=24", "");
        let err = ConfigKey::from_raw(raw).decode().unwrap_err();
        assert!(err.to_string().contains("missing parameter 'length'"));
    }

    #[test]
    fn partial_coefficients_rejected() {
        let raw = format!("{}&phi=0.5", ConfigKey::encode(&example()));
        let err = ConfigKey::from_raw(raw).decode().unwrap_err();
        assert!(matches!(err, ProviderError::InvalidKey { .. }));
    }

    #[test]
    fn unsupported_frequency_is_invalid_specification() {
        let raw = ConfigKey::encode(&example()).as_str().replace("freq=12", "freq=5");
        let err = ConfigKey::from_raw(raw).decode().unwrap_err();
        assert!(matches!(err, ProviderError::InvalidSpecification { .. }));
    }

    #[test]
    fn zero_count_is_invalid_specification() {
        let raw = ConfigKey::encode(&example()).as_str().replace("count=3", "count=0");
        let err = ConfigKey::from_raw(raw).decode().unwrap_err();
        assert!(matches!(err, ProviderError::InvalidSpecification { .. }));
    }

    #[test]
    fn child_moniker_round_trip() {
        let child = ChildRef::new(ConfigKey::encode(&example()), 2);
        let parsed: ChildRef = child.moniker().parse().unwrap();
        assert_eq!(parsed, child);
        assert_eq!(child.to_string(), child.moniker());
    }

    #[test]
    fn negative_child_index() {
        let raw = format!("{}#-1", ConfigKey::encode(&example()));
        let err = raw.parse::<ChildRef>().unwrap_err();
        assert_eq!(
            err,
            AddressingError::InvalidIndex {
                index: "-1".to_string()
            }
        );
    }

    #[test]
    fn signed_or_padded_child_index() {
        let key = ConfigKey::encode(&example());
        for bad in ["+1", " 1", "1 ", "", "0x1", "007"] {
            let err = format!("{key}#{bad}").parse::<ChildRef>().unwrap_err();
            assert_eq!(
                err,
                AddressingError::InvalidIndex {
                    index: bad.to_string()
                }
            );
        }
        assert_eq!(format!("{key}#0").parse::<ChildRef>().unwrap().index(), 0);
        assert_eq!(format!("{key}#10").parse::<ChildRef>().unwrap().index(), 10);
    }

    #[test]
    fn moniker_without_index() {
        let err = "rnd:v1?p=1".parse::<ChildRef>().unwrap_err();
        assert!(matches!(err, AddressingError::MalformedMoniker { .. }));
    }
}
