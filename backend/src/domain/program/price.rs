//! Display price with a derived numeric amount.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NON_NUMERIC_RE: OnceLock<Regex> = OnceLock::new();
static LEADING_DECIMAL_RE: OnceLock<Regex> = OnceLock::new();

fn compile(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("price regex failed to compile: {error}"))
    })
}

fn non_numeric_regex() -> &'static Regex {
    compile(&NON_NUMERIC_RE, r"[^0-9.\-]+")
}

fn leading_decimal_regex() -> &'static Regex {
    compile(&LEADING_DECIMAL_RE, r"^-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)")
}

/// Price as entered by an administrator, for example `"$25,000"`.
///
/// # Examples
/// ```
/// use scholar::domain::Price;
///
/// assert_eq!(Price::from("$25,000").amount(), Some(25_000.0));
/// assert_eq!(Price::from("on request").amount(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    /// Display form exactly as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Numeric amount after dropping everything but digits, `.` and `-`.
    ///
    /// The longest leading decimal of what remains is the amount, so a range
    /// such as `"$10,000 - $15,000"` yields its lower bound. Returns `None`
    /// when nothing remains that starts with a number.
    #[must_use]
    pub fn amount(&self) -> Option<f64> {
        let digits = non_numeric_regex().replace_all(&self.0, "");
        leading_decimal_regex()
            .find(&digits)
            .and_then(|number| number.as_str().parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Price {
    fn from(value: String) -> Self {
        Self(value)
    }
}
