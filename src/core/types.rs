use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Missing arrivals are kept as `NaN` in memory and written as `null`.
mod nullable_f64 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            s.serialize_f64(*value)
        } else {
            s.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
    }
}

/// One row of the long-format arrivals table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalRecord {
    pub country: String,
    pub iso3: String,
    pub region: String,
    pub year: i32,
    #[serde(with = "nullable_f64")]
    pub arrivals: f64,
}

impl ArrivalRecord {
    #[must_use]
    pub fn new(
        country: impl Into<String>,
        iso3: impl Into<String>,
        region: impl Into<String>,
        year: i32,
        arrivals: f64,
    ) -> Self {
        Self {
            country: country.into(),
            iso3: iso3.into(),
            region: region.into(),
            year,
            arrivals,
        }
    }
}

/// One chronological sample of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    #[serde(with = "nullable_f64")]
    pub arrivals: f64,
}

impl YearValue {
    #[must_use]
    pub const fn new(year: i32, arrivals: f64) -> Self {
        Self { year, arrivals }
    }
}

/// Filter selector value: either every option or one named option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    #[must_use]
    pub fn only(name: impl Into<String>) -> Self {
        Self::Only(name.into())
    }

    /// Parses a selector value where `"All"` (any case) means no filter.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(trimmed.to_owned())
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => name == candidate,
        }
    }

    #[must_use]
    pub fn as_option(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(name) => Some(name.as_str()),
        }
    }
}
