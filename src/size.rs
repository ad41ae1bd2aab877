//! Human-readable byte counts
//!
//! Display-only: sizes never influence classification.

use byte_unit::{Byte, UnitType};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Unit family used when formatting sizes
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnits {
    /// Powers of 1000 (KB, MB, ...)
    #[default]
    Decimal,
    /// Powers of 1024 (KiB, MiB, ...)
    Binary,
}

impl SizeUnits {
    const fn unit_type(self) -> UnitType {
        match self {
            Self::Decimal => UnitType::Decimal,
            Self::Binary => UnitType::Binary,
        }
    }

    const fn base(self) -> u64 {
        match self {
            Self::Decimal => 1000,
            Self::Binary => 1024,
        }
    }
}

impl std::str::FromStr for SizeUnits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "decimal" => Ok(Self::Decimal),
            "binary" => Ok(Self::Binary),
            other => Err(format!("unknown size units '{other}' (expected decimal or binary)")),
        }
    }
}

impl std::fmt::Display for SizeUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decimal => f.write_str("decimal"),
            Self::Binary => f.write_str("binary"),
        }
    }
}

/// Format a byte count, e.g. `512 B` or `1.2 KB`
#[must_use]
pub fn humanize(bytes: u64, units: SizeUnits) -> String {
    if bytes < units.base() {
        return format!("{bytes} B");
    }
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(units.unit_type());
    format!("{adjusted:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_sizes_are_integral_bytes() {
        assert_eq!(humanize(0, SizeUnits::Decimal), "0 B");
        assert_eq!(humanize(512, SizeUnits::Decimal), "512 B");
        assert_eq!(humanize(999, SizeUnits::Decimal), "999 B");
        assert_eq!(humanize(1023, SizeUnits::Binary), "1023 B");
    }

    #[test]
    fn test_decimal_units() {
        let s = humanize(1_200, SizeUnits::Decimal);
        assert!(s.starts_with("1.2 "), "got {s}");
        assert!(s.ends_with("KB"), "got {s}");
        assert!(humanize(3_500_000, SizeUnits::Decimal).starts_with("3.5 "));
    }

    #[test]
    fn test_binary_units() {
        let s = humanize(1_536, SizeUnits::Binary);
        assert!(s.starts_with("1.5 "), "got {s}");
        assert!(s.ends_with("KiB"), "got {s}");
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("Binary".parse::<SizeUnits>(), Ok(SizeUnits::Binary));
        assert!("metric".parse::<SizeUnits>().is_err());
    }
}
