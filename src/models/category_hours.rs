//! Surcharge categories and per-category hour totals.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A category of compensable time.
///
/// # Example
///
/// ```
/// use surcharge_engine::models::SurchargeCategory;
///
/// assert_eq!(SurchargeCategory::Hefn.code(), "HEFN");
/// assert!(SurchargeCategory::Hefn.is_overtime());
/// assert!(!SurchargeCategory::Rn.is_overtime());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SurchargeCategory {
    /// Daytime overtime.
    Hed,
    /// Nighttime overtime.
    Hen,
    /// Daytime overtime on a holiday.
    Hefd,
    /// Nighttime overtime on a holiday.
    Hefn,
    /// Ordinary-window night surcharge.
    Rn,
    /// Ordinary-window holiday surcharge.
    Rd,
}

impl SurchargeCategory {
    /// All categories in their canonical order.
    pub const ALL: [SurchargeCategory; 6] = [
        SurchargeCategory::Hed,
        SurchargeCategory::Hen,
        SurchargeCategory::Hefd,
        SurchargeCategory::Hefn,
        SurchargeCategory::Rn,
        SurchargeCategory::Rd,
    ];

    /// The payroll code for this category.
    pub fn code(&self) -> &'static str {
        match self {
            SurchargeCategory::Hed => "HED",
            SurchargeCategory::Hen => "HEN",
            SurchargeCategory::Hefd => "HEFD",
            SurchargeCategory::Hefn => "HEFN",
            SurchargeCategory::Rn => "RN",
            SurchargeCategory::Rd => "RD",
        }
    }

    /// A human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            SurchargeCategory::Hed => "Daytime overtime",
            SurchargeCategory::Hen => "Nighttime overtime",
            SurchargeCategory::Hefd => "Daytime overtime on holiday",
            SurchargeCategory::Hefn => "Nighttime overtime on holiday",
            SurchargeCategory::Rn => "Ordinary night surcharge",
            SurchargeCategory::Rd => "Ordinary holiday surcharge",
        }
    }

    /// Returns true for the four overtime categories.
    pub fn is_overtime(&self) -> bool {
        matches!(
            self,
            SurchargeCategory::Hed
                | SurchargeCategory::Hen
                | SurchargeCategory::Hefd
                | SurchargeCategory::Hefn
        )
    }
}

impl fmt::Display for SurchargeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Hours per surcharge category for one shift.
///
/// All six categories are always present and default to zero. Serialized
/// keys are the payroll codes (`HED`, `HEN`, `HEFD`, `HEFN`, `RN`, `RD`).
///
/// # Example
///
/// ```
/// use surcharge_engine::models::{CategoryHours, SurchargeCategory};
/// use rust_decimal::Decimal;
///
/// let hours = CategoryHours {
///     rn: Decimal::from(6),
///     rd: Decimal::from(10),
///     ..CategoryHours::default()
/// };
/// assert_eq!(hours.get(SurchargeCategory::Rd), Decimal::from(10));
/// assert_eq!(hours.overtime_total(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryHours {
    /// Daytime overtime hours.
    #[serde(rename = "HED")]
    pub hed: Decimal,
    /// Nighttime overtime hours.
    #[serde(rename = "HEN")]
    pub hen: Decimal,
    /// Daytime holiday overtime hours.
    #[serde(rename = "HEFD")]
    pub hefd: Decimal,
    /// Nighttime holiday overtime hours.
    #[serde(rename = "HEFN")]
    pub hefn: Decimal,
    /// Ordinary night surcharge hours.
    #[serde(rename = "RN")]
    pub rn: Decimal,
    /// Ordinary holiday surcharge hours.
    #[serde(rename = "RD")]
    pub rd: Decimal,
}

impl CategoryHours {
    /// Returns the hours recorded for a category.
    pub fn get(&self, category: SurchargeCategory) -> Decimal {
        match category {
            SurchargeCategory::Hed => self.hed,
            SurchargeCategory::Hen => self.hen,
            SurchargeCategory::Hefd => self.hefd,
            SurchargeCategory::Hefn => self.hefn,
            SurchargeCategory::Rn => self.rn,
            SurchargeCategory::Rd => self.rd,
        }
    }

    /// Adds hours to a category.
    pub fn add(&mut self, category: SurchargeCategory, hours: Decimal) {
        let slot = match category {
            SurchargeCategory::Hed => &mut self.hed,
            SurchargeCategory::Hen => &mut self.hen,
            SurchargeCategory::Hefd => &mut self.hefd,
            SurchargeCategory::Hefn => &mut self.hefn,
            SurchargeCategory::Rn => &mut self.rn,
            SurchargeCategory::Rd => &mut self.rd,
        };
        *slot += hours;
    }

    /// Iterates categories and their hours in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SurchargeCategory, Decimal)> + '_ {
        SurchargeCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Sum of the four overtime categories.
    pub fn overtime_total(&self) -> Decimal {
        self.hed + self.hen + self.hefd + self.hefn
    }

    /// Returns true if every category is zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, hours)| hours.is_zero())
    }

    /// Strips trailing zeros from every value.
    pub fn normalized(&self) -> Self {
        self.map(|hours| hours.normalize())
    }

    /// Rounds every value to `dp` decimal places, halves away from zero.
    ///
    /// Payroll sheets display hours to one decimal place.
    ///
    /// ```
    /// use surcharge_engine::models::CategoryHours;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let hours = CategoryHours { rn: Decimal::from_str("2.25").unwrap(), ..Default::default() };
    /// assert_eq!(hours.rounded(1).rn, Decimal::from_str("2.3").unwrap());
    /// ```
    pub fn rounded(&self, dp: u32) -> Self {
        self.map(|hours| hours.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Lists categories whose hours differ from `other`.
    ///
    /// `self` is treated as the expected value.
    pub fn differences(&self, other: &CategoryHours) -> Vec<CategoryDifference> {
        self.iter()
            .filter_map(|(category, expected)| {
                let actual = other.get(category);
                (expected != actual).then(|| CategoryDifference {
                    category,
                    expected,
                    actual,
                    delta: (actual - expected).normalize(),
                })
            })
            .collect()
    }

    fn map(&self, f: impl Fn(Decimal) -> Decimal) -> Self {
        Self {
            hed: f(self.hed),
            hen: f(self.hen),
            hefd: f(self.hefd),
            hefn: f(self.hefn),
            rn: f(self.rn),
            rd: f(self.rd),
        }
    }
}

/// A single category on which two classifications disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDifference {
    /// The category that differs.
    pub category: SurchargeCategory,
    /// The reference value.
    pub expected: Decimal,
    /// The value under comparison.
    pub actual: Decimal,
    /// `actual - expected`.
    pub delta: Decimal,
}
