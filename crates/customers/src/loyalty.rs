//! Loyalty program: accrued points and the tier label derived from them.

use serde::{Deserialize, Serialize};

use clientbook_core::{DomainError, DomainResult};

/// Loyalty tier, ordered Bronze < Silver < Gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyLevel {
    Bronze,
    Silver,
    Gold,
}

impl LoyaltyLevel {
    pub const SILVER_THRESHOLD: u64 = 500;
    pub const GOLD_THRESHOLD: u64 = 1000;

    pub fn from_points(points: u64) -> Self {
        if points >= Self::GOLD_THRESHOLD {
            LoyaltyLevel::Gold
        } else if points >= Self::SILVER_THRESHOLD {
            LoyaltyLevel::Silver
        } else {
            LoyaltyLevel::Bronze
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoyaltyLevel::Bronze => "Bronze",
            LoyaltyLevel::Silver => "Silver",
            LoyaltyLevel::Gold => "Gold",
        }
    }
}

impl core::fmt::Display for LoyaltyLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful [`LoyaltyProgram::add_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoyaltyUpdate {
    pub added: u64,
    pub total: u64,
    pub level: LoyaltyLevel,
}

/// Points balance plus its derived level.
///
/// `level` is only ever written together with `points`, so it always matches
/// `LoyaltyLevel::from_points(points)`. Points never decrease, hence the level
/// never regresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoyaltyProgram {
    points: u64,
    level: LoyaltyLevel,
}

impl Default for LoyaltyProgram {
    fn default() -> Self {
        Self::with_points(0)
    }
}

impl LoyaltyProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points(points: u64) -> Self {
        Self {
            points,
            level: LoyaltyLevel::from_points(points),
        }
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn level(&self) -> LoyaltyLevel {
        self.level
    }

    /// Credit `points` to the balance and recompute the level.
    ///
    /// Negative amounts, and amounts that would overflow the balance, are
    /// rejected with [`DomainError::InvalidArgument`] and change nothing.
    pub fn add_points(&mut self, points: i64) -> DomainResult<LoyaltyUpdate> {
        let added = u64::try_from(points).map_err(|_| {
            DomainError::invalid_argument(format!(
                "loyalty points must not be negative, got {points}"
            ))
        })?;
        let total = self.points.checked_add(added).ok_or_else(|| {
            DomainError::invalid_argument("loyalty points balance would overflow")
        })?;

        self.points = total;
        self.level = LoyaltyLevel::from_points(total);

        Ok(LoyaltyUpdate {
            added,
            total,
            level: self.level,
        })
    }

    pub fn loyalty_info(&self) -> String {
        format!("Level: {}, Points: {}", self.level, self.points)
    }
}
