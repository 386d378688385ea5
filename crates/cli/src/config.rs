//! Demo configuration, read once from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `CLIENTBOOK_ORDER_AMOUNT` | `5000.00` |
//! | `CLIENTBOOK_BONUS_POINTS` | `250` |
//! | `CLIENTBOOK_LOG_FORMAT` | `json` |
//!
//! Invalid values (unparseable, or a non-positive order amount) fall back to
//! the default with a warning.

use core::str::FromStr;

use clientbook_core::Money;
use clientbook_observability::LogFormat;

pub const ORDER_AMOUNT_VAR: &str = "CLIENTBOOK_ORDER_AMOUNT";
pub const BONUS_POINTS_VAR: &str = "CLIENTBOOK_BONUS_POINTS";
pub const LOG_FORMAT_VAR: &str = "CLIENTBOOK_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Amount of the order placed by every demo customer.
    pub order_amount: Money,
    /// Loyalty points credited to the VIP customer.
    pub bonus_points: i64,
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            order_amount: Money::from_minor(500_000),
            bonus_points: 250,
            log_format: LogFormat::Json,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            order_amount: parse_checked_or(
                &lookup,
                ORDER_AMOUNT_VAR,
                defaults.order_amount,
                |amount: &Money| {
                    if amount.is_positive() {
                        Ok(())
                    } else {
                        Err("order amount must be positive".to_string())
                    }
                },
            ),
            bonus_points: parse_or(&lookup, BONUS_POINTS_VAR, defaults.bonus_points),
            log_format: parse_or(&lookup, LOG_FORMAT_VAR, defaults.log_format),
        }
    }
}

/// Log format alone, for installing the subscriber before the full config is
/// read (so its warnings are not lost).
pub fn log_format_from_env() -> LogFormat {
    std::env::var(LOG_FORMAT_VAR)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + core::fmt::Debug,
    T::Err: core::fmt::Display,
{
    parse_checked_or(lookup, key, default, |_| Ok(()))
}

/// Like [`parse_or`], but a parsed value must also pass `check`.
fn parse_checked_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    check: impl Fn(&T) -> Result<(), String>,
) -> T
where
    T: FromStr + core::fmt::Debug,
    T::Err: core::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    let parsed = raw
        .parse::<T>()
        .map_err(|err| err.to_string())
        .and_then(|value| check(&value).map(|()| value));
    match parsed {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(
                key,
                value = %raw,
                error = %error,
                default = ?default,
                "invalid setting; using default"
            );
            default
        }
    }
}
