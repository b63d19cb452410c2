use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{Deserializer, IgnoredAny};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    Market,
    Limit,
    CancelOrder,
    OrderFilled,
    /// Any kind this crate does not know about, kept verbatim.
    Other(String),
}

impl From<String> for NotificationKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "Market" => Self::Market,
            "Limit" => Self::Limit,
            "CancelOrder" => Self::CancelOrder,
            "OrderFilled" => Self::OrderFilled,
            _ => Self::Other(kind),
        }
    }
}

impl From<NotificationKind> for String {
    fn from(kind: NotificationKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => f.write_str("Market"),
            Self::Limit => f.write_str("Limit"),
            Self::CancelOrder => f.write_str("CancelOrder"),
            Self::OrderFilled => f.write_str("OrderFilled"),
            Self::Other(kind) => f.write_str(kind),
        }
    }
}

/// Handle on the transaction a notification is about.
///
/// A live handle cannot be persisted. It is written as `{}` and every
/// handle read back from storage is [`TxHandle::Settled`], whatever was
/// saved. A record without a handle keeps none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxHandle {
    /// Submitted during this session; the hash is only known in memory.
    Submitted(String),
    /// Placeholder for a transaction that is no longer being tracked.
    Settled,
}

impl Serialize for TxHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_map(Some(0))?.end()
    }
}

impl<'de> Deserialize<'de> for TxHandle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Self::Settled)
    }
}

/// A stored notification.
///
/// Only `amount`, `timestamp` and `tx` are decoded into typed values; every
/// field is optional, and fields left out on read are left out on write, so
/// a record passes through a get and a save with its shape unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NotificationKind>,
    /// Token amounts in base units routinely exceed 28 significant digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<BigDecimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_timestamp_millis"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx: Option<TxHandle>,
    /// Fields this crate does not interpret (token, side, ...), carried
    /// through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Notification {
    pub fn new(id: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: Some(id.into()),
            kind: Some(kind),
            amount: None,
            timestamp: None,
            tx: None,
            extra: Map::new(),
        }
    }

    pub fn with_amount(mut self, amount: BigDecimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_tx(mut self, tx: TxHandle) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Milliseconds since the epoch; a missing timestamp counts as the epoch.
    pub fn sort_key(&self) -> i64 {
        self.timestamp.map_or(0, |ts| ts.timestamp_millis())
    }
}

/// Writes timestamps with millisecond precision and a `Z` suffix, the form
/// browsers produce for dates (`2019-03-01T12:00:00.000Z`).
fn serialize_timestamp_millis<S>(
    timestamp: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match timestamp {
        Some(ts) => serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => serializer.serialize_none(),
    }
}

/// One CSV line of `notice-ledger <store> notifications <account>`.
#[derive(Debug, Serialize, PartialEq)]
pub struct NotificationRow {
    pub id: Option<String>,
    pub kind: Option<String>,
    pub amount: Option<BigDecimal>,
    pub timestamp: Option<String>,
}

impl From<&Notification> for NotificationRow {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.clone(),
            kind: notification.kind.as_ref().map(NotificationKind::to_string),
            amount: notification.amount.clone(),
            timestamp: notification
                .timestamp
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}
