use crate::domain::article::PageWindow;
use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

/// Raw `limit`/`offset` as supplied by the caller.
///
/// Malformed values are normalized, never rejected: a missing, non-numeric or
/// non-positive limit becomes 20, anything above 100 becomes 100, and a
/// missing, non-numeric or negative offset becomes 0.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PageRequest {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PageRequest {
    pub fn new(limit: Option<impl ToString>, offset: Option<impl ToString>) -> Self {
        Self {
            limit: limit.map(|value| value.to_string()),
            offset: offset.map(|value| value.to_string()),
        }
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            limit: normalize_limit(self.limit.as_deref()),
            offset: normalize_offset(self.offset.as_deref()),
        }
    }
}

pub fn normalize_limit(raw: Option<&str>) -> u32 {
    match raw.map(str::trim).and_then(|value| value.parse::<i64>().ok()) {
        Some(limit) if limit > i64::from(MAX_LIMIT) => MAX_LIMIT,
        Some(limit) if limit > 0 => u32::try_from(limit).unwrap_or(DEFAULT_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

pub fn normalize_offset(raw: Option<&str>) -> u32 {
    match raw.map(str::trim).and_then(|value| value.parse::<i64>().ok()) {
        Some(offset) if offset >= 0 => u32::try_from(offset).unwrap_or(u32::MAX),
        _ => 0,
    }
}
