//! Parsing and validation of time-set queries arriving over the network.
//!
//! A request like `GET /?hour=14&minute=5 HTTP/1.1` asks the clock to move to
//! 2:05 without touching the seconds. Validation fails closed per field: an
//! out-of-range value is dropped as if it were absent, while a value that is
//! not a number at all rejects the whole request so the caller can fall back
//! to serving the index page.

use crate::time_of_day::fold_hour_12;

/// The fields of a time-set request that survived validation. `hour` is
/// already folded to the 1-12 form the rest of the system uses.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TimeSetQuery {
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
}

impl TimeSetQuery {
    fn any_resolved(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }
}

/// Extract the query string from an HTTP request head, e.g.
/// `"GET /?hour=3 HTTP/1.1..."` yields `"hour=3"`. `None` when the request
/// is not a GET or carries no query.
#[expect(
    clippy::arithmetic_side_effects,
    reason = "The found index plus the pattern length is within the string."
)]
#[must_use]
pub fn request_query(request: &str) -> Option<&str> {
    const GET_PREFIX: &str = "GET /";
    let path_start = request.find(GET_PREFIX)? + GET_PREFIX.len();
    let target = request.get(path_start..)?.split(' ').next()?;
    let (_, query) = target.split_once('?')?;
    if query.is_empty() { None } else { Some(query) }
}

/// Validate the raw `key=value` pairs of a query. Returns `None` when the
/// request is not handled: a present time field failed to parse as an
/// integer, or no field survived range validation. Unknown keys and
/// malformed pairs are ignored.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Range-checked immediately before the cast."
)]
pub fn resolve_query(query: &str) -> Option<TimeSetQuery> {
    let mut resolved = TimeSetQuery::default();
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "hour" => {
                let raw = value.parse::<i32>().ok()?;
                resolved.hour = (0..=23).contains(&raw).then(|| fold_hour_12(raw as u8));
            }
            "minute" => {
                let raw = value.parse::<i32>().ok()?;
                resolved.minute = (0..=59).contains(&raw).then_some(raw as u8);
            }
            "second" => {
                let raw = value.parse::<i32>().ok()?;
                resolved.second = (0..=59).contains(&raw).then_some(raw as u8);
            }
            _ => {}
        }
    }
    resolved.any_resolved().then_some(resolved)
}
