/// Browser clock access
///
/// Conversions live in `contracts::shared::date_format`; pages pass them
/// `chrono::Local`, which asks the browser for the offset of each instant.
use chrono::{Local, Utc};
use contracts::shared::date_format::to_local_input;

/// Current instant as `<input type="datetime-local">` text
pub fn now_local_input() -> String {
    to_local_input(Utc::now(), &Local)
}
