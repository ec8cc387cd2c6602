//! Wall-clock formatting for outgoing message timestamps.
//!
//! TRADE-OFFS
//! ==========
//! Only the browser knows the user's local time. Server renders never send
//! messages, so the non-hydrate path returns a fixed placeholder.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Placeholder time used outside the browser.
pub const PLACEHOLDER_TIME: &str = "00:00";

/// Format a 24-hour clock reading in the seed style, e.g. `2:05 PM`.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    let suffix = if hours % 24 >= 12 { "PM" } else { "AM" };
    let hour = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{:02} {suffix}", minutes % 60)
}

/// Current local time, formatted for a message bubble.
pub fn now_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PLACEHOLDER_TIME.to_owned()
    }
}
