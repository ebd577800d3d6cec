use axum::response::Html;
use time::{Time, macros::format_description};

use crate::outcome::Outcome;

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn hhmm(time: Time) -> String {
    time.format(format_description!("[hour]:[minute]"))
        .unwrap_or_default()
}

/// Wraps a page body in the shared layout, with any pending flash messages on top.
pub fn page(title: &str, flashes: &[Outcome], body: &str) -> Html<String> {
    let flash: String = flashes
        .iter()
        .map(|outcome| {
            include_res!(str, "/pages/flash.html")
                .replace("{level}", outcome.level.as_str())
                .replace("{message}", &escape(&outcome.message))
        })
        .collect();

    Html(
        include_res!(str, "/pages/layout.html")
            .replace("{title}", &escape(title))
            .replace("{flash}", &flash)
            .replace("{body}", body),
    )
}

/// `<option>` list for a `<select>`.
pub fn options<T>(items: &[T], value: impl Fn(&T) -> i64, label: impl Fn(&T) -> String) -> String {
    items
        .iter()
        .map(|item| format!("<option value=\"{}\">{}</option>", value(item), escape(&label(item))))
        .collect()
}
