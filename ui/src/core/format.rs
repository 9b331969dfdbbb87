//! Formatting helpers for presenting toots.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

/// Fixed-width 24-hour timestamp, e.g. `01/31/2024, 13:05:00`.
pub fn format_timestamp(rfc3339: &str) -> String {
    let Ok(parsed) = OffsetDateTime::parse(rfc3339, &Rfc3339) else {
        return rfc3339.to_string();
    };

    parsed
        .format(&format_description!(
            "[month]/[day]/[year], [hour]:[minute]:[second]"
        ))
        .unwrap_or_else(|_| rfc3339.to_string())
}

/// Host component of a status URL, e.g. `mastodon.social` for
/// `https://mastodon.social/@user/112233`.
pub fn origin_host(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let host = rest.split('/').next().unwrap_or(rest);
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Federated handle for an account, derived from the account name and the
/// status URL's origin host. Falls back to the bare username when the URL
/// carries no usable host.
pub fn mastodon_handle(username: &str, status_url: &str) -> String {
    match origin_host(status_url) {
        Some(host) => format!("{username}@{host}"),
        None => username.to_string(),
    }
}

/// Reduce server-supplied HTML to plain text so it can be inserted as a text
/// node. Tags are dropped (block/line-break tags become spaces) and the common
/// entities are decoded. Lossy on purpose: the feed shows toot text, not toot
/// markup.
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        match tail.find('>') {
            Some(close) => {
                let tag = tail[..close].trim_start_matches('/');
                let name: String = tag
                    .chars()
                    .take_while(|c| c.is_ascii_alphanumeric())
                    .collect();
                if matches!(name.to_ascii_lowercase().as_str(), "p" | "br" | "div" | "li") {
                    text.push(' ');
                }
                rest = &tail[close + 1..];
            }
            // Unterminated tag: drop the remainder.
            None => {
                rest = "";
            }
        }
    }
    text.push_str(rest);

    let decoded = text
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
