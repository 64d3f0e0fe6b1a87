//! # Report Pagination
//!
//! This module splits formatted reports into chunks that fit Telegram's
//! message-size limit. Two policies exist:
//!
//! - **Character splitting** for prose reports: cut at fixed character
//!   offsets, possibly mid-line. Splitting text of `S` characters with
//!   limit `L` yields exactly `ceil(S / L)` chunks whose concatenation
//!   reproduces the input.
//! - **Record-aligned splitting** for listings: if the whole listing fits
//!   under the limit it goes out as one message; otherwise the records are
//!   regrouped five per chunk under a continuation title, never cutting a
//!   record in half. Record numbering is assigned by the formatter, so it
//!   stays global across chunks.
//!
//! The first chunk of either policy replaces the "loading" placeholder
//! message; the rest are sent as fresh messages.

/// Telegram's maximum message length in characters.
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Records per continuation chunk when a listing exceeds the limit.
pub const RECORDS_PER_CHUNK: usize = 5;

/// Split text at fixed character offsets.
///
/// Splitting is by character count, not bytes, so multi-byte text never
/// breaks inside a code point. Empty input yields no chunks.
///
/// # Examples
///
/// ```rust
/// use channelscope::paginate::split_by_chars;
///
/// let chunks = split_by_chars("abcdefgh", 3);
/// assert_eq!(chunks, vec!["abc", "def", "gh"]);
/// assert_eq!(chunks.concat(), "abcdefgh");
/// ```
pub fn split_by_chars(text: &str, limit: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if text.chars().count() <= limit {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;
    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == limit {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Split a listing into record-aligned chunks.
///
/// `blocks` are the pre-rendered, pre-numbered record blocks. When the
/// title plus all blocks fit within `limit` characters the result is a
/// single chunk under `title`; otherwise the blocks are grouped
/// [`RECORDS_PER_CHUNK`] at a time, the first group under `title` and
/// every later group under `continuation_title`. Callers keep individual
/// blocks comfortably below the limit, so a group of five always fits.
///
/// # Examples
///
/// ```rust
/// use channelscope::paginate::paginate_records;
///
/// let blocks: Vec<String> = (1..=7).map(|i| format!("{}. item", i)).collect();
/// let chunks = paginate_records("Listing:", "Listing (continued):", &blocks, 40);
/// assert_eq!(chunks.len(), 2);
/// assert!(chunks[0].starts_with("Listing:"));
/// assert!(chunks[1].starts_with("Listing (continued):"));
/// ```
pub fn paginate_records(
    title: &str,
    continuation_title: &str,
    blocks: &[String],
    limit: usize,
) -> Vec<String> {
    let full = format!("{}\n\n{}", title, blocks.join("\n\n"));
    if full.chars().count() <= limit {
        return vec![full];
    }

    blocks
        .chunks(RECORDS_PER_CHUNK)
        .enumerate()
        .map(|(i, group)| {
            let header = if i == 0 { title } else { continuation_title };
            format!("{}\n\n{}", header, group.join("\n\n"))
        })
        .collect()
}
