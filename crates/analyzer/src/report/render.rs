//! Render — the human-readable result block.

use std::fmt::Debug;

use crate::stats::{AggregateStatistics, RankedCounts, TOP_ADDRESSES, TOP_ERROR_CODES};

pub const NO_CLIENT_ERRORS: &str = "No client errors";
pub const NO_SERVER_ERRORS: &str = "No server errors";

/// Four lines: average size, top addresses, top client errors, top server errors.
///
/// The average is rounded to two decimals. An empty error ranking is
/// rendered as a sentence rather than `[]`.
pub fn render(stats: &AggregateStatistics) -> String {
    format!(
        "Average response size: {:.2}\n\
         Top {} IP requests: {}\n\
         Top {} client errors: {}\n\
         Top {} server errors: {}\n",
        stats.average_response_size,
        TOP_ADDRESSES,
        stats.top_client_addresses,
        TOP_ERROR_CODES,
        or_placeholder(&stats.top_client_error_codes, NO_CLIENT_ERRORS),
        TOP_ERROR_CODES,
        or_placeholder(&stats.top_server_error_codes, NO_SERVER_ERRORS),
    )
}

fn or_placeholder<K: Debug>(ranked: &RankedCounts<K>, placeholder: &str) -> String {
    if ranked.is_empty() {
        placeholder.to_string()
    } else {
        ranked.to_string()
    }
}
