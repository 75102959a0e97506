//! Aggregate — fold log records into summary statistics in one pass.

use crate::parser::{LogRecord, StatusClass};

use super::rank::{FrequencyCounter, RankedCounts};

/// Length of the client address ranking.
pub const TOP_ADDRESSES: usize = 5;

/// Length of each error code ranking.
pub const TOP_ERROR_CODES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStatistics {
    pub total_records: usize,

    /// `0.0` when there were no records
    pub average_response_size: f64,

    pub top_client_addresses: RankedCounts<String>,

    /// Codes in 400..500
    pub top_client_error_codes: RankedCounts<u16>,

    /// Codes in 500..600
    pub top_server_error_codes: RankedCounts<u16>,
}

/// Running totals over a sequence of records.
#[derive(Debug, Default)]
pub struct Aggregator {
    count: usize,
    total_response_size: u128,
    addresses: FrequencyCounter<String>,
    client_errors: FrequencyCounter<u16>,
    server_errors: FrequencyCounter<u16>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &LogRecord) {
        self.count += 1;
        self.total_response_size += u128::from(record.response_size);
        self.addresses.add(record.client_address.clone());

        match record.status_class() {
            StatusClass::ClientError => self.client_errors.add(record.status),
            StatusClass::ServerError => self.server_errors.add(record.status),
            StatusClass::Other => {}
        }
    }

    pub fn finish(self) -> AggregateStatistics {
        let average_response_size = if self.count == 0 {
            0.0
        } else {
            self.total_response_size as f64 / self.count as f64
        };

        AggregateStatistics {
            total_records: self.count,
            average_response_size,
            top_client_addresses: self.addresses.most_common(TOP_ADDRESSES),
            top_client_error_codes: self.client_errors.most_common(TOP_ERROR_CODES),
            top_server_error_codes: self.server_errors.most_common(TOP_ERROR_CODES),
        }
    }
}

pub fn aggregate<'a, I>(records: I) -> AggregateStatistics
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let mut aggregator = Aggregator::new();
    for record in records {
        aggregator.record(record);
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(address: &str, status: u16, response_size: u64) -> LogRecord {
        LogRecord {
            client_address: address.to_string(),
            timestamp: "10/Feb/2024:13:55:36 +0000".to_string(),
            method: "GET".to_string(),
            path: "/index.html ".to_string(),
            status,
            response_size,
        }
    }

    #[test]
    fn test_empty_sequence() {
        let records: Vec<LogRecord> = Vec::new();
        let stats = aggregate(&records);
        assert_eq!(stats.total_records, 0);
        assert_eq!(stats.average_response_size, 0.0);
        assert!(stats.top_client_addresses.is_empty());
        assert!(stats.top_client_error_codes.is_empty());
        assert!(stats.top_server_error_codes.is_empty());
    }

    #[test]
    fn test_uniform_sizes_average() {
        let records = vec![
            record("10.10.10.10", 201, 1024),
            record("192.168.1.1", 200, 1024),
        ];
        let stats = aggregate(&records);
        assert_eq!(stats.average_response_size, 1024.0);
        assert!(stats.top_client_error_codes.is_empty());
        assert!(stats.top_server_error_codes.is_empty());
    }

    #[test]
    fn test_mixed_statuses() {
        let records = vec![
            record("192.168.1.1", 200, 1024),
            record("203.0.113.45", 401, 512),
            record("172.16.0.23", 500, 2048),
        ];
        let stats = aggregate(&records);

        assert!((stats.average_response_size - 3584.0 / 3.0).abs() < 1e-9);
        assert_eq!(format!("{:.2}", stats.average_response_size), "1194.67");
        assert_eq!(
            stats.top_client_addresses.entries(),
            &[
                ("192.168.1.1".to_string(), 1),
                ("203.0.113.45".to_string(), 1),
                ("172.16.0.23".to_string(), 1),
            ]
        );
        assert_eq!(stats.top_client_error_codes.entries(), &[(401, 1)]);
        assert_eq!(stats.top_server_error_codes.entries(), &[(500, 1)]);
    }

    #[test]
    fn test_error_partition() {
        let records = vec![
            record("a", 401, 1),
            record("a", 500, 1),
            record("a", 200, 1),
            record("a", 302, 1),
            record("a", 600, 1),
        ];
        let stats = aggregate(&records);
        assert_eq!(stats.top_client_error_codes.entries(), &[(401, 1)]);
        assert_eq!(stats.top_server_error_codes.entries(), &[(500, 1)]);
    }

    #[test]
    fn test_rankings_are_truncated() {
        let mut records = Vec::new();
        for (i, address) in ["a", "b", "c", "d", "e", "f", "g"].iter().enumerate() {
            for _ in 0..=i {
                records.push(record(address, 200, 10));
            }
        }
        for status in [400, 401, 403, 404, 404, 502, 503, 504, 500, 500] {
            records.push(record("h", status, 10));
        }

        let stats = aggregate(&records);
        assert_eq!(stats.top_client_addresses.len(), TOP_ADDRESSES);
        assert_eq!(stats.top_client_addresses.entries()[0], ("h".to_string(), 10));
        assert_eq!(stats.top_client_addresses.entries()[1], ("g".to_string(), 7));

        assert_eq!(stats.top_client_error_codes.len(), TOP_ERROR_CODES);
        assert_eq!(stats.top_client_error_codes.entries(), &[(404, 2), (400, 1), (401, 1)]);
        assert_eq!(stats.top_server_error_codes.entries(), &[(500, 2), (502, 1), (503, 1)]);
    }

    #[test]
    fn test_incremental_matches_batch() {
        let records = vec![record("a", 404, 100), record("b", 503, 300)];
        let mut aggregator = Aggregator::new();
        for r in &records {
            aggregator.record(r);
        }
        assert_eq!(aggregator.finish(), aggregate(&records));
    }
}
