//! Property-based tests for the bundle config extractors.

use ec_config::{read_endpoint, read_keyspace, ConfigError, MissingField};
use proptest::prelude::*;

fn hostname_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,20}(\\.[a-z][a-z0-9-]{0,10}){0,3}"
}

fn spacing() -> impl Strategy<Value = String> {
    "[ \t]{0,4}"
}

proptest! {
    #[test]
    fn endpoint_found_in_either_order(
        hostname in hostname_strategy(),
        port in 1u16..=u16::MAX,
        pad in prop::collection::vec(spacing(), 4),
        port_first in any::<bool>(),
    ) {
        let host_line = format!("hostname{}={}{}{}", pad[0], pad[1], hostname, pad[1]);
        let port_line = format!("port{}={}{}{}", pad[2], pad[3], port, pad[3]);
        let data = if port_first {
            format!("[connection]\n{port_line}\n{host_line}\n")
        } else {
            format!("[connection]\n{host_line}\n{port_line}\n")
        };

        let endpoint = read_endpoint(data.as_bytes()).unwrap();
        prop_assert_eq!(endpoint.hostname, hostname);
        prop_assert_eq!(endpoint.port, port);
    }

    #[test]
    fn lines_after_complete_pair_are_ignored(
        hostname in hostname_strategy(),
        port in 1u16..=u16::MAX,
        trailer in "[ -~]{0,40}",
    ) {
        let data = format!("hostname = {hostname}\nport = {port}\n{trailer}\nport = x = y\n");
        let endpoint = read_endpoint(data.as_bytes()).unwrap();
        prop_assert_eq!(endpoint.port, port);
    }

    #[test]
    fn hostname_only_reports_missing_port(hostname in hostname_strategy()) {
        let data = format!("hostname = {hostname}\n");
        let err = read_endpoint(data.as_bytes()).unwrap_err();
        prop_assert!(matches!(err, ConfigError::Missing(MissingField::Port)));
    }

    #[test]
    fn port_only_reports_missing_hostname(port in 1u16..=u16::MAX) {
        let data = format!("port = {port}\n");
        let err = read_endpoint(data.as_bytes()).unwrap_err();
        prop_assert!(matches!(err, ConfigError::Missing(MissingField::Hostname)));
    }

    #[test]
    fn arbitrary_comment_bytes_before_keys(
        comments in prop::collection::vec(
            prop::collection::vec(any::<u8>().prop_filter("no newline", |b| *b != b'\n'), 0..40),
            0..5,
        ),
        hostname in hostname_strategy(),
        port in 1u16..=u16::MAX,
    ) {
        let mut data = Vec::new();
        for comment in &comments {
            data.push(b';');
            data.extend_from_slice(comment);
            data.push(b'\n');
        }
        data.extend_from_slice(format!("hostname = {hostname}\nport = {port}\n").as_bytes());

        let endpoint = read_endpoint(&data).unwrap();
        prop_assert_eq!(endpoint.hostname, hostname);
        prop_assert_eq!(endpoint.port, port);
    }

    #[test]
    fn scanner_never_panics(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = read_endpoint(&data);
    }

    #[test]
    fn keyspace_independent_of_json_port(
        keyspace in "[a-z_][a-z0-9_]{0,47}",
        port in any::<i32>(),
    ) {
        let data = format!(r#"{{"port": {port}, "keyspace": "{keyspace}"}}"#);
        prop_assert_eq!(read_keyspace(data.as_bytes()).unwrap(), keyspace);
    }
}
