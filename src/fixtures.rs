#[cfg(test)]
pub mod test {
    use std::time::Duration;

    crate::record! {
        /// Embedded telemetry settings, recursed into by `ServerConfig`.
        #[derive(Debug, Default, PartialEq)]
        pub struct Telemetry {
            pub value endpoint: String ["env" => "TELEMETRY_ENDPOINT"],
            pub value sample_rate: f64 ["env" => "SAMPLE_RATE", "default" => "0.1"],
        }
    }

    crate::record! {
        /// The shared record for traversal tests: one field per coercion
        /// family plus a required key, an ignored key, and an embedded
        /// sub-record.
        #[derive(Debug, Default, PartialEq)]
        pub struct ServerConfig {
            pub value host: String ["env" => "HOST", "default" => "localhost"],
            pub value port: u16 ["env" => "PORT", "required" => "true"],
            pub value debug: bool ["env" => "DEBUG"],
            pub value timeout: Duration ["env" => "TIMEOUT", "default" => "30s"],
            pub value peers: Vec<String> ["env" => "PEERS"],
            pub value pool: Option<u32> ["env" => "POOL"],
            pub value api_key: String ["env" => "API_KEY", "ignored" => "true"],
            pub record telemetry: Telemetry,
        }
    }

    #[test]
    fn fixtures_default_to_zero_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "");
        assert_eq!(config.port, 0);
        assert_eq!(config.timeout, Duration::ZERO);
        assert_eq!(config.telemetry, Telemetry::default());
    }
}
