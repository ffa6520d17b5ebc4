//! Tests for log filter selection and subscriber installation

#[cfg(test)]
mod tests {
    use noisemosaic::io::logging::{default_directive, init};

    // Tests verbosity flags map to increasing log levels
    // Verified by ignoring the verbosity count
    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(0, false), "noisemosaic=warn");
        assert_eq!(default_directive(1, false), "noisemosaic=info");
        assert_eq!(default_directive(2, false), "noisemosaic=debug");
        assert_eq!(default_directive(9, false), "noisemosaic=trace");
    }

    // Tests quiet wins over verbosity
    // Verified by checking verbosity first
    #[test]
    fn test_quiet_overrides_verbosity() {
        assert_eq!(default_directive(3, true), "noisemosaic=error");
    }

    // Tests repeated initialization is harmless
    // Verified by using init() instead of try_init()
    #[test]
    fn test_init_twice_does_not_panic() {
        init(1, false);
        init(2, false);
        tracing::info!("logging initialized twice");
    }
}
