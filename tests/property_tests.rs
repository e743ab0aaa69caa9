//! Property-based tests for rust_logger_core using proptest

use proptest::prelude::*;
use rust_logger_core::prelude::*;
use rust_logger_core::transports::format_line;
use std::cell::RefCell;
use std::rc::Rc;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn message_level() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::LEVELS.to_vec())
}

/// Records `(transport index, message, severity, timestamp)` into one shared log.
#[derive(Clone)]
struct Tap {
    index: usize,
    log: Rc<RefCell<Vec<(usize, String, Severity, Timestamp)>>>,
}

impl Transport for Tap {
    fn log(&self, message: &str, severity: Severity, timestamp: Timestamp) -> Result<()> {
        self.log
            .borrow_mut()
            .push((self.index, message.to_string(), severity, timestamp));
        Ok(())
    }
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Ordering follows the discriminants
    #[test]
    fn test_severity_ordering(a in any_severity(), b in any_severity()) {
        let (va, vb) = (a as u8, b as u8);
        prop_assert_eq!(a < b, va < vb);
        prop_assert_eq!(a >= b, va >= vb);
    }

    /// Display output parses back to the same level
    #[test]
    fn test_severity_str_roundtrip(level in any_severity(), lower in any::<bool>()) {
        let text = if lower { level.to_str().to_lowercase() } else { level.to_str().to_string() };
        prop_assert_eq!(text.parse::<Severity>().unwrap(), level);
    }
}

// ============================================================================
// Gating Tests
// ============================================================================

proptest! {
    /// A message is delivered iff its severity reaches the threshold
    #[test]
    fn test_monotonic_gating(threshold in any_severity(), level in message_level()) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut logger: Logger<Tap> = Logger::new(threshold);
        logger.transport(Tap { index: 0, log: Rc::clone(&log) });

        logger.log(level, format_args!("probe")).unwrap();

        prop_assert_eq!(logger.is_enabled(level), level >= threshold);
        prop_assert_eq!(log.borrow().len(), usize::from(level >= threshold));
    }

    /// set_level always hands back the previous threshold
    #[test]
    fn test_set_level_returns_previous(levels in prop::collection::vec(any_severity(), 1..20)) {
        let mut logger: Logger<Tap> = Logger::default();
        let mut expected = Severity::Info;
        for level in levels {
            prop_assert_eq!(logger.set_level(level), expected);
            prop_assert_eq!(logger.level(), level);
            expected = level;
        }
    }
}

// ============================================================================
// Fan-out Tests
// ============================================================================

proptest! {
    /// Every transport sees the same record, in registration order
    #[test]
    fn test_fan_out_identity(count in 1usize..8, message in ".*", level in message_level()) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut logger: Logger<Tap> = Logger::new(Severity::Verbose);
        for index in 0..count {
            logger.transport(Tap { index, log: Rc::clone(&log) });
        }

        logger.log(level, format_args!("{}", message)).unwrap();

        let log = log.borrow();
        prop_assert_eq!(log.len(), count);
        for (position, (index, seen, severity, timestamp)) in log.iter().enumerate() {
            prop_assert_eq!(*index, position);
            prop_assert_eq!(seen, &message);
            prop_assert_eq!(*severity, level);
            prop_assert_eq!(*timestamp, log[0].3);
        }
    }
}

// ============================================================================
// Line Format Tests
// ============================================================================

proptest! {
    /// Header is fixed width and the message follows verbatim
    #[test]
    fn test_line_shape(
        millis in 0i64..253_402_300_799_999,
        message in ".*",
        level in message_level(),
    ) {
        let line = format_line(&message, level, Timestamp::from_millis(millis)).unwrap();

        prop_assert_eq!(&line[10..11], "T");
        prop_assert_eq!(&line[19..20], " ");
        prop_assert_eq!(&line[20..21], level.letter());
        prop_assert_eq!(&line[21..23], ": ");
        prop_assert_eq!(&line[23..line.len() - 1], message.as_str());
        prop_assert!(line.ends_with('\n'));
    }

    /// Milliseconds within one second render identically
    #[test]
    fn test_sub_second_truncation(seconds in 0i64..4_000_000_000, millis in 0i64..1000) {
        let whole = Timestamp::from_millis(seconds * 1000);
        let partial = Timestamp::from_millis(seconds * 1000 + millis);
        prop_assert_eq!(whole.format_iso_seconds().unwrap(), partial.format_iso_seconds().unwrap());
    }
}
