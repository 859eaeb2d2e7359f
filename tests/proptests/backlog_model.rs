// Model-based properties of the bounded backlog

use bootlog::{BoundedBacklog, Level, LogRecord};
use proptest::prelude::*;

proptest! {
    /// Whatever the capacity and volume, the bound holds, the earliest
    /// records survive in order, and every loss is accounted for.
    #[test]
    fn prop_capacity_bound_and_accounting(capacity in 1usize..64, count in 0usize..256) {
        let mut backlog = BoundedBacklog::new(capacity);
        let mut accepted = 0usize;
        for i in 0..count {
            if backlog.try_enqueue(LogRecord::new(Level::Info, format!("r{i}"))) {
                accepted += 1;
            }
            prop_assert!(backlog.len() <= capacity);
        }
        prop_assert_eq!(accepted, count.min(capacity));
        prop_assert_eq!(backlog.dropped(), count.saturating_sub(capacity) as u64);

        let drained = backlog.close();
        prop_assert_eq!(drained.len(), count.min(capacity));
        for (i, record) in drained.iter().enumerate() {
            prop_assert_eq!(&record.message, &format!("r{i}"));
        }
    }

    /// Close is terminal: every later enqueue is refused without being
    /// counted as an overflow, and a second close yields nothing.
    #[test]
    fn prop_close_is_terminal(count in 0usize..64, extra in 1usize..32) {
        let mut backlog = BoundedBacklog::new(128);
        for i in 0..count {
            backlog.try_enqueue(LogRecord::new(Level::Info, format!("r{i}")));
        }

        let drained = backlog.close();
        prop_assert_eq!(drained.len(), count);
        prop_assert!(backlog.is_closed());

        // `prop_assert!` reuses the stringified condition as a format string,
        // so the enqueue (whose message has `{i}` in it) stays outside.
        for i in 0..extra {
            let refused = !backlog.try_enqueue(LogRecord::new(Level::Info, format!("x{i}")));
            prop_assert!(refused);
        }
        prop_assert!(backlog.close().is_empty());
        prop_assert_eq!(backlog.dropped(), 0);
    }

    /// FIFO order is exactly insertion order for any accepted subsequence.
    #[test]
    fn prop_fifo_preserved(messages in proptest::collection::vec("[a-z]{1,12}", 0..80)) {
        let mut backlog = BoundedBacklog::new(messages.len().max(1));
        for message in &messages {
            backlog.try_enqueue(LogRecord::new(Level::Debug, message.clone()));
        }
        let drained: Vec<String> = backlog.close().into_iter().map(|r| r.message).collect();
        prop_assert_eq!(drained, messages);
    }
}
