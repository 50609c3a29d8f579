mod tests {
    use mood_table::{Clock, Duration, MicrosTicks, TickSource};

    struct ManualTicks {
        now: u32,
    }

    impl TickSource for ManualTicks {
        const TICKS_PER_SECOND: u32 = 1_000_000;

        fn now_ticks(&mut self) -> u32 {
            self.now
        }
    }

    /// Counter that wraps after 999, ticking at 1 kHz
    struct ShortTicks {
        now: u32,
    }

    impl TickSource for ShortTicks {
        const TICKS_PER_SECOND: u32 = 1_000;
        const MAX_TICKS: u32 = 999;

        fn now_ticks(&mut self) -> u32 {
            self.now
        }
    }

    #[test]
    fn test_elapsed_starts_at_zero() {
        let mut clock = Clock::new(ManualTicks { now: 1234 });
        assert_eq!(clock.elapsed_ticks(), 0);
        assert_eq!(clock.elapsed_seconds(), 0.0);
    }

    #[test]
    fn test_elapsed_counts_from_start() {
        let mut clock = Clock::new(ManualTicks { now: 1_000 });
        clock.source_mut().now = 2_501_000;
        assert_eq!(clock.elapsed_ticks(), 2_500_000);
        assert_eq!(clock.elapsed_seconds(), 2.5);
        assert_eq!(clock.elapsed(), Duration::from_millis(2500));
    }

    #[test]
    fn test_elapsed_across_counter_wrap() {
        let mut clock = Clock::new(ManualTicks { now: u32::MAX - 9 });
        clock.source_mut().now = 5;
        // 9 ticks up to MAX, 1 to wrap to zero, 5 more
        assert_eq!(clock.elapsed_ticks(), 15);
    }

    #[test]
    fn test_elapsed_across_custom_wrap() {
        let mut clock = Clock::new(ShortTicks { now: 990 });
        clock.source_mut().now = 10;
        assert_eq!(clock.elapsed_ticks(), 20);
        assert_eq!(clock.elapsed(), Duration::from_millis(20));
    }

    #[test]
    fn test_restart_resets_reference() {
        let mut clock = Clock::new(ManualTicks { now: 0 });
        clock.source_mut().now = 5_000_000;
        assert_eq!(clock.elapsed_seconds(), 5.0);

        clock.start();
        assert_eq!(clock.elapsed_ticks(), 0);

        clock.source_mut().now = 5_250_000;
        assert_eq!(clock.elapsed_seconds(), 0.25);
    }

    #[test]
    fn test_elapsed_is_monotonic_until_wrap() {
        let mut clock = Clock::new(ManualTicks { now: u32::MAX - 100 });
        let mut last = 0;
        for step in 0..20u32 {
            clock.source_mut().now = (u32::MAX - 100).wrapping_add(step * 10);
            let elapsed = clock.elapsed_ticks();
            assert!(elapsed >= last);
            last = elapsed;
        }
        assert_eq!(last, 190);
    }

    #[test]
    fn test_tick_conversions() {
        assert_eq!(Clock::<ManualTicks>::seconds_from_ticks(500_000), 0.5);
        assert_eq!(
            Clock::<ManualTicks>::duration_from_ticks(1_500),
            Duration::from_micros(1_500)
        );
        assert_eq!(
            Clock::<ShortTicks>::duration_from_ticks(3),
            Duration::from_millis(3)
        );
    }

    #[test]
    fn test_micros_ticks_advance() {
        let mut source = MicrosTicks;
        let before = source.now_ticks();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let after = source.now_ticks();
        assert!(after.wrapping_sub(before) >= 5_000);
    }

    #[test]
    fn test_clock_over_micros_ticks() {
        let mut clock = Clock::new(MicrosTicks);
        std::thread::sleep(std::time::Duration::from_millis(20));
        let elapsed = clock.elapsed();
        assert!(elapsed >= Duration::from_millis(20));
        assert!(elapsed < Duration::from_secs(60));
        assert!(clock.elapsed_seconds() >= 0.02);
    }
}
