mod tests {
    use mood_table::effect::{LightningEffect, PulseEffect, PulseVariant};
    use mood_table::{Effect, EffectId, Rgb, resolve};

    const COUNT: usize = 78;

    fn frame(id: EffectId, seconds: f32) -> [Rgb; COUNT] {
        let mut leds = [Rgb::default(); COUNT];
        id.to_slot().render(seconds, &mut leds[..]);
        leds
    }

    #[test]
    fn test_rendering_is_deterministic() {
        for id in EffectId::ALL {
            assert_eq!(frame(id, 12.34), frame(id, 12.34), "{}", id.as_str());
        }
    }

    #[test]
    fn test_static_washes() {
        for seconds in [0.0, 1.5, 600.0] {
            for led in frame(EffectId::Darkness, seconds) {
                assert_eq!(led, Rgb::new(5, 0, 10));
            }
            for led in frame(EffectId::Stealth, seconds) {
                assert_eq!(led, Rgb::new(0, 5, 25));
            }
            for led in frame(EffectId::City, seconds) {
                assert_eq!(led, Rgb::new(240, 240, 255));
            }
        }
    }

    #[test]
    fn test_combat_pulse_at_start() {
        for led in frame(EffectId::Combat, 0.0) {
            assert_eq!(led, Rgb::new(155, 0, 0));
        }
    }

    #[test]
    fn test_combat_stays_red() {
        for step in 0..100 {
            let seconds = step as f32 * 0.037;
            for led in frame(EffectId::Combat, seconds) {
                assert!(led.r >= 55);
                assert_eq!((led.g, led.b), (0, 0));
            }
        }
    }

    #[test]
    fn test_healing_is_symmetric_around_center() {
        let healing = PulseEffect::new(PulseVariant::Healing);
        let count = 10;
        for offset in 1..5 {
            assert_eq!(
                healing.color_at(5 - offset, count, 0.8),
                healing.color_at(5 + offset, count, 0.8)
            );
        }
        let center = healing.color_at(5, count, 0.8);
        let edge = healing.color_at(0, count, 0.8);
        assert!(center.r >= edge.r);
        assert_eq!(center.b, 0);
    }

    #[test]
    fn test_healing_single_led() {
        let healing = PulseEffect::new(PulseVariant::Healing);
        let led = healing.color_at(0, 1, 0.0);
        // Center only: no falloff, pulse at its resting level
        assert_eq!(led.b, 0);
        assert!(led.r > 0);
    }

    #[test]
    fn test_lightning_flash_windows() {
        assert!(!LightningEffect::is_flashing(0.0));
        assert!(LightningEffect::is_flashing(0.108));
        assert!(LightningEffect::is_flashing(0.625));
        assert!(!LightningEffect::is_flashing(0.5));
        // Next cycle
        assert!(LightningEffect::is_flashing(2.0 / 3.0 + 0.108));
    }

    #[test]
    fn test_lightning_frames() {
        for led in frame(EffectId::Lightning, 0.0) {
            assert_eq!(led, Rgb::new(20, 10, 40));
        }
        for led in frame(EffectId::Lightning, 0.625) {
            assert_eq!(led, Rgb::new(255, 255, 255));
        }
    }

    #[test]
    fn test_warm_effects_have_no_blue_cast() {
        for step in 0..50 {
            let seconds = step as f32 * 0.11;
            for led in frame(EffectId::Dungeon, seconds) {
                assert!(led.r >= led.g);
                assert_eq!(led.b, 0);
            }
            for led in frame(EffectId::Tavern, seconds) {
                assert!(led.r >= led.g && led.g >= led.b);
            }
            for led in frame(EffectId::Fire, seconds) {
                assert!(led.r >= led.g);
                assert_eq!(led.b, 0);
            }
        }
    }

    #[test]
    fn test_ocean_has_no_red() {
        for led in frame(EffectId::Ocean, 3.3) {
            assert_eq!(led.r, 0);
            assert!(led.b >= led.g);
        }
    }

    #[test]
    fn test_cave_is_stone_or_glint() {
        for step in 0..50 {
            for led in frame(EffectId::Cave, step as f32 * 0.07) {
                assert!(led.b == 40 || led.b == 120);
                assert!(led.r < led.b && led.g < led.b);
            }
        }
    }

    #[test]
    fn test_unknown_ids_render_color_wave() {
        let color_wave = EffectId::ColorWave.to_slot();
        let fallback = resolve(200);
        for index in [0, 10, 77] {
            assert_eq!(
                fallback.color_at(index, COUNT, 4.2),
                color_wave.color_at(index, COUNT, 4.2)
            );
        }
    }

    #[test]
    fn test_long_running_time() {
        // Over a day of uptime
        for id in EffectId::ALL {
            let _ = frame(id, 100_000.0);
        }
    }
}
