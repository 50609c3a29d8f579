mod tests {
    use mood_table::EffectId;

    #[test]
    fn test_effect_id_from_raw_table() {
        assert_eq!(EffectId::from_raw(0), Some(EffectId::Dungeon));
        assert_eq!(EffectId::from_raw(1), Some(EffectId::Combat));
        assert_eq!(EffectId::from_raw(7), Some(EffectId::Lightning));
        assert_eq!(EffectId::from_raw(13), Some(EffectId::Ocean));
        assert_eq!(EffectId::from_raw(14), Some(EffectId::ColorWave));
    }

    #[test]
    fn test_effect_id_from_raw_unknown() {
        assert_eq!(EffectId::from_raw(15), None);
        assert_eq!(EffectId::from_raw(255), None);
    }

    #[test]
    fn test_resolve_is_total() {
        for raw in 0..=u8::MAX {
            let id = EffectId::resolve(raw);
            if raw < 15 {
                assert_eq!(id.raw(), raw);
            } else {
                assert_eq!(id, EffectId::DEFAULT);
            }
        }
    }

    #[test]
    fn test_default_is_color_wave() {
        assert_eq!(EffectId::default(), EffectId::ColorWave);
        assert_eq!(EffectId::resolve(99), EffectId::ColorWave);
    }

    #[test]
    fn test_all_is_in_id_order() {
        for (index, id) in EffectId::ALL.iter().enumerate() {
            assert_eq!(usize::from(id.raw()), index);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for id in EffectId::ALL {
            assert_eq!(EffectId::parse_from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_effect_id_parse_names() {
        assert_eq!(EffectId::parse_from_str("tavern"), Some(EffectId::Tavern));
        assert_eq!(
            EffectId::parse_from_str("color_wave"),
            Some(EffectId::ColorWave)
        );
        assert_eq!(EffectId::parse_from_str("Tavern"), None);
        assert_eq!(EffectId::parse_from_str(""), None);
    }
}
