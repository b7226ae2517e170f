//! Property-Based Tests
//!
//! Uses proptest for testing invariants and edge cases:
//! - Symbol codec round-trips across the whole rank range
//! - Table generation invariants (permutation, center cell)
//! - Enum string round-trips (parse → to_string → parse)

use proptest::prelude::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

use schulte_tui::engine::{rank_to_symbol, symbol_to_rank, MAX_LETTER_RANK};
use schulte_tui::settings::Settings;
use schulte_tui::types::{OrderMode, SymbolType, ThemeMode};

// =============================================================================
// Symbol Codec Property Tests
// =============================================================================

proptest! {
    /// Letters: encode → decode is identity for every expressible rank
    #[test]
    fn letter_codec_roundtrip(rank in 1u32..=MAX_LETTER_RANK) {
        let symbol = rank_to_symbol(rank, SymbolType::Letters);
        prop_assert_eq!(symbol_to_rank(&symbol, SymbolType::Letters), Some(rank));
    }

    /// Numbers: encode → decode is identity
    #[test]
    fn number_codec_roundtrip(rank in 1u32..=100_000u32) {
        let symbol = rank_to_symbol(rank, SymbolType::Numbers);
        prop_assert_eq!(symbol_to_rank(&symbol, SymbolType::Numbers), Some(rank));
    }

    /// Letter labels are one character up to rank 32, two beyond
    #[test]
    fn letter_label_length(rank in 1u32..=MAX_LETTER_RANK) {
        let symbol = rank_to_symbol(rank, SymbolType::Letters);
        let expected_chars = if rank <= 32 { 1 } else { 2 };
        prop_assert_eq!(symbol.chars().count(), expected_chars);
    }

    /// Distinct ranks never collide on the same label
    #[test]
    fn letter_labels_are_distinct(
        a in 1u32..=MAX_LETTER_RANK,
        b in 1u32..=MAX_LETTER_RANK,
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(
            rank_to_symbol(a, SymbolType::Letters),
            rank_to_symbol(b, SymbolType::Letters)
        );
    }
}

// =============================================================================
// Table Generation Property Tests
// =============================================================================

fn symbol_type_strategy() -> impl Strategy<Value = SymbolType> {
    prop_oneof![Just(SymbolType::Numbers), Just(SymbolType::Letters)]
}

fn order_strategy() -> impl Strategy<Value = OrderMode> {
    prop_oneof![Just(OrderMode::Random), Just(OrderMode::Sequential)]
}

proptest! {
    /// Every generated table is a permutation of ranks 1..=size²
    #[test]
    fn table_is_a_permutation(
        size in 2u16..=8,
        symbol_type in symbol_type_strategy(),
        order in order_strategy(),
        seed in any::<u64>(),
    ) {
        let settings = Settings {
            size,
            symbol_type,
            order,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = schulte_tui::engine::generate(&settings, &mut rng).unwrap();

        let total = u32::from(size) * u32::from(size);
        prop_assert_eq!(cells.len() as u32, total);

        let mut ranks: Vec<u32> = cells.iter().map(|c| c.rank).collect();
        ranks.sort_unstable();
        let expected: Vec<u32> = (1..=total).collect();
        prop_assert_eq!(ranks, expected);
    }

    /// Labels on the table decode back to their cell's rank
    #[test]
    fn table_labels_decode(
        size in 2u16..=8,
        symbol_type in symbol_type_strategy(),
        seed in any::<u64>(),
    ) {
        let settings = Settings {
            size,
            symbol_type,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = schulte_tui::engine::generate(&settings, &mut rng).unwrap();

        for cell in &cells {
            prop_assert_eq!(symbol_to_rank(&cell.symbol, symbol_type), Some(cell.rank));
        }
    }

    /// Exactly one center cell for odd sizes, none for even
    #[test]
    fn center_cell_parity(size in 2u16..=9, seed in any::<u64>()) {
        let settings = Settings { size, ..Default::default() };
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = schulte_tui::engine::generate(&settings, &mut rng).unwrap();

        let centers = cells.iter().filter(|c| c.is_center).count();
        prop_assert_eq!(centers, usize::from(size % 2 == 1));
    }
}

// =============================================================================
// Enum Property Tests
// =============================================================================

fn theme_strategy() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![Just(ThemeMode::Light), Just(ThemeMode::Dark)]
}

proptest! {
    /// SymbolType: to_string → parse round-trip is identity
    #[test]
    fn symbol_type_roundtrip(value in symbol_type_strategy()) {
        let s = value.to_string();
        let parsed: SymbolType = s.parse().expect("Should parse");
        prop_assert_eq!(value, parsed);
    }

    /// OrderMode: to_string → parse round-trip is identity
    #[test]
    fn order_mode_roundtrip(value in order_strategy()) {
        let s = value.to_string();
        let parsed: OrderMode = s.parse().expect("Should parse");
        prop_assert_eq!(value, parsed);
    }

    /// ThemeMode: toggling twice is identity
    #[test]
    fn theme_double_toggle(value in theme_strategy()) {
        prop_assert_eq!(value.toggled().toggled(), value);
    }

    /// Display output is non-empty lowercase for all enums
    #[test]
    fn enum_display_is_lowercase(
        symbol in symbol_type_strategy(),
        order in order_strategy(),
        theme in theme_strategy(),
    ) {
        for s in [symbol.to_string(), order.to_string(), theme.to_string()] {
            prop_assert!(!s.is_empty());
            prop_assert_eq!(s.clone(), s.to_lowercase());
        }
    }
}

// =============================================================================
// Scale Clamp Property Tests
// =============================================================================

proptest! {
    /// Clamped scale always lands inside the slider bounds
    #[test]
    fn clamp_scale_within_bounds(scale in -10.0f64..10.0) {
        let clamped = Settings::clamp_scale(scale);
        prop_assert!(clamped >= schulte_tui::settings::SCALE_MIN);
        prop_assert!(clamped <= schulte_tui::settings::SCALE_MAX);
    }
}
