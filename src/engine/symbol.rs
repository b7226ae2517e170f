//! Symbol codec: rank <-> display label
//!
//! Every cell label derives deterministically from its 1-based rank.
//! Numbers are plain decimal strings. Letters use a fixed 32-character
//! Cyrillic alphabet: ranks 1..=32 map to single characters, higher
//! ranks to two-character codes via a base-32 positional scheme.
//!
//! The two-character first-index formula (`(rank-1)/32 - 1`) is kept
//! exactly as the trainer has always produced its labels; the decoder
//! below is its exact inverse, so round-trips hold for every rank up to
//! [`MAX_LETTER_RANK`].

use crate::types::SymbolType;

/// Cyrillic uppercase alphabet, in the trainer's fixed order
pub const ALPHABET: [char; 32] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
    'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Alphabet length as a rank arithmetic constant
pub const ALPHABET_LEN: u32 = ALPHABET.len() as u32;

/// Largest rank the two-character encoding can express:
/// first index reaches 31 at rank 32*32 + 32 = 1056.
pub const MAX_LETTER_RANK: u32 = ALPHABET_LEN * ALPHABET_LEN + ALPHABET_LEN;

/// Produce the display label for a rank.
///
/// For `Letters` the caller must keep `rank` within
/// `1..=MAX_LETTER_RANK`; the table generator enforces this bound
/// before any rank is minted.
pub fn rank_to_symbol(rank: u32, symbol_type: SymbolType) -> String {
    debug_assert!(rank >= 1, "ranks are 1-based");
    match symbol_type {
        SymbolType::Numbers => rank.to_string(),
        SymbolType::Letters => {
            if rank <= ALPHABET_LEN {
                ALPHABET[(rank - 1) as usize].to_string()
            } else {
                debug_assert!(rank <= MAX_LETTER_RANK, "rank {} beyond letter range", rank);
                let first = (rank - 1) / ALPHABET_LEN - 1;
                let second = (rank - 1) % ALPHABET_LEN;
                let mut code = String::with_capacity(4);
                code.push(ALPHABET[first as usize]);
                code.push(ALPHABET[second as usize]);
                code
            }
        }
    }
}

/// Recover the rank from a display label. `None` for labels the codec
/// never produces.
pub fn symbol_to_rank(symbol: &str, symbol_type: SymbolType) -> Option<u32> {
    match symbol_type {
        SymbolType::Numbers => symbol.parse::<u32>().ok().filter(|&rank| rank >= 1),
        SymbolType::Letters => {
            let mut chars = symbol.chars();
            let first = chars.next()?;
            match chars.next() {
                // Single character: rank is the 1-based alphabet position
                None => letter_index(first).map(|idx| idx + 1),
                Some(second) => {
                    if chars.next().is_some() {
                        return None;
                    }
                    let first_idx = letter_index(first)?;
                    let second_idx = letter_index(second)?;
                    // Inverse of the positional encoding above
                    Some((first_idx + 1) * ALPHABET_LEN + (second_idx + 1))
                }
            }
        }
    }
}

/// 0-based alphabet position of a character
fn letter_index(c: char) -> Option<u32> {
    ALPHABET.iter().position(|&a| a == c).map(|idx| idx as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_roundtrip() {
        for rank in [1, 9, 16, 25, 36, 100] {
            let symbol = rank_to_symbol(rank, SymbolType::Numbers);
            assert_eq!(symbol, rank.to_string());
            assert_eq!(symbol_to_rank(&symbol, SymbolType::Numbers), Some(rank));
        }
    }

    #[test]
    fn test_single_letter_ranks() {
        assert_eq!(rank_to_symbol(1, SymbolType::Letters), "А");
        assert_eq!(rank_to_symbol(2, SymbolType::Letters), "Б");
        // Rank 32 is the last single-character label
        assert_eq!(rank_to_symbol(32, SymbolType::Letters), "Я");
        assert_eq!(symbol_to_rank("Я", SymbolType::Letters), Some(32));
    }

    #[test]
    fn test_two_letter_boundary_rank_33() {
        // floor(32/32) - 1 = 0 -> first char is alphabet[0], second is
        // alphabet[32 % 32] = alphabet[0]
        assert_eq!(rank_to_symbol(33, SymbolType::Letters), "АА");
        assert_eq!(symbol_to_rank("АА", SymbolType::Letters), Some(33));
    }

    #[test]
    fn test_two_letter_ranks_64_and_65() {
        // Rank 64: floor(63/32) - 1 = 0 -> 'А', 63 % 32 = 31 -> 'Я'
        assert_eq!(rank_to_symbol(64, SymbolType::Letters), "АЯ");
        // Rank 65: floor(64/32) - 1 = 1 -> 'Б', 64 % 32 = 0 -> 'А'
        assert_eq!(rank_to_symbol(65, SymbolType::Letters), "БА");
        assert_eq!(symbol_to_rank("АЯ", SymbolType::Letters), Some(64));
        assert_eq!(symbol_to_rank("БА", SymbolType::Letters), Some(65));
    }

    #[test]
    fn test_letters_roundtrip_full_range() {
        for rank in 1..=MAX_LETTER_RANK {
            let symbol = rank_to_symbol(rank, SymbolType::Letters);
            assert_eq!(
                symbol_to_rank(&symbol, SymbolType::Letters),
                Some(rank),
                "round-trip failed at rank {}",
                rank
            );
        }
    }

    #[test]
    fn test_letter_labels_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for rank in 1..=MAX_LETTER_RANK {
            assert!(
                seen.insert(rank_to_symbol(rank, SymbolType::Letters)),
                "duplicate label at rank {}",
                rank
            );
        }
    }

    #[test]
    fn test_invalid_symbols() {
        assert_eq!(symbol_to_rank("", SymbolType::Numbers), None);
        assert_eq!(symbol_to_rank("0", SymbolType::Numbers), None);
        assert_eq!(symbol_to_rank("abc", SymbolType::Numbers), None);
        assert_eq!(symbol_to_rank("", SymbolType::Letters), None);
        assert_eq!(symbol_to_rank("X", SymbolType::Letters), None);
        assert_eq!(symbol_to_rank("ААА", SymbolType::Letters), None);
    }
}
