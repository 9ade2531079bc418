//! Precomputed coordinate tables.
//!
//! Boolean membership tables for the board files and ranks, plus the
//! algebraic-notation lookup in both directions. All tables are built once at
//! first use and never mutated, so they are safe to read from any thread.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 64;

/// Number of squares in one rank.
pub const SQUARES_PER_RANK: usize = 8;

/// Membership table for the a-file (squares a8, a7, .., a1).
pub(crate) static FILE_A: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| file_table(0));

/// Membership table for the b-file.
pub(crate) static FILE_B: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| file_table(1));

/// Membership table for the g-file.
pub(crate) static FILE_G: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| file_table(6));

/// Membership table for the h-file.
pub(crate) static FILE_H: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| file_table(7));

/// Membership table for rank 8 (squares a8..h8, indices 0..8).
pub(crate) static RANK_8: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| rank_table(0));

/// Membership table for rank 7.
pub(crate) static RANK_7: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| rank_table(8));

/// Membership table for rank 6.
pub(crate) static RANK_6: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| rank_table(16));

/// Membership table for rank 5.
pub(crate) static RANK_5: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| rank_table(24));

/// Membership table for rank 4.
pub(crate) static RANK_4: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| rank_table(32));

/// Membership table for rank 3.
pub(crate) static RANK_3: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| rank_table(40));

/// Membership table for rank 2.
pub(crate) static RANK_2: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| rank_table(48));

/// Membership table for rank 1 (squares a1..h1, indices 56..64).
pub(crate) static RANK_1: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| rank_table(56));

/// Algebraic label for every square, indexed a8=0 .. h1=63.
pub(crate) static ALGEBRAIC_NOTATION: Lazy<[String; NUM_SQUARES]> = Lazy::new(|| {
    std::array::from_fn(|idx| {
        let file = (b'a' + (idx % SQUARES_PER_RANK) as u8) as char;
        let rank = SQUARES_PER_RANK - idx / SQUARES_PER_RANK;
        format!("{file}{rank}")
    })
});

/// Reverse lookup from algebraic label to square index.
static POSITION_INDEX: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(NUM_SQUARES);
    for (idx, label) in ALGEBRAIC_NOTATION.iter().enumerate() {
        map.insert(label.as_str(), idx as u8);
    }
    map
});

/// Marks the given square and every square eight further until the board ends.
fn file_table(mut square: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    while square < NUM_SQUARES {
        table[square] = true;
        square += SQUARES_PER_RANK;
    }
    table
}

/// Marks eight consecutive squares starting at a multiple of eight.
fn rank_table(mut square: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    loop {
        table[square] = true;
        square += 1;
        if square % SQUARES_PER_RANK == 0 {
            break;
        }
    }
    table
}

/// True iff `index` names a square on the board.
#[inline]
#[must_use]
pub(crate) fn is_valid_index(index: i16) -> bool {
    (0..NUM_SQUARES as i16).contains(&index)
}

/// Look up the square index for an algebraic label, if it is one of the 64
/// canonical labels.
#[must_use]
pub(crate) fn index_at(label: &str) -> Option<u8> {
    POSITION_INDEX.get(label).copied()
}

/// The algebraic label for a square index in [0,64).
#[inline]
#[must_use]
pub(crate) fn label_of(index: usize) -> &'static str {
    ALGEBRAIC_NOTATION[index].as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_round_trip() {
        for idx in 0..NUM_SQUARES {
            let label = label_of(idx);
            assert_eq!(index_at(label), Some(idx as u8), "label {label}");
        }
    }

    #[test]
    fn test_notation_corners() {
        assert_eq!(label_of(0), "a8");
        assert_eq!(label_of(7), "h8");
        assert_eq!(label_of(56), "a1");
        assert_eq!(label_of(63), "h1");
        assert_eq!(index_at("e4"), Some(36));
        assert_eq!(index_at("e5"), Some(28));
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(index_at("i1"), None);
        assert_eq!(index_at("a9"), None);
        assert_eq!(index_at("e44"), None);
        assert_eq!(index_at(""), None);
    }

    #[test]
    fn test_file_tables_stride() {
        for idx in 0..NUM_SQUARES {
            assert_eq!(FILE_A[idx], idx % 8 == 0);
            assert_eq!(FILE_B[idx], idx % 8 == 1);
            assert_eq!(FILE_G[idx], idx % 8 == 6);
            assert_eq!(FILE_H[idx], idx % 8 == 7);
        }
    }

    #[test]
    fn test_rank_tables_cover_board() {
        let ranks = [
            &RANK_8, &RANK_7, &RANK_6, &RANK_5, &RANK_4, &RANK_3, &RANK_2, &RANK_1,
        ];
        for idx in 0..NUM_SQUARES {
            let members = ranks.iter().filter(|table| table[idx]).count();
            assert_eq!(members, 1, "square {idx} must belong to exactly one rank");
        }
        assert!(RANK_8[0] && RANK_8[7]);
        assert!(RANK_1[56] && RANK_1[63]);
        assert!(RANK_2[48] && RANK_7[8]);
    }

    #[test]
    fn test_index_bounds() {
        assert!(is_valid_index(0));
        assert!(is_valid_index(63));
        assert!(!is_valid_index(-1));
        assert!(!is_valid_index(64));
    }
}
