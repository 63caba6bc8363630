//! Provides data and functions used to compute attacks
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use log::debug;
use super::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Squares whose occupancy can change a bishop's attacks (board edges excluded)
const BISHOP_MASKS: [u64; Square::COUNT] = [
    0x0040_2010_0804_0200, 0x0000_4020_1008_0400, 0x0000_0040_2010_0a00, 0x0000_0000_4022_1400,
    0x0000_0000_0244_2800, 0x0000_0002_0408_5000, 0x0000_0204_0810_2000, 0x0002_0408_1020_4000,
    0x0020_1008_0402_0000, 0x0040_2010_0804_0000, 0x0000_4020_100a_0000, 0x0000_0040_2214_0000,
    0x0000_0002_4428_0000, 0x0000_0204_0850_0000, 0x0002_0408_1020_0000, 0x0004_0810_2040_0000,
    0x0010_0804_0200_0200, 0x0020_1008_0400_0400, 0x0040_2010_0a00_0a00, 0x0000_4022_1400_1400,
    0x0000_0244_2800_2800, 0x0002_0408_5000_5000, 0x0004_0810_2000_2000, 0x0008_1020_4000_4000,
    0x0008_0402_0002_0400, 0x0010_0804_0004_0800, 0x0020_100a_000a_1000, 0x0040_2214_0014_2200,
    0x0002_4428_0028_4400, 0x0004_0850_0050_0800, 0x0008_1020_0020_1000, 0x0010_2040_0040_2000,
    0x0004_0200_0204_0800, 0x0008_0400_0408_1000, 0x0010_0a00_0a10_2000, 0x0022_1400_1422_4000,
    0x0044_2800_2844_0200, 0x0008_5000_5008_0400, 0x0010_2000_2010_0800, 0x0020_4000_4020_1000,
    0x0002_0002_0408_1000, 0x0004_0004_0810_2000, 0x000a_000a_1020_4000, 0x0014_0014_2240_0000,
    0x0028_0028_4402_0000, 0x0050_0050_0804_0200, 0x0020_0020_1008_0400, 0x0040_0040_2010_0800,
    0x0000_0204_0810_2000, 0x0000_0408_1020_4000, 0x0000_0a10_2040_0000, 0x0000_1422_4000_0000,
    0x0000_2844_0200_0000, 0x0000_5008_0402_0000, 0x0000_2010_0804_0200, 0x0000_4020_1008_0400,
    0x0002_0408_1020_4000, 0x0004_0810_2040_0000, 0x000a_1020_4000_0000, 0x0014_2240_0000_0000,
    0x0028_4402_0000_0000, 0x0050_0804_0200_0000, 0x0020_1008_0402_0000, 0x0040_2010_0804_0200,
];

const BISHOP_MAGICS: [u64; Square::COUNT] = [
    0x04a0_088a_2800_4010, 0x024a_0801_0421_8004, 0x0018_0800_4088_2800, 0x1228_0a49_0004_001a,
    0x5004_1044_0700_0004, 0x0000_82a0_2080_0000, 0x0943_0426_2014_0050, 0x0012_0a00_cc04_1400,
    0x0010_9410_0c48_2080, 0x0001_0208_0109_0200, 0x0210_1004_3050_4842, 0x0204_5404_2084_4880,
    0x20c8_0404_2010_0000, 0x4420_8208_0228_0450, 0x8800_2088_0410_8420, 0xd008_9103_0801_0c00,
    0x0088_2004_2004_0408, 0x002c_0010_1002_1040, 0x0201_0102_0404_0080, 0x0408_0010_8201_4200,
    0x0294_0080_88a0_0008, 0x0003_0002_0192_0560, 0x0044_0289_4144_1010, 0x0400_8082_0084_0981,
    0x0888_8408_0a10_1000, 0x0404_e004_0212_0401, 0x0112_5008_0800_8015, 0x8104_8080_0802_0002,
    0x1022_0c00_0a00_8211, 0x3008_0220_1202_0100, 0x000a_2081_4208_0580, 0x1082_0082_0200_89c0,
    0x8802_0220_2150_200c, 0x0001_1120_2010_0400, 0x0000_c402_0310_0028, 0x8024_8200_8048_0080,
    0x0000_4040_4104_0100, 0x0020_0280_8805_0400, 0x0202_1800_4012_0200, 0x0002_1400_6001_0288,
    0x0482_0120_0802_2002, 0x0004_010c_5100_8202, 0x0001_2210_c800_5014, 0x0210_6142_0800_0081,
    0x0034_0212_0a00_8400, 0x0004_2024_0101_4848, 0x1084_5464_0058_0400, 0x0084_0084_0500_0148,
    0x2200_4110_1011_0000, 0x8010_8041_1010_0418, 0x2520_0242_0490_1810, 0xe880_8200_60a8_00c0,
    0x02e1_0010_1606_0100, 0x4400_0c10_064a_1120, 0x0211_100a_0800_4044, 0x0248_1002_8628_c010,
    0x000a_0200_8c11_0820, 0x0083_4100_8290_0860, 0x02db_0080_4200_d004, 0x0840_0000_808c_0410,
    0xa504_2000_2020_a480, 0x0002_04e0_2a12_0200, 0x0401_2a88_1001_8208, 0x4020_2230_0068_8080,
];

const BISHOP_SHIFTS: [u32; Square::COUNT] = [
    58, 59, 59, 59, 59, 59, 59, 58,
    59, 59, 59, 59, 59, 59, 59, 59,
    59, 59, 57, 57, 57, 57, 59, 59,
    59, 59, 57, 55, 55, 57, 59, 59,
    59, 59, 57, 55, 55, 57, 59, 59,
    59, 59, 57, 57, 57, 57, 59, 59,
    59, 59, 59, 59, 59, 59, 59, 59,
    58, 59, 59, 59, 59, 59, 59, 58,
];

/// Squares whose occupancy can change a rook's attacks (board edges excluded)
const ROOK_MASKS: [u64; Square::COUNT] = [
    0x0001_0101_0101_017e, 0x0002_0202_0202_027c, 0x0004_0404_0404_047a, 0x0008_0808_0808_0876,
    0x0010_1010_1010_106e, 0x0020_2020_2020_205e, 0x0040_4040_4040_403e, 0x0080_8080_8080_807e,
    0x0001_0101_0101_7e00, 0x0002_0202_0202_7c00, 0x0004_0404_0404_7a00, 0x0008_0808_0808_7600,
    0x0010_1010_1010_6e00, 0x0020_2020_2020_5e00, 0x0040_4040_4040_3e00, 0x0080_8080_8080_7e00,
    0x0001_0101_017e_0100, 0x0002_0202_027c_0200, 0x0004_0404_047a_0400, 0x0008_0808_0876_0800,
    0x0010_1010_106e_1000, 0x0020_2020_205e_2000, 0x0040_4040_403e_4000, 0x0080_8080_807e_8000,
    0x0001_0101_7e01_0100, 0x0002_0202_7c02_0200, 0x0004_0404_7a04_0400, 0x0008_0808_7608_0800,
    0x0010_1010_6e10_1000, 0x0020_2020_5e20_2000, 0x0040_4040_3e40_4000, 0x0080_8080_7e80_8000,
    0x0001_017e_0101_0100, 0x0002_027c_0202_0200, 0x0004_047a_0404_0400, 0x0008_0876_0808_0800,
    0x0010_106e_1010_1000, 0x0020_205e_2020_2000, 0x0040_403e_4040_4000, 0x0080_807e_8080_8000,
    0x0001_7e01_0101_0100, 0x0002_7c02_0202_0200, 0x0004_7a04_0404_0400, 0x0008_7608_0808_0800,
    0x0010_6e10_1010_1000, 0x0020_5e20_2020_2000, 0x0040_3e40_4040_4000, 0x0080_7e80_8080_8000,
    0x007e_0101_0101_0100, 0x007c_0202_0202_0200, 0x007a_0404_0404_0400, 0x0076_0808_0808_0800,
    0x006e_1010_1010_1000, 0x005e_2020_2020_2000, 0x003e_4040_4040_4000, 0x007e_8080_8080_8000,
    0x7e01_0101_0101_0100, 0x7c02_0202_0202_0200, 0x7a04_0404_0404_0400, 0x7608_0808_0808_0800,
    0x6e10_1010_1010_1000, 0x5e20_2020_2020_2000, 0x3e40_4040_4040_4000, 0x7e80_8080_8080_8000,
];

const ROOK_MAGICS: [u64; Square::COUNT] = [
    0x0180_0420_d082_4000, 0x0880_2000_f0c0_0080, 0x0080_2000_1000_2880, 0x0100_0500_2210_0008,
    0x0600_0600_0820_9084, 0x0200_0882_0010_0401, 0x1080_0680_4200_0100, 0x0080_0430_8000_4100,
    0x2004_8020_4008_8004, 0x0080_8060_0180_4000, 0x0014_8020_0280_1008, 0x2000_8010_0008_0480,
    0xa088_8008_0083_0400, 0x8000_8004_0081_0200, 0x01a4_0010_0408_2302, 0x0001_0020_80c1_000a,
    0x0188_9480_00a1_4000, 0x0800_8080_2010_4000, 0xa490_0020_0028_0402, 0x8004_2900_1001_0020,
    0x2408_0080_8004_0008, 0x0001_0100_0248_0c00, 0x4405_6400_0802_3001, 0x0680_5a00_0400_8851,
    0x1402_4004_8004_8021, 0x1000_2202_0040_8101, 0x0000_2142_0030_8600, 0x0928_0082_8010_0009,
    0x0110_0800_8004_0080, 0x0002_0200_8080_0400, 0x0061_0001_0012_0004, 0x0000_8000_8020_4100,
    0x0080_0020_0840_0840, 0x4008_4008_8080_2000, 0x4150_2000_8180_3000, 0xc000_8018_0280_1000,
    0x0001_0011_0500_0801, 0x0000_8022_0080_0400, 0x4981_8201_1400_08b0, 0x3202_0108_4a00_0094,
    0x0480_0040_2000_4000, 0x2a40_2000_5000_4008, 0x4187_2a00_4082_0010, 0x4802_0040_201a_0010,
    0x0648_0040_2004_0400, 0x8202_0008_4c02_0010, 0x0014_0402_0001_0100, 0x4090_c0c0_8402_0001,
    0x0012_8000_4012_a080, 0x0080_8020_0240_0180, 0x0480_1020_0900_4100, 0x2000_1001_2009_0100,
    0xa04c_0208_0080_0480, 0x8040_8002_0004_0080, 0x0000_1008_1102_0c00, 0x0430_4104_1050_8200,
    0x0000_2904_8001_4011, 0x0001_00a2_0090_8042, 0x0420_0411_0138_4021, 0x0090_0900_205c_5001,
    0x3002_0088_2410_2052, 0x3621_0004_0008_8621, 0x0003_0022_0004_0299, 0x0404_0400_c023_0882,
];

const ROOK_SHIFTS: [u32; Square::COUNT] = [
    52, 53, 53, 53, 53, 53, 53, 52,
    53, 54, 54, 54, 54, 54, 54, 53,
    53, 54, 54, 54, 54, 54, 54, 53,
    53, 54, 54, 54, 54, 54, 54, 53,
    53, 54, 54, 54, 54, 54, 54, 53,
    53, 54, 54, 54, 54, 54, 54, 53,
    53, 54, 54, 54, 54, 54, 54, 53,
    52, 53, 53, 53, 53, 53, 53, 52,
];

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A per-square magic lookup for one kind of slider
struct Magic {
    mask: u64,
    magic: u64,
    shift: u32,
    attacks: Vec<Bitboard>,
}

impl Magic {
    fn new(sq: Square, mask: u64, magic: u64, shift: u32, dirs: &[Direction]) -> Magic {
        let size = 1 << mask.count_ones();
        let mut magic = Magic { mask, magic, shift, attacks: vec![Bitboard::new(); size] };

        for n in 0..size {
            let blockers = nth_combination(n, mask);
            let index = magic.index(blockers);
            magic.attacks[index] = slide(sq, Bitboard(blockers), dirs);
        }

        magic
    }

    #[inline]
    fn index(&self, occ: u64) -> usize {
        ((occ & self.mask).wrapping_mul(self.magic) >> self.shift) as usize
    }

    #[inline]
    fn attacks(&self, occ: Bitboard) -> Bitboard {
        self.attacks[self.index(occ.0)]
    }
}

/// Returns the subset of `mask` selected by the bits of `n`, lowest bit of `n` picking the lowest
/// square of `mask`
fn nth_combination(n: usize, mut mask: u64) -> u64 {
    let mut combination = 0;
    let mut i = 1;

    while i <= n && mask != 0 {
        let bit = mask & mask.wrapping_neg();
        mask ^= bit;
        if i & n != 0 {
            combination |= bit;
        }
        i <<= 1;
    }

    combination
}

/// Computes sliding attacks from `sq` one step at a time, stopping each ray at the first blocker
pub(crate) fn slide(sq: Square, blockers: Bitboard, dirs: &[Direction]) -> Bitboard {
    let origin = Bitboard::from(sq);
    let mut attacks = Bitboard::new();

    for dir in dirs.iter().copied() {
        let mut step = origin.shift(dir);
        while !step.is_empty() {
            attacks |= step;
            if step.intersects(blockers) {
                break;
            }
            step = step.shift(dir);
        }
    }

    attacks
}

////////////////////////////////////////////////////////////////////////////////////////////////////
struct AttackTables {
    pawn: [[Bitboard; Square::COUNT]; Side::COUNT],
    knight: [Bitboard; Square::COUNT],
    king: [Bitboard; Square::COUNT],
    bishop: Vec<Magic>,
    rook: Vec<Magic>,
}

impl AttackTables {
    fn new() -> AttackTables {
        use Direction::*;

        let mut tables = AttackTables {
            pawn: [[Bitboard::new(); Square::COUNT]; Side::COUNT],
            knight: [Bitboard::new(); Square::COUNT],
            king: [Bitboard::new(); Square::COUNT],
            bishop: Vec::with_capacity(Square::COUNT),
            rook: Vec::with_capacity(Square::COUNT),
        };

        for sq in Square::all() {
            let bd = Bitboard::from(sq);
            let i = sq as usize;

            tables.pawn[Side::White as usize][i] = bd.shift(NorthEast) | bd.shift(NorthWest);
            tables.pawn[Side::Black as usize][i] = bd.shift(SouthEast) | bd.shift(SouthWest);

            tables.knight[i] = bd.shift(North).shift(NorthEast)
                | bd.shift(North).shift(NorthWest)
                | bd.shift(South).shift(SouthEast)
                | bd.shift(South).shift(SouthWest)
                | bd.shift(East).shift(NorthEast)
                | bd.shift(East).shift(SouthEast)
                | bd.shift(West).shift(NorthWest)
                | bd.shift(West).shift(SouthWest);

            tables.king[i] = Direction::ALL.iter()
                .fold(Bitboard::new(), |king, dir| king | bd.shift(*dir));

            tables.bishop.push(Magic::new(
                sq, BISHOP_MASKS[i], BISHOP_MAGICS[i], BISHOP_SHIFTS[i], &Direction::DIAGONAL
            ));
            tables.rook.push(Magic::new(
                sq, ROOK_MASKS[i], ROOK_MAGICS[i], ROOK_SHIFTS[i], &Direction::ORTHOGONAL
            ));
        }

        debug!("bishop attack table entries: {}",
            tables.bishop.iter().map(|m| m.attacks.len()).sum::<usize>());
        debug!("rook attack table entries: {}",
            tables.rook.iter().map(|m| m.attacks.len()).sum::<usize>());

        tables
    }
}

lazy_static! {
    static ref TABLES: AttackTables = AttackTables::new();
}

/// Builds the attack tables now rather than on first use
pub fn init() {
    lazy_static::initialize(&TABLES);
    lazy_static::initialize(&super::LINES);
}

/// Returns the squares attacked by a pawn of `side` standing on `sq`
///
/// Because pawn attacks are asymmetric, `pawn_attacks(sq, !side)` gives the squares from which a
/// pawn of `side` would attack `sq`.
#[inline]
pub fn pawn_attacks(sq: Square, side: Side) -> Bitboard {
    TABLES.pawn[side as usize][sq as usize]
}

/// Computes knight-like attacks to or from `sq`
///
/// See the module-level documentation for more information about
/// [this function](index.html#direct-attacks-pawns-knights-and-kings).
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    TABLES.knight[sq as usize]
}

/// Computes king-like attacks to or from `sq`
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    TABLES.king[sq as usize]
}

/// Computes bishop-like attacks to or from `sq` based on the occupied squares given by `occ`
///
/// See the module-level documentation for more information about
/// [this function](index.html#sliding-attacks-bishops-rooks-and-queens).
#[inline]
pub fn diagonal_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    TABLES.bishop[sq as usize].attacks(occ)
}

/// Computes rook-like attacks to or from `sq` based on the occupied squares given by `occ`
#[inline]
pub fn orthogonal_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    TABLES.rook[sq as usize].attacks(occ)
}

/// Returns the diagonal squares that only become attacked from `sq` once the first blocker on each
/// ray is removed
///
/// ```rust
/// use chess::Square;
/// use chess::bitboard::{Bitboard, diagonal_xray};
///
/// // a bishop on a1 sees through the pawn on c3 to the king on f6
/// let occ: Bitboard = vec![Square::C3, Square::F6].into_iter().collect();
/// assert!(diagonal_xray(Square::A1, occ).contains(Square::F6));
/// assert!(!diagonal_xray(Square::A1, occ).contains(Square::C3));
/// ```
pub fn diagonal_xray(sq: Square, occ: Bitboard) -> Bitboard {
    let attacked = diagonal_attacks(sq, occ);
    attacked ^ diagonal_attacks(sq, occ & !attacked)
}

/// Returns the orthogonal squares that only become attacked from `sq` once the first blocker on
/// each ray is removed
pub fn orthogonal_xray(sq: Square, occ: Bitboard) -> Bitboard {
    let attacked = orthogonal_attacks(sq, occ);
    attacked ^ orthogonal_attacks(sq, occ & !attacked)
}
