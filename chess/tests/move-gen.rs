//! Checks the move generator against published perft counts
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use chess::{variations, Position};

fn count(fen: &str, depth: usize) -> u64 {
    println!("\n{}", fen);
    let mut pos: Position = fen.parse().unwrap();

    let count = variations::print(&mut pos, depth);
    println!("Depth {} total:\t{:12}", depth, count);

    assert_eq!(pos.to_fen_str(), Position::from_fen_str(fen).unwrap().to_fen_str());
    count
}

/// Counts from the standard starting position and the other well-known test positions, one test
/// per depth
mod reference {
    use super::count;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const PROMOTIONS: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    const BUGGY: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

    #[test]
    fn start_position() {
        assert_eq!(count(START, 0), 1);
        assert_eq!(count(START, 1), 20);
        assert_eq!(count(START, 2), 400);
        assert_eq!(count(START, 3), 8902);
        assert_eq!(count(START, 4), 197281);
    }

    #[test]
    fn start_position_depth_5() {
        assert_eq!(count(START, 5), 4865609);
    }

    #[test]
    #[ignore]
    fn start_position_depth_6() {
        assert_eq!(count(START, 6), 119060324);
    }

    #[test]
    fn kiwipete() {
        assert_eq!(count(KIWIPETE, 1), 48);
        assert_eq!(count(KIWIPETE, 2), 2039);
        assert_eq!(count(KIWIPETE, 3), 97862);
    }

    #[test]
    #[ignore]
    fn kiwipete_depth_4() {
        assert_eq!(count(KIWIPETE, 4), 4085603);
    }

    #[test]
    fn endgame() {
        assert_eq!(count(ENDGAME, 1), 14);
        assert_eq!(count(ENDGAME, 2), 191);
        assert_eq!(count(ENDGAME, 3), 2812);
        assert_eq!(count(ENDGAME, 4), 43238);
        assert_eq!(count(ENDGAME, 5), 674624);
    }

    #[test]
    fn promotions() {
        assert_eq!(count(PROMOTIONS, 1), 6);
        assert_eq!(count(PROMOTIONS, 2), 264);
        assert_eq!(count(PROMOTIONS, 3), 9467);
        assert_eq!(count(PROMOTIONS, 4), 422333);
    }

    #[test]
    fn buggy() {
        assert_eq!(count(BUGGY, 1), 44);
        assert_eq!(count(BUGGY, 2), 1486);
        assert_eq!(count(BUGGY, 3), 62379);
        assert_eq!(count(BUGGY, 4), 2103487);
    }
}

/// Depth 6 counts for the perft suite; the slowest are ignored by default
mod suite {
    use super::count;

    #[test]
    fn position_003() { assert_eq!(count("4k3/8/8/8/8/8/8/4K2R w K - 0 1", 6), 764643); }

    #[test]
    fn position_004() { assert_eq!(count("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1", 6), 846648); }

    #[test]
    fn position_005() { assert_eq!(count("4k2r/8/8/8/8/8/8/4K3 w k - 0 1", 6), 899442); }

    #[test]
    fn position_006() { assert_eq!(count("r3k3/8/8/8/8/8/8/4K3 w q - 0 1", 6), 1001523); }

    #[test]
    fn position_007() { assert_eq!(count("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", 6), 2788982); }

    #[test]
    #[ignore]
    fn position_008() { assert_eq!(count("r3k2r/8/8/8/8/8/8/4K3 w kq - 0 1", 6), 3517770); }

    #[test]
    fn position_009() { assert_eq!(count("8/8/8/8/8/8/6k1/4K2R w K - 0 1", 6), 185867); }

    #[test]
    fn position_010() { assert_eq!(count("8/8/8/8/8/8/1k6/R3K3 w Q - 0 1", 6), 413018); }

    #[test]
    fn position_011() { assert_eq!(count("4k2r/6K1/8/8/8/8/8/8 w k - 0 1", 6), 179869); }

    #[test]
    fn position_012() { assert_eq!(count("r3k3/1K6/8/8/8/8/8/8 w q - 0 1", 6), 367724); }

    #[test]
    #[ignore]
    fn position_013() { assert_eq!(count("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", 6), 179862938); }

    #[test]
    #[ignore]
    fn position_014() { assert_eq!(count("r3k2r/8/8/8/8/8/8/1R2K2R w Kkq - 0 1", 6), 195629489); }

    #[test]
    #[ignore]
    fn position_015() { assert_eq!(count("r3k2r/8/8/8/8/8/8/2R1K2R w Kkq - 0 1", 6), 184411439); }

    #[test]
    #[ignore]
    fn position_016() { assert_eq!(count("r3k2r/8/8/8/8/8/8/R3K1R1 w Qkq - 0 1", 6), 189224276); }

    #[test]
    #[ignore]
    fn position_017() { assert_eq!(count("1r2k2r/8/8/8/8/8/8/R3K2R w KQk - 0 1", 6), 198328929); }

    #[test]
    #[ignore]
    fn position_018() { assert_eq!(count("2r1k2r/8/8/8/8/8/8/R3K2R w KQk - 0 1", 6), 185959088); }

    #[test]
    #[ignore]
    fn position_019() { assert_eq!(count("r3k1r1/8/8/8/8/8/8/R3K2R w KQq - 0 1", 6), 190755813); }

    #[test]
    fn position_020() { assert_eq!(count("4k3/8/8/8/8/8/8/4K2R b K - 0 1", 6), 899442); }

    #[test]
    fn position_021() { assert_eq!(count("4k3/8/8/8/8/8/8/R3K3 b Q - 0 1", 6), 1001523); }

    #[test]
    fn position_022() { assert_eq!(count("4k2r/8/8/8/8/8/8/4K3 b k - 0 1", 6), 764643); }

    #[test]
    fn position_023() { assert_eq!(count("r3k3/8/8/8/8/8/8/4K3 b q - 0 1", 6), 846648); }

    #[test]
    #[ignore]
    fn position_024() { assert_eq!(count("4k3/8/8/8/8/8/8/R3K2R b KQ - 0 1", 6), 3517770); }

    #[test]
    fn position_025() { assert_eq!(count("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1", 6), 2788982); }

    #[test]
    fn position_026() { assert_eq!(count("8/8/8/8/8/8/6k1/4K2R b K - 0 1", 6), 179869); }

    #[test]
    fn position_027() { assert_eq!(count("8/8/8/8/8/8/1k6/R3K3 b Q - 0 1", 6), 367724); }

    #[test]
    fn position_028() { assert_eq!(count("4k2r/6K1/8/8/8/8/8/8 b k - 0 1", 6), 185867); }

    #[test]
    fn position_029() { assert_eq!(count("r3k3/1K6/8/8/8/8/8/8 b q - 0 1", 6), 413018); }

    #[test]
    #[ignore]
    fn position_030() { assert_eq!(count("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", 6), 179862938); }

    #[test]
    #[ignore]
    fn position_031() { assert_eq!(count("r3k2r/8/8/8/8/8/8/1R2K2R b Kkq - 0 1", 6), 198328929); }

    #[test]
    #[ignore]
    fn position_032() { assert_eq!(count("r3k2r/8/8/8/8/8/8/2R1K2R b Kkq - 0 1", 6), 185959088); }

    #[test]
    #[ignore]
    fn position_033() { assert_eq!(count("r3k2r/8/8/8/8/8/8/R3K1R1 b Qkq - 0 1", 6), 190755813); }

    #[test]
    #[ignore]
    fn position_034() { assert_eq!(count("1r2k2r/8/8/8/8/8/8/R3K2R b KQk - 0 1", 6), 195629489); }

    #[test]
    #[ignore]
    fn position_035() { assert_eq!(count("2r1k2r/8/8/8/8/8/8/R3K2R b KQk - 0 1", 6), 184411439); }

    #[test]
    #[ignore]
    fn position_036() { assert_eq!(count("r3k1r1/8/8/8/8/8/8/R3K2R b KQq - 0 1", 6), 189224276); }

    #[test]
    #[ignore]
    fn position_037() { assert_eq!(count("8/1n4N1/2k5/8/8/5K2/1N4n1/8 w - - 0 1", 6), 8107539); }

    #[test]
    fn position_038() { assert_eq!(count("8/1k6/8/5N2/8/4n3/8/2K5 w - - 0 1", 6), 2594412); }

    #[test]
    #[ignore]
    fn position_039() { assert_eq!(count("8/8/4k3/3Nn3/3nN3/4K3/8/8 w - - 0 1", 6), 19870403); }

    #[test]
    fn position_040() { assert_eq!(count("K7/8/2n5/1n6/8/8/8/k6N w - - 0 1", 6), 588695); }

    #[test]
    fn position_041() { assert_eq!(count("k7/8/2N5/1N6/8/8/8/K6n w - - 0 1", 6), 688780); }

    #[test]
    #[ignore]
    fn position_042() { assert_eq!(count("8/1n4N1/2k5/8/8/5K2/1N4n1/8 b - - 0 1", 6), 8503277); }

    #[test]
    #[ignore]
    fn position_043() { assert_eq!(count("8/1k6/8/5N2/8/4n3/8/2K5 b - - 0 1", 6), 3147566); }

    #[test]
    #[ignore]
    fn position_044() { assert_eq!(count("8/8/3K4/3Nn3/3nN3/4k3/8/8 b - - 0 1", 6), 4405103); }

    #[test]
    fn position_045() { assert_eq!(count("K7/8/2n5/1n6/8/8/8/k6N b - - 0 1", 6), 688780); }

    #[test]
    fn position_046() { assert_eq!(count("k7/8/2N5/1N6/8/8/8/K6n b - - 0 1", 6), 588695); }

    #[test]
    #[ignore]
    fn position_047() { assert_eq!(count("B6b/8/8/8/2K5/4k3/8/b6B w - - 0 1", 6), 22823890); }

    #[test]
    #[ignore]
    fn position_048() { assert_eq!(count("8/8/1B6/7b/7k/8/2B1b3/7K w - - 0 1", 6), 28861171); }

    #[test]
    #[ignore]
    fn position_049() { assert_eq!(count("k7/B7/1B6/1B6/8/8/8/K6b w - - 0 1", 6), 7881673); }

    #[test]
    #[ignore]
    fn position_050() { assert_eq!(count("K7/b7/1b6/1b6/8/8/8/k6B w - - 0 1", 6), 7382896); }

    #[test]
    #[ignore]
    fn position_051() { assert_eq!(count("B6b/8/8/8/2K5/5k2/8/b6B b - - 0 1", 6), 9250746); }

    #[test]
    #[ignore]
    fn position_052() { assert_eq!(count("8/8/1B6/7b/7k/8/2B1b3/7K b - - 0 1", 6), 29027891); }

    #[test]
    #[ignore]
    fn position_053() { assert_eq!(count("k7/B7/1B6/1B6/8/8/8/K6b b - - 0 1", 6), 7382896); }

    #[test]
    #[ignore]
    fn position_054() { assert_eq!(count("K7/b7/1b6/1b6/8/8/8/k6B b - - 0 1", 6), 7881673); }

    #[test]
    #[ignore]
    fn position_055() { assert_eq!(count("7k/RR6/8/8/8/8/rr6/7K w - - 0 1", 6), 44956585); }

    #[test]
    #[ignore]
    fn position_056() { assert_eq!(count("R6r/8/8/2K5/5k2/8/8/r6R w - - 0 1", 6), 525169084); }

    #[test]
    #[ignore]
    fn position_057() { assert_eq!(count("7k/RR6/8/8/8/8/rr6/7K b - - 0 1", 6), 44956585); }

    #[test]
    #[ignore]
    fn position_058() { assert_eq!(count("R6r/8/8/2K5/5k2/8/8/r6R b - - 0 1", 6), 524966748); }

    #[test]
    fn position_059() { assert_eq!(count("6kq/8/8/8/8/8/8/7K w - - 0 1", 6), 391507); }

    #[test]
    fn position_060() { assert_eq!(count("6KQ/8/8/8/8/8/8/7k b - - 0 1", 6), 391507); }

    #[test]
    #[ignore]
    fn position_061() { assert_eq!(count("K7/8/8/3Q4/4q3/8/8/7k w - - 0 1", 6), 3370175); }

    #[test]
    fn position_062() { assert_eq!(count("6qk/8/8/8/8/8/8/7K b - - 0 1", 6), 419369); }

    #[test]
    fn position_063() { assert_eq!(count("6KQ/8/8/8/8/8/8/7k b - - 0 1", 6), 391507); }

    #[test]
    #[ignore]
    fn position_064() { assert_eq!(count("K7/8/8/3Q4/4q3/8/8/7k b - - 0 1", 6), 3370175); }

    #[test]
    fn position_065() { assert_eq!(count("8/8/8/8/8/K7/P7/k7 w - - 0 1", 6), 6249); }

    #[test]
    fn position_066() { assert_eq!(count("8/8/8/8/8/7K/7P/7k w - - 0 1", 6), 6249); }

    #[test]
    fn position_067() { assert_eq!(count("K7/p7/k7/8/8/8/8/8 w - - 0 1", 6), 2343); }

    #[test]
    fn position_068() { assert_eq!(count("7K/7p/7k/8/8/8/8/8 w - - 0 1", 6), 2343); }

    #[test]
    fn position_069() { assert_eq!(count("8/2k1p3/3pP3/3P2K1/8/8/8/8 w - - 0 1", 6), 34834); }

    #[test]
    fn position_070() { assert_eq!(count("8/8/8/8/8/K7/P7/k7 b - - 0 1", 6), 2343); }

    #[test]
    fn position_071() { assert_eq!(count("8/8/8/8/8/7K/7P/7k b - - 0 1", 6), 2343); }

    #[test]
    fn position_072() { assert_eq!(count("K7/p7/k7/8/8/8/8/8 b - - 0 1", 6), 6249); }

    #[test]
    fn position_073() { assert_eq!(count("7K/7p/7k/8/8/8/8/8 b - - 0 1", 6), 6249); }

    #[test]
    fn position_074() { assert_eq!(count("8/2k1p3/3pP3/3P2K1/8/8/8/8 b - - 0 1", 6), 34822); }

    #[test]
    fn position_075() { assert_eq!(count("8/8/8/8/8/4k3/4P3/4K3 w - - 0 1", 6), 11848); }

    #[test]
    fn position_076() { assert_eq!(count("4k3/4p3/4K3/8/8/8/8/8 b - - 0 1", 6), 11848); }

    #[test]
    fn position_077() { assert_eq!(count("8/8/7k/7p/7P/7K/8/8 w - - 0 1", 6), 10724); }

    #[test]
    fn position_078() { assert_eq!(count("8/8/k7/p7/P7/K7/8/8 w - - 0 1", 6), 10724); }

    #[test]
    fn position_079() { assert_eq!(count("8/8/3k4/3p4/3P4/3K4/8/8 w - - 0 1", 6), 53138); }

    #[test]
    fn position_080() { assert_eq!(count("8/3k4/3p4/8/3P4/3K4/8/8 w - - 0 1", 6), 157093); }

    #[test]
    fn position_081() { assert_eq!(count("8/8/3k4/3p4/8/3P4/3K4/8 w - - 0 1", 6), 158065); }

    #[test]
    fn position_082() { assert_eq!(count("k7/8/3p4/8/3P4/8/8/7K w - - 0 1", 6), 20960); }

    #[test]
    fn position_083() { assert_eq!(count("8/8/7k/7p/7P/7K/8/8 b - - 0 1", 6), 10724); }

    #[test]
    fn position_084() { assert_eq!(count("8/8/k7/p7/P7/K7/8/8 b - - 0 1", 6), 10724); }

    #[test]
    fn position_085() { assert_eq!(count("8/8/3k4/3p4/3P4/3K4/8/8 b - - 0 1", 6), 53138); }

    #[test]
    fn position_086() { assert_eq!(count("8/3k4/3p4/8/3P4/3K4/8/8 b - - 0 1", 6), 158065); }

    #[test]
    fn position_087() { assert_eq!(count("8/8/3k4/3p4/8/3P4/3K4/8 b - - 0 1", 6), 157093); }

    #[test]
    fn position_088() { assert_eq!(count("k7/8/3p4/8/3P4/8/8/7K b - - 0 1", 6), 21104); }

    #[test]
    fn position_089() { assert_eq!(count("7k/3p4/8/8/3P4/8/8/K7 w - - 0 1", 6), 32191); }

    #[test]
    fn position_090() { assert_eq!(count("7k/8/8/3p4/8/8/3P4/K7 w - - 0 1", 6), 30980); }

    #[test]
    fn position_091() { assert_eq!(count("k7/8/8/7p/6P1/8/8/K7 w - - 0 1", 6), 41874); }

    #[test]
    fn position_092() { assert_eq!(count("k7/8/7p/8/8/6P1/8/K7 w - - 0 1", 6), 29679); }

    #[test]
    fn position_093() { assert_eq!(count("k7/8/8/6p1/7P/8/8/K7 w - - 0 1", 6), 41874); }

    #[test]
    fn position_094() { assert_eq!(count("k7/8/6p1/8/8/7P/8/K7 w - - 0 1", 6), 29679); }

    #[test]
    fn position_095() { assert_eq!(count("k7/8/8/3p4/4p3/8/8/7K w - - 0 1", 6), 22886); }

    #[test]
    fn position_096() { assert_eq!(count("k7/8/3p4/8/8/4P3/8/7K w - - 0 1", 6), 28662); }

    #[test]
    fn position_097() { assert_eq!(count("7k/3p4/8/8/3P4/8/8/K7 b - - 0 1", 6), 32167); }

    #[test]
    fn position_098() { assert_eq!(count("7k/8/8/3p4/8/8/3P4/K7 b - - 0 1", 6), 30749); }

    #[test]
    fn position_099() { assert_eq!(count("k7/8/8/7p/6P1/8/8/K7 b - - 0 1", 6), 41874); }

    #[test]
    fn position_100() { assert_eq!(count("k7/8/7p/8/8/6P1/8/K7 b - - 0 1", 6), 29679); }

    #[test]
    fn position_101() { assert_eq!(count("k7/8/8/6p1/7P/8/8/K7 b - - 0 1", 6), 41874); }

    #[test]
    fn position_102() { assert_eq!(count("k7/8/6p1/8/8/7P/8/K7 b - - 0 1", 6), 29679); }

    #[test]
    fn position_103() { assert_eq!(count("k7/8/8/3p4/4p3/8/8/7K b - - 0 1", 6), 22579); }

    #[test]
    fn position_104() { assert_eq!(count("k7/8/3p4/8/8/4P3/8/7K b - - 0 1", 6), 28662); }

    #[test]
    fn position_105() { assert_eq!(count("7k/8/8/p7/1P6/8/8/7K w - - 0 1", 6), 41874); }

    #[test]
    fn position_106() { assert_eq!(count("7k/8/p7/8/8/1P6/8/7K w - - 0 1", 6), 29679); }

    #[test]
    fn position_107() { assert_eq!(count("7k/8/8/1p6/P7/8/8/7K w - - 0 1", 6), 41874); }

    #[test]
    fn position_108() { assert_eq!(count("7k/8/1p6/8/8/P7/8/7K w - - 0 1", 6), 29679); }

    #[test]
    fn position_109() { assert_eq!(count("k7/7p/8/8/8/8/6P1/K7 w - - 0 1", 6), 55338); }

    #[test]
    fn position_110() { assert_eq!(count("k7/6p1/8/8/8/8/7P/K7 w - - 0 1", 6), 55338); }

    #[test]
    fn position_111() { assert_eq!(count("3k4/3pp3/8/8/8/8/3PP3/3K4 w - - 0 1", 6), 199002); }

    #[test]
    fn position_112() { assert_eq!(count("7k/8/8/p7/1P6/8/8/7K b - - 0 1", 6), 41874); }

    #[test]
    fn position_113() { assert_eq!(count("7k/8/p7/8/8/1P6/8/7K b - - 0 1", 6), 29679); }

    #[test]
    fn position_114() { assert_eq!(count("7k/8/8/1p6/P7/8/8/7K b - - 0 1", 6), 41874); }

    #[test]
    fn position_115() { assert_eq!(count("7k/8/1p6/8/8/P7/8/7K b - - 0 1", 6), 29679); }

    #[test]
    fn position_116() { assert_eq!(count("k7/7p/8/8/8/8/6P1/K7 b - - 0 1", 6), 55338); }

    #[test]
    fn position_117() { assert_eq!(count("k7/6p1/8/8/8/8/7P/K7 b - - 0 1", 6), 55338); }

    #[test]
    fn position_118() { assert_eq!(count("3k4/3pp3/8/8/8/8/3PP3/3K4 b - - 0 1", 6), 199002); }

    #[test]
    fn position_119() { assert_eq!(count("8/Pk6/8/8/8/8/6Kp/8 w - - 0 1", 6), 1030499); }

    #[test]
    #[ignore]
    fn position_120() { assert_eq!(count("n1n5/1Pk5/8/8/8/8/5Kp1/5N1N w - - 0 1", 6), 37665329); }

    #[test]
    #[ignore]
    fn position_121() { assert_eq!(count("8/PPPk4/8/8/8/8/4Kppp/8 w - - 0 1", 6), 28859283); }

    #[test]
    #[ignore]
    fn position_122() { assert_eq!(count("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N w - - 0 1", 6), 71179139); }

    #[test]
    fn position_123() { assert_eq!(count("8/Pk6/8/8/8/8/6Kp/8 b - - 0 1", 6), 1030499); }

    #[test]
    #[ignore]
    fn position_124() { assert_eq!(count("n1n5/1Pk5/8/8/8/8/5Kp1/5N1N b - - 0 1", 6), 37665329); }

    #[test]
    #[ignore]
    fn position_125() { assert_eq!(count("8/PPPk4/8/8/8/8/4Kppp/8 b - - 0 1", 6), 28859283); }

    #[test]
    #[ignore]
    fn position_126() { assert_eq!(count("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1", 6), 71179139); }
}
