#[cfg(test)]
mod tests {
    use crate::saves::classifier::{
        STADIUM1_TEAM_SIZE, STADIUM2_TEAM_SIZE, STADIUMJ_TEAM_SIZE,
    };
    use crate::saves::classify;
    use crate::saves::sizes::*;
    use crate::saves::tests::common::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::SaveType;

    #[rstest]
    #[case("RBY international raw", g1_international(SIZE_G1RAW), SaveType::RBY)]
    #[case("RBY international battery", g1_international(SIZE_G1BAT), SaveType::RBY)]
    #[case("RBY japanese", g1_japanese(SIZE_G1RAW), SaveType::RBY)]
    #[case("GS international", g2(SIZE_G2RAW_U, false, Gen2Region::International), SaveType::GS)]
    #[case("C international VC", g2(SIZE_G2VC_U, true, Gen2Region::International), SaveType::C)]
    #[case("GS japanese", g2(SIZE_G2RAW_J, false, Gen2Region::Japanese), SaveType::GS)]
    #[case("C japanese emulator", g2(SIZE_G2EMU_J, true, Gen2Region::Japanese), SaveType::C)]
    #[case("GS korean", g2(SIZE_G2BAT_J, false, Gen2Region::Korean), SaveType::GS)]
    #[case("RS", g3(SIZE_G3RAW, Gen3Kind::RubySapphire), SaveType::RS)]
    #[case("E", g3(SIZE_G3RAW, Gen3Kind::Emerald), SaveType::E)]
    #[case("FRLG half", g3(SIZE_G3RAWHALF, Gen3Kind::FireRedLeafGreen), SaveType::FRLG)]
    #[case("DP", g4(0x4C100), SaveType::DP)]
    #[case("Pt", g4(0x4CF2C), SaveType::Pt)]
    #[case("HGSS", g4(0x4F628), SaveType::HGSS)]
    #[case("BW", g5(SIZE_G5BW, 0x8C), SaveType::BW)]
    #[case("B2W2", g5(SIZE_G5B2W2, 0x94), SaveType::B2W2)]
    #[case("XY", beef_footer(SIZE_G6XY), SaveType::XY)]
    #[case("ORAS", beef_footer(SIZE_G6ORAS), SaveType::ORAS)]
    #[case("ORAS demo", beef_footer(SIZE_G6ORASDEMO), SaveType::ORASDEMO)]
    #[case("SM", beef_footer(SIZE_G7SM), SaveType::SM)]
    #[case("USUM", beef_footer(SIZE_G7USUM), SaveType::USUM)]
    #[case("Let's Go", beluga(), SaveType::GG)]
    #[case("Colosseum", colosseum(), SaveType::COLO)]
    #[case("XD", xd(), SaveType::XD)]
    #[case("Box RS", rsbox(), SaveType::RSBOX)]
    #[case("Battle Revolution", battle_revolution(), SaveType::BATREV)]
    #[case("Bank7", bank7(), SaveType::Bank7)]
    #[case("Bank4", bank4(true), SaveType::Bank4)]
    #[case("Bank3", bank4(false), SaveType::Bank3)]
    #[case("Ranch DP", ranch(false), SaveType::Ranch4)]
    #[case("Ranch Pt", ranch(true), SaveType::Ranch4)]
    #[case("Stadium 2", stadium(SIZE_G2STAD, STADIUM2_TEAM_SIZE, true), SaveType::Stadium2)]
    #[case("Stadium", stadium(SIZE_G1STADF, STADIUM1_TEAM_SIZE, false), SaveType::Stadium)]
    #[case("Stadium J", stadium(SIZE_G1STADJ, STADIUMJ_TEAM_SIZE, true), SaveType::StadiumJ)]
    #[case("SWSH 1.0", hashed(SIZES_G8SWSH[0]), SaveType::SWSH)]
    #[case("SWSH 1.3", hashed(SIZES_G8SWSH[4]), SaveType::SWSH)]
    #[case("BDSP 1.0", bdsp(SIZE_G8BDSP, 0x25), SaveType::BDSP)]
    #[case("BDSP 1.2", bdsp(SIZE_G8BDSP_2, 0x32), SaveType::BDSP)]
    #[case("Luminescent", bdsp(SIZE_G8BDSPLUMI_3, 0xFFFF_0034), SaveType::BDSPLUMI)]
    #[case("PLA", hashed(SIZE_G8LA), SaveType::PLA)]
    fn test_each_probe_matches_its_fixture(
        #[case] desc: &str,
        #[case] data: Vec<u8>,
        #[case] expected: SaveType,
    ) {
        assert_eq!(classify(&data), Some(expected), "{}", desc);
    }

    #[rstest]
    #[case("G1 list count over capacity", {
        let mut data = g1_international(SIZE_G1RAW);
        data[0x2F2C] = 21;
        data
    })]
    #[case("G3 missing a sector", {
        let mut data = g3(SIZE_G3RAW, Gen3Kind::Emerald);
        data[0x5FF8] = 0;
        data
    })]
    #[case("G4 wrong SDK date", {
        let mut data = g4(0x4C100);
        data[0x4C100 - 0x8] ^= 1;
        data
    })]
    #[case("G5 corrupted footer", {
        let mut data = g5(SIZE_G5BW, 0x8C);
        data[SIZE_G5BW - 0x100] ^= 0xFF;
        data
    })]
    #[case("Let's Go without the block check", {
        let mut data = beluga();
        data[0xB8800 - 0x200 + 0xB0] = 0x12;
        data
    })]
    #[case("Colosseum missing its third slot", {
        let mut data = colosseum();
        data[0x6000 + 0x1E000 * 2] = 0;
        data
    })]
    #[case("Battle Revolution tampered", {
        let mut data = battle_revolution();
        data[0x20] ^= 0x10;
        data
    })]
    #[case("SWSH hash mismatch", {
        let mut data = hashed(SIZES_G8SWSH[1]);
        data[0] ^= 1;
        data
    })]
    #[case("BDSP unknown revision", bdsp(SIZE_G8BDSP, 0x26))]
    #[case("Ranch without marker", vec![0u8; SIZE_G4RANCH])]
    fn test_damaged_fixtures_are_rejected(#[case] desc: &str, #[case] data: Vec<u8>) {
        assert_eq!(classify(&data), None, "{}", desc);
    }

    #[test]
    fn test_classification_is_deterministic_and_pure() {
        let fixtures = [
            g1_international(SIZE_G1RAW),
            g3(SIZE_G3RAW, Gen3Kind::Emerald),
            g4(0x4CF2C),
            rsbox(),
            hashed(SIZE_G8LA_1),
            vec![0x5Au8; SIZE_G5RAW],
        ];
        for data in fixtures {
            let before = data.clone();
            let first = classify(&data);
            let second = classify(&data);
            assert_eq!(first, second);
            assert_eq!(data, before);
        }
    }

    #[test]
    fn test_second_gen3_slot_is_used_when_first_is_blank() {
        let half = g3(SIZE_G3RAWHALF, Gen3Kind::FireRedLeafGreen);
        let mut data = vec![0u8; SIZE_G3RAW];
        data[0xE000..0xE000 + 0xE000].copy_from_slice(&half[..0xE000]);
        assert_eq!(classify(&data), Some(SaveType::FRLG));
    }
}
