//! Miscellaneous integer constants reachable from numeric fields by name.

pub const FRACBITS: i64 = 16;
pub const FRACUNIT: i64 = 1 << FRACBITS;
pub const TICRATE: i64 = 35;

pub const LF_SCRIPTISFILE: i32 = 1 << 0;
pub const LF_SPEEDMUSIC: i32 = 1 << 1;
pub const LF_NOSSMUSIC: i32 = 1 << 2;
pub const LF_NORELOAD: i32 = 1 << 3;
pub const LF_NOZONE: i32 = 1 << 4;
pub const LF_SAVEGAME: i32 = 1 << 5;
pub const LF_MIXNIGHTSCOUNTDOWN: i32 = 1 << 6;
pub const LF_WARNINGTITLE: i32 = 1 << 7;
pub const LF_NOTITLECARDFIRST: i32 = 1 << 8;
pub const LF_NOTITLECARDRESPAWN: i32 = 1 << 9;
pub const LF_NOTITLECARDRECORDATTACK: i32 = 1 << 10;
pub const LF_NOTITLECARD: i32 =
    LF_NOTITLECARDFIRST | LF_NOTITLECARDRESPAWN | LF_NOTITLECARDRECORDATTACK;

pub const LF2_HIDEINMENU: i32 = 1 << 0;
pub const LF2_HIDEINSTATS: i32 = 1 << 1;
pub const LF2_RECORDATTACK: i32 = 1 << 2;
pub const LF2_NIGHTSATTACK: i32 = 1 << 3;
pub const LF2_NOVISITNEEDED: i32 = 1 << 4;
pub const LF2_WIDEICON: i32 = 1 << 5;

const FF_TRANSSHIFT: i64 = 16;

/// Named integer constants, matched case-sensitively.
pub static INT_CONST: &[(&str, i64)] = &[
    ("INT8_MIN", i8::MIN as i64),
    ("INT16_MIN", i16::MIN as i64),
    ("INT32_MIN", i32::MIN as i64),
    ("INT8_MAX", i8::MAX as i64),
    ("INT16_MAX", i16::MAX as i64),
    ("INT32_MAX", i32::MAX as i64),
    ("UINT8_MAX", u8::MAX as i64),
    ("UINT16_MAX", u16::MAX as i64),
    ("UINT32_MAX", u32::MAX as i64),
    ("FRACUNIT", FRACUNIT),
    ("FRACBITS", FRACBITS),
    ("TICRATE", TICRATE),
    ("NEWTICRATE", TICRATE),
    ("NEWTICRATERATIO", 1),
    ("MUSICRATE", 1000),
    ("RING_DIST", 512 * FRACUNIT),
    ("PUSHACCEL", 2 * FRACUNIT),
    // sprite frame flags
    ("FF_FRAMEMASK", 0xff),
    ("FF_SPR2SUPER", 0x80),
    ("FF_SPR2ENDSTATE", 0x100),
    ("FF_SPR2MIDSTART", 0x200),
    ("FF_PAPERSPRITE", 0x800),
    ("FF_GLOBALANIM", 0x2000),
    ("FF_ANIMATE", 0x4000),
    ("FF_RANDOMANIM", 0x8000),
    ("FF_TRANSMASK", 0xf << FF_TRANSSHIFT),
    ("FF_TRANSSHIFT", FF_TRANSSHIFT),
    ("FF_FULLBRIGHT", 0x0010_0000),
    ("FF_VERTICALFLIP", 0x0020_0000),
    ("FF_TRANS10", 1 << FF_TRANSSHIFT),
    ("FF_TRANS20", 2 << FF_TRANSSHIFT),
    ("FF_TRANS30", 3 << FF_TRANSSHIFT),
    ("FF_TRANS40", 4 << FF_TRANSSHIFT),
    ("FF_TRANS50", 5 << FF_TRANSSHIFT),
    ("FF_TRANS60", 6 << FF_TRANSSHIFT),
    ("FF_TRANS70", 7 << FF_TRANSSHIFT),
    ("FF_TRANS80", 8 << FF_TRANSSHIFT),
    ("FF_TRANS90", 9 << FF_TRANSSHIFT),
    ("TR_TRANS10", 1 << FF_TRANSSHIFT),
    ("TR_TRANS20", 2 << FF_TRANSSHIFT),
    ("TR_TRANS30", 3 << FF_TRANSSHIFT),
    ("TR_TRANS40", 4 << FF_TRANSSHIFT),
    ("TR_TRANS50", 5 << FF_TRANSSHIFT),
    ("TR_TRANS60", 6 << FF_TRANSSHIFT),
    ("TR_TRANS70", 7 << FF_TRANSSHIFT),
    ("TR_TRANS80", 8 << FF_TRANSSHIFT),
    ("TR_TRANS90", 9 << FF_TRANSSHIFT),
    ("tr_trans10", 1),
    ("tr_trans20", 2),
    ("tr_trans30", 3),
    ("tr_trans40", 4),
    ("tr_trans50", 5),
    ("tr_trans60", 6),
    ("tr_trans70", 7),
    ("tr_trans80", 8),
    ("tr_trans90", 9),
    ("NUMTRANSMAPS", 10),
    // level header flags
    ("LF_SCRIPTISFILE", LF_SCRIPTISFILE as i64),
    ("LF_SPEEDMUSIC", LF_SPEEDMUSIC as i64),
    ("LF_NOSSMUSIC", LF_NOSSMUSIC as i64),
    ("LF_NORELOAD", LF_NORELOAD as i64),
    ("LF_NOZONE", LF_NOZONE as i64),
    ("LF_SAVEGAME", LF_SAVEGAME as i64),
    ("LF_MIXNIGHTSCOUNTDOWN", LF_MIXNIGHTSCOUNTDOWN as i64),
    ("LF_NOTITLECARDFIRST", LF_NOTITLECARDFIRST as i64),
    ("LF_NOTITLECARDRESPAWN", LF_NOTITLECARDRESPAWN as i64),
    ("LF_NOTITLECARDRECORDATTACK", LF_NOTITLECARDRECORDATTACK as i64),
    ("LF_NOTITLECARD", LF_NOTITLECARD as i64),
    ("LF_WARNINGTITLE", LF_WARNINGTITLE as i64),
    ("LF2_HIDEINMENU", LF2_HIDEINMENU as i64),
    ("LF2_HIDEINSTATS", LF2_HIDEINSTATS as i64),
    ("LF2_RECORDATTACK", LF2_RECORDATTACK as i64),
    ("LF2_NIGHTSATTACK", LF2_NIGHTSATTACK as i64),
    ("LF2_NOVISITNEEDED", LF2_NOVISITNEEDED as i64),
    ("LF2_WIDEICON", LF2_WIDEICON as i64),
    ("EMERALD1", 1),
    ("EMERALD2", 1 << 1),
    ("EMERALD3", 1 << 2),
    ("EMERALD4", 1 << 3),
    ("EMERALD5", 1 << 4),
    ("EMERALD6", 1 << 5),
    ("EMERALD7", 1 << 6),
    ("PRECIP_NONE", 0),
    ("PRECIP_STORM", 1),
    ("PRECIP_SNOW", 2),
    ("PRECIP_RAIN", 3),
    ("PRECIP_BLANK", 4),
    ("PRECIP_STORM_NORAIN", 5),
    ("PRECIP_STORM_NOSTRIKES", 6),
    ("SH_NONE", 0),
    ("SH_PITY", 1),
    ("SH_WHIRLWIND", 2),
    ("SH_ARMAGEDDON", 3),
    ("SH_PINK", 4),
    ("SH_PROTECTFIRE", 0x400),
    ("SH_PROTECTWATER", 0x800),
    ("SH_PROTECTELECTRIC", 0x1000),
    ("SH_PROTECTSPIKE", 0x2000),
    ("CR_NONE", 0),
    ("CR_GENERIC", 1),
    ("CR_PLAYER", 2),
    ("CR_NIGHTSMODE", 3),
    ("CR_NIGHTSFALL", 4),
    ("CR_BRAKGOOP", 5),
    ("CR_ZOOMTUBE", 6),
    ("CR_ROPEHANG", 7),
    ("CR_MACESPIN", 8),
    ("CR_MINECART", 9),
    ("CR_ROLLOUT", 10),
    ("CR_PTERABYTE", 11),
    ("RW_AUTO", 1),
    ("RW_BOUNCE", 1 << 1),
    ("RW_SCATTER", 1 << 2),
    ("RW_GRENADE", 1 << 3),
    ("RW_EXPLODE", 1 << 4),
    ("RW_RAIL", 1 << 5),
    ("CA_NONE", 0),
    ("CA_THOK", 1),
    ("CA_FLY", 2),
    ("CA_GLIDEANDCLIMB", 3),
    ("CA_HOMINGTHOK", 4),
    ("CA_DOUBLEJUMP", 5),
    ("CA_FLOAT", 6),
    ("CA_SLOWFALL", 7),
    ("CA_SWIM", 8),
    ("CA_TELEKINESIS", 9),
    ("CA_FALLSWITCH", 10),
    ("CA_JUMPBOOST", 11),
    ("CA_AIRDRILL", 12),
    ("CA_JUMPTHOK", 13),
    ("CA_BOUNCE", 14),
    ("CA_TWINSPIN", 15),
    ("CA2_NONE", 0),
    ("CA2_SPINDASH", 1),
    ("CA2_GUNSLINGER", 2),
    ("CA2_MELEE", 3),
    ("DMG_WATER", 1),
    ("DMG_FIRE", 2),
    ("DMG_ELECTRIC", 3),
    ("DMG_SPIKE", 4),
    ("DMG_NUKE", 5),
    ("DMG_CANHURTSELF", 0x40),
    ("DMG_INSTAKILL", 0x80),
    ("DMG_DROWNED", 0x81),
    ("DMG_SPACEDROWN", 0x82),
    ("DMG_DEATHPIT", 0x83),
    ("DMG_CRUSHED", 0x84),
    ("DMG_SPECTATOR", 0x85),
    ("DMG_DEATHMASK", 0x80),
    ("GE_NIGHTSPULL", 1),
    ("GE_NIGHTSITEM", 2),
    ("ME_ALLEMERALDS", 1),
    ("ME_ULTIMATE", 2),
    ("ME_PERFECT", 4),
    ("FLOATSPEED", 4 * FRACUNIT),
    ("MAXSTEPMOVE", 24 * FRACUNIT),
    ("USERANGE", 64 * FRACUNIT),
    ("MELEERANGE", 64 * FRACUNIT),
    ("MISSILERANGE", 2048 * FRACUNIT),
    ("ONFLOORZ", i32::MIN as i64),
    ("ONCEILINGZ", i32::MAX as i64),
    ("int_none", 0),
    ("int_coop", 1),
    ("int_match", 2),
    ("int_teammatch", 3),
    ("int_ctf", 4),
    ("int_spec", 5),
    ("int_race", 6),
    ("int_comp", 7),
    ("PST_LIVE", 0),
    ("PST_DEAD", 1),
    ("PST_REBORN", 2),
    ("PA_ETC", 0),
    ("PA_IDLE", 1),
    ("PA_EDGE", 2),
    ("PA_WALK", 3),
    ("PA_RUN", 4),
    ("PA_DASH", 5),
    ("PA_PAIN", 6),
    ("PA_ROLL", 7),
    ("PA_JUMP", 8),
    ("PA_SPRING", 9),
    ("PA_FALL", 10),
    ("PA_ABILITY", 11),
    ("PA_ABILITY2", 12),
    ("PA_RIDE", 13),
    ("WEP_AUTO", 0),
    ("WEP_BOUNCE", 1),
    ("WEP_SCATTER", 2),
    ("WEP_GRENADE", 3),
    ("WEP_EXPLODE", 4),
    ("WEP_RAIL", 5),
    ("NUM_WEAPONS", 6),
    ("INFLIVES", 0x7f),
    ("GF_REDFLAG", 1),
    ("GF_BLUEFLAG", 2),
    ("ANG1", 0x00B6_0B61),
    ("ANG2", 0x016C_16C1),
    ("ANG10", 0x071C_71C7),
    ("ANG15", 0x0AAA_AAAA),
    ("ANG20", 0x0E38_E38E),
    ("ANG30", 0x1555_5555),
    ("ANG60", 0x2AAA_AAAA),
    ("ANGLE_11hh", 0x0800_0000),
    ("ANGLE_22h", 0x1000_0000),
    ("ANGLE_45", 0x2000_0000),
    ("ANGLE_67h", 0x3000_0000),
    ("ANGLE_90", 0x4000_0000),
    ("ANGLE_112h", 0x5000_0000),
    ("ANGLE_135", 0x6000_0000),
    ("ANGLE_157h", 0x7000_0000),
    ("ANGLE_180", 0x8000_0000),
    ("ANGLE_202h", 0x9000_0000),
    ("ANGLE_225", 0xA000_0000),
    ("ANGLE_247h", 0xB000_0000),
    ("ANGLE_270", 0xC000_0000),
    ("ANGLE_292h", 0xD000_0000),
    ("ANGLE_315", 0xE000_0000),
    ("ANGLE_337h", 0xF000_0000),
    ("ANGLE_MAX", 0xFFFF_FFFF),
    ("DI_NODIR", -1),
    ("DI_EAST", 0),
    ("DI_NORTHEAST", 1),
    ("DI_NORTH", 2),
    ("DI_NORTHWEST", 3),
    ("DI_WEST", 4),
    ("DI_SOUTHWEST", 5),
    ("DI_SOUTH", 6),
    ("DI_SOUTHEAST", 7),
    ("NUMDIRS", 8),
    ("ROTAXIS_X", 0),
    ("ROTAXIS_Y", 1),
    ("ROTAXIS_Z", 2),
    ("BT_WEAPONMASK", 0x0f),
    ("BT_WEAPONNEXT", 1 << 4),
    ("BT_WEAPONPREV", 1 << 5),
    ("BT_ATTACK", 1 << 6),
    ("BT_USE", 1 << 7),
    ("BT_CAMLEFT", 1 << 8),
    ("BT_CAMRIGHT", 1 << 9),
    ("BT_TOSSFLAG", 1 << 10),
    ("BT_JUMP", 1 << 11),
    ("BT_FIRENORMAL", 1 << 12),
    ("BT_CUSTOM1", 1 << 13),
    ("BT_CUSTOM2", 1 << 14),
    ("BT_CUSTOM3", 1 << 15),
    ("TC_DEFAULT", -1),
    ("TC_BOSS", -2),
    ("TC_METALSONIC", -3),
    ("TC_ALLWHITE", -4),
    ("TC_RAINBOW", -5),
    ("TC_BLINK", -6),
    ("TC_DASHMODE", -7),
];

/// Value of a named constant from [`INT_CONST`].
pub fn int_const(name: &str) -> Option<i64> {
    INT_CONST
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_case_sensitive() {
        assert_eq!(int_const("TICRATE"), Some(35));
        assert_eq!(int_const("tr_trans50"), Some(5));
        assert_eq!(int_const("TR_TRANS50"), Some(5 << 16));
        assert_eq!(int_const("ticrate"), None);
    }

    #[test]
    fn title_card_mask_covers_every_title_card_bit() {
        assert_eq!(int_const("LF_NOTITLECARD"), Some(0x700));
    }
}
