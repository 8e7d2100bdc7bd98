//! Bit-flag and enumeration name lists. A flag's value is `1 << index`;
//! an enumeration's value is its index.

pub static MOBJFLAG_LIST: &[&str] = &[
    "SPECIAL",
    "SOLID",
    "SHOOTABLE",
    "NOSECTOR",
    "NOBLOCKMAP",
    "PAPERCOLLISION",
    "PUSHABLE",
    "BOSS",
    "SPAWNCEILING",
    "NOGRAVITY",
    "AMBIENT",
    "SLIDEME",
    "NOCLIP",
    "FLOAT",
    "BOXICON",
    "MISSILE",
    "SPRING",
    "BOUNCE",
    "MONITOR",
    "NOTHINK",
    "FIRE",
    "NOCLIPHEIGHT",
    "ENEMY",
    "SCENERY",
    "PAIN",
    "STICKY",
    "NIGHTSITEM",
    "NOCLIPTHING",
    "GRENADEBOUNCE",
    "RUNSPAWNFUNC",
];

pub static MOBJFLAG2_LIST: &[&str] = &[
    "AXIS",
    "TWOD",
    "DONTRESPAWN",
    "DONTDRAW",
    "AUTOMATIC",
    "RAILRING",
    "BOUNCERING",
    "EXPLOSION",
    "SCATTER",
    "BEYONDTHEGRAVE",
    "SLIDEPUSH",
    "CLASSICPUSH",
    "INVERTAIMABLE",
    "INFLOAT",
    "DEBRIS",
    "NIGHTSPULL",
    "JUSTATTACKED",
    "FIRING",
    "SUPERFIRE",
    "SHADOW",
    "STRONGBOX",
    "OBJECTFLIP",
    "SKULLFLY",
    "FRET",
    "BOSSNOTRAP",
    "BOSSFLEE",
    "BOSSDEAD",
    "AMBUSH",
    "LINKDRAW",
    "SHIELD",
];

pub static MOBJEFLAG_LIST: &[&str] = &[
    "ONGROUND",
    "JUSTHITFLOOR",
    "TOUCHWATER",
    "UNDERWATER",
    "JUSTSTEPPEDDOWN",
    "VERTICALFLIP",
    "GOOWATER",
    "TOUCHLAVA",
    "PUSHED",
    "SPRUNG",
    "APPLYPMOMZ",
    "TRACERANGLE",
];

pub static MAPTHINGFLAG_LIST: &[&str] = &["EXTRA", "OBJECTFLIP", "OBJECTSPECIAL", "AMBUSH"];

pub static PLAYERFLAG_LIST: &[&str] = &[
    "FLIPCAM",
    "ANALOGMODE",
    "DIRECTIONCHAR",
    "AUTOBRAKE",
    "GODMODE",
    "NOCLIP",
    "INVIS",
    "ATTACKDOWN",
    "USEDOWN",
    "JUMPDOWN",
    "WPNDOWN",
    "STASIS",
    "JUMPSTASIS",
    "APPLYAUTOBRAKE",
    "STARTJUMP",
    "JUMPED",
    "NOJUMPDAMAGE",
    "SPINNING",
    "STARTDASH",
    "THOKKED",
    "SHIELDABILITY",
    "GLIDING",
    "BOUNCING",
    "SLIDING",
    "TRANSFERTOCLOSEST",
    "DRILLING",
    "GAMETYPEOVER",
    "TAGIT",
    "FORCESTRAFE",
    "CANCARRY",
    "FINISHED",
];

pub static GAMETYPERULE_LIST: &[&str] = &[
    "CAMPAIGN",
    "RINGSLINGER",
    "SPECTATORS",
    "LIVES",
    "TEAMS",
    "FIRSTPERSON",
    "POWERSTONES",
    "TEAMFLAGS",
    "FRIENDLY",
    "SPECIALSTAGES",
    "EMERALDTOKENS",
    "EMERALDHUNT",
    "RACE",
    "TAG",
    "POINTLIMIT",
    "TIMELIMIT",
    "OVERTIME",
    "HURTMESSAGES",
    "FRIENDLYFIRE",
    "STARTCOUNTDOWN",
    "HIDEFROZEN",
    "BLINDFOLDED",
    "RESPAWNDELAY",
    "PITYSHIELD",
    "DEATHPENALTY",
    "NOSPECTATORSPAWN",
    "DEATHMATCHSTARTS",
    "SPAWNINVUL",
    "SPAWNENEMIES",
    "ALLOWEXIT",
    "NOTITLECARD",
    "CUTSCENES",
];

/// Linedef flags.
pub static ML_LIST: &[&str] = &[
    "IMPASSIBLE",
    "BLOCKMONSTERS",
    "TWOSIDED",
    "DONTPEGTOP",
    "DONTPEGBOTTOM",
    "EFFECT1",
    "NOCLIMB",
    "EFFECT2",
    "EFFECT3",
    "EFFECT4",
    "EFFECT5",
    "NOSONIC",
    "NOTAILS",
    "NOKNUX",
    "BOUNCY",
    "TFERLINE",
];

/// Skin colors, including the Super palettes.
pub static COLOR_ENUMS: &[&str] = &[
    "NONE",
    "WHITE",
    "BONE",
    "CLOUDY",
    "GREY",
    "SILVER",
    "CARBON",
    "JET",
    "BLACK",
    "AETHER",
    "SLATE",
    "BLUEBELL",
    "PINK",
    "YOGURT",
    "BROWN",
    "BRONZE",
    "TAN",
    "BEIGE",
    "MOSS",
    "AZURE",
    "LAVENDER",
    "RUBY",
    "SALMON",
    "RED",
    "CRIMSON",
    "FLAME",
    "KETCHUP",
    "PEACHY",
    "QUAIL",
    "SUNSET",
    "COPPER",
    "APRICOT",
    "ORANGE",
    "RUST",
    "GOLD",
    "SANDY",
    "YELLOW",
    "OLIVE",
    "LIME",
    "PERIDOT",
    "APPLE",
    "GREEN",
    "FOREST",
    "EMERALD",
    "MINT",
    "SEAFOAM",
    "AQUA",
    "TEAL",
    "WAVE",
    "CYAN",
    "SKY",
    "CERULEAN",
    "ICY",
    "SAPPHIRE",
    "CORNFLOWER",
    "BLUE",
    "COBALT",
    "VAPOR",
    "DUSK",
    "PASTEL",
    "PURPLE",
    "BUBBLEGUM",
    "MAGENTA",
    "NEON",
    "VIOLET",
    "LILAC",
    "PLUM",
    "RASPBERRY",
    "ROSY",
    "SUPERSILVER1",
    "SUPERSILVER2",
    "SUPERSILVER3",
    "SUPERSILVER4",
    "SUPERSILVER5",
    "SUPERRED1",
    "SUPERRED2",
    "SUPERRED3",
    "SUPERRED4",
    "SUPERRED5",
    "SUPERORANGE1",
    "SUPERORANGE2",
    "SUPERORANGE3",
    "SUPERORANGE4",
    "SUPERORANGE5",
    "SUPERGOLD1",
    "SUPERGOLD2",
    "SUPERGOLD3",
    "SUPERGOLD4",
    "SUPERGOLD5",
    "SUPERPERIDOT1",
    "SUPERPERIDOT2",
    "SUPERPERIDOT3",
    "SUPERPERIDOT4",
    "SUPERPERIDOT5",
    "SUPERSKY1",
    "SUPERSKY2",
    "SUPERSKY3",
    "SUPERSKY4",
    "SUPERSKY5",
    "SUPERPURPLE1",
    "SUPERPURPLE2",
    "SUPERPURPLE3",
    "SUPERPURPLE4",
    "SUPERPURPLE5",
    "SUPERRUST1",
    "SUPERRUST2",
    "SUPERRUST3",
    "SUPERRUST4",
    "SUPERRUST5",
    "SUPERTAN1",
    "SUPERTAN2",
    "SUPERTAN3",
    "SUPERTAN4",
    "SUPERTAN5",
];

pub static POWERS_LIST: &[&str] = &[
    "INVULNERABILITY",
    "SNEAKERS",
    "FLASHING",
    "SHIELD",
    "CARRY",
    "TAILSFLY",
    "UNDERWATER",
    "SPACETIME",
    "EXTRALIFE",
    "PUSHING",
    "JUSTSPRUNG",
    "NOAUTOBRAKE",
    "SUPER",
    "GRAVITYBOOTS",
    "INFINITYRING",
    "AUTOMATICRING",
    "BOUNCERING",
    "SCATTERRING",
    "GRENADERING",
    "EXPLOSIONRING",
    "RAILRING",
    "EMERALDS",
    "NIGHTS_SUPERLOOP",
    "NIGHTS_HELPER",
    "NIGHTS_LINKFREEZE",
    "NOCONTROL",
    "DYE",
    "JUSTLAUNCHED",
];

pub static HUDITEMS_LIST: &[&str] = &[
    "LIVES",
    "RINGS",
    "RINGSNUM",
    "RINGSNUMTICS",
    "SCORE",
    "SCORENUM",
    "TIME",
    "MINUTES",
    "TIMECOLON",
    "SECONDS",
    "TIMETICCOLON",
    "TICS",
    "SS_TOTALRINGS",
    "GETRINGS",
    "GETRINGSNUM",
    "TIMELEFT",
    "TIMELEFTNUM",
    "TIMEUP",
    "HUNTPICS",
    "POWERUPS",
];

pub static MENUTYPES_LIST: &[&str] = &[
    "NONE",
    "MAIN",
    "SP_MAIN",
    "SP_LOAD",
    "SP_PLAYER",
    "SP_LEVELSELECT",
    "SP_LEVELSTATS",
    "SP_TIMEATTACK",
    "SP_TIMEATTACK_LEVELSELECT",
    "SP_GUESTREPLAY",
    "SP_REPLAY",
    "SP_GHOST",
    "SP_NIGHTSATTACK",
    "SP_NIGHTS_LEVELSELECT",
    "SP_NIGHTS_GUESTREPLAY",
    "SP_NIGHTS_REPLAY",
    "SP_NIGHTS_GHOST",
    "MP_MAIN",
    "MP_SPLITSCREEN",
    "MP_SERVER",
    "MP_CONNECT",
    "MP_ROOM",
    "MP_PLAYERSETUP",
    "MP_SERVER_OPTIONS",
    "OP_MAIN",
    "OP_P1CONTROLS",
    "OP_CHANGECONTROLS",
    "OP_P1MOUSE",
    "OP_P1JOYSTICK",
    "OP_JOYSTICKSET",
    "OP_P1CAMERA",
    "OP_P2CONTROLS",
    "OP_P2MOUSE",
    "OP_P2JOYSTICK",
    "OP_P2CAMERA",
    "OP_PLAYSTYLE",
    "OP_VIDEO",
    "OP_VIDEOMODE",
    "OP_COLOR",
    "OP_OPENGL",
    "OP_OPENGL_LIGHTING",
    "OP_OPENGL_FOG",
    "OP_OPENGL_COLOR",
    "OP_SOUND",
    "OP_SERVER",
    "OP_MONITORTOGGLE",
    "OP_DATA",
    "OP_ADDONS",
    "OP_SCREENSHOTS",
    "OP_ERASEDATA",
    "SR_MAIN",
    "SR_PANDORA",
    "SR_LEVELSELECT",
    "SR_UNLOCKCHECKLIST",
    "SR_EMBLEMHINT",
    "SR_PLAYER",
    "SR_SOUNDTEST",
    "AD_MAIN",
    "SPECIAL",
];

/// NiGHTS grade letters, worst to best.
pub const NIGHTS_GRADES: &str = "FEDCBAS";

/// Built-in game types, `GT_` constant names without the prefix.
pub static GAMETYPE_LIST: &[&str] = &[
    "COOP",
    "COMPETITION",
    "RACE",
    "MATCH",
    "TEAMMATCH",
    "TAG",
    "HIDEANDSEEK",
    "CTF",
];

/// Level type names accepted by `TYPEOFLEVEL` lists, with their bits.
pub static TYPEOFLEVEL_NAMES: &[(&str, u32)] = &[
    ("SOLO", 0x1),
    ("SP", 0x1),
    ("SINGLEPLAYER", 0x1),
    ("SINGLE", 0x1),
    ("COOP", 0x2),
    ("CO-OP", 0x2),
    ("COMPETITION", 0x4),
    ("RACE", 0x8),
    ("MATCH", 0x10),
    ("TAG", 0x20),
    ("CTF", 0x40),
    ("2D", 0x100),
    ("MARIO", 0x200),
    ("NIGHTS", 0x400),
    ("OLDBRAK", 0x800),
    ("XMAS", 0x1000),
    ("CHRISTMAS", 0x1000),
    ("WINTER", 0x1000),
];

/// Names accepted by `FLICKYLIST` entries, with the object type each
/// stands for.
pub static FLICKY_NAMES: &[(&str, &str)] = &[
    ("BLUEBIRD", "MT_FLICKY_01"),
    ("RABBIT", "MT_FLICKY_02"),
    ("CHICKEN", "MT_FLICKY_03"),
    ("SEAL", "MT_FLICKY_04"),
    ("PIG", "MT_FLICKY_05"),
    ("CHIPMUNK", "MT_FLICKY_06"),
    ("PENGUIN", "MT_FLICKY_07"),
    ("FISH", "MT_FLICKY_08"),
    ("RAM", "MT_FLICKY_09"),
    ("PUFFIN", "MT_FLICKY_10"),
    ("COW", "MT_FLICKY_11"),
    ("RAT", "MT_FLICKY_12"),
    ("BEAR", "MT_FLICKY_13"),
    ("DOVE", "MT_FLICKY_14"),
    ("CAT", "MT_FLICKY_15"),
    ("CANARY", "MT_FLICKY_16"),
    ("SPIDER", "MT_SECRETFLICKY_01"),
    ("BAT", "MT_SECRETFLICKY_02"),
    ("SEED", "MT_SEED"),
];

/// How many leading [`FLICKY_NAMES`] entries `FLICKYLIST = ALL` covers.
pub const ALL_FLICKIES: usize = 16;

/// `FLICKYLIST = DEMO`, the set a fresh map header starts with.
pub const DEMO_FLICKIES: &[&str] = &[
    "MT_FLICKY_02",
    "MT_FLICKY_12",
    "MT_FLICKY_11",
    "MT_FLICKY_03",
    "MT_FLICKY_01",
];

/// Screen wipe slots in `WIPES` blocks, in slot order. Only the
/// `_TOBLACK` entries between [`WIPE_LEVEL_TOBLACK`] and
/// [`WIPE_SPECLEVEL_TOWHITE`] may be disabled.
pub static WIPE_LIST: &[&str] = &[
    "CREDITS_INTERMEDIATE",
    "LEVEL_TOBLACK",
    "INTERMISSION_TOBLACK",
    "CONTINUING_TOBLACK",
    "TITLESCREEN_TOBLACK",
    "TIMEATTACK_TOBLACK",
    "CREDITS_TOBLACK",
    "EVALUATION_TOBLACK",
    "GAMEEND_TOBLACK",
    "INTRO_TOBLACK",
    "ENDING_TOBLACK",
    "CUTSCENE_TOBLACK",
    "SPECINTER_TOBLACK",
    "MULTINTER_TOBLACK",
    "SPECLEVEL_TOWHITE",
    "LEVEL_FINAL",
    "INTERMISSION_FINAL",
    "CONTINUING_FINAL",
    "TITLESCREEN_FINAL",
    "TIMEATTACK_FINAL",
    "CREDITS_FINAL",
    "EVALUATION_FINAL",
    "GAMEEND_FINAL",
    "INTRO_FINAL",
    "ENDING_FINAL",
    "CUTSCENE_FINAL",
    "SPECINTER_FINAL",
    "MULTINTER_FINAL",
];

pub const WIPE_LEVEL_TOBLACK: usize = 1;
pub const WIPE_SPECLEVEL_TOWHITE: usize = 14;

/// Index of `name` in `list`, compared exactly.
pub fn position(list: &[&str], name: &str) -> Option<usize> {
    list.iter().position(|entry| *entry == name)
}

/// `1 << index` for a flag named in `list`.
pub fn flag_bit(list: &[&str], name: &str) -> Option<i64> {
    position(list, name).map(|index| 1i64 << index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_bits_follow_list_order() {
        assert_eq!(flag_bit(MOBJFLAG_LIST, "SPECIAL"), Some(1));
        assert_eq!(flag_bit(MOBJFLAG_LIST, "SOLID"), Some(2));
        assert_eq!(flag_bit(MOBJFLAG_LIST, "RUNSPAWNFUNC"), Some(1 << 29));
        assert_eq!(flag_bit(GAMETYPERULE_LIST, "CUTSCENES"), Some(1 << 31));
        assert_eq!(flag_bit(ML_LIST, "solid"), None);
    }

    #[test]
    fn flag_lists_fit_their_words() {
        assert!(MOBJFLAG_LIST.len() <= 32);
        assert!(MOBJFLAG2_LIST.len() <= 32);
        assert!(PLAYERFLAG_LIST.len() <= 32);
        assert_eq!(GAMETYPERULE_LIST.len(), 32);
        assert_eq!(ML_LIST.len(), 16);
    }
}
