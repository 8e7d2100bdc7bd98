//! Built-in enumeration names for object types, states, sprites, player
//! sprites, sounds and native actions.
//!
//! Object type and state entries keep their `MT_` / `S_` prefix; lookups
//! compare against the text after it.

pub static MOBJTYPE_LIST: &[&str] = &[
    "MT_NULL",
    "MT_UNKNOWN",
    "MT_THOK",
    "MT_PLAYER",
    "MT_TAILSOVERLAY",
    "MT_METALJETFUME",
    // Enemies
    "MT_BLUECRAWLA",
    "MT_REDCRAWLA",
    "MT_GFZFISH",
    "MT_GOLDBUZZ",
    "MT_REDBUZZ",
    "MT_JETTBOMBER",
    "MT_JETTGUNNER",
    "MT_CRAWLACOMMANDER",
    "MT_DETON",
    "MT_SKIM",
    "MT_TURRET",
    "MT_POPUPTURRET",
    "MT_SPINCUSHION",
    "MT_CRUSHSTACEAN",
    "MT_CRUSHCLAW",
    "MT_CRUSHCHAIN",
    "MT_BANPYURA",
    "MT_BANPSPRING",
    "MT_JETJAW",
    "MT_SNAILER",
    "MT_VULTURE",
    "MT_POINTY",
    "MT_POINTYBALL",
    "MT_ROBOHOOD",
    "MT_FACESTABBER",
    "MT_EGGGUARD",
    "MT_EGGSHIELD",
    "MT_GSNAPPER",
    "MT_MINUS",
    "MT_SPRINGSHELL",
    "MT_YELLOWSHELL",
    "MT_UNIDUS",
    "MT_UNIBALL",
    // Bosses
    "MT_BOSSEXPLODE",
    "MT_SONIC3KBOSSEXPLODE",
    "MT_BOSSFLYPOINT",
    "MT_EGGTRAP",
    "MT_BOSS3WAYPOINT",
    "MT_BOSS9GATHERPOINT",
    "MT_BOSSJUNK",
    "MT_EGGMOBILE",
    "MT_JETFUME1",
    "MT_EGGMOBILE_BALL",
    "MT_EGGMOBILE_TARGET",
    "MT_EGGMOBILE_FIRE",
    // Collectibles
    "MT_RING",
    "MT_FLINGRING",
    "MT_BLUESPHERE",
    "MT_FLINGBLUESPHERE",
    "MT_BOMBSPHERE",
    "MT_REDTEAMRING",
    "MT_BLUETEAMRING",
    "MT_TOKEN",
    "MT_REDFLAG",
    "MT_BLUEFLAG",
    "MT_EMBLEM",
    "MT_EMERALD1",
    "MT_EMERALD2",
    "MT_EMERALD3",
    "MT_EMERALD4",
    "MT_EMERALD5",
    "MT_EMERALD6",
    "MT_EMERALD7",
    "MT_EMERHUNT",
    "MT_EMERALDSPAWN",
    "MT_FLINGEMERALD",
    // Springs and level objects
    "MT_SIGN",
    "MT_SPIKEBALL",
    "MT_YELLOWSPRING",
    "MT_REDSPRING",
    "MT_BLUESPRING",
    "MT_STARPOST",
    "MT_BIGMINE",
    "MT_BLASTEXECUTOR",
    "MT_CANNONLAUNCHER",
    // Flickies
    "MT_FLICKY_01",
    "MT_FLICKY_02",
    "MT_FLICKY_03",
    "MT_FLICKY_04",
    "MT_FLICKY_05",
    "MT_FLICKY_06",
    "MT_FLICKY_07",
    "MT_FLICKY_08",
    "MT_FLICKY_09",
    "MT_FLICKY_10",
    "MT_FLICKY_11",
    "MT_FLICKY_12",
    "MT_FLICKY_13",
    "MT_FLICKY_14",
    "MT_FLICKY_15",
    "MT_FLICKY_16",
    "MT_SECRETFLICKY_01",
    "MT_SECRETFLICKY_02",
    "MT_SEED",
    // Environmental effects
    "MT_RAIN",
    "MT_SNOWFLAKE",
    "MT_SPLISH",
    "MT_SMOKE",
    "MT_SMALLBUBBLE",
    "MT_MEDIUMBUBBLE",
    "MT_EXTRALARGEBUBBLE",
    "MT_WATERZAP",
    "MT_SPINDUST",
    "MT_TFOG",
    "MT_PARTICLE",
    "MT_PARTICLEGEN",
    "MT_NAMECHECK",
    "MT_RAY",
];

pub static STATE_LIST: &[&str] = &[
    "S_NULL",
    "S_UNKNOWN",
    "S_INVISIBLE",
    "S_SPAWNSTATE",
    "S_SEESTATE",
    "S_MELEESTATE",
    "S_MISSILESTATE",
    "S_DEATHSTATE",
    "S_XDEATHSTATE",
    "S_RAISESTATE",
    "S_THOK",
    // Player
    "S_PLAY_STND",
    "S_PLAY_WAIT",
    "S_PLAY_WALK",
    "S_PLAY_SKID",
    "S_PLAY_RUN",
    "S_PLAY_DASH",
    "S_PLAY_PAIN",
    "S_PLAY_STUN",
    "S_PLAY_DEAD",
    "S_PLAY_DRWN",
    "S_PLAY_ROLL",
    "S_PLAY_GASP",
    "S_PLAY_JUMP",
    "S_PLAY_SPRING",
    "S_PLAY_FALL",
    "S_PLAY_EDGE",
    "S_PLAY_RIDE",
    "S_PLAY_SPINDASH",
    "S_PLAY_FLY",
    "S_PLAY_SWIM",
    "S_PLAY_FLY_TIRED",
    "S_PLAY_GLIDE",
    "S_PLAY_GLIDE_LANDING",
    "S_PLAY_CLING",
    "S_PLAY_CLIMB",
    "S_PLAY_FLOAT",
    "S_PLAY_FLOAT_RUN",
    "S_PLAY_BOUNCE",
    "S_PLAY_BOUNCE_LANDING",
    "S_PLAY_FIRE",
    "S_PLAY_FIRE_FINISH",
    "S_PLAY_TWINSPIN",
    "S_PLAY_MELEE",
    "S_PLAY_MELEE_FINISH",
    "S_PLAY_MELEE_LANDING",
    "S_TAILSOVERLAY_STAND",
    // Crawlas
    "S_POSS_STND",
    "S_POSS_RUN1",
    "S_POSS_RUN2",
    "S_POSS_RUN3",
    "S_POSS_RUN4",
    "S_POSS_RUN5",
    "S_POSS_RUN6",
    "S_SPOS_STND",
    "S_SPOS_RUN1",
    "S_SPOS_RUN2",
    "S_SPOS_RUN3",
    "S_SPOS_RUN4",
    "S_SPOS_RUN5",
    "S_SPOS_RUN6",
    // Collectibles
    "S_RING",
    "S_BLUESPHERE",
    "S_BLUESPHEREBONUS",
    "S_BLUESPHERESPARK",
    "S_TOKEN",
    "S_EMBLEM1",
    "S_CEMG1",
    "S_CEMG2",
    "S_CEMG3",
    "S_CEMG4",
    "S_CEMG5",
    "S_CEMG6",
    "S_CEMG7",
    "S_SPRK1",
    "S_SPRK2",
    "S_SPRK3",
    // Explosions
    "S_BOSSEXPLODE",
    "S_SONIC3KBOSSEXPLOSION1",
    "S_SONIC3KBOSSEXPLOSION2",
    "S_SONIC3KBOSSEXPLOSION3",
    "S_SONIC3KBOSSEXPLOSION4",
    "S_SONIC3KBOSSEXPLOSION5",
    "S_SONIC3KBOSSEXPLOSION6",
    "S_XPLD_FLICKY",
    "S_XPLD1",
    "S_XPLD2",
    "S_XPLD3",
    "S_XPLD4",
    // Flicky
    "S_FLICKY_01_OUT",
    "S_FLICKY_01_FLAP1",
    "S_FLICKY_01_FLAP2",
    "S_FLICKY_01_FLAP3",
    // Weather
    "S_RAIN1",
    "S_RAINRETURN",
    "S_SNOW1",
    "S_SNOW2",
    "S_SNOW3",
    "S_SPLISH1",
    "S_SPLISH2",
    "S_SPLISH3",
    "S_SPLISH4",
    "S_SPLISH5",
    "S_SPLISH6",
    "S_SPLISH7",
    "S_SPLISH8",
    "S_SPLISH9",
];

/// Four-letter sprite lump prefixes.
pub static SPRITE_LIST: &[&str] = &[
    "NULL", "UNKN", "THOK", "PLAY", "POSS", "SPOS", "FISH", "BUZZ", "RBUZ", "JETB", "JETG",
    "CCOM", "DETN", "SKIM", "TRET", "TURR", "SHRP", "CRAB", "CR2B", "CSPR", "BNNY", "JJAW",
    "SNLR", "VLTR", "PNTY", "ARCH", "CBFS", "STAB", "ESHI", "GSNP", "MNUS", "SSHL", "UNID",
    "EGGM", "RING", "TRNG", "TOKE", "RFLG", "BFLG", "SPHR", "NCHP", "NSTR", "EMBM", "CEMG",
    "SHRD", "FL01", "FL02", "FL03", "FL04", "FL05", "FL06", "FL07", "FL08", "FL09", "FL10",
    "FL11", "FL12", "FL13", "FL14", "FL15", "FL16", "FS01", "FS02", "SPRK", "BOM1", "BOM2",
    "BOM3", "RAIN", "SNO1", "SPLH", "SMOK", "BUBL", "WZAP", "DUST", "FPRT", "TFOG", "SEED",
    "PART",
];

/// Player sprite (`SPR2_`) names. Three-letter names are padded with `_`.
pub static SPRITE2_LIST: &[&str] = &[
    "STND", "WAIT", "WALK", "SKID", "RUN_", "DASH", "PAIN", "STUN", "DEAD", "DRWN", "ROLL",
    "GASP", "JUMP", "SPNG", "FALL", "EDGE", "RIDE", "SPIN", "FLY_", "SWIM", "TIRE", "GLID",
    "LAND", "CLNG", "CLMB", "FLT_", "FRUN", "BNCE", "FIRE", "TWIN", "MLEE", "MLEL", "TRNS",
    "NSTD", "NFLT", "NFLY", "NDRL", "NSTN", "NPUL", "NATK", "TAL0", "TAL1", "TAL2", "TAL3",
    "TAL4", "TAL5", "TAL6", "TAL7", "TAL8", "TAL9", "TALA", "TALB", "TALC", "CNT1", "CNT2",
    "CNT3", "CNT4", "SIGN", "LIFE", "XTRA",
];

/// Fallback player sprite for each built-in one that has a fallback.
pub static SPRITE2_DEFAULTS: &[(&str, &str)] = &[
    ("WAIT", "STND"),
    ("SKID", "WALK"),
    ("RUN_", "WALK"),
    ("DASH", "RUN_"),
    ("STUN", "PAIN"),
    ("DEAD", "PAIN"),
    ("DRWN", "DEAD"),
    ("GASP", "SPNG"),
    ("JUMP", "SPIN"),
    ("SPNG", "FALL"),
    ("FALL", "WALK"),
    ("EDGE", "FALL"),
    ("RIDE", "ROLL"),
    ("SPIN", "ROLL"),
    ("FLY_", "SPNG"),
    ("SWIM", "FLY_"),
    ("TIRE", "FALL"),
    ("GLID", "FLY_"),
    ("LAND", "ROLL"),
    ("CLNG", "ROLL"),
    ("CLMB", "ROLL"),
    ("FLT_", "WALK"),
    ("FRUN", "RUN_"),
    ("BNCE", "FALL"),
    ("FIRE", "STND"),
    ("TWIN", "ROLL"),
    ("MLEE", "TWIN"),
    ("MLEL", "WALK"),
    ("TRNS", "STND"),
    ("NFLT", "NSTD"),
    ("NFLY", "NFLT"),
    ("NDRL", "NFLY"),
    ("NSTN", "NFLY"),
    ("NPUL", "NFLY"),
    ("NATK", "ROLL"),
    ("SIGN", "STND"),
    ("LIFE", "STND"),
    ("XTRA", "STND"),
];

/// Built-in sound names; slot 0 is the unnamed "no sound".
pub static SOUND_LIST: &[&str] = &[
    "", "altdi1", "altdi2", "altdi3", "altdi4", "altow1", "altow2", "altow3", "altow4", "victr1",
    "victr2", "victr3", "victr4", "gasp", "jump", "pudpud", "putput", "spin", "spndsh", "thok",
    "skid", "cgot", "itemup", "dmpain", "splash", "splish", "wslap", "zoom", "pop", "token",
    "ring", "spring", "bkpoof", "supert", "xtlife", "bnce1", "bnce2", "shield", "wirlsg",
    "forcsg", "elemsg", "armasg", "attrsg", "s3k3a", "lose", "wdjump", "mswarp", "mspogo",
    "menu1", "oneup", "steam1", "steam2", "wbreak", "ambint", "rainin", "litng1", "litng2",
    "litng3", "litng4", "athun1", "athun2",
];

/// Native action functions that `ACTION` lines and scripts may name.
pub static ACTION_LIST: &[&str] = &[
    "A_EXPLODE",
    "A_PAIN",
    "A_FALL",
    "A_MONITORPOP",
    "A_GOLDMONITORPOP",
    "A_GOLDMONITORRESTORE",
    "A_GOLDMONITORSPARKLE",
    "A_LOOK",
    "A_CHASE",
    "A_FACESTABCHASE",
    "A_FACESTABREV",
    "A_FACESTABHURL",
    "A_FACESTABMISS",
    "A_STATUEBURST",
    "A_FACETARGET",
    "A_FACETRACER",
    "A_SCREAM",
    "A_BOSSDEATH",
    "A_CUSTOMPOWER",
    "A_GIVEWEAPON",
    "A_RINGBOX",
    "A_INVINCIBILITY",
    "A_SUPERSNEAKERS",
    "A_AWARDSCORE",
    "A_EXTRALIFE",
    "A_GIVESHIELD",
    "A_GRAVITYBOX",
    "A_SCORERISE",
    "A_ATTRACTCHASE",
    "A_DROPMINE",
    "A_FISHJUMP",
    "A_THROWNRING",
    "A_SETSOLIDSTEAM",
    "A_UNSETSOLIDSTEAM",
    "A_SIGNSPIN",
    "A_SIGNPLAYSOUND",
    "A_OVERLAYTHINK",
    "A_JETCHASE",
    "A_JETBTHINK",
    "A_JETGTHINK",
    "A_JETGSHOOT",
    "A_SHOOTBULLET",
    "A_MINUSDIGGING",
    "A_MINUSPOPUP",
    "A_MINUSCHECK",
    "A_DETONCHASE",
    "A_CAPECHASE",
    "A_ROTATESPIKEBALL",
    "A_SLINGAPPEAR",
    "A_UNIDUSBALL",
    "A_ROCKSPAWN",
    "A_SETFUSE",
    "A_CRAWLACOMMANDERTHINK",
    "A_SMOKETRAILER",
    "A_RINGEXPLODE",
    "A_MIXUP",
    "A_RECYCLEPOWERS",
    "A_BOSS1CHASE",
    "A_FOCUSTARGET",
    "A_BOSS2CHASE",
    "A_BOSS2POGO",
    "A_BOSSZOOM",
    "A_BOSSSCREAM",
    "A_BOSSJETFUME",
    "A_TURRETFIRE",
    "A_SUPERTURRETFIRE",
    "A_TURRETSTOP",
    "A_JETJAWROAM",
    "A_JETJAWCHOMP",
    "A_POINTYTHINK",
    "A_HOODFIRE",
    "A_HOODTHINK",
    "A_SNAILERTHINK",
    "A_SHARPCHASE",
    "A_SHARPSPIN",
    "A_VULTUREVTOL",
    "A_VULTURECHECK",
    "A_SKIMCHASE",
    "A_SKULLATTACK",
    "A_LOBSHOT",
    "A_FIRESHOT",
    "A_SUPERFIRESHOT",
    "A_BOSSFIRESHOT",
    "A_SPAWNOBJECTABSOLUTE",
    "A_SPAWNOBJECTRELATIVE",
    "A_CHANGEANGLERELATIVE",
    "A_CHANGEANGLEABSOLUTE",
    "A_PLAYSEESOUND",
    "A_PLAYATTACKSOUND",
    "A_PLAYACTIVESOUND",
    "A_PLAYSOUND",
    "A_SETTICS",
    "A_SETRANDOMTICS",
    "A_CHANGECOLORRELATIVE",
    "A_CHANGECOLORABSOLUTE",
    "A_MOVERELATIVE",
    "A_MOVEABSOLUTE",
    "A_THRUST",
    "A_ZTHRUST",
    "A_SETTARGETSTARGET",
    "A_SETOBJECTFLAGS",
    "A_SETOBJECTFLAGS2",
    "A_RANDOMSTATE",
    "A_RANDOMSTATERANGE",
    "A_DUALACTION",
    "A_REMOTEACTION",
    "A_TOGGLEFLAMEJET",
    "A_ORBITNIGHTS",
    "A_GHOSTME",
    "A_SETOBJECTSTATE",
    "A_SETOBJECTTYPESTATE",
    "A_KNOCKBACK",
    "A_PUSHAWAY",
    "A_RINGDRAIN",
    "A_SPLITSHOT",
    "A_MISSILESPLIT",
    "A_MULTISHOT",
    "A_INSTALOOP",
    "A_CUSTOM3DROTATE",
    "A_SEARCHFORPLAYERS",
    "A_CHECKRANDOM",
    "A_CHECKTARGETRINGS",
    "A_CHECKRINGS",
    "A_CHECKTOTALRINGS",
    "A_CHECKHEALTH",
    "A_CHECKRANGE",
    "A_CHECKHEIGHT",
    "A_CHECKTRUERANGE",
    "A_CHECKTHINGCOUNT",
    "A_CHECKAMBUSH",
    "A_CHECKCUSTOMVALUE",
    "A_SETCUSTOMVALUE",
    "A_FORCESTOP",
    "A_FORCEWIN",
    "A_SPIKERETRACT",
    "A_INFOSTATE",
    "A_REPEAT",
    "A_SETSCALE",
    "A_REMOTEDAMAGE",
    "A_HOMINGCHASE",
    "A_TRAPSHOT",
    "A_FLICKYSPAWN",
    "A_FLICKYCENTER",
    "A_FLICKYAIM",
    "A_FLICKYFLY",
    "A_FLICKYSOAR",
    "A_FLICKYCOAST",
    "A_FLICKYHOP",
    "A_FLICKYFLOUNDER",
    "A_FLICKYCHECK",
    "A_FLICKYHEIGHTCHECK",
    "A_FLICKYFLUTTER",
    "A_FLAMEPARTICLE",
    "A_FADEOVERLAY",
    "A_MINEEXPLODE",
    "A_MINERANGE",
    "A_CONNECTTOGROUND",
    "A_SPAWNPARTICLERELATIVE",
    "A_MULTISHOTDIST",
    "A_CHECKFLAGS2",
    "A_DONPCSKID",
    "A_DONPCPAIN",
    "A_PREPAREREPEAT",
    "A_LOOKFORBETTER",
    "A_DUSTDEVILTHINK",
    "A_TNTEXPLODE",
    "A_DEBRISRANDOM",
    "A_MODULOTOSTATE",
    "A_CHANGEHEIGHT",
];

/// Music names for slots above the map range, starting at 1036.
pub static SPECIAL_MUSIC_SLOTS: &[&str] = &[
    "_title", "_intro", "_clear", "_inv", "_shoes", "_minv", "_drown", "_gover", "_1up",
    "_conti", "_super", "_chsel", "_creds", "_inter", "_stjr",
];

/// Default skins known to the character and sprite2 parsers.
pub static DEFAULT_SKINS: &[&str] = &["sonic", "tails", "knuckles", "amy", "fang", "metalsonic"];
