pub mod lumps;
pub mod mapnum;
pub mod reader;
pub mod tokens;
pub mod wad;

pub use lumps::{LumpDirectory, LumpProvider, MemoryLumps, WadCollection};
pub use mapnum::{map_name, map_number, map_number_str};
pub use reader::{MAXLINELEN, PatchSource};
pub use tokens::{
    FieldValue, atof, atoi, split_equals, split_whitespace, strip_comment, strip_newline,
    text_after_equals, truncate_to,
};
pub use wad::{WadArchive, WadEntry, WadKind, build_pwad};
