//! Object definitions, states and sprite pivot info.

use serde::Serialize;

use crate::symbols::Action;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MobjInfo {
    pub doomednum: i32,
    pub spawnstate: i32,
    pub spawnhealth: i32,
    pub seestate: i32,
    pub seesound: i32,
    pub reactiontime: i32,
    pub attacksound: i32,
    pub painstate: i32,
    pub painchance: i32,
    pub painsound: i32,
    pub meleestate: i32,
    pub missilestate: i32,
    pub deathstate: i32,
    pub xdeathstate: i32,
    pub deathsound: i32,
    pub speed: i32,
    pub radius: i32,
    pub height: i32,
    pub dispoffset: i32,
    pub mass: i32,
    pub damage: i32,
    pub activesound: i32,
    pub flags: i32,
    pub raisestate: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct State {
    pub sprite: i32,
    pub frame: i32,
    pub tics: i32,
    pub action: Action,
    pub var1: i32,
    pub var2: i32,
    pub nextstate: i32,
}

/// Frames a sprite can carry pivot info for.
pub const SPRITE_FRAMES: usize = 64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pivot {
    pub x: i32,
    pub y: i32,
    pub rotaxis: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpriteInfo {
    pub available: bool,
    pub pivots: Vec<Pivot>,
}

impl Default for SpriteInfo {
    fn default() -> Self {
        Self {
            available: false,
            pivots: vec![Pivot::default(); SPRITE_FRAMES],
        }
    }
}

impl SpriteInfo {
    /// A blank info block as a `SPRITEINFO` section starts it.
    pub fn fresh() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }
}
