//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Asset-free palette, kept as hex codes so values can be pasted straight
/// from a picker.
pub mod palette {
    use bevy::prelude::*;

    use crate::mathx::color::hex;

    pub const BACKDROP: &str = "0D0D12";
    pub const WALL: &str = "40444F";
    pub const FLOOR_A: &str = "232328";
    pub const FLOOR_B: &str = "1E1E23";

    pub fn parse(code: &str) -> Color {
        hex(code).expect("palette entries are valid hex")
    }
}

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(ClearColor(palette::parse(palette::BACKDROP)));
}
