/// Tile vocabulary for the layered terrain map.
///
/// `index` values reference the terrain spritesheet; index 0 is reserved
/// as the empty-cell sentinel and never maps to a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Water,
    Grass,
    Rock,
    Hill,
    Snow,
    /// Placed where rocky terrain meets bare grass.
    GrassRockEdge,
    /// Placed where hills meet bare rocky terrain.
    RockHillEdge,
    /// Placed where snow peaks meet bare hills.
    HillSnowEdge,
}

impl TileKind {
    /// Returns all tile kinds.
    pub fn all() -> &'static [TileKind] {
        &[
            Self::Water,
            Self::Grass,
            Self::Rock,
            Self::Hill,
            Self::Snow,
            Self::GrassRockEdge,
            Self::RockHillEdge,
            Self::HillSnowEdge,
        ]
    }

    /// Spritesheet index for this tile kind.
    pub const fn index(self) -> u32 {
        match self {
            Self::Water => 56,
            Self::Grass => 40,
            Self::Rock => 165,
            Self::Hill => 50,
            Self::Snow => 51,
            Self::GrassRockEdge => 41,
            Self::RockHillEdge => 166,
            Self::HillSnowEdge => 52,
        }
    }

    /// Recover the tile kind from a spritesheet index.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.index() == index)
    }

    /// Returns the RGB color for this tile kind.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Water => [66, 135, 245],        // Sea blue
            Self::Grass => [106, 190, 48],        // Meadow green
            Self::Rock => [155, 139, 122],        // Weathered stone
            Self::Hill => [117, 100, 84],         // Upland brown
            Self::Snow => [236, 240, 241],        // Snow white
            Self::GrassRockEdge => [130, 164, 85],
            Self::RockHillEdge => [136, 120, 103],
            Self::HillSnowEdge => [176, 170, 158],
        }
    }

    /// Returns the RGBA color for this tile kind.
    pub fn color(self) -> [u8; 4] {
        let [r, g, b] = self.rgb();
        [r, g, b, 255]
    }

    /// One-character glyph for text previews.
    pub fn glyph(self) -> char {
        match self {
            Self::Water => '~',
            Self::Grass => '.',
            Self::Rock => ':',
            Self::Hill => 'n',
            Self::Snow => '*',
            Self::GrassRockEdge => ',',
            Self::RockHillEdge => ';',
            Self::HillSnowEdge => '+',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::EMPTY_TILE;

    #[test]
    fn indices_are_unique() {
        let indices: Vec<_> = TileKind::all().iter().map(|kind| kind.index()).collect();
        let unique: std::collections::HashSet<_> = indices.iter().collect();
        assert_eq!(indices.len(), unique.len());
    }

    #[test]
    fn no_kind_uses_the_empty_sentinel() {
        assert!(TileKind::all().iter().all(|kind| kind.index() != EMPTY_TILE));
        assert_eq!(TileKind::from_index(EMPTY_TILE), None);
    }

    #[test]
    fn from_index_round_trips() {
        for &kind in TileKind::all() {
            assert_eq!(TileKind::from_index(kind.index()), Some(kind));
        }
    }
}
