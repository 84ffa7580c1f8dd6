use crate::state::Location;

/// Map geometry consulted by targeting sessions.
pub trait MapBounds {
    fn contains(&self, location: Location) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl MapBounds for MapDimensions {
    fn contains(&self, location: Location) -> bool {
        location.x >= 0
            && location.y >= 0
            && (location.x as i64) < self.width as i64
            && (location.y as i64) < self.height as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let map = MapDimensions::new(4, 3);
        assert!(map.contains(Location::new(0, 0)));
        assert!(map.contains(Location::new(3, 2)));
        assert!(!map.contains(Location::new(4, 2)));
        assert!(!map.contains(Location::new(3, 3)));
        assert!(!map.contains(Location::new(-1, 0)));
    }
}
