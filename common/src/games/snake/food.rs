use crate::games::SessionRng;
use super::grid::Grid;
use super::types::Point;

/// Rejection-samples a tile not covered by `chain`. Never returns on a full board.
pub fn place_food<'a, I>(chain: I, grid: &Grid, rng: &mut SessionRng) -> Point
where
    I: IntoIterator<Item = &'a Point> + Clone,
{
    let tiles = grid.tiles() as i32;
    loop {
        let candidate = Point::new(rng.below(tiles), rng.below(tiles));
        if !chain.clone().into_iter().any(|segment| *segment == candidate) {
            return candidate;
        }
    }
}
