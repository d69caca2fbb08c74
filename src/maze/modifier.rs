use super::{Cell, Grid, Traveler};
use crate::geometry::Point;
use tracing::debug;

/// A side effect applied by the cell a traveler just landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    ToggledBreaker,
    ToggledInverter,
    Teleported { from: Point, to: Point },
}

/// Apply the side effect of the cell under the traveler, if it has one.
///
/// Abilities are toggled, never set. A teleporter moves the traveler to its partner
/// without touching the heading; with no partner on the grid, nothing happens.
pub fn resolve(grid: &Grid, traveler: &mut Traveler) -> Option<Modifier> {
    match grid.kind_at(traveler.position) {
        Cell::Breaker => {
            traveler.breaker = !traveler.breaker;
            Some(Modifier::ToggledBreaker)
        }
        Cell::Inverter => {
            traveler.inverter = !traveler.inverter;
            Some(Modifier::ToggledInverter)
        }
        Cell::Teleporter => {
            let from = traveler.position;
            let to = grid.teleport_partner(from)?;
            traveler.position = to;
            debug!(%from, %to, "teleported");
            Some(Modifier::Teleported { from, to })
        }
        _ => None,
    }
}
