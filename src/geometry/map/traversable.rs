/// Can the traveler move into this map tile?
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Traversable {
    /// Obstructed tiles cannot be moved into.
    Obstructed,
    /// Free tiles can be moved through.
    Free,
    /// Halt tiles end the traversal; the traveler turns toward them but never occupies them.
    Halt,
}
