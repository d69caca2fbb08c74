use super::tile::DisplayWidth;
use crate::geometry::Point;
use std::{
    convert::TryFrom,
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

/// A Map keeps track of a tile grid.
///
/// Its coordinate system puts the origin in the top left, matching the order in
/// which rows are read: `y` is the row index and grows toward [`Direction::South`](crate::geometry::Direction::South).
///
/// The dimensions of a map are fixed at construction; only tile contents change.
///
/// ## Entry Points
///
/// - [`Map::from`] builds a map from rows of tiles.
/// - When a map arrives as bare rows of text, use [`Map::try_from`].
/// - Maze grid files carry a dimensions header; they go through
///   [`parse_grid`](crate::input::parse_grid), which builds on [`Map::parse_row`].
///
/// ## Panics
///
/// Several internal methods assume that the width and height of the map can be
/// represented in an `i32`. Very large maps may panic if that assumption is violated.
#[derive(Clone, Default)]
pub struct Map<Tile> {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
}

impl<Tile> Map<Tile> {
    /// Width of this map.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of this map.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of tiles in this map.
    #[inline]
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    /// Highest x coordinate which is in bounds of this map.
    ///
    /// Note that this is inclusive; use `..=` when using this to bound a range.
    #[inline]
    pub fn high_x(&self) -> i32 {
        self.width as i32 - 1
    }

    /// Highest y coordinate which is in bounds of this map.
    ///
    /// Note that this is inclusive; use `..=` when using this to bound a range.
    #[inline]
    pub fn high_y(&self) -> i32 {
        self.height as i32 - 1
    }

    /// Iterate over the points and tiles of this map, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Tile)> {
        let index2point = self.make_index2point();
        self.tiles
            .iter()
            .enumerate()
            .map(move |(idx, tile)| (index2point(idx), tile))
    }

    /// `true` when a point is legal within the bounds of this map.
    #[inline]
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && point.x <= self.high_x() && point.y <= self.high_y()
    }

    /// Borrow the tile at `point`, or `None` when it lies outside the map.
    pub fn get(&self, point: Point) -> Option<&Tile> {
        let idx = self.index_of(point)?;
        Some(&self.tiles[idx])
    }

    /// Mutably borrow the tile at `point`, or `None` when it lies outside the map.
    pub fn get_mut(&mut self, point: Point) -> Option<&mut Tile> {
        let idx = self.index_of(point)?;
        Some(&mut self.tiles[idx])
    }

    /// Dense row-major index of an in-bounds point.
    pub fn index_of(&self, point: Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| self.point2index(point.x as usize, point.y as usize))
    }

    /// Find the first point, in row-major order, whose tile satisfies `predicate`.
    ///
    /// If `excluding` is set, that point is never returned.
    pub fn find_first(
        &self,
        predicate: impl Fn(&Tile) -> bool,
        excluding: Option<Point>,
    ) -> Option<Point> {
        self.iter()
            .find(|(point, tile)| Some(*point) != excluding && predicate(tile))
            .map(|(point, _)| point)
    }

    /// convert a 2d point into a 1d index into the tiles
    fn point2index(&self, x: usize, y: usize) -> usize {
        x + (y * self.width)
    }

    /// make a function which converts a 1d index in the tiles into a 2d point without borrowing self
    fn make_index2point(&self) -> impl Fn(usize) -> Point {
        let width = self.width;
        move |idx| (idx % width, idx / width).into()
    }
}

impl<Tile> fmt::Debug for Map<Tile> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(&format!("Map<{}>", std::any::type_name::<Tile>()))
            .field("width", &self.width)
            .field("height", &self.height)
            .field("tiles", &format_args!("[...; {}]", self.tiles.len()))
            .finish()
    }
}

impl<Tile: PartialEq> PartialEq for Map<Tile> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.tiles == other.tiles
    }
}

impl<Tile: Eq> Eq for Map<Tile> {}

impl<Tile, Row> From<&[Row]> for Map<Tile>
where
    Tile: Clone,
    Row: AsRef<[Tile]>,
{
    /// Convert an input 2d array into a map.
    ///
    /// The input array must be arranged with the y axis as the outer array:
    /// `source[0][0]` is the top left corner of the map.
    ///
    /// Panics if the input array is not rectangular.
    fn from(source: &[Row]) -> Map<Tile> {
        let height = source.len();
        if height == 0 {
            return Map {
                tiles: Vec::new(),
                width: 0,
                height: 0,
            };
        }

        let width = source[0].as_ref().len();
        assert!(
            source.iter().all(|row| row.as_ref().len() == width),
            "input must be rectangular"
        );

        let mut tiles = Vec::with_capacity(width * height);
        for row in source.iter() {
            tiles.extend(row.as_ref().iter().cloned());
        }

        Map {
            tiles,
            width,
            height,
        }
    }
}

impl<Tile> Map<Tile>
where
    Tile: DisplayWidth + FromStr,
    <Tile as FromStr>::Err: 'static + std::error::Error + Send + Sync,
{
    /// Parse a single row of text into tiles.
    pub fn parse_row(line: &str) -> Result<Vec<Tile>, MapConversionErr> {
        Tile::chunks(line)
            .map(|chunk| {
                Tile::from_str(&chunk).map_err(|err| {
                    MapConversionErr::TileConversion(Box::new(err), chunk.to_string())
                })
            })
            .collect()
    }
}

impl<Tile> Map<Tile>
where
    Tile: Clone + DisplayWidth + FromStr,
    <Tile as FromStr>::Err: 'static + std::error::Error + Send + Sync,
{
    /// Try to convert the contents of a reader into a map.
    ///
    /// Every non-empty line is a row; the first line is the top of the map.
    /// Empty lines are skipped, so a row whose tiles all render as whitespace must keep
    /// its trailing characters. Grid files use [`parse_grid`](crate::input::parse_grid),
    /// which keeps such rows.
    ///
    /// We don't actually `impl<T, R> TryFrom<R> for Map<T>` because there's a
    /// coherence conflict with the stdlib blanket impl
    ///
    /// ```rust,ignore
    /// impl<T, U> std::convert::TryFrom<U> for T where U: std::convert::Into<T>;
    /// ```
    pub fn try_from<R>(input: R) -> Result<Self, MapConversionErr>
    where
        R: std::io::BufRead,
    {
        let mut arr = Vec::new();

        for line in input.lines() {
            let line = line?;
            let row = Self::parse_row(line.trim_end_matches('\r'))?;
            if !row.is_empty() {
                arr.push(row);
            }
        }

        if !arr.is_empty() {
            let width = arr[0].len();
            if !arr.iter().all(|row| row.len() == width) {
                return Err(MapConversionErr::NotRectangular);
            }
        }

        Ok(Map::from(arr.as_slice()))
    }
}

impl<Tile> TryFrom<&str> for Map<Tile>
where
    Tile: Clone + DisplayWidth + FromStr,
    <Tile as FromStr>::Err: 'static + std::error::Error + Send + Sync,
{
    type Error = MapConversionErr;

    /// the input should be in natural graphical order:
    /// its first characters are the top left.
    fn try_from(input: &str) -> Result<Self, Self::Error> {
        <Self>::try_from(input.as_bytes())
    }
}

impl<Tile> Index<Point> for Map<Tile> {
    type Output = Tile;

    /// Panics if `point` is out of bounds.
    fn index(&self, point: Point) -> &Tile {
        assert!(self.in_bounds(point), "point {} out of bounds", point);
        self.tiles
            .index(self.point2index(point.x as usize, point.y as usize))
    }
}

impl<Tile> IndexMut<Point> for Map<Tile> {
    /// Panics if `point` is out of bounds.
    fn index_mut(&mut self, point: Point) -> &mut Tile {
        assert!(self.in_bounds(point), "point {} out of bounds", point);
        let idx = self.point2index(point.x as usize, point.y as usize);
        self.tiles.index_mut(idx)
    }
}

impl<Tile> fmt::Display for Map<Tile>
where
    Tile: fmt::Display + DisplayWidth,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..=self.high_y() {
            for x in 0..=self.high_x() {
                write!(
                    f,
                    "{:width$}",
                    self.index(Point::new(x, y)),
                    width = Tile::DISPLAY_WIDTH
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MapConversionErr {
    #[error("converting tile from {1:?}")]
    TileConversion(
        #[source] Box<dyn 'static + std::error::Error + Send + Sync>,
        String,
    ),
    #[error("map must be rectangular")]
    NotRectangular,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(
        Clone, Copy, Debug, Default, PartialEq, Eq, parse_display::Display, parse_display::FromStr,
    )]
    enum Bit {
        #[display("#")]
        Set,
        #[display(".")]
        #[default]
        Clear,
    }

    impl DisplayWidth for Bit {
        const DISPLAY_WIDTH: usize = 1;
    }

    #[test]
    fn test_point_index_conversion() {
        const EDGE: usize = 64;
        const AREA: usize = EDGE * EDGE;

        let map: Map<()> = Map::from(vec![vec![(); EDGE]; EDGE].as_slice());
        let index2point = map.make_index2point();
        let mut emitted_points = HashSet::new();
        for idx in 0..AREA {
            let point = index2point(idx);
            assert!(
                emitted_points.insert(point),
                "no duplicate point should ever be emitted"
            );
            assert_eq!(Some(idx), map.index_of(point));
        }
    }

    #[test]
    fn test_bounds() {
        let map: Map<()> = Map::from(vec![vec![(); 3]; 2].as_slice());
        assert!(map.in_bounds(Point::new(0, 0)));
        assert!(map.in_bounds(Point::new(2, 1)));
        assert!(!map.in_bounds(Point::new(3, 1)));
        assert!(!map.in_bounds(Point::new(0, 2)));
        assert!(!map.in_bounds(Point::new(-1, 0)));
        assert!(map.get(Point::new(0, -1)).is_none());
    }

    #[test]
    fn test_parse_is_top_down() {
        let map = <Map<Bit> as TryFrom<&str>>::try_from("#..\n..#\n").unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert_eq!(map[Point::new(0, 0)], Bit::Set);
        assert_eq!(map[Point::new(2, 1)], Bit::Set);
        assert_eq!(map.to_string(), "#..\n..#\n");
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let map = <Map<Bit> as TryFrom<&str>>::try_from("\n#.\n\n.#\n").unwrap();
        assert_eq!(map.height(), 2);
        assert_eq!(map[Point::new(1, 1)], Bit::Set);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = <Map<Bit> as TryFrom<&str>>::try_from("#..\n.#\n").unwrap_err();
        assert!(matches!(err, MapConversionErr::NotRectangular));
    }

    #[test]
    fn test_parse_rejects_unknown_tile() {
        let err = <Map<Bit> as TryFrom<&str>>::try_from("#?.\n").unwrap_err();
        assert!(matches!(err, MapConversionErr::TileConversion(_, ref chunk) if chunk == "?"));
    }

    #[test]
    fn test_find_first_is_row_major_and_honors_exclusion() {
        let map = <Map<Bit> as TryFrom<&str>>::try_from("..#\n#.#\n").unwrap();
        let first = map.find_first(|bit| *bit == Bit::Set, None);
        assert_eq!(first, Some(Point::new(2, 0)));
        let second = map.find_first(|bit| *bit == Bit::Set, first);
        assert_eq!(second, Some(Point::new(0, 1)));
        assert_eq!(map.find_first(|_| false, None), None);
    }
}
