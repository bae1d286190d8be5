use core::fmt::{self, Write};
use core::str::FromStr;

use crate::*;

impl FromStr for Grid {
    type Err = BoardError;

    /// Parses the dot form: a `<width> <height>` header line followed by
    /// `height` lines of exactly `width` cell characters.
    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines();

        let header = lines.next().ok_or(BoardError::InvalidDimensions)?;
        let mut dimensions = header.split_whitespace();
        let width = parse_dimension(dimensions.next())?;
        let height = parse_dimension(dimensions.next())?;
        if dimensions.next().is_some() {
            return Err(BoardError::InvalidDimensions);
        }

        let mut grid = Grid::new((height, width));
        for row in 0..height {
            let line = lines.next().ok_or(BoardError::MalformedInput)?;
            let line = line.strip_suffix('\r').unwrap_or(line);

            let mut cols = 0;
            for (col, ch) in line.chars().enumerate() {
                if col >= width as usize {
                    return Err(BoardError::MalformedInput);
                }
                let cell = Cell::from_char(ch).ok_or(BoardError::MalformedInput)?;
                grid[(row, col as Coord)] = cell;
                cols = col + 1;
            }
            if cols != width as usize {
                return Err(BoardError::MalformedInput);
            }
        }

        if lines.any(|rest| !rest.trim().is_empty()) {
            return Err(BoardError::MalformedInput);
        }

        Ok(grid)
    }
}

fn parse_dimension(token: Option<&str>) -> Result<Coord> {
    token
        .ok_or(BoardError::InvalidDimensions)?
        .parse()
        .map_err(|_| BoardError::InvalidDimensions)
}

impl fmt::Display for Grid {
    /// Writes the dot form. The alternate flag (`{:#}`) drops the dimension
    /// header and separates cells with spaces, for display rather than
    /// re-parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.size();

        if !f.alternate() {
            writeln!(f, "{} {}", cols, rows)?;
        }

        for row in 0..rows {
            for col in 0..cols {
                if f.alternate() && col > 0 {
                    f.write_char(' ')?;
                }
                f.write_char(self[(row, col)].as_char())?;
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn parses_the_dot_form() {
        let grid: Grid = "3 3\n*..\n...\n..*\n".parse().unwrap();

        assert_eq!(grid.size(), (3, 3));
        assert_eq!(grid.mine_count(), 2);
        assert!(grid.contains_mine((0, 0)));
        assert!(grid.contains_mine((2, 2)));
        assert_eq!(grid[(1, 1)], Cell::Empty);
    }

    #[test]
    fn header_is_width_then_height() {
        let grid: Grid = "4 2\n....\n...*\n".parse().unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        assert!(grid.contains_mine((1, 3)));
    }

    #[test]
    fn serializing_and_parsing_round_trips() {
        let input = "4 3\n*...\n..*.\n....\n";

        let grid: Grid = input.parse().unwrap();

        assert_eq!(grid.to_string(), input);
        assert_eq!(grid.to_string().parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn annotated_boards_round_trip_too() {
        let mut grid: Grid = "3 3\n*..\n...\n..*\n".parse().unwrap();
        annotate(&mut grid);

        assert_eq!(grid.to_string(), "3 3\n*10\n121\n01*\n");
        assert_eq!(grid.to_string().parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn alternate_form_is_spaced_and_headerless() {
        let mut grid: Grid = "3 3\n*..\n...\n..*\n".parse().unwrap();
        annotate(&mut grid);

        assert_eq!(format!("{grid:#}"), "* 1 0\n1 2 1\n0 1 *\n");
    }

    #[test]
    fn row_shorter_than_declared_width_is_malformed() {
        assert_eq!(
            "4 2\n*..\n....\n".parse::<Grid>(),
            Err(BoardError::MalformedInput)
        );
    }

    #[test]
    fn row_longer_than_declared_width_is_malformed() {
        assert_eq!(
            "2 2\n*..\n..\n".parse::<Grid>(),
            Err(BoardError::MalformedInput)
        );
    }

    #[test]
    fn missing_rows_are_malformed() {
        assert_eq!(
            "3 3\n*..\n...\n".parse::<Grid>(),
            Err(BoardError::MalformedInput)
        );
    }

    #[test]
    fn trailing_garbage_is_malformed() {
        assert_eq!(
            "1 1\n*\n..\n".parse::<Grid>(),
            Err(BoardError::MalformedInput)
        );
    }

    #[test]
    fn unknown_cell_character_is_malformed() {
        assert_eq!(
            "2 1\n*x\n".parse::<Grid>(),
            Err(BoardError::MalformedInput)
        );
    }

    #[test]
    fn bad_headers_are_invalid_dimensions() {
        for input in ["", "3", "a 3", "3 b", "-3 4", "3 3 3"] {
            assert_eq!(
                input.parse::<Grid>(),
                Err(BoardError::InvalidDimensions),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn crlf_input_parses() {
        let grid: Grid = "2 1\r\n*.\r\n".parse().unwrap();

        assert_eq!(grid.size(), (1, 2));
        assert!(grid.contains_mine((0, 0)));
    }

    #[test]
    fn zero_sized_board_round_trips() {
        let grid: Grid = "0 0\n".parse().unwrap();

        assert_eq!(grid.total_cells(), 0);
        assert_eq!(grid.to_string(), "0 0\n");
    }

    #[test]
    fn grid_survives_a_json_round_trip() {
        let grid: Grid = "3 2\n*.*\n.0.\n".parse().unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();

        assert_eq!(back, grid);
    }
}
