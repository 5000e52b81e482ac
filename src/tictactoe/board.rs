use std::fmt;
use thiserror::Error;

pub const ROW_LEN: usize = 3;

#[derive(Debug, PartialEq)]
pub enum Coordinate {
    Row,
    Col,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Row => write!(f, "row"),
            Coordinate::Col => write!(f, "column"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum MoveError {
    #[error("{coordinate} {value} is outside the board (0 to {})", ROW_LEN - 1)]
    OutOfBounds { coordinate: Coordinate, value: usize },
    #[error("Cell {0} is already occupied")]
    Occupied(BoardPosition),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mark {
    Player,
    Opponent,
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Opponent => 'O',
        }
    }

    pub fn other(&self) -> Mark {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_mark(&self, mark: Mark) -> bool {
        matches!(self, Cell::Marked(m) if *m == mark)
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(mark) => mark.symbol(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardPosition(usize, usize);

impl BoardPosition {
    // Both indices must lie in 0..ROW_LEN
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= ROW_LEN {
            return Err(MoveError::OutOfBounds {
                coordinate: Coordinate::Row,
                value: row,
            });
        }
        if col >= ROW_LEN {
            return Err(MoveError::OutOfBounds {
                coordinate: Coordinate::Col,
                value: col,
            });
        }
        Ok(BoardPosition(row, col))
    }

    // Callers guarantee idx < ROW_LEN * ROW_LEN
    pub(crate) fn from_index(idx: usize) -> Self {
        BoardPosition(idx / ROW_LEN, idx % ROW_LEN)
    }

    pub fn row(&self) -> usize {
        self.0
    }

    pub fn col(&self) -> usize {
        self.1
    }
}

impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

pub type Grid = [[Cell; ROW_LEN]; ROW_LEN];

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Board(Grid);

impl Board {
    #[cfg(test)]
    pub fn new(cells: Grid) -> Self {
        Board(cells)
    }

    pub fn get(&self) -> &Grid {
        &self.0
    }

    pub fn cell(&self, pos: BoardPosition) -> Cell {
        self.0[pos.row()][pos.col()]
    }

    pub fn reset(&mut self) {
        self.0 = [[Cell::Empty; ROW_LEN]; ROW_LEN];
    }

    // Rejected placements leave the board untouched
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<BoardPosition, MoveError> {
        let pos = BoardPosition::new(row, col)?;
        if !self.cell(pos).is_empty() {
            return Err(MoveError::Occupied(pos));
        }
        self.0[pos.row()][pos.col()] = Cell::Marked(mark);
        Ok(pos)
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().flatten().all(|c| !c.is_empty())
    }

    pub fn mark_count(&self) -> usize {
        self.0.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    pub fn empty_positions(&self) -> Vec<BoardPosition> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(row, r)| {
                r.iter()
                    .enumerate()
                    .filter(|(_, c)| c.is_empty())
                    .map(move |(col, _)| BoardPosition(row, col))
            })
            .collect()
    }
}

// Draws a ROW_LEN x ROW_LEN grid of single-character labels between separator lines
pub(crate) fn write_grid<L: Fn(usize, usize) -> String>(
    f: &mut fmt::Formatter<'_>,
    label: L,
) -> fmt::Result {
    // "| a | b | c |" is 4 chars per cell plus the closing bar
    let separator = "-".repeat(ROW_LEN * 4 - 1);
    writeln!(f, " {}", separator)?;
    for row in 0..ROW_LEN {
        let cells: Vec<String> = (0..ROW_LEN).map(|col| label(row, col)).collect();
        writeln!(f, "| {} |", cells.join(" | "))?;
        writeln!(f, " {}", separator)?;
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, |row, col| self.0[row][col].symbol().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Marked(Mark::Player);
    const O: Cell = Cell::Marked(Mark::Opponent);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_construct_board_position() {
        assert!(BoardPosition::new(0, 0).is_ok());
        assert!(BoardPosition::new(2, 2).is_ok());
        assert_eq!(
            BoardPosition::new(3, 0),
            Err(MoveError::OutOfBounds {
                coordinate: Coordinate::Row,
                value: 3
            })
        );
        assert_eq!(
            BoardPosition::new(1, 5),
            Err(MoveError::OutOfBounds {
                coordinate: Coordinate::Col,
                value: 5
            })
        );
    }

    #[test]
    fn test_place() {
        let mut board = Board::default();
        let pos = board.place(1, 2, Mark::Player).unwrap();
        assert_eq!(pos, BoardPosition::new(1, 2).unwrap());
        assert_eq!(board.cell(pos), X);
        assert_eq!(board.mark_count(), 1);
    }

    #[test]
    fn test_place_occupied_leaves_board_unchanged() {
        let mut board = Board::new([[X, O, E], [E, E, E], [E, E, E]]);
        let before = board.clone();

        let result = board.place(0, 1, Mark::Player);
        assert_eq!(
            result,
            Err(MoveError::Occupied(BoardPosition::new(0, 1).unwrap()))
        );
        assert_eq!(board, before);

        let result = board.place(3, 1, Mark::Opponent);
        assert!(matches!(result, Err(MoveError::OutOfBounds { .. })));
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new([[X, O, X], [O, X, O], [O, X, O]]);
        assert!(board.is_full());
        board.reset();
        assert_eq!(board, Board::default());
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_is_full() {
        assert!(!Board::default().is_full());
        assert!(!Board::new([[X, O, X], [O, E, O], [O, X, O]]).is_full());
        assert!(Board::new([[X, O, X], [O, X, O], [O, X, O]]).is_full());
    }

    #[test]
    fn test_empty_positions() {
        let board = Board::new([[X, E, X], [O, X, O], [E, X, O]]);
        let empty = board.empty_positions();
        assert_eq!(
            empty,
            vec![
                BoardPosition::new(0, 1).unwrap(),
                BoardPosition::new(2, 0).unwrap()
            ]
        );
        assert!(empty.iter().all(|p| board.cell(*p).is_empty()));
    }

    #[test]
    fn test_display() {
        let board = Board::new([[X, E, E], [E, O, E], [E, E, E]]);
        let expected = concat!(
            " -----------\n",
            "| X |   |   |\n",
            " -----------\n",
            "|   | O |   |\n",
            " -----------\n",
            "|   |   |   |\n",
            " -----------\n",
        );
        assert_eq!(board.to_string(), expected);
    }
}
