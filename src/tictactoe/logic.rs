use crate::tictactoe::board::{Board, Mark};

// Each line is three (row, col) pairs: 3 rows, 3 columns, 2 diagonals
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    OpponentWin,
    Draw,
}

impl Outcome {
    // Leaderboard delta for the human player
    pub fn score(&self) -> i64 {
        match self {
            Outcome::PlayerWin => 1,
            Outcome::OpponentWin => -1,
            Outcome::Draw => 0,
        }
    }

    fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::Player => Outcome::PlayerWin,
            Mark::Opponent => Outcome::OpponentWin,
        }
    }
}

pub fn has_won(board: &Board, mark: Mark) -> bool {
    let grid = board.get();
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| grid[row][col].is_mark(mark)))
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_won(board, Mark::Player) && !has_won(board, Mark::Opponent)
}

// Checks the mark that just moved first, so a board can only ever report
// the win that ended the game
pub fn outcome_after(board: &Board, last_mover: Mark) -> Option<Outcome> {
    if has_won(board, last_mover) {
        Some(Outcome::win_for(last_mover))
    } else if has_won(board, last_mover.other()) {
        Some(Outcome::win_for(last_mover.other()))
    } else if is_draw(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::Cell;

    const X: Cell = Cell::Marked(Mark::Player);
    const O: Cell = Cell::Marked(Mark::Opponent);
    const E: Cell = Cell::Empty;

    fn mark_cell(mark: Mark) -> Cell {
        Cell::Marked(mark)
    }

    #[test]
    fn test_every_line_wins_for_its_mark_only() {
        for mark in [Mark::Player, Mark::Opponent] {
            for line in LINES {
                let mut board = Board::default();
                for (row, col) in line {
                    board.place(row, col, mark).unwrap();
                }
                assert!(has_won(&board, mark), "line {:?} for {:?}", line, mark);
                assert!(!has_won(&board, mark.other()));
                assert_eq!(board.get()[line[0].0][line[0].1], mark_cell(mark));
            }
        }
    }

    #[test]
    fn test_top_row_player_win() {
        let board = Board::new([[X, X, X], [O, O, E], [E, E, E]]);
        assert!(has_won(&board, Mark::Player));
        assert!(!has_won(&board, Mark::Opponent));
        assert!(!is_draw(&board));
        assert_eq!(outcome_after(&board, Mark::Player), Some(Outcome::PlayerWin));
    }

    #[test]
    fn test_no_win_on_partial_lines() {
        let board = Board::new([[X, X, E], [O, O, E], [E, E, E]]);
        assert!(!has_won(&board, Mark::Player));
        assert!(!has_won(&board, Mark::Opponent));
        assert_eq!(outcome_after(&board, Mark::Player), None);
        assert!(!has_won(&Board::default(), Mark::Player));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::new([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(board.is_full());
        assert!(!has_won(&board, Mark::Player));
        assert!(!has_won(&board, Mark::Opponent));
        assert!(is_draw(&board));
        assert_eq!(outcome_after(&board, Mark::Player), Some(Outcome::Draw));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = Board::new([[X, O, X], [O, X, O], [O, X, X]]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
        assert_eq!(outcome_after(&board, Mark::Player), Some(Outcome::PlayerWin));
    }

    #[test]
    fn test_not_full_is_not_draw() {
        let board = Board::new([[X, O, X], [X, O, O], [O, X, E]]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_outcome_after_prefers_last_mover() {
        let board = Board::new([[O, O, O], [X, X, E], [X, E, E]]);
        assert_eq!(
            outcome_after(&board, Mark::Opponent),
            Some(Outcome::OpponentWin)
        );
    }

    #[test]
    fn test_score() {
        assert_eq!(Outcome::PlayerWin.score(), 1);
        assert_eq!(Outcome::OpponentWin.score(), -1);
        assert_eq!(Outcome::Draw.score(), 0);
    }
}
