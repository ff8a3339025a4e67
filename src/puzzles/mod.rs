pub mod map_colouring;
pub mod n_queens;
pub mod sudoku;
