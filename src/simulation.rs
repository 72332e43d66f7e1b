use tracing::debug;

use crate::board::BitBoard;

/// Two boards and the generation counter.
///
/// `boards[active]` holds the current generation. Stepping reads it and writes the next
/// generation into the other slot, then flips `active`. Cell data is never copied between
/// the two.
pub struct Simulation {
    boards: [BitBoard; 2],

    /// Index of the current generation in `boards`. Always `0` or `1`.
    active: usize,

    /// Number of completed steps
    generation: u64,
}

impl Simulation {
    /// Create a simulation over two all-dead `width` x `height` boards.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            boards: [BitBoard::new(width, height), BitBoard::new(width, height)],
            active: 0,
            generation: 0,
        }
    }

    /// Start from an already populated board.
    pub fn from_board(board: BitBoard) -> Self {
        let other = BitBoard::new(board.width(), board.height());

        Self {
            boards: [board, other],
            active: 0,
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.board().width()
    }

    pub fn height(&self) -> usize {
        self.board().height()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation
    pub fn board(&self) -> &BitBoard {
        &self.boards[self.active]
    }

    /// The current generation, for seeding before the first step.
    pub fn board_mut(&mut self) -> &mut BitBoard {
        &mut self.boards[self.active]
    }

    /// Advance by one generation.
    pub fn step(&mut self) {
        let [a, b] = &mut self.boards;
        let (current, next) = if self.active == 0 { (&*a, b) } else { (&*b, a) };

        for y in 0..current.height() {
            for x in 0..current.width() {
                let n = live_neighbors(current, x, y);
                let alive = if current.get(x, y) {
                    n == 2 || n == 3
                } else {
                    n == 3
                };

                next.set(x, y, alive);
            }
        }

        self.active ^= 1;
        self.generation += 1;

        debug!(generation = self.generation, "stepped");
    }
}

/// Count the live cells among the (up to) 8 neighbors of `(x, y)`. Neighbors past the edge of
/// the board count as dead and are never read.
///
/// ```notrust
///   nw  n  ne
///    w  .  e
///   sw  s  se
/// ```
fn live_neighbors(board: &BitBoard, x: usize, y: usize) -> u8 {
    let (w, h) = (board.width(), board.height());

    let up = y > 0;
    let down = y + 1 < h;
    let left = x > 0;
    let right = x + 1 < w;

    let at = |ok: bool, x: usize, y: usize| (ok && board.get(x, y)) as u8;

    // `wrapping_sub` only produces garbage when the matching guard is false, in which case
    // the coordinate is never used.
    let (xl, xr) = (x.wrapping_sub(1), x + 1);
    let (yu, yd) = (y.wrapping_sub(1), y + 1);

    at(up, x, yu)
        + at(up && right, xr, yu)
        + at(right, xr, y)
        + at(down && right, xr, yd)
        + at(down, x, yd)
        + at(down && left, xl, yd)
        + at(left, xl, y)
        + at(up && left, xl, yu)
}

#[cfg(test)]
mod test {
    use super::Simulation;
    use super::live_neighbors;
    use crate::board::BitBoard;

    fn board_with(width: usize, height: usize, cells: &[(usize, usize)]) -> BitBoard {
        let mut board = BitBoard::new(width, height);
        for &(x, y) in cells {
            board.set(x, y, true);
        }

        board
    }

    fn live_cells(board: &BitBoard) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for y in 0..board.height() {
            for x in 0..board.width() {
                if board.get(x, y) {
                    cells.push((x, y));
                }
            }
        }

        cells
    }

    #[test]
    fn neighbors_in_the_middle() {
        let board = board_with(3, 3, &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2)]);

        assert_eq!(live_neighbors(&board, 1, 1), 7);
    }

    #[test]
    fn neighbors_at_corners_only_count_in_range_cells() {
        let full = {
            let mut board = BitBoard::new(2, 2);
            for i in 0..4 {
                board.write(i, true);
            }
            board
        };

        assert_eq!(live_neighbors(&full, 0, 0), 3);
        assert_eq!(live_neighbors(&full, 1, 0), 3);
        assert_eq!(live_neighbors(&full, 0, 1), 3);
        assert_eq!(live_neighbors(&full, 1, 1), 3);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        let board = board_with(1, 1, &[(0, 0)]);
        assert_eq!(live_neighbors(&board, 0, 0), 0);

        let mut sim = Simulation::from_board(board);
        sim.step();
        assert_eq!(sim.board().population(), 0);
    }

    #[test]
    fn empty_board_is_a_fixed_point() {
        let mut sim = Simulation::new(7, 5);

        for _ in 0..4 {
            sim.step();
            assert_eq!(sim.board().population(), 0);
        }

        assert_eq!(sim.generation(), 4);
    }

    #[test]
    fn block_is_a_still_life() {
        let cells = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut sim = Simulation::from_board(board_with(4, 4, &cells));

        sim.step();
        assert_eq!(live_cells(sim.board()), cells);

        sim.step();
        assert_eq!(live_cells(sim.board()), cells);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = [(1, 2), (2, 2), (3, 2)];
        let vertical = [(2, 1), (2, 2), (2, 3)];

        let mut sim = Simulation::from_board(board_with(5, 5, &horizontal));

        sim.step();
        assert_eq!(live_cells(sim.board()), vertical);

        sim.step();
        assert_eq!(live_cells(sim.board()), horizontal);
    }

    #[test]
    fn corner_cell_dies_alone_and_corner_block_survives() {
        let mut sim = Simulation::from_board(board_with(3, 3, &[(0, 0)]));
        sim.step();
        assert_eq!(sim.board().population(), 0);

        let block = [(0, 0), (1, 0), (0, 1), (1, 1)];
        let mut sim = Simulation::from_board(board_with(2, 2, &block));
        sim.step();
        assert_eq!(live_cells(sim.board()), block);
    }

    #[test]
    fn blinker_against_the_edge_is_clipped() {
        // Row 0 is the edge, so the vertical phase loses the cell that would sit at y = -1.
        let mut sim = Simulation::from_board(board_with(3, 3, &[(0, 0), (1, 0), (2, 0)]));

        sim.step();
        assert_eq!(live_cells(sim.board()), [(1, 0), (1, 1)]);
    }

    #[test]
    fn stepping_does_not_touch_the_previous_generation() {
        let horizontal = [(1, 2), (2, 2), (3, 2)];
        let mut sim = Simulation::from_board(board_with(5, 5, &horizontal));

        sim.step();

        // the old generation now sits in the inactive slot, untouched by the write pass
        let previous = &sim.boards[sim.active ^ 1];
        assert_eq!(live_cells(previous), horizontal);
    }
}
