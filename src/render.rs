use crate::board::BitBoard;
use crate::simulation::Simulation;

/// The empty braille character, U+2800. A glyph is this plus the weight of each raised dot:
///
/// ```notrust
///   0x01  0x08
///   0x02  0x10
///   0x04  0x20
///   0x40  0x80
/// ```
const BRAILLE_EMPTY: u32 = 0x2800;

const LIVE_BLOCK: &str = "██";
const DEAD_BLOCK: &str = "  ";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RenderStyle {
    /// Two terminal columns per cell
    #[default]
    Blocks,

    /// One braille character per 2x4 cells
    Braille,
}

/// Turns a board into lines of text. Every line, including the last, ends in `\n`.
pub struct Canvas {
    style: RenderStyle,

    /// The frame buffer.
    fb: String,

    /// Codepoints, only used by the braille style.
    cp: Vec<u32>,
}

impl Canvas {
    pub fn new(style: RenderStyle) -> Self {
        Self {
            style,
            fb: String::new(),
            cp: Vec::new(),
        }
    }

    /// Draw `board` into the frame buffer and return it.
    pub fn render(&mut self, board: &BitBoard) -> &str {
        self.fb.clear();

        match self.style {
            RenderStyle::Blocks => self.render_blocks(board),
            RenderStyle::Braille => self.render_braille(board),
        }

        &self.fb
    }

    fn render_blocks(&mut self, board: &BitBoard) {
        // `█` is 3 bytes, so a live cell is 6 bytes wide.
        self.fb.reserve(board.height() * (6 * board.width() + 1));

        for y in 0..board.height() {
            for x in 0..board.width() {
                let block = if board.get(x, y) { LIVE_BLOCK } else { DEAD_BLOCK };
                self.fb.push_str(block);
            }
            self.fb.push('\n');
        }
    }

    fn render_braille(&mut self, board: &BitBoard) {
        // Let `w` and `h` refer to width and height of the board. Then `bw = ceil(w / 2)` and
        // `bh = ceil(h / 4)` are the width and height of the frame in braille characters.
        let (bw, bh) = (board.width().div_ceil(2), board.height().div_ceil(4));

        self.cp.clear();
        self.cp.resize(bw * bh, BRAILLE_EMPTY);

        for y in 0..board.height() {
            for x in 0..board.width() {
                if board.get(x, y) {
                    self.cp[(y / 4) * bw + (x / 2)] += dot(x, y);
                }
            }
        }

        // Each braille character is 3 bytes, plus one newline per row.
        self.fb.reserve(3 * (bw * bh) + bh);

        for row in self.cp.chunks(bw) {
            // Every codepoint is in U+2800..=U+28FF, which are all valid chars.
            self.fb.extend(row.iter().filter_map(|&c| std::char::from_u32(c)));
            self.fb.push('\n');
        }
    }
}

fn dot(x: usize, y: usize) -> u32 {
    match (x % 2, y % 4) {
        (0, 0) => 0x1,
        (1, 0) => 0x8,
        (0, 1) => 0x2,
        (1, 1) => 0x10,
        (0, 2) => 0x4,
        (1, 2) => 0x20,
        (0, 3) => 0x40,
        (1, 3) => 0x80,
        _ => unreachable!(),
    }
}

/// The line shown under the board.
pub fn status_line(sim: &Simulation) -> String {
    format!("tick: {}  alive: {}", sim.generation(), sim.board().population())
}
