/// A fixed size grid of cells, packed one bit per cell.
///
/// Cell `(x, y)` lives at linear index `y * width + x`, which is bit `index % 8` of byte
/// `index / 8`. The buffer is allocated once and never resized.
///
/// ```notrust
///  index:  7 6 5 4 3 2 1 0   15 14 13 12 11 10 9 8
///  byte:   |----- 0 -----|   |-------- 1 --------|
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BitBoard {
    width: usize,
    height: usize,
    bits: Vec<u8>,
}

impl BitBoard {
    /// Create an all-dead board. Both dimensions must be non-zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");

        let size = width * height;

        Self {
            width,
            height,
            bits: vec![0; size.div_ceil(8)],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the board
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Whether the bit at `index` is set.
    #[inline]
    pub fn read(&self, index: usize) -> bool {
        debug_assert!(index < self.size(), "index {index} is out of bounds");

        let (byte, mask) = Self::locate(index);
        self.bits[byte] & mask != 0
    }

    /// Set the bit at `index` to `value`, leaving the rest of its byte untouched.
    #[inline]
    pub fn write(&mut self, index: usize, value: bool) {
        debug_assert!(index < self.size(), "index {index} is out of bounds");

        let (byte, mask) = Self::locate(index);
        self.bits[byte] = (self.bits[byte] & !mask) | (mask * value as u8);
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.read(self.index(x, y))
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let i = self.index(x, y);
        self.write(i, value);
    }

    /// Count the live cells.
    pub fn population(&self) -> usize {
        // Bits past `size` in the last byte are never written, so they stay clear.
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width, "x is out of bounds");
        debug_assert!(y < self.height, "y is out of bounds");

        y * self.width + x
    }

    const fn locate(index: usize) -> (usize, u8) {
        (index / 8, 1 << (index % 8))
    }
}

#[cfg(test)]
mod test {
    use super::BitBoard;

    #[test]
    fn storage_is_rounded_up_to_whole_bytes() {
        assert_eq!(BitBoard::new(1, 1).bits.len(), 1);
        assert_eq!(BitBoard::new(8, 1).bits.len(), 1);
        assert_eq!(BitBoard::new(3, 3).bits.len(), 2);
        assert_eq!(BitBoard::new(4, 4).bits.len(), 2);
        assert_eq!(BitBoard::new(17, 1).bits.len(), 3);
    }

    #[test]
    fn write_touches_a_single_bit() {
        let mut board = BitBoard::new(4, 4);

        board.write(5, true);
        assert_eq!(board.bits, [0b0010_0000, 0]);

        board.write(6, true);
        board.write(5, false);
        assert_eq!(board.bits, [0b0100_0000, 0]);

        board.write(9, true);
        assert_eq!(board.bits, [0b0100_0000, 0b0000_0010]);
    }

    #[test]
    fn writing_the_same_value_twice_is_stable() {
        let mut board = BitBoard::new(3, 3);

        board.write(8, true);
        board.write(8, true);
        assert!(board.read(8));

        board.write(8, false);
        board.write(8, false);
        assert!(!board.read(8));
    }

    #[test]
    fn coordinates_map_row_major() {
        let mut board = BitBoard::new(5, 3);

        board.set(2, 1, true);
        assert!(board.read(7));
        assert!(board.get(2, 1));
        assert!(!board.get(1, 2));
    }

    #[test]
    fn population_counts_set_bits() {
        let mut board = BitBoard::new(3, 3);

        board.set(0, 0, true);
        board.set(2, 2, true);
        board.set(1, 1, true);
        assert_eq!(board.population(), 3);

        board.set(1, 1, false);
        assert_eq!(board.population(), 2);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn zero_dimensions_are_rejected() {
        BitBoard::new(0, 3);
    }
}
