//! The 4×4 cipher state and its column-major codec.

use core::fmt;

use crate::block::{Block, BLOCK_SIZE};

/// AES state: a 4×4 byte matrix indexed `[row][column]`.
///
/// Byte `i` of a block lives at row `i % 4`, column `i / 4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct State(pub(crate) [[u8; 4]; 4]);

impl State {
    /// Packs a block into a state, column by column.
    pub fn from_block(block: &Block) -> Self {
        let mut cells = [[0u8; 4]; 4];
        for (i, byte) in block.iter().enumerate() {
            cells[i % 4][i / 4] = *byte;
        }
        Self(cells)
    }

    /// Unpacks the state back into a block, column by column.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.0[i % 4][i / 4];
        }
        block
    }

    /// Returns the byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row][col]
    }

    /// Returns row `r` as a 4-byte array.
    #[inline]
    pub fn row(&self, r: usize) -> [u8; 4] {
        self.0[r]
    }

    /// Returns column `c` as a 4-byte array, top to bottom.
    #[inline]
    pub fn column(&self, c: usize) -> [u8; 4] {
        [self.0[0][c], self.0[1][c], self.0[2][c], self.0[3][c]]
    }

    #[inline]
    pub(crate) fn set_column(&mut self, c: usize, column: [u8; 4]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.0[row][c] = byte;
        }
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}

/// Four rows of space-separated hex, as the state is usually drawn.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:02x} {:02x} {:02x} {:02x}",
                row[0], row[1], row[2], row[3]
            )?;
        }
        Ok(())
    }
}
