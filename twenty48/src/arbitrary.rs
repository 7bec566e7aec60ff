use quickcheck::Arbitrary;

use crate::{Direction, Exponent, Grid};

/// Largest side length of generated grids.
const MAX_SIZE: usize = 6;

// Low exponents and many empty cells, so that merges are common.
fn arbitrary_exponent(g: &mut quickcheck::Gen) -> Exponent {
    if bool::arbitrary(g) {
        0
    } else {
        1 + u8::arbitrary(g) % 4
    }
}

/// A single row of a grid, for testing the merge of one line.
#[derive(Clone, Debug)]
pub struct Row(pub Vec<Exponent>);

impl Arbitrary for Row {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = usize::arbitrary(g) % (MAX_SIZE + 3);
        Row((0..len).map(|_| arbitrary_exponent(g)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Row))
    }
}

impl Arbitrary for Grid {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = 1 + usize::arbitrary(g) % MAX_SIZE;
        let mut grid = Grid::new(size);
        for row in 0..size {
            for col in 0..size {
                grid.set(row, col, arbitrary_exponent(g));
            }
        }
        grid
    }
}

impl Arbitrary for Direction {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Direction::ALL).unwrap()
    }
}
