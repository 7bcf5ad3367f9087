// Matrix projector
// Projects a square grid of corpus letters around a center index

/// A square character grid cut from the corpus, row-major.
///
/// Cells outside the corpus bounds are `None`. The grid remembers the
/// corpus index of its top-left cell so that corpus positions can be
/// mapped back to grid coordinates with the exact same arithmetic the
/// projection used; highlight overlays must go through [`cell_of`] so
/// they can never drift out of agreement with the rendered cells.
///
/// [`cell_of`]: CharMatrix::cell_of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharMatrix {
    size: usize,
    start_index: i64,
    cells: Vec<Option<char>>,
}

impl CharMatrix {
    /// Grid side length (always odd)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Corpus index projected onto the top-left cell (may be negative)
    pub fn start_index(&self) -> i64 {
        self.start_index
    }

    /// Cell content at (row, col); `None` for out-of-corpus cells
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        assert!(row < self.size && col < self.size, "cell out of grid");
        self.cells[row * self.size + col]
    }

    /// Iterate rows as slices of cells
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size)
    }

    /// Map a corpus index to its (row, col) position in this grid,
    /// or `None` if the index falls outside the grid's window.
    ///
    /// This is the single source of truth for index arithmetic shared
    /// by the projection and any highlight overlay.
    pub fn cell_of(&self, corpus_index: i64) -> Option<(usize, usize)> {
        let offset = corpus_index.checked_sub(self.start_index)?;
        if offset < 0 || offset >= (self.size * self.size) as i64 {
            return None;
        }
        let offset = offset as usize;
        Some((offset / self.size, offset % self.size))
    }

    /// The grid as nested vectors, row-major
    pub fn to_rows(&self) -> Vec<Vec<Option<char>>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

/// Round a requested grid size down to the nearest odd value, floored
/// at 1 so a center cell always exists
fn normalize_size(size: usize) -> usize {
    match size {
        0 => 1,
        n if n % 2 == 0 => n - 1,
        n => n,
    }
}

/// Project a `size x size` grid of corpus letters centered on
/// `center_index`, row-major with `size` letters per row.
///
/// Total over every `center_index`, including negative values and
/// values beyond the corpus: cells whose projected index falls outside
/// the corpus are `None`, never an error. An even or zero `size` is
/// defensively rounded down to the nearest odd value >= 1.
///
/// # Examples
/// ```
/// # use torah_els::matrix::extract_matrix_from_index;
/// let text: Vec<char> = "ABCDEFGHI".chars().collect();
/// let grid = extract_matrix_from_index(&text, 4, 3);
/// assert_eq!(grid.get(0, 0), Some('A'));
/// assert_eq!(grid.get(1, 1), Some('E'));
/// assert_eq!(grid.get(2, 2), Some('I'));
/// ```
pub fn extract_matrix_from_index(text: &[char], center_index: i64, size: usize) -> CharMatrix {
    let size = normalize_size(size);
    let center = (size / 2) as i64;
    // Saturate rather than wrap near i64::MIN; every cell of such a grid
    // is far outside the corpus anyway, so centering precision is moot
    let start_index = center_index.saturating_sub(center * size as i64 + center);

    let n = text.len() as i64;
    let mut cells = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let index = start_index.checked_add((row * size + col) as i64);
            match index {
                Some(index) if index >= 0 && index < n => {
                    cells.push(Some(text[index as usize]));
                }
                _ => cells.push(None),
            }
        }
    }

    CharMatrix {
        size,
        start_index,
        cells,
    }
}
