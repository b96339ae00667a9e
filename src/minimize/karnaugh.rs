//! Karnaugh map reduction
//!
//! The target set is laid out on a Gray-coded grid: the first half of the
//! variables (rounded down) select the row, the rest select the column,
//! and both axes are Gray-ordered so neighboring cells differ in one bit.
//! The grid wraps on both axes.
//!
//! Blocks are power-of-two rectangles tried largest first. A candidate
//! whose cells are all marked is only a product term when its cell set is
//! a subcube, which is checked by intersecting the cell patterns and
//! comparing `2^dashes` against the block area; Gray ordering admits
//! windows that pass the all-marked test but fix no variable at all.

use super::{Form, Implicant, Minimization, Reducer, Stage, StageLog};
use crate::cover::render_terms;
use crate::error::MinimizeError;
use log::debug;
use std::collections::BTreeSet;

/// Largest variable count with a canonical grid layout.
pub const MAX_VARIABLES: usize = 5;

fn gray(k: usize) -> usize {
    k ^ (k >> 1)
}

fn describe(term: &Implicant) -> String {
    let indices: Vec<String> = term.covered().iter().map(usize::to_string).collect();
    format!("{} -> {{{}}}", term.pattern_string(), indices.join(", "))
}

/// Gray-coded grid grouping.
pub struct KarnaughMap;

struct Grid {
    row_bits: usize,
    col_bits: usize,
    marked: BTreeSet<usize>,
}

impl Grid {
    fn rows(&self) -> usize {
        1 << self.row_bits
    }

    fn cols(&self) -> usize {
        1 << self.col_bits
    }

    fn cell_index(&self, r: usize, c: usize) -> usize {
        (gray(r) << self.col_bits) | gray(c)
    }

    /// Cell indices of an `h` by `w` block anchored at `(r0, c0)`, wrapping
    /// on both axes.
    fn block_indices(&self, r0: usize, c0: usize, h: usize, w: usize) -> Vec<usize> {
        let mut indices = Vec::with_capacity(h * w);
        for dr in 0..h {
            for dc in 0..w {
                indices.push(self.cell_index((r0 + dr) % self.rows(), (c0 + dc) % self.cols()));
            }
        }
        indices
    }

    /// Intersect the cell patterns of a block into one term, if the block
    /// is a subcube.
    fn block_term(&self, indices: &[usize], width: usize) -> Option<Implicant> {
        let mut pattern: Vec<Option<bool>> = Implicant::from_index(indices[0], width)
            .pattern()
            .to_vec();
        for &index in &indices[1..] {
            for (k, slot) in pattern.iter_mut().enumerate() {
                let bit = ((index >> (width - 1 - k)) & 1) == 1;
                if *slot != Some(bit) {
                    *slot = None;
                }
            }
        }
        let dashes = pattern.iter().filter(|p| p.is_none()).count();
        if (1usize << dashes) != indices.len() {
            return None;
        }
        let covered: BTreeSet<usize> = indices.iter().copied().collect();
        Some(Implicant::new(pattern, covered))
    }

    /// Power-of-two block shapes, largest area first, taller first on ties.
    fn shapes(&self) -> Vec<(usize, usize)> {
        let mut shapes = Vec::new();
        let mut h = self.rows();
        while h >= 1 {
            let mut w = self.cols();
            while w >= 1 {
                shapes.push((h, w));
                w /= 2;
            }
            h /= 2;
        }
        shapes.sort_by(|a, b| (b.0 * b.1, b.0).cmp(&(a.0 * a.1, a.0)));
        shapes
    }

    /// Render the grid for the stage log.
    fn render(&self, variables: &[char]) -> Vec<String> {
        let row_vars: String = variables[..self.row_bits].iter().collect();
        let col_vars: String = variables[self.row_bits..].iter().collect();
        let col_labels: Vec<String> = (0..self.cols())
            .map(|c| format!("{:0w$b}", gray(c), w = self.col_bits))
            .collect();

        let mut lines = Vec::with_capacity(self.rows() + 1);
        lines.push(format!("{} \\ {}   {}", row_vars, col_vars, col_labels.join(" ")));
        for r in 0..self.rows() {
            let cells: Vec<&str> = (0..self.cols())
                .map(|c| {
                    if self.marked.contains(&self.cell_index(r, c)) {
                        "1"
                    } else {
                        "."
                    }
                })
                .collect();
            let label = format!("{:0w$b}", gray(r), w = self.row_bits);
            lines.push(format!("{}   {}", label, cells.join(" ")));
        }
        lines
    }
}

impl Reducer for KarnaughMap {
    fn name(&self) -> &'static str {
        "Karnaugh map"
    }

    fn reduce(
        &self,
        targets: &BTreeSet<usize>,
        variables: &[char],
        form: Form,
    ) -> Result<Minimization, MinimizeError> {
        let width = variables.len();
        if width > MAX_VARIABLES {
            return Err(MinimizeError::TooManyVariables {
                variables: width,
                limit: MAX_VARIABLES,
            });
        }

        let total = 1usize << width;
        let targets: BTreeSet<usize> = targets.iter().copied().filter(|t| *t < total).collect();

        if targets.is_empty() {
            return Ok(Minimization::constant(form.empty_constant()));
        }
        if targets.len() == total {
            return Ok(Minimization::constant(form.full_constant()));
        }

        let row_bits = width / 2;
        let grid = Grid {
            row_bits,
            col_bits: width - row_bits,
            marked: targets.clone(),
        };

        let mut stages = StageLog::new();
        stages.push(Stage::new("Grid", grid.render(variables)));

        let mut chosen: Vec<Implicant> = Vec::new();
        let mut uncovered = targets.clone();
        for (h, w) in grid.shapes() {
            if uncovered.is_empty() {
                break;
            }
            for r0 in 0..grid.rows() {
                for c0 in 0..grid.cols() {
                    let indices = grid.block_indices(r0, c0, h, w);
                    if !indices.iter().all(|i| grid.marked.contains(i)) {
                        continue;
                    }
                    let Some(term) = grid.block_term(&indices, width) else {
                        continue;
                    };
                    if !indices.iter().any(|i| uncovered.contains(i)) {
                        continue;
                    }
                    debug!("block {}x{} at ({r0},{c0}): {}", h, w, term.pattern_string());
                    for index in &indices {
                        uncovered.remove(index);
                    }
                    chosen.push(term);
                }
            }
        }

        stages.push(Stage::new("Groups", chosen.iter().map(describe).collect()));

        Ok(Minimization {
            expression: render_terms(&chosen, variables, form),
            stages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(targets: &[usize], variables: &[char], form: Form) -> Minimization {
        let targets: BTreeSet<usize> = targets.iter().copied().collect();
        KarnaughMap.reduce(&targets, variables, form).unwrap()
    }

    #[test]
    fn gray_sequence() {
        let seq: Vec<usize> = (0..4).map(gray).collect();
        assert_eq!(seq, vec![0, 1, 3, 2]);
    }

    #[test]
    fn single_cell_block() {
        let result = reduce(&[3], &['a', 'b'], Form::Sdnf);
        assert_eq!(result.expression, "(a & b)");
    }

    #[test]
    fn wrapping_pair_merges_across_the_seam() {
        // !b marks cells 00 and 10, adjacent only through the row wrap.
        let result = reduce(&[0, 2], &['a', 'b'], Form::Sdnf);
        assert_eq!(result.expression, "!b");
    }

    #[test]
    fn non_subcube_windows_are_rejected() {
        // On the eight-column Gray axis the cells 1,3,2,6 sit in a
        // contiguous window of four, yet together they fix no column bit.
        // The window must be refused and covered by 1x2 blocks instead.
        let variables = ['a', 'b', 'c', 'd', 'e'];
        let result = reduce(&[1, 2, 3, 6], &variables, Form::Sdnf);
        let parsed = crate::expression::parse(&result.expression).unwrap();
        let table = crate::table::TruthTable::generate(&variables, parsed.postfix()).unwrap();
        assert_eq!(table.minterm_indices(), &[1, 2, 3, 6]);
        // Three pair blocks, not one bogus quad.
        assert_eq!(result.stages[1].items.len(), 3);
    }

    #[test]
    fn larger_blocks_win() {
        // Minterms 0..=3 of three variables collapse to the single literal !a.
        let result = reduce(&[0, 1, 2, 3], &['a', 'b', 'c'], Form::Sdnf);
        assert_eq!(result.expression, "!a");
    }

    #[test]
    fn empty_and_full_are_constants() {
        assert_eq!(reduce(&[], &['a', 'b'], Form::Sdnf).expression, "0");
        assert_eq!(
            reduce(&[0, 1, 2, 3], &['a', 'b'], Form::Sknf).expression,
            "0"
        );
    }

    #[test]
    fn six_variables_are_refused() {
        let targets: BTreeSet<usize> = [0].into_iter().collect();
        let err = KarnaughMap
            .reduce(&targets, &['a', 'b', 'c', 'd', 'e', 'f'], Form::Sdnf)
            .unwrap_err();
        assert_eq!(
            err,
            MinimizeError::TooManyVariables {
                variables: 6,
                limit: 5
            }
        );
    }

    #[test]
    fn grid_stage_shows_gray_ordered_cells() {
        let result = reduce(&[0, 1, 2, 5, 6, 7], &['a', 'b', 'c'], Form::Sdnf);
        let grid = &result.stages[0];
        assert_eq!(grid.description, "Grid");
        // Columns run 00 01 11 10; index 3 (row 0, Gray column 11) is unset.
        assert_eq!(grid.items[0], "a \\ bc   00 01 11 10");
        assert_eq!(grid.items[1], "0   1 1 . 1");
        assert_eq!(grid.items[2], "1   . 1 1 1");
    }
}
