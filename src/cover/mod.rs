//! The canonical term representation shared by every reducer
//!
//! An [`Implicant`] is a fixed-width trinary pattern over `{0, 1, -}`
//! indexed by sorted-variable position, together with the set of original
//! row indices it subsumes. The pattern positions are `Some(true)` for a
//! required 1, `Some(false)` for a required 0, and `None` for a merged-out
//! "don't care" position.
//!
//! All three minimization strategies build, glue, and render these terms;
//! the Karnaugh reducer additionally derives them from grid blocks. The
//! [`Form`] enum fixes the polarity and separator rules that distinguish a
//! sum-of-products (SDNF) rendering from a product-of-sums (SKNF) one.

use std::collections::BTreeSet;
use std::fmt;

/// Which normal form a reduction targets.
///
/// SDNF terms are conjunctions joined by OR and treat a `1` bit as the bare
/// variable; SKNF swaps both roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Sum of products over the minterm set.
    Sdnf,
    /// Product of sums over the maxterm set.
    Sknf,
}

impl Form {
    /// Separator between whole terms.
    pub fn term_separator(self) -> &'static str {
        match self {
            Form::Sdnf => " | ",
            Form::Sknf => " & ",
        }
    }

    /// Separator between literals inside one term.
    pub fn literal_separator(self) -> &'static str {
        match self {
            Form::Sdnf => " & ",
            Form::Sknf => " | ",
        }
    }

    /// The constant an empty target set reduces to.
    pub fn empty_constant(self) -> &'static str {
        match self {
            Form::Sdnf => "0",
            Form::Sknf => "1",
        }
    }

    /// The constant a full target set reduces to.
    pub fn full_constant(self) -> &'static str {
        match self {
            Form::Sdnf => "1",
            Form::Sknf => "0",
        }
    }

    /// Literal text for one pattern position.
    ///
    /// SDNF: `1` is the bare variable, `0` its negation. SKNF inverts the
    /// polarity, matching the maxterm reading of a row where the function
    /// is false.
    pub fn literal(self, variable: char, value: bool) -> String {
        let positive = match self {
            Form::Sdnf => value,
            Form::Sknf => !value,
        };
        if positive {
            variable.to_string()
        } else {
            format!("!{}", variable)
        }
    }
}

/// A product (or sum) term over the sorted variable positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Implicant {
    pattern: Vec<Option<bool>>,
    covered: BTreeSet<usize>,
}

impl Implicant {
    /// The fully concrete term for one row index.
    ///
    /// Bit `width-1-k` of `index` becomes position `k`, so the first
    /// variable is the most significant bit.
    pub fn from_index(index: usize, width: usize) -> Self {
        let pattern = (0..width)
            .map(|k| Some(((index >> (width - 1 - k)) & 1) == 1))
            .collect();
        let mut covered = BTreeSet::new();
        covered.insert(index);
        Implicant { pattern, covered }
    }

    /// Build directly from a pattern and its covered rows.
    pub fn new(pattern: Vec<Option<bool>>, covered: BTreeSet<usize>) -> Self {
        Implicant { pattern, covered }
    }

    /// Pattern width (number of variables).
    pub fn width(&self) -> usize {
        self.pattern.len()
    }

    /// The trinary pattern, indexed by sorted-variable position.
    pub fn pattern(&self) -> &[Option<bool>] {
        &self.pattern
    }

    /// Original row indices subsumed by this term.
    pub fn covered(&self) -> &BTreeSet<usize> {
        &self.covered
    }

    /// Extend the covered set (used when deduplicating merged patterns).
    pub(crate) fn absorb_covered(&mut self, other: &Implicant) {
        self.covered.extend(other.covered.iter().copied());
    }

    /// Number of `1` positions; the Quine-McCluskey grouping key.
    pub fn ones(&self) -> u32 {
        self.pattern.iter().filter(|p| **p == Some(true)).count() as u32
    }

    /// Number of concrete (non-dash) positions.
    pub fn literal_count(&self) -> usize {
        self.pattern.iter().filter(|p| p.is_some()).count()
    }

    /// Whether every position has been merged out.
    pub fn is_all_dash(&self) -> bool {
        self.pattern.iter().all(|p| p.is_none())
    }

    /// Glue two terms that differ in exactly one concrete position.
    ///
    /// Dash positions must agree; a mismatch between a dash and a concrete
    /// value makes the pair incompatible. On success the differing position
    /// becomes a dash and the covered sets are unioned.
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        if self.pattern.len() != other.pattern.len() {
            return None;
        }
        let mut diff_pos = None;
        for (k, (a, b)) in self.pattern.iter().zip(other.pattern.iter()).enumerate() {
            match (a, b) {
                (None, None) => {}
                (Some(x), Some(y)) if x == y => {}
                (Some(_), Some(_)) => {
                    if diff_pos.is_some() {
                        return None;
                    }
                    diff_pos = Some(k);
                }
                // Dash against concrete: incompatible shapes.
                _ => return None,
            }
        }
        let pos = diff_pos?;
        let mut pattern = self.pattern.clone();
        pattern[pos] = None;
        let covered = self.covered.union(&other.covered).copied().collect();
        Some(Implicant { pattern, covered })
    }

    /// Whether this term subsumes the given row index.
    pub fn covers(&self, index: usize) -> bool {
        let width = self.pattern.len();
        self.pattern.iter().enumerate().all(|(k, p)| match p {
            None => true,
            Some(bit) => (((index >> (width - 1 - k)) & 1) == 1) == *bit,
        })
    }

    /// Render the literals of this term, e.g. `a & !c` or `!a | c`.
    pub fn literals(&self, variables: &[char], form: Form) -> String {
        let parts: Vec<String> = self
            .pattern
            .iter()
            .enumerate()
            .filter_map(|(k, p)| p.map(|value| form.literal(variables[k], value)))
            .collect();
        parts.join(form.literal_separator())
    }

    /// The pattern as a `{0,1,-}` string, e.g. `1-0`.
    pub fn pattern_string(&self) -> String {
        self.pattern
            .iter()
            .map(|p| match p {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            })
            .collect()
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern_string())
    }
}

/// Join rendered terms into a complete expression.
///
/// Multi-literal terms are parenthesized; single literals are not. An empty
/// selection falls back to the form's empty constant, and any all-dash term
/// collapses the whole expression to the form's full constant.
pub fn render_terms(implicants: &[Implicant], variables: &[char], form: Form) -> String {
    if implicants.is_empty() {
        return form.empty_constant().to_string();
    }
    if implicants.iter().any(Implicant::is_all_dash) {
        return form.full_constant().to_string();
    }
    let rendered: Vec<String> = implicants
        .iter()
        .map(|imp| {
            let body = imp.literals(variables, form);
            if imp.literal_count() >= 2 {
                format!("({})", body)
            } else {
                body
            }
        })
        .collect();
    rendered.join(form.term_separator())
}
