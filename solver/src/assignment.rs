use crate::literal::Literal;
use bounded::{
    BoundedArray,
    BoundedBitmap,
};

/// The three-valued truth state of a literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Assign {
    Undef,
    True,
    False,
}

impl Default for Assign {
    fn default() -> Self {
        Assign::Undef
    }
}

/// Per-literal and per-level solver state: truth values, the decision level
/// that set them, occurrence counts used by the decision heuristic, and the
/// stack of decisions taken so far.
#[derive(Debug, Default, Clone)]
pub struct Assignment {
    num_vars: usize,
    assigns: BoundedArray<Literal, Assign>,
    levels: BoundedArray<Literal, i64>,
    counts: BoundedArray<Literal, u32>,
    decisions: BoundedBitmap<Literal, bool>,
    level_choice: BoundedArray<usize, Literal>,
    cur_level: i64,
    satisfied: bool,
}

impl Assignment {
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The logical literal space, `2 * num_vars`. Per-literal tables may be
    /// physically larger due to doubling, but only this range is ever live.
    pub fn num_lits(&self) -> usize {
        self.num_vars * 2
    }

    /// Grows every per-literal and per-level table so they cover
    /// `new_num_vars` variables, doubling capacity rather than growing
    /// exactly to avoid repeated reallocation on dense instances.
    pub fn grow_to(&mut self, new_num_vars: usize) {
        if new_num_vars <= self.num_vars {
            return
        }
        let required_lits = new_num_vars.saturating_mul(2);
        self.assigns.grow_doubling(required_lits, Assign::default);
        self.levels.grow_doubling(required_lits, || -1);
        self.counts.grow_doubling(required_lits, || 0);
        self.decisions.grow_doubling(required_lits);
        self.level_choice
            .grow_doubling(new_num_vars, || Literal::from_index(0));
        self.num_vars = new_num_vars;
    }

    #[inline]
    pub fn value(&self, lit: Literal) -> Assign {
        self.assigns[lit]
    }

    #[inline]
    pub fn is_undef(&self, lit: Literal) -> bool {
        self.value(lit) == Assign::Undef
    }

    #[inline]
    pub fn level(&self, lit: Literal) -> i64 {
        self.levels[lit]
    }

    #[inline]
    pub fn count(&self, lit: Literal) -> u32 {
        self.counts[lit]
    }

    pub fn zero_counts(&mut self) {
        let num_lits = self.num_lits();
        for count in self.counts.iter_mut().take(num_lits) {
            *count = 0;
        }
    }

    #[inline]
    pub fn bump_count(&mut self, lit: Literal) {
        self.counts[lit] += 1;
    }

    #[inline]
    pub fn is_decision(&self, lit: Literal) -> bool {
        self.decisions.get(lit).unwrap_or(false)
    }

    #[inline]
    pub fn set_decision(&mut self, lit: Literal, value: bool) {
        self.decisions.set(lit, value).expect("literal index in bounds");
    }

    #[inline]
    pub fn cur_level(&self) -> i64 {
        self.cur_level
    }

    /// Pushes a new decision level and returns it.
    pub fn bump_level(&mut self) -> i64 {
        self.cur_level += 1;
        self.cur_level
    }

    pub fn dec_level(&mut self) {
        self.cur_level -= 1;
    }

    pub fn level_choice(&self, level: i64) -> Literal {
        self.level_choice[level as usize]
    }

    pub fn set_level_choice(&mut self, level: i64, lit: Literal) {
        self.level_choice[level as usize] = lit;
    }

    #[inline]
    pub fn satisfied(&self) -> bool {
        self.satisfied
    }

    #[inline]
    pub fn set_satisfied(&mut self, value: bool) {
        self.satisfied = value;
    }

    /// Assigns `lit` true at `level`, propagating the false value to its
    /// negation.
    pub fn assign_true(&mut self, lit: Literal, level: i64) {
        self.levels[lit] = level;
        self.assigns[lit] = Assign::True;
        self.assigns[lit.neg()] = Assign::False;
    }

    /// Undoes the assignment of `lit`, restoring both polarities to `Undef`.
    pub fn clear(&mut self, lit: Literal) {
        self.assigns[lit] = Assign::Undef;
        self.assigns[lit.neg()] = Assign::Undef;
        self.levels[lit] = -1;
    }
}
