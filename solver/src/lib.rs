#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod assignment;
mod backtrack;
mod builder;
mod clause;
mod clause_db;
mod decider;
mod literal;
mod propagator;


use crate::{
    assignment::Assignment,
    backtrack::{
        backtrack,
        BacktrackOutcome,
    },
    clause_db::{
        AddClauseOutcome,
        ClauseDb,
    },
    decider::make_decision,
    propagator::{
        propagate,
        propagate_units,
    },
};
use alloc::vec::Vec;
use core::fmt;

pub use crate::{
    builder::SolverBuilder,
    clause::Clause,
    literal::{
        Literal,
        Variable,
    },
};

/// A violation of one of the solver's own data structure invariants.
///
/// These never result from malformed input; they would only surface from a
/// bug in the decision, propagation or backtracking logic itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InternalError {
    /// The decision heuristic found an already-true literal while rescanning
    /// the active clause region.
    TrueLiteralInActiveClause,
    /// No undefined literal has a nonzero occurrence count, or the best
    /// candidate is already false.
    NoDecisionCandidate,
    /// Backtracking produced a branch literal that had already been tried.
    BacktrackAssertionFailed,
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::TrueLiteralInActiveClause => {
                f.write_str("found a satisfied literal in the active clause region")
            }
            Self::NoDecisionCandidate => f.write_str("no undefined literal to decide on"),
            Self::BacktrackAssertionFailed => {
                f.write_str("backtracking proposed an already-tried branch")
            }
        }
    }
}

/// The solver's only error type: every failure traces back to an
/// [`InternalError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    Internal(InternalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Internal(error) => write!(f, "internal solver error: {}", error),
        }
    }
}

impl From<InternalError> for Error {
    fn from(error: InternalError) -> Self {
        Self::Internal(error)
    }
}

/// The outcome of running [`Solver::solve`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Sat,
    Unsat,
}

/// A DPLL solver over a tail-partitioned clause store.
///
/// Clauses are added with [`Solver::add_clause`] (or parsed in bulk via
/// [`Solver::from_cnf`]), then [`Solver::solve`] runs decide/propagate/
/// backtrack to a fixpoint.
#[derive(Debug, Default, Clone)]
pub struct Solver {
    clauses: ClauseDb,
    assignment: Assignment,
    trivially_unsat: bool,
}

impl Solver {
    /// Registers a new clause. Growing the per-literal tables to cover any
    /// new variables happens here, before the clause is inserted.
    pub fn add_clause<I>(&mut self, literals: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Literal>,
    {
        let literals: Vec<Literal> = literals.into_iter().collect();
        if let Some(max_var) = literals.iter().map(|lit| lit.variable().index()).max() {
            self.assignment.grow_to(max_var + 1);
        }
        match self.clauses.add_clause(literals) {
            AddClauseOutcome::Accepted => {}
            AddClauseOutcome::TriviallyUnsat => self.trivially_unsat = true,
        }
        Ok(())
    }

    /// Pre-sizes the per-literal tables for `num_vars` variables ahead of
    /// any clause insertion, as the DIMACS problem line allows.
    pub fn reserve_variables(&mut self, num_vars: usize) {
        self.assignment.grow_to(num_vars);
    }

    /// Parses a DIMACS CNF instance and builds a solver for it.
    pub fn from_cnf<I>(input: &mut I) -> Result<Self, cnf_parser::Error<Error>>
    where
        I: cnf_parser::Input,
    {
        let mut builder = SolverBuilder::default();
        cnf_parser::parse_cnf(input, &mut builder)?;
        Ok(builder.finish())
    }

    fn resolve_conflict(&mut self) -> Result<Option<Literal>, Error> {
        match backtrack(&mut self.assignment, &mut self.clauses)? {
            BacktrackOutcome::Unsat => Ok(None),
            BacktrackOutcome::Decision(next) => Ok(Some(next)),
        }
    }

    /// Runs the decide/propagate/backtrack loop to completion.
    ///
    /// A branching decision always opens a new decision level; the literal
    /// returned by backtracking after a conflict is forced at the level
    /// backtracking left the search in, so it is never re-decided from
    /// scratch.
    pub fn solve(&mut self) -> Result<SolveOutcome, Error> {
        if self.trivially_unsat {
            return Ok(SolveOutcome::Unsat)
        }
        if self.clauses.tail() == 0 {
            return Ok(SolveOutcome::Sat)
        }

        let mut forced_decision: Option<Literal> = None;
        loop {
            let decision = match forced_decision.take() {
                Some(lit) => lit,
                None => make_decision(&mut self.assignment, &self.clauses)?,
            };

            if propagate(&mut self.assignment, &mut self.clauses, decision, true).is_conflict() {
                match self.resolve_conflict()? {
                    None => return Ok(SolveOutcome::Unsat),
                    Some(next) => {
                        forced_decision = Some(next);
                        continue
                    }
                }
            }
            if self.assignment.satisfied() {
                return Ok(SolveOutcome::Sat)
            }

            if propagate_units(&mut self.assignment, &mut self.clauses).is_conflict() {
                match self.resolve_conflict()? {
                    None => return Ok(SolveOutcome::Unsat),
                    Some(next) => {
                        forced_decision = Some(next);
                        continue
                    }
                }
            }
            if self.assignment.satisfied() {
                return Ok(SolveOutcome::Sat)
            }
        }
    }

    /// Returns the truth value assigned to `variable`, if the last call to
    /// [`Solver::solve`] returned [`SolveOutcome::Sat`].
    pub fn value_of(&self, variable: Variable) -> Option<bool> {
        let lit = variable.pos_literal();
        match self.assignment.value(lit) {
            assignment::Assign::True => Some(true),
            assignment::Assign::False => Some(false),
            assignment::Assign::Undef => None,
        }
    }

    pub fn num_vars(&self) -> usize {
        self.assignment.num_vars()
    }

    /// The reported bit for `variable` in a satisfying assignment: `1`
    /// unless the positive literal is explicitly `False`. A variable that
    /// search never touched is reported as `1`, since its value never
    /// mattered to any clause.
    pub fn model_bit(&self, variable: Variable) -> bool {
        !matches!(
            self.assignment.value(variable.pos_literal()),
            assignment::Assign::False
        )
    }

    /// `true` if the parser fed an empty clause before the core ever ran.
    pub fn is_trivially_unsat(&self) -> bool {
        self.trivially_unsat
    }
}
