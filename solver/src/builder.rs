use crate::{
    literal::Literal,
    Error,
    Solver,
};
use alloc::vec::Vec;
use cnf_parser::Output;

/// Accumulates the clauses streamed in by [`cnf_parser::parse_cnf`] into a
/// [`Solver`].
#[derive(Debug, Default)]
pub struct SolverBuilder {
    solver: Solver,
    current_clause: Vec<Literal>,
}

impl SolverBuilder {
    fn finalize_current_clause(&mut self) -> Result<(), Error> {
        let literals = core::mem::take(&mut self.current_clause);
        self.solver.add_clause(literals)
    }

    /// Consumes the builder, returning the solver it has been filling.
    pub fn finish(self) -> Solver {
        self.solver
    }
}

impl Output for SolverBuilder {
    type Error = Error;

    fn problem(&mut self, num_variables: u32, _num_clauses: u32) -> Result<(), Self::Error> {
        self.solver.reserve_variables(num_variables as usize);
        Ok(())
    }

    fn literal(&mut self, literal: cnf_parser::Literal) -> Result<(), Self::Error> {
        self.current_clause.push(Literal::from(literal));
        Ok(())
    }

    fn finalize_clause(&mut self) -> Result<(), Self::Error> {
        self.finalize_current_clause()
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        if !self.current_clause.is_empty() {
            self.finalize_current_clause()?;
        }
        Ok(())
    }
}
