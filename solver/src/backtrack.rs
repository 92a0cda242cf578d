use crate::{
    assignment::Assignment,
    clause_db::ClauseDb,
    literal::Literal,
    InternalError,
};

/// The result of unwinding the decision stack after a conflict.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BacktrackOutcome {
    /// Every decision has been tried in both polarities: the instance is
    /// unsatisfiable.
    Unsat,
    /// The next branch to try, the negation of the most recently exhausted
    /// decision.
    Decision(Literal),
}

/// Unwinds exactly one decision level: clears every literal assigned at the
/// current level, reactivates the clauses satisfied at that level (walking
/// the satisfied region back in from just past the tail), and returns the
/// literal that was decided at that level.
pub fn backtrack_once(assignment: &mut Assignment, clauses: &mut ClauseDb) -> Literal {
    let level = assignment.cur_level();
    for index in 0..assignment.num_lits() {
        let lit = Literal::from_index(index);
        if assignment.level(lit) == level {
            assignment.clear(lit);
        }
    }

    let mut tail = clauses.tail();
    while tail < clauses.len() && clauses.clause(tail).level_sat() == level {
        clauses.clause_mut(tail).mark_active();
        tail += 1;
    }
    clauses.set_tail(tail);
    assignment.set_satisfied(false);

    let lev_choice = assignment.level_choice(level);
    assignment.dec_level();
    lev_choice
}

/// Unwinds decision levels until it finds one whose branch literal still has
/// an untried polarity, or determines that none remain.
pub fn backtrack(
    assignment: &mut Assignment,
    clauses: &mut ClauseDb,
) -> Result<BacktrackOutcome, InternalError> {
    if assignment.cur_level() == 0 {
        let lit0 = assignment.level_choice(0);
        if assignment.is_decision(lit0) && assignment.is_decision(lit0.neg()) {
            return Ok(BacktrackOutcome::Unsat)
        }
    }

    let mut lev_choice = backtrack_once(assignment, clauses);
    while assignment.is_decision(lev_choice) && assignment.is_decision(lev_choice.neg()) {
        if assignment.cur_level() < 0 {
            return Ok(BacktrackOutcome::Unsat)
        }
        assignment.set_decision(lev_choice, false);
        assignment.set_decision(lev_choice.neg(), false);
        lev_choice = backtrack_once(assignment, clauses);
    }

    let next = lev_choice.neg();
    if assignment.is_decision(next) {
        return Err(InternalError::BacktrackAssertionFailed)
    }
    Ok(BacktrackOutcome::Decision(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        literal::Variable,
        propagator::propagate,
    };
    use alloc::vec;

    fn pos(var: usize) -> Literal {
        Variable::from_index(var).pos_literal()
    }

    #[test]
    fn backtrack_once_undoes_propagate() {
        let mut assignment = Assignment::default();
        assignment.grow_to(1);
        let mut clauses = ClauseDb::default();
        clauses.add_clause(vec![pos(0), pos(0).neg()]);
        clauses.add_clause(vec![pos(0)]);

        propagate(&mut assignment, &mut clauses, pos(0), true);
        assert_eq!(assignment.cur_level(), 0);

        let flipped = backtrack_once(&mut assignment, &mut clauses);
        assert_eq!(flipped, pos(0));
        assert_eq!(assignment.cur_level(), -1);
        assert!(assignment.is_undef(pos(0)));
        assert!(assignment.is_undef(pos(0).neg()));
        assert_eq!(clauses.tail(), 2);
        assert!(!assignment.satisfied());
    }

    #[test]
    fn backtrack_returns_unsat_once_both_polarities_of_level_zero_are_tried() {
        let mut assignment = Assignment::default();
        assignment.grow_to(1);
        let mut clauses = ClauseDb::default();
        clauses.add_clause(vec![pos(0)]);
        clauses.add_clause(vec![pos(0).neg()]);

        propagate(&mut assignment, &mut clauses, pos(0), true);
        let outcome = backtrack(&mut assignment, &mut clauses).unwrap();
        assert_eq!(outcome, BacktrackOutcome::Decision(pos(0).neg()));

        propagate(&mut assignment, &mut clauses, pos(0).neg(), true);
        let outcome = backtrack(&mut assignment, &mut clauses).unwrap();
        assert_eq!(outcome, BacktrackOutcome::Unsat);
    }
}
