use crate::{
    assignment::{
        Assign,
        Assignment,
    },
    clause_db::ClauseDb,
    literal::Literal,
};

/// Whether a propagation step left every active clause intact or found one
/// fully falsified.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PropagateOutcome {
    NoConflict,
    Conflict,
}

impl PropagateOutcome {
    pub fn is_conflict(self) -> bool {
        matches!(self, Self::Conflict)
    }
}

/// Assigns `decision` true and re-scans the active clause region, swapping
/// every clause it satisfies past the tail. `new_level` distinguishes a
/// branching decision (opens a new decision level) from a forced unit
/// propagation (stays at the current level).
///
/// Clauses that become satisfied are swapped to the back of the active
/// region rather than removed, so backtracking can walk them back in by
/// decision level. A clause whose every literal is false is a conflict, but
/// the scan still runs to completion rather than stopping early, keeping the
/// active region's swap bookkeeping consistent for the clauses after it.
pub fn propagate(
    assignment: &mut Assignment,
    clauses: &mut ClauseDb,
    decision: Literal,
    new_level: bool,
) -> PropagateOutcome {
    if new_level {
        let level = assignment.bump_level();
        assignment.set_level_choice(level, decision);
        assignment.set_decision(decision, true);
    }
    let level = assignment.cur_level();
    assignment.assign_true(decision, level);

    let mut conflict = false;
    let mut i = 0;
    while i < clauses.tail() {
        let len = clauses.clause(i).len();
        let mut became_true = false;
        let mut false_count = 0usize;
        for pos in 0..len {
            let lit = clauses.clause(i).literal_at(pos);
            match assignment.value(lit) {
                Assign::True => {
                    became_true = true;
                    break
                }
                Assign::False => false_count += 1,
                Assign::Undef => {}
            }
        }

        if became_true {
            clauses.clause_mut(i).mark_satisfied(level);
            if clauses.tail() == 1 {
                clauses.set_tail(0);
                assignment.set_satisfied(true);
                return PropagateOutcome::NoConflict
            }
            clauses.swap(i, clauses.tail() - 1);
            clauses.dec_tail();
            continue
        }
        if false_count == len {
            conflict = true;
        }
        i += 1;
    }

    if conflict {
        PropagateOutcome::Conflict
    } else {
        PropagateOutcome::NoConflict
    }
}

/// Finds a clause in the active region with exactly one undefined literal
/// and every other literal false.
pub fn find_unit(assignment: &Assignment, clauses: &ClauseDb) -> Option<Literal> {
    for idx in 0..clauses.tail() {
        let clause = clauses.clause(idx);
        let mut undef_lit = None;
        let mut undef_count = 0u32;
        let mut saw_true = false;
        for &lit in clause.literals() {
            match assignment.value(lit) {
                Assign::True => {
                    saw_true = true;
                    break
                }
                Assign::Undef => {
                    undef_count += 1;
                    undef_lit = Some(lit);
                    if undef_count > 1 {
                        break
                    }
                }
                Assign::False => {}
            }
        }
        if !saw_true && undef_count == 1 {
            return undef_lit
        }
    }
    None
}

/// Repeatedly propagates unit clauses until a fixpoint, a conflict, or the
/// active region empties out.
pub fn propagate_units(assignment: &mut Assignment, clauses: &mut ClauseDb) -> PropagateOutcome {
    loop {
        if assignment.satisfied() {
            return PropagateOutcome::NoConflict
        }
        match find_unit(assignment, clauses) {
            None => return PropagateOutcome::NoConflict,
            Some(unit) => {
                if propagate(assignment, clauses, unit, false).is_conflict() {
                    return PropagateOutcome::Conflict
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Variable;
    use alloc::vec;

    fn pos(var: usize) -> Literal {
        Variable::from_index(var).pos_literal()
    }

    fn neg(var: usize) -> Literal {
        Variable::from_index(var).neg_literal()
    }

    #[test]
    fn satisfying_last_clause_sets_satisfied_flag() {
        let mut assignment = Assignment::default();
        assignment.grow_to(1);
        let mut clauses = ClauseDb::default();
        clauses.add_clause(vec![pos(0)]);
        let outcome = propagate(&mut assignment, &mut clauses, pos(0), true);
        assert_eq!(outcome, PropagateOutcome::NoConflict);
        assert!(assignment.satisfied());
        assert_eq!(clauses.tail(), 0);
    }

    #[test]
    fn falsifying_every_literal_is_a_conflict() {
        let mut assignment = Assignment::default();
        assignment.grow_to(1);
        let mut clauses = ClauseDb::default();
        clauses.add_clause(vec![neg(0)]);
        let outcome = propagate(&mut assignment, &mut clauses, pos(0), true);
        assert_eq!(outcome, PropagateOutcome::Conflict);
    }

    #[test]
    fn unit_propagation_chains() {
        let mut assignment = Assignment::default();
        assignment.grow_to(2);
        let mut clauses = ClauseDb::default();
        clauses.add_clause(vec![pos(0)]);
        clauses.add_clause(vec![neg(0), pos(1)]);
        assert_eq!(
            propagate(&mut assignment, &mut clauses, pos(0), true),
            PropagateOutcome::NoConflict
        );
        assert_eq!(
            propagate_units(&mut assignment, &mut clauses),
            PropagateOutcome::NoConflict
        );
        assert!(assignment.satisfied());
        assert_eq!(assignment.value(pos(1)), Assign::True);
    }
}
