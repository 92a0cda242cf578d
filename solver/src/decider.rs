use crate::{
    assignment::{
        Assign,
        Assignment,
    },
    clause_db::ClauseDb,
    literal::Literal,
    InternalError,
};

/// Picks the next branching literal by a full rescan of the active clause
/// region: every undefined literal's occurrence count is recomputed from
/// scratch, and the literal with the strictly greatest count wins, ties
/// broken toward the lowest literal index.
///
/// There is no incremental bookkeeping here on purpose — the active region
/// shrinks and grows across backtracking, so a recount is the simplest thing
/// that stays correct.
pub fn make_decision(
    assignment: &mut Assignment,
    clauses: &ClauseDb,
) -> Result<Literal, InternalError> {
    assignment.zero_counts();
    for idx in 0..clauses.tail() {
        let clause = clauses.clause(idx);
        for &lit in clause.literals() {
            match assignment.value(lit) {
                Assign::True => return Err(InternalError::TrueLiteralInActiveClause),
                Assign::Undef => assignment.bump_count(lit),
                Assign::False => {}
            }
        }
    }

    let mut best: Option<Literal> = None;
    let mut best_count = 0u32;
    for index in 0..assignment.num_lits() {
        let lit = Literal::from_index(index);
        let count = assignment.count(lit);
        if count > best_count {
            best_count = count;
            best = Some(lit);
        }
    }

    let chosen = best.ok_or(InternalError::NoDecisionCandidate)?;
    if best_count == 0 || assignment.value(chosen) == Assign::False {
        return Err(InternalError::NoDecisionCandidate)
    }
    debug_assert_eq!(assignment.value(chosen), Assign::Undef);
    Ok(chosen)
}
