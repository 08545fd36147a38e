//! Post-parse coalescing of adjacent plain terms
//!
//! A query like `animated scifi` parses as two separate must clauses; users
//! expect it to behave like one conjunctive match over both words. After
//! the grammar accepts, runs of adjacent plain terms in the Must list are
//! merged into a single match. Should and MustNot clauses are never
//! touched.

use crate::query::ast::Query;
use crate::query::nodes::{BoolQuery, MatchQuery};

/// Rewrite the root's Must list, merging each run of two or more adjacent
/// plain terms into one space-joined conjunctive match
pub(crate) fn coalesce_adjacent_terms(root: BoolQuery) -> BoolQuery {
    let BoolQuery {
        musts: original,
        shoulds,
        must_nots,
        min_should,
        boost,
    } = root;

    let mut musts = Vec::with_capacity(original.len());
    let mut run: Vec<MatchQuery> = Vec::new();

    for clause in original {
        match clause {
            Query::Match(m) if is_plain_term(&m) => run.push(m),
            other => {
                flush_run(&mut run, &mut musts);
                musts.push(other);
            }
        }
    }
    flush_run(&mut run, &mut musts);

    BoolQuery {
        musts,
        shoulds,
        must_nots,
        min_should,
        boost,
    }
}

/// A plain term is an unfielded exact match with no boost: the shape a bare
/// word in the input produces
fn is_plain_term(query: &MatchQuery) -> bool {
    query.field.is_empty() && query.fuzziness == 0 && query.boost == 1.0
}

fn flush_run(run: &mut Vec<MatchQuery>, musts: &mut Vec<Query>) {
    if run.is_empty() {
        return;
    }
    if run.len() == 1 {
        let single = run.remove(0);
        musts.push(Query::Match(single));
        return;
    }
    let text = run
        .iter()
        .map(|m| m.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    musts.push(MatchQuery::new(text).with_and_operator().into());
    run.clear();
}
