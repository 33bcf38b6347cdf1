//! Switch statements.
//!
//! Handles:
//! - Selector validation (`byte`, `short`, `char` or `int`)
//! - Case labels: integral constants, no duplicates, at most one default
//! - Case termination: a non-empty case must end with break, return or throw
//! - Definite assignment across the ways control can leave the switch
//! - The switch's own outcome
//!
//! Every case is walked from the ledger as it was before the switch. A
//! variable is assigned after the switch only if the switch has a default
//! case and every exit (each `break` that leaves it, plus falling out of the
//! last case) assigned it.

use javelin_ast::{Expr, LiteralKind, SwitchCase, SwitchStmt, UnaryOp};
use javelin_core::{CheckError, ExprInfo, PrimitiveKind, Span};
use rustc_hash::FxHashSet;
use tracing::trace;

use super::{ConditionKind, Result, StmtChecker};
use crate::config::CheckerProperty;
use crate::ledger::{AssignedSet, Ledger, intersect_all};
use crate::outcome::Outcome;

impl StmtChecker<'_> {
    pub fn check_switch(&mut self, switch: &SwitchStmt<'_>) -> Result<Outcome> {
        let selector = self
            .check_guarded(switch.selector, ConditionKind::Switch)
            .and_then(|info| self.check_selector(info, switch.selector.span()));
        self.check_labels(switch.cases, selector);

        self.enter_scope(switch.scope, switch.span)?;
        let before = self.ledger.clone();

        let (walked, breaks) = self.with_break_frame(|this| {
            let mut outcomes = Vec::with_capacity(switch.cases.len());
            let mut last_ledger = None;
            for case in switch.cases {
                let (outcome, ledger) = this.walk_forked(|this| this.check_stmts(case.stmts))?;
                if !case.stmts.is_empty()
                    && outcome.is_falls_through()
                    && this.property(CheckerProperty::RequireCaseTermination)
                {
                    this.report(CheckError::UnterminatedCase { span: case.span });
                }
                outcomes.push(outcome);
                last_ledger = Some(ledger);
            }
            Ok((outcomes, last_ledger))
        })?;
        let (outcomes, last_ledger) = walked;

        let has_default = switch.cases.iter().any(SwitchCase::is_default);
        let assigned = if has_default {
            let mut exits: Vec<AssignedSet> = breaks
                .iter()
                .map(|ledger| ledger.assigned_since(&before))
                .collect();
            if let (Some(Outcome::FallsThrough), Some(ledger)) = (outcomes.last(), &last_ledger) {
                exits.push(ledger.assigned_since(&before));
            }
            intersect_all(exits)
        } else {
            AssignedSet::default()
        };

        self.leave_scope();
        self.ledger.apply(&assigned);

        let outcome = switch_outcome(self, switch.cases, &outcomes, has_default, &breaks);
        trace!(
            cases = switch.cases.len(),
            breaks = breaks.len(),
            %outcome,
            assigned = assigned.len(),
            "switch joined"
        );
        Ok(outcome)
    }

    /// The selector must be a `byte`, `short`, `char` or `int` value.
    /// Returns its kind for range-checking the labels.
    fn check_selector(&mut self, info: ExprInfo, span: Span) -> Option<PrimitiveKind> {
        let message = if info.is_type_name {
            format!(
                "the type name '{}' cannot be used as a switch selector",
                self.type_name(info.data_type)
            )
        } else {
            match info.data_type.primitive_kind() {
                Some(
                    kind @ (PrimitiveKind::Byte
                    | PrimitiveKind::Short
                    | PrimitiveKind::Char
                    | PrimitiveKind::Int),
                ) => return Some(kind),
                _ => format!(
                    "the selector of a switch statement must be of type byte, short, char or int; instead, its type is {}",
                    self.type_name(info.data_type)
                ),
            }
        };
        self.report(CheckError::TypeMismatch { message, span });
        None
    }

    fn check_labels(&mut self, cases: &[SwitchCase<'_>], selector: Option<PrimitiveKind>) {
        let mut seen = FxHashSet::default();
        let mut has_default = false;

        for case in cases {
            if case.is_default() {
                if has_default {
                    self.report(CheckError::MultipleDefaults { span: case.span });
                }
                has_default = true;
                continue;
            }

            for label in case.values {
                let span = label.span();
                let Some(value) = label_value(label) else {
                    self.report(CheckError::InvalidCaseLabel { span });
                    continue;
                };
                if let Some(kind) = selector
                    && let Some((min, max)) = kind.integral_range()
                    && !(min..=max).contains(&value)
                {
                    self.report(CheckError::TypeMismatch {
                        message: format!(
                            "case label {value} is out of range for a switch on {}",
                            kind.name()
                        ),
                        span,
                    });
                }
                if !seen.insert(value) {
                    self.report(CheckError::DuplicateCaseLabel { value, span });
                }
            }
        }
    }
}

/// The value of a case label: an integer or character literal, or a
/// negated integer literal.
fn label_value(label: &Expr<'_>) -> Option<i64> {
    match label {
        Expr::Literal(lit) => match lit.kind {
            LiteralKind::Int(value) => Some(value),
            LiteralKind::Char(c) => Some(i64::from(u32::from(c))),
            _ => None,
        },
        Expr::Unary(unary) if unary.op == UnaryOp::Neg => match unary.operand {
            Expr::Literal(lit) => match lit.kind {
                LiteralKind::Int(value) => value.checked_neg(),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    }
}

/// A switch only completes abruptly when it has a default case, nothing in
/// it leaves through a jump, and its last case returns or throws. It then
/// throws if every non-empty case throws, and returns the declared result
/// type otherwise.
fn switch_outcome(
    checker: &StmtChecker<'_>,
    cases: &[SwitchCase<'_>],
    outcomes: &[Outcome],
    has_default: bool,
    breaks: &[Ledger],
) -> Outcome {
    let abrupt = has_default
        && breaks.is_empty()
        && !outcomes.iter().any(Outcome::is_jump)
        && outcomes.last().is_some_and(Outcome::exits_method);
    if !abrupt {
        return Outcome::FallsThrough;
    }

    let all_throw = cases
        .iter()
        .zip(outcomes)
        .filter(|(case, _)| !case.stmts.is_empty())
        .all(|(_, outcome)| *outcome == Outcome::Throws);
    if all_throw {
        Outcome::Throws
    } else {
        Outcome::Returns(checker.env.return_type)
    }
}
