//! Try / catch / finally statements.
//!
//! The try block collects its exceptions in a private pending list. Those
//! matched by a catch clause are dropped; the rest escape along with
//! whatever the catch clauses and the finally block raise. A finally block
//! that cannot complete normally discards everything escaping the try and
//! catch blocks.
//!
//! Definite assignment: the try block and every catch clause are walked from
//! the ledger as it was before the statement, and only variables all of them
//! assign survive. The finally block runs on every path, so what it assigns
//! is kept unconditionally.

use javelin_ast::{CatchClause, TryStmt};
use javelin_core::{CheckError, DataType, TypeHash};
use tracing::trace;

use super::{Result, StmtChecker};
use crate::ledger::{VarRecord, intersect_all};
use crate::outcome::Outcome;
use crate::type_resolver::TypeResolver;

impl StmtChecker<'_> {
    pub fn check_try(&mut self, try_stmt: &TryStmt<'_>) -> Result<Outcome> {
        let caught: Vec<TypeHash> = self
            .resolve_catch_types(try_stmt.catches)
            .into_iter()
            .flatten()
            .collect();
        let outer = self.pending.take();
        self.try_depth += 1;

        let (try_outcome, try_ledger) =
            self.walk_forked(|this| this.check_block(&try_stmt.try_block))?;
        self.pending.remove_caught(&caught, self.registry);
        let escaping = self.pending.take();

        let mut paths = vec![try_ledger.assigned_since(&self.ledger)];
        let mut outcomes = vec![try_outcome];
        for catch in try_stmt.catches {
            let (outcome, ledger) = self.walk_forked(|this| this.check_catch(catch))?;
            paths.push(ledger.assigned_since(&self.ledger));
            outcomes.push(outcome);
        }
        let from_catches = self.pending.take();

        let finally_outcome = match &try_stmt.finally_block {
            Some(finally) => self.check_block(finally)?,
            None => Outcome::FallsThrough,
        };
        let from_finally = self.pending.take();
        self.try_depth -= 1;

        let assigned = intersect_all(paths);
        self.ledger.apply(&assigned);

        let mut pending = outer;
        let outcome = if finally_outcome.is_falls_through() {
            pending.extend(escaping);
            pending.extend(from_catches);
            pending.extend(from_finally);
            Outcome::join_all(outcomes, self.registry)
        } else {
            pending.extend(from_finally);
            finally_outcome
        };
        self.pending = pending;

        trace!(catches = try_stmt.catches.len(), %outcome, assigned = assigned.len(), "try joined");
        Ok(outcome)
    }

    /// Resolve each clause's exception type. Clauses whose type is unknown
    /// or not throwable yield `None`. A clause whose type is a subtype of an
    /// earlier clause's type is reported; it still resolves.
    fn resolve_catch_types(&mut self, catches: &[CatchClause<'_>]) -> Vec<Option<TypeHash>> {
        let registry = self.registry;
        let env = self.env;
        let resolver = TypeResolver::new(registry, &env.imports);

        let mut resolved: Vec<Option<TypeHash>> = Vec::with_capacity(catches.len());
        for catch in catches {
            let hash = match resolver.resolve(&catch.ty) {
                Ok(ty) if registry.is_throwable(ty.type_hash) => Some(ty.type_hash),
                Ok(ty) => {
                    self.report(CheckError::TypeMismatch {
                        message: format!(
                            "cannot catch a value of type {}; it is not a subclass of Throwable",
                            self.type_name(ty)
                        ),
                        span: catch.ty.span,
                    });
                    None
                }
                Err(error) => {
                    self.report(error);
                    None
                }
            };

            if let Some(hash) = hash
                && resolved
                    .iter()
                    .flatten()
                    .any(|&earlier| registry.is_subtype(hash, earlier))
            {
                self.report(CheckError::ExceptionAlreadyCaught {
                    name: self.type_name(DataType::simple(hash)),
                    span: catch.span,
                });
            }
            resolved.push(hash);
        }
        resolved
    }

    /// Walk a catch clause. Its parameter lives in the clause body's scope
    /// and is assigned on entry.
    fn check_catch(&mut self, catch: &CatchClause<'_>) -> Result<Outcome> {
        let body = &catch.body;
        self.enter_scope(body.scope, body.span)?;
        let binding = self.binding(catch.name.name, catch.name.span)?;
        self.ledger.declare(VarRecord::new(
            catch.name.name,
            binding.data_type,
            body.scope,
            true,
            catch.name.span,
        ));
        let outcome = self.check_stmts(body.stmts);
        self.leave_scope();
        outcome
    }
}
