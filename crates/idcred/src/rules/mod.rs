//! Rule tables: per field, an ordered list of predicate + message pairs.
//!
//! Fields run in declaration order and every field is evaluated. Within a
//! field, rules run in order (required, format, length/range, cross-field)
//! and a failing rule whose kind halts the field skips the rest of that
//! field only.

mod login;
mod password;
mod register;

pub(crate) use login::LOGIN;
pub(crate) use password::{ACTIVATION, PASSWORD_RESET};
pub(crate) use register::REGISTER;

use chrono::NaiveDate;
use idcred_core::{DecodedIdentity, NameGrammar};

use crate::report::{FailureKind, FieldFailure, ValidationReport};
use crate::uin::UinAssessment;

/// Everything a rule may look at besides the request itself.
pub(crate) struct RuleContext<'a> {
    pub names: &'a NameGrammar,
    pub today: NaiveDate,
    /// Present for registration only.
    pub uin: Option<&'a UinAssessment>,
}

impl RuleContext<'_> {
    /// The identity cross-checks compare against, if the UIN is trusted.
    pub fn identity(&self) -> Option<&DecodedIdentity> {
        self.uin.and_then(UinAssessment::trusted)
    }
}

pub(crate) type Predicate<R> = fn(&RuleContext<'_>, &R) -> bool;

pub(crate) struct Rule<R> {
    kind: FailureKind,
    message: &'static str,
    check: Predicate<R>,
}

impl<R> Rule<R> {
    pub fn new(kind: FailureKind, message: &'static str, check: Predicate<R>) -> Self {
        Self {
            kind,
            message,
            check,
        }
    }
}

pub(crate) struct FieldRules<R> {
    field: &'static str,
    rules: Vec<Rule<R>>,
}

impl<R> FieldRules<R> {
    pub fn new(field: &'static str, rules: Vec<Rule<R>>) -> Self {
        Self { field, rules }
    }
}

pub(crate) struct RuleTable<R> {
    fields: Vec<FieldRules<R>>,
}

impl<R> RuleTable<R> {
    pub fn new(fields: Vec<FieldRules<R>>) -> Self {
        Self { fields }
    }

    /// Run every field's rules and collect the failures.
    pub fn evaluate(&self, cx: &RuleContext<'_>, request: &R) -> ValidationReport {
        let mut report = ValidationReport::new();
        for field in &self.fields {
            for rule in &field.rules {
                if (rule.check)(cx, request) {
                    continue;
                }
                report.push(FieldFailure {
                    field: field.field,
                    kind: rule.kind,
                    message: rule.message,
                });
                if rule.kind.halts_field() {
                    break;
                }
            }
        }
        report
    }

    /// Field names in evaluation order.
    #[cfg(test)]
    pub fn fields(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.field).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        a: &'static str,
        b: &'static str,
    }

    fn table() -> RuleTable<Pair> {
        RuleTable::new(vec![
            FieldRules::new(
                "a",
                vec![
                    Rule::new(FailureKind::Required, "a required", |_, p: &Pair| {
                        !p.a.is_empty()
                    }),
                    Rule::new(FailureKind::Format, "a lowercase", |_, p: &Pair| {
                        p.a.chars().all(|c| c.is_ascii_lowercase())
                    }),
                    Rule::new(FailureKind::Length, "a too long", |_, p: &Pair| p.a.len() <= 3),
                ],
            ),
            FieldRules::new(
                "b",
                vec![Rule::new(FailureKind::Required, "b required", |_, p: &Pair| {
                    !p.b.is_empty()
                })],
            ),
        ])
    }

    fn run(pair: Pair) -> Vec<&'static str> {
        let names = NameGrammar::default();
        let cx = RuleContext {
            names: &names,
            today: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
            uin: None,
        };
        table()
            .evaluate(&cx, &pair)
            .failures()
            .iter()
            .map(|f| f.message)
            .collect()
    }

    #[test]
    fn test_required_halts_only_its_field() {
        assert_eq!(run(Pair { a: "", b: "" }), vec!["a required", "b required"]);
    }

    #[test]
    fn test_non_halting_failures_accumulate() {
        assert_eq!(
            run(Pair { a: "ABCD", b: "x" }),
            vec!["a lowercase", "a too long"]
        );
    }

    #[test]
    fn test_valid() {
        assert!(run(Pair { a: "abc", b: "x" }).is_empty());
    }

    #[test]
    fn test_field_order() {
        assert_eq!(table().fields(), vec!["a", "b"]);
    }

    #[test]
    fn test_no_identity_without_uin() {
        let names = NameGrammar::default();
        let cx = RuleContext {
            names: &names,
            today: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
            uin: None,
        };
        assert!(cx.identity().is_none());
    }
}
