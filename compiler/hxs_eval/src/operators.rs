//! Operator table.
//!
//! Operators run once no structural rule matches anywhere in the buffer.
//! The engine picks the operator with the lowest priority value (leftmost on
//! ties), evaluates its operands and splices the result over the operator
//! window.

use hxs_ir::{Position, Symbol};

use crate::errors::{expected, syntax_error, EvalResult};
use crate::{Interpreter, Term, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Fixity {
    Prefix,
    Infix,
}

/// What an operator does with its operands.
#[derive(Copy, Clone)]
pub(crate) enum OpKind {
    Arith(fn(f64, f64) -> f64),
    Compare(fn(f64, f64) -> bool),
    /// Operands truncated to 32-bit integers first.
    Bitwise(fn(i32, i32) -> i32),
    Logic(fn(bool, bool) -> bool),
    Equality { negate: bool },
    Not,
    Stringify,
    Negate,
    Identity,
    Assign,
}

#[derive(Copy, Clone)]
pub(crate) struct OperatorDef {
    pub symbol: Symbol,
    pub fixity: Fixity,
    /// Lower binds tighter.
    pub priority: usize,
    pub kind: OpKind,
}

const fn infix(symbol: Symbol, priority: usize, kind: OpKind) -> OperatorDef {
    OperatorDef {
        symbol,
        fixity: Fixity::Infix,
        priority,
        kind,
    }
}

const fn prefix(symbol: Symbol, priority: usize, kind: OpKind) -> OperatorDef {
    OperatorDef {
        symbol,
        fixity: Fixity::Prefix,
        priority,
        kind,
    }
}

pub(crate) static OPERATORS: &[OperatorDef] = &[
    infix(Symbol::StarStar, 1, OpKind::Arith(f64::powf)),
    prefix(Symbol::Bang, 2, OpKind::Not),
    prefix(Symbol::Hash, 2, OpKind::Stringify),
    prefix(Symbol::Minus, 2, OpKind::Negate),
    prefix(Symbol::Plus, 2, OpKind::Identity),
    infix(Symbol::Star, 3, OpKind::Arith(|a, b| a * b)),
    infix(Symbol::Slash, 3, OpKind::Arith(|a, b| a / b)),
    infix(Symbol::Plus, 4, OpKind::Arith(|a, b| a + b)),
    infix(Symbol::Minus, 4, OpKind::Arith(|a, b| a - b)),
    infix(Symbol::Lt, 6, OpKind::Compare(|a, b| a < b)),
    infix(Symbol::Gt, 6, OpKind::Compare(|a, b| a > b)),
    infix(Symbol::LtEq, 6, OpKind::Compare(|a, b| a <= b)),
    infix(Symbol::GtEq, 6, OpKind::Compare(|a, b| a >= b)),
    infix(Symbol::EqEq, 7, OpKind::Equality { negate: false }),
    infix(Symbol::NotEq, 7, OpKind::Equality { negate: true }),
    infix(Symbol::Amp, 8, OpKind::Bitwise(|a, b| a & b)),
    infix(Symbol::Caret, 9, OpKind::Bitwise(|a, b| a ^ b)),
    infix(Symbol::Pipe, 10, OpKind::Bitwise(|a, b| a | b)),
    infix(Symbol::AmpAmp, 11, OpKind::Logic(|a, b| a && b)),
    infix(Symbol::PipePipe, 12, OpKind::Logic(|a, b| a || b)),
    infix(Symbol::Eq, usize::MAX, OpKind::Assign),
];

/// Operator definition for the symbol at `buffer[i]`, if any.
///
/// `-` and `+` are prefix at the buffer start or right after another
/// symbol, infix otherwise. `!` and `#` are always prefix.
pub(crate) fn operator_at(buffer: &[Term], i: usize) -> Option<&'static OperatorDef> {
    let symbol = buffer.get(i)?.as_symbol()?;
    let fixity = match symbol {
        Symbol::Minus | Symbol::Plus if i == 0 || buffer[i - 1].is_symbol() => Fixity::Prefix,
        Symbol::Bang | Symbol::Hash => Fixity::Prefix,
        _ => Fixity::Infix,
    };
    OPERATORS
        .iter()
        .find(|def| def.symbol == symbol && def.fixity == fixity)
}

/// ECMAScript `ToInt32`.
pub(crate) fn to_int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }
    let wrapped = n.trunc().rem_euclid(4_294_967_296.0);
    #[expect(clippy::cast_sign_loss, reason = "wrapped is in 0..2^32")]
    let bits = wrapped as u32;
    i32::from_ne_bytes(bits.to_ne_bytes())
}

#[derive(Copy, Clone)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl Interpreter {
    /// Apply the highest-priority operator in the buffer. Returns whether
    /// anything was applied.
    pub(crate) fn apply_operator(&mut self, buffer: &mut Vec<Term>) -> EvalResult<bool> {
        let selected = (0..buffer.len())
            .filter_map(|i| operator_at(buffer.as_slice(), i).map(|def| (i, def)))
            .filter(|(i, def)| {
                // A prefix operator still facing a symbol waits for it.
                def.fixity == Fixity::Infix
                    || !buffer.get(i + 1).is_some_and(Term::is_symbol)
            })
            .min_by_key(|(_, def)| def.priority);
        let Some((i, def)) = selected else {
            return Ok(false);
        };
        let pos = buffer[i].pos();
        tracing::trace!(operator = %def.symbol, %pos, "operator");
        match def.fixity {
            Fixity::Prefix => {
                let value = self.apply_prefix(buffer, i, def)?;
                buffer.splice(i..i + 2, std::iter::once(Term::Value(value, pos)));
            }
            Fixity::Infix if matches!(def.kind, OpKind::Assign) => {
                let value = self.apply_assign(buffer, i)?;
                let name_pos = buffer[i - 1].pos();
                buffer.splice(i - 1.., std::iter::once(Term::Value(value, name_pos)));
            }
            Fixity::Infix => {
                let value = self.apply_infix(buffer, i, def)?;
                buffer.splice(i - 1..=i + 1, std::iter::once(Term::Value(value, pos)));
            }
        }
        Ok(true)
    }

    fn apply_prefix(&mut self, buffer: &[Term], i: usize, def: &OperatorDef) -> EvalResult {
        let pos = buffer[i].pos();
        if matches!(def.kind, OpKind::Stringify) {
            return match buffer.get(i + 1).and_then(Term::as_word) {
                Some(word) => Ok(Value::str(word)),
                None => Err(self.locate(syntax_error("expect a word after `#`"), pos)),
            };
        }
        let operand = self.operand(buffer, i + 1, def.symbol, Side::Right, pos)?;
        let operand_term = &buffer[i + 1];
        match (def.kind, operand) {
            (OpKind::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
            (OpKind::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
            (OpKind::Identity, Value::Number(n)) => Ok(Value::Number(n)),
            (OpKind::Not, other) => {
                Err(self.operand_error("a boolean", def.symbol, Side::Right, &other, operand_term))
            }
            (OpKind::Negate | OpKind::Identity, other) => {
                Err(self.operand_error("a number", def.symbol, Side::Right, &other, operand_term))
            }
            _ => Err(self.locate(
                syntax_error(format!("`{}` is not a prefix operator", def.symbol)),
                pos,
            )),
        }
    }

    fn apply_infix(&mut self, buffer: &[Term], i: usize, def: &OperatorDef) -> EvalResult {
        let pos = buffer[i].pos();
        if i == 0 {
            return Err(self.locate(
                syntax_error(format!("missing left operand of `{}`", def.symbol)),
                pos,
            ));
        }
        // Both sides are evaluated before the operator applies.
        let left = self.operand(buffer, i - 1, def.symbol, Side::Left, pos)?;
        let right = self.operand(buffer, i + 1, def.symbol, Side::Right, pos)?;
        let (left_term, right_term) = (&buffer[i - 1], &buffer[i + 1]);
        match def.kind {
            OpKind::Arith(op) => {
                let (a, b) = self.numbers(def.symbol, (&left, left_term), (&right, right_term))?;
                Ok(Value::Number(op(a, b)))
            }
            OpKind::Compare(op) => {
                let (a, b) = self.numbers(def.symbol, (&left, left_term), (&right, right_term))?;
                Ok(Value::Bool(op(a, b)))
            }
            OpKind::Bitwise(op) => {
                let (a, b) = self.numbers(def.symbol, (&left, left_term), (&right, right_term))?;
                Ok(Value::Number(f64::from(op(to_int32(a), to_int32(b)))))
            }
            OpKind::Logic(op) => {
                let a = left.as_bool().ok_or_else(|| {
                    self.operand_error("a boolean", def.symbol, Side::Left, &left, left_term)
                })?;
                let b = right.as_bool().ok_or_else(|| {
                    self.operand_error("a boolean", def.symbol, Side::Right, &right, right_term)
                })?;
                Ok(Value::Bool(op(a, b)))
            }
            OpKind::Equality { negate } => Ok(Value::Bool((left == right) != negate)),
            _ => Err(self.locate(
                syntax_error(format!("`{}` is not an infix operator", def.symbol)),
                pos,
            )),
        }
    }

    /// `name = rest...`: the right side is everything after `=`.
    fn apply_assign(&mut self, buffer: &[Term], i: usize) -> EvalResult {
        let pos = buffer[i].pos();
        if i == 0 {
            return Err(self.locate(syntax_error("no variable name given"), pos));
        }
        let Some(name) = buffer[i - 1].as_word() else {
            return Err(self.locate(syntax_error("expect a word as variable name"), pos));
        };
        let rest = &buffer[i + 1..];
        if rest.is_empty() {
            return Err(self.locate(syntax_error("missing value after `=`"), pos));
        }
        let value = self.reduce(rest.to_vec())?;
        self.assign(name, value.clone());
        Ok(value)
    }

    /// Evaluate the operand at `buffer[j]`.
    fn operand(
        &mut self,
        buffer: &[Term],
        j: usize,
        symbol: Symbol,
        side: Side,
        op_pos: Position,
    ) -> EvalResult {
        match buffer.get(j) {
            Some(term) if !term.is_symbol() => self.eval_term(term),
            Some(term) => Err(self.locate(
                syntax_error(format!("unexpected {} after `{symbol}`", term.describe())),
                term.pos(),
            )),
            None => Err(self.locate(
                syntax_error(format!("missing {} operand of `{symbol}`", side.name())),
                op_pos,
            )),
        }
    }

    fn numbers(
        &self,
        symbol: Symbol,
        (left, left_term): (&Value, &Term),
        (right, right_term): (&Value, &Term),
    ) -> EvalResult<(f64, f64)> {
        let a = left
            .as_number()
            .ok_or_else(|| self.operand_error("a number", symbol, Side::Left, left, left_term))?;
        let b = right
            .as_number()
            .ok_or_else(|| self.operand_error("a number", symbol, Side::Right, right, right_term))?;
        Ok((a, b))
    }

    #[cold]
    fn operand_error(
        &self,
        what: &str,
        symbol: Symbol,
        side: Side,
        got: &Value,
        term: &Term,
    ) -> crate::EvalError {
        let err = expected(
            &format!("{what} as {} operand of `{symbol}`", side.name()),
            got,
        );
        self.locate(err, term.pos())
    }
}

#[cfg(test)]
mod tests;
