//! Rule handlers.
//!
//! Every handler receives exactly the window its rule's pattern matched, so
//! the term shapes checked by the pattern are relied upon here.

use std::rc::Rc;
use std::sync::Arc;

use hxs_ir::{Delimiter, Node, NodeKind, Position, Symbol};

use crate::errors::{
    expected, range_error, reference_error, syntax_error, type_error, undefined_variable,
    EvalResult,
};
use crate::number::{normalize_index, parse_number};
use crate::value::{BlockFunction, Dict, Function, ScriptFunction};
use crate::{Interpreter, Term, Value};

/// Value carried by a window position the pattern matched as `Value`.
fn value_at(terms: &[Term], i: usize) -> Value {
    terms[i].as_value().cloned().unwrap_or_default()
}

fn word_at(terms: &[Term], i: usize) -> &str {
    terms[i].as_word().unwrap_or_default()
}

fn span_at(terms: &[Term], i: usize, delimiter: Delimiter) -> Rc<[Node]> {
    terms[i]
        .as_span(delimiter)
        .cloned()
        .unwrap_or_else(|| Rc::from(Vec::new()))
}

pub(super) fn number(_: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    match terms[0].as_node().map(|node| &node.kind) {
        Some(NodeKind::Number { digits, suffix }) => {
            parse_number(digits, *suffix).map(Value::Number)
        }
        _ => Err(syntax_error("expect a number literal")),
    }
}

/// `name = (expr)`
pub(super) fn declaration(interp: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    let body = span_at(terms, 2, Delimiter::Paren);
    let value = interp.eval_nodes(&body).map_err(|err| interp.locate(err, terms[2].pos()))?;
    interp.assign(word_at(terms, 0), value.clone());
    Ok(value)
}

pub(super) fn word(interp: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    let name = word_at(terms, 0);
    interp.lookup(name).ok_or_else(|| undefined_variable(name))
}

pub(super) fn glob(_: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    match terms[0].as_node().map(|node| &node.kind) {
        Some(NodeKind::Glob(raw)) => Ok(Value::from(unescape(raw))),
        _ => Err(syntax_error("expect a string literal")),
    }
}

/// Strip the quotes off a raw string literal and resolve its escapes.
///
/// Unknown escapes stand for the escaped character itself.
pub(crate) fn unescape(raw: &str) -> String {
    // Both quotes are single-byte characters.
    let inner = raw.get(1..raw.len().saturating_sub(1)).unwrap_or_default();
    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some('r') => text.push('\r'),
            Some('0') => text.push('\0'),
            Some(other) => text.push(other),
            None => text.push('\\'),
        }
    }
    text
}

/// `value $ name`
pub(super) fn bind(interp: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    let value = value_at(terms, 0);
    interp.assign(word_at(terms, 2), value.clone());
    Ok(value)
}

/// `value . name`
pub(super) fn member(_: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    let target = value_at(terms, 0);
    let Value::Dict(dict) = &target else {
        return Err(type_error(format!(
            "invalid member access on {}",
            target.type_name()
        )));
    };
    let key = word_at(terms, 2);
    let found = dict.borrow().get(key).cloned();
    found.ok_or_else(|| reference_error(format!("unknown member \"{key}\"")))
}

/// `value ( args )`
pub(super) fn call(interp: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    let callee = value_at(terms, 0);
    let args = span_at(terms, 1, Delimiter::Paren);
    interp.call(&callee, &args, &terms[1])
}

/// `value { body }`: hand the block to `value` as its only argument.
pub(super) fn callback(interp: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    let callee = value_at(terms, 0);
    let block = Value::function(Function::Block(BlockFunction {
        body: span_at(terms, 1, Delimiter::Brace),
        store: interp.store().clone(),
        source_name: Arc::clone(interp.source_name()),
    }));
    interp.apply(&callee, vec![block], &terms[1])
}

/// `# name`
pub(super) fn word_string(_: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    Ok(Value::str(word_at(terms, 1)))
}

/// `@ name ( params ) { body }`
pub(super) fn named_function(interp: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    let name = word_at(terms, 1);
    let function = define_function(interp, Some(name), &terms[2], &terms[3])?;
    interp.assign(name, function.clone());
    Ok(function)
}

/// `@ ( params ) { body }`
pub(super) fn anonymous_function(
    interp: &mut Interpreter,
    terms: &[Term],
    _: Position,
) -> EvalResult {
    define_function(interp, None, &terms[1], &terms[2])
}

pub(super) fn malformed_function(_: &mut Interpreter, _: &[Term], _: Position) -> EvalResult {
    Err(syntax_error(
        "invalid function definition: expect `@name(params) {body}` or `@(params) {body}`",
    ))
}

fn define_function(
    interp: &Interpreter,
    name: Option<&str>,
    params: &Term,
    body: &Term,
) -> EvalResult {
    let params = params
        .as_span(Delimiter::Paren)
        .map_or_else(|| Ok(Vec::new()), |nodes| interp.parse_params(nodes))?;
    Ok(Value::function(Function::Script(ScriptFunction {
        name: name.map(Rc::from),
        params: params.into(),
        body: body
            .as_span(Delimiter::Brace)
            .cloned()
            .unwrap_or_else(|| Rc::from(Vec::new())),
        store: interp.store().clone(),
        source_name: Arc::clone(interp.source_name()),
    })))
}

/// Prefix `-`
pub(super) fn negate(interp: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    sign_operand(interp, terms, Symbol::Minus).map(|n| Value::Number(-n))
}

/// Prefix `+`
pub(super) fn identity(interp: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    sign_operand(interp, terms, Symbol::Plus).map(Value::Number)
}

fn sign_operand(interp: &mut Interpreter, terms: &[Term], sign: Symbol) -> EvalResult<f64> {
    let operand = &terms[1];
    let value = interp.eval_term(operand)?;
    value.as_number().ok_or_else(|| {
        interp.locate(
            expected(&format!("a number after unary `{sign}`"), &value),
            operand.pos(),
        )
    })
}

/// `( expr )`
pub(super) fn parentheses(interp: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    interp.eval_nodes(&span_at(terms, 0, Delimiter::Paren))
}

/// `[ a, b, ... ]`
pub(super) fn array(interp: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    let items = interp.eval_list(&span_at(terms, 0, Delimiter::Bracket))?;
    Ok(Value::array(items))
}

/// `value [ expr ]`
///
/// Lookup failures point at the index span.
pub(super) fn index(interp: &mut Interpreter, terms: &[Term], _: Position) -> EvalResult {
    let target = value_at(terms, 0);
    let index = interp.eval_nodes(&span_at(terms, 1, Delimiter::Bracket))?;
    read_index(&target, &index).map_err(|err| interp.locate(err, terms[1].pos()))
}

fn read_index(target: &Value, index: &Value) -> EvalResult {
    match target {
        Value::Array(items) => {
            let items = items.borrow();
            let i = sequence_index(index, items.len())?;
            Ok(items[i].clone())
        }
        Value::Str(text) => {
            let i = sequence_index(index, text.chars().count())?;
            let c = text.chars().nth(i).unwrap_or_default();
            Ok(Value::from(c.to_string()))
        }
        Value::Dict(dict) => {
            let Value::Str(key) = index else {
                return Err(expected("a string as dict index", index));
            };
            let found = dict.borrow().get(key).cloned();
            found.ok_or_else(|| range_error(format!("unknown dict index \"{key}\"")))
        }
        other => Err(type_error(format!(
            "invalid index access on {}",
            other.type_name()
        ))),
    }
}

fn sequence_index(index: &Value, len: usize) -> EvalResult<usize> {
    let Value::Number(n) = index else {
        return Err(expected("a number as index", index));
    };
    if !n.is_finite() {
        return Err(type_error("expect a finite number as index"));
    }
    normalize_index(*n, len, false)
}

/// `{ k: v, ... }`
pub(super) fn dict(interp: &mut Interpreter, terms: &[Term], pos: Position) -> EvalResult {
    let body = span_at(terms, 0, Delimiter::Brace);
    let mut dict = Dict::new();
    for entry in interp.split_list(&body)? {
        let entry_pos = entry.first().map_or(pos, |node| node.pos);
        let colon = entry
            .iter()
            .position(|node| node.as_symbol() == Some(Symbol::Colon));
        let (key_nodes, value_nodes) = match colon {
            Some(i) if i > 0 && i + 1 < entry.len() => (&entry[..i], &entry[i + 1..]),
            _ => {
                return Err(interp.locate(
                    syntax_error("expect a key:value pair as dict entry"),
                    entry_pos,
                ));
            }
        };
        let key = interp.eval_nodes(key_nodes)?;
        let Value::Str(key) = key else {
            return Err(interp.locate(expected("a string as dict key", &key), entry_pos));
        };
        let value = interp.eval_nodes(value_nodes)?;
        dict.insert(key, value);
    }
    Ok(Value::dict(dict))
}
