//! The `Array` namespace.
//!
//! Arrays are shared, so every mutating operation here is visible through
//! all aliases of its argument.

use std::cmp::Ordering;

use super::{arg, expect_array, expect_bool, expect_number, expect_str, Entry};
use crate::errors::{expected, range_error, EvalResult};
use crate::number::{normalize_index, relative_index};
use crate::{Interpreter, NativeFunction, Shared, Term, Value};

const VARIADIC: usize = NativeFunction::VARIADIC;

/// Largest size `Array.create` accepts.
const MAX_SIZE: f64 = 4_294_967_295.0;

pub(super) fn functions() -> Vec<Entry> {
    vec![
        ("create", 0, 2, "Array.create(size = 0, init = null)", create),
        ("clone", 1, 1, "Array.clone(array)", clone),
        ("sizeOf", 1, 1, "Array.sizeOf(array)", size_of),
        ("set", 3, 3, "Array.set(array, index, value)", set),
        ("push", 2, VARIADIC, "Array.push(array, data...)", push),
        ("unshift", 2, VARIADIC, "Array.unshift(array, data...)", unshift),
        ("pop", 1, 1, "Array.pop(array)", pop),
        ("shift", 1, 1, "Array.shift(array)", shift),
        (
            "slice",
            1,
            3,
            "Array.slice(array, start = 0, end = Array.sizeOf(array))",
            slice,
        ),
        ("insert", 3, VARIADIC, "Array.insert(array, index, data...)", insert),
        ("remove", 2, 3, "Array.remove(array, index, count = 1)", remove),
        ("clear", 1, 1, "Array.clear(array)", clear),
        ("flat", 1, 2, "Array.flat(arrays, depth = 1)", flat),
        ("unpack", 2, 3, "Array.unpack(array, names, loose = false)", unpack),
        ("indexOf", 2, 2, "Array.indexOf(array, value)", index_of),
        ("lastIndexOf", 2, 2, "Array.lastIndexOf(array, value)", last_index_of),
        ("includes", 2, 2, "Array.includes(array, value)", includes),
        ("sort", 1, 2, "Array.sort(array, compareFn?)", sort),
    ]
}

fn create(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let Some(size) = args.first() else {
        return Ok(Value::array(Vec::new()));
    };
    let size = expect_number(size, "a number as array size")?;
    if !(0.0..=MAX_SIZE).contains(&size) || size.fract() != 0.0 {
        return Err(range_error("invalid array size"));
    }
    #[expect(clippy::cast_sign_loss, reason = "size is a non-negative integer")]
    let size = size as usize;
    Ok(Value::array(filled(size, &arg(&args, 1))?))
}

/// `size` copies of `init`, failing with a `RangeError` when the memory
/// cannot be reserved.
pub(super) fn filled(size: usize, init: &Value) -> EvalResult<Vec<Value>> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(size)
        .map_err(|_| range_error(format!("cannot allocate an array of size {size}")))?;
    items.resize(size, init.clone());
    Ok(items)
}

fn clone(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to clone")?;
    let copy = items.borrow().clone();
    Ok(Value::array(copy))
}

fn size_of(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array")?;
    let len = items.borrow().len();
    Ok(Value::Number(len as f64))
}

fn set(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to modify")?;
    let index = expect_number(&args[1], "a number as index")?;
    let mut items = items.borrow_mut();
    let i = normalize_index(index, items.len(), false)?;
    items[i] = args[2].clone();
    Ok(Value::Null)
}

fn push(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to modify")?;
    items.borrow_mut().extend_from_slice(&args[1..]);
    Ok(Value::Null)
}

/// Prepends the data as one block, keeping argument order.
fn unshift(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to modify")?;
    items.borrow_mut().splice(0..0, args[1..].iter().cloned());
    Ok(Value::Null)
}

fn pop(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to modify")?;
    let last = items.borrow_mut().pop();
    Ok(last.unwrap_or_default())
}

fn shift(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to modify")?;
    let mut items = items.borrow_mut();
    if items.is_empty() {
        return Ok(Value::Null);
    }
    Ok(items.remove(0))
}

fn slice(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array as source")?;
    let items = items.borrow();
    let (start, end) = slice_bounds(&args, items.len())?;
    Ok(Value::array(items[start..end.max(start)].to_vec()))
}

/// Resolve optional `start`/`end` arguments (positions 1 and 2) of a slice.
pub(super) fn slice_bounds(args: &[Value], len: usize) -> EvalResult<(usize, usize)> {
    let start = match args.get(1) {
        Some(start) => relative_index(expect_number(start, "a number as begin index")?, len),
        None => 0,
    };
    let end = match args.get(2) {
        Some(end) => relative_index(expect_number(end, "a number as end index")?, len),
        None => len,
    };
    Ok((start, end))
}

fn insert(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to operate on")?;
    let index = expect_number(&args[1], "a number as start index")?;
    let mut items = items.borrow_mut();
    let i = normalize_index(index, items.len(), true)?;
    items.splice(i..i, args[2..].iter().cloned());
    Ok(Value::Null)
}

fn remove(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array as the first argument")?;
    let index = expect_number(&args[1], "a number as start index")?;
    let count = match args.get(2) {
        Some(count) => expect_number(count, "a number as removing count")?,
        None => 1.0,
    };
    if count.is_nan() || count < 0.0 {
        return Err(range_error("invalid removing count"));
    }
    let mut items = items.borrow_mut();
    let start = normalize_index(index, items.len(), false)?;
    let available = items.len() - start;
    #[expect(clippy::cast_sign_loss, reason = "count is non-negative")]
    let end = if count >= available as f64 {
        items.len()
    } else {
        start + count as usize
    };
    items.drain(start..end);
    Ok(Value::Null)
}

fn clear(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to operate on")?;
    items.borrow_mut().clear();
    Ok(Value::Null)
}

/// Flatten nested arrays up to `depth` levels into a new array.
///
/// Each level counts against the interpreter's depth limit.
fn flat(interp: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to flat")?;
    let depth = match args.get(1) {
        Some(depth) => expect_number(depth, "a number as depth")?,
        None => 1.0,
    };
    if depth.is_nan() || depth <= 0.0 {
        return Err(range_error("invalid depth"));
    }
    let mut out = Vec::new();
    let mut ancestors = vec![items.clone()];
    flatten_into(interp, &items.borrow(), depth, &mut ancestors, &mut out)?;
    Ok(Value::array(out))
}

fn flatten_into(
    interp: &mut Interpreter,
    items: &[Value],
    depth: f64,
    ancestors: &mut Vec<Shared<Vec<Value>>>,
    out: &mut Vec<Value>,
) -> EvalResult<()> {
    for item in items {
        match item {
            Value::Array(inner) if depth >= 1.0 => {
                if ancestors.iter().any(|seen| seen.ptr_eq(inner)) {
                    return Err(range_error("cannot flatten an array containing itself"));
                }
                ancestors.push(inner.clone());
                interp.enter(|interp| {
                    flatten_into(interp, &inner.borrow(), depth - 1.0, ancestors, out)
                })?;
                ancestors.pop();
            }
            other => out.push(other.clone()),
        }
    }
    Ok(())
}

/// Assign array elements to the named variables, in order.
///
/// Strict mode requires at least as many elements as names; loose mode
/// binds missing ones to `null`.
fn unpack(interp: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to unpack")?;
    let names = expect_array(&args[1], "an array of strings as variable names")?;
    let loose = match args.get(2) {
        Some(loose) => expect_bool(loose, "a boolean as loose option")?,
        None => false,
    };
    let names = names.borrow().clone();
    let names = names
        .iter()
        .map(|name| expect_str(name, "strings as variable names").map(str::to_string))
        .collect::<EvalResult<Vec<_>>>()?;
    let values = items.borrow().clone();
    if !loose && names.len() > values.len() {
        return Err(range_error("not enough values in the given array"));
    }
    for (i, name) in names.iter().enumerate() {
        interp.assign(name, arg(&values, i));
    }
    Ok(Value::Null)
}

fn index_of(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to search in")?;
    let found = items.borrow().iter().position(|item| *item == args[1]);
    Ok(position_value(found))
}

fn last_index_of(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to search in")?;
    let found = items.borrow().iter().rposition(|item| *item == args[1]);
    Ok(position_value(found))
}

fn position_value(found: Option<usize>) -> Value {
    Value::Number(found.map_or(-1.0, |i| i as f64))
}

/// Like `indexOf`, except that `NaN` is found.
fn includes(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let items = expect_array(&args[0], "an array to check")?;
    let needle = &args[1];
    let is_nan = |value: &Value| value.as_number().is_some_and(f64::is_nan);
    let found = items
        .borrow()
        .iter()
        .any(|item| item == needle || (is_nan(item) && is_nan(needle)));
    Ok(Value::Bool(found))
}

/// Stable in-place sort; returns the array.
///
/// With `compareFn(a, b)`, `a` goes after `b` when the result is positive.
/// Without it, numbers sort numerically, strings lexically, and anything
/// else by its display form.
fn sort(interp: &mut Interpreter, args: Vec<Value>, referrer: &Term) -> EvalResult {
    let array = expect_array(&args[0], "an array as the first argument")?;
    let compare = match args.get(1) {
        Some(compare @ Value::Function(_)) => Some(compare),
        Some(other) => return Err(expected("a function as the second argument", other)),
        None => None,
    };
    // Work on a copy; the comparator may read the array.
    let mut items = array.borrow().clone();
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 {
            let order = match compare {
                Some(compare) => {
                    let result = interp.apply(
                        compare,
                        vec![items[j - 1].clone(), items[j].clone()],
                        referrer,
                    )?;
                    let result = expect_number(&result, "a number from compareFn")?;
                    result.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
                }
                None => default_order(&items[j - 1], &items[j]),
            };
            if order != Ordering::Greater {
                break;
            }
            items.swap(j - 1, j);
            j -= 1;
        }
    }
    *array.borrow_mut() = items;
    Ok(args[0].clone())
}

fn default_order(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        _ => a.to_string().cmp(&b.to_string()),
    }
}
