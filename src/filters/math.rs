//! Math filters.
//!
//! Every filter in this module is registered with input coercion, so the
//! piped value and the argument may arrive as text. Validation failures name
//! the received value and its type.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::{fmt, Error, Library, Number, Result, Value};

pub(crate) fn register(library: &mut Library<'_>) {
    library.add_numeric_filter(
        "ceil",
        "Return the ceiling of x, the smallest integer greater than or equal to x.",
        ceil,
    );
    library.add_numeric_filter(
        "floor",
        "Return the floor of x, the largest integer less than or equal to x.",
        floor,
    );
    library.add_numeric_filter(
        "trunc",
        "Return x truncated toward zero to an integer.",
        trunc,
    );
    library.add_numeric_filter("abs", "Return the absolute value of x.", abs);
    library.add_numeric_filter(
        "copysign",
        "Return a float with the magnitude of x but the sign of y.",
        copysign,
    );
    library.add_numeric_filter("factorial", "Return x factorial as an integer.", factorial);
    library.add_numeric_filter(
        "fmod",
        "Return fmod(x, y) as defined by the platform C library. Use mod for the sign of the divisor.",
        fmod,
    );
    library.add_numeric_filter(
        "mod",
        "Return x modulo y, where the result has the sign of y.",
        modulo,
    );
    library.add_numeric_filter(
        "fsum",
        "Return an accurate floating point sum of the values in a list.",
        fsum,
    );
    library.add_numeric_filter("sum", "Return the sum of the values in a list.", sum_filter);
    library.add_numeric_filter(
        "gcd",
        "Return the greatest common divisor of the integers x and y.",
        gcd,
    );
    library.add_numeric_filter(
        "lcm",
        "Return the least common multiple of the integers x and y.",
        lcm,
    );
    library.add_numeric_filter(
        "isqrt",
        "Return the integer square root of the non-negative integer x.",
        isqrt,
    );
    library.add_numeric_filter("sqrt", "Return the square root of x.", sqrt);
    library.add_numeric_filter("ldexp", "Return x * (2 ** y).", ldexp);
    library.add_numeric_filter(
        "perm",
        "Return the number of ways to choose y items from x items without repetition and with order.",
        perm,
    );
    library.add_numeric_filter("exp", "Return e raised to the power x.", exp);
    library.add_numeric_filter("expm1", "Return e raised to the power x, minus 1.", expm1);
    library.add_numeric_filter(
        "log",
        "Return the logarithm of x with base y (defaults to e).",
        log,
    );
    library.add_numeric_filter("log1p", "Return the natural logarithm of 1 + x.", log1p);
    library.add_numeric_filter("log2", "Return the base-2 logarithm of x.", log2);
    library.add_numeric_filter("log10", "Return the base-10 logarithm of x.", log10);
    library.add_numeric_filter("pow", "Return x raised to the power y.", pow);
}

////////////////////////////////////////////////////////////////////////////////
// Rounding
////////////////////////////////////////////////////////////////////////////////

/// Returns the smallest integer greater than or equal to `x`.
pub fn ceil(x: Number) -> Result<i64> {
    match x {
        Number::Integer(i) => Ok(i),
        Number::Float(f) => float_to_int(f.ceil()),
        Number::Decimal(d) => decimal_to_int(d.ceil()),
    }
}

/// Returns the largest integer less than or equal to `x`.
pub fn floor(x: Number) -> Result<i64> {
    match x {
        Number::Integer(i) => Ok(i),
        Number::Float(f) => float_to_int(f.floor()),
        Number::Decimal(d) => decimal_to_int(d.floor()),
    }
}

/// Returns `x` truncated toward zero.
pub fn trunc(x: Number) -> Result<i64> {
    match x {
        Number::Integer(i) => Ok(i),
        Number::Float(f) => float_to_int(f.trunc()),
        Number::Decimal(d) => decimal_to_int(d.trunc()),
    }
}

fn float_to_int(f: f64) -> Result<i64> {
    if f.is_nan() {
        return Err(Error::math("cannot convert float nan to integer"));
    }
    if f.is_infinite() {
        return Err(Error::math("cannot convert float infinity to integer"));
    }
    // i64::MAX is not representable, 2^63 is the first float out of range
    if f < -9_223_372_036_854_775_808.0 || f >= 9_223_372_036_854_775_808.0 {
        return Err(Error::math(format!("integer overflow converting {}", Number::Float(f))));
    }
    Ok(f as i64)
}

fn decimal_to_int(d: Decimal) -> Result<i64> {
    d.to_i64()
        .ok_or_else(|| Error::math(format!("integer overflow converting {}", d)))
}

////////////////////////////////////////////////////////////////////////////////
// Sign and magnitude
////////////////////////////////////////////////////////////////////////////////

/// Returns the absolute value of `x` as a float.
pub fn abs(x: f64) -> f64 {
    x.abs()
}

/// Returns a float with the magnitude of `x` but the sign of `y`.
pub fn copysign(x: f64, y: f64) -> f64 {
    tracing::info!(%x, %y, "copysign operands");
    x.copysign(y)
}

////////////////////////////////////////////////////////////////////////////////
// Integer arithmetic
////////////////////////////////////////////////////////////////////////////////

/// Returns `x!`.
pub fn factorial(x: Number) -> Result<i64> {
    let n = x
        .as_integer()
        .ok_or_else(|| Error::type_(format!("factorial expected integer, found {}", x.human())))?;
    if n < 0 {
        return Err(Error::math("factorial not defined for negative values"));
    }
    (2..=n).try_fold(1i64, |acc, i| {
        acc.checked_mul(i)
            .ok_or_else(|| Error::math(format!("factorial of {} does not fit in an integer", n)))
    })
}

/// Returns the greatest common divisor of the integers `x` and `y`.
pub fn gcd(x: Value, y: Value) -> Result<i64> {
    match (as_int(&x), as_int(&y)) {
        (Some(a), Some(b)) => {
            let g = gcd_u64(a.unsigned_abs(), b.unsigned_abs());
            i64::try_from(g).map_err(|_| Error::math("gcd does not fit in an integer"))
        }
        _ => Err(Error::validation(format!(
            "Greatest common divisor (GCD) can only be calculated on integers. Received {} and {}",
            describe(&x),
            describe(&y)
        ))),
    }
}

/// Returns the least common multiple of the integers `x` and `y`.
pub fn lcm(x: Value, y: Value) -> Result<i64> {
    match (as_int(&x), as_int(&y)) {
        (Some(0), Some(_)) | (Some(_), Some(0)) => Ok(0),
        (Some(a), Some(b)) => {
            let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
            (a / gcd_u64(a, b))
                .checked_mul(b)
                .and_then(|l| i64::try_from(l).ok())
                .ok_or_else(|| Error::math("lcm does not fit in an integer"))
        }
        _ => Err(Error::validation(format!(
            "Least common multiple (LCM) can only be calculated on integers. Received {} and {}",
            describe(&x),
            describe(&y)
        ))),
    }
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Returns the integer square root of the non-negative integer `x`.
pub fn isqrt(x: Value) -> Result<i64> {
    let n = as_int(&x).ok_or_else(|| {
        Error::validation(format!("Expected integer. Received {}.", describe(&x)))
    })?;
    if n < 0 {
        return Err(Error::validation(format!(
            "Expected non-negative integer. Received {}.",
            n
        )));
    }
    Ok(isqrt_u64(n as u64) as i64)
}

fn isqrt_u64(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    // correct the float estimate in either direction
    while u128::from(r) * u128::from(r) > u128::from(n) {
        r -= 1;
    }
    while u128::from(r + 1) * u128::from(r + 1) <= u128::from(n) {
        r += 1;
    }
    r
}

/// Returns the number of ways to choose `k` items from `n` items without
/// repetition and with order. Without `k` this is `n!`.
pub fn perm(n: Value, k: Option<Value>) -> Result<i64> {
    let (n, k) = match (as_int(&n), k.as_ref().map(as_int)) {
        (Some(n), None) => (n, None),
        (Some(n), Some(Some(k))) => (n, Some(k)),
        _ => {
            let k = k.unwrap_or_default();
            return Err(Error::validation(format!(
                "Expected integers. Received {} and {}",
                describe(&n),
                describe(&k)
            )));
        }
    };
    if n < 0 {
        return Err(Error::math("n must be a non-negative integer"));
    }
    let k = match k {
        Some(k) if k < 0 => return Err(Error::math("k must be a non-negative integer")),
        Some(k) => k,
        None => return factorial(Number::Integer(n)),
    };
    if k > n {
        return Ok(0);
    }
    ((n - k)..n).try_fold(1i64, |acc, i| {
        acc.checked_mul(i + 1)
            .ok_or_else(|| Error::math("perm does not fit in an integer"))
    })
}

////////////////////////////////////////////////////////////////////////////////
// Modulo and sums
////////////////////////////////////////////////////////////////////////////////

/// Returns `fmod(x, y)` as defined by the platform C library.
///
/// The result has the sign of `x`. See [`modulo`] for a result with the sign
/// of `y`.
pub fn fmod(x: f64, y: f64) -> Result<f64> {
    checked(x % y, &[x, y])
}

/// Returns `x` modulo `y` where the result has the sign of the divisor.
///
/// Decimal operands keep the sign of the dividend, as decimal arithmetic
/// does.
pub fn modulo(x: Number, y: Number) -> Result<Number> {
    match (x, y) {
        (Number::Integer(_), Number::Integer(0)) => Err(Error::math("integer modulo by zero")),
        (Number::Integer(a), Number::Integer(b)) => {
            let mut r = a.wrapping_rem(b);
            if r != 0 && ((r < 0) != (b < 0)) {
                r += b;
            }
            Ok(Number::Integer(r))
        }
        (Number::Decimal(_), Number::Float(_)) | (Number::Float(_), Number::Decimal(_)) => {
            Err(unsupported_operands("%", &x, &y))
        }
        (Number::Decimal(_), _) | (_, Number::Decimal(_)) => {
            let (a, b) = (to_decimal(x), to_decimal(y));
            match (a, b) {
                (Some(a), Some(b)) => a
                    .checked_rem(b)
                    .map(Number::Decimal)
                    .ok_or_else(|| Error::math("decimal modulo by zero")),
                _ => Err(unsupported_operands("%", &x, &y)),
            }
        }
        _ => {
            let (a, b) = (x.as_f64(), y.as_f64());
            if b == 0.0 {
                return Err(Error::math("float modulo by zero"));
            }
            let mut r = a % b;
            if r != 0.0 {
                if (b < 0.0) != (r < 0.0) {
                    r += b;
                }
            } else {
                r = 0.0f64.copysign(b);
            }
            Ok(Number::Float(r))
        }
    }
}

/// Returns an accurate floating point sum of the values.
///
/// Tracks multiple intermediate partial sums so that no precision is lost.
pub fn fsum(values: Vec<Number>) -> Result<f64> {
    let mut partials: Vec<f64> = Vec::new();
    let mut special_sum = 0.0;
    let mut inf_sum = 0.0;

    for value in &values {
        let mut x = value.as_f64();
        let xsave = x;
        let mut i = 0;
        for j in 0..partials.len() {
            let mut y = partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                partials[i] = lo;
                i += 1;
            }
            x = hi;
        }
        partials.truncate(i);

        if x != 0.0 {
            if !x.is_finite() {
                // a non-finite sum of finite values overflowed
                if xsave.is_finite() {
                    return Err(Error::math("intermediate overflow in fsum"));
                }
                if xsave.is_infinite() {
                    inf_sum += xsave;
                }
                special_sum += xsave;
                partials.clear();
            } else {
                partials.push(x);
            }
        }
    }

    if special_sum != 0.0 {
        if f64::is_nan(inf_sum) {
            return Err(Error::math("-inf + inf in fsum"));
        }
        return Ok(special_sum);
    }

    let mut hi = 0.0;
    if let Some(last) = partials.pop() {
        hi = last;
        let mut lo = 0.0;
        while let Some(y) = partials.pop() {
            let x = hi;
            hi = x + y;
            lo = y - (hi - x);
            if lo != 0.0 {
                break;
            }
        }
        // round half-even correction when the remaining partials agree in sign
        if let Some(&next) = partials.last() {
            if (lo < 0.0 && next < 0.0) || (lo > 0.0 && next > 0.0) {
                let y = lo * 2.0;
                let x = hi + y;
                if y == x - hi {
                    hi = x;
                }
            }
        }
    }
    Ok(hi)
}

/// Returns the sum of the values.
///
/// Integers stay integers, a float anywhere makes the result a float, and
/// decimals combine with integers into a decimal.
pub fn sum_filter(values: Vec<Number>) -> Result<Number> {
    values.into_iter().try_fold(Number::Integer(0), add)
}

fn add(x: Number, y: Number) -> Result<Number> {
    match (x, y) {
        (Number::Integer(a), Number::Integer(b)) => a
            .checked_add(b)
            .map(Number::Integer)
            .ok_or_else(|| Error::math("integer overflow in sum")),
        (Number::Decimal(_), Number::Float(_)) | (Number::Float(_), Number::Decimal(_)) => {
            Err(unsupported_operands("+", &x, &y))
        }
        (Number::Decimal(_), _) | (_, Number::Decimal(_)) => match (to_decimal(x), to_decimal(y)) {
            (Some(a), Some(b)) => a
                .checked_add(b)
                .map(Number::Decimal)
                .ok_or_else(|| Error::math("decimal overflow in sum")),
            _ => Err(unsupported_operands("+", &x, &y)),
        },
        _ => Ok(Number::Float(x.as_f64() + y.as_f64())),
    }
}

fn to_decimal(n: Number) -> Option<Decimal> {
    match n {
        Number::Integer(i) => Some(Decimal::from(i)),
        Number::Decimal(d) => Some(d),
        Number::Float(_) => None,
    }
}

fn unsupported_operands(op: &str, x: &Number, y: &Number) -> Error {
    Error::type_(format!(
        "unsupported operand types for {}: {} and {}",
        op,
        x.human(),
        y.human()
    ))
}

////////////////////////////////////////////////////////////////////////////////
// Powers and logarithms
////////////////////////////////////////////////////////////////////////////////

/// Returns the square root of `x`.
pub fn sqrt(x: Number) -> Result<f64> {
    if x.is_negative() {
        return Err(Error::validation(format!(
            "Expected non-negative number. Received {}.",
            x
        )));
    }
    let f = x.as_f64();
    checked(f.sqrt(), &[f])
}

/// Returns `x * (2 ** i)`.
pub fn ldexp(x: f64, i: Number) -> Result<f64> {
    let i = i
        .as_integer()
        .ok_or_else(|| Error::type_("Expected an integer as second argument to ldexp."))?;
    // anything outside i32 already saturates to zero or infinity
    let n = i.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    checked(libm::ldexp(x, n), &[x])
}

/// Returns `e ** x`.
pub fn exp(x: f64) -> Result<f64> {
    checked(x.exp(), &[x])
}

/// Returns `e ** x - 1`.
pub fn expm1(x: f64) -> Result<f64> {
    checked(x.exp_m1(), &[x])
}

/// Returns the logarithm of `x` with the given base, which defaults to `e`.
pub fn log(x: Number, base: Option<Number>) -> Result<f64> {
    ensure_positive(&x)?;
    if let Some(base) = &base {
        ensure_positive(base)?;
    }
    let f = x.as_f64();
    let num = checked(f.ln(), &[f])?;
    match base {
        None => Ok(num),
        Some(base) => {
            let b = base.as_f64();
            let den = checked(b.ln(), &[b])?;
            if den == 0.0 {
                return Err(Error::math("float division by zero"));
            }
            Ok(num / den)
        }
    }
}

/// Returns the natural logarithm of `1 + x`.
///
/// Only positive values are accepted.
pub fn log1p(x: Number) -> Result<f64> {
    ensure_positive(&x)?;
    let f = x.as_f64();
    checked(f.ln_1p(), &[f])
}

/// Returns the base-2 logarithm of `x`.
pub fn log2(x: Number) -> Result<f64> {
    ensure_positive(&x)?;
    let f = x.as_f64();
    checked(f.log2(), &[f])
}

/// Returns the base-10 logarithm of `x`.
pub fn log10(x: Number) -> Result<f64> {
    ensure_positive(&x)?;
    let f = x.as_f64();
    checked(f.log10(), &[f])
}

/// Returns `x ** y`.
///
/// If the base is not positive the exponent must be an integer.
pub fn pow(x: Number, y: Number) -> Result<f64> {
    if x.is_non_positive() && !y.is_integer() {
        return Err(Error::validation(format!(
            "Exponent must be an integer if the base is not positive. Received base {} with exponent {}.",
            x, y
        )));
    }
    let (fx, fy) = (x.as_f64(), y.as_f64());
    if fx == 0.0 && fy < 0.0 {
        return Err(Error::math("math domain error"));
    }
    checked(fx.powf(fy), &[fx, fy])
}

fn ensure_positive(x: &Number) -> Result<()> {
    if x.is_non_positive() {
        return Err(Error::validation(format!(
            "Expected positive value. Received {}.",
            x
        )));
    }
    Ok(())
}

/// Maps platform float results onto errors: a NaN produced from non-NaN
/// inputs is a domain error and an infinity produced from finite inputs is a
/// range error.
fn checked(r: f64, inputs: &[f64]) -> Result<f64> {
    if r.is_nan() && !inputs.iter().any(|x| x.is_nan()) {
        return Err(Error::math("math domain error"));
    }
    if r.is_infinite() && inputs.iter().all(|x| x.is_finite()) {
        return Err(Error::math("math range error"));
    }
    Ok(r)
}

/// Returns the integer held by a value, booleans included.
fn as_int(v: &Value) -> Option<i64> {
    v.as_number().and_then(|n| n.as_integer())
}

/// Names a received value and its type for validation messages.
fn describe(v: &Value) -> String {
    let shown = match v.as_number() {
        Some(n) => n.to_string(),
        None if v.is_none() => String::from("none"),
        None => fmt::to_string(v).unwrap_or_else(|_| String::from(v.human())),
    };
    format!("[{}] {}", v.human(), shown)
}
