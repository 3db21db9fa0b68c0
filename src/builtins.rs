//! Name based access to the members of the `Math` object, for the
//! interpreter's property lookup.

use crate::error::MathError;
use crate::{consts, reduce};

/// A member of the `Math` object.
#[derive(Debug, Clone, Copy)]
pub enum Member {
    Constant(f64),
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
    Ternary(fn(f64, f64, f64) -> f64),
    /// Takes any number of arguments.
    Variadic(fn(&[f64]) -> f64),
}

impl Member {
    /// Number of declared parameters, `None` for constants and variadic members.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Member::Constant(_) | Member::Variadic(_) => None,
            Member::Unary(_) => Some(1),
            Member::Binary(_) => Some(2),
            Member::Ternary(_) => Some(3),
        }
    }
}

fn min_of(args: &[f64]) -> f64 {
    reduce::min(args.iter().copied())
}

fn max_of(args: &[f64]) -> f64 {
    reduce::max(args.iter().copied())
}

/// Resolves a member by its JavaScript name.
///
/// Members that are compiled out of this build, like `atan2` in a
/// size-optimized build, resolve to `None`. `random` needs a generator and is
/// not reachable by name.
pub fn lookup(name: &str) -> Option<Member> {
    let member = match name {
        "E" => Member::Constant(consts::E),
        "PI" => Member::Constant(consts::PI),
        "LN2" => Member::Constant(consts::LN2),
        "LN10" => Member::Constant(consts::LN10),
        "LOG2E" => Member::Constant(consts::LOG2E),
        "LOG10E" => Member::Constant(consts::LOG10E),
        "SQRT2" => Member::Constant(consts::SQRT2),
        "SQRT1_2" => Member::Constant(consts::SQRT1_2),

        "abs" => Member::Unary(crate::abs),
        "acos" => Member::Unary(crate::acos),
        "asin" => Member::Unary(crate::asin),
        "atan" => Member::Unary(crate::atan),
        #[cfg(not(feature = "size-optimized"))]
        "atan2" => Member::Binary(crate::atan2),
        "ceil" => Member::Unary(crate::ceil),
        "cos" => Member::Unary(crate::cos),
        "exp" => Member::Unary(crate::exp),
        "floor" => Member::Unary(crate::floor),
        "log" => Member::Unary(crate::log),
        "pow" => Member::Binary(crate::pow),
        "round" => Member::Unary(crate::round),
        "sin" => Member::Unary(crate::sin),
        "sqrt" => Member::Unary(crate::sqrt),
        "tan" => Member::Unary(crate::tan),
        "clip" => Member::Ternary(crate::clip),
        "wrap" => Member::Binary(crate::wrap),
        "min" => Member::Variadic(min_of),
        "max" => Member::Variadic(max_of),
        _ => return None,
    };
    Some(member)
}

fn resolve(name: &str) -> Result<Member, MathError> {
    lookup(name).ok_or_else(|| {
        warn!("[MATH] Unknown member: {}", name);
        MathError::UnknownMember
    })
}

/// Calls the function named `name`.
///
/// Missing arguments read as NaN, the way the interpreter converts
/// `undefined`, and extra arguments are ignored.
pub fn call(name: &str, args: &[f64]) -> Result<f64, MathError> {
    let arg = |i: usize| args.get(i).copied().unwrap_or(f64::NAN);

    let result = match resolve(name)? {
        Member::Constant(_) => return Err(MathError::NotAFunction),
        Member::Unary(f) => f(arg(0)),
        Member::Binary(f) => f(arg(0), arg(1)),
        Member::Ternary(f) => f(arg(0), arg(1), arg(2)),
        Member::Variadic(f) => f(args),
    };

    trace!("[MATH] {}() with {} argument(s)", name, args.len());
    Ok(result)
}

/// Reads the constant named `name`.
pub fn constant(name: &str) -> Result<f64, MathError> {
    match resolve(name)? {
        Member::Constant(value) => Ok(value),
        _ => {
            debug!("[MATH] {} is not a constant", name);
            Err(MathError::NotAConstant)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn calls_by_name() {
        assert_eq!(call("pow", &[2.0, 10.0]), Ok(1024.0));
        assert_eq!(call("clip", &[11.0, 0.0, 10.0]), Ok(10.0));
        assert_eq!(call("wrap", &[-10.0, 360.0]), Ok(350.0));
        assert_eq!(call("round", &[2.5]), Ok(3.0));
        assert_eq!(call("max", &[1.0, 5.0, 3.0]), Ok(5.0));
        assert_eq!(call("min", &[]), Ok(f64::INFINITY));
        assert_eq!(call("abs", &[-4.0]), Ok(4.0));
    }

    #[test]
    fn missing_arguments_are_nan() {
        assert!(call("sin", &[]).unwrap().is_nan());
        assert!(call("pow", &[2.0]).unwrap().is_nan());
        assert_eq!(call("pow", &[2.0, 3.0, 99.0]), Ok(8.0));
    }

    #[test]
    fn variadic_nan_dominates() {
        assert!(call("min", &[1.0, f64::NAN, 2.0]).unwrap().is_nan());
        assert!(call("max", &[1.0, f64::NAN, 2.0]).unwrap().is_nan());
    }

    #[test]
    fn constants() {
        assert_eq!(constant("PI"), Ok(core::f64::consts::PI));
        assert_eq!(constant("SQRT1_2"), Ok(0.7071067811865476));
        assert_eq!(constant("sin"), Err(MathError::NotAConstant));
        assert_eq!(call("PI", &[]), Err(MathError::NotAFunction));
    }

    #[test]
    fn unknown_members() {
        assert!(lookup("hypot").is_none());
        assert!(lookup("random").is_none());
        assert_eq!(call("Sin", &[1.0]), Err(MathError::UnknownMember));
        assert_eq!(constant("TAU"), Err(MathError::UnknownMember));
    }

    #[test]
    fn arity() {
        assert_eq!(lookup("sin").and_then(|m| m.arity()), Some(1));
        assert_eq!(lookup("pow").and_then(|m| m.arity()), Some(2));
        assert_eq!(lookup("clip").and_then(|m| m.arity()), Some(3));
        assert_eq!(lookup("max").and_then(|m| m.arity()), None);
        assert_eq!(lookup("E").and_then(|m| m.arity()), None);
    }

    #[test]
    fn atan2_follows_build_configuration() {
        assert_eq!(lookup("atan2").is_some(), cfg!(not(feature = "size-optimized")));
    }
}
