#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rewrite rule that was applied while normalizing an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `a|1 = 1`
    /// `1|a = 1`
    OrOne,

    /// `a|0 = a`
    /// `0|a = a`
    OrZero,

    /// `a&1 = a`
    /// `1&a = a`
    AndOne,

    /// `a&0 = 0`
    /// `0&a = 0`
    AndZero,

    /// `a*0 = 0`
    /// `0*a = 0`
    MultiplyZero,

    /// `a*1 = a`
    /// `1*a = a`
    MultiplyOne,

    /// `a/1 = a`
    DivideOne,

    /// `a/0 = undef(a)`
    DivideZero,

    /// `Infinity = inf()`
    Infinity,

    /// `if_func(0, a, b) = b`
    IfFalse,

    /// `if_func(1, a, b) = a`
    IfTrue,

    /// `if_func(c, a, a) = a`
    IfSameBranches,

    /// `if_func(c, if_func(c, a, b), d) = if_func(c, a, d)`
    IfNestedCondition,

    /// `if_func(a==0, b, if_func(a, c, d)) = if_func(a, c, b)`
    IfInvertedEquality,

    /// `if_func(c, 1, 0) = c`
    IfCondition,

    /// `point(a, b) + point(c, d) = point(a+c, b+d)`
    AddPoints,

    /// `0*point(a, b) = point(0, 0)`, and multiplication / division of a point by `1`.
    ScalePoint,

    /// `pow(pow(a, b), c) = pow(a, b*c)`
    PowerOfPower,

    /// `a-+b = a-b`
    /// `a+-b = a-b`
    /// `a--b = a+b`
    /// `a++b = a+b`
    CollapseSigns,

    /// Evaluates an operation on two number literals.
    FoldConstants,

    /// `a+0 = a`
    /// `0+a = a`
    /// `a-0 = a`
    AddZero,

    /// `0-a = -a`
    SubtractFromZero,

    /// `0/a = 0`
    DivideIntoZero,

    /// `a^1 = a`
    PowerOne,

    /// `a^0 = 1`
    PowerZero,

    /// `--a = a`
    /// `+a = a`
    RedundantUnary,
}
