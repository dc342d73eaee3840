//! Functions with their own layout, independent of the builtin catalog.
//!
//! [`Func`] layouts apply in both modes. [`TexFunc`] layouts override them in typeset mode, and
//! cover a few builtins that have a conventional typeset form.

use crate::{error::RenderError, node::Node};
use super::Renderer;

/// Declares an enum of layout functions, each with the name it is called by and the minimum
/// number of arguments its layout reads.
macro_rules! layout_functions {
    ($(#[$attr:meta])* $vis:vis enum $name:ident { $($variant:ident => ($fn_name:literal, $arity:literal)),+ $(,)? }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            /// Every function of this kind.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the function called by the given name, if any.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($fn_name => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Returns the name this function is called by.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $fn_name),+
                }
            }

            /// Returns the minimum number of arguments the layout of this function reads.
            pub fn arity(self) -> usize {
                match self {
                    $($name::$variant => $arity),+
                }
            }
        }
    };
}

layout_functions! {
    /// Functions laid out the same way in both output modes.
    pub enum Func {
        Sum => ("sum", 4),
        Prod => ("prod", 4),
        Int => ("int", 4),
        Div => ("div", 2),
        Sqrt => ("sqrt", 1),
        Pow => ("pow", 2),
        Pi => ("pi", 0),
        Inf => ("inf", 0),
        Undef => ("undef", 1),
        Point => ("point", 0),
        Array => ("array", 0),
        PointX => ("point_x", 1),
        PointY => ("point_y", 1),
        ArrayIdx => ("array_idx", 2),
        ArrayLength => ("array_length", 1),
        ArrayFilter => ("array_filter", 2),
        ArrayMap => ("array_map", 3),
        Range => ("range", 2),
        Equal => ("equal", 2),
        NotEqual => ("notEqual", 2),
        Lt => ("lt", 2),
        Lte => ("lte", 2),
        Gt => ("gt", 2),
        Gte => ("gte", 2),
        IfFunc => ("if_func", 3),
        LogBase => ("log_base", 2),
    }
}

layout_functions! {
    /// Functions with a dedicated layout in typeset mode.
    pub enum TexFunc {
        Sum => ("sum", 4),
        Prod => ("prod", 4),
        Int => ("int", 4),
        Div => ("div", 2),
        Mod => ("mod", 2),
        Abs => ("abs", 1),
        Floor => ("floor", 1),
        Ceil => ("ceil", 1),
        Point => ("point", 0),
        Array => ("array", 0),
        ArrayIdx => ("array_idx", 2),
        ArrayFilter => ("array_filter", 2),
        ArrayMap => ("array_map", 3),
        Range => ("range", 2),
        Equal => ("equal", 2),
        NotEqual => ("notEqual", 2),
        Lt => ("lt", 2),
        Lte => ("lte", 2),
        Gt => ("gt", 2),
        Gte => ("gte", 2),
        LogBase => ("log_base", 2),
    }
}

/// A relational function, laid out the same way in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Equal,
    NotEqual,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl Relation {
    /// Returns the piecewise layout of the relation between the two rendered operands.
    fn layout(self, a: &str, b: &str) -> String {
        let symbol = match self {
            Relation::Equal | Relation::NotEqual => "=",
            Relation::Lt => "<",
            Relation::Lte => "\\le ",
            Relation::Gt => ">",
            Relation::Gte => "\\ge ",
        };

        if self == Relation::NotEqual {
            format!("\\left\\{{{}{}{}:0,1\\right\\}}", a, symbol, b)
        } else {
            format!("\\left\\{{{}{}{},0\\right\\}}", a, symbol, b)
        }
    }
}

impl Renderer<'_> {
    /// Returns the arguments of the call if there are at least as many as the layout reads.
    fn expect_args<'n>(
        &self,
        name: &str,
        args: &'n [Node],
        expected: usize,
    ) -> Result<&'n [Node], RenderError> {
        if args.len() < expected {
            return Err(RenderError::new(name, crate::error::kind::ArgumentCount {
                name: name.to_owned(),
                expected,
                given: args.len(),
            }));
        }

        Ok(args)
    }

    /// Renders each argument and joins them with the separator.
    pub(super) fn render_args(&self, args: &[Node], separator: &str) -> Result<String, RenderError> {
        Ok(args.iter()
            .map(|arg| self.render(arg))
            .collect::<Result<Vec<_>, _>>()?
            .join(separator))
    }

    /// Renders the body of a calculus layout. The body is grouped unless it is itself a calculus
    /// layout.
    fn calculus_body(&self, body: &Node) -> Result<String, RenderError> {
        let text = self.render(body)?;
        if ["sum", "prod", "int", "div"].iter().any(|name| body.is_call(name)) {
            Ok(text)
        } else {
            Ok(format!("\\left({}\\right)", text))
        }
    }

    /// Renders the receiver of a postfix layout such as `.x` or `[i]`, grouping operators.
    fn receiver(&self, node: &Node) -> Result<String, RenderError> {
        let text = self.render(node)?;
        if node.is_operator() {
            Ok(format!("\\left({}\\right)", text))
        } else {
            Ok(text)
        }
    }

    /// Renders a call to a function laid out the same way in both modes.
    ///
    /// `rendered` holds argument texts left over from a fold attempt.
    pub(super) fn render_func(
        &self,
        func: Func,
        args: &[Node],
        rendered: &mut [Option<String>],
    ) -> Result<String, RenderError> {
        let args = self.expect_args(func.name(), args, func.arity())?;

        Ok(match func {
            Func::Sum | Func::Prod => format!(
                "\\left({{{}_{{{}={}}}^{{{}}}{{{}}}}}\\right)",
                if func == Func::Sum { "\\sum" } else { "\\prod" },
                self.render(&args[0])?,
                self.render(&args[1])?,
                self.render(&args[2])?,
                self.calculus_body(&args[3])?,
            ),
            Func::Int => {
                let var = self.render(&args[0])?;
                format!(
                    "\\left({{\\int_{{{}}}^{{{}}}{{{}}}d{}}}\\right)",
                    self.render(&args[1])?,
                    self.render(&args[2])?,
                    self.calculus_body(&args[3])?,
                    var,
                )
            },
            Func::Div => format!(
                "\\left({{{{\\frac{{d}}{{d{}}}}}{{{}}}}}\\right)",
                self.render(&args[0])?,
                self.calculus_body(&args[1])?,
            ),
            Func::Sqrt => format!("\\sqrt{{{}}}", self.render(&args[0])?),
            Func::Pow => {
                let mut base = self.take_rendered(rendered, args, 0)?;
                let exp = self.take_rendered(rendered, args, 1)?;
                if args[0].is_call("pow") || base.contains(['-', '+', '*', '/']) {
                    base = self.group(&base);
                }
                format!("{{{}}}^{{{}}}", base, exp)
            },
            Func::Pi => "\\pi ".to_owned(),
            Func::Inf => "\\infty ".to_owned(),
            Func::Undef => format!("\\frac{{{}}}{{0}}", self.render(&args[0])?),
            Func::Point => format!("\\left({}\\right)", self.render_args(args, ",")?),
            Func::Array => format!("[{}]", self.render_args(args, ",")?),
            Func::PointX => format!("{}.x", self.receiver(&args[0])?),
            Func::PointY => format!("{}.y", self.receiver(&args[0])?),
            Func::ArrayIdx => {
                let array = self.receiver(&args[0])?;
                format!("{}[{}]", array, self.take_rendered(rendered, args, 1)?)
            },
            Func::ArrayLength => format!("{}.\\operatorname{{length}}", self.receiver(&args[0])?),
            Func::ArrayFilter => {
                let array = self.receiver(&args[0])?;
                format!("{}[{}=1]", array, self.render(&args[1])?)
            },
            Func::ArrayMap => {
                let array = self.render(&args[0])?;
                let map = self.render(&args[1])?;
                let var = self.render(&args[2])?;
                format!("[{}\\operatorname{{for}}{}={}]", map, var, array)
            },
            Func::Range => format!("[{}...{}]", self.render(&args[0])?, self.render(&args[1])?),
            Func::Equal => self.render_relation(Relation::Equal, args)?,
            Func::NotEqual => self.render_relation(Relation::NotEqual, args)?,
            Func::Lt => self.render_relation(Relation::Lt, args)?,
            Func::Lte => self.render_relation(Relation::Lte, args)?,
            Func::Gt => self.render_relation(Relation::Gt, args)?,
            Func::Gte => self.render_relation(Relation::Gte, args)?,
            Func::IfFunc => self.render_if(&args[0], &args[1], &args[2])?,
            Func::LogBase => {
                let base = self.render(&args[0])?;
                format!("\\log_{{{}}}({})", base, self.render(&args[1])?)
            },
        })
    }

    /// Renders a call to a function with a dedicated typeset layout.
    pub(super) fn render_tex_func(
        &self,
        func: TexFunc,
        args: &[Node],
        rendered: &mut [Option<String>],
    ) -> Result<String, RenderError> {
        let args = self.expect_args(func.name(), args, func.arity())?;

        Ok(match func {
            TexFunc::Sum | TexFunc::Prod => format!(
                "{{{}_{{{}={}}}^{{{}}}{{\\left({}\\right)}}}}",
                if func == TexFunc::Sum { "\\sum" } else { "\\prod" },
                self.render(&args[0])?,
                self.render(&args[1])?,
                self.render(&args[2])?,
                self.render(&args[3])?,
            ),
            TexFunc::Int => {
                let var = self.render(&args[0])?;
                format!(
                    "{{\\int_{{{}}}^{{{}}}{{\\left({}\\right)}}d{}}}",
                    self.render(&args[1])?,
                    self.render(&args[2])?,
                    self.render(&args[3])?,
                    var,
                )
            },
            TexFunc::Div => format!(
                "{{{{\\frac{{d}}{{d{}}}}}{{\\left({}\\right)}}}}",
                self.render(&args[0])?,
                self.render(&args[1])?,
            ),
            TexFunc::Mod => format!(
                "\\operatorname{{mod}}\\left({},\\ {}\\right)",
                self.render(&args[0])?,
                self.render(&args[1])?,
            ),
            TexFunc::Abs => format!("\\left|{}\\right|", self.render(&args[0])?),
            TexFunc::Floor => format!("\\left\\lfloor {}\\right\\rfloor ", self.render(&args[0])?),
            TexFunc::Ceil => format!("\\left\\lceil {}\\right\\rceil ", self.render(&args[0])?),
            TexFunc::Point => format!("\\left({}\\right)", self.render_args(args, ",")?),
            TexFunc::Array => format!("\\left[{}\\right]", self.render_args(args, ",")?),
            TexFunc::ArrayIdx | TexFunc::ArrayFilter => {
                let mut array = self.render(&args[0])?;
                if args[0].is_operator() {
                    array = format!("({})", array);
                }
                let inner = self.take_rendered(rendered, args, 1)?;
                if func == TexFunc::ArrayIdx {
                    format!("{}\\left[{}\\right]", array, inner)
                } else {
                    format!("{}\\left[{}=1\\right]", array, inner)
                }
            },
            TexFunc::ArrayMap => {
                let array = self.render(&args[0])?;
                let map = self.render(&args[1])?;
                let var = self.render(&args[2])?;
                format!("\\left[{}\\ \\operatorname{{for}}\\ {}={}\\right]", map, var, array)
            },
            TexFunc::Range => format!(
                "\\left[{}...{}\\right]",
                self.render(&args[0])?,
                self.render(&args[1])?,
            ),
            TexFunc::Equal => self.render_relation(Relation::Equal, args)?,
            TexFunc::NotEqual => self.render_relation(Relation::NotEqual, args)?,
            TexFunc::Lt => self.render_relation(Relation::Lt, args)?,
            TexFunc::Lte => self.render_relation(Relation::Lte, args)?,
            TexFunc::Gt => self.render_relation(Relation::Gt, args)?,
            TexFunc::Gte => self.render_relation(Relation::Gte, args)?,
            TexFunc::LogBase => {
                let base = self.render(&args[0])?;
                format!("\\log_{{{}}}\\left({}\\right)", base, self.render(&args[1])?)
            },
        })
    }

    /// Renders `equal`, `notEqual`, `lt`, `lte`, `gt` or `gte`.
    fn render_relation(&self, relation: Relation, args: &[Node]) -> Result<String, RenderError> {
        let a = self.render(&args[0])?;
        let b = self.render(&args[1])?;
        Ok(relation.layout(&a, &b))
    }

    /// Renders a conditional. A condition that renders to `1` or `0` selects its branch, and
    /// identical branches make the condition irrelevant.
    pub(super) fn render_if(
        &self,
        condition: &Node,
        then: &Node,
        otherwise: &Node,
    ) -> Result<String, RenderError> {
        let cond = self.render_with(condition, super::context::RenderCtx::unencased())?;
        let then_text = self.render(then)?;
        let else_text = self.render(otherwise)?;

        if cond == "1" {
            return Ok(then_text);
        }
        if cond == "0" {
            return Ok(else_text);
        }
        if then_text == else_text {
            return Ok(then_text);
        }

        let truth = if condition.is_operator() { "" } else { "=1" };
        let then_part = if then_text != "1" {
            format!(":{}", then_text)
        } else {
            String::new()
        };
        Ok(format!("\\left\\{{{}{}{},{}\\right\\}}", cond, truth, then_part, else_text))
    }
}
