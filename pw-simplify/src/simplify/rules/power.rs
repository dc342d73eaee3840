use crate::node::Node;
use crate::simplify::{rules::do_call, step::Step};
use crate::step_collector::StepCollector;
use pw_parser::parser::token::op::BinOpKind;

/// `pow(pow(a, b), c) = pow(a, b*c)`
pub fn power_of_power(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_call(expr, "pow", 2, |args| {
        do_call(&args[0], "pow", 2, |inner| {
            Some(Node::call("pow", vec![
                inner[0].clone(),
                Node::binary(BinOpKind::Mul, inner[1].clone(), args[1].clone()),
            ]))
        })
    })?;

    step_collector.push(Step::PowerOfPower);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    power_of_power(expr, step_collector)
}
