use pratt_calc::operator::{Fixity, Operator};

#[test]
fn every_operator_supports_some_position() {
    for op in Operator::ALL {
        assert!([Fixity::Prefix, Fixity::Infix, Fixity::Postfix].into_iter()
                                                               .any(|fixity| op.supports(fixity)),
                "{} has no binding power at all",
                op.name());
    }
}

#[test]
fn symbols_are_unique_and_reversible() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(Operator::from_symbol(b'('), None);
    assert_eq!(Operator::from_symbol(b'0'), None);
}

#[test]
fn infix_operators_are_left_associative() {
    for op in Operator::ALL {
        if let Some((l_bp, r_bp)) = op.infix_binding_power() {
            assert_eq!(r_bp, l_bp + 1, "{} should be left-associative", op.name());
        }
    }
}

#[test]
fn precedence_levels_are_ordered() {
    let power = |op: Operator| op.infix_binding_power().map(|(l_bp, _)| l_bp);

    assert!(power(Operator::Add) < power(Operator::Mul));
    assert_eq!(power(Operator::Add), power(Operator::Sub));
    assert_eq!(power(Operator::Mul), power(Operator::Div));
    assert!(power(Operator::Mul) < power(Operator::Exp));
}

#[test]
fn prefix_minus_binds_looser_than_exponent() {
    let prefix = Operator::Sub.prefix_binding_power();
    let exponent = Operator::Exp.infix_binding_power().map(|(l_bp, _)| l_bp);
    assert!(prefix < exponent);
}

#[test]
fn factorial_binds_tightest() {
    let fact = Operator::Fact.postfix_binding_power();
    for op in Operator::ALL {
        if let Some((_, r_bp)) = op.infix_binding_power() {
            assert!(Some(r_bp) < fact, "{} would steal the factorial operand", op.name());
        }
    }
}

#[test]
fn operators_display_as_their_symbol() {
    let rendered = Operator::ALL.iter().map(ToString::to_string).collect::<String>();
    assert_eq!(rendered, "+-*/^!");
}
