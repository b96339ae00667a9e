//! End-to-end pipeline tests: parse, tabulate, canonicalize, reduce.

use quine_logic::{
    canonical, minimize_sdnf_calc, minimize_sdnf_karnaugh, minimize_sdnf_quine, parse, Form,
    Method, MinimizeError, TruthTable, ALPHABET,
};

/// Minterm indices of an expression evaluated over an explicit variable
/// list, so reduced output mentioning fewer variables still lands on the
/// original function's rows.
fn minterms_over(expr: &str, variables: &[char]) -> Vec<usize> {
    let parsed = parse(expr).unwrap();
    let table = TruthTable::generate(variables, parsed.postfix()).unwrap();
    table.minterm_indices().to_vec()
}

#[test]
fn conjunction_end_to_end() {
    let parsed = parse("a & b").unwrap();
    let table = TruthTable::from_expression(&parsed).unwrap();
    assert_eq!(table.minterm_indices(), &[3]);
    assert_eq!(canonical::sdnf(table.variables(), table.minterm_indices()), "(a & b)");

    let reduced = table.minimize(Method::QuineMcCluskey, Form::Sdnf).unwrap();
    assert_eq!(reduced.expression, "(a & b)");
}

#[test]
fn tautology_reduces_to_one_with_no_stages() {
    let parsed = parse("a | !a").unwrap();
    let table = TruthTable::from_expression(&parsed).unwrap();
    assert_eq!(table.minterm_indices(), &[0, 1]);
    assert!(table.maxterm_indices().is_empty());
    assert_eq!(canonical::sknf(table.variables(), table.maxterm_indices()), "1");

    for method in [Method::Calculation, Method::QuineMcCluskey, Method::Karnaugh] {
        let reduced = table.minimize(method, Form::Sdnf).unwrap();
        assert_eq!(reduced.expression, "1");
        assert!(reduced.stages.is_empty());
    }
}

#[test]
fn implication_truth_table() {
    let parsed = parse("(a -> b) & c").unwrap();
    let table = TruthTable::from_expression(&parsed).unwrap();
    // Row 5 is a=1, b=0, c=1: the implication fails.
    assert!(!table.rows()[5].result);
    assert_eq!(table.minterm_indices(), &[1, 3, 7]);
}

#[test]
fn quine_cover_is_exact_on_the_classic_example() {
    let minterms = [0, 1, 2, 5, 6, 7];
    let reduced = minimize_sdnf_quine(&minterms, 3).unwrap();
    assert_eq!(minterms_over(&reduced.expression, &ALPHABET[..3]), minterms);
}

#[test]
fn empty_minterm_set_is_the_zero_constant() {
    let reduced = minimize_sdnf_quine(&[], 2).unwrap();
    assert_eq!(reduced.expression, "0");
    assert!(reduced.stages.is_empty());
}

#[test]
fn karnaugh_refuses_six_variables() {
    let err = minimize_sdnf_karnaugh(&[0], 6).unwrap_err();
    assert_eq!(
        err,
        MinimizeError::TooManyVariables {
            variables: 6,
            limit: 5
        }
    );
}

#[test]
fn all_methods_agree_with_the_original_function() {
    let inputs = [
        "a & b | c",
        "(a -> b) & c",
        "a ~ b ~ c",
        "!(a & b) | (c -> a)",
        "a & !b | !a & b & c | d",
    ];
    for input in inputs {
        let parsed = parse(input).unwrap();
        let table = TruthTable::from_expression(&parsed).unwrap();
        let expected = table.minterm_indices().to_vec();

        for method in [Method::Calculation, Method::QuineMcCluskey, Method::Karnaugh] {
            for form in [Form::Sdnf, Form::Sknf] {
                let reduced = table.minimize(method, form).unwrap();
                assert_eq!(
                    minterms_over(&reduced.expression, table.variables()),
                    expected,
                    "{input} via {method:?}/{form:?} changed the function"
                );
            }
        }
    }
}

#[test]
fn canonical_forms_reparse_to_the_same_function() {
    let parsed = parse("a & !b | c & d").unwrap();
    let table = TruthTable::from_expression(&parsed).unwrap();
    let expected = table.minterm_indices().to_vec();

    let sdnf = canonical::sdnf(table.variables(), table.minterm_indices());
    let sknf = canonical::sknf(table.variables(), table.maxterm_indices());
    assert_eq!(minterms_over(&sdnf, table.variables()), expected);
    assert_eq!(minterms_over(&sknf, table.variables()), expected);
}

#[test]
fn reduced_output_is_idempotent_under_reduction() {
    let parsed = parse("a & b | a & !b & c | !a & c").unwrap();
    let table = TruthTable::from_expression(&parsed).unwrap();
    let reduced = table.minimize(Method::QuineMcCluskey, Form::Sdnf).unwrap();

    let reparsed = parse(&reduced.expression).unwrap();
    let second_table =
        TruthTable::generate(table.variables(), reparsed.postfix()).unwrap();
    let again = second_table
        .minimize(Method::QuineMcCluskey, Form::Sdnf)
        .unwrap();
    assert_eq!(again.expression, reduced.expression);
}

#[test]
fn calculation_matches_quine_on_five_variables() {
    let minterms: Vec<usize> = (0..32).filter(|i| i % 3 == 0).collect();
    let via_calc = minimize_sdnf_calc(&minterms, 5).unwrap();
    let via_quine = minimize_sdnf_quine(&minterms, 5).unwrap();
    assert_eq!(
        minterms_over(&via_calc.expression, &ALPHABET[..5]),
        minterms
    );
    assert_eq!(
        minterms_over(&via_quine.expression, &ALPHABET[..5]),
        minterms
    );
}
