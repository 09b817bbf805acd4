//! End-to-end scenarios through the public pipeline

use implicant_logic::{analyze, AnalysisConfig, Analysis, BoolExpr, SumOfProducts};

fn run(input: &str) -> Analysis {
    analyze(input, &AnalysisConfig::default()).unwrap()
}

fn primes(analysis: &Analysis) -> Vec<String> {
    analysis
        .prime_implicants()
        .iter()
        .map(|t| t.to_string())
        .collect()
}

#[test]
fn test_and() {
    let analysis = run("a&b");
    assert_eq!(analysis.variables(), &['a', 'b']);
    assert_eq!(analysis.minterms(), &[3]);
    assert_eq!(primes(&analysis), vec!["11"]);
    assert_eq!(analysis.simplified().unwrap().to_string(), "ab");
}

#[test]
fn test_tautology() {
    let analysis = run("a|!a");
    assert_eq!(analysis.variables(), &['a']);
    assert_eq!(analysis.minterms(), &[0, 1]);
    assert_eq!(analysis.simplified(), Some(&SumOfProducts::Constant(true)));
    assert_eq!(analysis.simplified().unwrap().to_string(), "1");
    assert!(analysis.prime_implicants().is_empty());
}

#[test]
fn test_xor() {
    let analysis = run("a^b");
    assert_eq!(analysis.variables(), &['a', 'b']);
    assert_eq!(analysis.minterms(), &[1, 2]);
    assert_eq!(primes(&analysis), vec!["01", "10"]);
    assert_eq!(analysis.simplified().unwrap().to_string(), "a!b|!ab");
}

#[test]
fn test_constants_only() {
    let analysis = run("1&0");
    assert!(analysis.variables().is_empty());
    assert!(analysis.minterms().is_empty());
    assert_eq!(analysis.simplified().unwrap().to_string(), "0");
    assert_eq!(analysis.table().num_rows(), 1);
}

#[test]
fn test_imply() {
    let analysis = run("a>b");
    assert_eq!(analysis.variables(), &['a', 'b']);
    assert_eq!(analysis.minterms(), &[0, 1, 3]);
    assert_eq!(primes(&analysis), vec!["-1", "0-"]);
    assert_eq!(analysis.simplified().unwrap().to_string(), "!a|b");
}

#[test]
fn test_dangling_operator_is_a_syntax_error() {
    let err = analyze("a&", &AnalysisConfig::default()).unwrap_err();
    assert!(err.to_string().contains("got end of input"), "{}", err);
}

#[test]
fn test_variables_sorted_regardless_of_appearance() {
    let analysis = run("c&a|b");
    assert_eq!(analysis.variables(), &['a', 'b', 'c']);
    // true when c&a or b: rows 2, 3, 5, 6, 7
    assert_eq!(analysis.minterms(), &[2, 3, 5, 6, 7]);
    assert_eq!(analysis.simplified().unwrap().to_string(), "ac|b");
}

#[test]
fn test_redundant_consensus_term_is_reported() {
    let analysis = run("a&b|!a&c");
    assert_eq!(primes(&analysis), vec!["-11", "0-1", "11-"]);
    assert_eq!(analysis.simplified().unwrap().to_string(), "ab|!ac|bc");
}

#[test]
fn test_literal_folding() {
    let analysis = run("a&!0");
    assert_eq!(analysis.explicit_form(), Some("(a&1)"));
    assert_eq!(analysis.simplified().unwrap().to_string(), "a");
}

#[test]
fn test_explicit_reconstruction_is_fully_parenthesised() {
    let analysis = run("a|b&!(c^d)");
    assert_eq!(analysis.explicit_form(), Some("(a|(b&!((c^d))))"));
}

#[test]
fn test_simplified_form_is_equivalent() {
    for input in ["a&b|!a&c", "(a>b)^(c|!d)", "a^b^c", "!(a&b)|c&d"] {
        let analysis = run(input);
        let simplified = analysis.simplified().unwrap();
        let reparsed = BoolExpr::parse(&simplified.to_parseable_string()).unwrap();
        assert!(reparsed.equivalent_to(analysis.expr()), "input {}", input);
    }
}

#[test]
fn test_truth_table_rendering() {
    let analysis = run("a>b");
    let text = analysis.table().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "a | b | q",
            "---------",
            "0 | 0 | 1",
            "0 | 1 | 1",
            "1 | 0 | 0",
            "1 | 1 | 1",
        ]
    );
}
