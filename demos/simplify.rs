//! Basic simplification example

use implicant_logic::{analyze, AnalysisConfig, BoolExpr, SumOfProducts, TruthTable};

fn main() -> std::io::Result<()> {
    println!("Boolean Expression Simplification Example\n");

    println!("Expression: a&b | !a&c");
    println!("(b&c is implied by the other two products)\n");

    let analysis = analyze("a&b | !a&c", &AnalysisConfig::default())?;

    println!("Variables: {:?}", analysis.variables());
    println!("Explicit form: {}", analysis.explicit_form().unwrap_or("-"));
    println!("\n{}", analysis.table());
    println!("Minterms: {:?}", analysis.minterms());

    for term in analysis.prime_implicants() {
        println!("  prime implicant {} covers {:?}", term, term.minterms());
    }

    if let Some(simplified) = analysis.simplified() {
        println!("\nSimplified: {}", simplified);
        println!("Parseable:  {}", simplified.to_parseable_string());
    }

    // The same steps, one at a time
    println!("\nStage by stage for a^b:");
    let expr = BoolExpr::parse("a^b")?;
    let variables = expr.variables()?;
    let table = TruthTable::build(&expr, &variables)?;
    let sop = SumOfProducts::simplify(&variables, table.minterms())?;
    println!("  {} -> {}", expr, sop);
    println!("  equivalent: {}", sop.to_expr().equivalent_to(&expr));

    Ok(())
}
