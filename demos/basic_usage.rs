// ============================================================================
// Basic Usage Example
// ============================================================================

use calculator::prelude::*;

fn show(label: &str, result: CalcResult<Number>) {
    match result {
        Ok(n) => println!("  {:<28} = {}", label, n),
        Err(e) => println!("  {:<28} ! {:?}: {}", label, e.kind(), e),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Calculator Example ===\n");

    println!("Basic operations:");
    let r1 = add_two(2, 3);
    let r2 = subtract(2, 3);
    let r3 = multiply(2, 3);
    show("add_two(2, 3)", r1.clone());
    show("subtract(2, 3)", r2.clone());
    show("multiply(2, 3)", r3.clone());
    if let (Ok(a), Ok(b), Ok(c)) = (r1, r2, r3) {
        show("add_three(r1, r2, r3)", add_three(a, b, c));
    }
    show("divide(10, 2)", divide(10, 2));
    show("power(2, 3)", power(2, 3));
    show("average(1, 2, 3, 4, 5)", average([1, 2, 3, 4, 5]));
    show("percentage(25, 10)", percentage(25, 10));
    show("modulo(-7, 3)", modulo(-7, 3));
    show("square_root(16)", square_root(16));
    show("absolute(-4.5)", absolute(-4.5));
    show("min_of_list(4, -2, 9)", min_of_list([4, -2, 9]));
    show("max_of_list(4, -2, 9)", max_of_list([4, -2, 9]));

    println!("\nFailures:");
    show("divide(1, 0)", divide(1, 0));
    show("square_root(-1)", square_root(-1));
    show("min_of_list()", min_of_list(Vec::<i64>::new()));
    show("add_two(1, \"two\")", add_two(1, "two"));

    println!("\nDispatch by name:");
    let calc = Calculator::new();
    for (name, args) in [
        ("percentage", vec![Value::Int(1), Value::Int(8)]),
        ("max_of_list", vec![Value::Float(2.5), Value::Int(7), Value::Int(-1)]),
        ("cube_root", vec![Value::Int(27)]),
    ] {
        let result = name
            .parse::<Operation>()
            .and_then(|op| calc.evaluate(op, &args));
        show(name, result);
    }

    println!("\nOverflow policy:");
    let strict = CalculatorBuilder::new()
        .fail_on_overflow()
        .build()
        .expect("valid configuration");
    show("lenient power(2, 64)", calc.power(2, 64));
    show("strict power(2, 64)", strict.power(2, 64));
}
