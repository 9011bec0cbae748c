use anyhow::Result;
use cetable_core::services::evaluate_address;

/// Evaluate one address expression and print the normalized value.
pub fn eval_command(expr: &str) -> Result<String> {
    let value = evaluate_address(Some(expr))?;
    println!("{}", value);
    Ok(value)
}
