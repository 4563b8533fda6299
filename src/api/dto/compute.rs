/*
 * Responsibility
 * - calculator request DTO (form fields arrive as strings)
 * - parse() turns the raw fields into validated numeric input
 */
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ComputeRequest {
    pub number1: String,
    pub operator: String,
    pub number2: String,
}

#[derive(Debug)]
pub struct ComputeInput {
    pub number1: f64,
    pub operator: String,
    pub number2: f64,
}

impl ComputeRequest {
    pub fn parse(&self) -> Result<ComputeInput, &'static str> {
        let number1: f64 = self
            .number1
            .trim()
            .parse()
            .map_err(|_| "Invalid input. Please ensure numbers are valid.")?;
        let number2: f64 = self
            .number2
            .trim()
            .parse()
            .map_err(|_| "Invalid input. Please ensure numbers are valid.")?;

        Ok(ComputeInput {
            number1,
            operator: self.operator.trim().to_string(),
            number2,
        })
    }
}
