/*
 * Responsibility
 * - GET / : server-rendered calculator form
 * - POST /compute : the protected operation (requires the "user" role via
 *   the route layer in routes.rs; this handler only ever sees authorized
 *   requests)
 */
use axum::{Form, response::Html};

use crate::api::dto::compute::ComputeRequest;
use crate::api::extractors::AuthCtxExtractor;
use crate::error::AppError;

const HOME_PAGE: &str = include_str!("../../../templates/home.html");
const RESULT_PAGE: &str = include_str!("../../../templates/result.html");

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub async fn compute(
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Form(req): Form<ComputeRequest>,
) -> Result<Html<String>, AppError> {
    let input = req
        .parse()
        .map_err(|msg| AppError::bad_request("INVALID_INPUT", msg))?;

    let result = match input.operator.as_str() {
        "+" => input.number1 + input.number2,
        "-" => input.number1 - input.number2,
        "*" => input.number1 * input.number2,
        "/" => {
            if input.number2 == 0.0 {
                return Err(AppError::bad_request(
                    "DIVISION_BY_ZERO",
                    "Error: Division by zero.",
                ));
            }
            input.number1 / input.number2
        }
        _ => {
            return Err(AppError::bad_request(
                "INVALID_OPERATOR",
                "Invalid operator. Please use one of: +, -, *, /",
            ));
        }
    };

    tracing::info!(
        user = %ctx.username,
        operator = %input.operator,
        "calculation performed"
    );

    Ok(Html(render_result(
        input.number1,
        &input.operator,
        input.number2,
        result,
    )))
}

fn render_result(number1: f64, operator: &str, number2: f64, result: f64) -> String {
    RESULT_PAGE
        .replace("{{ number1 }}", &number1.to_string())
        .replace("{{ operator }}", operator)
        .replace("{{ number2 }}", &number2.to_string())
        .replace("{{ result }}", &result.to_string())
}
