//! AWS Lambda HTTP handler for single projections
//!
//! Fields `years`, `rate`, `initial`, `contribution` and `frequency` are read
//! from the query string and from a JSON or form-encoded body; body fields
//! win. Responds with `{inputs, totals, series, chart}` or a 400 carrying
//! `{error: {kind, field, message}}`.
//!
//! `ROI_DEFAULTS_PATH` may point at a JSON file of input defaults.

use lambda_http::{
    run, service_fn, Body, Error, Request, RequestExt, RequestPayloadExt, Response,
};
use log::{info, warn};
use roi_projection::{
    ChartData, FieldValue, InputDefaults, ProjectionEngine, ProjectionResult, RawInputs,
    ValidationError,
};
use serde::Serialize;

#[derive(Serialize)]
struct ProjectionResponse<'a> {
    #[serde(flatten)]
    result: &'a ProjectionResult,
    chart: ChartData,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    kind: &'static str,
    field: Option<&'static str>,
    message: String,
}

impl From<&ValidationError> for ErrorResponse {
    fn from(err: &ValidationError) -> Self {
        Self {
            error: ErrorDetail {
                kind: err.kind(),
                field: Some(err.field()),
                message: err.to_string(),
            },
        }
    }
}

fn query_inputs(event: &Request) -> RawInputs {
    let params = event.query_string_parameters();
    let field = |name: &str| params.first(name).map(FieldValue::from);
    RawInputs {
        years: field("years"),
        rate: field("rate"),
        initial: field("initial"),
        contribution: field("contribution"),
        frequency: field("frequency"),
    }
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let json = serde_json::to_string(body)?;
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(json))?;
    Ok(response)
}

async fn function_handler(
    engine: &ProjectionEngine,
    defaults: &InputDefaults,
    event: Request,
) -> Result<Response<Body>, Error> {
    let body_inputs = match event.payload::<RawInputs>() {
        Ok(payload) => payload.unwrap_or_default(),
        Err(err) => {
            warn!("unreadable request body: {}", err);
            let body = ErrorResponse {
                error: ErrorDetail {
                    kind: "InvalidBody",
                    field: None,
                    message: err.to_string(),
                },
            };
            return json_response(400, &body);
        }
    };

    let raw = body_inputs.with_fallback(query_inputs(&event));
    match raw.resolve(defaults) {
        Ok(inputs) => {
            let result = engine.compute(&inputs);
            let body = ProjectionResponse {
                chart: result.chart_data(),
                result: &result,
            };
            json_response(200, &body)
        }
        Err(err) => {
            info!("rejected projection request: {}", err);
            json_response(400, &ErrorResponse::from(&err))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let defaults = match std::env::var("ROI_DEFAULTS_PATH") {
        Ok(path) => InputDefaults::from_json_file(&path)?,
        Err(_) => InputDefaults::default(),
    };
    let engine = ProjectionEngine::default();

    let engine = &engine;
    let defaults = &defaults;
    run(service_fn(move |event: Request| async move {
        function_handler(engine, defaults, event).await
    }))
    .await
}
