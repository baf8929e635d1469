use interpret_backend::{
    analysis::AnalysisHandler,
    config, logging,
    lambda::{InvocationAdapter, function_handler},
};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = config::load().await?;
    logging::init(&config.server.logs)?;

    let adapter = InvocationAdapter::new(AnalysisHandler::default());
    run(service_fn(move |event: LambdaEvent<Value>| {
        let adapter = adapter.clone();
        async move { function_handler(&adapter, event).await }
    }))
    .await
}
