use crate::common;

pub async fn run(url: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let engine = common::load_engine(url).await?;
    println!("{}", serde_json::to_string_pretty(engine.snapshot())?);
    Ok(())
}
