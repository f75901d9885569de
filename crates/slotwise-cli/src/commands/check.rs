use crate::common;

pub async fn run(
    url: Option<String>,
    date: &str,
    start: &str,
    end: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = common::load_engine(url).await?;

    let status = if engine.is_available(date, start, end) {
        "AVAILABLE"
    } else {
        "NOT AVAILABLE"
    };
    println!("Time slot {start}-{end} on {date} is {status}");

    Ok(())
}
