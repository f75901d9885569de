use crate::common;

pub async fn run(url: Option<String>, date: &str) -> Result<(), Box<dyn std::error::Error>> {
    let engine = common::load_engine(url).await?;
    let slots = engine.free_slots(date);

    println!("Free time slots for {date}:");
    if slots.is_empty() {
        println!("(none)");
    }
    for (start, end) in slots {
        println!("- {start} to {end}");
    }

    Ok(())
}
