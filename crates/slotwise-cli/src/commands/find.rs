use crate::common;

pub async fn run(url: Option<String>, minutes: u32) -> Result<(), Box<dyn std::error::Error>> {
    let engine = common::load_engine(url).await?;

    match engine.find_slot_for_duration(minutes) {
        Some(slot) => {
            println!("First available {minutes}-minute slot:");
            println!("Date: {}, Time: {}-{}", slot.date, slot.start, slot.end);
        }
        None => {
            println!("No available {minutes}-minute slots found");
        }
    }

    Ok(())
}
