//! A running average over the most recent readings
//!
//! The buffer is primed with the first reading, then every new reading overwrites the oldest slot.
//! The average doesn't care about slot order, so it can be read at any time.
//! Insertion order is only available again each time the cursor wraps back to the first slot.

use vecstats::SampleBuffer;

/// Number of readings averaged over
const WINDOW: usize = 100;

/// Stand-in for a voltage reading between 0.01 and 5.00
fn read_voltage(tick: u32) -> f32 {
    let raw = (tick.wrapping_mul(2_654_435_761) >> 16) % 500 + 1;
    raw as f32 / 100.
}

fn main() {
    let mut buffer = SampleBuffer::new(WINDOW);
    buffer.fill(read_voltage(0));
    println!("Primed with {:.2}", buffer.average());

    for tick in 1..=1000 {
        buffer.add(read_voltage(tick));

        if tick % 250 == 0 {
            println!("Average after {tick} readings: {:.2}", buffer.average());

            // Only in insertion order when the latest reading landed in the last slot
            match buffer.element(0) {
                Ok(oldest) => println!("Oldest reading in window: {oldest:.2}"),
                Err(e) => println!("Slot order unavailable: {e}"),
            }
        }
    }
}
