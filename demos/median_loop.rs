//! A polling loop that reports the median of each batch of readings
//!
//! The buffer is primed with a first reading so it starts out full, then refilled after each median.
//! Reading the median consumes the batch, so the loop knows to collect a new one.

use vecstats::SampleBuffer;

/// Readings taken per batch
///
/// Odd sizes make the median a little cheaper
const BATCH: usize = 127;

/// Stand-in for an ADC: a 12 bit reading wobbling around mid-scale, with the occasional spike
fn read_sensor(tick: u32) -> i16 {
    let wobble = (tick as f32 * 0.37).sin() * 40.;
    let spike = if tick % 53 == 0 { 900. } else { 0. };
    (2048. + wobble + spike) as i16
}

fn main() {
    let mut buffer = SampleBuffer::new(BATCH);
    buffer.fill(read_sensor(0));

    let mut batches = 0;
    for tick in 1..2000 {
        if !buffer.is_full() {
            buffer.add(read_sensor(tick));
        } else if tick % 250 == 0 {
            println!(
                "First readings: {:?}",
                (0..5).filter_map(|i| buffer.element(i).ok()).collect::<Vec<_>>()
            );

            // Resets `is_full`, so the next iterations start collecting again
            println!("Median: {}", buffer.median());
            batches += 1;
        }
    }

    println!("Reported {batches} batches");
}
