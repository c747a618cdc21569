//! A basic example showing minimal usage
//!
//! We construct a [`SampleBuffer`], fill it with data, and then read out some statistics

use vecstats::SampleBuffer;

/// Some sample data to analyze
///
/// In practice, this will probably come from a sensor
/// Note that the exact median is 44.5
const DATA: [f32; 15] = [
    18.6, 83.1, 21.5, 21.4, 63.4, 64.1, 4.6, 92.7, 31.1, 94.8, 2.4, 44.5, 70.0, 17.1, 61.0,
];

fn main() {
    // Storage for every slot is allocated here, and never again
    let mut buffer = SampleBuffer::new(DATA.len());

    for data_point in DATA {
        buffer.add(data_point);
    }

    println!("Buffer full: {}", buffer.is_full());
    println!("Average: {:.2}", buffer.average());
    println!("Standard deviation: {:.2}", buffer.std_dev());

    // Reading the median reorders the buffer, so do it last
    let median = buffer.median();
    println!("Median: {median}");
}
