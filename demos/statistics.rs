//! A walkthrough of every statistic on a small buffer
//!
//! The data sets are short enough to check by hand.
//! In practice the skew measurement in particular wants a much larger buffer.

use vecstats::{SampleBuffer, DEFAULT_DEVIATIONS};

fn print_sorted(buffer: &mut SampleBuffer<i16>) {
    let sorted: Vec<i16> = (0..buffer.len())
        .filter_map(|i| buffer.sorted_element(i).ok())
        .collect();
    println!("Buffer elements: {sorted:?}");
}

fn main() {
    let mut buffer = SampleBuffer::<i16>::new(11);

    // Odd sized buffer
    for v in [3, 9, 0, 6, 2, 8, 3, 1, 9, 6, 2] {
        buffer.add(v);
    }
    println!("Average: {:.2}", buffer.average());
    println!("Standard deviation: {:.2}", buffer.std_dev());
    print_sorted(&mut buffer);
    println!("Median: {}", buffer.median());

    // Even sized buffer: the median is the (rounded) average of the middle two
    buffer.resize(10);
    for v in [7, 3, 0, 9, 5, 1, 8, 3, 6, 2] {
        buffer.add(v);
    }
    print_sorted(&mut buffer);
    println!("Median: {}", buffer.median());

    // Requests past the capacity are ignored
    println!("Resized to 12: {}", buffer.resize(12));

    // Trending data: negative because it falls over time
    buffer.resize(11);
    for v in [2791, 2790, 2788, 2783, 2775, 2775, 2771, 2760, 2759, 2760, 2755] {
        buffer.add(v);
    }
    println!("Slope: {:.2}", buffer.slope().unwrap_or(f64::NAN));

    // Samples more than one standard deviation from the mean
    for v in [2791, 2082, 2082, 2084, 2084, 1367, 2084, 1377, 2084, 2793, 2083] {
        buffer.add(v);
    }
    println!("Outliers: {}", buffer.outliers(1.));

    // High readings at the start, settling down afterwards
    for v in [2015, 2005, 2003, 2001, 2003, 2001, 2002, 2000, 2004, 2001, 2002] {
        buffer.add(v);
    }
    for deviations in [1., DEFAULT_DEVIATIONS, 3.] {
        match buffer.left_skew(deviations) {
            Ok(skew) => println!("Left skew({deviations}): {skew}"),
            Err(e) => println!("Left skew({deviations}) unavailable: {e}"),
        }
    }

    if let Ok(settling) = buffer.settling_run() {
        println!("{:.0} --> {:?}", settling.tail_average, settling.run);
    }

    // Sorting loses the insertion order
    print_sorted(&mut buffer);
    if let Err(e) = buffer.element(0) {
        println!("Element 0 unavailable: {e}");
    }
}
