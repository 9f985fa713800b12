use crate::charts::derived::speedup;
use crate::charts::{Figure, Result, Series};

pub const ROW_LENGTHS: [u32; 10] = [10, 12, 16, 22, 30, 40, 52, 66, 82, 100];

pub const TIME_1_THREAD: [f64; 10] = [
    26000.0, 26000.0, 48000.0, 92000.0, 168000.0, 296000.0, 502000.0, 814000.0, 1256000.0,
    1870000.0,
];
pub const TIME_2_THREADS: [f64; 10] = [
    188000.0, 182000.0, 156000.0, 196000.0, 248000.0, 274000.0, 400000.0, 546000.0, 742000.0,
    1118000.0,
];
pub const TIME_4_THREADS: [f64; 10] = [
    450000.0, 226000.0, 254000.0, 242000.0, 308000.0, 290000.0, 372000.0, 494000.0, 688000.0,
    788000.0,
];

/// (label, cycles per row length, format shorthand)
pub fn runs() -> [(&'static str, &'static [f64], &'static str); 3] {
    [
        ("1 Thread", &TIME_1_THREAD, "o-"),
        ("2 Threads", &TIME_2_THREADS, "s-"),
        ("4 Threads", &TIME_4_THREADS, "x-"),
    ]
}

pub fn figure() -> Result<Figure> {
    let mut fig = Figure::new("Execution Time vs. Array Size for Different Thread Counts")
        .x_label("Row Length (Array Size)")
        .y_label("Execution Time (Cycles)")
        .figsize(8.0, 5.0);
    for (label, cycles, fmt) in runs() {
        fig.add_series(Series::from_fmt(label, &ROW_LENGTHS, cycles, fmt)?);
    }
    Ok(fig)
}

/// Speedup of the 2 and 4 thread runs over the single thread run, per row length.
pub fn speedups() -> Result<[(&'static str, Vec<f64>); 2]> {
    let [(_, single, _), (two_label, two, _), (four_label, four, _)] = runs();
    Ok([
        (two_label, speedup(single, two)?),
        (four_label, speedup(single, four)?),
    ])
}
