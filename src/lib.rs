// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]
pub mod Utils;
/// figure model: series, styles, derived sequences and errors
pub mod charts;
/// the benchmark numbers behind every chart
pub mod datasets;
/// drawing figures with plotters and gnuplot
pub mod render;
