//! different utility modules used throughout the project
/// tiny module to save figure data into csv/tsv file
pub mod logger;
/// logger setup (terminal and file sinks) via simplelog
pub mod log_config;
/// settings of a plotting run read from a task file
pub mod plot_task;
/// pretty-printed tables of plotted series and thread speedups
pub mod summary;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into HashMap
pub mod task_parser;
