//! different utility modules used throughout the project
/// logger setup and saving solutions into text/csv files
pub mod logger;
/// tiny module to plot a solution against the exact one
pub mod plots;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into HashMap
pub mod task_parser;
