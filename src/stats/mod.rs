//! Corpus statistics

mod length;

pub use length::{
    LengthStatistics, STAT_DECIMALS, length_statistics, mean, median, round_stat, summarize,
};
