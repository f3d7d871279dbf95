mod common;

mod aggregation;
