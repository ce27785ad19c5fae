//! Module containing tests for the preprocessing utilities.
mod coalesce_test;
