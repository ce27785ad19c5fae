//! Module containing tests for the two-series measures.
