//! Integration test modules.

mod board_scenario_test;
