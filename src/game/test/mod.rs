//! Tests for the rules engine, grouped by the part of a turn they exercise.

#![cfg(test)]

pub mod card_effects;
