// Single source of truth for all default values.

use std::ops::RangeInclusive;

use crate::patient::{MentalStatus, Sex};

// --- Rules: thresholds ---
pub const DEFAULT_ADVANCED_AGE_YEARS: i32 = 70;
pub const DEFAULT_HYPOTENSION_SYSTOLIC: f64 = 100.0;
pub const DEFAULT_LOW_ALBUMIN: f64 = 3.0;
pub const DEFAULT_PULSE_LOW: f64 = 50.0;
pub const DEFAULT_PULSE_HIGH: f64 = 100.0;
pub const DEFAULT_TEMPERATURE_LOW: f64 = 36.0;
pub const DEFAULT_TEMPERATURE_HIGH: f64 = 38.0;
pub const DEFAULT_RESPIRATION_LOW: f64 = 10.0;
pub const DEFAULT_RESPIRATION_HIGH: f64 = 24.0;
pub const DEFAULT_ELEVATED_CRP: f64 = 1.0;
pub const DEFAULT_HIGH_ACUITY_CLASS: u8 = 3;

// --- Rules: points ---
pub const DEFAULT_ADVANCED_AGE_POINTS: u32 = 25;
pub const DEFAULT_HYPOTENSION_POINTS: u32 = 20;
pub const DEFAULT_LOW_ALBUMIN_POINTS: u32 = 20;
pub const DEFAULT_SEDATIVE_POINTS: u32 = 15;
pub const DEFAULT_ALTERED_MENTAL_STATUS_POINTS: u32 = 15;
pub const DEFAULT_ABNORMAL_PULSE_POINTS: u32 = 10;
pub const DEFAULT_ABNORMAL_TEMPERATURE_POINTS: u32 = 10;
pub const DEFAULT_HIGH_ACUITY_POINTS: u32 = 10;
pub const DEFAULT_ABNORMAL_RESPIRATION_POINTS: u32 = 5;
pub const DEFAULT_ELEVATED_CRP_POINTS: u32 = 5;
/// Upper bound `validate()` accepts for the sum of all rule points.
pub const MAX_TOTAL_RULE_POINTS: u32 = 10_000;

// --- Cutoffs ---
pub const DEFAULT_ADDITIVE_HIGH_CUTOFF: f64 = 70.0;
pub const DEFAULT_ADDITIVE_MEDIUM_CUTOFF: f64 = 40.0;
pub const DEFAULT_HIGH_PERCENTILE: f64 = 80.0;
pub const DEFAULT_MEDIUM_PERCENTILE: f64 = 60.0;

// --- Input domains ---
pub const VALID_AGE_YEARS: RangeInclusive<i32> = 0..=120;
pub const VALID_SEVERITY_CLASS: RangeInclusive<u8> = 1..=5;

// --- Input substitution ---
pub const DEFAULT_SEX: Sex = Sex::Female;
pub const DEFAULT_MENTAL_STATUS: MentalStatus = MentalStatus::Alert;
pub const DEFAULT_AGE_YEARS: i32 = 50;
pub const DEFAULT_SYSTOLIC_BP: f64 = 120.0;
pub const DEFAULT_DIASTOLIC_BP: f64 = 80.0;
pub const DEFAULT_PULSE_RATE: f64 = 80.0;
pub const DEFAULT_RESPIRATORY_RATE: f64 = 18.0;
pub const DEFAULT_BODY_TEMPERATURE: f64 = 36.8;
pub const DEFAULT_ALBUMIN: f64 = 4.0;
pub const DEFAULT_CRP: f64 = 0.3;
pub const DEFAULT_SEVERITY_CLASS: u8 = 1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_ENV_VAR: &str = "WARDRISK_LOG";
