//! Input sanitization.
//!
//! Every field is checked against its plausible domain. Non-finite or
//! out-of-domain values are replaced by a normal-range default and the
//! replacement is recorded, so a single bad field never aborts evaluation
//! and a defaulted field never triggers a rule on its own.

use wardrisk_core::config::defaults::{
    self, DEFAULT_MENTAL_STATUS, DEFAULT_SEX, VALID_AGE_YEARS, VALID_SEVERITY_CLASS,
};
use wardrisk_core::models::FieldSubstitution;
use wardrisk_core::patient::{
    MentalStatus, ObservationField, PatientObservation, PatientStatic, Sex,
};
use wardrisk_observability::events;

/// Plausible domain of a continuous field. `min_exclusive` excludes the
/// lower bound (a blood pressure of exactly 0 is not a measurement).
#[derive(Debug, Clone, Copy)]
struct Domain {
    min: f64,
    max: f64,
    min_exclusive: bool,
    default: f64,
}

impl Domain {
    const fn open_low(min: f64, max: f64, default: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: true,
            default,
        }
    }

    const fn closed(min: f64, max: f64, default: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: false,
            default,
        }
    }

    fn contains(&self, value: f64) -> bool {
        let above_min = if self.min_exclusive {
            value > self.min
        } else {
            value >= self.min
        };
        value.is_finite() && above_min && value <= self.max
    }
}

const SYSTOLIC: Domain = Domain::open_low(0.0, 300.0, defaults::DEFAULT_SYSTOLIC_BP);
const DIASTOLIC: Domain = Domain::open_low(0.0, 200.0, defaults::DEFAULT_DIASTOLIC_BP);
const PULSE: Domain = Domain::open_low(0.0, 300.0, defaults::DEFAULT_PULSE_RATE);
const RESPIRATION: Domain = Domain::open_low(0.0, 80.0, defaults::DEFAULT_RESPIRATORY_RATE);
const TEMPERATURE: Domain = Domain::closed(25.0, 45.0, defaults::DEFAULT_BODY_TEMPERATURE);
const ALBUMIN: Domain = Domain::open_low(0.0, 10.0, defaults::DEFAULT_ALBUMIN);
const CRP: Domain = Domain::closed(0.0, 50.0, defaults::DEFAULT_CRP);

/// Patient input with every field guaranteed in-domain.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedInput {
    pub age: i32,
    pub sex: Sex,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub pulse_rate: f64,
    pub respiratory_rate: f64,
    pub body_temperature: f64,
    pub albumin: f64,
    pub crp: f64,
    pub mental_status: MentalStatus,
    pub severity_class: u8,
    pub sedative_administered: bool,
}

/// Sanitize one patient's inputs. Never fails.
pub fn sanitize(
    patient: &PatientStatic,
    observation: &PatientObservation,
) -> (SanitizedInput, Vec<FieldSubstitution>) {
    let mut subs = Vec::new();

    let age = if VALID_AGE_YEARS.contains(&patient.age) {
        patient.age
    } else {
        push(
            &mut subs,
            ObservationField::Age,
            format!("{} outside {:?}", patient.age, VALID_AGE_YEARS),
            f64::from(defaults::DEFAULT_AGE_YEARS),
        );
        defaults::DEFAULT_AGE_YEARS
    };

    let sex = match patient.sex {
        Some(sex) => sex,
        None => {
            push(
                &mut subs,
                ObservationField::Sex,
                "missing".to_string(),
                f64::from(DEFAULT_SEX.ordinal()),
            );
            DEFAULT_SEX
        }
    };

    let mental_status = match observation.mental_status {
        Some(status) => status,
        None => {
            push(
                &mut subs,
                ObservationField::MentalStatus,
                "missing".to_string(),
                f64::from(DEFAULT_MENTAL_STATUS.ordinal()),
            );
            DEFAULT_MENTAL_STATUS
        }
    };

    let severity_class = if VALID_SEVERITY_CLASS.contains(&observation.severity_class) {
        observation.severity_class
    } else {
        push(
            &mut subs,
            ObservationField::SeverityClass,
            format!(
                "{} outside {:?}",
                observation.severity_class, VALID_SEVERITY_CLASS
            ),
            f64::from(defaults::DEFAULT_SEVERITY_CLASS),
        );
        defaults::DEFAULT_SEVERITY_CLASS
    };

    let input = SanitizedInput {
        age,
        sex,
        systolic_bp: continuous(
            &mut subs,
            ObservationField::SystolicBp,
            observation.systolic_bp,
            SYSTOLIC,
        ),
        diastolic_bp: continuous(
            &mut subs,
            ObservationField::DiastolicBp,
            observation.diastolic_bp,
            DIASTOLIC,
        ),
        pulse_rate: continuous(
            &mut subs,
            ObservationField::PulseRate,
            observation.pulse_rate,
            PULSE,
        ),
        respiratory_rate: continuous(
            &mut subs,
            ObservationField::RespiratoryRate,
            observation.respiratory_rate,
            RESPIRATION,
        ),
        body_temperature: continuous(
            &mut subs,
            ObservationField::BodyTemperature,
            observation.body_temperature,
            TEMPERATURE,
        ),
        albumin: continuous(
            &mut subs,
            ObservationField::Albumin,
            observation.albumin,
            ALBUMIN,
        ),
        crp: continuous(
            &mut subs,
            ObservationField::CReactiveProtein,
            observation.crp,
            CRP,
        ),
        mental_status,
        severity_class,
        sedative_administered: observation.sedative_administered,
    };

    (input, subs)
}

fn continuous(
    subs: &mut Vec<FieldSubstitution>,
    field: ObservationField,
    value: f64,
    domain: Domain,
) -> f64 {
    if domain.contains(value) {
        return value;
    }
    let reason = if value.is_finite() {
        let open = if domain.min_exclusive { "(" } else { "[" };
        format!("{value} outside {open}{}, {}]", domain.min, domain.max)
    } else {
        format!("{value} is not finite")
    };
    push(subs, field, reason, domain.default);
    domain.default
}

fn push(subs: &mut Vec<FieldSubstitution>, field: ObservationField, reason: String, value: f64) {
    let substitution = FieldSubstitution::invalid_input(field, reason, value);
    events::input_defaulted(field.as_str(), &substitution.reason, value);
    subs.push(substitution);
}
