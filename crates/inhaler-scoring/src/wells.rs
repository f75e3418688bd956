//! Wells criteria for deep vein thrombosis.

use crate::criteria::Criterion;
use crate::scale::Scale;
use crate::thresholds::{Band, ScoreInterpretation, Threshold, ThresholdTable};

pub const ID: &str = "wells-tvp";

pub const CRITERIA: &[Criterion] = &[
    Criterion::new("cancer", "Cáncer activo", 1),
    Criterion::new("paralisis", "Parálisis, paresia o inmovilización EEII", 1),
    Criterion::new(
        "encamado",
        "Encamado >3 días o cirugía mayor <12 semanas",
        1,
    ),
    Criterion::new("dolor", "Dolor localizado en trayecto venoso profundo", 1),
    Criterion::new("edema_total", "Edema de toda la pierna", 1),
    Criterion::new("pantorrilla", "Aumento pantorrilla ≥3 cm", 1),
    Criterion::new("fovea", "Edema con fóvea (solo pierna afecta)", 1),
    Criterion::new("venas", "Venas superficiales colaterales", 1),
    Criterion::negative(
        "dx_alternativo",
        "Diagnóstico alternativo igual o más probable",
        -2,
    ),
];

const BOUNDED: &[Threshold] = &[
    Threshold::at_most(0, "TVP poco probable", Band::Low),
    Threshold::at_most(2, "TVP probabilidad intermedia", Band::Medium),
];

pub const THRESHOLDS: ThresholdTable = ThresholdTable::from_static(
    BOUNDED,
    ScoreInterpretation::new("TVP probable", Band::High),
);

pub static SCALE: Scale = Scale::from_static(ID, "Wells – TVP", CRITERIA, THRESHOLDS);

/// Interpretation of a Wells score.
pub fn interpret(score: i32) -> ScoreInterpretation {
    crate::engine::interpret(score, &THRESHOLDS)
}
