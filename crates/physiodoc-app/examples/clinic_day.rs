//! Walkthrough of a documentation session against a throwaway store.
//!
//! Registers a patient, fills in a treatment session the way the UI shell
//! would, generates the note, and prints the result.
//!
//! Usage:
//!   cargo run -p physiodoc-app --example clinic_day

use physiodoc_app::{AppState, RegisterPatient};
use physiodoc_catalogs::diagnosis::icd10_excerpt;
use physiodoc_catalogs::Catalogs;
use physiodoc_core::models::Section;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_env_filter("info").init();

    let dir = tempfile::tempdir()?;
    let store = dir.path().join("patients.json");

    let mut state = AppState::open(&store)?;
    let diagnoses = icd10_excerpt();
    let catalogs = Catalogs::default();

    state.register_patient(
        RegisterPatient {
            name: "Anna Muster".to_string(),
            birth_year: Some(1982),
            diagnosis_input: "M54.5 Kreuzschmerz".to_string(),
        },
        &diagnoses,
    )?;

    state.set_pain(7)?;
    state.set_function(6)?;
    state.toggle_complaint("pain")?;
    state.toggle_complaint("stiffness")?;
    state.toggle_measure("mt")?;
    state.append_dictation(
        Section::Anamnesis,
        "Low back pain for three weeks, worse after prolonged sitting.",
    )?;
    state.append_dictation(
        Section::TherapyPlan,
        "Mobilization of the lumbar spine, progressive loading.",
    )?;

    let outcome = state.generate_note(&catalogs)?;

    println!("Score: {}/100 ({})", outcome.score, outcome.band.text());
    println!("Saved: {}", outcome.persisted);
    println!();
    println!("{}", outcome.note);

    Ok(())
}
