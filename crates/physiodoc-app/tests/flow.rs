use physiodoc_app::{AppError, AppState, RegisterPatient};
use physiodoc_catalogs::diagnosis::icd10_excerpt;
use physiodoc_catalogs::Catalogs;
use physiodoc_core::models::{PatientDocument, Section, SessionKind};

fn memory_state() -> AppState {
    AppState::new(PatientDocument::default(), None)
}

fn register(state: &mut AppState, name: &str, diagnosis: &str) {
    state
        .register_patient(
            RegisterPatient {
                name: name.to_string(),
                birth_year: Some(1982),
                diagnosis_input: diagnosis.to_string(),
            },
            &icd10_excerpt(),
        )
        .unwrap();
}

#[test]
fn registration_selects_patient_and_initial_session() {
    let mut state = memory_state();
    register(&mut state, "Anna Muster", "M54.5 Kreuzschmerz");

    let patient = state.selected_patient().unwrap();
    assert_eq!(patient.name, "Anna Muster");
    assert_eq!(patient.diagnosis.as_ref().unwrap().code, "M54.5");
    assert_eq!(
        patient.diagnosis.as_ref().unwrap().short_label,
        "Kreuzschmerz"
    );
    let session = state.selected_session().unwrap();
    assert_eq!(session.kind, SessionKind::Initial);
}

#[test]
fn registration_keeps_unmatched_diagnosis_token_as_code() {
    let mut state = memory_state();
    register(&mut state, "Bruno Beispiel", "q87.4 seltene Diagnose");

    let diagnosis = state.selected_patient().unwrap().diagnosis.clone().unwrap();
    assert_eq!(diagnosis.code, "Q87.4");
    assert!(diagnosis.short_label.is_empty());
}

#[test]
fn registration_validates_name_and_diagnosis() {
    let mut state = memory_state();

    let no_name = state.register_patient(
        RegisterPatient {
            name: "  ".to_string(),
            birth_year: None,
            diagnosis_input: "M54.5".to_string(),
        },
        &icd10_excerpt(),
    );
    assert!(no_name.is_err());

    let no_diagnosis = state.register_patient(
        RegisterPatient {
            name: "Anna Muster".to_string(),
            birth_year: None,
            diagnosis_input: "   ".to_string(),
        },
        &icd10_excerpt(),
    );
    assert!(matches!(no_diagnosis, Err(AppError::Validation(_))));
    // Nothing was mutated by the rejected registrations.
    assert!(state.patients().is_empty());
}

#[test]
fn add_session_requires_selection_and_selects_the_new_session() {
    let mut state = memory_state();
    assert!(matches!(
        state.add_session(SessionKind::Followup),
        Err(AppError::NoPatientSelected)
    ));

    register(&mut state, "Anna Muster", "M54.5");
    let outcome = state.add_session(SessionKind::Followup).unwrap();
    assert_eq!(state.selected_session().unwrap().id, outcome.session_id);
    assert_eq!(state.selected_session().unwrap().kind, SessionKind::Followup);
    assert_eq!(state.selected_patient().unwrap().sessions.len(), 2);
}

#[test]
fn deleting_the_only_session_leaves_no_selection() {
    let mut state = memory_state();
    register(&mut state, "Anna Muster", "M54.5");

    let session_id = state.selected_session().unwrap().id;
    state.delete_session(session_id).unwrap();

    assert!(state.selected_patient().unwrap().sessions.is_empty());
    assert!(state.selected_session().is_none());
}

#[test]
fn deleting_the_selected_session_falls_back_to_the_first_remaining() {
    let mut state = memory_state();
    register(&mut state, "Anna Muster", "M54.5");
    let first = state.selected_session().unwrap().id;
    let second = state.add_session(SessionKind::Followup).unwrap().session_id;

    state.delete_session(second).unwrap();
    assert_eq!(state.selected_session().unwrap().id, first);
}

#[test]
fn session_list_shows_newest_first() {
    let mut state = memory_state();
    register(&mut state, "Anna Muster", "M54.5");
    let second = state.add_session(SessionKind::Followup).unwrap().session_id;

    state
        .set_session_date(Some(jiff::civil::date(2030, 1, 1)))
        .unwrap();

    let listed: Vec<_> = state.sessions_for_display().iter().map(|s| s.id).collect();
    assert_eq!(listed.first(), Some(&second));
    assert_eq!(listed.len(), 2);
}

#[test]
fn selecting_a_sessionless_patient_creates_an_initial_session() {
    let mut state = memory_state();
    register(&mut state, "Anna Muster", "M54.5");
    let patient_id = state.selected_patient().unwrap().id;
    let session_id = state.selected_session().unwrap().id;
    state.delete_session(session_id).unwrap();

    state.select_patient(patient_id).unwrap();
    let session = state.selected_session().unwrap();
    assert_eq!(session.kind, SessionKind::Initial);
    assert_eq!(state.selected_patient().unwrap().sessions.len(), 1);
}

#[test]
fn generate_note_writes_score_and_note_onto_the_session() {
    let mut state = memory_state();
    register(&mut state, "Anna Muster", "M54.5 Kreuzschmerz");
    state.set_pain(7).unwrap();
    state.set_function(6).unwrap();
    state.toggle_complaint("pain").unwrap();
    state.toggle_complaint("stiffness").unwrap();
    state.toggle_measure("mt").unwrap();

    assert!(state.selected_band().is_none());
    let outcome = state.generate_note(&Catalogs::default()).unwrap();
    assert_eq!(outcome.score, 60);
    assert_eq!(outcome.band, physiodoc_scoring::SeverityBand::Moderate);
    assert_eq!(state.selected_band(), Some(outcome.band));

    let session = state.selected_session().unwrap();
    assert_eq!(session.score, Some(60));
    assert_eq!(session.note, outcome.note);
    assert!(session.note.contains("Diagnosis code: M54.5 – Kreuzschmerz"));
}

#[test]
fn generate_note_without_selection_is_a_precondition_violation() {
    let mut state = memory_state();
    assert!(matches!(
        state.generate_note(&Catalogs::default()),
        Err(AppError::NoPatientSelected)
    ));
}

#[test]
fn manual_note_edits_survive_until_regeneration() {
    let mut state = memory_state();
    register(&mut state, "Anna Muster", "M54.5");
    state.generate_note(&Catalogs::default()).unwrap();

    state.set_note("hand-polished wording").unwrap();
    assert_eq!(state.selected_session().unwrap().note, "hand-polished wording");

    let regenerated = state.generate_note(&Catalogs::default()).unwrap();
    assert_eq!(state.selected_session().unwrap().note, regenerated.note);
    assert_ne!(regenerated.note, "hand-polished wording");
}

#[test]
fn dictation_appends_to_the_active_section() {
    let mut state = memory_state();
    register(&mut state, "Anna Muster", "M54.5");

    state
        .append_dictation(Section::Anamnesis, "pain since monday")
        .unwrap();
    state
        .append_dictation(Section::Anamnesis, "worse when sitting")
        .unwrap();

    assert_eq!(
        state.selected_session().unwrap().anamnesis,
        "pain since monday worse when sitting"
    );
}

#[test]
fn score_history_reflects_generated_sessions() {
    let mut state = memory_state();
    register(&mut state, "Anna Muster", "M54.5");
    state.set_pain(8).unwrap();
    state.generate_note(&Catalogs::default()).unwrap();

    let history = state.score_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].score, 52);
}

#[test]
fn state_survives_a_reload_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");

    let mut state = AppState::open(&path).unwrap();
    register(&mut state, "Anna Muster", "M54.5 Kreuzschmerz");
    state.set_pain(7).unwrap();
    let outcome = state.generate_note(&Catalogs::default()).unwrap();
    assert!(outcome.persisted);

    let reloaded = AppState::open(&path).unwrap();
    assert_eq!(reloaded.patients().len(), 1);
    let patient = &reloaded.patients()[0];
    assert_eq!(patient.name, "Anna Muster");
    assert_eq!(patient.sessions[0].score, Some(outcome.score));
    assert_eq!(patient.sessions[0].note, outcome.note);
}
