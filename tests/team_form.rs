//! Integration tests for the team form: submission gate, normalization, outcomes, preview.

use async_trait::async_trait;
use esports_arena_web::logic::FALLBACK_ERROR_MESSAGE;
use esports_arena_web::models::MAX_FIELD_LEN;
use esports_arena_web::{
    ApiFailure, FormMode, NewTeam, SubmitOutcome, TeamApi, TeamDraft, TeamError, TeamField,
    TeamForm, TeamRegistry,
};
use std::sync::Mutex;

/// Records every payload and answers with a fixed response.
struct RecordingApi {
    sent: Mutex<Vec<NewTeam>>,
    response: Result<String, ApiFailure>,
}

impl RecordingApi {
    fn answering(response: Result<String, ApiFailure>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            response,
        }
    }

    fn ok() -> Self {
        Self::answering(Ok("Team created successfully".to_string()))
    }

    fn sent(&self) -> Vec<NewTeam> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TeamApi for RecordingApi {
    async fn create_team(&self, team: &NewTeam) -> Result<String, ApiFailure> {
        self.sent.lock().unwrap().push(team.clone());
        self.response.clone()
    }
}

fn complete_draft() -> TeamDraft {
    TeamDraft {
        teamname: "Night Owls".to_string(),
        game: "Valorant".to_string(),
        role: "Duelist".to_string(),
        rank: "Diamond".to_string(),
        server: "Mumbai".to_string(),
        language: "English".to_string(),
        players: "a, b ,c".to_string(),
        requests: "Mic required".to_string(),
        participant_count: "5".to_string(),
        image: None,
    }
}

#[tokio::test]
async fn any_empty_field_sends_nothing() {
    for field in TeamField::ALL {
        let api = RecordingApi::ok();
        let mut form = TeamForm::from_draft(complete_draft());
        form.set_field(field, "");
        let before = form.clone();

        assert_eq!(form.submit(&api).await, SubmitOutcome::Skipped, "{field:?}");
        assert!(api.sent().is_empty(), "{field:?}");
        assert_eq!(form, before);
    }
}

#[tokio::test]
async fn image_is_not_part_of_the_gate() {
    let api = RecordingApi::ok();
    let mut form = TeamForm::from_draft(complete_draft());
    form.set_image(None);
    form.submit(&api).await;
    assert_eq!(api.sent().len(), 1);
}

#[tokio::test]
async fn complete_draft_sends_one_normalized_request() {
    let api = RecordingApi::ok();
    let mut draft = complete_draft();
    draft.image = Some("C:\\fakepath\\logo.png".to_string());
    let mut form = TeamForm::from_draft(draft);

    let outcome = form.submit(&api).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Created("Team created successfully".to_string())
    );
    let sent = api.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].players, vec!["a", "b", "c"]);
    assert_eq!(sent[0].participant_count, 5);
    assert_eq!(sent[0].teamname, "Night Owls");
    assert_eq!(sent[0].image.as_deref(), Some("C:\\fakepath\\logo.png"));
}

#[tokio::test]
async fn success_clears_the_form() {
    let api = RecordingApi::ok();
    let mut form = TeamForm::from_draft(complete_draft());
    form.open_preview();
    form.submit(&api).await;
    assert_eq!(form.draft(), &TeamDraft::default());
    assert_eq!(form.mode(), FormMode::Editing);
}

#[tokio::test]
async fn failure_keeps_draft_and_surfaces_server_message() {
    let api = RecordingApi::answering(Err(ApiFailure::with_message("Team name taken")));
    let mut form = TeamForm::from_draft(complete_draft());

    let outcome = form.submit(&api).await;

    assert_eq!(outcome, SubmitOutcome::Failed("Team name taken".to_string()));
    assert_eq!(form.draft(), &complete_draft());
    assert_eq!(api.sent().len(), 1);
}

#[tokio::test]
async fn failure_without_message_uses_fallback() {
    let api = RecordingApi::answering(Err(ApiFailure::default()));
    let mut form = TeamForm::from_draft(complete_draft());
    assert_eq!(
        form.submit(&api).await,
        SubmitOutcome::Failed(FALLBACK_ERROR_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn non_numeric_participant_count_is_rejected_locally() {
    let api = RecordingApi::ok();
    let mut form = TeamForm::from_draft(complete_draft());
    form.set_field(TeamField::ParticipantCount, "five");

    let outcome = form.submit(&api).await;

    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert!(api.sent().is_empty());
    assert_eq!(form.value(TeamField::ParticipantCount), "five");
}

#[tokio::test]
async fn registry_rejects_duplicate_team_names() {
    let registry = TeamRegistry::new();
    let mut first = TeamForm::from_draft(complete_draft());
    assert!(matches!(
        first.submit(&registry).await,
        SubmitOutcome::Created(_)
    ));

    let mut second = TeamForm::from_draft(TeamDraft {
        teamname: "night owls".to_string(),
        ..complete_draft()
    });
    assert_eq!(
        second.submit(&registry).await,
        SubmitOutcome::Failed("A team with this name already exists".to_string())
    );
    assert_eq!(registry.teams().unwrap().len(), 1);
}

#[tokio::test]
async fn oversized_field_is_invalid_and_sends_nothing() {
    let api = RecordingApi::ok();
    let long = "x".repeat(MAX_FIELD_LEN + 1);
    let mut form = TeamForm::from_draft(TeamDraft {
        requests: long.clone(),
        ..complete_draft()
    });

    assert_eq!(
        form.submit(&api).await,
        SubmitOutcome::Invalid("Requests must be at most 500 characters".to_string())
    );
    assert!(api.sent().is_empty());
    assert_eq!(form.value(TeamField::Requests), long);
}

#[test]
fn registry_rejects_oversized_player_names() {
    let registry = TeamRegistry::new();
    let mut team = complete_draft().normalize().unwrap();
    team.players.push("p".repeat(MAX_FIELD_LEN + 1));
    assert_eq!(
        registry.create(team),
        Err(TeamError::FieldTooLong {
            field: "Player name",
            max: MAX_FIELD_LEN
        })
    );
    assert!(registry.teams().unwrap().is_empty());
}

#[test]
fn full_registry_refuses_new_teams() {
    let registry = TeamRegistry::with_capacity(1);
    registry.create(complete_draft().normalize().unwrap()).unwrap();

    let other = TeamDraft {
        teamname: "Early Birds".to_string(),
        ..complete_draft()
    };
    let err = registry.create(other.normalize().unwrap()).unwrap_err();
    assert_eq!(err, TeamError::RegistryFull);
    assert!(!err.is_client_error());

    // Duplicates are still reported as such.
    assert_eq!(
        registry.create(complete_draft().normalize().unwrap()),
        Err(TeamError::DuplicateTeamName)
    );
    assert_eq!(registry.teams().unwrap().len(), 1);
}

#[test]
fn preview_uses_placeholders_for_empty_fields() {
    let mut form = TeamForm::new();
    form.set_field(TeamField::Game, "Valorant");
    let preview = form.preview();

    assert_eq!(preview.rows.len(), 9);
    assert_eq!(preview.value(TeamField::Game), Some("Valorant"));
    assert_eq!(preview.value(TeamField::Teamname), Some("No Team Name"));
    assert_eq!(
        preview.value(TeamField::ParticipantCount),
        Some("No players added")
    );
    // Previewing changes nothing.
    assert_eq!(form.mode(), FormMode::Editing);
    assert_eq!(form.value(TeamField::Teamname), "");
}

#[test]
fn preview_mode_toggles() {
    let mut form = TeamForm::new();
    form.open_preview();
    assert_eq!(form.mode(), FormMode::Previewing);
    form.close_preview();
    assert_eq!(form.mode(), FormMode::Editing);
}
