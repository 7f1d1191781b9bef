//! Deliberate use case
//!
//! Orchestrates the three-phase triage deliberation:
//!
//! 1. **Initial Assessment**: each role assesses the conversation
//! 2. **Discussion**: each role responds to the others' assessments
//! 3. **Consensus**: one query over the whole discussion, normalized into a
//!    [`ConsensusResult`]
//!
//! Any model failure aborts the deliberation. A failing transcript sink does
//! not: the result is returned and the failure is logged.

use crate::agents::ClinicalAgent;
use crate::config::DeliberationParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, DeliberationEvent, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::transcript_sink::{NoTranscriptSink, TranscriptSink};
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use triage_domain::core::string::prefix_chars;
use triage_domain::{
    Assessment, ConsensusNormalizer, ConsensusResult, Conversation, DeliberationTranscript,
    DiscussionHistory, ModelOptions, Phase, Role, TriagePrompts, summarize_for_discussion,
};
use tracing::{debug, info, warn};

/// Characters of an assessment summary shown in progress lines
const PROGRESS_SUMMARY_CHARS: usize = 100;

/// Errors that can occur during a deliberation
#[derive(Error, Debug)]
pub enum DeliberationError {
    #[error("Model query failed: {0}")]
    ModelQuery(#[from] GatewayError),

    #[error("Agent task failed: {0}")]
    AgentTask(String),

    #[error("No agent configured for {0}")]
    MissingAgent(Role),
}

/// Input for the Deliberate use case
#[derive(Debug, Clone)]
pub struct DeliberationInput {
    pub conversation: Conversation,
    pub case_id: String,
}

impl DeliberationInput {
    pub fn new(conversation: Conversation, case_id: impl Into<String>) -> Self {
        Self {
            conversation,
            case_id: case_id.into(),
        }
    }
}

/// Everything a finished deliberation produced
#[derive(Debug, Clone)]
pub struct DeliberationOutcome {
    pub case_id: String,
    pub result: ConsensusResult,
    /// Initial assessments in protocol order
    pub assessments: Vec<Assessment>,
    pub history: DiscussionHistory,
    /// Where the transcript sink stored the discussion, if anywhere
    pub transcript_path: Option<PathBuf>,
}

impl DeliberationOutcome {
    pub fn assessment(&self, role: Role) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.role() == role)
    }

    /// Chief complaint as recorded by the triage nurse
    pub fn chief_complaint(&self) -> Option<&str> {
        self.assessment(Role::TriageNurse)
            .and_then(Assessment::chief_complaint)
    }
}

/// Use case for running a triage deliberation
pub struct DeliberateUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    agents: Vec<Arc<dyn ClinicalAgent>>,
    options: ModelOptions,
    params: DeliberationParams,
    consensus_examples: String,
    normalizer: ConsensusNormalizer,
    sink: Arc<dyn TranscriptSink>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> DeliberateUseCase<G> {
    pub fn new(gateway: Arc<G>, agents: Vec<Arc<dyn ClinicalAgent>>, options: ModelOptions) -> Self {
        Self {
            gateway,
            agents,
            options,
            params: DeliberationParams::default(),
            consensus_examples: String::new(),
            normalizer: ConsensusNormalizer::default(),
            sink: Arc::new(NoTranscriptSink),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_params(mut self, params: DeliberationParams) -> Self {
        self.params = params;
        self
    }

    /// Pre-rendered reference examples for the consensus system prompt
    pub fn with_consensus_examples(mut self, examples: impl Into<String>) -> Self {
        self.consensus_examples = examples.into();
        self
    }

    pub fn with_normalizer(mut self, normalizer: ConsensusNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_transcript_sink(mut self, sink: Arc<dyn TranscriptSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: DeliberationInput,
    ) -> Result<DeliberationOutcome, DeliberationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: DeliberationInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<DeliberationOutcome, DeliberationError> {
        let agents = self.agents_in_order()?;
        info!("Starting deliberation for {}", input.case_id);

        // Phase 1: Initial Assessment
        let assessments = if self.params.parallel_assessments {
            self.phase_assessment_parallel(&agents, &input.conversation, progress)
                .await?
        } else {
            self.phase_assessment(&agents, &input.conversation, progress)
                .await?
        };

        let mut history = DiscussionHistory::new();
        for assessment in &assessments {
            history.push(
                assessment.role(),
                format!("Initial assessment: {}", summarize_for_discussion(assessment)),
            );
        }

        // Phase 2: Discussion
        self.phase_critique(&agents, &input.conversation, &assessments, &mut history, progress)
            .await?;

        // Phase 3: Consensus
        let result = self
            .phase_consensus(&input.conversation, &history, progress)
            .await?;

        let transcript_path = self.save_transcript(&input.case_id, &history, &result);

        progress.on_progress(
            &format!(
                "Consensus reached: ESI Level {} with {}% confidence",
                result.esi_level, result.confidence
            ),
            Some(85),
        );
        progress.on_phase_complete(&Phase::Consensus);

        Ok(DeliberationOutcome {
            case_id: input.case_id,
            result,
            assessments,
            history,
            transcript_path,
        })
    }

    /// Agents sorted into protocol order; every role must be present
    fn agents_in_order(&self) -> Result<Vec<Arc<dyn ClinicalAgent>>, DeliberationError> {
        Role::ALL
            .iter()
            .map(|&role| {
                self.agents
                    .iter()
                    .find(|agent| agent.role() == role)
                    .cloned()
                    .ok_or(DeliberationError::MissingAgent(role))
            })
            .collect()
    }

    /// Phase 1: Query each role in protocol order
    async fn phase_assessment(
        &self,
        agents: &[Arc<dyn ClinicalAgent>],
        conversation: &Conversation,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<Assessment>, DeliberationError> {
        info!("Phase 1: Initial Assessment");
        progress.on_phase_start(&Phase::Assessment, agents.len());

        let mut assessments = Vec::with_capacity(agents.len());
        for (index, agent) in agents.iter().enumerate() {
            let role = agent.role();
            let (started, finished) = progress_marks(index);
            progress.on_progress(&started_message(role), Some(started));

            match agent.assess(conversation).await {
                Ok(assessment) => {
                    debug!("{} assessment: {}", role, assessment.summary());
                    progress.on_task_complete(&Phase::Assessment, role.display_name(), true);
                    progress.on_progress(&finished_message(&assessment), Some(finished));
                    assessments.push(assessment);
                }
                Err(e) => {
                    warn!("{} assessment failed: {}", role, e);
                    progress.on_task_complete(&Phase::Assessment, role.display_name(), false);
                    return Err(e.into());
                }
            }
        }

        progress.on_phase_complete(&Phase::Assessment);
        Ok(assessments)
    }

    /// Phase 1, concurrent: all roles at once, results kept in protocol order
    async fn phase_assessment_parallel(
        &self,
        agents: &[Arc<dyn ClinicalAgent>],
        conversation: &Conversation,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<Assessment>, DeliberationError> {
        info!("Phase 1: Initial Assessment (parallel)");
        progress.on_phase_start(&Phase::Assessment, agents.len());

        let mut join_set = JoinSet::new();

        for (index, agent) in agents.iter().enumerate() {
            let (started, _) = progress_marks(index);
            progress.on_progress(&started_message(agent.role()), Some(started));

            let agent = Arc::clone(agent);
            let conversation = conversation.clone();

            join_set.spawn(async move {
                let result = agent.assess(&conversation).await;
                (index, agent.role(), result)
            });
        }

        let mut slots: Vec<Option<Assessment>> = vec![None; agents.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, role, Ok(assessment))) => {
                    debug!("{} assessment: {}", role, assessment.summary());
                    progress.on_task_complete(&Phase::Assessment, role.display_name(), true);
                    let (_, finished) = progress_marks(index);
                    progress.on_progress(&finished_message(&assessment), Some(finished));
                    slots[index] = Some(assessment);
                }
                Ok((_, role, Err(e))) => {
                    warn!("{} assessment failed: {}", role, e);
                    progress.on_task_complete(&Phase::Assessment, role.display_name(), false);
                    return Err(e.into());
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                    return Err(DeliberationError::AgentTask(e.to_string()));
                }
            }
        }

        progress.on_phase_complete(&Phase::Assessment);
        slots
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| DeliberationError::AgentTask("assessment missing".to_string()))
    }

    /// Phase 2: Each role responds to the full set of assessments
    async fn phase_critique(
        &self,
        agents: &[Arc<dyn ClinicalAgent>],
        conversation: &Conversation,
        assessments: &[Assessment],
        history: &mut DiscussionHistory,
        progress: &dyn ProgressNotifier,
    ) -> Result<(), DeliberationError> {
        info!("Phase 2: Discussion");
        progress.on_progress("Agents are discussing ESI determination...", Some(75));
        progress.on_phase_start(&Phase::Critique, agents.len());

        for agent in agents {
            let role = agent.role();
            debug!("{} is responding to other assessments", role);
            match agent.critique(conversation, assessments).await {
                Ok(response) => {
                    progress.on_task_complete(&Phase::Critique, role.display_name(), true);
                    history.push(role, response);
                }
                Err(e) => {
                    warn!("{} critique failed: {}", role, e);
                    progress.on_task_complete(&Phase::Critique, role.display_name(), false);
                    return Err(e.into());
                }
            }
        }

        progress.on_phase_complete(&Phase::Critique);
        Ok(())
    }

    /// Phase 3: One consensus query, normalized
    async fn phase_consensus(
        &self,
        conversation: &Conversation,
        history: &DiscussionHistory,
        progress: &dyn ProgressNotifier,
    ) -> Result<ConsensusResult, DeliberationError> {
        info!("Phase 3: Consensus");
        progress.on_phase_start(&Phase::Consensus, 1);

        let model = &self.options.consensus_model;
        let response = match self
            .gateway
            .query(
                model,
                &TriagePrompts::consensus_system(&self.consensus_examples),
                &TriagePrompts::consensus_prompt(conversation.text(), history),
            )
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Consensus query failed: {}", e);
                progress.on_task_complete(&Phase::Consensus, Phase::Consensus.display_name(), false);
                return Err(e.into());
            }
        };

        self.conversation_logger.log(ConversationEvent::model_response(
            DeliberationEvent::ConsensusResponse,
            None,
            model,
            &response,
        ));

        let result = self
            .normalizer
            .normalize(&response)
            .with_discussion_summary(history.summary());

        self.conversation_logger
            .log(ConversationEvent::consensus_result(&result));

        progress.on_task_complete(&Phase::Consensus, Phase::Consensus.display_name(), true);
        Ok(result)
    }

    fn save_transcript(
        &self,
        case_id: &str,
        history: &DiscussionHistory,
        result: &ConsensusResult,
    ) -> Option<PathBuf> {
        let transcript =
            DeliberationTranscript::new(case_id, Local::now(), history.clone(), result.clone());
        match self.sink.write(&transcript) {
            Ok(Some(path)) => {
                info!("Full discussion saved to {}", path.display());
                Some(path)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to save discussion for {}: {}", case_id, e);
                None
            }
        }
    }
}

/// Progress percentages before and after the assessment at `index`
fn progress_marks(index: usize) -> (u8, u8) {
    let base = 15 + 20 * index as u8;
    (base, base + 10)
}

fn started_message(role: Role) -> String {
    match role {
        Role::TriageNurse => "Triage Nurse is analyzing the conversation...".to_string(),
        Role::EmergencyPhysician => "Emergency Physician is evaluating the case...".to_string(),
        Role::MedicalConsultant => "Medical Consultant is reviewing the case...".to_string(),
    }
}

fn finished_message(assessment: &Assessment) -> String {
    format!(
        "{}: {}...",
        assessment.role(),
        prefix_chars(assessment.summary(), PROGRESS_SUMMARY_CHARS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RoleAgent;
    use crate::ports::progress::FnProgress;
    use crate::ports::transcript_sink::SinkError;
    use crate::testing::{ScriptedGateway, chest_pain_answer};
    use std::sync::Mutex;
    use triage_domain::{EsiLevel, Model};

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<DeliberationTranscript>>);

    impl TranscriptSink for RecordingSink {
        fn write(&self, transcript: &DeliberationTranscript) -> Result<Option<PathBuf>, SinkError> {
            self.0.lock().unwrap().push(transcript.clone());
            Ok(Some(PathBuf::from("discussions/CASE-TEST.txt")))
        }
    }

    struct FailingSink;

    impl TranscriptSink for FailingSink {
        fn write(&self, _transcript: &DeliberationTranscript) -> Result<Option<PathBuf>, SinkError> {
            Err(SinkError::Io(std::io::Error::other("disk full")))
        }
    }

    fn options() -> ModelOptions {
        ModelOptions::new(Model::Gpt4oMini).with_consensus_model(Model::O1Mini)
    }

    fn use_case(gateway: Arc<ScriptedGateway>) -> DeliberateUseCase<ScriptedGateway> {
        let options = options();
        let agents = Role::ALL
            .iter()
            .map(|&role| {
                Arc::new(RoleAgent::new(role, Arc::clone(&gateway), &options))
                    as Arc<dyn ClinicalAgent>
            })
            .collect();
        DeliberateUseCase::new(gateway, agents, options)
    }

    fn input() -> DeliberationInput {
        let conversation = Conversation::new(
            "Nurse: What brings you in today?\nPatient: Crushing chest pain for 40 minutes, I'm sweating.",
        )
        .unwrap();
        DeliberationInput::new(conversation, "CASE-20250101120000")
    }

    #[tokio::test]
    async fn test_chest_pain_deliberation() {
        let gateway = Arc::new(ScriptedGateway::chest_pain());
        let sink = Arc::new(RecordingSink::default());
        let use_case = use_case(Arc::clone(&gateway)).with_transcript_sink(sink.clone());

        let outcome = use_case.execute(input()).await.unwrap();

        assert_eq!(outcome.result.esi_level, EsiLevel::Two);
        assert_eq!(outcome.result.confidence, 90);
        assert_eq!(outcome.result.recommended_actions.len(), 3);
        assert_eq!(
            outcome.chief_complaint(),
            Some("Crushing chest pain for 40 minutes.")
        );
        assert_eq!(
            outcome.transcript_path,
            Some(PathBuf::from("discussions/CASE-TEST.txt"))
        );

        let entries = outcome.history.entries();
        assert_eq!(entries.len(), 6);
        assert_eq!(
            entries[0].content,
            "Initial assessment: ESI Level: 2. Rationale: Possible acute coronary syndrome with ongoing pain...."
        );
        assert!(entries[5].content.contains("a medical consultant"));
        assert!(outcome.result.discussion_summary.starts_with("Triage Nurse: Initial assessment:"));

        let calls = gateway.calls();
        assert_eq!(calls.len(), 7);
        assert_eq!(calls[6].model, Model::O1Mini);
        assert!(calls[..6].iter().all(|c| c.model == Model::Gpt4oMini));

        let written = sink.0.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].case_id, "CASE-20250101120000");
        assert_eq!(written[0].result, outcome.result);
    }

    #[tokio::test]
    async fn test_resuscitation_case_reaches_level_one() {
        let gateway = Arc::new(ScriptedGateway::new(|prompt| {
            Ok(if prompt.contains("DISCUSSION TRANSCRIPT:") {
                "ESI Level: 1\nConfidence: 95%\n...".to_string()
            } else {
                chest_pain_answer(prompt)
            })
        }));
        let conversation = Conversation::new(
            "65yo male, crushing chest pain radiating to left arm, started 20 minutes ago, HR 130, BP 88/60",
        )
        .unwrap();

        let outcome = use_case(Arc::clone(&gateway))
            .execute(DeliberationInput::new(conversation, "CASE-20250101120500"))
            .await
            .unwrap();

        assert_eq!(outcome.result.esi_level, EsiLevel::One);
        assert_eq!(outcome.result.confidence, 95);
        assert_eq!(outcome.result.justification, "No justification provided.");

        let actions = &outcome.result.recommended_actions;
        assert_eq!(actions.len(), 5);
        assert_eq!(
            actions[0],
            "Immediate intervention by emergency physician for presenting condition"
        );
        assert!(actions.iter().any(|a| a.contains("cardiac monitoring")));
        assert!(actions[4].contains("ICU admission"));

        let calls = gateway.calls();
        assert_eq!(calls.len(), 7);
        assert!(calls[0].prompt.contains("HR 130, BP 88/60"));
        assert!(calls[6].prompt.contains("crushing chest pain radiating to left arm"));
    }

    #[derive(Default)]
    struct RecordingLogger(Mutex<Vec<ConversationEvent>>);

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[tokio::test]
    async fn test_consensus_events_logged() {
        let gateway = Arc::new(ScriptedGateway::chest_pain());
        let logger = Arc::new(RecordingLogger::default());
        use_case(gateway)
            .with_conversation_logger(logger.clone())
            .execute(input())
            .await
            .unwrap();

        let events = logger.0.lock().unwrap();
        let kinds: Vec<DeliberationEvent> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DeliberationEvent::ConsensusResponse,
                DeliberationEvent::ConsensusResult
            ]
        );
        assert_eq!(events[0].payload["model"], Model::O1Mini.to_string());
        assert!(events[0].payload.get("role").is_none());
        assert_eq!(events[1].payload["confidence"], 90);
        assert_eq!(events[1].payload["actions"], 3);
    }

    #[tokio::test]
    async fn test_roles_speak_in_protocol_order() {
        let gateway = Arc::new(ScriptedGateway::chest_pain());
        let outcome = use_case(Arc::clone(&gateway)).execute(input()).await.unwrap();

        let speakers: Vec<Role> = outcome.history.entries().iter().map(|e| e.role).collect();
        assert_eq!(
            speakers,
            [Role::ALL.as_slice(), Role::ALL.as_slice()].concat()
        );

        let prompts: Vec<String> = gateway.calls().into_iter().map(|c| c.prompt).collect();
        assert!(prompts[0].contains("an initial triage assessment"));
        assert!(prompts[1].contains("a detailed emergency physician assessment"));
        assert!(prompts[2].contains("a specialized medical consultant assessment"));
        assert!(prompts[5].ends_with("as a medical consultant."));
        assert!(prompts[6].contains("DISCUSSION TRANSCRIPT:"));
    }

    #[tokio::test]
    async fn test_progress_messages() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let progress = FnProgress(move |msg: &str, pct: Option<u8>| {
            recorder.lock().unwrap().push((msg.to_string(), pct));
        });

        let gateway = Arc::new(ScriptedGateway::chest_pain());
        use_case(gateway)
            .execute_with_progress(input(), &progress)
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        let percents: Vec<Option<u8>> = seen.iter().map(|(_, p)| *p).collect();
        assert_eq!(
            percents,
            [15, 25, 35, 45, 55, 65, 75, 85].map(Some).to_vec()
        );
        assert_eq!(seen[0].0, "Triage Nurse is analyzing the conversation...");
        assert!(seen[1].0.starts_with("Triage Nurse: ESI Level: 2. Rationale:"));
        assert!(seen[1].0.ends_with("..."));
        assert_eq!(seen[2].0, "Emergency Physician is evaluating the case...");
        assert_eq!(seen[4].0, "Medical Consultant is reviewing the case...");
        assert_eq!(seen[6].0, "Agents are discussing ESI determination...");
        assert_eq!(seen[7].0, "Consensus reached: ESI Level 2 with 90% confidence");
    }

    #[tokio::test]
    async fn test_parallel_assessments_keep_order() {
        let gateway = Arc::new(ScriptedGateway::chest_pain());
        let outcome = use_case(Arc::clone(&gateway))
            .with_params(DeliberationParams::default().with_parallel_assessments(true))
            .execute(input())
            .await
            .unwrap();

        let roles: Vec<Role> = outcome.assessments.iter().map(|a| a.role()).collect();
        assert_eq!(roles, Role::ALL.to_vec());
        let speakers: Vec<Role> = outcome.history.entries()[..3].iter().map(|e| e.role).collect();
        assert_eq!(speakers, Role::ALL.to_vec());
        assert_eq!(outcome.result.esi_level, EsiLevel::Two);
        assert_eq!(gateway.calls().len(), 7);
    }

    #[tokio::test]
    async fn test_consensus_failure_is_fatal_and_skips_sink() {
        let gateway = Arc::new(ScriptedGateway::new(|prompt| {
            if prompt.contains("DISCUSSION TRANSCRIPT:") {
                Err(GatewayError::Api {
                    status: 503,
                    body: "overloaded".into(),
                })
            } else {
                Ok(chest_pain_answer(prompt))
            }
        }));
        let sink = Arc::new(RecordingSink::default());
        let err = use_case(gateway)
            .with_transcript_sink(sink.clone())
            .execute(input())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DeliberationError::ModelQuery(GatewayError::Api { status: 503, .. })
        ));
        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_assessment_failure_stops_before_discussion() {
        let gateway = Arc::new(ScriptedGateway::new(|prompt| {
            if prompt.contains("a detailed emergency physician assessment") {
                Err(GatewayError::ConnectionError("reset".into()))
            } else {
                Ok(chest_pain_answer(prompt))
            }
        }));
        let err = use_case(Arc::clone(&gateway)).execute(input()).await.unwrap_err();
        assert!(matches!(err, DeliberationError::ModelQuery(_)));
        assert_eq!(gateway.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_sink_failure_keeps_result() {
        let gateway = Arc::new(ScriptedGateway::chest_pain());
        let outcome = use_case(gateway)
            .with_transcript_sink(Arc::new(FailingSink))
            .execute(input())
            .await
            .unwrap();
        assert_eq!(outcome.result.esi_level, EsiLevel::Two);
        assert_eq!(outcome.transcript_path, None);
    }

    #[tokio::test]
    async fn test_unparseable_consensus_falls_back() {
        let gateway = Arc::new(ScriptedGateway::new(|prompt| {
            if prompt.contains("DISCUSSION TRANSCRIPT:") {
                Ok("I am not able to decide.".to_string())
            } else {
                Ok(chest_pain_answer(prompt))
            }
        }));
        let outcome = use_case(gateway).execute(input()).await.unwrap();
        assert_eq!(outcome.result.esi_level, EsiLevel::Three);
        assert_eq!(outcome.result.confidence, 80);
        assert_eq!(outcome.result.justification, "No justification provided.");
        assert_eq!(outcome.result.recommended_actions.len(), 5);
    }

    #[tokio::test]
    async fn test_missing_agent() {
        let gateway = Arc::new(ScriptedGateway::chest_pain());
        let options = options();
        let agents: Vec<Arc<dyn ClinicalAgent>> = vec![Arc::new(RoleAgent::new(
            Role::TriageNurse,
            Arc::clone(&gateway),
            &options,
        ))];
        let err = DeliberateUseCase::new(gateway, agents, options)
            .execute(input())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DeliberationError::MissingAgent(Role::EmergencyPhysician)
        ));
    }
}
