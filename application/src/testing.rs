//! Scripted gateway shared by the use case and agent tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use triage_domain::Model;

pub const NURSE_ANSWER: &str = "\
1. Initial Impression: 58-year-old male, diaphoretic and anxious.
2. Chief Complaint (as you understand it): Crushing chest pain for 40 minutes.
3. Concerning Findings: Pain radiates to the left arm, HR 112.
4. Estimated Resource Needs: ECG, troponin, cardiology.
5. Recommended ESI Level: 2
6. Rationale: Possible acute coronary syndrome with ongoing pain.
7. Immediate Nursing Interventions:
- Obtain 12-lead ECG within 10 minutes
- Place on cardiac monitor
8. Additional Notes: History of hypertension.";

pub const PHYSICIAN_ANSWER: &str = "\
1. Clinical Assessment: High-risk chest pain concerning for STEMI.
2. Potential Diagnoses:
- Acute coronary syndrome
- Aortic dissection
3. ESI Level Recommendation: 2
4. Immediate Actions/Interventions:
- Aspirin 325 mg chewed
5. Diagnostic Studies:
- Serial troponins
6. Risk Assessment: High
7. Disposition Recommendation: Admit to cardiology";

pub const CONSULTANT_ANSWER: &str = "\
1. Specialist Impression: Presentation typical for ACS; dissection must be excluded.
2. Differential Considerations:
- Pulmonary embolism
3. ESI Level Evaluation: Agree with ESI 2
4. Specialized Recommendations:
- Bedside echo
5. Potential Pitfalls: Anchoring on ACS.
6. Additional Insights: None.";

pub const CONSENSUS_ANSWER: &str = "\
ESI Level: 2
Confidence: 90%
Clinical Justification: Ongoing chest pain with diaphoresis in a hypertensive patient.
Recommended Immediate Actions:
- 12-lead ECG within 10 minutes
- Aspirin 325 mg unless contraindicated
- Continuous cardiac monitoring";

/// One recorded model query
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: Model,
    pub system: String,
    pub prompt: String,
}

type Responder = dyn Fn(&str) -> Result<String, GatewayError> + Send + Sync;

/// Gateway answering each prompt through a closure and recording every call
pub struct ScriptedGateway {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    responder: Arc<Responder>,
}

impl ScriptedGateway {
    pub fn new(responder: impl Fn(&str) -> Result<String, GatewayError> + Send + Sync + 'static) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            responder: Arc::new(responder),
        }
    }

    /// Answers a full chest pain deliberation
    pub fn chest_pain() -> Self {
        Self::new(|prompt| Ok(chest_pain_answer(prompt)))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

/// Route a prompt to the canned answer of the phase it belongs to
pub fn chest_pain_answer(prompt: &str) -> String {
    if prompt.contains("an initial triage assessment") {
        NURSE_ANSWER.to_string()
    } else if prompt.contains("a detailed emergency physician assessment") {
        PHYSICIAN_ANSWER.to_string()
    } else if prompt.contains("a specialized medical consultant assessment") {
        CONSULTANT_ANSWER.to_string()
    } else if prompt.contains("DISCUSSION TRANSCRIPT:") {
        CONSENSUS_ANSWER.to_string()
    } else if let Some(idx) = prompt.rfind("as a") {
        format!("I agree with ESI 2. Speaking {}", &prompt[idx..])
    } else {
        "No comment.".to_string()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(ScriptedSession {
            model: model.clone(),
            system: system_prompt.to_string(),
            calls: Arc::clone(&self.calls),
            responder: Arc::clone(&self.responder),
        }))
    }
}

struct ScriptedSession {
    model: Model,
    system: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    responder: Arc<Responder>,
}

#[async_trait]
impl LlmSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: self.model.clone(),
            system: self.system.clone(),
            prompt: content.to_string(),
        });
        (self.responder)(content)
    }
}
