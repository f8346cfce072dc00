//! Stages of a cancellation run and the run state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// One of the three ordered steps of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    DocumentGeneration,
    Mapping,
    Confirmation,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 3] = [Stage::DocumentGeneration, Stage::Mapping, Stage::Confirmation];

    /// The general action named to the user when this stage fails.
    pub fn failed_action(&self) -> &'static str {
        match self {
            Stage::DocumentGeneration => "could not generate the cancellation document",
            Stage::Mapping => "could not map the cancellation to BiPRO XML",
            Stage::Confirmation => "could not submit the cancellation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::DocumentGeneration => write!(f, "document generation"),
            Stage::Mapping => write!(f, "mapping"),
            Stage::Confirmation => write!(f, "confirmation"),
        }
    }
}

/// State of a single pipeline run.
///
/// ```text
/// Idle -> GeneratingDocument -> DocumentReady -> MappingToStructuredText
///      -> StructuredTextReady -> SubmittingConfirmation -> Completed
/// any active state -> Failed { stage }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum PipelineState {
    Idle,
    GeneratingDocument,
    DocumentReady,
    MappingToStructuredText,
    StructuredTextReady,
    SubmittingConfirmation,
    Completed,
    Failed { stage: Stage },
}

impl PipelineState {
    /// The stage executing in this state, if any.
    pub fn active_stage(&self) -> Option<Stage> {
        match self {
            PipelineState::GeneratingDocument => Some(Stage::DocumentGeneration),
            PipelineState::MappingToStructuredText => Some(Stage::Mapping),
            PipelineState::SubmittingConfirmation => Some(Stage::Confirmation),
            _ => None,
        }
    }

    /// The state entered when `stage` starts.
    pub fn started(stage: Stage) -> Self {
        match stage {
            Stage::DocumentGeneration => PipelineState::GeneratingDocument,
            Stage::Mapping => PipelineState::MappingToStructuredText,
            Stage::Confirmation => PipelineState::SubmittingConfirmation,
        }
    }

    /// The state entered when `stage` succeeds.
    pub fn succeeded(stage: Stage) -> Self {
        match stage {
            Stage::DocumentGeneration => PipelineState::DocumentReady,
            Stage::Mapping => PipelineState::StructuredTextReady,
            Stage::Confirmation => PipelineState::Completed,
        }
    }
}

impl StateMachine for PipelineState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PipelineState::*;
        match (self, target) {
            (Idle, GeneratingDocument)
            | (GeneratingDocument, DocumentReady)
            | (DocumentReady, MappingToStructuredText)
            | (MappingToStructuredText, StructuredTextReady)
            | (StructuredTextReady, SubmittingConfirmation)
            | (SubmittingConfirmation, Completed) => true,
            (current, Failed { stage }) => current.active_stage() == Some(*stage),
            _ => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PipelineState::*;
        match self {
            Idle => vec![GeneratingDocument],
            GeneratingDocument => vec![
                DocumentReady,
                Failed {
                    stage: Stage::DocumentGeneration,
                },
            ],
            DocumentReady => vec![MappingToStructuredText],
            MappingToStructuredText => vec![
                StructuredTextReady,
                Failed {
                    stage: Stage::Mapping,
                },
            ],
            StructuredTextReady => vec![SubmittingConfirmation],
            SubmittingConfirmation => vec![
                Completed,
                Failed {
                    stage: Stage::Confirmation,
                },
            ],
            Completed | Failed { .. } => vec![],
        }
    }
}
