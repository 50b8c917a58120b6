//! The DTO catalog: every request, response, and variable shape the API
//! speaks, built on the [`codec`](crate::codec) core.

pub mod chat;
pub mod events;
pub mod execute_workflow;
pub mod execution;
pub mod function_call;
pub mod image;
pub mod pagination;
pub mod search;
pub mod variable;
pub mod workflow_error;
pub mod workflow_input;
pub mod workflow_output;

pub use chat::{ChatMessage, ChatRole};
pub use events::{
    NodeResultEventErrorOutput, NodeResultEventFunctionCallOutput, NodeResultEventOutput,
    NodeResultEventState, NodeResultEventStringOutput,
};
pub use execute_workflow::{
    ExecuteWorkflowRequest, ExecuteWorkflowResponse, WorkflowExecutionDetail, WorkflowResult,
    WorkflowResultFulfilled, WorkflowResultRejected,
};
pub use execution::{
    ExecutionArrayValue, ExecutionChatHistoryValue, ExecutionErrorValue,
    ExecutionFunctionCallValue, ExecutionJsonValue, ExecutionNumberValue,
    ExecutionSearchResultsValue, ExecutionStringValue, ExecutionValue,
};
pub use function_call::FunctionCall;
pub use image::Image;
pub use pagination::{DocumentIndexRead, EntityStatus, Paginated};
pub use search::{SearchResult, SearchResultDocument};
pub use variable::{
    ErrorVariableValue, JsonVariableValue, NumberVariableValue, StringVariableValue,
    VariableValue,
};
pub use workflow_error::{WorkflowError, WorkflowErrorCode};
pub use workflow_input::{
    WorkflowChatHistoryInput, WorkflowInput, WorkflowJsonInput, WorkflowNumberInput,
    WorkflowStringInput,
};
pub use workflow_output::{
    WorkflowOutput, WorkflowOutputArray, WorkflowOutputChatHistory, WorkflowOutputError,
    WorkflowOutputFunctionCall, WorkflowOutputImage, WorkflowOutputJson, WorkflowOutputNumber,
    WorkflowOutputSearchResults, WorkflowOutputString,
};
