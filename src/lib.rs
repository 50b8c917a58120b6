//! # Tapestry Rust client
//!
//! A typed client for the Tapestry workflow & LLM-orchestration API: request
//! and response models, JSON (de)serialization with lossless round trips, and
//! thin synchronous and asynchronous HTTP transports.
//!
//! ## Features
//!
//! - **Closed tagged unions**: every one-of-N wire shape is a Rust enum; the
//!   compiler checks your match arms instead of a runtime type tag
//! - **Forward compatible by default**: discriminator tags and object members
//!   added server-side after this build decode into explicit `Unknown`
//!   variants and unknown-field bags, and re-encode untouched
//! - **Loud boundary validation**: structural checks for externally-sourced
//!   JSON that name the offending field path
//! - **Sync & Async transports**: [`BlockingClient`] and [`Client`] over
//!   reqwest, sharing one configuration surface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tapestry_client::prelude::*;
//!
//! # async fn run() -> Result<(), tapestry_client::ClientError> {
//! let client = Client::from_api_key("my-api-key")?;
//!
//! let request = ExecuteWorkflowRequest {
//!     workflow_deployment_name: Some("summarizer".to_owned()),
//!     inputs: vec![WorkflowInput::string("text", "Summarize this document...")],
//!     ..Default::default()
//! };
//!
//! let response = client.execute_workflow(&request).await?;
//! match response.data {
//!     WorkflowResult::Fulfilled(fulfilled) => {
//!         for output in fulfilled.outputs {
//!             println!("{:?}", output);
//!         }
//!     }
//!     WorkflowResult::Rejected(rejected) => {
//!         eprintln!("workflow failed: {}", rejected.error.message);
//!     }
//!     WorkflowResult::Unknown(raw) => {
//!         eprintln!("server sent unrecognized result state `{}`", raw.tag);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`codec`]: tagged-union registries, the [`Tagged`](codec::Tagged)
//!   envelope, and the [`Validate`](codec::Validate) boundary
//! - [`types`]: the DTO catalog
//! - [`transport`]: the HTTP clients
//! - [`prelude`]: commonly used types (import with
//!   `use tapestry_client::prelude::*`)

// ============================================================================
// Modules
// ============================================================================

pub mod codec;
pub mod environment;
pub mod error;
pub mod transport;
pub mod types;

// ============================================================================
// Public Re-exports - Granular Imports
// ============================================================================

pub use codec::{Tagged, TaggedUnion, UnknownVariant, Validate};
pub use environment::Environment;
pub use error::{ClientError, CodecError};
pub use transport::{BlockingClient, Client, ClientOptions, ListDocumentIndexesRequest};
pub use types::{
    ChatMessage, ChatRole, DocumentIndexRead, ExecuteWorkflowRequest, ExecuteWorkflowResponse,
    ExecutionValue, FunctionCall, Paginated, SearchResult, VariableValue, WorkflowError,
    WorkflowExecutionDetail, WorkflowInput, WorkflowOutput, WorkflowResult,
};

// ============================================================================
// Prelude Module - Convenient Bulk Imports
// ============================================================================

/// Everything you need for typical SDK usage.
///
/// # Example
/// ```rust
/// use tapestry_client::prelude::*;
/// ```
pub mod prelude {
    pub use super::{
        BlockingClient,
        ChatMessage,
        ChatRole,
        // Transport
        Client,
        ClientError,
        ClientOptions,
        Environment,
        ExecuteWorkflowRequest,
        ExecuteWorkflowResponse,
        // Values
        ExecutionValue,
        ListDocumentIndexesRequest,
        Paginated,
        // Codec
        Tagged,
        TaggedUnion,
        Validate,
        VariableValue,
        WorkflowExecutionDetail,
        WorkflowInput,
        WorkflowOutput,
        WorkflowResult,
    };
}

// ============================================================================
// Library Metadata
// ============================================================================

/// The version of this crate, sent in the `X-SDK-Version` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate, sent in the `X-SDK-Name` header.
pub const NAME: &str = env!("CARGO_PKG_NAME");
